//! # Level and Chunk Tests

use super::*;

#[test]
fn test_level_pair_modes() {
    let line = LevelPair::line(2.5).unwrap();
    assert_eq!(line.mode(), ContourMode::Lines);
    assert_eq!(line.lower(), line.upper());
    assert!(!line.is_filled());

    let band = LevelPair::new(-1.0, 1.0).unwrap();
    assert!(band.is_filled());
    assert_eq!(band.level(false), -1.0);
    assert_eq!(band.level(true), 1.0);
}

#[test]
fn test_level_pair_rejects_bad_input() {
    assert_eq!(
        LevelPair::new(2.0, 1.0).unwrap_err(),
        ContourError::InvalidLevels {
            lower: 2.0,
            upper: 1.0
        }
    );
    assert!(LevelPair::new(f64::NAN, 1.0).is_err());
    assert!(LevelPair::line(f64::INFINITY).is_err());
}

#[test]
fn test_resolve_clamps_to_zone_extent() {
    let chunks = ChunkSizes::new(100, 3);
    assert_eq!(chunks.resolve(10, 10, ContourMode::Filled), (9, 3));
    assert_eq!(ChunkSizes::NONE.resolve(4, 6, ContourMode::Filled), (3, 5));
    assert!(ChunkSizes::NONE.is_none());
    assert!(ChunkSizes::default().is_none());
}

#[test]
fn test_lines_ignore_chunking() {
    let chunks = ChunkSizes::new(1, 1);
    assert_eq!(chunks.resolve(5, 5, ContourMode::Lines), (4, 4));
}

#[test]
fn test_from_counts() {
    let chunks = ChunkSizes::from_counts(11, 21, 2, 4).unwrap();
    assert_eq!(chunks, ChunkSizes::new(5, 5));

    // More chunks than zones collapses to one zone per chunk
    let chunks = ChunkSizes::from_counts(3, 3, 10, 10).unwrap();
    assert_eq!(chunks, ChunkSizes::new(1, 1));

    assert!(ChunkSizes::from_counts(3, 3, 0, 1).unwrap_err().is_invalid_input());
}

#[test]
fn test_from_total_count_puts_more_chunks_on_longer_axis() {
    let wide = ChunkSizes::from_total_count(21, 5, 8).unwrap();
    // 8 = 2 x 4: four chunks across the 20 x-zones, two across the 4 y-zones
    assert_eq!(wide, ChunkSizes::new(5, 2));

    let tall = ChunkSizes::from_total_count(5, 21, 8).unwrap();
    assert_eq!(tall, ChunkSizes::new(2, 5));

    let single = ChunkSizes::from_total_count(5, 5, 1).unwrap();
    assert_eq!(single, ChunkSizes::new(4, 4));

    assert!(ChunkSizes::from_total_count(5, 5, 0).is_err());
}

#[test]
fn test_closest_factors() {
    assert_eq!(closest_factors(1), (1, 1));
    assert_eq!(closest_factors(7), (1, 7));
    assert_eq!(closest_factors(12), (3, 4));
    assert_eq!(closest_factors(16), (4, 4));
}
