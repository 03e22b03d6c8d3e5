//! # Existence Map Tests

use super::*;

#[test]
fn test_unmasked_interior_zones_exist() {
    let map = ExistenceMap::build(4, 3, None);
    assert_eq!(map.len(), 4 * 3 + 4 + 1);
    assert_eq!(map.zone_count(), 3 * 2);
    for j in 0..4 {
        for i in 0..4 {
            let expected = i >= 1 && (1..3).contains(&j);
            assert_eq!(map.exists(i + j * 4), expected, "zone ({i}, {j})");
        }
    }
}

#[test]
fn test_masked_point_removes_four_zones() {
    // Centre point of a 4x4 mesh
    let mut mask = vec![false; 16];
    mask[5] = true;
    let map = ExistenceMap::build(4, 4, Some(&mask));

    let unmasked = ExistenceMap::build(4, 4, None);
    assert_eq!(unmasked.zone_count() - map.zone_count(), 4);
    for zone in [5, 6, 9, 10] {
        assert!(unmasked.exists(zone));
        assert!(!map.exists(zone));
    }
    assert!(map.exists(7));
    assert!(map.exists(15));
}

#[test]
fn test_masked_corner_point_removes_one_zone() {
    let mut mask = vec![false; 9];
    mask[0] = true;
    let map = ExistenceMap::build(3, 3, Some(&mask));
    assert_eq!(map.zone_count(), 3);
    assert!(!map.exists(4));
}

#[test]
fn test_out_of_range_zone_does_not_exist() {
    let map = ExistenceMap::build(2, 2, None);
    assert!(!map.exists(1000));
    assert_eq!(map.stride(), 2);
}
