//! # Path Assembly Tests

use super::*;
use crate::existence::ExistenceMap;
use crate::levels::ContourMode;
use crate::mesh::QuadMesh;
use crate::trace::{trace_points, PointKind, PointTag};
use approx::assert_relative_eq;

fn tag(kind: PointKind) -> PointTag {
    PointTag {
        kind,
        slit_start: false,
    }
}

fn points(coords: &[(f64, f64)]) -> Vec<DVec2> {
    coords.iter().map(|&(x, y)| DVec2::new(x, y)).collect()
}

#[test]
fn test_closed_line_gets_close_code() {
    let pts = points(&[(1.0, 0.5), (1.5, 1.0), (1.0, 1.5), (0.5, 1.0), (1.0, 0.5)]);
    let tags = vec![tag(PointKind::ZoneCut); 5];
    let path = assemble_path(&pts, &tags, ContourMode::Lines).unwrap();
    assert_eq!(path.vertices, pts);
    assert_eq!(
        path.codes,
        vec![
            PathCode::Move,
            PathCode::Line,
            PathCode::Line,
            PathCode::Line,
            PathCode::Close
        ]
    );
    assert!(path.is_closed());
    assert_relative_eq!(path.signed_area(), 0.5);
}

#[test]
fn test_open_line_stays_open() {
    let pts = points(&[(0.5, 0.0), (0.5, 1.0), (0.5, 2.0)]);
    let tags = vec![tag(PointKind::ZoneCut); 3];
    let path = assemble_path(&pts, &tags, ContourMode::Lines).unwrap();
    assert_eq!(path.codes, vec![PathCode::Move, PathCode::Line, PathCode::Line]);
    assert!(!path.is_closed());
}

#[test]
fn test_filled_always_closes() {
    let pts = points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
    let tags = vec![tag(PointKind::Boundary); 3];
    let path = assemble_path(&pts, &tags, ContourMode::Filled).unwrap();
    assert_eq!(path.codes.last(), Some(&PathCode::Close));
}

#[test]
fn test_slit_points_are_dropped() {
    // Outer curve interrupted by a slit excursion that returns to (2, 0)
    let pts = points(&[
        (0.0, 0.0),
        (2.0, 0.0),
        (2.0, 1.0),
        (2.0, 0.0),
        (2.0, 2.0),
        (0.0, 0.0),
    ]);
    let mut tags = vec![
        tag(PointKind::Boundary),
        tag(PointKind::Boundary),
        tag(PointKind::SlitUp),
        tag(PointKind::Boundary),
        tag(PointKind::Boundary),
        tag(PointKind::Boundary),
    ];
    tags[1].slit_start = true;
    let path = assemble_path(&pts, &tags, ContourMode::Filled).unwrap();
    assert_eq!(
        path.vertices,
        points(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 0.0)])
    );
    assert_eq!(path.subpaths().len(), 1);
}

#[test]
fn test_empty_stream_gives_empty_path() {
    let path = assemble_path(&[], &[], ContourMode::Lines).unwrap();
    assert!(path.is_empty());
    assert!(!path.is_closed());
}

/// A plateau with a spike: the outer square and the diamond-shaped hole
/// come out as two sub-paths of one path.
#[test]
fn test_hole_becomes_second_subpath() {
    let mut z = vec![2.0; 25];
    z[12] = 10.0;
    let mesh = QuadMesh::from_values(5, 5, z).unwrap();
    let existence = ExistenceMap::build(5, 5, None);
    let levels = LevelPair::new(1.0, 5.0).unwrap();
    let raw = trace_points(&mesh, &existence, levels, (4, 4)).unwrap();

    let (pts, tags) = raw.curves().next().unwrap();
    let path = assemble_path(pts, tags, ContourMode::Filled).unwrap();
    assert_eq!(path.len(), 22);

    let subpaths = path.subpaths();
    assert_eq!(subpaths.len(), 2);
    assert_eq!(subpaths[0].len(), 17);
    assert_eq!(subpaths[0][0], DVec2::new(0.0, 0.0));
    assert_eq!(subpaths[0][16], DVec2::new(0.0, 0.0));
    assert_eq!(
        subpaths[1],
        points(&[(2.0, 1.375), (1.375, 2.0), (2.0, 2.625), (2.625, 2.0), (2.0, 1.375)]).as_slice()
    );

    assert_eq!(path.codes[16], PathCode::Close);
    assert_eq!(path.codes[17], PathCode::Move);
    assert_eq!(path.codes[21], PathCode::Close);

    // Outer square counter-clockwise, hole clockwise
    assert_relative_eq!(path.signed_area(), 16.0 - 0.78125, epsilon = 1e-12);
}

#[test]
fn test_path_code_values() {
    assert_eq!(PathCode::Move.as_u8(), 1);
    assert_eq!(PathCode::Line.as_u8(), 2);
    assert_eq!(PathCode::Close.as_u8(), 79);
}

#[test]
fn test_contour_set_counts() {
    let path = ContourPath {
        vertices: points(&[(0.0, 0.0), (1.0, 1.0)]),
        codes: vec![PathCode::Move, PathCode::Line],
    };
    let set = ContourSet {
        levels: LevelPair::line(0.5).unwrap(),
        paths: vec![path.clone(), path],
    };
    assert_eq!(set.len(), 2);
    assert_eq!(set.point_count(), 4);
    assert_eq!((&set).into_iter().count(), 2);
}
