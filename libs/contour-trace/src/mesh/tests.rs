//! # Mesh Tests
//!
//! Construction, validation and accessors of `QuadMesh`.

use super::*;

#[test]
fn test_from_values_uses_index_coordinates() {
    let mesh = QuadMesh::from_values(3, 2, vec![0.0; 6]).unwrap();
    assert_eq!(mesh.x(), &[0.0, 1.0, 2.0, 0.0, 1.0, 2.0]);
    assert_eq!(mesh.y(), &[0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
    assert_eq!(mesh.point(5), DVec2::new(2.0, 1.0));
}

#[test]
fn test_from_axes_expands_grid() {
    let mesh = QuadMesh::from_axes(&[-1.0, 1.0], &[0.0, 5.0, 10.0], vec![0.0; 6]).unwrap();
    assert_eq!(mesh.nx(), 2);
    assert_eq!(mesh.ny(), 3);
    assert_eq!(mesh.point(3), DVec2::new(1.0, 5.0));
    let (min, max) = mesh.bounding_box();
    assert_eq!(min, DVec2::new(-1.0, 0.0));
    assert_eq!(max, DVec2::new(1.0, 10.0));
}

#[test]
fn test_rejects_too_few_points() {
    let err = QuadMesh::from_values(2, 1, vec![0.0; 2]).unwrap_err();
    assert_eq!(err, ContourError::InvalidDimensions { nx: 2, ny: 1 });
    assert!(err.is_invalid_input());
}

#[test]
fn test_rejects_mismatched_lengths() {
    let err = QuadMesh::new(2, 2, vec![0.0; 4], vec![0.0; 3], vec![0.0; 4]).unwrap_err();
    assert_eq!(
        err,
        ContourError::LengthMismatch {
            name: "y",
            expected: 4,
            actual: 3
        }
    );

    let err = QuadMesh::from_axes(&[0.0, 1.0], &[0.0, 1.0], vec![0.0; 5]).unwrap_err();
    assert!(matches!(err, ContourError::LengthMismatch { name: "z", .. }));
}

#[test]
fn test_mask_length_is_checked() {
    let mesh = QuadMesh::from_values(2, 2, vec![0.0; 4]).unwrap();
    let err = mesh.with_mask(vec![false; 3]).unwrap_err();
    assert!(matches!(err, ContourError::LengthMismatch { name: "mask", .. }));
}

#[test]
fn test_z_range_skips_masked_points() {
    let mesh = QuadMesh::from_values(2, 2, vec![1.0, 2.0, 3.0, 100.0])
        .unwrap()
        .with_mask(vec![false, false, false, true])
        .unwrap();
    assert_eq!(mesh.z_range(), Some((1.0, 3.0)));

    let all_masked = QuadMesh::from_values(2, 2, vec![1.0; 4])
        .unwrap()
        .with_mask(vec![true; 4])
        .unwrap();
    assert_eq!(all_masked.z_range(), None);
}
