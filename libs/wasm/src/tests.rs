//! Tests for the WASM-facing tracing helpers.

use super::*;

/// Point-indexed coordinates for an `nx` by `ny` unit grid.
fn grid(nx: usize, ny: usize) -> (Vec<f64>, Vec<f64>) {
    let x = (0..nx * ny).map(|k| (k % nx) as f64).collect();
    let y = (0..nx * ny).map(|k| (k / nx) as f64).collect();
    (x, y)
}

const PEAK: [f64; 9] = [0.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 0.0];

#[rustfmt::skip]
const RAMP: [f64; 12] = [
    0.0, 1.0, 2.0, 3.0,
    0.0, 1.0, 2.0, 3.0,
    0.0, 1.0, 2.0, 3.0,
];

/// A closed diamond around the peak flattens into one path.
#[test]
fn lines_flatten_into_buffers() {
    let (x, y) = grid(3, 3);
    let handle = trace_lines_internal(3, 3, &x, &y, &PEAK, &[], 1.0).expect("trace succeeds");

    assert_eq!(handle.path_count(), 1);
    assert_eq!(handle.vertex_count(), 5);
    assert_eq!(handle.offset_buffer(), &[0, 5]);
    assert_eq!(handle.code_buffer(), &[1, 2, 2, 2, 79]);
    assert_eq!(handle.vertex_buffer().len(), 10);
    assert_eq!(handle.lower(), 1.0);
    assert_eq!(handle.upper(), 1.0);

    // Closed: last vertex repeats the first
    let v = handle.vertex_buffer();
    assert_eq!((v[0], v[1]), (v[8], v[9]));
}

#[test]
fn lines_outside_range_are_empty() {
    let (x, y) = grid(3, 3);
    let handle = trace_lines_internal(3, 3, &x, &y, &PEAK, &[], 7.0).expect("trace succeeds");
    assert!(handle.is_empty());
    assert_eq!(handle.offset_buffer(), &[0]);
    assert!(handle.vertex_buffer().is_empty());
}

#[test]
fn filled_band_is_closed() {
    let (x, y) = grid(4, 3);
    let handle = trace_filled_internal(4, 3, &x, &y, &RAMP, &[], 0.5, 2.5, 0, 0)
        .expect("trace succeeds");

    assert_eq!(handle.path_count(), 1);
    assert_eq!(handle.vertex_count(), 11);
    let codes = handle.code_buffer();
    assert_eq!(codes[0], 1);
    assert_eq!(codes[10], 79);
    for &value in handle.vertex_buffer() {
        assert!(value.is_finite(), "Vertex value should be finite");
    }
}

/// Chunk sizes split one band polygon into one path per chunk.
#[test]
fn filled_chunks_give_one_path_each() {
    let (x, y) = grid(5, 5);
    let z = vec![1.5; 25];
    let handle = trace_filled_internal(5, 5, &x, &y, &z, &[], 1.0, 2.0, 2, 2)
        .expect("trace succeeds");

    assert_eq!(handle.path_count(), 4);
    let offsets = handle.offset_buffer();
    assert_eq!(offsets.len(), 5);
    assert!(offsets.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(offsets[4] as usize * 2, handle.vertex_buffer().len());
}

/// Non-zero mask bytes knock out the zones around the masked point.
#[test]
fn mask_bytes_remove_zones() {
    let (x, y) = grid(4, 4);
    let z = vec![1.5; 16];
    let mut mask = vec![0u8; 16];
    mask[5] = 1;

    let unmasked = trace_filled_internal(4, 4, &x, &y, &z, &[], 1.0, 2.0, 0, 0)
        .expect("trace succeeds");
    let masked = trace_filled_internal(4, 4, &x, &y, &z, &mask, 1.0, 2.0, 0, 0)
        .expect("trace succeeds");

    assert_eq!(masked.path_count(), 1);
    assert_ne!(masked.vertex_buffer(), unmasked.vertex_buffer());
}

#[test]
fn mismatched_arrays_are_invalid_input() {
    let (x, y) = grid(3, 3);
    let err = trace_lines_internal(3, 3, &x, &y, &PEAK[..8], &[], 1.0).unwrap_err();
    assert!(err.is_invalid_input());

    let err = trace_lines_internal(3, 3, &x, &y, &PEAK, &[0, 1], 1.0).unwrap_err();
    let diagnostic = Diagnostic::from(err);
    assert!(diagnostic.is_invalid_input());
    assert!(diagnostic.message().contains("mask"));
}

#[test]
fn degenerate_band_is_rejected() {
    let (x, y) = grid(4, 3);
    let err = trace_filled_internal(4, 3, &x, &y, &RAMP, &[], 2.0, 2.0, 0, 0).unwrap_err();
    let diagnostic = Diagnostic::from(&err);
    assert_eq!(diagnostic.kind(), FailureKind::InvalidInput);
    assert!(!diagnostic.message().is_empty());
}

#[test]
fn handle_serializes_to_json() {
    let (x, y) = grid(3, 3);
    let handle = trace_lines_internal(3, 3, &x, &y, &PEAK, &[], 1.0).expect("trace succeeds");
    let json = handle.to_json_string().expect("serializes");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");

    assert_eq!(value["path_count"], 1);
    assert_eq!(value["codes"].as_array().map(Vec::len), Some(5));
    assert_eq!(value["offsets"], serde_json::json!([0, 5]));
}
