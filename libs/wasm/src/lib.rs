//! WASM-facing entry points for contour tracing.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests call the `*_internal` helpers, which return
//! the tracer's own error type and never touch a JS host.
//!
//! Arrays cross the boundary point-indexed with `i` fastest. The mask is one
//! byte per point, non-zero where the point is bad; an empty mask means no
//! mask.
//!
//! ```
//! let z = [0.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 0.0];
//! let x = [0.0, 1.0, 2.0, 0.0, 1.0, 2.0, 0.0, 1.0, 2.0];
//! let y = [0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0];
//! let handle = contour_wasm::trace_lines_internal(3, 3, &x, &y, &z, &[], 1.0).unwrap();
//! assert_eq!(handle.path_count(), 1);
//! ```

use contour_trace::{ChunkSizes, ContourGenerator, ContourResult, QuadMesh};
use wasm_bindgen::prelude::*;

mod contour_handle;
mod diagnostics;

pub use contour_handle::ContourHandle;
pub use diagnostics::{Diagnostic, FailureKind};

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "contour-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Traces contour lines at `level`.
///
/// # Errors
/// Throws a [`Diagnostic`] when the arrays do not match `nx * ny`, the level
/// is not finite, or the tracer fails.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const lines = trace_lines(nx, ny, x, y, z, new Uint8Array(), 1.0);
/// // console.log(lines.path_count);
/// ```
#[wasm_bindgen]
pub fn trace_lines(
    nx: usize,
    ny: usize,
    x: &[f64],
    y: &[f64],
    z: &[f64],
    mask: &[u8],
    level: f64,
) -> Result<ContourHandle, JsValue> {
    trace_lines_internal(nx, ny, x, y, z, mask, level)
        .map_err(|err| JsValue::from(Diagnostic::from(err)))
}

/// Traces filled polygons between `lower` and `upper`.
///
/// `i_chunk` and `j_chunk` are zones per chunk; zero leaves an axis whole.
///
/// # Errors
/// Throws a [`Diagnostic`] for mismatched arrays, `lower >= upper`, or a
/// tracer failure.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const band = trace_filled(nx, ny, x, y, z, mask, 0.5, 1.5, 32, 32);
/// // draw(band.vertices(), band.codes(), band.offsets());
/// ```
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn trace_filled(
    nx: usize,
    ny: usize,
    x: &[f64],
    y: &[f64],
    z: &[f64],
    mask: &[u8],
    lower: f64,
    upper: f64,
    i_chunk: usize,
    j_chunk: usize,
) -> Result<ContourHandle, JsValue> {
    trace_filled_internal(nx, ny, x, y, z, mask, lower, upper, i_chunk, j_chunk)
        .map_err(|err| JsValue::from(Diagnostic::from(err)))
}

/// Host-only helper behind [`trace_lines`].
///
/// # Examples
/// ```
/// let z = [0.0, 1.0, 0.0, 1.0];
/// let x = [0.0, 1.0, 0.0, 1.0];
/// let y = [0.0, 0.0, 1.0, 1.0];
/// let handle = contour_wasm::trace_lines_internal(2, 2, &x, &y, &z, &[], 0.5).unwrap();
/// assert_eq!(handle.path_count(), 1);
/// assert_eq!(handle.code_buffer(), &[1, 2]);
/// ```
pub fn trace_lines_internal(
    nx: usize,
    ny: usize,
    x: &[f64],
    y: &[f64],
    z: &[f64],
    mask: &[u8],
    level: f64,
) -> ContourResult<ContourHandle> {
    let mesh = build_mesh(nx, ny, x, y, z, mask)?;
    let set = ContourGenerator::new(mesh).lines(level)?;
    Ok(ContourHandle::from_set(set))
}

/// Host-only helper behind [`trace_filled`].
#[allow(clippy::too_many_arguments)]
pub fn trace_filled_internal(
    nx: usize,
    ny: usize,
    x: &[f64],
    y: &[f64],
    z: &[f64],
    mask: &[u8],
    lower: f64,
    upper: f64,
    i_chunk: usize,
    j_chunk: usize,
) -> ContourResult<ContourHandle> {
    let mesh = build_mesh(nx, ny, x, y, z, mask)?;
    let set = ContourGenerator::new(mesh)
        .with_chunk_sizes(ChunkSizes::new(i_chunk, j_chunk))
        .filled(lower, upper)?;
    Ok(ContourHandle::from_set(set))
}

fn build_mesh(
    nx: usize,
    ny: usize,
    x: &[f64],
    y: &[f64],
    z: &[f64],
    mask: &[u8],
) -> ContourResult<QuadMesh> {
    let mesh = QuadMesh::new(nx, ny, x.to_vec(), y.to_vec(), z.to_vec())?;
    if mask.is_empty() {
        return Ok(mesh);
    }
    mesh.with_mask(mask.iter().map(|&flag| flag != 0).collect())
}

#[cfg(test)]
mod tests;
