//! # Contour Handle
//!
//! WASM-friendly wrapper for traced paths that can be transferred to JavaScript.

use contour_trace::ContourSet;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Traced paths flattened into typed-array friendly buffers.
///
/// Path `p` owns vertices `offsets[p]..offsets[p + 1]`; each vertex has one
/// code.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const handle = trace_filled(nx, ny, x, y, z, new Uint8Array(), 0.5, 2.5, 0, 0);
///
/// const vertices = handle.vertices(); // Float64Array [x, y, x, y, ...]
/// const codes = handle.codes();       // Uint8Array, 1 = move, 2 = line, 79 = close
/// const offsets = handle.offsets();   // Uint32Array, path_count + 1 entries
///
/// for (let p = 0; p < handle.path_count; p++) {
///   ctx.beginPath();
///   for (let v = offsets[p]; v < offsets[p + 1]; v++) {
///     const [x, y] = [vertices[2 * v], vertices[2 * v + 1]];
///     if (codes[v] === 1) ctx.moveTo(x, y); else ctx.lineTo(x, y);
///     if (codes[v] === 79) ctx.closePath();
///   }
///   ctx.fill();
/// }
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, Serialize)]
pub struct ContourHandle {
    lower: f64,
    upper: f64,
    path_count: u32,
    /// Vertex positions as [x, y, x, y, ...]
    vertices: Vec<f64>,
    /// One path code per vertex
    codes: Vec<u8>,
    /// Start vertex of every path, plus the total vertex count
    offsets: Vec<u32>,
}

#[wasm_bindgen]
impl ContourHandle {
    /// Returns the number of paths.
    #[wasm_bindgen(getter)]
    pub fn path_count(&self) -> u32 {
        self.path_count
    }

    /// Returns the total number of vertices across all paths.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.offsets.last().copied().unwrap_or(0)
    }

    /// Lower level of the traced pair.
    #[wasm_bindgen(getter)]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper level of the traced pair; equals `lower` for lines.
    #[wasm_bindgen(getter)]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns the vertex positions as a Float64Array.
    ///
    /// Format: [x, y, x, y, ...]
    /// Length: vertex_count * 2
    #[wasm_bindgen]
    pub fn vertices(&self) -> js_sys::Float64Array {
        js_sys::Float64Array::from(&self.vertices[..])
    }

    /// Returns the path codes as a Uint8Array.
    #[wasm_bindgen]
    pub fn codes(&self) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(&self.codes[..])
    }

    /// Returns the path offsets as a Uint32Array of length path_count + 1.
    #[wasm_bindgen]
    pub fn offsets(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(&self.offsets[..])
    }

    /// Returns true if nothing was traced.
    #[wasm_bindgen]
    pub fn is_empty(&self) -> bool {
        self.path_count == 0
    }

    /// Serializes the handle as JSON, for transfer between worker and main
    /// thread.
    ///
    /// # Errors
    /// Returns a JavaScript error if serialization fails.
    #[wasm_bindgen]
    pub fn to_json(&self) -> Result<String, JsValue> {
        self.to_json_string()
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }
}

impl ContourHandle {
    /// Flattens a traced contour set.
    pub fn from_set(set: ContourSet) -> Self {
        let levels = set.levels;
        let total = set.point_count();
        let mut vertices = Vec::with_capacity(total * 2);
        let mut codes = Vec::with_capacity(total);
        let mut offsets = Vec::with_capacity(set.len() + 1);

        for path in &set.paths {
            offsets.push(to_u32(codes.len()));
            for vertex in &path.vertices {
                vertices.push(vertex.x);
                vertices.push(vertex.y);
            }
            codes.extend(path.codes.iter().map(|code| code.as_u8()));
        }
        offsets.push(to_u32(codes.len()));

        Self {
            lower: levels.lower(),
            upper: levels.upper(),
            path_count: to_u32(set.len()),
            vertices,
            codes,
            offsets,
        }
    }

    /// Vertex buffer for host-side callers.
    pub fn vertex_buffer(&self) -> &[f64] {
        &self.vertices
    }

    /// Code buffer for host-side callers.
    pub fn code_buffer(&self) -> &[u8] {
        &self.codes
    }

    /// Offset buffer for host-side callers.
    pub fn offset_buffer(&self) -> &[u32] {
        &self.offsets
    }

    /// JSON encoding without a JS host.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
