//! WASM-compatible error values.
//!
//! Wraps tracer errors so JavaScript can tell bad input from tracer defects.

use contour_trace::{ContourError, ErrorKind};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Failure tier for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FailureKind {
    /// The arrays, levels or chunk sizes were rejected.
    InvalidInput,
    /// The tracer hit an internal defect.
    InternalInvariant,
}

impl From<ErrorKind> for FailureKind {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::InvalidInput => FailureKind::InvalidInput,
            ErrorKind::InternalInvariant => FailureKind::InternalInvariant,
        }
    }
}

/// A tracing failure for JavaScript.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // try { trace_lines(nx, ny, x, y, z, mask, 1.0); }
/// // catch (diag) { console.error(diag.kind, diag.message()); }
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    kind: FailureKind,
    message: String,
}

#[wasm_bindgen]
impl Diagnostic {
    /// Returns the failure tier.
    #[wasm_bindgen(getter)]
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// Returns the human-readable message.
    pub fn message(&self) -> String {
        self.message.clone()
    }

    /// Converts this diagnostic to a plain JavaScript object.
    ///
    /// wasm-bindgen wrappers cannot be posted between a worker and the main
    /// thread; plain objects can.
    ///
    /// # Errors
    /// Propagates any failure setting a property on the object.
    pub fn to_js_object(&self) -> Result<JsValue, JsValue> {
        use js_sys::{Object, Reflect};

        let obj = Object::new();
        Reflect::set(&obj, &JsValue::from_str("kind"), &JsValue::from(self.kind as i32))?;
        Reflect::set(&obj, &JsValue::from_str("message"), &JsValue::from_str(&self.message))?;
        Ok(JsValue::from(obj))
    }
}

impl Diagnostic {
    /// Returns true for caller-side failures.
    pub fn is_invalid_input(&self) -> bool {
        self.kind == FailureKind::InvalidInput
    }
}

impl From<&ContourError> for Diagnostic {
    fn from(err: &ContourError) -> Self {
        Self {
            kind: err.kind().into(),
            message: err.to_string(),
        }
    }
}

impl From<ContourError> for Diagnostic {
    fn from(err: ContourError) -> Self {
        Self::from(&err)
    }
}
