//! # Error Types
//!
//! Error types for contour tracing. Errors fall into two kinds:
//!
//! - **Invalid input**: the caller handed over a malformed mesh, mask,
//!   level pair or chunk request. Rejected before any traversal starts.
//! - **Internal invariant**: the two tracing passes disagreed or path
//!   assembly overran its reservation. These are defects, never retried and
//!   never truncated into a partial result.

use thiserror::Error;

/// Which tier an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller-side problem; fix the input and call again.
    InvalidInput,
    /// Tracer defect; the same input fails the same way every time.
    InternalInvariant,
}

/// Errors that can occur while building a mesh or tracing contours.
///
/// ## Example
///
/// ```rust
/// use contour_trace::{ContourError, ErrorKind, QuadMesh};
///
/// let err = QuadMesh::from_values(1, 4, vec![0.0; 4]).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidInput);
/// assert!(matches!(err, ContourError::InvalidDimensions { nx: 1, ny: 4 }));
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ContourError {
    /// Fewer than two points along an axis.
    #[error("Invalid mesh dimensions: {nx}x{ny} (each axis needs at least 2 points)")]
    InvalidDimensions {
        /// Points along the fast (i) axis
        nx: usize,
        /// Points along the slow (j) axis
        ny: usize,
    },

    /// An input array does not match the mesh shape.
    #[error("Length of {name} ({actual}) does not match expected length {expected}")]
    LengthMismatch {
        /// Which input was wrong
        name: &'static str,
        /// Length implied by the mesh dimensions
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },

    /// Levels are not finite or are out of order.
    #[error("Invalid contour levels: lower {lower}, upper {upper}")]
    InvalidLevels {
        /// Lower level
        lower: f64,
        /// Upper level
        upper: f64,
    },

    /// Chunk request cannot be honoured.
    #[error("Invalid chunking: {message}")]
    InvalidChunking {
        /// What was wrong with the request
        message: String,
    },

    /// The second pass traced more points than the first pass reserved.
    #[error("Second pass traced {traced} points but only {reserved} were reserved")]
    PointCountOverflow {
        /// Points reserved by the counting pass
        reserved: usize,
        /// Points traced so far by the materializing pass
        traced: usize,
    },

    /// A combined-curve marker surfaced during the materializing pass.
    #[error("Negative point count {count} from curve tracer on second pass")]
    NegativeSecondPass {
        /// The offending signed count
        count: i64,
    },

    /// Path assembly ran past the reserved point or segment budget.
    #[error("Path assembly exceeded its reservation of {reserved}")]
    AssemblyOverflow {
        /// Budget that was exceeded
        reserved: usize,
    },

    /// Traversal stepped outside the flag lattice.
    #[error("Traversal fault: {message}")]
    TraversalFault {
        /// Where the walk went wrong
        message: String,
    },
}

impl ContourError {
    /// Creates a chunking error.
    pub fn invalid_chunking(message: impl Into<String>) -> Self {
        Self::InvalidChunking {
            message: message.into(),
        }
    }

    /// Creates a traversal fault.
    pub fn traversal_fault(message: impl Into<String>) -> Self {
        Self::TraversalFault {
            message: message.into(),
        }
    }

    /// Returns the tier this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDimensions { .. }
            | Self::LengthMismatch { .. }
            | Self::InvalidLevels { .. }
            | Self::InvalidChunking { .. } => ErrorKind::InvalidInput,
            Self::PointCountOverflow { .. }
            | Self::NegativeSecondPass { .. }
            | Self::AssemblyOverflow { .. }
            | Self::TraversalFault { .. } => ErrorKind::InternalInvariant,
        }
    }

    /// Returns true for caller-side input errors.
    pub fn is_invalid_input(&self) -> bool {
        self.kind() == ErrorKind::InvalidInput
    }
}

/// Result type alias for contour operations.
pub type ContourResult<T> = Result<T, ContourError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ContourError::LengthMismatch {
            name: "z",
            expected: 9,
            actual: 8,
        };
        assert!(err.to_string().contains("z"));
        assert!(err.to_string().contains('9'));

        let err = ContourError::PointCountOverflow {
            reserved: 5,
            traced: 6,
        };
        assert!(err.to_string().contains("reserved"));
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            ContourError::InvalidDimensions { nx: 1, ny: 1 }.kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            ContourError::invalid_chunking("zero count").kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            ContourError::AssemblyOverflow { reserved: 3 }.kind(),
            ErrorKind::InternalInvariant
        );
        assert!(!ContourError::traversal_fault("scan").is_invalid_input());
    }

    /// Errors cross the rayon pool, so they must be thread-safe.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ContourError>();
    }
}
