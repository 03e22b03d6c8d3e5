//! # Config Crate
//!
//! Centralized configuration constants for the contour tracing pipeline.
//! Path codes, grid minimums and parallelism thresholds are defined here so
//! the tracer and the WASM surface agree on every literal.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{MIN_GRID_POINTS, PATH_CLOSE_POLY, PATH_MOVE_TO};
//!
//! // A mesh needs at least one zone along each axis.
//! let (nx, ny) = (3usize, 3usize);
//! assert!(nx >= MIN_GRID_POINTS && ny >= MIN_GRID_POINTS);
//!
//! // Path codes follow the usual plotting convention.
//! assert_eq!(PATH_MOVE_TO, 1);
//! assert_eq!(PATH_CLOSE_POLY, 79);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Renderer Compatible**: Path codes match matplotlib's `Path` codes

pub mod constants;
