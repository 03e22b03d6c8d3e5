//! # Contour Trace
//!
//! Contour lines and filled contours for a scalar field sampled on a
//! structured quadrilateral mesh.
//!
//! ## Architecture
//!
//! ```text
//! QuadMesh + mask → ExistenceMap ─┐
//!                                  ├→ classify → trace (two passes) → assemble → ContourSet
//! LevelPair + ChunkSizes ─────────┘
//! ```
//!
//! - **Lines** follow a single level and may be open (ending on the mesh
//!   boundary) or closed.
//! - **Filled contours** bound the band between two levels. Every polygon
//!   is simply connected: holes are joined to their enclosing boundary by
//!   zero-width slits, and chunking can cut large polygons into pieces.
//!
//! Output paths use the move/line/close code convention of common 2-D
//! path renderers.
//!
//! ## Usage
//!
//! ```rust
//! use contour_trace::{ContourGenerator, QuadMesh};
//!
//! let mesh = QuadMesh::from_axes(
//!     &[0.0, 1.0, 2.0],
//!     &[0.0, 1.0, 2.0],
//!     vec![0.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 0.0],
//! ).unwrap();
//! let generator = ContourGenerator::new(mesh);
//!
//! let lines = generator.lines(1.0).unwrap();
//! assert_eq!(lines.len(), 1);
//!
//! let bands = generator.multi_filled(&[0.5, 1.0, 1.5]).unwrap();
//! assert_eq!(bands.len(), 2);
//! ```

pub mod error;
pub mod existence;
pub mod generator;
pub mod levels;
pub mod mesh;
pub mod path;
mod trace;

pub use error::{ContourError, ContourResult, ErrorKind};
pub use existence::ExistenceMap;
pub use generator::{trace, ContourGenerator};
pub use levels::{ChunkSizes, ContourMode, LevelPair};
pub use mesh::QuadMesh;
pub use path::{ContourPath, ContourSet, PathCode};
