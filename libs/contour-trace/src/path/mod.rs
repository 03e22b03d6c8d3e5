//! # Contour Paths
//!
//! Output model for traced contours. Each traced curve becomes one
//! [`ContourPath`]: a vertex list plus one drawing command per vertex,
//! using the usual move/line/close path-code convention.
//!
//! A filled path may hold several sub-paths (an outer boundary and the
//! holes it encloses); each begins with [`PathCode::Move`].

mod assemble;

#[cfg(test)]
mod tests;

pub(crate) use assemble::assemble_path;

use crate::levels::LevelPair;
use config::constants::{PATH_CLOSE_POLY, PATH_LINE_TO, PATH_MOVE_TO};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Drawing command attached to a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PathCode {
    /// Start a new sub-path at this vertex.
    Move = PATH_MOVE_TO,
    /// Draw a segment to this vertex.
    Line = PATH_LINE_TO,
    /// Draw a segment to this vertex and close the sub-path.
    Close = PATH_CLOSE_POLY,
}

impl PathCode {
    /// Numeric code as understood by path renderers.
    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// One traced contour: vertices with their drawing commands.
///
/// # Example
///
/// ```rust
/// use contour_trace::{ContourGenerator, PathCode, QuadMesh};
///
/// let mesh = QuadMesh::from_values(3, 3, vec![
///     0.0, 0.0, 0.0,
///     0.0, 2.0, 0.0,
///     0.0, 0.0, 0.0,
/// ]).unwrap();
/// let set = ContourGenerator::new(mesh).lines(1.0).unwrap();
/// let path = &set.paths[0];
/// assert_eq!(path.codes[0], PathCode::Move);
/// assert!(path.is_closed());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContourPath {
    /// Vertex coordinates.
    pub vertices: Vec<DVec2>,
    /// One command per vertex.
    pub codes: Vec<PathCode>,
}

impl ContourPath {
    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the path has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns true if the last sub-path ends with [`PathCode::Close`].
    pub fn is_closed(&self) -> bool {
        self.codes.last() == Some(&PathCode::Close)
    }

    /// Splits the vertices into sub-paths, one per [`PathCode::Move`].
    pub fn subpaths(&self) -> Vec<&[DVec2]> {
        let mut starts: Vec<usize> = self
            .codes
            .iter()
            .enumerate()
            .filter(|(_, &code)| code == PathCode::Move)
            .map(|(index, _)| index)
            .collect();
        starts.push(self.vertices.len());
        starts
            .windows(2)
            .map(|range| &self.vertices[range[0]..range[1]])
            .collect()
    }

    /// Signed area enclosed by the sub-paths (shoelace formula).
    ///
    /// Counter-clockwise sub-paths count positive and clockwise ones
    /// negative, so a filled path with holes yields its net area. Each
    /// sub-path is treated as closed.
    pub fn signed_area(&self) -> f64 {
        self.subpaths()
            .into_iter()
            .map(|ring| {
                let n = ring.len();
                (0..n)
                    .map(|i| ring[i].perp_dot(ring[(i + 1) % n]))
                    .sum::<f64>()
                    / 2.0
            })
            .sum()
    }
}

/// All contours traced for one level or level pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContourSet {
    /// Levels the set was traced at.
    pub levels: LevelPair,
    /// One path per traced curve, in tracing order.
    pub paths: Vec<ContourPath>,
}

impl ContourSet {
    /// Number of paths.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns true if nothing was traced.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Total vertices across all paths.
    pub fn point_count(&self) -> usize {
        self.paths.iter().map(ContourPath::len).sum()
    }

    /// Iterates the paths.
    pub fn iter(&self) -> std::slice::Iter<'_, ContourPath> {
        self.paths.iter()
    }
}

impl<'a> IntoIterator for &'a ContourSet {
    type Item = &'a ContourPath;
    type IntoIter = std::slice::Iter<'a, ContourPath>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}
