//! # Levels and Chunking
//!
//! The level pair decides the tracing mode: equal levels trace iso-lines,
//! ordered distinct levels trace the band between them. Chunk sizes bound
//! the size of filled polygons by cutting the mesh into sub-rectangles.

#[cfg(test)]
mod tests;

use crate::error::{ContourError, ContourResult};
use config::constants::NO_CHUNKING;
use serde::{Deserialize, Serialize};

/// What a trace call produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContourMode {
    /// Polylines following a single level.
    Lines,
    /// Closed polygons bounding the band between two levels.
    Filled,
}

/// A validated `(lower, upper)` level pair with `upper >= lower`.
///
/// # Example
///
/// ```rust
/// use contour_trace::{ContourMode, LevelPair};
///
/// assert_eq!(LevelPair::line(0.5).unwrap().mode(), ContourMode::Lines);
/// assert_eq!(LevelPair::new(0.0, 1.0).unwrap().mode(), ContourMode::Filled);
/// assert!(LevelPair::new(1.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelPair {
    lower: f64,
    upper: f64,
}

impl LevelPair {
    /// Creates a level pair.
    ///
    /// # Errors
    ///
    /// Rejects non-finite levels and `upper < lower`.
    pub fn new(lower: f64, upper: f64) -> ContourResult<Self> {
        if !lower.is_finite() || !upper.is_finite() || upper < lower {
            return Err(ContourError::InvalidLevels { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Creates a single-level pair for line tracing.
    pub fn line(level: f64) -> ContourResult<Self> {
        Self::new(level, level)
    }

    /// Lower level.
    #[inline]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper level (equal to `lower` in line mode).
    #[inline]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Tracing mode implied by the pair.
    #[inline]
    pub fn mode(&self) -> ContourMode {
        if self.upper > self.lower {
            ContourMode::Filled
        } else {
            ContourMode::Lines
        }
    }

    /// True for two distinct levels.
    #[inline]
    pub fn is_filled(&self) -> bool {
        self.mode() == ContourMode::Filled
    }

    /// Level by index: 0 is the lower level, 1 the upper.
    #[inline]
    pub(crate) fn level(&self, upper: bool) -> f64 {
        if upper {
            self.upper
        } else {
            self.lower
        }
    }
}

/// Requested chunk sizes, in zones, along each axis.
///
/// A size of zero (or one not smaller than the zone extent) means "no
/// chunking" on that axis. Chunking only applies to filled contours.
///
/// # Example
///
/// ```rust
/// use contour_trace::{ChunkSizes, ContourMode};
///
/// let chunks = ChunkSizes::new(2, 0);
/// assert_eq!(chunks.resolve(10, 5, ContourMode::Filled), (2, 4));
/// assert_eq!(chunks.resolve(10, 5, ContourMode::Lines), (9, 4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChunkSizes {
    /// Zones per chunk along the fast axis.
    pub i: usize,
    /// Zones per chunk along the slow axis.
    pub j: usize,
}

impl ChunkSizes {
    /// No chunking along either axis.
    pub const NONE: Self = Self {
        i: NO_CHUNKING,
        j: NO_CHUNKING,
    };

    /// Creates explicit chunk sizes.
    pub fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }

    /// Derives chunk sizes from the number of chunks wanted per axis.
    ///
    /// # Errors
    ///
    /// A count of zero is rejected.
    pub fn from_counts(nx: usize, ny: usize, i_count: usize, j_count: usize) -> ContourResult<Self> {
        if i_count == 0 || j_count == 0 {
            return Err(ContourError::invalid_chunking(format!(
                "chunk counts must be positive, got ({i_count}, {j_count})"
            )));
        }
        Ok(Self {
            i: size_from_count(nx, i_count),
            j: size_from_count(ny, j_count),
        })
    }

    /// Derives chunk sizes from a total chunk count.
    ///
    /// The total is clamped to the number of zones, split into its two
    /// closest factors, and the larger factor goes to the longer axis.
    ///
    /// # Example
    ///
    /// ```rust
    /// use contour_trace::ChunkSizes;
    ///
    /// // 6 chunks on a 13x7 mesh: 3 across x, 2 across y
    /// let chunks = ChunkSizes::from_total_count(13, 7, 6).unwrap();
    /// assert_eq!(chunks, ChunkSizes::new(4, 3));
    /// ```
    pub fn from_total_count(nx: usize, ny: usize, total: usize) -> ContourResult<Self> {
        if total == 0 {
            return Err(ContourError::invalid_chunking("total chunk count must be positive"));
        }
        let zones = nx.saturating_sub(1).max(1) * ny.saturating_sub(1).max(1);
        let total = total.min(zones);

        let (small, large) = closest_factors(total);
        let (i_count, j_count) = if nx >= ny { (large, small) } else { (small, large) };
        Self::from_counts(nx, ny, i_count, j_count)
    }

    /// Returns true if neither axis is chunked.
    pub fn is_none(&self) -> bool {
        self.i == NO_CHUNKING && self.j == NO_CHUNKING
    }

    /// Effective `(i, j)` chunk sizes for an `nx` by `ny` mesh.
    ///
    /// Lines always use one chunk: the start-point rules are only correct
    /// for whole-mesh boundaries in single-level mode.
    pub fn resolve(&self, nx: usize, ny: usize, mode: ContourMode) -> (usize, usize) {
        let (i_max, j_max) = (nx - 1, ny - 1);
        match mode {
            ContourMode::Lines => (i_max, j_max),
            ContourMode::Filled => (clamp_size(self.i, i_max), clamp_size(self.j, j_max)),
        }
    }
}

fn clamp_size(size: usize, zones: usize) -> usize {
    if size == NO_CHUNKING || size > zones {
        zones
    } else {
        size
    }
}

fn size_from_count(points: usize, count: usize) -> usize {
    let zones = points.saturating_sub(1).max(1);
    zones.div_ceil(count.min(zones))
}

/// Splits `n` into `(a, b)` with `a * b == n`, `a <= b` and `a` as large as
/// possible.
fn closest_factors(n: usize) -> (usize, usize) {
    let mut a = (n as f64).sqrt() as usize;
    while a > 1 && n % a != 0 {
        a -= 1;
    }
    let a = a.max(1);
    (a, n / a)
}
