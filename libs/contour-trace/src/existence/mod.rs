//! # Zone Existence
//!
//! Converts a bad-point mask into the per-zone existence map consumed by the
//! classifier. The map shares the flag lattice layout: `nx * ny + nx + 1`
//! cells with stride `nx`, where cell `ij` stands for the zone whose
//! upper-right corner is point `ij`.
//!
//! ```text
//!   (ij-1) ------ (ij)
//!     |   zone ij   |
//!   (ij-nx-1) -- (ij-nx)
//! ```
//!
//! Zones with `i == 0` or `j == 0` have no lower-left corner and never exist,
//! and neither does the trailing padding row.

#[cfg(test)]
mod tests;

/// Per-zone existence flags over the flag lattice.
///
/// Levels do not affect existence, so one map serves every trace call on a
/// mesh.
///
/// # Example
///
/// ```rust
/// use contour_trace::ExistenceMap;
///
/// let map = ExistenceMap::build(3, 3, None);
/// assert_eq!(map.zone_count(), 4);
/// assert!(map.exists(4));
/// assert!(!map.exists(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistenceMap {
    nx: usize,
    zones: Vec<bool>,
}

impl ExistenceMap {
    /// Builds the map for an `nx` by `ny` mesh.
    ///
    /// A masked point removes all four zones sharing it. `mask`, when given,
    /// must hold `nx * ny` entries.
    pub fn build(nx: usize, ny: usize, mask: Option<&[bool]>) -> Self {
        let points = nx * ny;
        let mut zones = vec![false; lattice_len(nx, ny)];

        for j in 1..ny {
            for i in 1..nx {
                zones[i + j * nx] = true;
            }
        }

        if let Some(mask) = mask {
            for (ij, _) in mask.iter().take(points).enumerate().filter(|(_, &bad)| bad) {
                for zone in [ij, ij + 1, ij + nx, ij + nx + 1] {
                    zones[zone] = false;
                }
            }
            // Clearing `ij + 1` at the end of a row lands on column 0 of the
            // next row, which never exists anyway.
        }

        Self { nx, zones }
    }

    /// Returns true if zone `ij` exists.
    #[inline]
    pub fn exists(&self, ij: usize) -> bool {
        self.zones.get(ij).copied().unwrap_or(false)
    }

    /// Number of existing zones.
    pub fn zone_count(&self) -> usize {
        self.zones.iter().filter(|&&z| z).count()
    }

    /// Lattice stride (points along the fast axis).
    #[inline]
    pub fn stride(&self) -> usize {
        self.nx
    }

    /// Lattice length, including padding.
    #[inline]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// True when the lattice has no cells at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

/// Length of the flag lattice for an `nx` by `ny` mesh: one extra row plus
/// one cell so the classifier can look a row and a column ahead.
#[inline]
pub(crate) fn lattice_len(nx: usize, ny: usize) -> usize {
    nx * ny + nx + 1
}
