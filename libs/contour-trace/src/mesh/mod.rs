//! # Quad Mesh
//!
//! Structured quadrilateral mesh carrying a scalar field at every point.
//!
//! Arrays are point-indexed with `i` varying fastest: point `(i, j)` lives at
//! `i + j * nx`. `i` and `j` correspond to the x and y directions of the
//! coordinate arrays, although the coordinates themselves may be curvilinear.

#[cfg(test)]
mod tests;

use crate::error::{ContourError, ContourResult};
use config::constants::MIN_GRID_POINTS;
use glam::DVec2;

/// A structured quadrilateral mesh with a scalar field.
///
/// The mesh is read-only once built; every trace call borrows it.
///
/// # Example
///
/// ```rust
/// use contour_trace::QuadMesh;
///
/// let mesh = QuadMesh::from_values(3, 3, vec![
///     0.0, 0.0, 0.0,
///     0.0, 2.0, 0.0,
///     0.0, 0.0, 0.0,
/// ]).unwrap();
/// assert_eq!(mesh.point_count(), 9);
/// assert_eq!(mesh.z_range(), Some((0.0, 2.0)));
/// ```
#[derive(Debug, Clone)]
pub struct QuadMesh {
    nx: usize,
    ny: usize,
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
    /// Bad-point mask, `true` where a point must be ignored.
    mask: Option<Vec<bool>>,
}

impl QuadMesh {
    /// Creates a mesh from full point-indexed coordinate and value arrays.
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error when either axis has fewer than two
    /// points or any array length differs from `nx * ny`.
    pub fn new(
        nx: usize,
        ny: usize,
        x: Vec<f64>,
        y: Vec<f64>,
        z: Vec<f64>,
    ) -> ContourResult<Self> {
        let expected = checked_point_count(nx, ny)?;
        check_len("x", expected, x.len())?;
        check_len("y", expected, y.len())?;
        check_len("z", expected, z.len())?;
        Ok(Self {
            nx,
            ny,
            x,
            y,
            z,
            mask: None,
        })
    }

    /// Creates a mesh from 1-D axes, expanding them to a full grid.
    ///
    /// `xs` has one entry per column (`nx`), `ys` one per row (`ny`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use contour_trace::QuadMesh;
    ///
    /// let mesh = QuadMesh::from_axes(&[0.0, 0.5, 1.0], &[10.0, 20.0], vec![0.0; 6]).unwrap();
    /// assert_eq!(mesh.x()[4], 0.5);
    /// assert_eq!(mesh.y()[4], 20.0);
    /// ```
    pub fn from_axes(xs: &[f64], ys: &[f64], z: Vec<f64>) -> ContourResult<Self> {
        let (nx, ny) = (xs.len(), ys.len());
        let expected = checked_point_count(nx, ny)?;
        check_len("z", expected, z.len())?;

        let mut x = Vec::with_capacity(expected);
        let mut y = Vec::with_capacity(expected);
        for &yj in ys {
            x.extend_from_slice(xs);
            y.extend(std::iter::repeat(yj).take(nx));
        }
        Self::new(nx, ny, x, y, z)
    }

    /// Creates a mesh whose coordinates are the point indices themselves.
    pub fn from_values(nx: usize, ny: usize, z: Vec<f64>) -> ContourResult<Self> {
        checked_point_count(nx, ny)?;
        let xs: Vec<f64> = (0..nx).map(|i| i as f64).collect();
        let ys: Vec<f64> = (0..ny).map(|j| j as f64).collect();
        Self::from_axes(&xs, &ys, z)
    }

    /// Attaches a bad-point mask (`true` marks a point to ignore).
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error when the mask length differs from the
    /// point count.
    pub fn with_mask(mut self, mask: Vec<bool>) -> ContourResult<Self> {
        check_len("mask", self.point_count(), mask.len())?;
        self.mask = Some(mask);
        Ok(self)
    }

    /// Points along the fast axis.
    #[inline]
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Points along the slow axis.
    #[inline]
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Total number of points.
    #[inline]
    pub fn point_count(&self) -> usize {
        self.nx * self.ny
    }

    /// Point x coordinates.
    #[inline]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Point y coordinates.
    #[inline]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Field values.
    #[inline]
    pub fn z(&self) -> &[f64] {
        &self.z
    }

    /// Bad-point mask, if any.
    #[inline]
    pub fn mask(&self) -> Option<&[bool]> {
        self.mask.as_deref()
    }

    /// Returns the coordinates of point `index`.
    #[inline]
    pub fn point(&self, index: usize) -> DVec2 {
        DVec2::new(self.x[index], self.y[index])
    }

    /// Computes the axis-aligned bounding box of all mesh points.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec2, DVec2) {
        let mut min = self.point(0);
        let mut max = min;
        for index in 1..self.point_count() {
            let p = self.point(index);
            min = min.min(p);
            max = max.max(p);
        }
        (min, max)
    }

    /// Range of the field over unmasked, non-NaN points.
    ///
    /// Returns `None` when every point is masked.
    pub fn z_range(&self) -> Option<(f64, f64)> {
        let mask = self.mask();
        self.z
            .iter()
            .enumerate()
            .filter(|&(index, z)| !z.is_nan() && !mask.is_some_and(|m| m[index]))
            .map(|(_, &z)| z)
            .fold(None, |range, z| match range {
                None => Some((z, z)),
                Some((lo, hi)) => Some((lo.min(z), hi.max(z))),
            })
    }
}

fn checked_point_count(nx: usize, ny: usize) -> ContourResult<usize> {
    if nx < MIN_GRID_POINTS || ny < MIN_GRID_POINTS {
        return Err(ContourError::InvalidDimensions { nx, ny });
    }
    nx.checked_mul(ny)
        .ok_or(ContourError::InvalidDimensions { nx, ny })
}

fn check_len(name: &'static str, expected: usize, actual: usize) -> ContourResult<()> {
    if expected != actual {
        return Err(ContourError::LengthMismatch {
            name,
            expected,
            actual,
        });
    }
    Ok(())
}
