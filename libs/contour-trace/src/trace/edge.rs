//! Directed-edge arithmetic.
//!
//! The traversal state is an edge index plus the side of that edge on which
//! the zone being crossed (or walked around) lies. East and West sides sit
//! on i-edges, North and South on j-edges. The direction of travel along
//! the edge is always the side rotated a quarter turn clockwise, so the
//! walked region stays on the left.

use super::flags::CellFlags;

/// Which family an edge belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    /// Edge of constant `i`, running between rows.
    I,
    /// Edge of constant `j`, running between columns.
    J,
}

/// Side of a directed edge holding the zone of interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    East,
    North,
    West,
    South,
}

impl Side {
    #[inline]
    pub(crate) fn axis(self) -> Axis {
        match self {
            Side::East | Side::West => Axis::I,
            Side::North | Side::South => Axis::J,
        }
    }

    #[inline]
    pub(crate) fn is_jedge(self) -> bool {
        self.axis() == Axis::J
    }

    /// True for sides pointing toward increasing lattice indices.
    #[inline]
    pub(crate) fn is_positive(self) -> bool {
        matches!(self, Side::East | Side::North)
    }

    /// Lattice offset of one step toward this side.
    #[inline]
    pub(crate) fn offset(self, stride: usize) -> isize {
        let stride = stride as isize;
        match self {
            Side::East => 1,
            Side::North => stride,
            Side::West => -1,
            Side::South => -stride,
        }
    }

    /// Direction of travel along an edge whose zone lies on this side.
    #[inline]
    pub(crate) fn forward(self) -> Side {
        match self {
            Side::East => Side::South,
            Side::South => Side::West,
            Side::West => Side::North,
            Side::North => Side::East,
        }
    }

    /// Counter-clockwise quarter turn; the inverse of [`Side::forward`].
    #[inline]
    pub(crate) fn backward(self) -> Side {
        self.forward().reverse()
    }

    #[inline]
    pub(crate) fn reverse(self) -> Side {
        match self {
            Side::East => Side::West,
            Side::North => Side::South,
            Side::West => Side::East,
            Side::South => Side::North,
        }
    }

    /// Start mark recording a curve that enters the zone on this side.
    #[inline]
    pub(crate) fn start_mark(self) -> CellFlags {
        match self {
            Side::East => CellFlags::I1_START,
            Side::West => CellFlags::I0_START,
            Side::North => CellFlags::J1_START,
            Side::South => CellFlags::J0_START,
        }
    }

    /// Boundary flag guarding an edge of this side's axis.
    #[inline]
    pub(crate) fn boundary(self) -> CellFlags {
        match self.axis() {
            Axis::I => CellFlags::I_BNDY,
            Axis::J => CellFlags::J_BNDY,
        }
    }
}

/// Moves `index` one step toward `side`.
#[inline]
pub(crate) fn step(index: usize, side: Side, stride: usize) -> usize {
    index.wrapping_add_signed(side.offset(stride))
}

/// Moves `index` toward `side` only when that is the positive direction.
///
/// Zone and edge cells are keyed by their upper-right point, so this maps a
/// point to the cell owning the zone or edge on `side`.
#[inline]
pub(crate) fn ahead(index: usize, side: Side, stride: usize) -> usize {
    if side.is_positive() {
        step(index, side, stride)
    } else {
        index
    }
}

/// First endpoint of `edge` when travelling toward `forward`.
#[inline]
pub(crate) fn point0(edge: usize, forward: Side, stride: usize) -> usize {
    if forward.is_positive() {
        step(edge, forward.reverse(), stride)
    } else {
        edge
    }
}

/// Second endpoint of `edge` when travelling toward `forward`.
#[inline]
pub(crate) fn point1(edge: usize, forward: Side, stride: usize) -> usize {
    if forward.is_positive() {
        edge
    } else {
        step(edge, forward, stride)
    }
}
