//! Start-point scanning and the per-curve mode loop.

use super::edge::Side;
use super::flags::CellFlags;
use super::{Level, Mode, Termination, TraceSite};
use crate::error::ContourResult;

impl TraceSite<'_> {
    /// Traces the next curve.
    ///
    /// Returns its point count, zero once every start has been visited. On
    /// the first pass a negative count marks a curve that the second pass
    /// folds into another one; its magnitude still reserves buffer space.
    pub(crate) fn next_curve(&mut self) -> ContourResult<i64> {
        let stride = self.stride;
        let pass2 = self.materializing();
        let filled = self.filled;
        let mut edge0 = self.edge0;
        let edge00 = self.edge00;

        // One edge may start a second curve in another direction. Later
        // directions in the order I1, I0, J1, J0 are still pending.
        let here = self.flags_at(edge0)?;
        let two_starts = match self.left0 {
            Some(Side::East) => here & (CellFlags::I0_START | CellFlags::J1_START | CellFlags::J0_START),
            Some(Side::West) => here & (CellFlags::J1_START | CellFlags::J0_START),
            Some(Side::North) => here & CellFlags::J0_START,
            _ => CellFlags::empty(),
        };

        if pass2 || edge0 == 0 {
            if two_starts.is_empty() {
                let first = edge0 == 0 && !pass2;
                let scan_from = edge0;
                if self.flags_at(edge0)?.contains(CellFlags::ALL_DONE) {
                    return Ok(0);
                }
                while !self.flags_at(edge0)?.contains(CellFlags::START_ROW) {
                    edge0 += stride;
                }
                if edge0 == scan_from {
                    edge0 += 1;
                }
                if first {
                    // The classifier's marker has served its purpose.
                    self.flags[edge0 - edge0 % stride].remove(CellFlags::START_ROW);
                }
            }
        } else {
            if self.pending <= 0 {
                self.flags[edge00].insert(CellFlags::ALL_DONE);
                self.edge0 = 0;
                self.edge00 = 0;
                self.left0 = None;
                return Ok(0);
            }
            if two_starts.is_empty() {
                edge0 += 1;
            }
        }

        let (left0, mut start) = if !two_starts.is_empty() {
            let here = self.flags_at(edge0)?;
            let left0 = self.left0;
            if left0 == Some(Side::East) && here.contains(CellFlags::I0_START) {
                (Side::West, i_edge_start(here))
            } else if matches!(left0, Some(Side::East | Side::West))
                && here.contains(CellFlags::J1_START)
            {
                (Side::North, Mode::BoundaryWalk)
            } else {
                (Side::South, Mode::BoundaryWalk)
            }
        } else {
            while !self.flags_at(edge0)?.intersects(CellFlags::ANY_START) {
                edge0 += 1;
            }
            let here = self.flags[edge0];
            let left0 = if here.contains(CellFlags::I1_START) {
                Side::East
            } else if here.contains(CellFlags::I0_START) {
                Side::West
            } else if here.contains(CellFlags::J1_START) {
                Side::North
            } else {
                Side::South
            };
            let start = if here.intersects(CellFlags::I1_START | CellFlags::I0_START) {
                i_edge_start(here)
            } else {
                Mode::BoundaryWalk
            };
            (left0, start)
        };

        // Visited, though the mark stays for the second pass.
        if !pass2 {
            self.pending -= 1;
        }

        if filled && start == Mode::Crossing(Level::Lower) {
            // Interior start: the level is set by the point below (or at) the edge.
            let probe = if left0.is_positive() {
                edge0 - stride
            } else {
                edge0
            };
            start = Mode::Crossing(Level::toward_band(self.flags_at(probe)?.band()));
        }

        self.edge = edge0;
        self.edge0 = edge0;
        self.left = left0;
        self.left0 = Some(left0);
        self.start = start;
        self.n = 0;

        let mut mode = if filled {
            start
        } else {
            Mode::Crossing(Level::Lower)
        };
        let end = loop {
            mode = match mode {
                Mode::Crossing(level) => self.cross_zones(level)?,
                Mode::BoundaryWalk => self.walk_boundary()?,
                Mode::Slit(stroke) => self.cut_slit(stroke)?,
                Mode::Terminal(end) => break end,
            };
        };

        let mut n = self.n as i64;
        let mark_row;
        if !pass2
            && end == Termination::OpenEnd
            && (filled || start == Mode::Crossing(Level::Lower))
        {
            if !filled {
                self.flags[edge0].insert(CellFlags::OPEN_END);
            }
            self.flags[edge0].remove(if left0.is_positive() {
                CellFlags::I1_START
            } else {
                CellFlags::I0_START
            });
            mark_row = false;
            n = -n;
        } else {
            mark_row = !filled || two_starts.is_empty();
        }

        if !pass2 && mark_row {
            self.flags[edge0 - (edge0 - edge00) % stride].insert(CellFlags::START_ROW);
            self.edge00 = edge0;
        }
        Ok(n)
    }
}

/// Starting mode for a curve entering through an i-edge.
fn i_edge_start(here: CellFlags) -> Mode {
    if here.contains(CellFlags::I_BNDY) {
        Mode::BoundaryWalk
    } else {
        Mode::Crossing(Level::Lower)
    }
}
