//! Slits joining a hole to the curve around it.
//!
//! A slit runs straight down one column of points. The first pass only
//! marks its ends: `SLIT_DN` on the i-edge where the downstroke begins and
//! `SLIT_UP` on the one where it stops. The second pass walks the
//! downstroke while tracing the hole and the upstroke when the outer curve
//! reaches the `SLIT_UP` mark.

use super::edge::Side;
use super::flags::{CellFlags, BAND_BETWEEN};
use super::{Level, Mode, PointKind, Stroke, Termination, TraceSite};
use crate::error::{ContourError, ContourResult};

impl TraceSite<'_> {
    pub(super) fn cut_slit(&mut self, stroke: Stroke) -> ContourResult<Mode> {
        if stroke == Stroke::Up && self.materializing() {
            self.slit_upstroke()
        } else {
            self.slit_downstroke()
        }
    }

    /// Climbs the left side of the slit until a point leaves the band or
    /// the top of a hole in the mesh is reached.
    fn slit_upstroke(&mut self) -> ContourResult<Mode> {
        let stride = self.stride;
        let mut n = self.n;
        let mut p1 = self.edge;
        loop {
            let here = self.flags_at(p1)?;
            let band = here.band();
            if band != BAND_BETWEEN {
                self.edge = p1;
                self.left = Side::West;
                self.n = n;
                return Ok(Mode::Crossing(Level::toward_band(band)));
            }
            if here.contains(CellFlags::J_BNDY) {
                self.edge = p1;
                self.left = Side::South;
                self.n = n;
                return Ok(Mode::BoundaryWalk);
            }
            self.put_point(n, p1, PointKind::SlitUp);
            n += 1;
            p1 += stride;
        }
    }

    /// Descends the right side of the slit.
    ///
    /// On the first pass this reserves two points per slit point, one for
    /// each stroke, plus one for the splice into the outer curve, and then
    /// hands the curve off as open.
    fn slit_downstroke(&mut self) -> ContourResult<Mode> {
        let stride = self.stride;
        let pass2 = self.materializing();
        let mut n = self.n;
        let mut p0 = self.edge;
        self.flags[p0].insert(CellFlags::SLIT_DN);
        p0 = below(p0, stride)?;

        loop {
            let here = self.flags_at(p0)?;
            let band = here.band();
            let right = self.flags_at(p0 + 1)?;
            if !pass2 {
                if band != BAND_BETWEEN
                    || here.contains(CellFlags::I_BNDY)
                    || right.contains(CellFlags::J_BNDY)
                {
                    self.flags[p0 + stride].insert(CellFlags::SLIT_UP);
                    self.n = n + 1;
                    return Ok(Mode::Terminal(Termination::OpenEnd));
                }
                n += 2;
            } else {
                if band != BAND_BETWEEN {
                    self.edge = p0 + stride;
                    self.left = Side::East;
                    self.n = n;
                    return Ok(Mode::Crossing(Level::toward_band(band)));
                }
                if right.contains(CellFlags::J_BNDY) {
                    self.edge = p0 + 1;
                    self.left = Side::North;
                    self.n = n;
                    return Ok(Mode::BoundaryWalk);
                }
                if here.contains(CellFlags::I_BNDY) {
                    self.edge = p0;
                    self.left = Side::East;
                    self.n = n;
                    return Ok(Mode::BoundaryWalk);
                }
                self.put_point(n, p0, PointKind::SlitDown);
                n += 1;
            }
            p0 = below(p0, stride)?;
        }
    }
}

fn below(index: usize, stride: usize) -> ContourResult<usize> {
    index
        .checked_sub(stride)
        .ok_or_else(|| ContourError::traversal_fault(format!("slit ran below the mesh at cell {index}")))
}
