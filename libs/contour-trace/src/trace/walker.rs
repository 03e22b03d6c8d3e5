//! Boundary walking for filled contours.
//!
//! The walker moves counter-clockwise along a boundary with the band on its
//! left, recording boundary points that lie inside the band. It hands back
//! to the crosser as soon as the next boundary point leaves the band.

use super::edge::{ahead, point0, point1};
use super::flags::{CellFlags, BAND_BETWEEN};
use super::{Level, Mode, PointKind, Stroke, Termination, TraceSite};
use crate::error::ContourResult;

impl TraceSite<'_> {
    pub(super) fn walk_boundary(&mut self) -> ContourResult<Mode> {
        let stride = self.stride;
        let pass2 = self.materializing();
        let closes_here = self.start == Mode::BoundaryWalk;
        let (edge0, left0) = (self.edge0, self.left0);

        let mut edge = self.edge;
        let mut left = self.left;
        let mut n = self.n;
        let mut fwd = left.forward();
        let mut p0 = point0(edge, fwd, stride);
        let mut p1 = point1(edge, fwd, stride);
        // Tracked apart from `left`: an upstroke takes over mid-step.
        let mut jedge = left.is_jedge();
        let mut heads_up = false;

        loop {
            let z0 = self.flags_at(p0)?.band();
            let z1 = self.flags_at(p1)?.band();
            let mut marked = false;
            let mut tagged = None;

            if z0 == BAND_BETWEEN {
                self.put_point(n, p0, PointKind::Boundary);
                marked = true;
            } else if n == 0 {
                // Open with the cut so the crosser can recognise the closure.
                let value = self.levels.level(z0 != 0);
                self.put_cut(n, p0, p1, value, PointKind::BoundaryCut);
                marked = true;
            }
            if marked && pass2 {
                tagged = Some(n);
            }

            if n > 0 {
                let here = self.flags_at(edge)?;
                if closes_here && edge == edge0 && Some(left) == left0 {
                    self.edge = edge;
                    self.left = left;
                    self.n = n + usize::from(marked);
                    let boundary = if jedge {
                        CellFlags::J_BNDY
                    } else {
                        CellFlags::I_BNDY
                    };
                    if !fwd.is_positive() && !here.contains(boundary) {
                        // Closing around a hole.
                        self.mark_slit_start(tagged);
                        return Ok(Mode::Slit(Stroke::Down));
                    }
                    if !fwd.is_positive() && !left.is_positive() {
                        // The upward slit from the curve below already covers this edge.
                        self.flags[edge].remove(CellFlags::J0_START);
                        self.mark_slit_start(tagged);
                        return Ok(Mode::Slit(Stroke::Down));
                    }
                    return Ok(Mode::Terminal(Termination::Closed));
                } else if pass2 {
                    if heads_up || (!fwd.is_positive() && here.contains(CellFlags::SLIT_DN)) {
                        if !heads_up && !here.contains(CellFlags::SLIT_DN_VISITED) {
                            self.flags[edge].insert(CellFlags::SLIT_DN_VISITED);
                        } else {
                            self.edge = edge;
                            self.left = left;
                            self.n = n + usize::from(marked);
                            self.mark_slit_start(tagged);
                            return Ok(Mode::Slit(if heads_up { Stroke::Up } else { Stroke::Down }));
                        }
                    }
                } else {
                    self.retire_starts(edge, left.start_mark());
                }
            }

            if marked {
                n += 1;
            }

            if z1 != BAND_BETWEEN {
                self.edge = edge;
                self.left = left;
                self.n = n;
                return Ok(Mode::Crossing(Level::toward_band(z1)));
            }

            // Step to p1: turn left if possible, else straight, else right.
            edge = ahead(p1, left, stride);
            let (cross, along) = if jedge {
                (CellFlags::I_BNDY, CellFlags::J_BNDY)
            } else {
                (CellFlags::J_BNDY, CellFlags::I_BNDY)
            };
            if pass2 && jedge && fwd.is_positive() && self.flags_at(edge)?.contains(CellFlags::SLIT_UP) {
                jedge = !jedge;
                heads_up = true;
            } else if self.flags_at(edge)?.contains(cross) {
                left = left.backward();
                jedge = !jedge;
            } else {
                edge = ahead(p1, fwd, stride);
                let here = self.flags_at(edge)?;
                if pass2 && !jedge && fwd.is_positive() && here.contains(CellFlags::SLIT_UP) {
                    heads_up = true;
                } else if !here.contains(along) {
                    edge = ahead(p1, left.reverse(), stride);
                    left = left.forward();
                    jedge = !jedge;
                }
            }
            fwd = left.forward();
            p0 = p1;
            p1 = point1(edge, fwd, stride);
        }
    }
}

