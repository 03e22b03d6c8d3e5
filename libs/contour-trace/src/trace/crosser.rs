//! Zone crossing: follow a level from one cut edge to the next.

use super::edge::{ahead, point0, point1, step};
use super::flags::CellFlags;
use super::{Level, Mode, PointKind, Stroke, Termination, TraceSite};
use crate::error::ContourResult;

/// Which way the curve leaves a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bend {
    /// Turn right along the curve.
    Forward,
    /// Turn left along the curve.
    Backward,
    Straight,
}

impl TraceSite<'_> {
    /// Crosses zones along `level` starting at the cursor edge.
    ///
    /// Runs until the curve closes, reaches a boundary or meets a slit.
    pub(super) fn cross_zones(&mut self, level: Level) -> ContourResult<Mode> {
        let stride = self.stride;
        let pass2 = self.materializing();
        let filled = self.filled;
        let closes_here = self.start == Mode::Crossing(level);
        let (edge0, left0) = (self.edge0, self.left0);
        let outside = level.outside_band();
        let value = self.levels.level(level.is_upper());

        let mut edge = self.edge;
        let mut left = self.left;
        let mut n = self.n;
        let mut stop: Option<Mode> = None;
        let mut marked: Option<usize>;

        loop {
            marked = None;
            let fwd = left.forward();
            let p0 = point0(edge, fwd, stride);
            let p1 = point1(edge, fwd, stride);

            if pass2 {
                self.put_cut(n, p0, p1, value, PointKind::ZoneCut);
                marked = Some(n);
            }

            if stop.is_none() && !left.is_jedge() && n > 0 {
                let here = self.flags_at(edge)?;
                if !filled && !pass2 && here.contains(CellFlags::OPEN_END) {
                    // Joins an open curve traced earlier; this point is already counted.
                    stop = Some(Mode::Terminal(Termination::OpenEnd));
                    break;
                }
                if edge == edge0 && Some(left) == left0 {
                    if closes_here {
                        stop = Some(if !pass2 && filled && !left.is_positive() {
                            Mode::Slit(Stroke::Down)
                        } else {
                            Mode::Terminal(Termination::Closed)
                        });
                    }
                } else if !pass2 {
                    let (near, far) = if fwd.is_positive() {
                        (CellFlags::I0_START, CellFlags::I1_START)
                    } else {
                        (CellFlags::I1_START, CellFlags::I0_START)
                    };
                    self.retire_starts(edge, near);
                    if !filled {
                        self.retire_starts(edge, far);
                    }
                }
            }

            n += 1;
            if stop.is_some() {
                break;
            }

            let z0 = self.flags_at(p0)?.band() != outside;
            let z1 = !z0;
            let z2 = self.flags_at(step(p1, left, stride))?.band() != outside;
            let z3 = self.flags_at(step(p0, left, stride))?.band() != outside;

            let bend = if z0 == z2 {
                if z1 == z3 {
                    let zone = ahead(edge, left, stride);
                    let mesh = self.mesh;
                    let corners = || {
                        let z = mesh.z();
                        [
                            z[p0],
                            z[step(p0, left, stride)],
                            z[p1],
                            z[step(p1, left, stride)],
                        ]
                    };
                    let upper = filled.then(|| self.levels.upper());
                    let above = self.saddles.centre_above(
                        zone,
                        corners,
                        self.levels.lower(),
                        upper,
                        level.is_upper(),
                    );
                    if above != (z1 != level.is_upper()) {
                        Bend::Forward
                    } else {
                        Bend::Backward
                    }
                } else {
                    Bend::Forward
                }
            } else if z1 == z3 {
                Bend::Backward
            } else {
                Bend::Straight
            };

            match bend {
                Bend::Forward => {
                    edge = ahead(p1, left, stride);
                    left = left.forward();
                }
                Bend::Backward => {
                    edge = ahead(p0, left, stride);
                    left = left.backward();
                }
                Bend::Straight => edge = step(edge, left, stride),
            }

            let here = self.flags_at(edge)?;
            if pass2 && filled && !left.is_jedge() {
                if left.is_positive() {
                    if here.contains(CellFlags::SLIT_UP) {
                        stop = Some(Mode::Slit(Stroke::Up));
                    }
                } else if here.contains(CellFlags::SLIT_DN) {
                    stop = Some(Mode::Slit(Stroke::Down));
                }
            }

            if stop.is_none() && here.contains(left.boundary()) {
                stop = Some(if filled {
                    Mode::BoundaryWalk
                } else {
                    Mode::Terminal(Termination::OpenEnd)
                });
                // Back into the zone that exists.
                left = left.reverse();
                if !pass2 && (edge != edge0 || Some(left) != left0) {
                    self.retire_starts(edge, left.start_mark());
                }
            }
        }

        self.edge = edge;
        self.n = n;
        self.left = left;

        let next = stop.unwrap_or(Mode::Terminal(Termination::Closed));
        if let Mode::Slit(_) = next {
            self.mark_slit_start(marked);
        }
        Ok(next)
    }
}
