//! # Curve Tracing
//!
//! Two-pass contour extraction over a classified flag lattice.
//!
//! The first pass walks every curve without producing points. It counts
//! them, clears start marks as curves pass over them, and leaves slit
//! markers behind. The second pass replays the same walks against the
//! mutated lattice and writes the points into buffers sized by the first.
//!
//! A curve is traced by a small state machine:
//!
//! - [`Mode::Crossing`] steps through zones from one cut edge to the next.
//! - [`Mode::BoundaryWalk`] follows a mesh, region or chunk boundary while
//!   the boundary points lie inside the band (filled mode only).
//! - [`Mode::Slit`] cuts a zero-width bridge down to (or up from) a hole so
//!   every filled polygon stays simply connected.
//! - [`Mode::Terminal`] ends the curve.

mod classify;
mod crosser;
mod edge;
mod flags;
mod saddle;
mod slit;
mod tracer;
mod walker;


use crate::error::{ContourError, ContourResult};
use crate::existence::ExistenceMap;
use crate::levels::LevelPair;
use crate::mesh::QuadMesh;
use edge::Side;
use flags::{CellFlags, BAND_ABOVE, BAND_BELOW};
use glam::DVec2;
use saddle::SaddleTable;
use tracing::{debug, trace, warn};

/// Which of the two levels a crossing follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Level {
    Lower,
    Upper,
}

impl Level {
    /// Band lying on the far side of this level from the filled region.
    #[inline]
    fn outside_band(self) -> u8 {
        match self {
            Level::Lower => BAND_BELOW,
            Level::Upper => BAND_ABOVE,
        }
    }

    /// Level separating the band from a point in band `band`.
    #[inline]
    fn toward_band(band: u8) -> Self {
        if band == BAND_BELOW {
            Level::Lower
        } else {
            Level::Upper
        }
    }

    #[inline]
    fn is_upper(self) -> bool {
        self == Level::Upper
    }
}

/// Direction of a slit stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Stroke {
    Up,
    Down,
}

/// How a curve ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Termination {
    /// Back at the start edge.
    Closed,
    /// Stopped at a boundary (lines) or handed off to another curve.
    OpenEnd,
}

/// Traversal state of the curve being traced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    Crossing(Level),
    BoundaryWalk,
    Slit(Stroke),
    Terminal(Termination),
}

/// What produced a traced point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PointKind {
    /// Interpolated cut on an interior edge.
    ZoneCut,
    /// Mesh point on a boundary, inside the band.
    Boundary,
    /// Interpolated cut on a boundary edge.
    BoundaryCut,
    /// Point on the upstroke of a slit.
    SlitUp,
    /// Point on the downstroke of a slit.
    SlitDown,
}

/// Kind of a traced point plus the slit-start marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PointTag {
    pub(crate) kind: PointKind,
    /// The point is the last one before a slit stroke begins.
    pub(crate) slit_start: bool,
}

impl PointTag {
    fn new(kind: PointKind) -> Self {
        Self {
            kind,
            slit_start: false,
        }
    }

    /// Points on a slit, and the point leading into one, end a segment.
    #[inline]
    pub(crate) fn breaks_segment(&self) -> bool {
        self.slit_start || matches!(self.kind, PointKind::SlitUp | PointKind::SlitDown)
    }
}

/// Second-pass output buffers, sized by the first pass.
#[derive(Debug)]
struct PointSink {
    points: Vec<DVec2>,
    tags: Vec<PointTag>,
    /// Offset of the current curve.
    base: usize,
    /// A write landed past the reservation.
    overflowed: bool,
}

impl PointSink {
    fn with_capacity(reserved: usize) -> Self {
        Self {
            points: vec![DVec2::ZERO; reserved],
            tags: vec![PointTag::new(PointKind::ZoneCut); reserved],
            base: 0,
            overflowed: false,
        }
    }

    fn put(&mut self, n: usize, point: DVec2, kind: PointKind) {
        let at = self.base + n;
        match (self.points.get_mut(at), self.tags.get_mut(at)) {
            (Some(slot), Some(tag)) => {
                *slot = point;
                *tag = PointTag::new(kind);
            }
            _ => self.overflowed = true,
        }
    }

    fn mark_slit_start(&mut self, n: usize) {
        if let Some(tag) = self.tags.get_mut(self.base + n) {
            tag.slit_start = true;
        }
    }
}

/// Mutable tracing state for one level pair.
///
/// Holds the flag lattice, the saddle cache, the cursor of the curve being
/// traced and, on the second pass, the output buffers.
#[derive(Debug)]
pub(crate) struct TraceSite<'a> {
    mesh: &'a QuadMesh,
    levels: LevelPair,
    filled: bool,
    stride: usize,
    flags: Vec<CellFlags>,
    saddles: SaddleTable,
    /// Start marks not yet visited by the first pass.
    pending: i64,

    edge: usize,
    left: Side,
    /// Points on the current curve so far.
    n: usize,

    edge0: usize,
    left0: Option<Side>,
    /// Cell of the last first-pass start that placed a row marker.
    edge00: usize,
    /// Mode the current curve started in, before line mode is forced.
    start: Mode,

    sink: Option<PointSink>,
}

impl<'a> TraceSite<'a> {
    /// Classifies the mesh and positions the cursor before the first curve.
    pub(crate) fn new(
        mesh: &'a QuadMesh,
        existence: &ExistenceMap,
        levels: LevelPair,
        chunks: (usize, usize),
    ) -> Self {
        let classification = classify::classify(mesh, existence, levels, chunks);
        let len = classification.flags.len();
        Self {
            mesh,
            levels,
            filled: levels.is_filled(),
            stride: mesh.nx(),
            flags: classification.flags,
            saddles: SaddleTable::new(len),
            pending: classification.start_count as i64,
            edge: 0,
            left: Side::East,
            n: 0,
            edge0: 0,
            left0: None,
            edge00: 0,
            start: Mode::Crossing(Level::Lower),
            sink: None,
        }
    }

    #[inline]
    fn materializing(&self) -> bool {
        self.sink.is_some()
    }

    /// Flags at `index`, failing instead of walking off the lattice.
    fn flags_at(&self, index: usize) -> ContourResult<CellFlags> {
        self.flags.get(index).copied().ok_or_else(|| {
            ContourError::traversal_fault(format!(
                "cell {index} outside lattice of {} cells",
                self.flags.len()
            ))
        })
    }

    /// Records the cut of `level` on the segment from `p0` to `p1`.
    fn put_cut(&mut self, n: usize, p0: usize, p1: usize, level: f64, kind: PointKind) {
        let mesh = self.mesh;
        if let Some(sink) = self.sink.as_mut() {
            let z = mesh.z();
            let (x, y) = (mesh.x(), mesh.y());
            let t = (level - z[p0]) / (z[p1] - z[p0]);
            let point = DVec2::new(t * (x[p1] - x[p0]) + x[p0], t * (y[p1] - y[p0]) + y[p0]);
            sink.put(n, point, kind);
        }
    }

    /// Records mesh point `p` itself.
    fn put_point(&mut self, n: usize, p: usize, kind: PointKind) {
        let mesh = self.mesh;
        if let Some(sink) = self.sink.as_mut() {
            sink.put(n, mesh.point(p), kind);
        }
    }

    /// Tags point `n` as leading into a slit. The first point of a curve is
    /// never tagged.
    fn mark_slit_start(&mut self, n: Option<usize>) {
        if let (Some(sink), Some(n)) = (self.sink.as_mut(), n.filter(|&n| n > 0)) {
            sink.mark_slit_start(n);
        }
    }

    /// Clears `marks` at `edge` and retires them from the pending count.
    fn retire_starts(&mut self, edge: usize, marks: CellFlags) {
        let cleared = self.flags[edge].take(marks);
        self.pending -= cleared as i64;
    }

    /// Switches to the materializing pass with `reserved` point slots.
    ///
    /// Only the output buffers change. The lattice keeps every mark the
    /// first pass left behind.
    fn begin_materializing(&mut self, reserved: usize) {
        self.sink = Some(PointSink::with_capacity(reserved));
    }

    fn advance_sink(&mut self, n: usize) {
        if let Some(sink) = self.sink.as_mut() {
            sink.base += n;
        }
    }
}

/// Points of all curves for one level pair, in tracing order.
#[derive(Debug, Clone, Default)]
pub(crate) struct RawCurves {
    pub(crate) points: Vec<DVec2>,
    pub(crate) tags: Vec<PointTag>,
    /// Points per curve.
    pub(crate) lengths: Vec<usize>,
}

impl RawCurves {
    /// Iterates the `(points, tags)` slices of each curve.
    pub(crate) fn curves(&self) -> impl Iterator<Item = (&[DVec2], &[PointTag])> {
        let mut offset = 0;
        self.lengths.iter().map(move |&len| {
            let range = offset..offset + len;
            offset += len;
            (&self.points[range.clone()], &self.tags[range])
        })
    }
}

/// Traces every curve of `levels` on `mesh`.
///
/// `chunks` are the resolved chunk sizes. Errors are internal invariant
/// violations; input validation happens before this point.
pub(crate) fn trace_points(
    mesh: &QuadMesh,
    existence: &ExistenceMap,
    levels: LevelPair,
    chunks: (usize, usize),
) -> ContourResult<RawCurves> {
    let mut site = TraceSite::new(mesh, existence, levels, chunks);
    debug!(
        starts = site.pending,
        i_chunk = chunks.0,
        j_chunk = chunks.1,
        "Classified lattice"
    );

    let mut curves = 0usize;
    let mut reserved = 0usize;
    loop {
        let n = site.next_curve()?;
        if n == 0 {
            break;
        }
        trace!(edge = site.edge0, count = n, "Counted curve");
        if n > 0 {
            curves += 1;
        }
        reserved += n.unsigned_abs() as usize;
    }
    debug!(
        lower = levels.lower(),
        upper = levels.upper(),
        curves,
        points = reserved,
        "Counting pass complete"
    );

    site.begin_materializing(reserved);
    let mut lengths = Vec::with_capacity(curves);
    let mut traced = 0usize;
    loop {
        let n = site.next_curve()?;
        if n < 0 {
            warn!(count = n, "Combined curve surfaced on materializing pass");
            return Err(ContourError::NegativeSecondPass { count: n });
        }
        let n = n as usize;
        if traced + n > reserved {
            warn!(reserved, traced = traced + n, "Materializing pass overran reservation");
            return Err(ContourError::PointCountOverflow {
                reserved,
                traced: traced + n,
            });
        }
        if n == 0 {
            break;
        }
        trace!(curve = lengths.len(), edge = site.edge0, points = n, "Traced curve");
        lengths.push(n);
        traced += n;
        site.advance_sink(n);
    }

    let Some(sink) = site.sink.take() else {
        return Err(ContourError::traversal_fault("materializing pass lost its buffers"));
    };
    if sink.overflowed {
        warn!(reserved, "Point written past reservation");
        return Err(ContourError::PointCountOverflow {
            reserved,
            traced: reserved + 1,
        });
    }

    let mut points = sink.points;
    let mut tags = sink.tags;
    points.truncate(traced);
    tags.truncate(traced);
    debug!(curves = lengths.len(), points = traced, "Materializing pass complete");

    Ok(RawCurves {
        points,
        tags,
        lengths,
    })
}
