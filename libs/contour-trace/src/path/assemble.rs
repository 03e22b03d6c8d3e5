//! Path assembly from one curve's raw point stream.
//!
//! Slit points split the stream into segments. Segments whose ends meet
//! are stitched into sub-paths, then emitted as move/line/close commands.

use super::{ContourPath, PathCode};
use crate::error::{ContourError, ContourResult};
use crate::levels::ContourMode;
use crate::trace::PointTag;
use glam::DVec2;
use tracing::warn;

/// Index range `[start, end]` of one segment in the raw stream.
#[derive(Debug, Clone, Copy)]
struct Segment {
    start: usize,
    end: usize,
}

/// Builds the path for one traced curve.
///
/// Filled paths close every sub-path; line paths close a sub-path only
/// when its ends coincide exactly.
pub(crate) fn assemble_path(
    points: &[DVec2],
    tags: &[PointTag],
    mode: ContourMode,
) -> ContourResult<ContourPath> {
    let segments = find_segments(tags)?;
    let subpath_of = stitch(points, &segments);
    let subpath_count = subpath_of.iter().copied().max().map_or(0, |max| max + 1);

    let reserved = points.len();
    let mut vertices = Vec::with_capacity(reserved);
    let mut codes = Vec::with_capacity(reserved);

    for subpath in 0..subpath_count {
        let first_vertex = vertices.len();
        let members = segments
            .iter()
            .zip(&subpath_of)
            .filter(|(_, &owner)| owner == subpath)
            .map(|(segment, _)| segment);

        for (position, segment) in members.enumerate() {
            // Joined segments share their first point with the previous end.
            let from = if position == 0 {
                segment.start
            } else {
                segment.start + 1
            };
            for &point in &points[from..=segment.end] {
                codes.push(if vertices.len() == first_vertex {
                    PathCode::Move
                } else {
                    PathCode::Line
                });
                vertices.push(point);
                if vertices.len() > reserved {
                    warn!(reserved, "Assembled path outgrew its curve");
                    return Err(ContourError::AssemblyOverflow { reserved });
                }
            }
        }

        let closes = match (vertices.get(first_vertex), vertices.last()) {
            (Some(first), Some(last)) => mode == ContourMode::Filled || first == last,
            _ => false,
        };
        if closes {
            if let Some(code) = codes.last_mut() {
                *code = PathCode::Close;
            }
        }
    }

    Ok(ContourPath { vertices, codes })
}

/// Splits the stream at slit points.
///
/// A segment opens at a non-breaking point that is not the last one and
/// runs to the next breaking point or the end of the stream.
fn find_segments(tags: &[PointTag]) -> ContourResult<Vec<Segment>> {
    let last = tags.len().saturating_sub(1);
    let max_segments = tags.len() / 2 + 1;
    let mut segments = Vec::new();
    let mut open: Option<usize> = None;

    for (index, tag) in tags.iter().enumerate() {
        match open {
            Some(start) => {
                if tag.breaks_segment() || index == last {
                    segments.push(Segment { start, end: index });
                    open = None;
                    if segments.len() == max_segments {
                        warn!(max_segments, "Too many segments in curve");
                        return Err(ContourError::AssemblyOverflow {
                            reserved: max_segments,
                        });
                    }
                }
            }
            None => {
                if !tag.breaks_segment() && index < last {
                    open = Some(index);
                }
            }
        }
    }
    Ok(segments)
}

/// Assigns each segment a sub-path index.
///
/// Greedy forward scan: a segment joins the current sub-path when its first
/// point equals the sub-path's current end exactly.
fn stitch(points: &[DVec2], segments: &[Segment]) -> Vec<usize> {
    let mut owner: Vec<Option<usize>> = vec![None; segments.len()];
    let mut next = 0;

    for index in 0..segments.len() {
        if owner[index].is_some() {
            continue;
        }
        owner[index] = Some(next);
        let mut end = points[segments[index].end];
        for later in index + 1..segments.len() {
            if owner[later].is_none() && points[segments[later].start] == end {
                owner[later] = Some(next);
                end = points[segments[later].end];
            }
        }
        next += 1;
    }

    owner.into_iter().map(|o| o.unwrap_or(0)).collect()
}
