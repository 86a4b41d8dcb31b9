use std::fmt;

use tracing::warn;

use crate::geometry::member::{MemberKind, ThicknessSegment};
use crate::math::Point2;

/// Non-fatal problem met while extracting a centerline.
///
/// The pipeline keeps going and collects these next to its result; each one
/// is also logged at `warn` level when it is recorded.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// A thickness segment whose foot lies on no member line.
    UnclassifiedSegment(ThicknessSegment),
    /// A web end that has no perpendicular onto either flange.
    NoProjection { member: MemberKind, point: Point2 },
    /// A web end whose junction could not be intersected.
    DegenerateJunction { member: MemberKind, reason: String },
    /// A member that received no centerline points.
    EmptyMember(MemberKind),
    /// An inner vertex lying outside the outer boundary.
    StrayInnerVertex(Point2),
    /// Cells that enclose as much area as the outer boundary or more.
    NonPositiveNetArea(f64),
}

impl Diagnostic {
    pub(crate) fn record(self, sink: &mut Vec<Self>) {
        warn!(diagnostic = %self, "centerline issue");
        sink.push(self);
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnclassifiedSegment(s) => write!(
                f,
                "segment ({}, {}) -> ({}, {}) matches no member",
                s.source.x, s.source.y, s.foot.x, s.foot.y
            ),
            Self::NoProjection { member, point } => write!(
                f,
                "{member} end ({}, {}) does not project onto a flange",
                point.x, point.y
            ),
            Self::DegenerateJunction { member, reason } => {
                write!(f, "{member} junction skipped: {reason}")
            }
            Self::EmptyMember(kind) => write!(f, "{kind} has no points"),
            Self::StrayInnerVertex(p) => {
                write!(f, "inner vertex ({}, {}) lies outside the outer boundary", p.x, p.y)
            }
            Self::NonPositiveNetArea(area) => write!(f, "net section area {area} is not positive"),
        }
    }
}
