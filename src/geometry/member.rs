use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::math::Point2;

/// A perpendicular between two opposing boundaries. Its length is the local
/// wall thickness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThicknessSegment {
    /// Vertex of the boundary the perpendicular was dropped from.
    pub source: Point2,
    /// Foot of the perpendicular on the opposing boundary.
    pub foot: Point2,
    pub thickness: f64,
}

impl ThicknessSegment {
    /// Mid-thickness point, which lies on the wall centerline.
    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        Point2::new(
            (self.source.x + self.foot.x) / 2.0,
            (self.source.y + self.foot.y) / 2.0,
        )
    }

    /// Whether both segments join exactly the same two points, in the same
    /// order.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn same_endpoints(&self, other: &Self) -> bool {
        self.source.x == other.source.x
            && self.source.y == other.source.y
            && self.foot.x == other.foot.x
            && self.foot.y == other.foot.y
    }
}

/// Structural wall of a box section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    TopFlange,
    #[serde(rename = "bot_flange")]
    BottomFlange,
    LeftWeb,
    RightWeb,
    MidWeb,
}

impl MemberKind {
    /// All members in the order the node/line arrays are built.
    pub const ALL: [Self; 5] = [
        Self::TopFlange,
        Self::BottomFlange,
        Self::RightWeb,
        Self::LeftWeb,
        Self::MidWeb,
    ];

    /// Webs run vertically and are ordered by `y`; flanges by `x`.
    #[must_use]
    pub fn is_web(self) -> bool {
        matches!(self, Self::LeftWeb | Self::RightWeb | Self::MidWeb)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::TopFlange => "top_flange",
            Self::BottomFlange => "bot_flange",
            Self::LeftWeb => "left_web",
            Self::RightWeb => "right_web",
            Self::MidWeb => "mid_web",
        }
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A point on a member centerline with the wall thickness there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterPoint {
    pub position: Point2,
    pub thickness: f64,
}

impl CenterPoint {
    #[must_use]
    pub fn new(x: f64, y: f64, thickness: f64) -> Self {
        Self {
            position: Point2::new(x, y),
            thickness,
        }
    }
}

impl From<&ThicknessSegment> for CenterPoint {
    fn from(seg: &ThicknessSegment) -> Self {
        Self {
            position: seg.midpoint(),
            thickness: seg.thickness,
        }
    }
}

/// Ordered centerline polyline of one structural wall.
///
/// Points are kept in a plain vector; [`Member::sort_along_axis`] is a stable
/// sort, so points with equal coordinates keep their insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub kind: MemberKind,
    pub points: Vec<CenterPoint>,
}

fn by_x_then_y(a: &CenterPoint, b: &CenterPoint) -> Ordering {
    a.position
        .x
        .total_cmp(&b.position.x)
        .then(a.position.y.total_cmp(&b.position.y))
}

fn by_y_then_x(a: &CenterPoint, b: &CenterPoint) -> Ordering {
    a.position
        .y
        .total_cmp(&b.position.y)
        .then(a.position.x.total_cmp(&b.position.x))
}

impl Member {
    #[must_use]
    pub fn new(kind: MemberKind) -> Self {
        Self {
            kind,
            points: Vec::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sorts flanges by `(x, y)` and webs by `(y, x)`.
    pub fn sort_along_axis(&mut self) {
        if self.kind.is_web() {
            self.points.sort_by(by_y_then_x);
        } else {
            self.points.sort_by(by_x_then_y);
        }
    }

    /// Highest point; the first one wins on ties.
    #[must_use]
    pub fn topmost(&self) -> Option<&CenterPoint> {
        self.points.iter().fold(None, |best, p| match best {
            Some(b) if p.position.y <= b.position.y => Some(b),
            _ => Some(p),
        })
    }

    /// Lowest point; the first one wins on ties.
    #[must_use]
    pub fn bottommost(&self) -> Option<&CenterPoint> {
        self.points.iter().fold(None, |best, p| match best {
            Some(b) if p.position.y >= b.position.y => Some(b),
            _ => Some(p),
        })
    }

    /// Smallest `y` among the points.
    #[must_use]
    pub fn min_y(&self) -> Option<f64> {
        self.bottommost().map(|p| p.position.y)
    }

    /// The two lowest points, lowest first.
    #[must_use]
    pub fn lowest_two(&self) -> Option<[Point2; 2]> {
        let mut sorted = self.points.clone();
        sorted.sort_by(|a, b| a.position.y.total_cmp(&b.position.y));
        first_two(&sorted)
    }

    /// The two leftmost points, leftmost first.
    #[must_use]
    pub fn leftmost_two(&self) -> Option<[Point2; 2]> {
        let mut sorted = self.points.clone();
        sorted.sort_by(|a, b| a.position.x.total_cmp(&b.position.x));
        first_two(&sorted)
    }
}

fn first_two(points: &[CenterPoint]) -> Option<[Point2; 2]> {
    match points {
        [a, b, ..] => Some([a.position, b.position]),
        _ => None,
    }
}

/// The five structural members of a box section.
#[derive(Debug, Clone, PartialEq)]
pub struct Members {
    pub top_flange: Member,
    pub bottom_flange: Member,
    pub left_web: Member,
    pub right_web: Member,
    /// Empty for single-cell sections.
    pub mid_web: Member,
}

impl Default for Members {
    fn default() -> Self {
        Self {
            top_flange: Member::new(MemberKind::TopFlange),
            bottom_flange: Member::new(MemberKind::BottomFlange),
            left_web: Member::new(MemberKind::LeftWeb),
            right_web: Member::new(MemberKind::RightWeb),
            mid_web: Member::new(MemberKind::MidWeb),
        }
    }
}

impl Members {
    #[must_use]
    pub fn get(&self, kind: MemberKind) -> &Member {
        match kind {
            MemberKind::TopFlange => &self.top_flange,
            MemberKind::BottomFlange => &self.bottom_flange,
            MemberKind::LeftWeb => &self.left_web,
            MemberKind::RightWeb => &self.right_web,
            MemberKind::MidWeb => &self.mid_web,
        }
    }

    pub fn get_mut(&mut self, kind: MemberKind) -> &mut Member {
        match kind {
            MemberKind::TopFlange => &mut self.top_flange,
            MemberKind::BottomFlange => &mut self.bottom_flange,
            MemberKind::LeftWeb => &mut self.left_web,
            MemberKind::RightWeb => &mut self.right_web,
            MemberKind::MidWeb => &mut self.mid_web,
        }
    }

    /// Members in [`MemberKind::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        MemberKind::ALL.into_iter().map(|k| self.get(k))
    }

    /// Total number of centerline points over all members.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.iter().map(Member::len).sum()
    }
}
