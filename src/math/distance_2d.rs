use super::{distance, Point2};

/// Whether a perpendicular foot has to land between the two points that
/// define the target line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanMode {
    /// The foot must lie on the segment itself.
    Bounded,
    /// Any foot on the infinite line is accepted.
    Unbounded,
}

/// Foot of a perpendicular together with its length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerpendicularFoot {
    pub foot: Point2,
    pub distance: f64,
}

/// Drops a perpendicular from `p` onto the line through `a` and `b`.
///
/// A zero run (`a.x == b.x`) is treated as a vertical line, so the foot is
/// `(a.x, p.y)`. Non-vertical lines use the slope-intercept form, which keeps
/// the foot exactly on a horizontal line.
///
/// In [`SpanMode::Bounded`] the foot is accepted only when
/// `|a - foot| + |foot - b|` equals `|a - b|` within `span_tolerance`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn perpendicular_foot(
    a: &Point2,
    b: &Point2,
    p: &Point2,
    mode: SpanMode,
    span_tolerance: f64,
) -> Option<PerpendicularFoot> {
    let foot = if b.x == a.x {
        Point2::new(a.x, p.y)
    } else {
        let m = (b.y - a.y) / (b.x - a.x);
        let c = a.y - m * a.x;
        let x = (p.x + m * (p.y - c)) / (1.0 + m * m);
        Point2::new(x, m * x + c)
    };

    if mode == SpanMode::Bounded {
        let along = distance(a, &foot) + distance(&foot, b);
        if (along - distance(a, b)).abs() > span_tolerance {
            return None;
        }
    }

    Some(PerpendicularFoot {
        foot,
        distance: distance(p, &foot),
    })
}
