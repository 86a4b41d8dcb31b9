use super::{Point2, Vector2, TOLERANCE};

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not parallel.
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
) -> Option<(f64, f64)> {
    let cross = d1.x * d2.y - d1.y * d2.x;
    if cross.abs() < TOLERANCE {
        return None;
    }
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let t = (dx * d2.y - dy * d2.x) / cross;
    let u = (dx * d1.y - dy * d1.x) / cross;
    Some((t, u))
}

/// Intersection point of the infinite line through `a0`, `a1` with the
/// infinite line through `b0`, `b1`. Returns `None` for parallel lines.
#[must_use]
pub fn lines_through_points_intersect(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<Point2> {
    let da = a1 - a0;
    let db = b1 - b0;
    let (t, _) = line_line_intersect_2d(a0, &da, b0, &db)?;
    Some(point_at(a0, &da, t))
}

/// Intersection of the line through `a0`, `a1` with the horizontal line at `y`.
#[must_use]
pub fn horizontal_intersect(a0: &Point2, a1: &Point2, y: f64) -> Option<Point2> {
    let da = a1 - a0;
    let (t, _) = line_line_intersect_2d(a0, &da, &Point2::new(0.0, y), &Vector2::x())?;
    Some(point_at(a0, &da, t))
}

/// Linear interpolation: `origin + dir * t`.
#[must_use]
pub fn point_at(origin: &Point2, dir: &Vector2, t: f64) -> Point2 {
    Point2::new(origin.x + dir.x * t, origin.y + dir.y * t)
}
