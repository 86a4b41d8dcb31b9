use super::Point2;

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. A closing vertex
/// equal to the first one contributes nothing, so open and closed rings give
/// the same result.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Removes every vertex that repeats an earlier one exactly. The first
/// occurrence wins and the order of the survivors is kept.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn dedup_vertices(points: &[Point2]) -> Vec<Point2> {
    let mut unique: Vec<Point2> = Vec::with_capacity(points.len());
    for p in points {
        if !unique.iter().any(|q| q.x == p.x && q.y == p.y) {
            unique.push(*p);
        }
    }
    unique
}

/// Appends the first vertex to the end of the ring.
#[must_use]
pub fn close_ring(mut points: Vec<Point2>) -> Vec<Point2> {
    if let Some(first) = points.first().copied() {
        points.push(first);
    }
    points
}

/// Mirrors a half profile across the vertical axis and reverses its order,
/// so that `half ++ mirrored` walks around the full section.
#[must_use]
pub fn mirror_reversed(points: &[Point2]) -> Vec<Point2> {
    points.iter().rev().map(|p| Point2::new(-p.x, p.y)).collect()
}

/// Collinearity test of `p` against the infinite line through `a` and `b`,
/// with both cross-multiplied sides rounded to `decimals` places.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn on_line(a: &Point2, b: &Point2, p: &Point2, decimals: i32) -> bool {
    let scale = 10_f64.powi(decimals);
    let lhs = ((b.y - a.y) * (p.x - a.x) * scale).round();
    let rhs = ((p.y - a.y) * (b.x - a.x) * scale).round();
    lhs == rhs
}

/// Even-odd ray-casting test. Points on the boundary may land on either side.
#[must_use]
pub fn contains_point(ring: &[Point2], p: &Point2) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (a, b) = (&ring[i], &ring[j]);
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
