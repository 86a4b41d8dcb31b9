use crate::geometry::member::{CenterPoint, Member};
use crate::math::{distance, lerp, Point2};

/// Upper bound on the points inserted into a single gap.
pub const MAX_GAP_PIECES: usize = 100_000;

/// Subdivides a member so that no two consecutive points are more than
/// `target_length` apart.
///
/// A gap of length `d > target_length` receives `ceil(d / target_length) - 1`
/// evenly spaced points; position and thickness are interpolated linearly.
/// The first and last points are kept as they are. A non-positive
/// `target_length` returns the member unchanged, and a gap is never split
/// into more than [`MAX_GAP_PIECES`] pieces.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn resample(member: &Member, target_length: f64) -> Member {
    let mut out = Member::new(member.kind);
    if target_length <= 0.0 {
        out.points.clone_from(&member.points);
        return out;
    }

    for (i, p) in member.points.iter().enumerate() {
        out.points.push(*p);
        let Some(next) = member.points.get(i + 1) else {
            break;
        };
        let d = distance(&p.position, &next.position);
        if d <= target_length {
            continue;
        }
        let pieces = ((d / target_length).ceil() as usize).min(MAX_GAP_PIECES);
        for j in 1..pieces {
            let t = j as f64 / pieces as f64;
            out.points.push(CenterPoint {
                position: Point2::new(
                    lerp(p.position.x, next.position.x, t),
                    lerp(p.position.y, next.position.y, t),
                ),
                thickness: lerp(p.thickness, next.thickness, t),
            });
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::member::MemberKind;
    use approx::assert_relative_eq;

    fn flange(points: &[(f64, f64, f64)]) -> Member {
        Member {
            kind: MemberKind::TopFlange,
            points: points
                .iter()
                .map(|&(x, y, t)| CenterPoint::new(x, y, t))
                .collect(),
        }
    }

    fn max_gap(m: &Member) -> f64 {
        m.points
            .windows(2)
            .map(|w| distance(&w[0].position, &w[1].position))
            .fold(0.0, f64::max)
    }

    #[test]
    fn long_gap_is_split_evenly() {
        let m = flange(&[(0.0, 0.0, 0.2), (1.0, 0.0, 0.4)]);
        let r = resample(&m, 0.3);
        // ceil(1.0 / 0.3) = 4 pieces.
        assert_eq!(r.len(), 5);
        assert_relative_eq!(r.points[1].position.x, 0.25);
        assert_relative_eq!(r.points[2].thickness, 0.3);
        assert!(max_gap(&r) <= 0.3 + 1e-12);
    }

    #[test]
    fn ends_are_kept() {
        let m = flange(&[(-4.0, 1.5, 0.3), (-1.0, 1.45, 0.25), (2.2, 1.5, 0.5), (4.1, 1.5, 0.2)]);
        let r = resample(&m, 0.3);
        assert_eq!(r.points.first(), m.points.first());
        assert_eq!(r.points.last(), m.points.last());
        assert!(max_gap(&r) <= 0.3 + 1e-12);
        // Input points survive in order.
        let kept: Vec<_> = r
            .points
            .iter()
            .filter(|p| m.points.contains(p))
            .copied()
            .collect();
        assert_eq!(kept, m.points);
    }

    #[test]
    fn short_gaps_untouched() {
        let m = flange(&[(0.0, 0.0, 0.2), (0.2, 0.0, 0.2), (0.5, 0.0, 0.2)]);
        assert_eq!(resample(&m, 0.3), m);
    }

    #[test]
    fn tiny_target_length_is_capped() {
        let m = flange(&[(0.0, 0.0, 0.2), (1.0, 0.0, 0.2)]);
        let r = resample(&m, 1e-300);
        assert_eq!(r.len(), MAX_GAP_PIECES + 1);
        assert_eq!(r.points.last(), m.points.last());
    }

    #[test]
    fn empty_and_single_point_members() {
        let empty = Member::new(MemberKind::MidWeb);
        assert!(resample(&empty, 0.3).is_empty());
        let one = flange(&[(1.0, 1.0, 0.1)]);
        assert_eq!(resample(&one, 0.3), one);
    }
}
