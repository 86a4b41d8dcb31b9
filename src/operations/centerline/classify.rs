use crate::geometry::boundary::BoxBoundary;
use crate::geometry::member::{CenterPoint, MemberKind, Members, ThicknessSegment};
use crate::math::polygon_2d::on_line;
use crate::math::Point2;
use crate::section::SectionShape;

/// Result of sorting thickness segments into members.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub members: Members,
    /// Segments whose foot lies on none of the member lines.
    pub unclassified: Vec<ThicknessSegment>,
    /// Number of distinct segments that were classified or rejected.
    pub distinct: usize,
}

/// Assigns each thickness segment to the member whose reference line its foot
/// lies on.
///
/// Reference lines are tested in a fixed order and the first match wins: top
/// slab (right, then left half), bottom slab, right web from `web_top` to the
/// bottom corner, the same line mirrored for the left web, the outer web faces
/// when a bottom haunch separates them from the corner, and for twin cells the
/// inner face of the left cell for the middle web.
///
/// Segments are deduplicated on their exact endpoints and visited in `(x, y)`
/// order of their midpoints, so every member comes out ordered along `x`.
#[derive(Debug)]
pub struct ClassifySegments<'a> {
    segments: &'a [ThicknessSegment],
    boundary: &'a BoxBoundary,
    decimals: i32,
}

impl<'a> ClassifySegments<'a> {
    #[must_use]
    pub fn new(segments: &'a [ThicknessSegment], boundary: &'a BoxBoundary, decimals: i32) -> Self {
        Self {
            segments,
            boundary,
            decimals,
        }
    }

    #[must_use]
    pub fn execute(&self) -> Classification {
        let mut distinct: Vec<ThicknessSegment> = Vec::with_capacity(self.segments.len());
        for seg in self.segments {
            if !distinct.iter().any(|d| d.same_endpoints(seg)) {
                distinct.push(*seg);
            }
        }
        distinct.sort_by(|a, b| {
            let (ma, mb) = (a.midpoint(), b.midpoint());
            ma.x.total_cmp(&mb.x).then(ma.y.total_cmp(&mb.y))
        });

        let lines = self.reference_lines();
        let mut members = Members::default();
        let mut unclassified = Vec::new();
        for seg in &distinct {
            let hit = lines
                .iter()
                .find(|(_, a, b)| on_line(a, b, &seg.foot, self.decimals));
            match hit {
                Some((kind, _, _)) => members.get_mut(*kind).points.push(CenterPoint::from(seg)),
                None => unclassified.push(*seg),
            }
        }

        Classification {
            members,
            unclassified,
            distinct: distinct.len(),
        }
    }

    fn reference_lines(&self) -> Vec<(MemberKind, Point2, Point2)> {
        let o = &self.boundary.outer_profile;
        let mut lines = vec![
            (MemberKind::TopFlange, o.top_center, o.tip_top),
            (MemberKind::TopFlange, o.top_center, mirror(&o.tip_top)),
            (MemberKind::BottomFlange, o.bottom_corner, o.bottom_center),
            (MemberKind::RightWeb, o.web_top, o.bottom_corner),
            (MemberKind::LeftWeb, mirror(&o.web_top), mirror(&o.bottom_corner)),
        ];
        if o.web_bottom != o.bottom_corner {
            // Bottom haunch: the web face ends above the slab corner.
            lines.push((MemberKind::RightWeb, o.web_top, o.web_bottom));
            lines.push((MemberKind::LeftWeb, mirror(&o.web_top), mirror(&o.web_bottom)));
        }
        if self.boundary.shape == SectionShape::TwoCell {
            // Inner face of the left cell.
            let i = &self.boundary.inner_profile;
            lines.push((
                MemberKind::MidWeb,
                mirror(&i.top_start),
                mirror(&i.bottom_start),
            ));
        }
        lines
    }
}

fn mirror(p: &Point2) -> Point2 {
    Point2::new(-p.x, p.y)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::CenterlineConfig;
    use crate::operations::boundary::BuildBoundary;
    use crate::operations::centerline::project::ProjectPerpendiculars;
    use crate::section::BoxDimensions;

    fn default_boundary() -> BoxBoundary {
        BuildBoundary::new(&BoxDimensions::default(), 1.6)
            .execute()
            .unwrap()
    }

    fn seg(source: (f64, f64), foot: (f64, f64)) -> ThicknessSegment {
        let source = Point2::new(source.0, source.1);
        let foot = Point2::new(foot.0, foot.1);
        ThicknessSegment {
            source,
            foot,
            thickness: (source - foot).norm(),
        }
    }

    #[test]
    fn feet_land_on_their_members() {
        let boundary = default_boundary();
        let segments = vec![
            seg((1.0, 1.36), (1.0, 1.6)),
            seg((-1.0, 1.36), (-1.0, 1.6)),
            seg((1.0, -1.15), (1.0, -1.4)),
            seg((2.2, 0.6), (2.65, 0.6)),
            seg((-2.2, 0.6), (-2.65, 0.6)),
        ];
        let c = ClassifySegments::new(&segments, &boundary, 5).execute();
        assert_eq!(c.members.top_flange.len(), 2);
        assert_eq!(c.members.bottom_flange.len(), 1);
        assert_eq!(c.members.right_web.len(), 1);
        assert_eq!(c.members.left_web.len(), 1);
        assert!(c.members.mid_web.is_empty());
        assert!(c.unclassified.is_empty());
        // Visited in midpoint x order.
        assert!(c.members.top_flange.points[0].position.x < 0.0);
    }

    #[test]
    fn stray_foot_is_reported() {
        let boundary = default_boundary();
        let segments = vec![seg((4.25, 1.6), (4.25, 1.4))];
        let c = ClassifySegments::new(&segments, &boundary, 5).execute();
        assert_eq!(c.unclassified.len(), 1);
        assert_eq!(c.members.point_count(), 0);
    }

    #[test]
    fn duplicates_are_dropped() {
        let boundary = default_boundary();
        let s = seg((1.0, 1.36), (1.0, 1.6));
        let c = ClassifySegments::new(&[s, s, s], &boundary, 5).execute();
        assert_eq!(c.distinct, 1);
        assert_eq!(c.members.top_flange.len(), 1);
    }

    #[test]
    fn classification_is_idempotent_and_conserves_segments() {
        let boundary = default_boundary();
        let cfg = CenterlineConfig::default();
        let mut segments =
            ProjectPerpendiculars::new(&boundary.outer, boundary.primary_cell(), &cfg).execute();
        segments.extend(
            ProjectPerpendiculars::new(&boundary.outer, &boundary.outer, &cfg)
                .exclude_horizontal()
                .execute(),
        );
        let first = ClassifySegments::new(&segments, &boundary, 5).execute();
        let second = ClassifySegments::new(&segments, &boundary, 5).execute();
        assert_eq!(first, second);
        assert_eq!(
            first.members.point_count() + first.unclassified.len(),
            first.distinct
        );

        let mut doubled = segments.clone();
        doubled.extend_from_slice(&segments);
        let third = ClassifySegments::new(&doubled, &boundary, 5).execute();
        assert_eq!(first, third);
    }

    #[test]
    fn mid_web_line_only_for_two_cells() {
        let dims = BoxDimensions {
            shape: SectionShape::TwoCell,
            bi4: 0.2,
            ..BoxDimensions::default()
        };
        let boundary = BuildBoundary::new(&dims, 1.6).execute().unwrap();
        let segments = vec![seg((0.2, 0.0), (-0.2, 0.0))];
        let c = ClassifySegments::new(&segments, &boundary, 5).execute();
        assert_eq!(c.members.mid_web.len(), 1);
        assert!(c.members.mid_web.points[0].position.x.abs() < 1e-12);

        let one_cell = default_boundary();
        let c = ClassifySegments::new(&segments, &one_cell, 5).execute();
        assert!(c.members.mid_web.is_empty());
        assert_eq!(c.unclassified.len(), 1);
    }
}
