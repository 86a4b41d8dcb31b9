use crate::config::CenterlineConfig;
use crate::geometry::member::ThicknessSegment;
use crate::math::distance_2d::{perpendicular_foot, SpanMode};
use crate::math::Point2;

/// Drops perpendiculars from every vertex of `sources` onto every edge of
/// `target`, keeping those whose length is a plausible wall thickness.
///
/// `target` is walked as a polyline (`target[i]` to `target[i + 1]`), so a
/// closed ring must repeat its first vertex. Candidates shorter than the
/// configured minimum thickness are a vertex touching its own edge and are
/// always dropped.
#[derive(Debug)]
pub struct ProjectPerpendiculars<'a> {
    target: &'a [Point2],
    sources: &'a [Point2],
    max_thickness: f64,
    min_thickness: f64,
    span_tolerance: f64,
    span: SpanMode,
    exclude_horizontal: bool,
    exclude_vertical: bool,
}

impl<'a> ProjectPerpendiculars<'a> {
    /// Creates a projection of `sources` onto `target` with the bounds of
    /// `config`.
    #[must_use]
    pub fn new(target: &'a [Point2], sources: &'a [Point2], config: &CenterlineConfig) -> Self {
        Self {
            target,
            sources,
            max_thickness: config.max_thickness,
            min_thickness: config.min_thickness,
            span_tolerance: config.span_tolerance,
            span: SpanMode::Bounded,
            exclude_horizontal: false,
            exclude_vertical: false,
        }
    }

    /// Overrides the largest accepted thickness.
    #[must_use]
    pub fn max_thickness(mut self, max_thickness: f64) -> Self {
        self.max_thickness = max_thickness;
        self
    }

    /// Skips perpendiculars whose foot has the same `y` as the vertex.
    ///
    /// Used when a boundary is projected onto itself, where a flat slab's own
    /// horizontal run would otherwise show up as a thickness.
    #[must_use]
    pub fn exclude_horizontal(mut self) -> Self {
        self.exclude_horizontal = true;
        self
    }

    /// Skips perpendiculars whose foot has the same `x` as the vertex.
    #[must_use]
    pub fn exclude_vertical(mut self) -> Self {
        self.exclude_vertical = true;
        self
    }

    /// Accepts feet anywhere on the infinite line through each edge.
    #[must_use]
    pub fn unbounded(mut self) -> Self {
        self.span = SpanMode::Unbounded;
        self
    }

    /// Executes the projection. Segments come out grouped by source vertex,
    /// then by target edge.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn execute(&self) -> Vec<ThicknessSegment> {
        let mut segments = Vec::new();
        for v in self.sources {
            for edge in self.target.windows(2) {
                let Some(hit) =
                    perpendicular_foot(&edge[0], &edge[1], v, self.span, self.span_tolerance)
                else {
                    continue;
                };
                if !(self.min_thickness..=self.max_thickness).contains(&hit.distance) {
                    continue;
                }
                if self.exclude_horizontal && hit.foot.y == v.y {
                    continue;
                }
                if self.exclude_vertical && hit.foot.x == v.x {
                    continue;
                }
                segments.push(ThicknessSegment {
                    source: *v,
                    foot: hit.foot,
                    thickness: hit.distance,
                });
            }
        }
        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    /// Closed 0.5 x 0.5 square.
    fn square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.5, 0.0),
            Point2::new(0.5, 0.5),
            Point2::new(0.0, 0.5),
            Point2::new(0.0, 0.0),
        ]
    }

    #[test]
    fn opposite_faces_give_thickness() {
        let cfg = CenterlineConfig::default();
        let target = vec![Point2::new(0.0, 0.0), Point2::new(4.0, 0.0)];
        let sources = vec![Point2::new(1.0, 0.5), Point2::new(3.0, 0.5)];
        let segs = ProjectPerpendiculars::new(&target, &sources, &cfg).execute();
        assert_eq!(segs.len(), 2);
        assert!((segs[0].thickness - 0.5).abs() < TOL);
        assert_eq!(segs[0].foot, Point2::new(1.0, 0.0));
        assert_eq!(segs[1].source, Point2::new(3.0, 0.5));
    }

    #[test]
    fn too_thick_and_outside_span_rejected() {
        let cfg = CenterlineConfig::default();
        let target = vec![Point2::new(0.0, 0.0), Point2::new(4.0, 0.0)];
        let sources = vec![Point2::new(2.0, 3.0), Point2::new(5.0, 0.5)];
        assert!(ProjectPerpendiculars::new(&target, &sources, &cfg)
            .execute()
            .is_empty());
        let wide = ProjectPerpendiculars::new(&target, &sources, &cfg)
            .max_thickness(5.0)
            .execute();
        assert_eq!(wide.len(), 1);
        let unbounded = ProjectPerpendiculars::new(&target, &sources, &cfg)
            .max_thickness(5.0)
            .unbounded()
            .execute();
        assert_eq!(unbounded.len(), 2);
    }

    #[test]
    fn non_finite_source_gives_no_segment() {
        let cfg = CenterlineConfig::default();
        let target = vec![Point2::new(0.0, 0.0), Point2::new(4.0, 0.0)];
        let sources = vec![Point2::new(1.0, f64::NAN), Point2::new(f64::NAN, 0.5)];
        let segs = ProjectPerpendiculars::new(&target, &sources, &cfg)
            .unbounded()
            .execute();
        assert!(segs.is_empty());
    }

    #[test]
    fn self_projection_skips_touching_edges() {
        let cfg = CenterlineConfig::default();
        let ring = square();
        // Each corner reaches the two opposite sides; its own sides give zero.
        let segs = ProjectPerpendiculars::new(&ring, &ring[..4], &cfg).execute();
        assert_eq!(segs.len(), 8);
        assert!(segs.iter().all(|s| (s.thickness - 0.5).abs() < TOL));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn excluding_horizontal_keeps_vertical_drops() {
        let cfg = CenterlineConfig::default();
        let ring = square();
        let segs = ProjectPerpendiculars::new(&ring, &ring[..4], &cfg)
            .exclude_horizontal()
            .execute();
        assert_eq!(segs.len(), 4);
        assert!(segs.iter().all(|s| s.foot.x == s.source.x));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn excluding_vertical_keeps_horizontal_drops() {
        let cfg = CenterlineConfig::default();
        let ring = square();
        let segs = ProjectPerpendiculars::new(&ring, &ring[..4], &cfg)
            .exclude_vertical()
            .execute();
        assert_eq!(segs.len(), 4);
        assert!(segs.iter().all(|s| s.foot.y == s.source.y));
    }
}
