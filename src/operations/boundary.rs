use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::geometry::boundary::{BoxBoundary, InnerProfile, OuterProfile};
use crate::math::polygon_2d::{close_ring, dedup_vertices, mirror_reversed};
use crate::math::Point2;
use crate::section::{BoxDimensions, SectionShape};

/// Builds the outer and inner boundary polygons of a box section.
///
/// `top_fiber_offset` is the `y` of the top fiber above the reference axis
/// (usually the centroid), taken from the host's section properties.
///
/// The outer and inner profiles are parameterised independently. When the
/// outer profile is the taller one it is anchored so that its cantilever tips
/// sit at the top fiber; otherwise the axis point of the outer profile is.
#[derive(Debug)]
pub struct BuildBoundary<'a> {
    dims: &'a BoxDimensions,
    top_fiber_offset: f64,
}

impl<'a> BuildBoundary<'a> {
    /// Creates a new boundary build operation.
    #[must_use]
    pub fn new(dims: &'a BoxDimensions, top_fiber_offset: f64) -> Self {
        Self {
            dims,
            top_fiber_offset,
        }
    }

    /// Executes the build.
    ///
    /// # Errors
    ///
    /// Returns the dimension validation error for negative lengths, and
    /// `GeometryError::Degenerate` when a ring collapses to fewer than three
    /// distinct vertices.
    pub fn execute(&self) -> Result<BoxBoundary> {
        self.dims.validate()?;

        let outer_profile = self.outer_profile();
        let inner_profile = self.inner_profile();

        let outer_half = outer_profile.points();
        let mut outer = outer_half.to_vec();
        outer.extend(mirror_reversed(&outer_half));
        let outer = closed_ring(&outer, "outer")?;

        let inner_half = inner_profile.points();
        let inner = match self.dims.shape {
            SectionShape::OneCell => {
                let mut ring = inner_half.to_vec();
                ring.extend(mirror_reversed(&inner_half));
                vec![closed_ring(&ring, "inner")?]
            }
            SectionShape::TwoCell => vec![
                closed_ring(&inner_half, "right cell")?,
                closed_ring(&mirror_reversed(&inner_half), "left cell")?,
            ],
        };

        debug!(
            shape = %self.dims.shape,
            outer = outer.len(),
            cells = inner.len(),
            "built section boundary"
        );

        Ok(BoxBoundary {
            shape: self.dims.shape,
            outer_profile,
            inner_profile,
            outer,
            inner,
        })
    }

    /// Vertical gap between the outer and inner total heights.
    fn height_gap(&self) -> f64 {
        self.dims.outer_height() - self.dims.inner_height()
    }

    fn outer_profile(&self) -> OuterProfile {
        let d = self.dims;
        let gap = self.height_gap();
        let y0 = if gap > 0.0 {
            self.top_fiber_offset - gap
        } else {
            self.top_fiber_offset
        };

        let top_center = Point2::new(0.0, y0);
        let x1 = d.bo1 + d.bo2 + d.bo3;
        let y1 = y0 + gap;
        let tip_top = Point2::new(x1, y1);
        let y2 = y1 - d.ho1;
        let tip_bottom = Point2::new(x1, y2);
        let x3 = x1 - d.bo11;
        let cantilever_break = Point2::new(x3, y2 - d.ho21);
        let cantilever_break_end = Point2::new(x3 - (d.bo12 - d.bo11).max(0.0), y2 - d.ho22);
        let x5 = x1 - d.bo1;
        let y5 = y2 - d.ho2;
        let web_top = Point2::new(x5, y5);
        let y6 = y5 - d.ho3 + d.ho31;
        let web_bottom = Point2::new(x5 - d.bo2 + d.bo21, y6);
        let y7 = y6 - d.ho31;
        let bottom_corner = Point2::new(d.bo3, y7);
        let bottom_center = Point2::new(0.0, y7);

        OuterProfile {
            top_center,
            tip_top,
            tip_bottom,
            cantilever_break,
            cantilever_break_end,
            web_top,
            web_bottom,
            bottom_corner,
            bottom_center,
        }
    }

    fn inner_profile(&self) -> InnerProfile {
        let d = self.dims;
        let gap = self.height_gap();
        let y0 = if gap > 0.0 {
            self.top_fiber_offset - gap - d.hi1
        } else {
            self.top_fiber_offset - d.hi1
        };
        let x0 = match d.shape {
            SectionShape::OneCell => 0.0,
            SectionShape::TwoCell => d.bi4,
        };

        let y1 = y0 - d.hi21;
        let x1 = x0 + d.bi11;
        let top_fillet = Point2::new(x1, y1);
        let top_fillet_end = Point2::new(
            x1 + (d.bi12 - d.bi11).max(0.0),
            y1 + (d.hi22 - d.hi21).max(0.0),
        );
        let y3 = y0 - d.hi2;
        let web_top = Point2::new(d.bi1, y3);
        let web_break = Point2::new(d.bi21, y3 - d.hi31);
        let y5 = y0 - d.hi2 - d.hi3;
        let web_bottom = Point2::new(d.bi3, y5);
        let y8 = y5 - d.hi4;
        let bottom_fillet = Point2::new(d.bi31, y8 + d.hi41);
        let bottom_fillet_end = Point2::new(d.bi31.max(d.bi32), y8 + d.hi41.max(d.hi42));

        InnerProfile {
            top_start: Point2::new(x0, y0),
            top_fillet,
            top_fillet_end,
            web_top,
            web_break,
            web_bottom,
            bottom_fillet_end,
            bottom_fillet,
            bottom_start: Point2::new(x0, y8),
        }
    }
}

fn closed_ring(points: &[Point2], which: &str) -> Result<Vec<Point2>> {
    let unique = dedup_vertices(points);
    if unique.len() < 3 {
        return Err(GeometryError::Degenerate(format!(
            "{which} boundary has only {} distinct vertices",
            unique.len()
        ))
        .into());
    }
    Ok(close_ring(unique))
}
