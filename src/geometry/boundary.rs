use crate::math::polygon_2d::{contains_point, signed_area_2d};
use crate::math::Point2;
use crate::section::SectionShape;

/// Right half of the outer profile, in generation order.
///
/// The builder walks clockwise from the top of the symmetry axis: along the
/// deck slab to the cantilever tip, back under the cantilever, down the web
/// and along the bottom slab to the axis again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OuterProfile {
    /// On the symmetry axis at the top fiber.
    pub top_center: Point2,
    /// Upper corner of the cantilever tip.
    pub tip_top: Point2,
    /// Lower corner of the cantilever tip.
    pub tip_bottom: Point2,
    pub cantilever_break: Point2,
    pub cantilever_break_end: Point2,
    /// Where the cantilever underside meets the outer web face.
    pub web_top: Point2,
    pub web_bottom: Point2,
    /// Outer corner of the bottom slab.
    pub bottom_corner: Point2,
    /// On the symmetry axis at the bottom fiber.
    pub bottom_center: Point2,
}

impl OuterProfile {
    /// The nine points in generation order.
    #[must_use]
    pub fn points(&self) -> [Point2; 9] {
        [
            self.top_center,
            self.tip_top,
            self.tip_bottom,
            self.cantilever_break,
            self.cantilever_break_end,
            self.web_top,
            self.web_bottom,
            self.bottom_corner,
            self.bottom_center,
        ]
    }
}

/// Right half of an inner cell, in generation order.
///
/// For single-cell sections the profile starts on the symmetry axis; for
/// twin cells it starts on the inner face of the middle web (`x = bi4`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InnerProfile {
    pub top_start: Point2,
    pub top_fillet: Point2,
    pub top_fillet_end: Point2,
    /// Start of the inner web face below the top haunch.
    pub web_top: Point2,
    pub web_break: Point2,
    pub web_bottom: Point2,
    pub bottom_fillet_end: Point2,
    pub bottom_fillet: Point2,
    pub bottom_start: Point2,
}

impl InnerProfile {
    /// The nine points in generation order.
    #[must_use]
    pub fn points(&self) -> [Point2; 9] {
        [
            self.top_start,
            self.top_fillet,
            self.top_fillet_end,
            self.web_top,
            self.web_break,
            self.web_bottom,
            self.bottom_fillet_end,
            self.bottom_fillet,
            self.bottom_start,
        ]
    }
}

/// Outer and inner boundary polygons of a box section.
///
/// Every ring is closed (first vertex repeated at the end) and free of
/// repeated vertices otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxBoundary {
    pub shape: SectionShape,
    pub outer_profile: OuterProfile,
    pub inner_profile: InnerProfile,
    pub outer: Vec<Point2>,
    /// One ring for single-cell sections; right cell then left cell for twin
    /// cells.
    pub inner: Vec<Vec<Point2>>,
}

impl BoxBoundary {
    /// Ring of the right-hand (or only) cell.
    #[must_use]
    pub fn primary_cell(&self) -> &[Point2] {
        &self.inner[0]
    }

    /// Ring of the left-hand cell of a twin-cell section.
    #[must_use]
    pub fn secondary_cell(&self) -> Option<&[Point2]> {
        self.inner.get(1).map(Vec::as_slice)
    }

    /// Net enclosed area: outer ring minus every cell.
    #[must_use]
    pub fn net_area(&self) -> f64 {
        let cells: f64 = self.inner.iter().map(|r| signed_area_2d(r).abs()).sum();
        signed_area_2d(&self.outer).abs() - cells
    }

    /// Inner vertices that fall outside the outer ring.
    ///
    /// Vertices lying exactly on the outer boundary may or may not be
    /// reported.
    #[must_use]
    pub fn stray_inner_vertices(&self) -> Vec<Point2> {
        self.inner
            .iter()
            .flat_map(|ring| ring.iter())
            .filter(|p| !contains_point(&self.outer, p))
            .copied()
            .collect()
    }
}
