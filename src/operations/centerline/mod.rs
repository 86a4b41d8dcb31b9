mod classify;
mod diagnostic;
mod junction;
mod project;
mod resample;

use tracing::debug;

pub use classify::{Classification, ClassifySegments};
pub use diagnostic::Diagnostic;
pub use junction::{inject, ConnectWebs, Junctions, WebJunction};
pub use project::ProjectPerpendiculars;
pub use resample::{resample, MAX_GAP_PIECES};

use crate::config::CenterlineConfig;
use crate::error::{OperationError, Result};
use crate::geometry::boundary::BoxBoundary;
use crate::geometry::member::{MemberKind, Members, ThicknessSegment};
use crate::operations::arrays::{BuildArrays, MemberArray, NodeLineArrays};
use crate::operations::boundary::BuildBoundary;
use crate::section::{BoxDimensions, BoxSection, SectionProperties, SectionShape};

/// Output of [`ExtractCenterline`].
#[derive(Debug, Clone, PartialEq)]
pub struct Centerline {
    pub boundary: BoxBoundary,
    /// Every accepted perpendicular, before deduplication.
    pub segments: Vec<ThicknessSegment>,
    /// Resampled members with their junction points.
    pub members: Members,
    pub diagnostics: Vec<Diagnostic>,
}

impl Centerline {
    /// One array per member, in [`MemberKind::ALL`] order. Members without
    /// segments are placeholders.
    #[must_use]
    pub fn member_arrays(&self) -> Vec<MemberArray> {
        self.members.iter().map(MemberArray::from_member).collect()
    }

    /// Flattens the members into the node/line/thickness dataset.
    ///
    /// # Errors
    ///
    /// Propagates [`BuildArrays::execute`] errors.
    pub fn arrays(&self) -> Result<NodeLineArrays> {
        BuildArrays::new(&self.member_arrays()).execute()
    }
}

/// Extracts the member centerlines of a box section.
///
/// Boundary polygons are turned into thickness segments by dropping
/// perpendiculars between opposing faces. The segment midpoints are sorted
/// into members, then the webs are joined to the flanges and every member is
/// resampled to the target element length.
///
/// # Example
///
/// ```
/// use boxline::operations::centerline::ExtractCenterline;
/// use boxline::section::BoxDimensions;
///
/// let dims = BoxDimensions::default();
/// let centerline = ExtractCenterline::new(&dims, 1.6).execute().unwrap();
/// let arrays = centerline.arrays().unwrap();
/// assert_eq!(arrays.lines.len(), arrays.thicknesses.len());
/// ```
#[derive(Debug)]
pub struct ExtractCenterline<'a> {
    dims: &'a BoxDimensions,
    top_fiber_offset: f64,
    config: CenterlineConfig,
}

impl<'a> ExtractCenterline<'a> {
    /// Creates an extraction with the default configuration.
    ///
    /// `top_fiber_offset` is the height of the top fiber above the reference
    /// axis, in section units.
    #[must_use]
    pub fn new(dims: &'a BoxDimensions, top_fiber_offset: f64) -> Self {
        Self {
            dims,
            top_fiber_offset,
            config: CenterlineConfig::default(),
        }
    }

    /// Creates an extraction placed by the host's section properties.
    #[must_use]
    pub fn for_section(section: &'a BoxSection, properties: &SectionProperties) -> Self {
        Self::new(&section.dims, properties.top_fiber_offset())
    }

    #[must_use]
    pub fn with_config(mut self, config: CenterlineConfig) -> Self {
        self.config = config;
        self
    }

    /// Executes the extraction.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid configuration, a non-finite top fiber
    /// offset or an invalid dimension set, or when a boundary ring
    /// degenerates. Problems that only cost individual points are reported
    /// in [`Centerline::diagnostics`] instead.
    pub fn execute(&self) -> Result<Centerline> {
        self.config.validate()?;
        if !self.top_fiber_offset.is_finite() {
            return Err(OperationError::InvalidInput(format!(
                "top fiber offset must be finite, got {}",
                self.top_fiber_offset
            ))
            .into());
        }
        let boundary = BuildBoundary::new(self.dims, self.top_fiber_offset).execute()?;
        let mut diagnostics = Vec::new();

        for p in boundary.stray_inner_vertices() {
            Diagnostic::StrayInnerVertex(p).record(&mut diagnostics);
        }
        let net_area = boundary.net_area();
        if net_area <= 0.0 {
            Diagnostic::NonPositiveNetArea(net_area).record(&mut diagnostics);
        }

        let segments = self.thickness_segments(&boundary);
        debug!(segments = segments.len(), "projected thickness segments");

        let Classification {
            mut members,
            unclassified,
            distinct,
        } = ClassifySegments::new(&segments, &boundary, self.config.collinear_decimals).execute();
        debug!(
            distinct,
            classified = members.point_count(),
            unclassified = unclassified.len(),
            "classified segments"
        );
        for seg in unclassified {
            Diagnostic::UnclassifiedSegment(seg).record(&mut diagnostics);
        }
        for kind in [MemberKind::TopFlange, MemberKind::BottomFlange] {
            if members.get(kind).is_empty() {
                Diagnostic::EmptyMember(kind).record(&mut diagnostics);
            }
        }
        if boundary.shape == SectionShape::TwoCell && members.mid_web.is_empty() {
            Diagnostic::EmptyMember(MemberKind::MidWeb).record(&mut diagnostics);
        }

        let junctions = ConnectWebs::new(&members, self.config.span_tolerance).execute();
        inject(&mut members, &junctions.webs);
        diagnostics.extend(junctions.diagnostics);

        for kind in MemberKind::ALL {
            let member = members.get_mut(kind);
            *member = resample(member, self.config.target_length);
        }
        debug!(points = members.point_count(), "resampled members");

        Ok(Centerline {
            boundary,
            segments,
            members,
            diagnostics,
        })
    }

    /// Runs the projection passes: inner cell onto the outer boundary, the
    /// outer boundary onto itself, and for twin cells the left cell onto the
    /// outer boundary and the right cell onto the left one.
    fn thickness_segments(&self, boundary: &BoxBoundary) -> Vec<ThicknessSegment> {
        let cfg = &self.config;
        let outer = boundary.outer.as_slice();
        let primary = boundary.primary_cell();

        let mut segments = ProjectPerpendiculars::new(outer, primary, cfg).execute();
        segments.extend(
            ProjectPerpendiculars::new(outer, outer, cfg)
                .exclude_horizontal()
                .execute(),
        );
        if let Some(secondary) = boundary.secondary_cell() {
            segments.extend(ProjectPerpendiculars::new(outer, secondary, cfg).execute());
            segments.extend(
                ProjectPerpendiculars::new(secondary, primary, cfg)
                    .max_thickness(cfg.mid_web_max_thickness)
                    .execute(),
            );
        }
        segments
    }
}
