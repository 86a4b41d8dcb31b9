use serde::Serialize;
use tracing::debug;

use crate::error::{OperationError, Result};
use crate::geometry::member::{Member, MemberKind};
use crate::math::Point2;

/// One straight piece of a member centerline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemberSegment {
    pub start: Point2,
    pub end: Point2,
    /// Mean of the thicknesses at both ends.
    pub thickness: f64,
}

/// Splits a member polyline into its consecutive segments.
#[must_use]
pub fn member_segments(member: &Member) -> Vec<MemberSegment> {
    member
        .points
        .windows(2)
        .map(|w| MemberSegment {
            start: w[0].position,
            end: w[1].position,
            thickness: (w[0].thickness + w[1].thickness) / 2.0,
        })
        .collect()
}

/// How the coordinate lists of a [`MemberArray`] map onto lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrayLayout {
    /// `n` points, `n - 1` lines between neighbours.
    Chain,
    /// Every segment contributes its start and end, so entries `2k` and
    /// `2k + 1` form line `k`.
    Pairs,
}

/// Coordinates and thicknesses of one member, ready for the array builder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberArray {
    pub kind: MemberKind,
    pub layout: ArrayLayout,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// One value per line.
    pub thickness: Vec<f64>,
}

impl MemberArray {
    /// Stand-in for a member with no segments: a single zero entry in each
    /// list, so every section yields the same five arrays.
    #[must_use]
    pub fn placeholder(kind: MemberKind) -> Self {
        Self {
            kind,
            layout: ArrayLayout::Chain,
            x: vec![0.0],
            y: vec![0.0],
            thickness: vec![0.0],
        }
    }

    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_placeholder(&self) -> bool {
        self.x == [0.0] && self.y == [0.0] && self.thickness == [0.0]
    }

    /// Lays out a member's segments. The middle web uses [`ArrayLayout::Pairs`],
    /// every other member [`ArrayLayout::Chain`].
    #[must_use]
    pub fn from_member(member: &Member) -> Self {
        let segments = member_segments(member);
        if segments.is_empty() {
            return Self::placeholder(member.kind);
        }

        let thickness = segments.iter().map(|s| s.thickness).collect();
        if member.kind == MemberKind::MidWeb {
            let mut x = Vec::with_capacity(segments.len() * 2);
            let mut y = Vec::with_capacity(segments.len() * 2);
            for s in &segments {
                x.extend([s.start.x, s.end.x]);
                y.extend([s.start.y, s.end.y]);
            }
            Self {
                kind: member.kind,
                layout: ArrayLayout::Pairs,
                x,
                y,
                thickness,
            }
        } else {
            Self {
                kind: member.kind,
                layout: ArrayLayout::Chain,
                x: member.points.iter().map(|p| p.position.x).collect(),
                y: member.points.iter().map(|p| p.position.y).collect(),
                thickness,
            }
        }
    }

    fn check(&self) -> Result<()> {
        let needed = match self.layout {
            ArrayLayout::Chain => self.thickness.len() + 1,
            ArrayLayout::Pairs => self.thickness.len() * 2,
        };
        if self.x.len() != self.y.len() || self.x.len() < needed {
            return Err(OperationError::InvalidInput(format!(
                "{} array has {} x, {} y and {} thickness entries",
                self.kind,
                self.x.len(),
                self.y.len(),
                self.thickness.len()
            ))
            .into());
        }
        Ok(())
    }
}

/// Flat node/line/thickness dataset handed to the plate generator.
///
/// Node coordinates are distinct; every line joins two different nodes and
/// `thicknesses[i]` belongs to `lines[i]`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct NodeLineArrays {
    pub nodes: Vec<[f64; 2]>,
    pub lines: Vec<[usize; 2]>,
    pub thicknesses: Vec<f64>,
}

impl NodeLineArrays {
    #[allow(clippy::float_cmp)]
    fn node_index(&mut self, x: f64, y: f64) -> usize {
        if let Some(i) = self.nodes.iter().position(|n| n[0] == x && n[1] == y) {
            return i;
        }
        self.nodes.push([x, y]);
        self.nodes.len() - 1
    }

    fn push_line(&mut self, a: (f64, f64), b: (f64, f64), thickness: f64) {
        let i = self.node_index(a.0, a.1);
        let j = self.node_index(b.0, b.1);
        if i != j {
            self.lines.push([i, j]);
            self.thicknesses.push(thickness);
        }
    }

    /// Coordinates of both ends of line `i`.
    #[must_use]
    pub fn line_ends(&self, i: usize) -> Option<([f64; 2], [f64; 2])> {
        let [a, b] = *self.lines.get(i)?;
        Some((*self.nodes.get(a)?, *self.nodes.get(b)?))
    }
}

/// Merges member arrays into one node/line/thickness dataset.
///
/// Members are walked in the order given; nodes shared between members (the
/// junction points) are stored once. Placeholders and zero-length lines are
/// skipped.
#[derive(Debug)]
pub struct BuildArrays<'a> {
    arrays: &'a [MemberArray],
}

impl<'a> BuildArrays<'a> {
    #[must_use]
    pub fn new(arrays: &'a [MemberArray]) -> Self {
        Self { arrays }
    }

    /// Executes the build.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` when a member array's lists do
    /// not match its layout.
    pub fn execute(&self) -> Result<NodeLineArrays> {
        let mut out = NodeLineArrays::default();
        for array in self.arrays {
            if array.is_placeholder() {
                continue;
            }
            array.check()?;
            let (x, y) = (&array.x, &array.y);
            match array.layout {
                ArrayLayout::Chain => {
                    for (i, &t) in array.thickness.iter().enumerate() {
                        out.push_line((x[i], y[i]), (x[i + 1], y[i + 1]), t);
                    }
                }
                ArrayLayout::Pairs => {
                    for i in (0..array.thickness.len() * 2).step_by(2) {
                        out.push_line((x[i], y[i]), (x[i + 1], y[i + 1]), array.thickness[i / 2]);
                    }
                }
            }
        }
        debug!(
            nodes = out.nodes.len(),
            lines = out.lines.len(),
            "built node/line arrays"
        );
        Ok(out)
    }
}
