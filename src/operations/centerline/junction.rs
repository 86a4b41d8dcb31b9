use tracing::debug;

use super::diagnostic::Diagnostic;
use crate::geometry::member::{CenterPoint, Member, MemberKind, Members};
use crate::math::distance_2d::{perpendicular_foot, PerpendicularFoot, SpanMode};
use crate::math::intersect_2d::{horizontal_intersect, lines_through_points_intersect};
use crate::math::Point2;

/// Where one web meets the flanges.
///
/// `top` carries the thickness of the web's highest point, `bottom` that of
/// its lowest. An end is `None` when it could not be resolved; the reason is
/// reported as a [`Diagnostic`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WebJunction {
    pub web: MemberKind,
    pub top: Option<CenterPoint>,
    pub bottom: Option<CenterPoint>,
}

/// Junctions of every populated web plus the issues met finding them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Junctions {
    pub webs: Vec<WebJunction>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Finds the points where the web centerlines meet the flange centerlines.
///
/// The top of a web is the nearest perpendicular foot of its highest point on
/// any flange polyline. The bottoms of the outer webs come from intersecting
/// the left web's lowest chord with the bottom flange's leftmost chord; the
/// right web takes the mirror image. The middle web's lowest chord is cut
/// with the horizontal through the lowest bottom-flange point.
#[derive(Debug)]
pub struct ConnectWebs<'a> {
    members: &'a Members,
    span_tolerance: f64,
}

impl<'a> ConnectWebs<'a> {
    #[must_use]
    pub fn new(members: &'a Members, span_tolerance: f64) -> Self {
        Self {
            members,
            span_tolerance,
        }
    }

    #[must_use]
    pub fn execute(&self) -> Junctions {
        let mut out = Junctions::default();
        let m = self.members;

        let mut webs = vec![&m.left_web, &m.right_web];
        if !m.mid_web.is_empty() {
            webs.push(&m.mid_web);
        }

        for web in webs {
            if web.is_empty() {
                Diagnostic::EmptyMember(web.kind).record(&mut out.diagnostics);
                continue;
            }
            let top = self.top_of(web, &mut out.diagnostics);
            out.webs.push(WebJunction {
                web: web.kind,
                top,
                bottom: None,
            });
        }

        self.bottoms(&mut out);
        debug!(webs = out.webs.len(), "connected webs to flanges");
        out
    }

    fn top_of(&self, web: &Member, diagnostics: &mut Vec<Diagnostic>) -> Option<CenterPoint> {
        let highest = web.topmost()?;
        let mut best: Option<PerpendicularFoot> = None;
        for flange in [&self.members.top_flange, &self.members.bottom_flange] {
            for pair in flange.points.windows(2) {
                let Some(hit) = perpendicular_foot(
                    &pair[0].position,
                    &pair[1].position,
                    &highest.position,
                    SpanMode::Bounded,
                    self.span_tolerance,
                ) else {
                    continue;
                };
                // Later candidates win ties.
                match best {
                    Some(b) if hit.distance > b.distance => {}
                    _ => best = Some(hit),
                }
            }
        }
        match best {
            Some(hit) => Some(CenterPoint {
                position: hit.foot,
                thickness: highest.thickness,
            }),
            None => {
                Diagnostic::NoProjection {
                    member: web.kind,
                    point: highest.position,
                }
                .record(diagnostics);
                None
            }
        }
    }

    fn bottoms(&self, out: &mut Junctions) {
        let m = self.members;
        let outer = m
            .left_web
            .lowest_two()
            .zip(m.bottom_flange.leftmost_two())
            .and_then(|([w0, w1], [f0, f1])| lines_through_points_intersect(&w0, &w1, &f0, &f1));
        let floor = m.bottom_flange.min_y();
        let middle = m
            .mid_web
            .lowest_two()
            .zip(floor)
            .and_then(|([w0, w1], y)| horizontal_intersect(&w0, &w1, y));

        for junction in &mut out.webs {
            let web = m.get(junction.web);
            let point = match junction.web {
                MemberKind::LeftWeb => outer,
                MemberKind::RightWeb => outer.map(|p| Point2::new(-p.x, p.y)),
                _ => middle,
            };
            match (point, web.bottommost()) {
                (Some(position), Some(lowest)) => {
                    junction.bottom = Some(CenterPoint {
                        position,
                        thickness: lowest.thickness,
                    });
                }
                _ => Diagnostic::DegenerateJunction {
                    member: junction.web,
                    reason: "web and bottom flange chords do not intersect".to_owned(),
                }
                .record(&mut out.diagnostics),
            }
        }
    }
}

/// Adds the junction points to the flanges and webs, then re-sorts every
/// member along its axis.
pub fn inject(members: &mut Members, junctions: &[WebJunction]) {
    for j in junctions {
        if let Some(top) = j.top {
            members.top_flange.points.push(top);
            members.get_mut(j.web).points.push(top);
        }
        if let Some(bottom) = j.bottom {
            members.bottom_flange.points.push(bottom);
            members.get_mut(j.web).points.push(bottom);
        }
    }
    for kind in MemberKind::ALL {
        members.get_mut(kind).sort_along_axis();
    }
}
