#![allow(clippy::unwrap_used)]

use approx::assert_abs_diff_eq;
use boxline::geometry::{Member, MemberKind};
use boxline::operations::centerline::ClassifySegments;
use boxline::operations::{ArrayLayout, Centerline, Diagnostic, ExtractCenterline};
use boxline::section::{BoxDimensions, SectionShape};
use boxline::CenterlineConfig;

const TOP_FIBER: f64 = 1.6;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn extract(dims: &BoxDimensions) -> Centerline {
    init_tracing();
    ExtractCenterline::new(dims, TOP_FIBER).execute().unwrap()
}

fn two_cell() -> BoxDimensions {
    BoxDimensions {
        shape: SectionShape::TwoCell,
        bi4: 0.2,
        ..BoxDimensions::default()
    }
}

/// Cantilever underside with a kink and a bottom haunch on the web.
fn haunched_one_cell() -> BoxDimensions {
    BoxDimensions {
        ho21: 0.05,
        ho22: 0.1,
        bo12: 0.9,
        ho31: 0.15,
        bo21: 0.1,
        ..BoxDimensions::default()
    }
}

fn assert_mirrored(left: &Member, right: &Member) {
    assert_eq!(left.len(), right.len());
    for (l, r) in left.points.iter().zip(&right.points) {
        assert_abs_diff_eq!(l.position.x, -r.position.x, epsilon = 1e-6);
        assert_abs_diff_eq!(l.position.y, r.position.y, epsilon = 1e-6);
        assert_abs_diff_eq!(l.thickness, r.thickness, epsilon = 1e-6);
    }
}

#[test]
fn default_one_cell_end_to_end() {
    let c = extract(&BoxDimensions::default());

    let arrays = c.member_arrays();
    assert_eq!(arrays.len(), 5);
    let kinds: Vec<MemberKind> = arrays.iter().map(|a| a.kind).collect();
    assert_eq!(kinds, MemberKind::ALL.to_vec());
    assert!(arrays[..4].iter().all(|a| !a.is_placeholder()));
    assert!(arrays[4].is_placeholder());
    assert_eq!(arrays[4].x, vec![0.0]);

    let out = c.arrays().unwrap();
    assert!(!out.lines.is_empty());
    assert_eq!(out.lines.len(), out.thicknesses.len());
    assert!(out.thicknesses.iter().all(|&t| t > 0.0));
    assert!(out.nodes.iter().all(|n| n[0].is_finite() && n[1].is_finite()));
    for [a, b] in &out.lines {
        assert_ne!(a, b);
        assert!(*a < out.nodes.len() && *b < out.nodes.len());
    }
    for (i, n) in out.nodes.iter().enumerate() {
        assert!(out.nodes[i + 1..].iter().all(|m| m != n));
    }
}

#[test]
fn default_lines_respect_target_length() {
    let c = extract(&BoxDimensions::default());
    let out = c.arrays().unwrap();
    for i in 0..out.lines.len() {
        let (a, b) = out.line_ends(i).unwrap();
        let len = ((b[0] - a[0]).powi(2) + (b[1] - a[1]).powi(2)).sqrt();
        assert!(len <= 0.3 + 1e-9, "line {i} is {len} long");
    }
}

#[test]
fn symmetric_section_has_mirrored_webs() {
    let c = extract(&BoxDimensions::default());
    assert_mirrored(&c.members.left_web, &c.members.right_web);

    let taller = BoxDimensions {
        ho3: 2.7,
        ..BoxDimensions::default()
    };
    let c = extract(&taller);
    assert_mirrored(&c.members.left_web, &c.members.right_web);
}

#[test]
fn two_cell_mid_web_is_on_axis() {
    let c = extract(&two_cell());
    assert!(!c
        .diagnostics
        .iter()
        .any(|d| matches!(d, Diagnostic::EmptyMember(_))));

    let arrays = c.member_arrays();
    let mid = &arrays[4];
    assert_eq!(mid.kind, MemberKind::MidWeb);
    assert_eq!(mid.layout, ArrayLayout::Pairs);
    assert!(!mid.thickness.is_empty());
    assert_eq!(mid.x.len(), mid.thickness.len() * 2);
    assert!(mid.x.iter().all(|x| x.abs() < 1e-12));

    let out = c.arrays().unwrap();
    let on_axis = out
        .lines
        .iter()
        .filter(|[a, b]| out.nodes[*a][0].abs() < 1e-12 && out.nodes[*b][0].abs() < 1e-12)
        .count();
    assert!(on_axis >= 1);
    assert_mirrored(&c.members.left_web, &c.members.right_web);
}

#[test]
fn haunched_section_classifies_every_segment() {
    let c = extract(&haunched_one_cell());

    let check = ClassifySegments::new(&c.segments, &c.boundary, 5).execute();
    assert_eq!(
        check.members.point_count() + check.unclassified.len(),
        check.distinct
    );
    assert!(check.unclassified.is_empty());
    assert!(!check.members.left_web.is_empty());
    assert!(!check.members.right_web.is_empty());

    assert!(c.diagnostics.is_empty());
    assert_mirrored(&c.members.left_web, &c.members.right_web);
    assert_eq!(c.boundary.outer.len(), 17);
}

#[test]
fn classification_is_stable_across_runs() {
    let c = extract(&haunched_one_cell());
    let first = ClassifySegments::new(&c.segments, &c.boundary, 5).execute();
    let second = ClassifySegments::new(&c.segments, &c.boundary, 5).execute();
    assert_eq!(first, second);
}

#[test]
fn webs_reach_both_flanges() {
    for dims in [BoxDimensions::default(), two_cell(), haunched_one_cell()] {
        let c = extract(&dims);
        for web in [&c.members.left_web, &c.members.right_web] {
            let top = web.topmost().unwrap().position;
            let bottom = web.bottommost().unwrap().position;
            assert!(c.members.top_flange.points.iter().any(|p| p.position == top));
            assert!(c.members.bottom_flange.points.iter().any(|p| p.position == bottom));
        }
    }
}

#[test]
fn custom_config_changes_resolution() {
    init_tracing();
    let dims = BoxDimensions::default();
    let cfg: CenterlineConfig = serde_json::from_str(r#"{"target_length": 0.15}"#).unwrap();
    assert_abs_diff_eq!(cfg.max_thickness, 1.0);
    let fine = ExtractCenterline::new(&dims, TOP_FIBER)
        .with_config(cfg)
        .execute()
        .unwrap();
    let coarse = extract(&dims);
    assert!(fine.members.point_count() > coarse.members.point_count());
}
