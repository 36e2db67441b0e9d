//! Geometric invariants of generated outlines across a grid of styles.

use bubblegeom::{
    ArrowDirection, ArrowPosPolicy, BubbleGeometry, BubbleStyle, CornerRadii, DirectionResolver,
    PathCommand, Rect,
};
use glam::DVec2;

const EPSILON: f64 = 1e-6;
const SEGMENTS: usize = 8;

const DIRECTIONS: [ArrowDirection; 5] = [
    ArrowDirection::None,
    ArrowDirection::Left,
    ArrowDirection::Up,
    ArrowDirection::Right,
    ArrowDirection::Down,
];

const POLICIES: [ArrowPosPolicy; 4] = [
    ArrowPosPolicy::TargetCenter,
    ArrowPosPolicy::SelfCenter,
    ArrowPosPolicy::SelfBegin,
    ArrowPosPolicy::SelfEnd,
];

struct Case {
    width: f64,
    height: f64,
    radii: CornerRadii,
    border_width: f64,
    fill_padding: f64,
    arrow_height: f64,
    target: (f64, f64),
}

fn cases() -> Vec<Case> {
    vec![
        Case {
            width: 200.0,
            height: 100.0,
            radii: CornerRadii::uniform(8.0),
            border_width: 2.0,
            fill_padding: 1.0,
            arrow_height: 10.0,
            target: (0.0, 0.0),
        },
        Case {
            width: 120.0,
            height: 60.0,
            radii: CornerRadii::new(12.0, 2.0, 0.0, 6.0),
            border_width: 4.0,
            fill_padding: 0.0,
            arrow_height: 10.0,
            target: (-300.0, 300.0),
        },
        Case {
            width: 90.0,
            height: 70.0,
            radii: CornerRadii::uniform(1.0),
            border_width: 0.0,
            fill_padding: 3.0,
            arrow_height: 10.0,
            target: (25.0, -12.0),
        },
        // padding wider than the arrow is tall
        Case {
            width: 160.0,
            height: 80.0,
            radii: CornerRadii::uniform(8.0),
            border_width: 2.0,
            fill_padding: 6.0,
            arrow_height: 4.0,
            target: (40.0, 0.0),
        },
    ]
}

fn style(case: &Case, direction: ArrowDirection, policy: ArrowPosPolicy) -> BubbleStyle {
    BubbleStyle::builder()
        .arrow_direction(direction)
        .arrow_pos_policy(policy)
        .arrow_pos_delta(15.0)
        .arrow_height(case.arrow_height)
        .arrow_width(20.0)
        .corner_radii(case.radii)
        .border_width(case.border_width)
        .fill_padding(case.fill_padding)
        .build()
}

/// Runs `check` for every case, direction and policy.
fn for_each_bubble(mut check: impl FnMut(&str, &mut BubbleGeometry)) {
    for (i, case) in cases().iter().enumerate() {
        for direction in DIRECTIONS {
            for policy in POLICIES {
                let mut geometry = BubbleGeometry::new(style(case, direction, policy));
                geometry.set_container_size(case.width, case.height);
                geometry.set_arrow_target(case.target.0, case.target.1);
                let label = format!("case {i}, {direction}, {policy:?}");
                check(&label, &mut geometry);
            }
        }
    }
}

fn signed_area(points: &[DVec2]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| {
            let (a, b) = (points[i], points[(i + 1) % n]);
            a.x * b.y - b.x * a.y
        })
        .sum::<f64>()
        / 2.0
}

fn orientation(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    (b - a).perp_dot(c - a)
}

fn segments_cross(a: DVec2, b: DVec2, c: DVec2, d: DVec2) -> bool {
    let (o1, o2) = (orientation(a, b, c), orientation(a, b, d));
    let (o3, o4) = (orientation(c, d, a), orientation(c, d, b));
    o1 * o2 < -EPSILON && o3 * o4 < -EPSILON
}

fn is_simple(points: &[DVec2]) -> bool {
    let n = points.len();
    for i in 0..n {
        for j in (i + 2)..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            let (a, b) = (points[i], points[(i + 1) % n]);
            let (c, d) = (points[j], points[(j + 1) % n]);
            if segments_cross(a, b, c, d) {
                return false;
            }
        }
    }
    true
}

/// Even-odd ray cast; points on the boundary count as outside.
fn strictly_inside(p: DVec2, polygon: &[DVec2]) -> bool {
    let n = polygon.len();
    let on_edge = (0..n).any(|i| {
        let (a, b) = (polygon[i], polygon[(i + 1) % n]);
        let t = ((p - a).dot(b - a) / (b - a).length_squared()).clamp(0.0, 1.0);
        p.distance(a + (b - a) * t) < EPSILON
    });
    if on_edge {
        return false;
    }
    let mut inside = false;
    for i in 0..n {
        let (a, b) = (polygon[i], polygon[(i + 1) % n]);
        if (a.y > p.y) != (b.y > p.y) {
            let x = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if p.x < x {
                inside = !inside;
            }
        }
    }
    inside
}

#[test]
fn outlines_are_closed_tours() {
    for_each_bubble(|label, geometry| {
        let outlines = geometry.recompute();
        for outline in [&outlines.border, &outlines.fill] {
            let commands = outline.commands();
            assert!(matches!(commands.first(), Some(PathCommand::MoveTo(_))), "{label}");
            assert_eq!(commands.last(), Some(&PathCommand::Close), "{label}");
            let (start, end) = (outline.start_point().unwrap(), outline.end_point().unwrap());
            assert!(start.distance(end) < EPSILON, "{label}: {start} != {end}");
        }
    });
}

#[test]
fn outlines_are_simple_and_clockwise() {
    for_each_bubble(|label, geometry| {
        let outlines = geometry.recompute();
        for outline in [&outlines.border, &outlines.fill] {
            let points = outline.flatten(SEGMENTS);
            assert!(signed_area(&points) > 0.0, "{label}: counter-clockwise outline");
            assert!(is_simple(&points), "{label}: self-intersecting outline {outline}");
        }
    });
}

#[test]
fn apex_stays_clear_of_corners() {
    for_each_bubble(|label, geometry| {
        let direction = geometry.direction();
        let border = geometry.border_shape();
        let Some((min, max)) = border.apex_range(direction) else {
            assert_eq!(direction, ArrowDirection::None, "{label}");
            return;
        };
        let along = if direction.is_horizontal_edge() {
            border.arrow_peak.x
        } else {
            border.arrow_peak.y
        };
        assert!(
            along >= min - EPSILON && along <= max + EPSILON,
            "{label}: {along} not in [{min}, {max}]"
        );
    });
}

#[test]
fn fill_apex_shares_border_apex_line() {
    for_each_bubble(|label, geometry| {
        let direction = geometry.direction();
        let (border, fill) = (geometry.border_shape().arrow_peak, geometry.fill_shape().arrow_peak);
        match direction {
            ArrowDirection::Up | ArrowDirection::Down => {
                assert!((border.x - fill.x).abs() < EPSILON, "{label}")
            }
            ArrowDirection::Left | ArrowDirection::Right => {
                assert!((border.y - fill.y).abs() < EPSILON, "{label}")
            }
            _ => {}
        }
    });
}

#[test]
fn fill_is_strictly_inside_border() {
    for_each_bubble(|label, geometry| {
        let outlines = geometry.recompute();
        let border = outlines.border.flatten(SEGMENTS);
        for p in outlines.fill.flatten(SEGMENTS) {
            assert!(strictly_inside(p, &border), "{label}: fill point {p} escapes the border");
        }
    });
}

#[test]
fn fill_arrow_never_outgrows_border_arrow() {
    for_each_bubble(|label, geometry| {
        let (border, fill) = (geometry.border_shape(), geometry.fill_shape());
        if geometry.direction() == ArrowDirection::None {
            return;
        }
        assert!(fill.arrow_width <= border.arrow_width + EPSILON, "{label}");
        assert!(fill.arrow_height <= border.arrow_height + EPSILON, "{label}");
    });
}

#[test]
fn recompute_is_byte_identical() {
    for_each_bubble(|label, geometry| {
        let first = geometry.recompute();
        let second = geometry.recompute();
        assert_eq!(first, second, "{label}");
        assert_eq!(first.border.to_string(), second.border.to_string(), "{label}");
    });
}

#[test]
fn outline_bounds_stay_in_container() {
    for_each_bubble(|label, geometry| {
        let size = geometry.container_size();
        let container = Rect::new(-EPSILON, -EPSILON, size.w + EPSILON, size.h + EPSILON);
        let bounds = geometry.recompute().border.bounds().unwrap();
        assert!(container.contains_rect(&bounds), "{label}: {bounds}");
    });
}

#[test]
fn resolve_auto_neighbours() {
    let bubble = Rect::new(100.0, 100.0, 200.0, 150.0);
    let cases = [
        (Rect::new(120.0, 110.0, 180.0, 140.0), ArrowDirection::None),
        (Rect::new(40.0, 115.0, 60.0, 135.0), ArrowDirection::Left),
        (Rect::new(240.0, 115.0, 260.0, 135.0), ArrowDirection::Right),
        (Rect::new(140.0, 40.0, 160.0, 60.0), ArrowDirection::Up),
        (Rect::new(140.0, 190.0, 160.0, 210.0), ArrowDirection::Down),
        (Rect::new(0.0, 0.0, 20.0, 20.0), ArrowDirection::None),
        (Rect::new(260.0, 200.0, 280.0, 220.0), ArrowDirection::None),
    ];
    for (target, expected) in cases {
        assert_eq!(
            DirectionResolver::resolve_auto(&bubble, &target),
            expected,
            "target {target}"
        );
        assert_eq!(BubbleGeometry::resolve_auto_direction(&bubble, &target), expected);
    }
}
