//! Border and fill shapes derived from a style and a container rectangle.
//!
//! The border shape is the container inset by half the border width (so a
//! centered stroke stays fully visible) with the arrow side pulled in by the
//! arrow height. The fill shape is derived from the border shape: inset by the
//! full border width plus the fill padding, with an arrow rescaled so its
//! slanted sides run parallel to the border's.

use glam::{DVec2, dvec2};

use crate::log::{debug, warn};
use crate::types::Rect;

use super::bound;
use super::style::{ArrowDirection, ArrowPosPolicy, BubbleStyle, CornerRadii};

/// Concrete outline parameters for one of the two bubble paths.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Shape {
    /// Rectangle the rounded body is drawn inside (excludes the arrow)
    pub rect: Rect,
    pub border_width: f64,
    pub arrow_height: f64,
    pub arrow_width: f64,
    pub arrow_pos_delta: f64,
    /// Arrow apex; the origin when the shape has no arrow
    pub arrow_peak: DVec2,
    pub radii: CornerRadii,
}

impl Shape {
    /// Start and end of the range the apex may occupy along its edge.
    ///
    /// Keeping the apex inside this range leaves every rounded corner fully
    /// visible next to the arrow base. Returns `None` for directions without
    /// an arrow.
    pub fn apex_range(&self, direction: ArrowDirection) -> Option<(f64, f64)> {
        let rect = &self.rect;
        let margin = self.arrow_width / 2.0 + self.border_width / 2.0;
        let (start, near, end, far) = match direction {
            ArrowDirection::Up => {
                (rect.left, self.radii.top_left, rect.right, self.radii.top_right)
            }
            ArrowDirection::Down => {
                (rect.left, self.radii.bottom_left, rect.right, self.radii.bottom_right)
            }
            ArrowDirection::Left => {
                (rect.top, self.radii.top_left, rect.bottom, self.radii.bottom_left)
            }
            ArrowDirection::Right => {
                (rect.top, self.radii.top_right, rect.bottom, self.radii.bottom_right)
            }
            ArrowDirection::None | ArrowDirection::Auto => return None,
        };
        Some((start + near + margin, end - far - margin))
    }
}

/// Both shapes for one bubble, plus the direction they were resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResolvedShapes {
    /// Direction actually drawn; `None` when the arrow was suppressed
    pub direction: ArrowDirection,
    pub border: Shape,
    pub fill: Shape,
}

/// Derives border and fill shapes from a style.
pub struct ShapeResolver;

impl ShapeResolver {
    /// Resolve both shapes for a container.
    ///
    /// `arrow_to` is the anchor center relative to the bubble center, used by
    /// [`ArrowPosPolicy::TargetCenter`].
    pub fn resolve(container: Rect, style: &BubbleStyle, arrow_to: DVec2) -> ResolvedShapes {
        let direction = Self::effective_direction(style);
        let border = Self::border_shape(container, style, direction, arrow_to);
        let fill = Self::fill_shape(container, style, direction, &border);
        debug!(
            %direction,
            border_rect = %border.rect,
            fill_rect = %fill.rect,
            "resolved bubble shapes"
        );
        ResolvedShapes { direction, border, fill }
    }

    /// The direction that will be drawn for this style.
    ///
    /// `Auto` must be resolved by the caller first; an unresolved `Auto` and an
    /// arrow with no height or width both draw as `None`.
    pub fn effective_direction(style: &BubbleStyle) -> ArrowDirection {
        match style.arrow_direction {
            ArrowDirection::Auto => {
                warn!("arrow direction Auto reached the shape resolver unresolved; drawing none");
                ArrowDirection::None
            }
            dir if dir.has_arrow()
                && (style.arrow_height.raw() <= 0.0 || style.arrow_width.raw() <= 0.0) =>
            {
                warn!(
                    arrow_height = style.arrow_height.raw(),
                    arrow_width = style.arrow_width.raw(),
                    "arrow has no area; drawing none"
                );
                ArrowDirection::None
            }
            dir => dir,
        }
    }

    /// Outer outline, inset by half the border width.
    pub fn border_shape(
        container: Rect,
        style: &BubbleStyle,
        direction: ArrowDirection,
        arrow_to: DVec2,
    ) -> Shape {
        let border_width = style.border_width.raw();
        let arrow_height = arrow_depth(style, direction);
        let half = border_width / 2.0;

        let mut shape = Shape {
            rect: inset_for_arrow(container, half, arrow_height, direction),
            border_width,
            arrow_height: style.arrow_height.raw(),
            arrow_width: style.arrow_width.raw(),
            arrow_pos_delta: style.arrow_pos_delta.raw(),
            arrow_peak: DVec2::ZERO,
            radii: style.corner_radii,
        };
        shape.arrow_peak = border_peak(&shape, direction, style.arrow_pos_policy, arrow_to);
        shape
    }

    /// Inner outline, derived from the resolved border shape.
    pub fn fill_shape(
        container: Rect,
        style: &BubbleStyle,
        direction: ArrowDirection,
        border: &Shape,
    ) -> Shape {
        let border_width = style.border_width.raw();
        let fill_padding = style.fill_padding.raw();
        let inset = border_width / 2.0 + fill_padding;

        let mut shape = Shape {
            rect: inset_for_arrow(
                container,
                border_width + fill_padding,
                arrow_depth(style, direction),
                direction,
            ),
            border_width: 0.0,
            arrow_height: border.arrow_height,
            arrow_width: border.arrow_width,
            arrow_pos_delta: border.arrow_pos_delta,
            arrow_peak: DVec2::ZERO,
            radii: style.corner_radii.shrink(inset),
        };

        if direction.has_arrow() {
            let (height, width) = rescale_arrow(border.arrow_height, border.arrow_width, inset);
            shape.arrow_height = height;
            shape.arrow_width = width;
            shape.arrow_peak = fill_peak(&shape, direction, border);
        }
        shape
    }
}

/// Depth the arrow takes out of the container on its side.
fn arrow_depth(style: &BubbleStyle, direction: ArrowDirection) -> f64 {
    if direction.has_arrow() { style.arrow_height.raw() } else { 0.0 }
}

fn inset_for_arrow(
    container: Rect,
    inset: f64,
    arrow_height: f64,
    direction: ArrowDirection,
) -> Rect {
    let extra = |hit: bool| if hit { arrow_height } else { 0.0 };
    container.inset_sides(
        inset + extra(direction.is_left()),
        inset + extra(direction.is_up()),
        inset + extra(direction.is_right()),
        inset + extra(direction.is_down()),
    )
}

/// Shrink an arrow so its sides stay parallel to the outer arrow's sides
/// when the outline moves inward by `inset`.
///
/// The intermediate width goes negative once the inset swallows the outer
/// arrow's base; the resulting height is only floored at zero, so the notch
/// flattens out instead of inverting.
///
/// Returns `(height, width)`; callers guarantee a non-zero height and width.
fn rescale_arrow(arrow_height: f64, arrow_width: f64, inset: f64) -> (f64, f64) {
    let base_angle = (arrow_height / (arrow_width / 2.0)).atan();
    let width = arrow_width - 2.0 * inset / base_angle.sin();
    let protrusion = width * arrow_height / arrow_width;
    let height = (protrusion + inset).max(0.0);
    (height, height * arrow_width / arrow_height)
}

fn border_peak(
    shape: &Shape,
    direction: ArrowDirection,
    policy: ArrowPosPolicy,
    arrow_to: DVec2,
) -> DVec2 {
    let Some((min, max)) = shape.apex_range(direction) else {
        return DVec2::ZERO;
    };
    let rect = &shape.rect;
    let along = bound(min, target_along_edge(shape, direction, policy, arrow_to), max);
    match direction {
        ArrowDirection::Up => dvec2(along, rect.top - shape.arrow_height),
        ArrowDirection::Down => dvec2(along, rect.bottom + shape.arrow_height),
        ArrowDirection::Left => dvec2(rect.left - shape.arrow_height, along),
        ArrowDirection::Right => dvec2(rect.right + shape.arrow_height, along),
        ArrowDirection::None | ArrowDirection::Auto => DVec2::ZERO,
    }
}

/// Where the policy wants the apex, before clamping.
fn target_along_edge(
    shape: &Shape,
    direction: ArrowDirection,
    policy: ArrowPosPolicy,
    arrow_to: DVec2,
) -> f64 {
    let rect = &shape.rect;
    let horizontal = direction.is_horizontal_edge();
    let (begin, end, center, target) = if horizontal {
        (rect.left, rect.right, rect.center().x, arrow_to.x)
    } else {
        (rect.top, rect.bottom, rect.center().y, arrow_to.y)
    };
    match policy {
        ArrowPosPolicy::TargetCenter => center + target,
        ArrowPosPolicy::SelfCenter => center,
        ArrowPosPolicy::SelfBegin => begin + shape.arrow_pos_delta,
        ArrowPosPolicy::SelfEnd => end - shape.arrow_pos_delta,
    }
}

/// The fill apex reuses the border apex coordinate along the edge so both
/// apexes stay on one axis-aligned line.
fn fill_peak(fill: &Shape, direction: ArrowDirection, border: &Shape) -> DVec2 {
    let rect = &fill.rect;
    match direction {
        ArrowDirection::Up => dvec2(border.arrow_peak.x, rect.top - fill.arrow_height),
        ArrowDirection::Down => dvec2(border.arrow_peak.x, rect.bottom + fill.arrow_height),
        ArrowDirection::Left => dvec2(rect.left - fill.arrow_height, border.arrow_peak.y),
        ArrowDirection::Right => dvec2(rect.right + fill.arrow_height, border.arrow_peak.y),
        ArrowDirection::None | ArrowDirection::Auto => DVec2::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::style::StyleBuilder;

    const EPSILON: f64 = 1e-9;

    fn container() -> Rect {
        Rect::new(0.0, 0.0, 200.0, 100.0)
    }

    fn style(direction: ArrowDirection) -> StyleBuilder {
        BubbleStyle::builder()
            .arrow_direction(direction)
            .arrow_pos_policy(ArrowPosPolicy::SelfCenter)
            .arrow_height(10.0)
            .arrow_width(20.0)
            .corner_radius(8.0)
            .border_width(2.0)
            .fill_padding(1.0)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < EPSILON, "{actual} != {expected}");
    }

    #[test]
    fn border_rect_is_inset_by_half_border_and_arrow() {
        let shapes =
            ShapeResolver::resolve(container(), &style(ArrowDirection::Up).build(), DVec2::ZERO);
        assert_eq!(shapes.direction, ArrowDirection::Up);
        assert_eq!(shapes.border.rect, Rect::new(1.0, 11.0, 199.0, 99.0));
        assert_eq!(shapes.border.arrow_peak, dvec2(100.0, 1.0));
    }

    #[test]
    fn no_arrow_only_insets_half_border() {
        let shapes =
            ShapeResolver::resolve(container(), &style(ArrowDirection::None).build(), DVec2::ZERO);
        assert_eq!(shapes.border.rect, Rect::new(1.0, 1.0, 199.0, 99.0));
        assert_eq!(shapes.fill.rect, Rect::new(3.0, 3.0, 197.0, 97.0));
        assert_eq!(shapes.border.arrow_peak, DVec2::ZERO);
    }

    #[test]
    fn each_direction_insets_its_own_side() {
        let cases = [
            (ArrowDirection::Left, Rect::new(11.0, 1.0, 199.0, 99.0)),
            (ArrowDirection::Right, Rect::new(1.0, 1.0, 189.0, 99.0)),
            (ArrowDirection::Down, Rect::new(1.0, 1.0, 199.0, 89.0)),
        ];
        for (direction, expected) in cases {
            let shapes =
                ShapeResolver::resolve(container(), &style(direction).build(), DVec2::ZERO);
            assert_eq!(shapes.border.rect, expected, "{direction}");
        }
    }

    #[test]
    fn target_center_follows_arrow_to_within_bounds() {
        let s = style(ArrowDirection::Down)
            .arrow_pos_policy(ArrowPosPolicy::TargetCenter)
            .build();
        let shapes = ShapeResolver::resolve(container(), &s, dvec2(30.0, 0.0));
        assert_close(shapes.border.arrow_peak.x, 130.0);
        assert_close(shapes.border.arrow_peak.y, 99.0);

        // Far to the right: clamped to right - radius - aw/2 - bw/2
        let shapes = ShapeResolver::resolve(container(), &s, dvec2(500.0, 0.0));
        assert_close(shapes.border.arrow_peak.x, 199.0 - 8.0 - 10.0 - 1.0);

        // Far to the left: clamped to left + radius + aw/2 + bw/2
        let shapes = ShapeResolver::resolve(container(), &s, dvec2(-500.0, 0.0));
        assert_close(shapes.border.arrow_peak.x, 1.0 + 8.0 + 10.0 + 1.0);
    }

    #[test]
    fn self_begin_and_end_use_delta() {
        let s = style(ArrowDirection::Left)
            .arrow_pos_policy(ArrowPosPolicy::SelfBegin)
            .arrow_pos_delta(40.0)
            .build();
        let shapes = ShapeResolver::resolve(container(), &s, DVec2::ZERO);
        assert_close(shapes.border.arrow_peak.y, 41.0);
        assert_close(shapes.border.arrow_peak.x, 1.0);

        let s = s.to_builder().arrow_pos_policy(ArrowPosPolicy::SelfEnd).build();
        let shapes = ShapeResolver::resolve(container(), &s, DVec2::ZERO);
        assert_close(shapes.border.arrow_peak.y, 59.0);
    }

    #[test]
    fn small_delta_is_clamped_clear_of_corner() {
        let s = style(ArrowDirection::Right)
            .arrow_pos_policy(ArrowPosPolicy::SelfBegin)
            .arrow_pos_delta(0.0)
            .build();
        let shapes = ShapeResolver::resolve(container(), &s, DVec2::ZERO);
        let (min, _) = shapes.border.apex_range(ArrowDirection::Right).unwrap();
        assert_close(min, 1.0 + 8.0 + 10.0 + 1.0);
        assert_close(shapes.border.arrow_peak.y, min);
        assert_close(shapes.border.arrow_peak.x, 199.0);
    }

    #[test]
    fn fill_radii_shrink_and_floor_at_zero() {
        let s = style(ArrowDirection::Up)
            .corner_radii(CornerRadii::new(8.0, 1.0, 2.0, 0.0))
            .build();
        let shapes = ShapeResolver::resolve(container(), &s, DVec2::ZERO);
        assert_eq!(shapes.border.radii, CornerRadii::new(8.0, 1.0, 2.0, 0.0));
        assert_eq!(shapes.fill.radii, CornerRadii::new(6.0, 0.0, 0.0, 0.0));
        assert_close(shapes.fill.border_width, 0.0);
    }

    #[test]
    fn fill_arrow_keeps_border_slope() {
        let shapes =
            ShapeResolver::resolve(container(), &style(ArrowDirection::Up).build(), DVec2::ZERO);
        let border = shapes.border;
        let fill = shapes.fill;
        assert_close(
            fill.arrow_height / fill.arrow_width,
            border.arrow_height / border.arrow_width,
        );
        assert!(fill.arrow_width < border.arrow_width);
        assert_eq!(fill.rect, Rect::new(3.0, 13.0, 197.0, 97.0));
        assert_close(fill.arrow_peak.x, border.arrow_peak.x);
        assert!(fill.arrow_peak.y > border.arrow_peak.y);
        assert!(fill.arrow_peak.y < border.rect.top);
    }

    #[test]
    fn fill_rescale_matches_formula() {
        // ah = 10, aw = 20, inset = 2: base angle = atan(1)
        let (height, width) = rescale_arrow(10.0, 20.0, 2.0);
        let w = 20.0 - 4.0 / std::f64::consts::FRAC_1_SQRT_2;
        assert_close(height, w / 2.0 + 2.0);
        assert_close(width, height * 2.0);
    }

    #[test]
    fn rescale_follows_formula_past_zero_width() {
        // default 6 x 10 arrow, border 2, padding 4: inset 5 swallows the base
        let (height, width) = rescale_arrow(6.0, 10.0, 5.0);
        let sin = (6.0_f64 / 5.0).atan().sin();
        let w = 10.0 - 10.0 / sin;
        assert!(w < 0.0);
        assert_close(height, w * 6.0 / 10.0 + 5.0);
        assert_close(height, 3.189750324093346);
        assert_close(width, height * 10.0 / 6.0);
        assert!(width <= 10.0);
    }

    #[test]
    fn rescale_flattens_instead_of_inverting() {
        let (height, width) = rescale_arrow(4.0, 6.0, 50.0);
        assert_close(height, 0.0);
        assert_close(width, 0.0);
    }

    #[test]
    fn wide_padding_keeps_fill_arrow_inside_border_arrow() {
        for (arrow_height, arrow_width, padding) in [(6.0, 10.0, 4.0), (4.0, 20.0, 6.0)] {
            let s = style(ArrowDirection::Up)
                .arrow_pos_policy(ArrowPosPolicy::SelfBegin)
                .arrow_height(arrow_height)
                .arrow_width(arrow_width)
                .fill_padding(padding)
                .build();
            let shapes = ShapeResolver::resolve(container(), &s, DVec2::ZERO);
            let (border, fill) = (shapes.border, shapes.fill);
            assert!(fill.arrow_width <= border.arrow_width);
            assert!(fill.arrow_height <= border.arrow_height);
            // fill base stays clear of the fill's top-left corner arc
            let arc_end = fill.rect.left + fill.radii.top_left;
            assert!(fill.arrow_peak.x - fill.arrow_width / 2.0 >= arc_end);
        }
    }

    #[test]
    fn zero_sized_arrow_is_suppressed() {
        let s = style(ArrowDirection::Left).arrow_width(0.0).build();
        let shapes = ShapeResolver::resolve(container(), &s, DVec2::ZERO);
        assert_eq!(shapes.direction, ArrowDirection::None);
        assert_eq!(shapes.border.rect, Rect::new(1.0, 1.0, 199.0, 99.0));
        assert!(shapes.fill.arrow_height.is_finite());
    }

    #[test]
    fn unresolved_auto_draws_without_arrow() {
        let s = style(ArrowDirection::Auto).build();
        assert_eq!(ShapeResolver::effective_direction(&s), ArrowDirection::None);
    }

    #[test]
    fn degenerate_container_stays_finite() {
        let s = style(ArrowDirection::Down).corner_radius(500.0).build();
        let shapes = ShapeResolver::resolve(Rect::new(0.0, 0.0, 4.0, 3.0), &s, DVec2::ZERO);
        for value in [
            shapes.border.arrow_peak.x,
            shapes.border.arrow_peak.y,
            shapes.fill.arrow_peak.x,
            shapes.fill.arrow_peak.y,
            shapes.fill.arrow_width,
        ] {
            assert!(value.is_finite());
        }
    }
}
