//! The bubble geometry facade.
//!
//! [`BubbleGeometry`] owns one bubble's inputs (container size, style, arrow
//! target, pressed state) and the shapes resolved from them. Every setter
//! re-resolves the shapes in full; [`BubbleGeometry::recompute`] additionally
//! traces both outlines for painting.
//!
//! ```
//! use bubblegeom::{ArrowDirection, BubbleGeometry, BubbleStyle};
//!
//! let style = BubbleStyle::builder()
//!     .arrow_direction(ArrowDirection::Down)
//!     .arrow_height(8.0)
//!     .arrow_width(16.0)
//!     .corner_radius(6.0)
//!     .build();
//!
//! let mut bubble = BubbleGeometry::new(style);
//! bubble.set_container_size(120.0, 48.0);
//! let outlines = bubble.recompute();
//! assert_eq!(outlines.direction, ArrowDirection::Down);
//! assert!(!outlines.border.is_empty());
//! ```

use glam::DVec2;

use crate::geometry::direction::DirectionResolver;
use crate::geometry::outline::{Outline, OutlineBuilder};
use crate::geometry::shape::{ResolvedShapes, Shape, ShapeResolver};
use crate::geometry::style::{ArrowDirection, BubbleStyle, Color};
use crate::log::debug;
use crate::types::{Insets, Rect, Size};

/// Outlines ready to paint: fill first, then the border stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct BubbleOutlines {
    /// Direction actually drawn
    pub direction: ArrowDirection,
    pub border: Outline,
    pub fill: Outline,
}

/// Geometry state of a single bubble.
#[derive(Debug, Clone)]
pub struct BubbleGeometry {
    container: Size,
    style: BubbleStyle,
    /// Anchor center relative to the bubble center
    arrow_to: DVec2,
    /// Result of the last auto resolution, used while the style says `Auto`
    auto_direction: Option<ArrowDirection>,
    pressed: bool,
    shapes: ResolvedShapes,
}

impl Default for BubbleGeometry {
    fn default() -> Self {
        BubbleGeometry::new(BubbleStyle::default())
    }
}

impl BubbleGeometry {
    pub fn new(style: BubbleStyle) -> Self {
        let mut geometry = BubbleGeometry {
            container: Size::default(),
            style,
            arrow_to: DVec2::ZERO,
            auto_direction: None,
            pressed: false,
            shapes: ResolvedShapes::default(),
        };
        geometry.refresh();
        geometry
    }

    pub fn set_container_size(&mut self, width: f64, height: f64) {
        self.container = Size::new(width, height);
        self.refresh();
    }

    pub fn set_style(&mut self, style: BubbleStyle) {
        if style.arrow_direction != ArrowDirection::Auto {
            self.auto_direction = None;
        }
        self.style = style;
        self.refresh();
    }

    /// Set the anchor center offset relative to the bubble center.
    pub fn set_arrow_target(&mut self, dx: f64, dy: f64) {
        self.arrow_to = DVec2::new(dx, dy);
        self.refresh();
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    /// Point the bubble at `target_rect`.
    ///
    /// Stores the center offset as the arrow target and, when the style asks
    /// for `Auto`, resolves the direction from the two rects. Call again
    /// whenever either rect moves.
    pub fn anchor_to(&mut self, self_rect: &Rect, target_rect: &Rect) {
        self.arrow_to = target_rect.center() - self_rect.center();
        if self.style.arrow_direction == ArrowDirection::Auto {
            self.auto_direction = Some(Self::resolve_auto_direction(self_rect, target_rect));
        }
        self.refresh();
    }

    /// Direction pointing from `self_rect` at `target_rect`.
    pub fn resolve_auto_direction(self_rect: &Rect, target_rect: &Rect) -> ArrowDirection {
        DirectionResolver::resolve_auto(self_rect, target_rect)
    }

    /// Re-resolve both shapes and trace their outlines.
    pub fn recompute(&mut self) -> BubbleOutlines {
        self.refresh();
        self.outlines()
    }

    /// Trace outlines of the shapes resolved by the last change.
    pub fn outlines(&self) -> BubbleOutlines {
        let direction = self.shapes.direction;
        BubbleOutlines {
            direction,
            border: OutlineBuilder::build(&self.shapes.border, direction),
            fill: OutlineBuilder::build(&self.shapes.fill, direction),
        }
    }

    pub fn border_shape(&self) -> &Shape {
        &self.shapes.border
    }

    pub fn fill_shape(&self) -> &Shape {
        &self.shapes.fill
    }

    /// Direction currently drawn, after auto resolution and suppression.
    pub fn direction(&self) -> ArrowDirection {
        self.shapes.direction
    }

    pub fn style(&self) -> &BubbleStyle {
        &self.style
    }

    pub fn container_size(&self) -> Size {
        self.container
    }

    pub fn arrow_target(&self) -> DVec2 {
        self.arrow_to
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Fill color for the current pressed state.
    pub fn current_fill_color(&self) -> Color {
        if self.pressed { self.style.fill_press_color } else { self.style.fill_color }
    }

    /// Content padding that keeps content clear of the arrow.
    ///
    /// Adds the arrow height to `base` on the side the arrow is drawn.
    pub fn content_insets(&self, base: Insets) -> Insets {
        let extra = self.style.arrow_height.raw();
        let mut insets = base;
        match self.shapes.direction {
            ArrowDirection::Left => insets.left += extra,
            ArrowDirection::Up => insets.top += extra,
            ArrowDirection::Right => insets.right += extra,
            ArrowDirection::Down => insets.bottom += extra,
            ArrowDirection::None | ArrowDirection::Auto => {}
        }
        insets
    }

    /// Style with `Auto` replaced by the last resolved direction.
    fn drawn_style(&self) -> BubbleStyle {
        match (self.style.arrow_direction, self.auto_direction) {
            (ArrowDirection::Auto, Some(direction)) => {
                self.style.to_builder().arrow_direction(direction).build()
            }
            _ => self.style.clone(),
        }
    }

    fn refresh(&mut self) {
        let container = Rect::from_size(self.container);
        let style = self.drawn_style();
        self.shapes = ShapeResolver::resolve(container, &style, self.arrow_to);
        debug!(
            w = self.container.w,
            h = self.container.h,
            direction = %self.shapes.direction,
            "refreshed bubble geometry"
        );
    }
}
