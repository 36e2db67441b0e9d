//! Arrow direction resolution.
//!
//! Three ways to decide which edge the arrow sits on:
//! - [`DirectionResolver::resolve_auto`] from the bubble and anchor rects,
//! - [`DirectionResolver::resolve_by_offset`] when only the anchor center
//!   offset is known,
//! - [`RelativePos::arrow_direction`] from a declarative placement.

use glam::DVec2;

use crate::log::debug;
use crate::types::{Rect, Size};

use super::style::ArrowDirection;

/// Picks an arrow direction from layout information.
pub struct DirectionResolver;

impl DirectionResolver {
    /// Direction pointing from `self_rect` toward `target_rect`.
    ///
    /// Overlapping rects get no arrow. Otherwise the arrow goes on the edge
    /// facing the target when the two rects share a horizontal or vertical
    /// span; diagonal neighbours get no arrow.
    pub fn resolve_auto(self_rect: &Rect, target_rect: &Rect) -> ArrowDirection {
        if self_rect.intersects(target_rect) {
            debug!(%self_rect, %target_rect, "bubble overlaps its target; no arrow");
            return ArrowDirection::None;
        }

        let offset = self_rect.center() - target_rect.center();
        let direction = if offset.x.abs() < (self_rect.width() + target_rect.width()) / 2.0 {
            if offset.y < 0.0 {
                ArrowDirection::Down
            } else if offset.y > 0.0 {
                ArrowDirection::Up
            } else {
                ArrowDirection::None
            }
        } else if offset.y.abs() < (self_rect.height() + target_rect.height()) / 2.0 {
            if offset.x < 0.0 {
                ArrowDirection::Right
            } else if offset.x > 0.0 {
                ArrowDirection::Left
            } else {
                ArrowDirection::None
            }
        } else {
            ArrowDirection::None
        };

        debug!(%direction, dx = offset.x, dy = offset.y, "resolved auto arrow direction");
        direction
    }

    /// Direction from the anchor center offset alone.
    ///
    /// `target_offset` is the anchor center relative to the bubble center. A
    /// target lying beside an edge (within `arrow_height` of it and inside the
    /// perpendicular span) picks that edge, checked in the order left, up,
    /// right, down. Otherwise the dominant axis of the offset decides; an
    /// exact diagonal or a zero offset gets no arrow.
    pub fn resolve_by_offset(
        size: Size,
        target_offset: DVec2,
        arrow_height: f64,
    ) -> ArrowDirection {
        let target = target_offset + DVec2::new(size.w, size.h) / 2.0;
        let within_x = target.x > 0.0 && target.x < size.w;
        let within_y = target.y > 0.0 && target.y < size.h;

        if target.x < arrow_height && within_y {
            return ArrowDirection::Left;
        }
        if target.y < arrow_height && within_x {
            return ArrowDirection::Up;
        }
        if target.x > size.w - arrow_height && within_y {
            return ArrowDirection::Right;
        }
        if target.y > size.h - arrow_height && within_x {
            return ArrowDirection::Down;
        }

        let (ax, ay) = (target_offset.x.abs(), target_offset.y.abs());
        if ax > ay {
            if target_offset.x < 0.0 {
                ArrowDirection::Left
            } else {
                ArrowDirection::Right
            }
        } else if ax < ay {
            if target_offset.y < 0.0 {
                ArrowDirection::Up
            } else {
                ArrowDirection::Down
            }
        } else {
            ArrowDirection::None
        }
    }
}

/// Horizontal relation of a popup bubble to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalRelation {
    #[default]
    CenterHorizontal,
    ToLeftOf,
    ToRightOf,
    AlignLeft,
    AlignRight,
}

/// Vertical relation of a popup bubble to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalRelation {
    #[default]
    CenterVertical,
    Above,
    Below,
    AlignTop,
    AlignBottom,
}

impl HorizontalRelation {
    fn is_outside(self) -> bool {
        matches!(self, HorizontalRelation::ToLeftOf | HorizontalRelation::ToRightOf)
    }
}

impl VerticalRelation {
    fn is_outside(self) -> bool {
        matches!(self, VerticalRelation::Above | VerticalRelation::Below)
    }
}

/// Declarative placement of a bubble relative to an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RelativePos {
    pub horizontal: HorizontalRelation,
    pub vertical: VerticalRelation,
}

impl RelativePos {
    pub const fn new(horizontal: HorizontalRelation, vertical: VerticalRelation) -> Self {
        RelativePos { horizontal, vertical }
    }

    /// Arrow implied by the placement.
    ///
    /// Exactly one axis must put the bubble outside the anchor; the arrow then
    /// points back across that axis. Both or neither gives no arrow.
    pub fn arrow_direction(&self) -> ArrowDirection {
        match (self.horizontal.is_outside(), self.vertical.is_outside()) {
            (true, false) => match self.horizontal {
                HorizontalRelation::ToRightOf => ArrowDirection::Left,
                _ => ArrowDirection::Right,
            },
            (false, true) => match self.vertical {
                VerticalRelation::Below => ArrowDirection::Up,
                _ => ArrowDirection::Down,
            },
            _ => ArrowDirection::None,
        }
    }

    /// Rect of a bubble of `size` placed against `anchor`.
    pub fn position(&self, anchor: &Rect, size: Size) -> Rect {
        let left = match self.horizontal {
            HorizontalRelation::CenterHorizontal => anchor.center().x - size.w / 2.0,
            HorizontalRelation::ToLeftOf => anchor.left - size.w,
            HorizontalRelation::ToRightOf => anchor.right,
            HorizontalRelation::AlignLeft => anchor.left,
            HorizontalRelation::AlignRight => anchor.right - size.w,
        };
        let top = match self.vertical {
            VerticalRelation::CenterVertical => anchor.center().y - size.h / 2.0,
            VerticalRelation::Above => anchor.top - size.h,
            VerticalRelation::Below => anchor.bottom,
            VerticalRelation::AlignTop => anchor.top,
            VerticalRelation::AlignBottom => anchor.bottom - size.h,
        };
        Rect::new(left, top, left + size.w, top + size.h)
    }
}
