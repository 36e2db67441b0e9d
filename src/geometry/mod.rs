//! Bubble geometry: style, shapes, outlines, and arrow direction.

pub mod direction;
pub mod outline;
pub mod placement;
pub mod shape;
pub mod style;

pub use direction::{DirectionResolver, HorizontalRelation, RelativePos, VerticalRelation};
pub use outline::{Outline, OutlineBuilder, PathCommand, PathSink};
pub use placement::{Placement, place_near_anchor};
pub use shape::{ResolvedShapes, Shape, ShapeResolver};
pub use style::{ArrowDirection, ArrowPosPolicy, BubbleStyle, Color, CornerRadii, StyleBuilder};

/// Clamp `val` into `[min, max]`.
///
/// When the range is inverted (`min > max`) the result is `max`, so callers
/// always get a finite value back for finite inputs.
pub fn bound(min: f64, val: f64, max: f64) -> f64 {
    val.max(min).min(max)
}
