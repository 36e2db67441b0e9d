//! Geometry engine for speech-bubble backgrounds.
//!
//! A bubble is a rounded rectangle with a triangular arrow on one edge. The
//! engine derives a border outline and an inset fill outline from a
//! [`BubbleStyle`] and a container size, keeps the arrow clear of the rounded
//! corners, and picks the arrow direction from an anchor rectangle when asked.
//!
//! Outlines are sequences of [`PathCommand`]s. Paint them by replaying into a
//! [`PathSink`], or use the [`svg`] module for SVG path data.

pub mod bubble;
pub mod defaults;
pub mod errors;
pub mod geometry;
pub mod log;
pub mod svg;
pub mod types;

pub use bubble::{BubbleGeometry, BubbleOutlines};
pub use errors::{RenderError, StyleError, SvgError};
pub use geometry::{
    ArrowDirection, ArrowPosPolicy, BubbleStyle, Color, CornerRadii, DirectionResolver,
    HorizontalRelation, Outline, OutlineBuilder, PathCommand, PathSink, Placement, RelativePos,
    ResolvedShapes, Shape, ShapeResolver, StyleBuilder, VerticalRelation, place_near_anchor,
};
pub use types::{Angle, Insets, Length, NumericError, Rect, Scaler, Size};

/// Render a standalone SVG preview of a bubble.
///
/// Unlike the geometry itself, which clamps whatever it is given, this checks
/// the style strictly first.
pub fn render_bubble(
    style: &BubbleStyle,
    width: f64,
    height: f64,
) -> Result<String, RenderError> {
    style.validate()?;
    let mut geometry = BubbleGeometry::new(style.clone());
    geometry.set_container_size(width, height);
    Ok(svg::preview_svg(&geometry)?)
}
