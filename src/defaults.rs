//! Default style values (lengths in dp, scaled to px through `Scaler`)

use crate::geometry::style::Color;

pub const ARROW_HEIGHT_DP: f64 = 6.0;
pub const ARROW_WIDTH_DP: f64 = 10.0;
pub const CORNER_RADIUS_DP: f64 = 4.0;
pub const BORDER_WIDTH_DP: f64 = 0.0;
pub const FILL_PADDING_DP: f64 = 0.0;
pub const ARROW_POS_DELTA_DP: f64 = 0.0;

/// Translucent black
pub const FILL_COLOR: Color = Color(0xCC00_0000);
pub const BORDER_COLOR: Color = Color::WHITE;

/// Segments used per quarter arc when flattening outlines
pub const ARC_SEGMENTS: usize = 8;
