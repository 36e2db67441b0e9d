//! Bubble style: the logical description the collaborator hands to the engine.

use std::fmt;
use std::str::FromStr;

use crate::defaults;
use crate::errors::StyleError;
use crate::types::{Length, Scaler};

/// Which edge carries the arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArrowDirection {
    #[default]
    None,
    /// Pick Left/Up/Right/Down from the anchor position before resolving shapes
    Auto,
    Left,
    Up,
    Right,
    Down,
}

impl ArrowDirection {
    /// Integer code used by attribute sources.
    pub fn value(self) -> i32 {
        match self {
            ArrowDirection::None => -1,
            ArrowDirection::Auto => 0,
            ArrowDirection::Left => 1,
            ArrowDirection::Up => 2,
            ArrowDirection::Right => 3,
            ArrowDirection::Down => 4,
        }
    }

    /// Decode an integer code; unknown codes fall back to `None`.
    pub fn from_value(value: i32) -> Self {
        match value {
            0 => ArrowDirection::Auto,
            1 => ArrowDirection::Left,
            2 => ArrowDirection::Up,
            3 => ArrowDirection::Right,
            4 => ArrowDirection::Down,
            _ => ArrowDirection::None,
        }
    }

    pub fn is_left(self) -> bool {
        self == ArrowDirection::Left
    }

    pub fn is_up(self) -> bool {
        self == ArrowDirection::Up
    }

    pub fn is_right(self) -> bool {
        self == ArrowDirection::Right
    }

    pub fn is_down(self) -> bool {
        self == ArrowDirection::Down
    }

    /// True for the four directions that actually draw an arrow.
    pub fn has_arrow(self) -> bool {
        matches!(
            self,
            ArrowDirection::Left | ArrowDirection::Up | ArrowDirection::Right | ArrowDirection::Down
        )
    }

    /// Up/Down arrows sit on a horizontal edge.
    pub fn is_horizontal_edge(self) -> bool {
        matches!(self, ArrowDirection::Up | ArrowDirection::Down)
    }
}

impl fmt::Display for ArrowDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArrowDirection::None => "none",
            ArrowDirection::Auto => "auto",
            ArrowDirection::Left => "left",
            ArrowDirection::Up => "up",
            ArrowDirection::Right => "right",
            ArrowDirection::Down => "down",
        };
        f.write_str(name)
    }
}

impl FromStr for ArrowDirection {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(ArrowDirection::None),
            "auto" => Ok(ArrowDirection::Auto),
            "left" => Ok(ArrowDirection::Left),
            "up" => Ok(ArrowDirection::Up),
            "right" => Ok(ArrowDirection::Right),
            "down" => Ok(ArrowDirection::Down),
            _ => Err(StyleError::UnknownDirection { value: s.to_string() }),
        }
    }
}

/// Where along its edge the arrow apex is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArrowPosPolicy {
    /// Point at the arrow target (center offset set by the collaborator)
    #[default]
    TargetCenter,
    /// Middle of the edge
    SelfCenter,
    /// `arrow_pos_delta` from the left/top end of the edge
    SelfBegin,
    /// `arrow_pos_delta` from the right/bottom end of the edge
    SelfEnd,
}

impl ArrowPosPolicy {
    pub fn value(self) -> i32 {
        match self {
            ArrowPosPolicy::TargetCenter => 0,
            ArrowPosPolicy::SelfCenter => 1,
            ArrowPosPolicy::SelfBegin => 2,
            ArrowPosPolicy::SelfEnd => 3,
        }
    }

    /// Decode an integer code; unknown codes fall back to `TargetCenter`.
    pub fn from_value(value: i32) -> Self {
        match value {
            1 => ArrowPosPolicy::SelfCenter,
            2 => ArrowPosPolicy::SelfBegin,
            3 => ArrowPosPolicy::SelfEnd,
            _ => ArrowPosPolicy::TargetCenter,
        }
    }
}

impl FromStr for ArrowPosPolicy {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "target-center" | "targetcenter" => Ok(ArrowPosPolicy::TargetCenter),
            "self-center" | "selfcenter" => Ok(ArrowPosPolicy::SelfCenter),
            "self-begin" | "selfbegin" => Ok(ArrowPosPolicy::SelfBegin),
            "self-end" | "selfend" => Ok(ArrowPosPolicy::SelfEnd),
            _ => Err(StyleError::UnknownPolicy { value: s.to_string() }),
        }
    }
}

/// Packed ARGB color (`0xAARRGGBB`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const TRANSPARENT: Color = Color(0);

    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn blue(self) -> u8 {
        self.0 as u8
    }

    /// `rgb(r,g,b)` without the alpha channel
    pub fn to_rgb_string(self) -> String {
        format!("rgb({},{},{})", self.red(), self.green(), self.blue())
    }

    /// Alpha as a 0..=1 opacity
    pub fn opacity(self) -> f64 {
        f64::from(self.alpha()) / 255.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

/// Radii of the four rounded corners, in px.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CornerRadii {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
}

impl CornerRadii {
    pub const ZERO: CornerRadii = CornerRadii::uniform(0.0);

    /// Same radius on all four corners
    pub const fn uniform(radius: f64) -> Self {
        CornerRadii {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// Clockwise from top-left, like the attribute order collaborators use.
    pub const fn new(top_left: f64, top_right: f64, bottom_right: f64, bottom_left: f64) -> Self {
        CornerRadii { top_left, top_right, bottom_right, bottom_left }
    }

    /// Reduce every radius by `amount`, never below zero.
    pub fn shrink(&self, amount: f64) -> Self {
        CornerRadii {
            top_left: (self.top_left - amount).max(0.0),
            top_right: (self.top_right - amount).max(0.0),
            bottom_right: (self.bottom_right - amount).max(0.0),
            bottom_left: (self.bottom_left - amount).max(0.0),
        }
    }

    fn as_array(&self) -> [(&'static str, f64); 4] {
        [
            ("corner_top_left_radius", self.top_left),
            ("corner_top_right_radius", self.top_right),
            ("corner_bottom_right_radius", self.bottom_right),
            ("corner_bottom_left_radius", self.bottom_left),
        ]
    }
}

/// Complete logical style of one bubble.
///
/// Values are plain pixels. The style is immutable; collaborators rebuild
/// it through [`StyleBuilder`] (or [`BubbleStyle::to_builder`]) whenever a
/// property changes.
#[derive(Debug, Clone, PartialEq)]
pub struct BubbleStyle {
    pub arrow_direction: ArrowDirection,
    pub arrow_pos_policy: ArrowPosPolicy,
    /// How far the apex protrudes from the edge
    pub arrow_height: Length,
    /// Width of the arrow base along the edge
    pub arrow_width: Length,
    /// Offset from the edge end for `SelfBegin` / `SelfEnd`
    pub arrow_pos_delta: Length,
    pub corner_radii: CornerRadii,
    pub border_width: Length,
    /// Gap between the border stroke and the fill
    pub fill_padding: Length,
    pub fill_color: Color,
    /// Fill used while the bubble is pressed
    pub fill_press_color: Color,
    pub border_color: Color,
}

impl BubbleStyle {
    pub fn builder() -> StyleBuilder {
        StyleBuilder::new()
    }

    /// Library defaults converted to px for the given display density.
    pub fn with_scaler(scaler: &Scaler) -> Self {
        BubbleStyle {
            arrow_direction: ArrowDirection::None,
            arrow_pos_policy: ArrowPosPolicy::TargetCenter,
            arrow_height: scaler.dp(defaults::ARROW_HEIGHT_DP),
            arrow_width: scaler.dp(defaults::ARROW_WIDTH_DP),
            arrow_pos_delta: scaler.dp(defaults::ARROW_POS_DELTA_DP),
            corner_radii: CornerRadii::uniform(scaler.dp(defaults::CORNER_RADIUS_DP).raw()),
            border_width: scaler.dp(defaults::BORDER_WIDTH_DP),
            fill_padding: scaler.dp(defaults::FILL_PADDING_DP),
            fill_color: defaults::FILL_COLOR,
            fill_press_color: defaults::FILL_COLOR,
            border_color: defaults::BORDER_COLOR,
        }
    }

    pub fn to_builder(&self) -> StyleBuilder {
        StyleBuilder { style: self.clone() }
    }

    /// Check every length: all must be finite, and everything except the
    /// position delta must be non-negative.
    pub fn validate(&self) -> Result<(), StyleError> {
        let non_negative = [
            ("arrow_height", self.arrow_height.raw()),
            ("arrow_width", self.arrow_width.raw()),
            ("border_width", self.border_width.raw()),
            ("fill_padding", self.fill_padding.raw()),
        ];
        for (field, value) in non_negative.into_iter().chain(self.corner_radii.as_array()) {
            Length::try_non_negative(value).map_err(|e| StyleError::invalid_length(field, e))?;
        }
        Length::try_new(self.arrow_pos_delta.raw())
            .map_err(|e| StyleError::invalid_length("arrow_pos_delta", e))?;
        Ok(())
    }
}

impl Default for BubbleStyle {
    fn default() -> Self {
        BubbleStyle::with_scaler(&Scaler::IDENTITY)
    }
}

/// Builder for [`BubbleStyle`].
#[derive(Debug, Clone, Default)]
pub struct StyleBuilder {
    style: BubbleStyle,
}

impl StyleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the defaults scaled for a display density.
    pub fn scaled(scaler: &Scaler) -> Self {
        StyleBuilder { style: BubbleStyle::with_scaler(scaler) }
    }

    pub fn arrow_direction(mut self, direction: ArrowDirection) -> Self {
        self.style.arrow_direction = direction;
        self
    }

    pub fn arrow_pos_policy(mut self, policy: ArrowPosPolicy) -> Self {
        self.style.arrow_pos_policy = policy;
        self
    }

    pub fn arrow_height(mut self, height: impl Into<Length>) -> Self {
        self.style.arrow_height = height.into();
        self
    }

    pub fn arrow_width(mut self, width: impl Into<Length>) -> Self {
        self.style.arrow_width = width.into();
        self
    }

    pub fn arrow_pos_delta(mut self, delta: impl Into<Length>) -> Self {
        self.style.arrow_pos_delta = delta.into();
        self
    }

    pub fn corner_radius(mut self, radius: f64) -> Self {
        self.style.corner_radii = CornerRadii::uniform(radius);
        self
    }

    pub fn corner_radii(mut self, radii: CornerRadii) -> Self {
        self.style.corner_radii = radii;
        self
    }

    pub fn border_width(mut self, width: impl Into<Length>) -> Self {
        self.style.border_width = width.into();
        self
    }

    pub fn fill_padding(mut self, padding: impl Into<Length>) -> Self {
        self.style.fill_padding = padding.into();
        self
    }

    /// Sets both the normal and the pressed fill.
    pub fn fill_color(mut self, color: Color) -> Self {
        self.style.fill_color = color;
        self.style.fill_press_color = color;
        self
    }

    pub fn fill_press_color(mut self, color: Color) -> Self {
        self.style.fill_press_color = color;
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.style.border_color = color;
        self
    }

    /// Build without validation; the engine clamps out-of-range values.
    pub fn build(self) -> BubbleStyle {
        self.style
    }

    /// Build, rejecting non-finite or negative lengths.
    pub fn try_build(self) -> Result<BubbleStyle, StyleError> {
        self.style.validate()?;
        Ok(self.style)
    }
}
