//! Numeric and geometric primitives shared by the engine.
//!
//! Style inputs are carried as [`Length`] so that collaborator-supplied values
//! can be validated once; the geometry code itself works on `f64` and
//! [`glam::DVec2`] in screen coordinates (y grows downward).

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use glam::{DVec2, dvec2};

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Length in device pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Length(pub f64);

impl Length {
    pub const ZERO: Length = Length(0.0);

    /// Create a Length from pixels (unchecked).
    /// Use `try_new` for collaborator-provided values.
    #[inline]
    pub const fn px(val: f64) -> Length {
        Length(val)
    }

    /// Create a Length with validation (rejects NaN/infinite)
    #[inline]
    pub fn try_new(val: f64) -> Result<Length, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else {
            Ok(Length(val))
        }
    }

    /// Create a non-negative Length with validation
    #[inline]
    pub fn try_non_negative(val: f64) -> Result<Length, NumericError> {
        let len = Self::try_new(val)?;
        if len.0 < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(len)
        }
    }

    /// Get the raw pixel value
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl Add for Length {
    type Output = Length;
    fn add(self, rhs: Length) -> Length { Length(self.0 + rhs.0) }
}
impl Sub for Length {
    type Output = Length;
    fn sub(self, rhs: Length) -> Length { Length(self.0 - rhs.0) }
}
impl Mul<f64> for Length {
    type Output = Length;
    fn mul(self, rhs: f64) -> Length { Length(self.0 * rhs) }
}
impl Div<f64> for Length {
    type Output = Length;
    fn div(self, rhs: f64) -> Length { Length(self.0 / rhs) }
}
impl Neg for Length {
    type Output = Length;
    fn neg(self) -> Length { Length(-self.0) }
}

impl From<f64> for Length {
    fn from(val: f64) -> Self {
        Length(val)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// Angle in degrees, clockwise on screen, 0° pointing along +x
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Angle(pub f64);

impl Angle {
    pub const RIGHT: Angle = Angle(90.0);

    #[inline]
    pub fn radians(self) -> f64 {
        self.0.to_radians()
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// Converts density-independent lengths (dp) to device pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scaler {
    density: f64,
}

impl Scaler {
    /// One dp per pixel.
    pub const IDENTITY: Scaler = Scaler { density: 1.0 };

    /// Create a Scaler with validation (rejects NaN, infinite, zero, negative)
    pub fn try_new(density: f64) -> Result<Self, NumericError> {
        if density.is_nan() {
            Err(NumericError::NaN)
        } else if density.is_infinite() {
            Err(NumericError::Infinite)
        } else if density == 0.0 {
            Err(NumericError::Zero)
        } else if density < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(Scaler { density })
        }
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    /// Convert a dp value to pixels.
    #[inline]
    pub fn dp(&self, dp: f64) -> Length {
        Length(dp * self.density)
    }
}

impl Default for Scaler {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

impl Size {
    pub fn new(w: f64, h: f64) -> Self {
        Size { w, h }
    }
}

/// Axis-aligned rectangle in screen coordinates (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Rect { left, top, right, bottom }
    }

    /// Rectangle anchored at the origin
    pub fn from_size(size: Size) -> Self {
        Rect::new(0.0, 0.0, size.w, size.h)
    }

    /// Rectangle of the given size centered on a point
    pub fn centered_at(center: DVec2, size: Size) -> Self {
        let half = dvec2(size.w, size.h) / 2.0;
        Rect::new(center.x - half.x, center.y - half.y, center.x + half.x, center.y + half.y)
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    pub fn center(&self) -> DVec2 {
        dvec2((self.left + self.right) / 2.0, (self.top + self.bottom) / 2.0)
    }

    /// Shrink each side independently.
    pub fn inset_sides(&self, left: f64, top: f64, right: f64, bottom: f64) -> Rect {
        Rect::new(self.left + left, self.top + top, self.right - right, self.bottom - bottom)
    }

    /// True when the two rectangles share interior area.
    ///
    /// Rectangles that only touch along an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }

    /// True when `other` lies within this rectangle (edges inclusive).
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right <= self.right
            && other.bottom <= self.bottom
    }

    /// Smallest rectangle containing all points, or `None` for no points.
    pub fn enclosing(points: impl IntoIterator<Item = DVec2>) -> Option<Rect> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Rect::new(min.x, min.y, max.x, max.y))
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}, {}]", self.left, self.top, self.right, self.bottom)
    }
}

/// Padding on the four sides of a container
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Insets {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Insets {
    pub const ZERO: Insets = Insets { left: 0.0, top: 0.0, right: 0.0, bottom: 0.0 };

    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Insets { left, top, right, bottom }
    }
}
