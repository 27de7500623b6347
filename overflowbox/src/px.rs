//! Pixel coordinate types shared by every part of the viewport.
//!
//! All offsets, pointer positions and logical coordinates are whole pixels.
//! Scroll offsets measured by a surface are floored before they reach this
//! crate, the same way a browser floors `getBoundingClientRect` sizes.
//!
//! # Key Types
//!
//! - [`Px`] - A single pixel value that supports negative values for
//!   unclamped scroll targets
//! - [`PxPosition`] - A 2D position (x, y)
//! - [`PxSize`] - A 2D size (width, height)
//!
//! # Coordinate System
//!
//! - Origin (0, 0) at the top-left corner of the scrollable content
//! - X-axis increases to the right
//! - Y-axis increases downward
//!
//! # Example
//!
//! ```
//! use overflowbox::px::{Px, PxPosition, PxSize};
//!
//! let viewport = PxSize::new(Px(500), Px(500));
//! let center = PxPosition::new(Px(960), Px(540));
//!
//! // The native offset that shows `center` in the middle of the viewport.
//! assert_eq!(center - viewport.half(), PxPosition::new(Px(710), Px(290)));
//! ```

use std::ops::{Add, Sub};

/// A pixel value.
///
/// # Examples
///
/// ```
/// use overflowbox::px::Px;
///
/// let px1 = Px::new(100);
/// let px2 = Px::new(-50);
///
/// assert_eq!(px1 + px2, Px(50));
///
/// // Operators saturate instead of overflowing.
/// let max_px = Px::new(i32::MAX);
/// assert_eq!(max_px + Px::new(1), Px(i32::MAX));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Px(pub i32);

impl Px {
    /// A constant representing zero pixels.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Px` instance from an i32 value.
    pub const fn new(value: i32) -> Self {
        Px(value)
    }

    /// Converts the pixel value to f32.
    pub fn to_f32(self) -> f32 {
        self.0 as f32
    }

    /// Creates a `Px` from an f32 value, flooring the fraction and saturating
    /// at the numeric bounds instead of overflowing.
    ///
    /// ```
    /// use overflowbox::px::Px;
    ///
    /// assert_eq!(Px::saturating_from_f32(42.7), Px(42));
    /// assert_eq!(Px::saturating_from_f32(-0.5), Px(-1));
    /// assert_eq!(Px::saturating_from_f32(f32::MAX), Px(i32::MAX));
    /// ```
    pub fn saturating_from_f32(value: f32) -> Self {
        if value.is_nan() {
            return Px::ZERO;
        }
        let clamped_value = value.floor().clamp(i32::MIN as f32, i32::MAX as f32);
        Px(clamped_value as i32)
    }

    /// Saturating integer addition.
    pub fn saturating_add(self, rhs: Self) -> Self {
        Px(self.0.saturating_add(rhs.0))
    }

    /// Saturating integer subtraction.
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Px(self.0.saturating_sub(rhs.0))
    }

    /// Half of this value, rounded toward negative infinity.
    ///
    /// ```
    /// use overflowbox::px::Px;
    ///
    /// assert_eq!(Px(501).half(), Px(250));
    /// assert_eq!(Px(-3).half(), Px(-2));
    /// ```
    pub fn half(self) -> Self {
        Px(self.0.div_euclid(2))
    }
}

/// A 2D position in pixel space.
///
/// ```
/// use overflowbox::px::{Px, PxPosition};
///
/// let pointer = PxPosition::new(Px::new(110), Px::new(195));
/// let origin = PxPosition::new(Px::new(100), Px::new(200));
/// assert_eq!(pointer - origin, PxPosition::new(Px(10), Px(-5)));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PxPosition {
    /// The x-coordinate in pixels
    pub x: Px,
    /// The y-coordinate in pixels
    pub y: Px,
}

impl PxPosition {
    /// A constant representing the zero position (0, 0).
    pub const ZERO: Self = Self { x: Px(0), y: Px(0) };

    /// Creates a new position from x and y coordinates.
    pub const fn new(x: Px, y: Px) -> Self {
        Self { x, y }
    }

    /// Calculates the Euclidean distance to another position.
    ///
    /// ```
    /// use overflowbox::px::{Px, PxPosition};
    ///
    /// let pos1 = PxPosition::new(Px::new(0), Px::new(0));
    /// let pos2 = PxPosition::new(Px::new(3), Px::new(4));
    /// assert_eq!(pos1.distance_to(pos2), 5.0);
    /// ```
    pub fn distance_to(self, other: Self) -> f32 {
        let dx = self.x.to_f32() - other.x.to_f32();
        let dy = self.y.to_f32() - other.y.to_f32();
        (dx * dx + dy * dy).sqrt()
    }
}

/// A 2D size in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PxSize {
    /// The width in pixels
    pub width: Px,
    /// The height in pixels
    pub height: Px,
}

impl PxSize {
    /// Creates a new size from width and height.
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }

    /// The vector from the top-left corner to the center of an area of this
    /// size.
    pub fn half(self) -> PxPosition {
        PxPosition::new(self.width.half(), self.height.half())
    }
}

impl Add for Px {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.saturating_add(rhs)
    }
}

impl Sub for Px {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.saturating_sub(rhs)
    }
}

impl Add for PxPosition {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        PxPosition {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for PxPosition {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        PxPosition {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
