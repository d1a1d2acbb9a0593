//! Channel payloads.
//!
//! A channel is one named observable input value tracked across ticks. Its
//! payload is one of:
//! - `bool` for buttons and keys,
//! - `f32` for scalar axes (triggers, the mouse wheel),
//! - [`Vec2`] for thumbsticks,
//! - [`Point`] for pointer positions.
//!
//! ## Value conventions
//! - Scalars are conventionally in `[0.0, 1.0]`. This is not enforced:
//!   out-of-range values (and `NaN`) flow through comparisons unchanged.
//! - Stick components are conventionally in `[-1.0, 1.0]`. Raw stick samples
//!   follow the device convention of **down = +y**; [`Vec2`] flips y when it
//!   is written into a tracker so that channel space is **up = +y**.
//! - Pointer positions are screen coordinates and are stored as reported.

use serde::{Deserialize, Serialize};
use std::ops::Sub;

/// Epsilon used by scalar predicates.
pub const SCALAR_EPSILON: f32 = f32::EPSILON;

/// Epsilon used by stick direction predicates.
pub const VECTOR_EPSILON: f64 = f64::EPSILON;

/// Selects one of the two buffers held by an [`EdgeTracker`](crate::EdgeTracker).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Which {
    /// The value written by the most recent tick.
    Current,
    /// The value written by the tick before that.
    Previous,
}

/// A value that can be stored in an [`EdgeTracker`](crate::EdgeTracker).
///
/// `Default` is the channel's zero value, used for both buffers before the
/// first tick and after a reset.
pub trait Sample: Copy + Default + PartialEq {
    /// Converts a raw acquisition sample into channel space.
    ///
    /// Identity for every payload except [`Vec2`].
    #[inline]
    fn ingest(self) -> Self {
        self
    }
}

impl Sample for bool {}

impl Sample for f32 {}

/// 2D stick value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared magnitude. Deadzone checks compare against this.
    #[inline]
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }
}

impl Sample for Vec2 {
    /// Raw sticks report down as +y; channel space is up-positive.
    #[inline]
    fn ingest(self) -> Self {
        Vec2::new(self.x, -self.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f64, f64)> for Vec2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Vec2::new(x, y)
    }
}

/// Pointer position in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sample for Point {}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}
