//! Mouse device state: buttons, pointer position and wheel.

use bitflags::bitflags;

use crate::channel::{Point, Vec2};
use crate::snapshot::MouseSnapshot;
use crate::tracker::EdgeTracker;

bitflags! {
    /// Set of mouse buttons held in one sample.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MouseButtons: u8 {
        const LEFT   = 0x01;
        const RIGHT  = 0x02;
        const MIDDLE = 0x04;
        const X1     = 0x08;
        const X2     = 0x10;
    }
}

/// A single mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    X1,
    X2,
}

impl MouseButton {
    pub const ALL: [MouseButton; 5] = [
        MouseButton::Left,
        MouseButton::Right,
        MouseButton::Middle,
        MouseButton::X1,
        MouseButton::X2,
    ];
    pub const COUNT: usize = MouseButton::ALL.len();

    pub fn flag(self) -> MouseButtons {
        match self {
            MouseButton::Left => MouseButtons::LEFT,
            MouseButton::Right => MouseButtons::RIGHT,
            MouseButton::Middle => MouseButtons::MIDDLE,
            MouseButton::X1 => MouseButtons::X1,
            MouseButton::X2 => MouseButtons::X2,
        }
    }
}

/// Edge state for one mouse.
#[derive(Debug, Clone, Default)]
pub struct MouseState {
    buttons: [EdgeTracker<bool>; MouseButton::COUNT],
    position: EdgeTracker<Point>,
    wheel: EdgeTracker<f32>,
}

impl MouseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, snapshot: &MouseSnapshot) {
        for (tracker, button) in self.buttons.iter_mut().zip(MouseButton::ALL) {
            tracker.update(snapshot.buttons.contains(button.flag()));
        }
        self.position.update(snapshot.position);
        self.wheel.update(snapshot.wheel);
    }

    #[inline]
    pub fn button(&self, button: MouseButton) -> &EdgeTracker<bool> {
        &self.buttons[button as usize]
    }

    #[inline]
    pub fn check(&self, button: MouseButton) -> bool {
        self.button(button).check()
    }

    #[inline]
    pub fn pressed(&self, button: MouseButton) -> bool {
        self.button(button).pressed()
    }

    #[inline]
    pub fn released(&self, button: MouseButton) -> bool {
        self.button(button).released()
    }

    /// Pointer position channel (screen coordinates, not flipped).
    #[inline]
    pub fn position(&self) -> &EdgeTracker<Point> {
        &self.position
    }

    #[inline]
    pub fn position_delta(&self) -> Vec2 {
        self.position.delta()
    }

    #[inline]
    pub fn has_moved(&self) -> bool {
        self.position.has_moved()
    }

    /// Wheel channel. Threshold predicates apply as for any scalar.
    #[inline]
    pub fn wheel(&self) -> &EdgeTracker<f32> {
        &self.wheel
    }

    /// Ungated wheel change since the previous tick, either sign.
    #[inline]
    pub fn scroll_delta(&self) -> f32 {
        self.wheel.current() - self.wheel.previous()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
