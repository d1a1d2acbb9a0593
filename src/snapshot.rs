//! Raw per-tick device samples.
//!
//! A snapshot is the **owned**, immutable value an
//! [`InputSource`](crate::source::InputSource) hands over for one device on
//! one tick. Device states consume snapshots; they never poll hardware.
//!
//! # Conventions
//! - Absent buttons/keys are up.
//! - Stick y is in the raw device convention (**down = +y**); trackers flip it.
//! - Triggers are `[0.0, 1.0]`; the wheel is whatever the source reports
//!   (typically accumulated notches).
//! - A gamepad snapshot with `connected == false` is treated as all-zero.
//!
//! # Example
//! ```
//! use edgepoll::{Key, KeyboardSnapshot, KeyboardState};
//!
//! let mut kb = KeyboardState::new();
//! kb.update(&KeyboardSnapshot::with_keys([Key::Enter]));
//! assert!(kb.pressed(Key::Enter));
//! ```

use crate::channel::{Point, Vec2};
use crate::gamepad::GamepadButtons;
use crate::keyboard::Key;
use crate::mouse::MouseButtons;

/// Keys down at one instant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyboardSnapshot {
    down: [bool; Key::COUNT],
}

impl Default for KeyboardSnapshot {
    fn default() -> Self {
        Self {
            down: [false; Key::COUNT],
        }
    }
}

impl KeyboardSnapshot {
    /// All keys up.
    pub fn new() -> Self {
        Self::default()
    }

    /// Exactly `keys` down.
    pub fn with_keys(keys: impl IntoIterator<Item = Key>) -> Self {
        let mut snap = Self::new();
        for key in keys {
            snap.press(key);
        }
        snap
    }

    #[inline]
    pub fn set(&mut self, key: Key, down: bool) {
        self.down[key.index()] = down;
    }

    #[inline]
    pub fn press(&mut self, key: Key) {
        self.set(key, true);
    }

    #[inline]
    pub fn release(&mut self, key: Key) {
        self.set(key, false);
    }

    #[inline]
    pub fn is_down(&self, key: Key) -> bool {
        self.down[key.index()]
    }

    pub fn clear(&mut self) {
        self.down = [false; Key::COUNT];
    }
}

/// Mouse buttons, pointer position and wheel at one instant.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MouseSnapshot {
    pub buttons: MouseButtons,
    pub position: Point,
    pub wheel: f32,
}

/// One gamepad slot at one instant.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GamepadSnapshot {
    pub connected: bool,
    pub buttons: GamepadButtons,
    /// Raw left stick, down = +y.
    pub left_stick: Vec2,
    /// Raw right stick, down = +y.
    pub right_stick: Vec2,
    pub left_trigger: f32,
    pub right_trigger: f32,
}

impl GamepadSnapshot {
    /// A connected pad at rest.
    pub fn idle() -> Self {
        Self {
            connected: true,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyboard_snapshot_set_and_clear() {
        let mut snap = KeyboardSnapshot::with_keys([Key::A, Key::Z]);
        assert!(snap.is_down(Key::A));
        assert!(snap.is_down(Key::Z));
        assert!(!snap.is_down(Key::B));

        snap.release(Key::A);
        assert!(!snap.is_down(Key::A));

        snap.clear();
        assert_eq!(snap, KeyboardSnapshot::new());
    }

    #[test]
    fn default_gamepad_is_disconnected() {
        assert!(!GamepadSnapshot::default().connected);
        assert!(GamepadSnapshot::idle().connected);
    }

    #[test]
    fn default_mouse_sits_at_origin() {
        let snap = MouseSnapshot::default();
        assert_eq!(snap.position, Point::ORIGIN);
        assert!(snap.buttons.is_empty());
        assert_eq!(snap.wheel, 0.0);
    }
}
