//! Scripted input source.
//!
//! [`VirtualSource`] holds the state a real device would report and returns
//! it on every poll until it is changed. Tests and demos drive it directly.

use crate::channel::{Point, Vec2};
use crate::gamepad::GamepadButton;
use crate::keyboard::Key;
use crate::mouse::MouseButton;
use crate::registry::MAX_GAMEPADS;
use crate::snapshot::{GamepadSnapshot, KeyboardSnapshot, MouseSnapshot};
use crate::source::InputSource;

#[derive(Debug, Clone)]
pub struct VirtualSource {
    name: String,
    keyboard: KeyboardSnapshot,
    mouse: MouseSnapshot,
    gamepads: [GamepadSnapshot; MAX_GAMEPADS],
}

impl Default for VirtualSource {
    fn default() -> Self {
        Self::named("virtual")
    }
}

impl VirtualSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            keyboard: KeyboardSnapshot::new(),
            mouse: MouseSnapshot::default(),
            gamepads: [GamepadSnapshot::default(); MAX_GAMEPADS],
        }
    }

    pub fn press_key(&mut self, key: Key) {
        self.keyboard.press(key);
    }

    pub fn release_key(&mut self, key: Key) {
        self.keyboard.release(key);
    }

    pub fn press_mouse(&mut self, button: MouseButton) {
        self.mouse.buttons.insert(button.flag());
    }

    pub fn release_mouse(&mut self, button: MouseButton) {
        self.mouse.buttons.remove(button.flag());
    }

    pub fn move_mouse(&mut self, x: f64, y: f64) {
        self.mouse.position = Point::new(x, y);
    }

    /// Set the accumulated wheel value.
    pub fn set_wheel(&mut self, value: f32) {
        self.mouse.wheel = value;
    }

    /// Slots outside `0..MAX_GAMEPADS` are ignored by every gamepad setter.
    pub fn connect(&mut self, index: usize) {
        if let Some(pad) = self.gamepads.get_mut(index) {
            pad.connected = true;
        }
    }

    /// Unplug a pad. Its last reported state is kept, as a stale driver
    /// buffer would be.
    pub fn disconnect(&mut self, index: usize) {
        if let Some(pad) = self.gamepads.get_mut(index) {
            pad.connected = false;
        }
    }

    pub fn press_button(&mut self, index: usize, button: GamepadButton) {
        if let Some(pad) = self.gamepads.get_mut(index) {
            pad.buttons.insert(button.flag());
        }
    }

    pub fn release_button(&mut self, index: usize, button: GamepadButton) {
        if let Some(pad) = self.gamepads.get_mut(index) {
            pad.buttons.remove(button.flag());
        }
    }

    /// Raw stick values: down is +y.
    pub fn set_left_stick(&mut self, index: usize, x: f64, y: f64) {
        if let Some(pad) = self.gamepads.get_mut(index) {
            pad.left_stick = Vec2::new(x, y);
        }
    }

    /// Raw stick values: down is +y.
    pub fn set_right_stick(&mut self, index: usize, x: f64, y: f64) {
        if let Some(pad) = self.gamepads.get_mut(index) {
            pad.right_stick = Vec2::new(x, y);
        }
    }

    pub fn set_left_trigger(&mut self, index: usize, value: f32) {
        if let Some(pad) = self.gamepads.get_mut(index) {
            pad.left_trigger = value;
        }
    }

    pub fn set_right_trigger(&mut self, index: usize, value: f32) {
        if let Some(pad) = self.gamepads.get_mut(index) {
            pad.right_trigger = value;
        }
    }
}

impl InputSource for VirtualSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn keyboard(&mut self) -> KeyboardSnapshot {
        self.keyboard.clone()
    }

    fn mouse(&mut self) -> MouseSnapshot {
        self.mouse
    }

    fn gamepad(&mut self, index: usize) -> GamepadSnapshot {
        self.gamepads.get(index).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mouse::MouseButtons;

    #[test]
    fn reports_scripted_state_until_changed() {
        let mut source = VirtualSource::named("script");
        source.press_key(Key::Q);
        source.press_mouse(MouseButton::Right);
        source.move_mouse(4.0, 2.0);

        for _ in 0..2 {
            assert!(source.keyboard().is_down(Key::Q));
            let mouse = source.mouse();
            assert_eq!(mouse.buttons, MouseButtons::RIGHT);
            assert_eq!(mouse.position, Point::new(4.0, 2.0));
        }
        assert_eq!(source.name(), "script");
    }

    #[test]
    fn unknown_slots_read_as_disconnected() {
        let mut source = VirtualSource::new();
        source.connect(9);
        source.press_button(9, GamepadButton::A);
        assert_eq!(source.gamepad(9), GamepadSnapshot::default());
    }

    #[test]
    fn disconnect_keeps_stale_buttons() {
        let mut source = VirtualSource::new();
        source.connect(0);
        source.press_button(0, GamepadButton::Start);
        source.disconnect(0);
        let pad = source.gamepad(0);
        assert!(!pad.connected);
        assert!(pad.buttons.contains(GamepadButton::Start.flag()));
    }
}
