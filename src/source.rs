//! Device acquisition boundary.
//!
//! An [`InputSource`] is whatever reads the OS or hardware. The
//! [`InputManager`](crate::InputManager) asks it for one fresh snapshot per
//! device per tick and never looks behind it.
//!
//! Sources that only cover some devices keep the default methods for the
//! rest; those report "nothing held, nothing connected".

use crate::snapshot::{GamepadSnapshot, KeyboardSnapshot, MouseSnapshot};

pub trait InputSource {
    /// Human-readable source name, used in logs.
    fn name(&self) -> &str;

    fn keyboard(&mut self) -> KeyboardSnapshot {
        KeyboardSnapshot::default()
    }

    fn mouse(&mut self) -> MouseSnapshot {
        MouseSnapshot::default()
    }

    /// Sample gamepad slot `index`. Called for every registry slot each tick.
    fn gamepad(&mut self, index: usize) -> GamepadSnapshot {
        let _ = index;
        GamepadSnapshot::default()
    }
}
