//! Fixed-size gamepad registry.
//!
//! Slots are created once and never added or removed; a physical pad coming
//! and going shows up as the slot's connection edge, not as a new entry.

use crate::error::InputError;
use crate::gamepad::GamepadState;

/// Largest supported number of gamepad slots (XInput exposes 4).
pub const MAX_GAMEPADS: usize = 4;

#[derive(Debug, Clone)]
pub struct GamepadRegistry {
    slots: Box<[GamepadState]>,
}

impl GamepadRegistry {
    /// Create `count` slots, indexed `0..count`.
    pub fn new(count: usize) -> Result<Self, InputError> {
        Self::check_count(count)?;
        Ok(Self {
            slots: (0..count).map(GamepadState::new).collect(),
        })
    }

    pub(crate) fn check_count(count: usize) -> Result<(), InputError> {
        if count == 0 || count > MAX_GAMEPADS {
            return Err(InputError::InvalidGamepadCount {
                count,
                max: MAX_GAMEPADS,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always `false`: a registry has at least one slot.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&GamepadState, InputError> {
        let count = self.slots.len();
        self.slots
            .get(index)
            .ok_or(InputError::GamepadOutOfRange { index, count })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut GamepadState, InputError> {
        let count = self.slots.len();
        self.slots
            .get_mut(index)
            .ok_or(InputError::GamepadOutOfRange { index, count })
    }

    pub fn iter(&self) -> impl Iterator<Item = &GamepadState> {
        self.slots.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut GamepadState> {
        self.slots.iter_mut()
    }

    /// Slots whose pad is connected on this tick.
    pub fn connected(&self) -> impl Iterator<Item = &GamepadState> {
        self.iter().filter(|pad| pad.is_connected())
    }
}
