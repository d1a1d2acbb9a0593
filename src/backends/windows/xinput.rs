#![cfg(target_os = "windows")]

//! Windows XInput gamepad source and rumble sink.
//!
//! XInput exposes up to four controllers as fixed slots `0..4`, which map
//! one-to-one onto [`GamepadRegistry`](crate::GamepadRegistry) indices.
//!
//! # Conventions
//! - Sticks are normalized to `[-1.0, 1.0]` and reported with **down = +y**
//!   (XInput itself is up-positive, so Y is inverted here). The stick tracker
//!   flips it back into up-positive channel space.
//! - Triggers are normalized from `0..=255` to `[0.0, 1.0]`.
//! - Button bits are passed through unchanged; [`GamepadButtons`] uses the
//!   XInput layout.
//!
//! # Limitations
//! - The Guide button is not reported by `XInputGetState`.
//! - XInput drives only the two grip motors. Trigger motor strengths in a
//!   [`VibrationRequest`] are ignored.

use windows_sys::Win32::UI::Input::XboxController::*;

use crate::channel::Vec2;
use crate::gamepad::GamepadButtons;
use crate::registry::MAX_GAMEPADS;
use crate::snapshot::GamepadSnapshot;
use crate::source::InputSource;
use crate::vibration::{VibrationRequest, VibrationSink};

/// `XInputGetState` / `XInputSetState` success code.
const ERROR_SUCCESS: u32 = 0;

/// Normalize a signed thumbstick axis into `[-1, 1]`.
#[inline]
fn normalize_thumb(v: i16) -> f64 {
    // Map [-32768, 32767] -> [-1, 1]
    if v >= 0 {
        f64::from(v) / 32767.0
    } else {
        f64::from(v) / 32768.0
    }
}

/// Normalize an 8-bit trigger into `[0, 1]`.
#[inline]
fn normalize_trigger(v: u8) -> f32 {
    f32::from(v) / 255.0
}

/// Map a `[0, 1]` strength onto XInput's motor speed range.
#[inline]
fn motor_speed(strength: f32) -> u16 {
    (strength.clamp(0.0, 1.0) * f32::from(u16::MAX)).round() as u16
}

/// Polls XInput slots on demand.
#[derive(Debug, Default)]
pub struct XInputSource {
    /// Connection state seen on the previous poll, per slot.
    connected: [bool; MAX_GAMEPADS],
}

impl XInputSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InputSource for XInputSource {
    fn name(&self) -> &str {
        "xinput"
    }

    /// Read slot `index`. Empty slots and indices past 3 read as disconnected.
    fn gamepad(&mut self, index: usize) -> GamepadSnapshot {
        if index >= MAX_GAMEPADS {
            return GamepadSnapshot::default();
        }

        // FFI struct: must be manually zeroed
        let mut state: XINPUT_STATE = unsafe { std::mem::zeroed() };
        let res = unsafe { XInputGetState(index as u32, &mut state) };

        if res != ERROR_SUCCESS {
            if self.connected[index] {
                tracing::debug!(slot = index, code = res, "xinput slot lost");
                self.connected[index] = false;
            }
            return GamepadSnapshot::default();
        }
        if !self.connected[index] {
            tracing::debug!(slot = index, packet = state.dwPacketNumber, "xinput slot found");
            self.connected[index] = true;
        }

        let gp = state.Gamepad;
        GamepadSnapshot {
            connected: true,
            buttons: GamepadButtons::from_bits_truncate(gp.wButtons),
            left_stick: Vec2::new(normalize_thumb(gp.sThumbLX), -normalize_thumb(gp.sThumbLY)),
            right_stick: Vec2::new(normalize_thumb(gp.sThumbRX), -normalize_thumb(gp.sThumbRY)),
            left_trigger: normalize_trigger(gp.bLeftTrigger),
            right_trigger: normalize_trigger(gp.bRightTrigger),
        }
    }
}

/// Sends vibration requests to XInput slots.
#[derive(Debug, Default, Clone, Copy)]
pub struct XInputRumble;

impl VibrationSink for XInputRumble {
    fn send(&mut self, gamepad: usize, request: VibrationRequest) {
        if gamepad >= MAX_GAMEPADS {
            return;
        }
        let vibration = XINPUT_VIBRATION {
            wLeftMotorSpeed: motor_speed(request.left_motor),
            wRightMotorSpeed: motor_speed(request.right_motor),
        };
        let res = unsafe { XInputSetState(gamepad as u32, &vibration) };
        if res != ERROR_SUCCESS {
            tracing::warn!(slot = gamepad, code = res, "XInputSetState failed");
        }
    }
}
