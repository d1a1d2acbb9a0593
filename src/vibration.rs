//! Gamepad force feedback.
//!
//! Each [`Motor`] runs an independent countdown: [`Vibration::set`] stores a strength and
//! a remaining duration, and every tick subtracts the elapsed time. When the
//! remaining duration reaches zero the strength drops to `0.0`.
//!
//! ```text
//!   idle ──set(strength, duration)──▶ vibrating
//!   vibrating ──set(..)──▶ vibrating          (duration restarts)
//!   vibrating ──remaining == 0──▶ idle        (strength = 0.0)
//! ```
//!
//! The crate never talks to actuators itself. After each change the current
//! [`VibrationRequest`] is handed to a [`VibrationSink`] by the
//! [`InputManager`](crate::InputManager).

use std::time::Duration;

/// One of the four rumble motors of a modern gamepad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motor {
    /// Low-frequency motor in the left grip.
    Left,
    /// High-frequency motor in the right grip.
    Right,
    LeftTrigger,
    RightTrigger,
}

impl Motor {
    pub const ALL: [Motor; 4] = [
        Motor::Left,
        Motor::Right,
        Motor::LeftTrigger,
        Motor::RightTrigger,
    ];
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct MotorTimer {
    strength: f32,
    remaining: Duration,
}

/// Strengths of all four motors, in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VibrationRequest {
    pub left_motor: f32,
    pub right_motor: f32,
    pub left_trigger: f32,
    pub right_trigger: f32,
}

/// Fire-and-forget receiver of vibration requests (the actuator side).
pub trait VibrationSink {
    /// Apply `request` to the gamepad in registry slot `gamepad`.
    fn send(&mut self, gamepad: usize, request: VibrationRequest);
}

impl<F> VibrationSink for F
where
    F: FnMut(usize, VibrationRequest),
{
    fn send(&mut self, gamepad: usize, request: VibrationRequest) {
        self(gamepad, request)
    }
}

/// Sink that drops every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl VibrationSink for NullSink {
    fn send(&mut self, _gamepad: usize, _request: VibrationRequest) {}
}

/// Countdown state for all motors of one gamepad.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vibration {
    motors: [MotorTimer; 4],
}

impl Vibration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) `motor` at `strength` for `duration`.
    ///
    /// Strength is clamped to `[0.0, 1.0]`. Calling this while the motor is
    /// already running replaces both strength and remaining time.
    pub fn set(&mut self, motor: Motor, strength: f32, duration: Duration) {
        let timer = &mut self.motors[motor as usize];
        timer.strength = strength.clamp(0.0, 1.0);
        timer.remaining = duration;
    }

    pub fn stop(&mut self, motor: Motor) {
        self.motors[motor as usize] = MotorTimer::default();
    }

    pub fn stop_all(&mut self) {
        self.motors = Default::default();
    }

    /// Count every motor down by `elapsed`.
    ///
    /// Returns `true` if any motor expired on this call (its strength changed).
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        let mut changed = false;
        for timer in &mut self.motors {
            timer.remaining = timer.remaining.saturating_sub(elapsed);
            if timer.remaining.is_zero() && timer.strength != 0.0 {
                timer.strength = 0.0;
                changed = true;
            }
        }
        changed
    }

    #[inline]
    pub fn strength(&self, motor: Motor) -> f32 {
        self.motors[motor as usize].strength
    }

    #[inline]
    pub fn remaining(&self, motor: Motor) -> Duration {
        self.motors[motor as usize].remaining
    }

    #[inline]
    pub fn is_vibrating(&self, motor: Motor) -> bool {
        self.strength(motor) > 0.0
    }

    pub fn is_idle(&self) -> bool {
        Motor::ALL.iter().all(|&m| !self.is_vibrating(m))
    }

    pub fn request(&self) -> VibrationRequest {
        VibrationRequest {
            left_motor: self.strength(Motor::Left),
            right_motor: self.strength(Motor::Right),
            left_trigger: self.strength(Motor::LeftTrigger),
            right_trigger: self.strength(Motor::RightTrigger),
        }
    }
}
