//! Gamepad device state.
//!
//! A gamepad combines:
//! - 15 boolean button channels ([`GamepadButton`]),
//! - two stick channels ([`Vec2`], deadzone-gated, y flipped on write),
//! - two trigger channels (`f32`, threshold-gated),
//! - a connection channel, so hot-plugging shows up as an edge,
//! - a [`Vibration`] countdown advanced with every tick.
//!
//! ## Disconnects
//! A snapshot with `connected == false` is fed to the channels as the zero
//! snapshot. Buttons held at the moment of the disconnect therefore report one
//! `released` edge instead of staying down forever.

use bitflags::bitflags;

use crate::channel::Vec2;
use crate::manager::Tick;
use crate::snapshot::GamepadSnapshot;
use crate::tracker::EdgeTracker;
use crate::vibration::Vibration;

bitflags! {
    /// Set of gamepad buttons held in one sample.
    ///
    /// Bit layout matches XInput's `wButtons` (Guide uses the otherwise unused
    /// `0x0400`), so XInput state converts with `from_bits_truncate`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct GamepadButtons: u16 {
        const DPAD_UP        = 0x0001;
        const DPAD_DOWN      = 0x0002;
        const DPAD_LEFT      = 0x0004;
        const DPAD_RIGHT     = 0x0008;
        const START          = 0x0010;
        const BACK           = 0x0020;
        const LEFT_STICK     = 0x0040;
        const RIGHT_STICK    = 0x0080;
        const LEFT_SHOULDER  = 0x0100;
        const RIGHT_SHOULDER = 0x0200;
        const GUIDE          = 0x0400;
        const A              = 0x1000;
        const B              = 0x2000;
        const X              = 0x4000;
        const Y              = 0x8000;
    }
}

/// A single gamepad button (Xbox naming).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamepadButton {
    A,
    B,
    X,
    Y,
    LeftShoulder,
    RightShoulder,
    Back,
    Start,
    Guide,
    LeftStick,
    RightStick,
    DPadUp,
    DPadDown,
    DPadLeft,
    DPadRight,
}

impl GamepadButton {
    pub const ALL: [GamepadButton; 15] = [
        GamepadButton::A,
        GamepadButton::B,
        GamepadButton::X,
        GamepadButton::Y,
        GamepadButton::LeftShoulder,
        GamepadButton::RightShoulder,
        GamepadButton::Back,
        GamepadButton::Start,
        GamepadButton::Guide,
        GamepadButton::LeftStick,
        GamepadButton::RightStick,
        GamepadButton::DPadUp,
        GamepadButton::DPadDown,
        GamepadButton::DPadLeft,
        GamepadButton::DPadRight,
    ];
    pub const COUNT: usize = GamepadButton::ALL.len();

    pub fn flag(self) -> GamepadButtons {
        match self {
            GamepadButton::A => GamepadButtons::A,
            GamepadButton::B => GamepadButtons::B,
            GamepadButton::X => GamepadButtons::X,
            GamepadButton::Y => GamepadButtons::Y,
            GamepadButton::LeftShoulder => GamepadButtons::LEFT_SHOULDER,
            GamepadButton::RightShoulder => GamepadButtons::RIGHT_SHOULDER,
            GamepadButton::Back => GamepadButtons::BACK,
            GamepadButton::Start => GamepadButtons::START,
            GamepadButton::Guide => GamepadButtons::GUIDE,
            GamepadButton::LeftStick => GamepadButtons::LEFT_STICK,
            GamepadButton::RightStick => GamepadButtons::RIGHT_STICK,
            GamepadButton::DPadUp => GamepadButtons::DPAD_UP,
            GamepadButton::DPadDown => GamepadButtons::DPAD_DOWN,
            GamepadButton::DPadLeft => GamepadButtons::DPAD_LEFT,
            GamepadButton::DPadRight => GamepadButtons::DPAD_RIGHT,
        }
    }
}

/// Edge state for one gamepad slot.
#[derive(Debug, Clone)]
pub struct GamepadState {
    /// Registry slot index.
    index: usize,
    connected: EdgeTracker<bool>,
    buttons: [EdgeTracker<bool>; GamepadButton::COUNT],
    left_stick: EdgeTracker<Vec2>,
    right_stick: EdgeTracker<Vec2>,
    left_trigger: EdgeTracker<f32>,
    right_trigger: EdgeTracker<f32>,
    vibration: Vibration,
}

impl GamepadState {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            connected: EdgeTracker::new(),
            buttons: [EdgeTracker::new(); GamepadButton::COUNT],
            left_stick: EdgeTracker::new(),
            right_stick: EdgeTracker::new(),
            left_trigger: EdgeTracker::new(),
            right_trigger: EdgeTracker::new(),
            vibration: Vibration::new(),
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Advance every channel by one tick and count vibration down by
    /// `tick.elapsed`.
    ///
    /// Returns `true` if a vibration motor expired, i.e. the actuator needs a
    /// fresh request.
    pub fn update(&mut self, snapshot: &GamepadSnapshot, tick: &Tick) -> bool {
        self.connected.update(snapshot.connected);
        if self.connected.pressed() {
            tracing::info!(slot = self.index, tick = tick.index, "gamepad connected");
        } else if self.connected.released() {
            tracing::info!(slot = self.index, tick = tick.index, "gamepad disconnected");
        }

        let idle = GamepadSnapshot::default();
        let sample = if snapshot.connected { snapshot } else { &idle };

        for (tracker, button) in self.buttons.iter_mut().zip(GamepadButton::ALL) {
            tracker.update(sample.buttons.contains(button.flag()));
        }
        self.left_stick.update(sample.left_stick);
        self.right_stick.update(sample.right_stick);
        self.left_trigger.update(sample.left_trigger);
        self.right_trigger.update(sample.right_trigger);

        self.vibration.advance(tick.elapsed)
    }

    #[inline]
    pub fn is_connected(&self) -> bool {
        self.connected.check()
    }

    #[inline]
    pub fn just_connected(&self) -> bool {
        self.connected.pressed()
    }

    #[inline]
    pub fn just_disconnected(&self) -> bool {
        self.connected.released()
    }

    #[inline]
    pub fn button(&self, button: GamepadButton) -> &EdgeTracker<bool> {
        &self.buttons[button as usize]
    }

    #[inline]
    pub fn check(&self, button: GamepadButton) -> bool {
        self.button(button).check()
    }

    #[inline]
    pub fn pressed(&self, button: GamepadButton) -> bool {
        self.button(button).pressed()
    }

    #[inline]
    pub fn released(&self, button: GamepadButton) -> bool {
        self.button(button).released()
    }

    #[inline]
    pub fn left_stick(&self) -> &EdgeTracker<Vec2> {
        &self.left_stick
    }

    #[inline]
    pub fn right_stick(&self) -> &EdgeTracker<Vec2> {
        &self.right_stick
    }

    #[inline]
    pub fn left_trigger(&self) -> &EdgeTracker<f32> {
        &self.left_trigger
    }

    #[inline]
    pub fn right_trigger(&self) -> &EdgeTracker<f32> {
        &self.right_trigger
    }

    #[inline]
    pub fn vibration(&self) -> &Vibration {
        &self.vibration
    }

    #[inline]
    pub fn vibration_mut(&mut self) -> &mut Vibration {
        &mut self.vibration
    }
}
