//! Per-tick driver.
//!
//! [`InputManager`] owns every device state and advances all of them once per
//! [`Tick`]: for each enabled device it asks the [`InputSource`] for a fresh
//! snapshot and shifts it into the device's trackers. Predicates read through
//! [`keyboard`](InputManager::keyboard), [`mouse`](InputManager::mouse) and
//! [`gamepad`](InputManager::gamepad) stay valid until the next
//! [`update`](InputManager::update).
//!
//! The manager is also the only path to the vibration actuator: every
//! vibration change, whether requested by the caller or caused by a timer
//! expiring during `update`, is forwarded to the [`VibrationSink`].
//!
//! # Example
//! ```
//! use edgepoll::backends::virtual_input::VirtualSource;
//! use edgepoll::{GamepadButton, InputManager};
//! use std::time::Duration;
//!
//! let mut input = InputManager::new(1).unwrap();
//! let mut source = VirtualSource::new();
//! source.connect(0);
//! source.press_button(0, GamepadButton::A);
//!
//! input.update(&mut source, Duration::from_millis(16));
//! assert!(input.gamepad(0).unwrap().pressed(GamepadButton::A));
//! ```

use std::time::Duration;

use crate::config::InputConfig;
use crate::error::InputError;
use crate::gamepad::GamepadState;
use crate::keyboard::KeyboardState;
use crate::mouse::MouseState;
use crate::registry::GamepadRegistry;
use crate::source::InputSource;
use crate::vibration::{Motor, NullSink, Vibration, VibrationSink};

/// One logical frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tick {
    /// 1 for the first update, then +1 per update.
    pub index: u64,
    /// Time since the previous tick, supplied by the caller.
    pub elapsed: Duration,
}

pub struct InputManager {
    keyboard: KeyboardState,
    mouse: MouseState,
    gamepads: GamepadRegistry,
    poll_keyboard: bool,
    poll_mouse: bool,
    sink: Box<dyn VibrationSink>,
    last_tick: Option<Tick>,
}

impl InputManager {
    /// Keyboard, mouse and `gamepad_count` pads; vibration goes nowhere.
    pub fn new(gamepad_count: usize) -> Result<Self, InputError> {
        Ok(Self {
            keyboard: KeyboardState::new(),
            mouse: MouseState::new(),
            gamepads: GamepadRegistry::new(gamepad_count)?,
            poll_keyboard: true,
            poll_mouse: true,
            sink: Box::new(NullSink),
            last_tick: None,
        })
    }

    pub fn from_config(
        config: &InputConfig,
        sink: impl VibrationSink + 'static,
    ) -> Result<Self, InputError> {
        let mut manager = Self::new(config.gamepad_count)?.with_sink(sink);
        manager.poll_keyboard = config.keyboard;
        manager.poll_mouse = config.mouse;
        tracing::info!(
            gamepads = config.gamepad_count,
            keyboard = config.keyboard,
            mouse = config.mouse,
            "input manager ready"
        );
        Ok(manager)
    }

    /// Replace the vibration actuator.
    pub fn with_sink(mut self, sink: impl VibrationSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Advance every device by one tick.
    ///
    /// Call exactly once per frame, before reading predicates for that frame.
    /// Disabled devices are not sampled and keep their zero state.
    pub fn update<S>(&mut self, source: &mut S, elapsed: Duration) -> Tick
    where
        S: InputSource + ?Sized,
    {
        let tick = Tick {
            index: self.tick_count() + 1,
            elapsed,
        };
        tracing::trace!(tick = tick.index, ?elapsed, source = source.name(), "input tick");

        if self.poll_keyboard {
            self.keyboard.update(&source.keyboard());
        }
        if self.poll_mouse {
            self.mouse.update(&source.mouse());
        }
        for pad in self.gamepads.iter_mut() {
            let snapshot = source.gamepad(pad.index());
            if pad.update(&snapshot, &tick) {
                let request = pad.vibration().request();
                tracing::debug!(slot = pad.index(), ?request, "vibration expired");
                self.sink.send(pad.index(), request);
            }
        }

        self.last_tick = Some(tick);
        tick
    }

    #[inline]
    pub fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[inline]
    pub fn mouse(&self) -> &MouseState {
        &self.mouse
    }

    #[inline]
    pub fn gamepads(&self) -> &GamepadRegistry {
        &self.gamepads
    }

    #[inline]
    pub fn gamepad(&self, index: usize) -> Result<&GamepadState, InputError> {
        self.gamepads.get(index)
    }

    /// Number of completed updates.
    #[inline]
    pub fn tick_count(&self) -> u64 {
        self.last_tick.map_or(0, |t| t.index)
    }

    #[inline]
    pub fn last_tick(&self) -> Option<Tick> {
        self.last_tick
    }

    pub fn vibrate_left_motor(
        &mut self,
        index: usize,
        strength: f32,
        duration: Duration,
    ) -> Result<(), InputError> {
        self.change_vibration(index, |v| v.set(Motor::Left, strength, duration))
    }

    pub fn vibrate_right_motor(
        &mut self,
        index: usize,
        strength: f32,
        duration: Duration,
    ) -> Result<(), InputError> {
        self.change_vibration(index, |v| v.set(Motor::Right, strength, duration))
    }

    pub fn vibrate_left_trigger(
        &mut self,
        index: usize,
        strength: f32,
        duration: Duration,
    ) -> Result<(), InputError> {
        self.change_vibration(index, |v| v.set(Motor::LeftTrigger, strength, duration))
    }

    pub fn vibrate_right_trigger(
        &mut self,
        index: usize,
        strength: f32,
        duration: Duration,
    ) -> Result<(), InputError> {
        self.change_vibration(index, |v| v.set(Motor::RightTrigger, strength, duration))
    }

    /// Both grip motors at once, sent as a single request.
    pub fn vibrate(
        &mut self,
        index: usize,
        left: f32,
        right: f32,
        duration: Duration,
    ) -> Result<(), InputError> {
        self.change_vibration(index, |v| {
            v.set(Motor::Left, left, duration);
            v.set(Motor::Right, right, duration);
        })
    }

    pub fn stop_vibration(&mut self, index: usize) -> Result<(), InputError> {
        self.change_vibration(index, Vibration::stop_all)
    }

    fn change_vibration(
        &mut self,
        index: usize,
        change: impl FnOnce(&mut Vibration),
    ) -> Result<(), InputError> {
        let pad = self.gamepads.get_mut(index)?;
        change(pad.vibration_mut());
        let request = pad.vibration().request();
        tracing::debug!(slot = index, ?request, "vibration request");
        self.sink.send(index, request);
        Ok(())
    }
}
