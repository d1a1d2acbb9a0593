//! edgepoll: per-tick input polling with edge-triggered predicates.
//!
//! Once per frame the [`InputManager`] samples every device through an
//! [`InputSource`] and shifts the sample into a set of [`EdgeTracker`]s.
//! Gameplay and UI code then ask "is it down", "did it just go down", "did it
//! just come up" at any point until the next tick.
//!
//! Three channel shapes are supported:
//! - buttons and keys (`bool`),
//! - threshold-gated scalars such as triggers (`f32`),
//! - deadzone-gated sticks with four cardinal directions ([`Vec2`]).
//!
//! Everything is single-threaded and tick-ordered: one caller drives
//! [`InputManager::update`], readers only see the state between updates.

pub mod backends;
pub mod channel;
pub mod config;
pub mod error;
pub mod gamepad;
pub mod keyboard;
pub mod logging;
pub mod manager;
pub mod mouse;
pub mod registry;
pub mod snapshot;
pub mod source;
pub mod tracker;
pub mod vibration;

pub use channel::{Point, Sample, Vec2, Which, SCALAR_EPSILON, VECTOR_EPSILON};
pub use config::{InputConfig, LogLevel};
pub use error::{ConfigError, InputError};
pub use gamepad::{GamepadButton, GamepadButtons, GamepadState};
pub use keyboard::{Key, KeyboardState};
pub use manager::{InputManager, Tick};
pub use mouse::{MouseButton, MouseButtons, MouseState};
pub use registry::{GamepadRegistry, MAX_GAMEPADS};
pub use snapshot::{GamepadSnapshot, KeyboardSnapshot, MouseSnapshot};
pub use source::InputSource;
pub use tracker::{Direction, EdgeTracker};
pub use vibration::{Motor, NullSink, Vibration, VibrationRequest, VibrationSink};
