#![cfg(target_os = "windows")]

//! Windows input backends.
//!
//! - **XInput** gamepad polling ([`XInputSource`]) for slots `0..4`
//! - **XInput** rumble output ([`XInputRumble`])
//!
//! Keyboard and mouse are left to the host's own window loop: forward them
//! through a custom [`InputSource`](crate::source::InputSource) or wrap
//! [`XInputSource`] in one.

pub mod xinput;

pub use xinput::{XInputRumble, XInputSource};
