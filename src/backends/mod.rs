//! Input sources for `edgepoll`.
//!
//! Implementations of [`InputSource`](crate::source::InputSource) and
//! [`VibrationSink`](crate::vibration::VibrationSink).
//!
//! # Feature flags
//! - **`xinput`** (default) enables the Windows XInput gamepad source and
//!   rumble sink. It compiles to nothing on other targets.
//!
//! [`virtual_input`] is always available and is what tests and demos use.

pub mod virtual_input;

#[cfg(all(feature = "xinput", target_os = "windows"))]
#[cfg_attr(docsrs, doc(cfg(all(feature = "xinput", target_os = "windows"))))]
pub mod windows;
