//! Keyboard device state.
//!
//! One boolean [`EdgeTracker`] per [`Key`]. Keys are identified by physical
//! position (US layout names), not by the character they produce.

use crate::snapshot::KeyboardSnapshot;
use crate::tracker::EdgeTracker;

macro_rules! keys {
    ($($name:ident),* $(,)?) => {
        /// Physical keyboard key.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Key {
            $($name,)*
        }

        impl Key {
            /// Every key, in declaration order.
            pub const ALL: &'static [Key] = &[$(Key::$name,)*];
            pub const COUNT: usize = Key::ALL.len();
        }
    };
}

keys! {
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
    D0, D1, D2, D3, D4, D5, D6, D7, D8, D9,
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
    Up, Down, Left, Right,
    Space, Enter, Escape, Tab, Backspace,
    Insert, Delete, Home, End, PageUp, PageDown,
    LeftShift, RightShift, LeftControl, RightControl,
    LeftAlt, RightAlt, LeftSuper, RightSuper,
    CapsLock, NumLock, ScrollLock, PrintScreen, Pause,
    Minus, Equals, LeftBracket, RightBracket, Backslash,
    Semicolon, Apostrophe, Grave, Comma, Period, Slash,
    Numpad0, Numpad1, Numpad2, Numpad3, Numpad4,
    Numpad5, Numpad6, Numpad7, Numpad8, Numpad9,
    NumpadAdd, NumpadSubtract, NumpadMultiply, NumpadDivide,
    NumpadDecimal, NumpadEnter,
}

impl Key {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Per-key edge state for one keyboard.
#[derive(Debug, Clone)]
pub struct KeyboardState {
    keys: [EdgeTracker<bool>; Key::COUNT],
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self {
            keys: [EdgeTracker::new(); Key::COUNT],
        }
    }
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance every key by one tick.
    pub fn update(&mut self, snapshot: &KeyboardSnapshot) {
        for &key in Key::ALL {
            self.keys[key.index()].update(snapshot.is_down(key));
        }
    }

    #[inline]
    pub fn key(&self, key: Key) -> &EdgeTracker<bool> {
        &self.keys[key.index()]
    }

    #[inline]
    pub fn check(&self, key: Key) -> bool {
        self.key(key).check()
    }

    #[inline]
    pub fn pressed(&self, key: Key) -> bool {
        self.key(key).pressed()
    }

    #[inline]
    pub fn released(&self, key: Key) -> bool {
        self.key(key).released()
    }

    /// Keys that went down on this tick.
    pub fn pressed_keys(&self) -> impl Iterator<Item = Key> + '_ {
        Key::ALL.iter().copied().filter(|&k| self.pressed(k))
    }

    /// Keys that are down on this tick.
    pub fn down_keys(&self) -> impl Iterator<Item = Key> + '_ {
        Key::ALL.iter().copied().filter(|&k| self.check(k))
    }

    pub fn any_pressed(&self) -> bool {
        self.keys.iter().any(|k| k.pressed())
    }

    pub fn reset(&mut self) {
        self.keys.iter_mut().for_each(|k| k.reset());
    }
}
