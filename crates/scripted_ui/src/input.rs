//! Input events routed through the node tree.
//!
//! The host translates platform input into [`UiEvent`]s and hands them to
//! [`crate::dispatch`] one at a time.

#![allow(missing_docs)]

use std::time::Duration;

use crate::layout::Vec2;

/// Pointer event kind. Shared by every node so containers can forward one
/// event type uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    /// Primary (left) button pressed.
    PrimaryPress,
    /// Secondary (right) button pressed.
    SecondaryPress,
    /// Any button released.
    Release,
    /// Pointer moved.
    Moved,
    /// Wheel notch away from the user.
    WheelUp,
    /// Wheel notch towards the user.
    WheelDown,
}

impl ButtonKind {
    /// How sibling results combine for this kind of event.
    #[must_use]
    pub const fn propagation(self) -> Propagation {
        match self {
            Self::Moved | Self::Release => Propagation::Cumulative,
            _ => Propagation::Exclusive,
        }
    }
}

/// How the actions of sibling nodes reacting to the same event combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// Every reacting node's action runs, in traversal order.
    Cumulative,
    /// Only the last reacting node in traversal order (the topmost one) wins.
    Exclusive,
}

macro_rules! keys {
    ($($variant:ident => $name:literal),* $(,)?) => {
        /// Keyboard key.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Key {
            $($variant,)*
        }

        impl Key {
            /// Every key, in declaration order.
            pub const ALL: &'static [Key] = &[$(Key::$variant,)*];

            /// Name used by the source format, key-binding records and config.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Key::$variant => $name,)*
                }
            }

            /// Parses a key from its name.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Key::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

keys! {
    Escape => "ESCAPE",
    Enter => "ENTER",
    Tab => "TAB",
    Backspace => "BACKSPACE",
    Delete => "DELETE",
    Up => "UP",
    Down => "DOWN",
    Left => "LEFT",
    Right => "RIGHT",
    Home => "HOME",
    End => "END",
    PageUp => "PAGE_UP",
    PageDown => "PAGE_DOWN",
    Space => "SPACE",
    A => "A", B => "B", C => "C", D => "D", E => "E", F => "F", G => "G",
    H => "H", I => "I", J => "J", K => "K", L => "L", M => "M", N => "N",
    O => "O", P => "P", Q => "Q", R => "R", S => "S", T => "T", U => "U",
    V => "V", W => "W", X => "X", Y => "Y", Z => "Z",
    Num0 => "0", Num1 => "1", Num2 => "2", Num3 => "3", Num4 => "4",
    Num5 => "5", Num6 => "6", Num7 => "7", Num8 => "8", Num9 => "9",
    F1 => "F1", F2 => "F2", F3 => "F3", F4 => "F4", F5 => "F5", F6 => "F6",
    F7 => "F7", F8 => "F8", F9 => "F9", F10 => "F10", F11 => "F11", F12 => "F12",
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Control key is held.
    pub ctrl: bool,
    /// Alt key is held.
    pub alt: bool,
}

/// A key press together with the modifiers held at the time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// A press of `key` with no modifiers.
    #[must_use]
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    /// Parses `"ENTER"`, `"CTRL+S"`, `"SHIFT+ALT+F1"` style descriptions.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let mut modifiers = Modifiers::default();
        let mut parts = text.split('+').map(str::trim).peekable();
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                return Key::from_name(part).map(|key| Self { key, modifiers });
            }
            match part {
                "SHIFT" => modifiers.shift = true,
                "CTRL" => modifiers.ctrl = true,
                "ALT" => modifiers.alt = true,
                _ => return None,
            }
        }
        None
    }
}

/// A mouse wheel or trackpad scroll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    /// Pointer position.
    pub pos: Vec2,
    /// Scroll amount in notches; positive `y` scrolls content up (towards the
    /// start).
    pub delta: Vec2,
    /// Time since the previous wheel event.
    pub dt: Duration,
}

/// One input event handed to the tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    Pointer { kind: ButtonKind, pos: Vec2 },
    Key(KeyEvent),
    Wheel(WheelEvent),
}
