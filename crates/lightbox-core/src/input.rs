#![forbid(unsafe_code)]

//! Key normalization and lightbox key bindings.
//!
//! The web host forwards the DOM `KeyboardEvent.key` string; this module maps
//! it to a stable [`LightboxKey`] (folding legacy spellings such as `Esc` and
//! `Left`) and resolves it against the configured [`KeyBindings`].

use serde::{Deserialize, Serialize};

/// Normalized key relevant to the lightbox.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LightboxKey {
    Escape,
    Left,
    Right,
    Enter,
    Space,
    Char(char),
    Other(Box<str>),
}

impl LightboxKey {
    /// Parse a DOM `key` spelling; unknown keys become [`LightboxKey::Other`].
    #[must_use]
    pub fn parse(key: &str) -> Self {
        normalize_dom_key(key)
    }

    /// Canonical DOM `key` spelling.
    #[must_use]
    pub fn to_key_string(&self) -> String {
        match self {
            Self::Escape => "Escape".to_string(),
            Self::Left => "ArrowLeft".to_string(),
            Self::Right => "ArrowRight".to_string(),
            Self::Enter => "Enter".to_string(),
            Self::Space => " ".to_string(),
            Self::Char(c) => c.to_string(),
            Self::Other(key) => key.to_string(),
        }
    }
}

impl From<String> for LightboxKey {
    fn from(key: String) -> Self {
        Self::parse(&key)
    }
}

impl From<LightboxKey> for String {
    fn from(key: LightboxKey) -> Self {
        key.to_key_string()
    }
}

/// Map a DOM `KeyboardEvent.key` value onto [`LightboxKey`].
#[must_use]
pub fn normalize_dom_key(dom_key: &str) -> LightboxKey {
    match dom_key {
        "Escape" | "Esc" => LightboxKey::Escape,
        "ArrowLeft" | "Left" => LightboxKey::Left,
        "ArrowRight" | "Right" => LightboxKey::Right,
        "Enter" => LightboxKey::Enter,
        " " | "Spacebar" | "Space" => LightboxKey::Space,
        _ => {
            let mut chars = dom_key.chars();
            if let Some(first) = chars.next()
                && chars.next().is_none()
            {
                return LightboxKey::Char(first);
            }
            LightboxKey::Other(dom_key.into())
        }
    }
}

/// Keyboard equivalent of clicking a focused gallery image.
#[must_use]
pub fn is_activation_key(key: &LightboxKey) -> bool {
    matches!(key, LightboxKey::Enter | LightboxKey::Space)
}

/// Transition requested by a key press or an overlay control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Close,
    Previous,
    Next,
}

/// Global keys honoured while the lightbox is open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KeyBindings {
    /// Default: `Escape`
    pub dismiss: LightboxKey,
    /// Default: `ArrowLeft`
    pub previous: LightboxKey,
    /// Default: `ArrowRight`
    pub next: LightboxKey,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            dismiss: LightboxKey::Escape,
            previous: LightboxKey::Left,
            next: LightboxKey::Right,
        }
    }
}

impl KeyBindings {
    #[must_use]
    pub fn command_for(&self, key: &LightboxKey) -> Option<Command> {
        if *key == self.dismiss {
            Some(Command::Close)
        } else if *key == self.previous {
            Some(Command::Previous)
        } else if *key == self.next {
            Some(Command::Next)
        } else {
            None
        }
    }

    /// True when no two commands share a key.
    #[must_use]
    pub fn is_unambiguous(&self) -> bool {
        self.dismiss != self.previous && self.dismiss != self.next && self.previous != self.next
    }
}
