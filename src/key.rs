//! Key bindings.
//!
//! A [`Binding`] groups the keys that trigger one action together with the
//! help text shown for it. Components expose their bindings through a
//! [`KeyMap`] so applications can render help for them.

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// Help text for a binding, e.g. `("space", "pause")`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short label for the keys.
    pub key: String,
    /// What the binding does.
    pub desc: String,
}

/// A set of keys bound to one action.
#[derive(Debug, Clone)]
pub struct Binding {
    /// Keys that trigger the action. Modifiers other than shift must match
    /// exactly.
    pub keys: Vec<(KeyCode, KeyModifiers)>,
    /// Help text.
    pub help: Help,
    /// Disabled bindings never match.
    pub disabled: bool,
}

impl Binding {
    /// Creates a binding from plain keys or key/modifier pairs.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(|k| k.into().0).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Whether the binding can currently match.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Whether `key_msg` triggers this binding.
    pub fn matches(&self, key_msg: &KeyMsg) -> bool {
        if !self.enabled() {
            return false;
        }
        // Shift is already folded into the character for printable keys.
        let modifiers = key_msg.modifiers.difference(KeyModifiers::SHIFT);
        self.keys.iter().any(|(code, mods)| {
            *code == key_msg.key && mods.difference(KeyModifiers::SHIFT) == modifiers
        })
    }
}

/// A key with the modifiers it must be pressed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress(pub (KeyCode, KeyModifiers));

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        KeyPress((code, KeyModifiers::NONE))
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from(pair: (KeyCode, KeyModifiers)) -> Self {
        KeyPress(pair)
    }
}

/// Components that expose their bindings for help rendering.
pub trait KeyMap {
    /// The few bindings worth showing in a one-line help.
    fn short_help(&self) -> Vec<&Binding>;
    /// All bindings, grouped into columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}
