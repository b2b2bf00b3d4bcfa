//! Key bindings for the widget.

use crate::key::{self, Binding};
use crossterm::event::KeyCode;

/// Keys the widget reacts to while not editing.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Pause or resume the countdown.
    pub toggle: Binding,
    /// Switch between framed and full layout.
    pub frame: Binding,
}

/// Space toggles, `f` switches the layout.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        toggle: Binding::new(vec![KeyCode::Char(' ')]).with_help("space", "pause/resume"),
        frame: Binding::new(vec![KeyCode::Char('f')]).with_help("f", "frame"),
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.toggle, &self.frame]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![vec![&self.toggle, &self.frame]]
    }
}
