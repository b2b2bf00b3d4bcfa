//! Tinted progress bar.
//!
//! Renders the countdown's progress graphic: a bar whose filled part is
//! drawn in the current tint and whose length follows the animation
//! position. It holds no timing state of its own; the caller passes in the
//! position and tint derived from the timer on every frame.
//!
//! # Basic Usage
//!
//! ```rust
//! use colortimer::encoding::BASE_COLOR;
//! use colortimer::progress::{new, with_fill_characters, with_width};
//!
//! let bar = new(&[with_width(10), with_fill_characters('#', '-')]);
//! let view = bar.view_as(0.5, BASE_COLOR);
//! assert!(!view.is_empty());
//! ```

use crate::color::to_hex_string;
use hex_color::HexColor;
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

const DEFAULT_WIDTH: i32 = 40;

/// Configuration options for the progress bar.
#[derive(Debug, Clone)]
pub enum ProgressOption {
    /// Sets the total width of the bar in cells.
    WithWidth(i32),
    /// Characters for the filled and empty parts, in that order.
    WithFillCharacters(char, char),
    /// Color of the empty part, as a hex or named color.
    WithEmptyColor(String),
}

impl ProgressOption {
    fn apply(&self, m: &mut Model) {
        match self {
            ProgressOption::WithWidth(width) => {
                m.width = *width;
            }
            ProgressOption::WithFillCharacters(full, empty) => {
                m.full = *full;
                m.empty = *empty;
            }
            ProgressOption::WithEmptyColor(color) => {
                m.empty_color = color.clone();
            }
        }
    }
}

/// Sets the bar width in cells.
pub fn with_width(w: i32) -> ProgressOption {
    ProgressOption::WithWidth(w)
}

/// Sets the filled and empty characters.
pub fn with_fill_characters(full: char, empty: char) -> ProgressOption {
    ProgressOption::WithFillCharacters(full, empty)
}

/// Sets the color of the empty part.
pub fn with_empty_color(color: impl Into<String>) -> ProgressOption {
    ProgressOption::WithEmptyColor(color.into())
}

/// Progress bar renderer.
#[derive(Debug, Clone)]
pub struct Model {
    /// Total width in cells.
    pub width: i32,
    /// Character for the filled part.
    pub full: char,
    /// Character for the empty part.
    pub empty: char,
    /// Color of the empty part.
    pub empty_color: String,
}

/// Creates a progress bar with the given options applied in order.
pub fn new(opts: &[ProgressOption]) -> Model {
    let mut m = Model {
        width: DEFAULT_WIDTH,
        full: '█',
        empty: '░',
        empty_color: "#606060".to_string(),
    };

    for opt in opts {
        opt.apply(&mut m);
    }

    m
}

impl Model {
    /// Number of filled cells for a position in `0.0..=1.0`.
    pub fn filled_width(&self, percent: f64) -> i32 {
        let tw = std::cmp::max(0, self.width);
        let percent = percent.clamp(0.0, 1.0);
        std::cmp::min(tw, ((tw as f64) * percent).round() as i32)
    }

    /// Renders the bar at `percent` with the filled part in `tint`.
    pub fn view_as(&self, percent: f64, tint: HexColor) -> String {
        let fw = self.filled_width(percent);
        let n = std::cmp::max(0, self.width) - fw;

        let full_styled = Style::new()
            .foreground(lipgloss::Color::from(to_hex_string(tint).as_str()))
            .render(&self.full.to_string());
        let empty_styled = Style::new()
            .foreground(lipgloss::Color::from(self.empty_color.as_str()))
            .render(&self.empty.to_string());

        let mut result = full_styled.repeat(fw as usize);
        result.push_str(&empty_styled.repeat(n as usize));
        result
    }
}

impl Default for Model {
    fn default() -> Self {
        new(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::BASE_COLOR;

    #[test]
    fn test_new_with_no_options() {
        let bar = new(&[]);
        assert_eq!(bar.width, DEFAULT_WIDTH);
        assert_eq!(bar.full, '█');
        assert_eq!(bar.empty, '░');
        assert_eq!(bar.empty_color, "#606060");
    }

    #[test]
    fn test_new_with_options() {
        let bar = new(&[
            with_width(12),
            with_fill_characters('=', '.'),
            with_empty_color("#222222"),
        ]);
        assert_eq!(bar.width, 12);
        assert_eq!(bar.full, '=');
        assert_eq!(bar.empty, '.');
        assert_eq!(bar.empty_color, "#222222");
    }

    #[test]
    fn test_filled_width() {
        let bar = new(&[with_width(20)]);
        assert_eq!(bar.filled_width(0.0), 0);
        assert_eq!(bar.filled_width(0.5), 10);
        assert_eq!(bar.filled_width(1.0), 20);
        assert_eq!(bar.filled_width(-1.0), 0);
        assert_eq!(bar.filled_width(7.0), 20);
    }

    #[test]
    fn test_view_width_is_constant() {
        let bar = new(&[with_width(20)]);
        for percent in [0.0, 0.25, 0.5, 1.0] {
            let view = bar.view_as(percent, BASE_COLOR);
            assert_eq!(lipgloss::width_visible(&view), 20, "percent {percent}");
        }
    }

    #[test]
    fn test_view_fill_characters() {
        let bar = new(&[with_width(10), with_fill_characters('#', '-')]);
        let clean = lipgloss::strip_ansi(&bar.view_as(0.3, BASE_COLOR));
        assert_eq!(clean, "###-------");
    }

    #[test]
    fn test_negative_width_renders_nothing() {
        let bar = new(&[with_width(-5)]);
        assert_eq!(bar.filled_width(1.0), 0);
        assert_eq!(lipgloss::strip_ansi(&bar.view_as(1.0, BASE_COLOR)), "");
    }
}
