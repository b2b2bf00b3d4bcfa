//! Construction options for the widget.

use serde::{Deserialize, Serialize};

/// Widget configuration, supplied once at construction.
///
/// Every field has a default, so partial JSON works:
///
/// ```rust
/// use colortimer::colortimer::Options;
///
/// let options = Options::from_json(r#"{"duration": 90, "colors": "teal"}"#).unwrap();
/// assert_eq!(options.duration, 90);
/// assert_eq!(options.color_spec, "teal");
/// assert!(!options.framed);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Start in the compact framed layout.
    pub framed: bool,
    /// Initial countdown length in seconds.
    pub duration: i64,
    /// Heading shown above the bar.
    pub title: String,
    /// Free text shown below the timer. Newlines become line breaks.
    #[serde(alias = "desc")]
    pub description: String,
    /// Whitespace-separated color tokens.
    #[serde(alias = "colors")]
    pub color_spec: String,
}

impl Options {
    /// Parses options from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Option-pattern builder for [`Options`].
#[derive(Debug, Clone)]
pub enum ColorTimerOption {
    /// Start framed or not.
    Framed(bool),
    /// Initial duration in seconds.
    Duration(i64),
    /// Title text.
    Title(String),
    /// Description text.
    Description(String),
    /// Color specification.
    Colors(String),
}

impl ColorTimerOption {
    pub(crate) fn apply(&self, o: &mut Options) {
        match self {
            ColorTimerOption::Framed(framed) => o.framed = *framed,
            ColorTimerOption::Duration(duration) => o.duration = *duration,
            ColorTimerOption::Title(title) => o.title = title.clone(),
            ColorTimerOption::Description(description) => o.description = description.clone(),
            ColorTimerOption::Colors(spec) => o.color_spec = spec.clone(),
        }
    }
}

/// Starts in the framed layout.
pub fn with_framed(framed: bool) -> ColorTimerOption {
    ColorTimerOption::Framed(framed)
}

/// Sets the initial duration in seconds.
pub fn with_duration(duration: i64) -> ColorTimerOption {
    ColorTimerOption::Duration(duration)
}

/// Sets the title.
pub fn with_title(title: impl Into<String>) -> ColorTimerOption {
    ColorTimerOption::Title(title.into())
}

/// Sets the description.
pub fn with_description(description: impl Into<String>) -> ColorTimerOption {
    ColorTimerOption::Description(description.into())
}

/// Sets the color specification, e.g. `"orange"` or `"red #0000ff"`.
pub fn with_colors(spec: impl Into<String>) -> ColorTimerOption {
    ColorTimerOption::Colors(spec.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert!(!options.framed);
        assert_eq!(options.duration, 0);
        assert_eq!(options.title, "");
        assert_eq!(options.description, "");
        assert_eq!(options.color_spec, "");
    }

    #[test]
    fn test_options_apply_in_order() {
        let mut options = Options::default();
        for opt in [
            with_duration(10),
            with_title("a"),
            with_duration(20),
            with_framed(true),
            with_description("line one\nline two"),
            with_colors("red blue"),
        ] {
            opt.apply(&mut options);
        }
        assert_eq!(options.duration, 20);
        assert_eq!(options.title, "a");
        assert!(options.framed);
        assert_eq!(options.description, "line one\nline two");
        assert_eq!(options.color_spec, "red blue");
    }

    #[test]
    fn test_from_json_aliases() {
        let options = Options::from_json(
            r#"{"framed": true, "title": "T", "desc": "D", "color_spec": "navy"}"#,
        )
        .unwrap();
        assert!(options.framed);
        assert_eq!(options.title, "T");
        assert_eq!(options.description, "D");
        assert_eq!(options.color_spec, "navy");
    }

    #[test]
    fn test_from_json_rejects_bad_types() {
        assert!(Options::from_json(r#"{"duration": "ten"}"#).is_err());
        assert!(Options::from_json("not json").is_err());
    }
}
