//! Edit-surface input.
//!
//! An edit submits either a new duration on its own or a full record with
//! title, description and duration. Parsing happens up front so that
//! malformed input never reaches the timer.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Why an edit was rejected.
#[derive(Debug, Error)]
pub enum EditError {
    /// Nothing was entered.
    #[error("edit input is empty")]
    Empty,
    /// A bare value that is not a whole number of seconds.
    #[error("invalid duration {input:?}: expected whole seconds")]
    InvalidNumber {
        /// The rejected input.
        input: String,
    },
    /// A record that is not valid JSON, misses a field, or has a field of
    /// the wrong type.
    #[error("invalid timer record: {0}")]
    InvalidRecord(#[from] serde_json::Error),
}

/// Structured edit: replaces title and description and restarts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerRecord {
    /// New title.
    pub title: String,
    /// New description.
    #[serde(rename = "desc", alias = "description")]
    pub description: String,
    /// New duration in seconds.
    pub duration: i64,
}

/// One of the two accepted edit shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditInput {
    /// Restart with this many seconds.
    Seconds(i64),
    /// Replace title and description, then restart.
    Record(TimerRecord),
}

impl EditInput {
    /// Parses raw edit text.
    ///
    /// Input starting with `{` is read as a [`TimerRecord`]; anything else
    /// must be an integer. Surrounding whitespace is ignored.
    ///
    /// ```rust
    /// use colortimer::colortimer::EditInput;
    ///
    /// assert_eq!(EditInput::parse(" 90 ").unwrap(), EditInput::Seconds(90));
    /// assert!(EditInput::parse("1.5").is_err());
    /// assert!(EditInput::parse(r#"{"title": "x"}"#).is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, EditError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(EditError::Empty);
        }

        if input.starts_with('{') {
            return Ok(EditInput::Record(serde_json::from_str(input)?));
        }

        input
            .parse::<i64>()
            .map(EditInput::Seconds)
            .map_err(|_| EditError::InvalidNumber {
                input: input.to_string(),
            })
    }

    /// The duration the timer restarts with.
    pub fn duration(&self) -> i64 {
        match self {
            EditInput::Seconds(seconds) => *seconds,
            EditInput::Record(record) => record.duration,
        }
    }
}

impl FromStr for EditInput {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seconds() {
        assert_eq!(EditInput::parse("300").unwrap(), EditInput::Seconds(300));
        assert_eq!(EditInput::parse("-45").unwrap(), EditInput::Seconds(-45));
        assert_eq!(EditInput::parse("\t0\n").unwrap(), EditInput::Seconds(0));
        assert_eq!("12".parse::<EditInput>().unwrap().duration(), 12);
    }

    #[test]
    fn test_parse_record() {
        let input = r#"{
          "duration": 120,
          "title": "Q&A",
          "desc": "two\nlines"
        }"#;
        assert_eq!(
            EditInput::parse(input).unwrap(),
            EditInput::Record(TimerRecord {
                title: "Q&A".to_string(),
                description: "two\nlines".to_string(),
                duration: 120,
            })
        );
    }

    #[test]
    fn test_parse_record_description_alias() {
        let input = r#"{"duration": 5, "title": "", "description": "d"}"#;
        let EditInput::Record(record) = EditInput::parse(input).unwrap() else {
            panic!("expected a record");
        };
        assert_eq!(record.description, "d");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(matches!(EditInput::parse("   "), Err(EditError::Empty)));
    }

    #[test]
    fn test_parse_rejects_non_integers() {
        for input in ["abc", "1.5", "1e3", "5s"] {
            assert!(
                matches!(EditInput::parse(input), Err(EditError::InvalidNumber { .. })),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_malformed_records() {
        for input in [
            r#"{"title": "t", "desc": "d"}"#,
            r#"{"title": "t", "desc": "d", "duration": "ten"}"#,
            r#"{"title": "t", "desc": "d", "duration": 1.5}"#,
            r#"{"title": "t""#,
        ] {
            assert!(
                matches!(EditInput::parse(input), Err(EditError::InvalidRecord(_))),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_error_messages() {
        let err = EditInput::parse("soon").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid duration \"soon\": expected whole seconds"
        );
        assert_eq!(EditError::Empty.to_string(), "edit input is empty");
    }
}
