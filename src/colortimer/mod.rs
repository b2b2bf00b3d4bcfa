//! Hue-encoded countdown widget.
//!
//! Composes the [`timer`](crate::timer) with the
//! [`encoding`](crate::encoding) pipeline and a tinted
//! [`progress`](crate::progress) bar: the remaining time drives both the
//! text and the animation epoch, and the configured colors tint the bar.
//! When the countdown runs out the widget keeps going in overtime, sweeping
//! the bar back and forth once per minute.
//!
//! # Basic Usage
//!
//! ```rust
//! use colortimer::colortimer::{new, with_colors, with_duration, with_title};
//!
//! let mut widget = new(&[
//!     with_duration(5 * 60),
//!     with_title("Lightning talk"),
//!     with_colors("gold crimson"),
//! ])
//! .expect("known colors");
//!
//! let _cmd = widget.init();
//! assert_eq!(widget.state().remaining, 300);
//! assert!(widget.view().contains("05:00"));
//! ```
//!
//! # Editing
//!
//! The edit surface accepts either a bare number of seconds or a JSON
//! record with `title`, `desc` and `duration`:
//!
//! ```rust
//! use colortimer::colortimer::{new, with_duration};
//!
//! let mut widget = new(&[with_duration(60)]).unwrap();
//! let _template = widget.begin_edit();
//! let _cmd = widget
//!     .submit_edit(r#"{"title": "Break", "desc": "back at :15", "duration": 900}"#)
//!     .unwrap();
//! assert_eq!(widget.title, "Break");
//! assert_eq!(widget.state().duration, 900);
//! ```

pub mod edit;
pub mod keymap;
pub mod model;
pub mod options;


pub use edit::{EditError, EditInput, TimerRecord};
pub use keymap::{default_key_map, KeyMap};
pub use model::{new, Model};
pub use options::{
    with_colors, with_description, with_duration, with_framed, with_title, ColorTimerOption,
    Options,
};
