#![warn(missing_docs)]

//! # colortimer
//!
//! A countdown timer for talks and sessions that encodes progress in color,
//! built as a [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! component.
//!
//! ## Overview
//!
//! The timer counts down once per second. When it reaches zero it does not
//! stop: it keeps counting into negative "overtime" and the progress bar
//! starts sweeping back and forth once per minute, tinted with the
//! opposite hue. Colors are given as a short spec such as `"orange"` or
//! `"red #0000ff"` and turned into hue rotations of a fixed base tint.
//!
//! Like every bubbletea-rs component, the widget follows the Elm
//! Architecture with `init()`, `update()` and `view()`.
//!
//! ## Components
//!
//! - **Widget**: [`ColorTimer`] ties everything together and handles keys
//!   and editing.
//! - **Clock**: [`Timer`] owns the [`TimerState`] and the tick schedule.
//! - **Encoding**: [`encoding`] derives hue rotations, the animation epoch
//!   and the bar position from the state.
//! - **Utilities**: [`color`] parses color tokens, [`hue`] does the hue
//!   math, [`progress`] draws the bar and [`key`] handles bindings.
//!
//! ## Quick Start
//!
//! ```rust
//! use colortimer::prelude::*;
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//!
//! struct App {
//!     timer: ColorTimer,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut timer = colortimer_new(&[
//!             with_duration(10 * 60),
//!             with_title("Rust in production"),
//!             with_colors("orange"),
//!         ])
//!         .expect("orange is a known color");
//!         let cmd = timer.init();
//!         (Self { timer }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.timer.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.timer.view()
//!     }
//! }
//! ```
//!
//! ## Watching for changes
//!
//! Renderers that animate the bar themselves can subscribe to the animation
//! epoch. The receiver is only woken when the animation must restart:
//!
//! ```rust
//! use colortimer::prelude::*;
//!
//! let widget = colortimer_new(&[with_duration(90)]).unwrap();
//! let epoch = widget.subscribe_epoch();
//! assert_eq!(*epoch.borrow(), 90);
//! ```

pub mod color;
pub mod colortimer;
pub mod encoding;
pub mod hue;
pub mod key;
pub mod progress;
pub mod state;
pub mod timer;

/// Prelude module for convenient imports.
///
/// ```rust
/// use colortimer::prelude::*;
///
/// let state = TimerState::new(3);
/// assert_eq!(state.phase(), Phase::Countdown);
/// ```
pub mod prelude {
    pub use crate::color::{ColorError, ColorResolver, CssColorResolver};
    pub use crate::colortimer::{
        default_key_map as colortimer_default_key_map, new as colortimer_new, with_colors,
        with_description, with_duration, with_framed, with_title, ColorTimerOption, EditError,
        EditInput, KeyMap as ColorTimerKeyMap, Model as ColorTimer, Options as ColorTimerOptions,
        TimerRecord,
    };
    pub use crate::encoding::{
        derive_animation_params, derive_cycle_key, derive_hue_rotations, Animation,
        AnimationParams, ColorEncoding, Direction, HueRotations, PlayState,
    };
    pub use crate::key::{Binding, Help as KeyHelp, KeyMap, KeyPress};
    pub use crate::progress::Model as Progress;
    pub use crate::state::{Phase, TimerState};
    pub use crate::timer::{
        new as timer_new, new_with_interval as timer_new_with_interval, Model as Timer,
        RestartMsg as TimerRestartMsg, StartStopMsg as TimerStartStopMsg,
        TickMsg as TimerTickMsg,
    };
}

pub use color::{ColorError, ColorResolver, CssColorResolver};
pub use colortimer::Model as ColorTimer;
pub use encoding::{Animation, ColorEncoding, HueRotations};
pub use key::{Binding, Help as KeyHelp, KeyMap, KeyPress};
pub use progress::Model as Progress;
pub use state::{Phase, TimerState};
pub use timer::Model as Timer;
