//! The composed widget model.

use super::edit::{EditError, EditInput};
use super::keymap::{default_key_map, KeyMap};
use super::options::{ColorTimerOption, Options};
use crate::color::{to_hex_string, ColorError};
use crate::encoding::{Animation, ColorEncoding, HueRotations};
use crate::progress;
use crate::state::TimerState;
use crate::timer;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use hex_color::HexColor;
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;
use log::debug;
use tokio::sync::watch;

/// Countdown widget with hue-encoded progress.
///
/// Owns one [`timer::Model`] and one [`ColorEncoding`]. Everything shown
/// (text, tint, bar position, animation epoch) is derived from those two
/// on demand.
#[derive(Debug)]
pub struct Model {
    /// Heading shown above the bar.
    pub title: String,
    /// Text shown below the timer.
    pub description: String,
    /// Key bindings.
    pub keymap: KeyMap,
    /// Bar renderer.
    pub progress: progress::Model,
    framed: bool,
    editing: bool,
    resume_after_edit: bool,
    timer: timer::Model,
    colors: ColorEncoding,
    epoch: watch::Sender<i64>,
}

/// Creates a widget from options.
///
/// Fails if the color specification names a color that cannot be resolved.
pub fn new(opts: &[ColorTimerOption]) -> Result<Model, ColorError> {
    let mut options = Options::default();
    for opt in opts {
        opt.apply(&mut options);
    }
    Model::from_options(options)
}

impl Model {
    /// Creates a widget from an [`Options`] value.
    pub fn from_options(options: Options) -> Result<Self, ColorError> {
        let colors = ColorEncoding::new(&options.color_spec)?;
        Ok(Self::assemble(options, colors))
    }

    fn assemble(options: Options, colors: ColorEncoding) -> Self {
        let timer = timer::new(options.duration);
        let (epoch, _) = watch::channel(Animation::of(&timer.state()).epoch);

        Self {
            title: options.title,
            description: options.description,
            keymap: default_key_map(),
            progress: progress::new(&[]),
            framed: options.framed,
            editing: false,
            resume_after_edit: false,
            timer,
            colors,
            epoch,
        }
    }

    /// The timer's unique identifier.
    pub fn id(&self) -> i64 {
        self.timer.id()
    }

    /// The underlying timer.
    pub fn timer(&self) -> &timer::Model {
        &self.timer
    }

    /// Current timer state.
    pub fn state(&self) -> TimerState {
        self.timer.state()
    }

    /// Observes every timer state change.
    pub fn subscribe(&self) -> watch::Receiver<TimerState> {
        self.timer.subscribe()
    }

    /// Observes the animation epoch. Receivers are only woken when the
    /// epoch actually changes, which is when the progress animation must
    /// restart.
    pub fn subscribe_epoch(&self) -> watch::Receiver<i64> {
        self.epoch.subscribe()
    }

    /// Current animation: epoch, parameters and position.
    pub fn animation(&self) -> Animation {
        Animation::of(&self.timer.state())
    }

    /// The color configuration.
    pub fn colors(&self) -> &ColorEncoding {
        &self.colors
    }

    /// Derived hue rotations.
    pub fn hue_rotations(&self) -> HueRotations {
        self.colors.rotations()
    }

    /// Replaces the color specification. On error nothing changes.
    pub fn set_color_spec(&mut self, spec: &str) -> Result<(), ColorError> {
        self.colors.set_spec(spec)
    }

    /// The display tint for the current phase.
    pub fn tint(&self) -> HexColor {
        self.colors.tint(self.timer.phase())
    }

    /// Whether the compact layout is active.
    pub fn framed(&self) -> bool {
        self.framed
    }

    /// Switches between the compact and the full layout.
    pub fn toggle_framed(&mut self) {
        self.framed = !self.framed;
    }

    /// Whether an edit is in progress.
    pub fn editing(&self) -> bool {
        self.editing
    }

    /// Arms the timer.
    pub fn init(&mut self) -> Option<Cmd> {
        self.timer.init()
    }

    /// Restarts the countdown with a new duration.
    pub fn start(&mut self, duration: i64) -> Cmd {
        let cmd = self.timer.start(duration);
        self.sync_epoch();
        cmd
    }

    /// Pauses or resumes.
    pub fn toggle(&mut self) -> Option<Cmd> {
        let cmd = self.timer.toggle();
        self.sync_epoch();
        cmd
    }

    /// Pauses the timer and returns the text to edit.
    ///
    /// In the framed layout the text is the remaining seconds; otherwise it
    /// is a JSON record with the remaining seconds, title and description.
    pub fn begin_edit(&mut self) -> String {
        if !self.editing {
            self.editing = true;
            self.resume_after_edit = self.timer.running();
            let _ = self.timer.set_running(false);
        }

        if self.framed {
            self.timer.remaining().to_string()
        } else {
            let record = serde_json::json!({
                "duration": self.timer.remaining(),
                "title": self.title,
                "desc": self.description,
            });
            format!("{record:#}")
        }
    }

    /// Leaves edit mode without changes, resuming if the timer was running
    /// before the edit began.
    pub fn cancel_edit(&mut self) -> Option<Cmd> {
        if !self.editing {
            return None;
        }
        self.editing = false;
        let resume = std::mem::take(&mut self.resume_after_edit);
        self.timer.set_running(resume)
    }

    /// Parses and applies an edit, then restarts the timer.
    ///
    /// Malformed input is rejected and leaves the widget untouched, still
    /// in edit mode.
    pub fn submit_edit(&mut self, input: &str) -> Result<Cmd, EditError> {
        let edit = EditInput::parse(input)?;
        self.editing = false;
        self.resume_after_edit = false;
        Ok(self.apply_edit(edit))
    }

    /// Applies an already parsed edit.
    pub fn apply_edit(&mut self, edit: EditInput) -> Cmd {
        debug!("timer {}: applying edit {edit:?}", self.timer.id());
        if let EditInput::Record(record) = &edit {
            self.title = record.title.clone();
            self.description = record.description.clone();
        }
        self.start(edit.duration())
    }

    /// Handles key presses and timer messages.
    pub fn update(&mut self, msg: Msg) -> std::option::Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.editing {
                return None;
            }
            if self.keymap.toggle.matches(key_msg) {
                return self.toggle();
            }
            if self.keymap.frame.matches(key_msg) {
                self.toggle_framed();
            }
            return None;
        }

        let cmd = self.timer.update(msg);
        self.sync_epoch();
        cmd
    }

    /// Renders the widget.
    pub fn view(&self) -> String {
        let tint = lipgloss::Color::from(to_hex_string(self.tint()).as_str());
        let clock = Style::new()
            .foreground(tint)
            .bold(true)
            .render(&self.timer.view());

        if self.framed {
            return clock;
        }

        let mut lines = Vec::new();
        if !self.title.is_empty() {
            lines.push(Style::new().bold(true).render(&self.title));
        }
        lines.push(self.progress.view_as(self.animation().position, self.tint()));
        lines.push(clock);
        lines.extend(self.description.lines().map(str::to_string));
        lines.join("\n")
    }

    fn sync_epoch(&self) {
        let epoch = self.animation().epoch;
        self.epoch.send_if_modified(|current| {
            if *current == epoch {
                return false;
            }
            debug!(
                "timer {}: animation epoch {} -> {epoch}",
                self.timer.id(),
                *current
            );
            *current = epoch;
            true
        });
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, std::option::Option<Cmd>) {
        let mut model = Self::default();
        let cmd = model.init();
        (model, cmd)
    }

    fn update(&mut self, msg: Msg) -> std::option::Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::assemble(Options::default(), ColorEncoding::default())
    }
}
