//! Countdown/overtime timer component for Bubble Tea applications.
//!
//! The timer counts a duration down once per second and, unlike a plain
//! timeout, never stops at zero: it keeps counting into negative "overtime"
//! until it is paused or restarted. The state itself lives in
//! [`TimerState`]; this module wraps it in a component that owns the tick
//! schedule and publishes every new state to subscribers.
//!
//! # Basic Usage
//!
//! ```rust
//! use colortimer::timer::new;
//!
//! let mut timer = new(90);
//! assert_eq!(timer.remaining(), 90);
//! assert!(timer.running());
//!
//! // Arm the tick schedule: one immediate decrement, then one per second.
//! let _cmd = timer.init();
//! ```
//!
//! # bubbletea-rs Integration
//!
//! ```rust
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//! use colortimer::timer::{new, Model};
//!
//! struct App {
//!     timer: Model,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut timer = new(25 * 60);
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
//! # Scheduling
//!
//! Each time the timer starts running, the schedule is re-armed under a
//! fresh tag. Ticks carrying an older tag are dropped, which is how pausing
//! and restarting cancel the schedule that was in flight: at most one tick
//! chain is ever live and no late tick lands after a pause.

use crate::state::{Phase, TimerState};
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Model as BubbleTeaModel, Msg};
use log::{debug, trace};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;
use tokio::sync::watch;

// Internal ID management for timer instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Period between two decrements.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Formats signed remaining seconds for display.
///
/// Seconds are always two digits. Minutes are shown, also as two digits,
/// only when there is at least one full minute. Overtime gets a leading `-`.
///
/// # Examples
///
/// ```rust
/// use colortimer::timer::format_remaining;
///
/// assert_eq!(format_remaining(5), "05");
/// assert_eq!(format_remaining(65), "01:05");
/// assert_eq!(format_remaining(0), "00");
/// assert_eq!(format_remaining(-61), "-01:01");
/// assert_eq!(format_remaining(-7), "-07");
/// ```
pub fn format_remaining(remaining: i64) -> String {
    let magnitude = remaining.unsigned_abs();
    let minutes = magnitude / 60;
    let seconds = magnitude % 60;
    let sign = if remaining < 0 { "-" } else { "" };

    if minutes > 0 {
        format!("{sign}{minutes:02}:{seconds:02}")
    } else {
        format!("{sign}{seconds:02}")
    }
}

/// Message that pauses or resumes a timer.
///
/// Produced by [`Model::toggle_cmd`]. The `running` flag is private so the
/// message can only be created through the timer's own controls.
#[derive(Debug, Clone)]
pub struct StartStopMsg {
    /// The unique identifier of the timer this message targets.
    pub id: i64,
    running: bool,
}

/// Message that restarts a timer with a new duration.
///
/// Produced by [`Model::restart_cmd`]; useful when the code deciding on the
/// new duration does not hold a mutable reference to the timer.
#[derive(Debug, Clone)]
pub struct RestartMsg {
    /// The unique identifier of the timer this message targets.
    pub id: i64,
    /// The new countdown length in seconds.
    pub duration: i64,
}

/// Message delivered by the tick schedule, once per interval.
///
/// # Message Filtering
///
/// - Messages for another timer ID are ignored.
/// - Messages from a canceled schedule (stale tag) are ignored.
/// - Messages reaching a paused timer are ignored.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// The unique identifier of the timer that scheduled this tick.
    pub id: i64,
    // Schedule generation. Bumped every time the schedule is re-armed.
    tag: i64,
}

/// Countdown/overtime timer.
///
/// Owns a [`TimerState`], the tick schedule that advances it, and a
/// [`watch`] channel that carries every new state to observers.
///
/// # Examples
///
/// ```rust
/// use colortimer::timer::new;
///
/// let mut timer = new(3);
/// let _cmd = timer.start(10);
/// assert_eq!(timer.duration(), 10);
/// assert_eq!(timer.remaining(), 10);
///
/// let resume = timer.toggle();
/// assert!(resume.is_none()); // pausing never schedules anything
/// assert!(!timer.running());
/// ```
#[derive(Debug)]
pub struct Model {
    /// Time between decrements. Defaults to [`TICK_INTERVAL`].
    pub interval: Duration,
    id: i64,
    tag: i64,
    state: TimerState,
    notifier: watch::Sender<TimerState>,
}

/// Creates a running timer that counts down from `duration` seconds.
///
/// The schedule is not armed until [`Model::init`] is called.
pub fn new(duration: i64) -> Model {
    new_with_interval(duration, TICK_INTERVAL)
}

/// Creates a running timer with a custom tick period.
///
/// Each tick still takes exactly one second off `remaining`; the interval
/// only controls how often ticks are delivered. This is mostly useful for
/// demos and tests.
pub fn new_with_interval(duration: i64, interval: Duration) -> Model {
    let state = TimerState::new(duration);
    let (notifier, _) = watch::channel(state);
    Model {
        interval,
        id: next_id(),
        tag: 0,
        state,
        notifier,
    }
}

impl Model {
    /// Unique identifier of this timer, used to route messages.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Current state snapshot.
    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Configured countdown length in seconds.
    pub fn duration(&self) -> i64 {
        self.state.duration
    }

    /// Seconds left; negative in overtime.
    pub fn remaining(&self) -> i64 {
        self.state.remaining
    }

    /// Whether the timer is advancing.
    pub fn running(&self) -> bool {
        self.state.running
    }

    /// Countdown or overtime.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Returns a receiver that observes every state change.
    ///
    /// The receiver starts out holding the current state. Any number of
    /// receivers can be created; dropping them does not affect the timer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use colortimer::timer::new;
    ///
    /// let mut timer = new(30);
    /// let rx = timer.subscribe();
    /// let _ = timer.start(45);
    /// assert_eq!(rx.borrow().duration, 45);
    /// ```
    pub fn subscribe(&self) -> watch::Receiver<TimerState> {
        self.notifier.subscribe()
    }

    /// Arms the tick schedule if the timer is running.
    pub fn init(&mut self) -> Option<Cmd> {
        if self.state.running {
            Some(self.arm())
        } else {
            None
        }
    }

    /// Restarts with a new duration and re-arms the schedule.
    ///
    /// Works from any state, paused included. Any schedule that was in
    /// flight is canceled before the new one starts. Non-positive durations
    /// are valid and begin directly in overtime.
    pub fn start(&mut self, duration: i64) -> Cmd {
        debug!(
            "timer {}: restart with {duration}s (was {}s)",
            self.id, self.state.remaining
        );
        self.state = self.state.start(duration);
        self.notify();
        self.arm()
    }

    /// Pauses a running timer or resumes a paused one.
    ///
    /// Resuming returns the freshly armed schedule; pausing cancels the
    /// current one and returns `None`.
    pub fn toggle(&mut self) -> Option<Cmd> {
        self.set_running(!self.state.running)
    }

    /// Sets the running flag, arming or canceling the schedule as needed.
    ///
    /// Setting the flag to the value it already has is a no-op.
    pub fn set_running(&mut self, running: bool) -> Option<Cmd> {
        if self.state.running == running {
            return None;
        }
        self.state = self.state.toggle();
        debug!(
            "timer {}: {} at {}s",
            self.id,
            if running { "resumed" } else { "paused" },
            self.state.remaining
        );
        self.notify();

        if running {
            Some(self.arm())
        } else {
            self.cancel();
            None
        }
    }

    /// Command that toggles this timer through the message loop.
    pub fn toggle_cmd(&self) -> Cmd {
        let id = self.id;
        let running = !self.state.running;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(StartStopMsg { id, running }) as Msg
        })
    }

    /// Command that restarts this timer through the message loop.
    pub fn restart_cmd(&self, duration: i64) -> Cmd {
        let id = self.id;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(RestartMsg { id, duration }) as Msg
        })
    }

    /// The tick message the live schedule would deliver next.
    ///
    /// Handy for driving the timer by hand, for example from a test clock.
    pub fn tick_msg(&self) -> TickMsg {
        TickMsg {
            id: self.id,
            tag: self.tag,
        }
    }

    /// Handles timer messages. Messages for other components are ignored.
    pub fn update(&mut self, msg: Msg) -> std::option::Option<Cmd> {
        if let Some(restart_msg) = msg.downcast_ref::<RestartMsg>() {
            if restart_msg.id != self.id {
                return None;
            }
            return Some(self.start(restart_msg.duration));
        }

        if let Some(start_stop_msg) = msg.downcast_ref::<StartStopMsg>() {
            if start_stop_msg.id != self.id {
                return None;
            }
            return self.set_running(start_stop_msg.running);
        }

        if let Some(tick_msg) = msg.downcast_ref::<TickMsg>() {
            if tick_msg.id != self.id {
                return None;
            }

            // A tick from a canceled schedule, or one that raced a pause.
            if tick_msg.tag != self.tag || !self.state.running {
                trace!(
                    "timer {}: dropped stale tick (tag {} vs {})",
                    self.id,
                    tick_msg.tag,
                    self.tag
                );
                return None;
            }

            self.advance();
            return Some(self.schedule_next());
        }

        None
    }

    /// Renders the remaining time, e.g. `04:59` or `-00:12`.
    pub fn view(&self) -> String {
        format_remaining(self.state.remaining)
    }

    fn advance(&mut self) {
        let before = self.state.phase();
        self.state = self.state.tick();
        if before != self.state.phase() {
            debug!("timer {}: entered {}", self.id, self.state.phase());
        }
        self.notify();
    }

    // Starts a new schedule generation: one immediate tick, after which
    // every handled tick schedules the next one `interval` later.
    fn arm(&mut self) -> Cmd {
        self.tag += 1;
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(TickMsg { id, tag }) as Msg
        })
    }

    fn cancel(&mut self) {
        self.tag += 1;
    }

    fn schedule_next(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(self.interval, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }

    fn notify(&self) {
        self.notifier.send_replace(self.state);
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, std::option::Option<Cmd>) {
        let mut model = new(0);
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
        new(0)
    }
}
