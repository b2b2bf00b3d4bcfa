//! Countdown/overtime state as a plain value.
//!
//! `TimerState` carries everything the timer knows: the configured duration,
//! the signed remaining seconds, and whether the countdown is advancing.
//! Every mutator consumes the state and returns the next one, so the state
//! machine can be driven and tested without a runtime.
//!
//! ```rust
//! use colortimer::state::{Phase, TimerState};
//!
//! let state = TimerState::new(2).tick().tick();
//! assert_eq!(state.remaining, 0);
//! assert_eq!(state.phase(), Phase::Overtime);
//!
//! // No clamping at zero.
//! assert_eq!(state.tick().remaining, -1);
//! ```

/// Which side of zero the remaining time is on.
///
/// Decrement mechanics are identical in both phases; the distinction only
/// matters for display and for deriving animation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Remaining time is positive and counting toward zero.
    Countdown,
    /// Remaining time is zero or negative and keeps counting down forever.
    Overtime,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Phase::Countdown => "countdown",
                Phase::Overtime => "overtime",
            }
        )
    }
}

/// Snapshot of a timer.
///
/// `remaining` only ever changes through [`TimerState::tick`] (one second at a
/// time, while running) or [`TimerState::start`] (which resets it together with
/// `duration`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerState {
    /// Configured countdown length in seconds. May be zero or negative.
    pub duration: i64,
    /// Seconds left. Goes below zero once the countdown is over.
    pub remaining: i64,
    /// Whether `remaining` advances on tick.
    pub running: bool,
}

impl TimerState {
    /// Creates a running state whose countdown starts at `duration`.
    pub fn new(duration: i64) -> Self {
        Self {
            duration,
            remaining: duration,
            running: true,
        }
    }

    /// Restarts with a new duration. Available from any state.
    ///
    /// Non-positive durations are accepted and land directly in overtime.
    #[must_use]
    pub fn start(self, duration: i64) -> Self {
        Self::new(duration)
    }

    /// Flips between running and paused. Time values are untouched.
    #[must_use]
    pub fn toggle(self) -> Self {
        Self {
            running: !self.running,
            ..self
        }
    }

    /// Advances by exactly one second.
    ///
    /// # Panics
    ///
    /// Panics if the state is paused. The tick source must never fire while
    /// paused, so a paused tick is a bug in the caller.
    #[must_use]
    pub fn tick(self) -> Self {
        assert!(
            self.running,
            "tick delivered to a paused timer (remaining = {})",
            self.remaining
        );
        Self {
            remaining: self.remaining.saturating_sub(1),
            ..self
        }
    }

    /// Current phase, derived from the sign of `remaining`.
    pub fn phase(&self) -> Phase {
        if self.remaining > 0 {
            Phase::Countdown
        } else {
            Phase::Overtime
        }
    }

    /// Whether the countdown has run out.
    pub fn overtime(&self) -> bool {
        self.phase() == Phase::Overtime
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_sets_all_fields() {
        for d in [-120, -1, 0, 1, 5, 3600] {
            let state = TimerState::new(99).toggle().start(d);
            assert_eq!(state.duration, d);
            assert_eq!(state.remaining, d);
            assert!(state.running);
        }
    }

    #[test]
    fn test_ticks_cross_zero_without_clamping() {
        let d = 5;
        let mut state = TimerState::new(d);
        for _ in 0..d {
            state = state.tick();
        }
        assert_eq!(state.remaining, 0);
        assert_eq!(state.phase(), Phase::Overtime);

        state = state.tick();
        assert_eq!(state.remaining, -1);
        assert_eq!(state.duration, d);
    }

    #[test]
    fn test_tick_saturates_at_lower_bound() {
        let state = TimerState::new(i64::MIN).tick();
        assert_eq!(state.remaining, i64::MIN);
        assert!(state.running);
    }

    #[test]
    fn test_toggle_twice_restores_running() {
        let state = TimerState::new(10).tick();
        let toggled = state.toggle();
        assert!(!toggled.running);
        assert_eq!(toggled.remaining, state.remaining);

        let restored = toggled.toggle();
        assert_eq!(restored, state);
    }

    #[test]
    fn test_phase_boundaries() {
        assert_eq!(TimerState::new(1).phase(), Phase::Countdown);
        assert_eq!(TimerState::new(0).phase(), Phase::Overtime);
        assert_eq!(TimerState::new(-3).phase(), Phase::Overtime);
        assert!(TimerState::new(-3).overtime());
    }

    #[test]
    #[should_panic(expected = "paused timer")]
    fn test_tick_while_paused_panics() {
        let _ = TimerState::new(10).toggle().tick();
    }

    #[test]
    fn test_default_is_zero_and_running() {
        let state = TimerState::default();
        assert_eq!(state.duration, 0);
        assert_eq!(state.remaining, 0);
        assert!(state.running);
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::Countdown.to_string(), "countdown");
        assert_eq!(Phase::Overtime.to_string(), "overtime");
    }
}
