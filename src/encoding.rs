//! Color and animation encoding for the countdown display.
//!
//! Two independent derivations live here:
//!
//! - **Hue rotations**: a color specification such as `"tomato"` or
//!   `"red blue"` becomes a pair of angles that recolor the base tint
//!   ([`BASE_COLOR`]) toward the requested colors.
//! - **Animation parameters**: the remaining time becomes an animation
//!   epoch (the cycle key), a duration, a direction and a play state. The
//!   epoch only changes when the progress animation has to start over: once
//!   when the countdown runs out, then once per [`CYCLE_SECONDS`] of
//!   overtime, with the direction flipping each time.
//!
//! # Examples
//!
//! ```rust
//! use colortimer::encoding::{derive_cycle_key, derive_hue_rotations, BASE_COLOR};
//!
//! let rotations = derive_hue_rotations("", BASE_COLOR).unwrap();
//! assert_eq!(rotations.as_array(), [0, 180]);
//!
//! assert_eq!(derive_cycle_key(42, 300), 300); // counting down
//! assert_eq!(derive_cycle_key(-75, 300), -2); // floor(-75 / 60)
//! ```

use crate::color::{ColorError, ColorResolver, CssColorResolver};
use crate::hue::{hue_rotate, nearest_hue_rotation};
use crate::state::{Phase, TimerState};
use hex_color::HexColor;
use log::debug;

/// Length of one overtime animation cycle, in seconds.
pub const CYCLE_SECONDS: i64 = 60;

/// The tint every hue rotation is measured from.
pub const BASE_COLOR: HexColor = HexColor::rgb(0x33, 0xbd, 0xf4);

/// Pair of hue-rotation angles in degrees, each in `0..360`.
///
/// `primary` tints the display while counting down, `opposite` in overtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HueRotations {
    /// Rotation toward the first requested color.
    pub primary: u16,
    /// Rotation toward the second requested color, or the complement of
    /// `primary` when only one color was given.
    pub opposite: u16,
}

impl HueRotations {
    /// No rotation, paired with its exact complement.
    pub const UNTINTED: HueRotations = HueRotations {
        primary: 0,
        opposite: 180,
    };

    /// Pairs an angle with the one half a turn away.
    pub fn complementary(primary: u16) -> Self {
        let primary = primary % 360;
        Self {
            primary,
            opposite: (primary + 180) % 360,
        }
    }

    /// Angles in order, `[primary, opposite]`.
    pub fn as_array(&self) -> [u16; 2] {
        [self.primary, self.opposite]
    }

    /// The angle used in the given phase.
    pub fn for_phase(&self, phase: Phase) -> u16 {
        match phase {
            Phase::Countdown => self.primary,
            Phase::Overtime => self.opposite,
        }
    }
}

impl Default for HueRotations {
    fn default() -> Self {
        Self::UNTINTED
    }
}

/// Derives the hue rotations for a color specification using the CSS color
/// table.
///
/// See [`derive_hue_rotations_with`] for the rules.
pub fn derive_hue_rotations(spec: &str, base: HexColor) -> Result<HueRotations, ColorError> {
    derive_hue_rotations_with(spec, base, &CssColorResolver)
}

/// Derives the hue rotations for a color specification.
///
/// - An empty (or all-whitespace) spec yields [`HueRotations::UNTINTED`].
/// - A single token yields its rotation and the complement of it.
/// - Two or more tokens yield one rotation per token for the first two;
///   anything after the second token is ignored and never resolved.
///
/// Any token that has to be resolved and cannot be is reported as an error;
/// no fallback color is substituted.
///
/// # Examples
///
/// ```rust
/// use colortimer::encoding::{derive_hue_rotations, BASE_COLOR};
///
/// let one = derive_hue_rotations("red", BASE_COLOR).unwrap();
/// assert_eq!(one.opposite, (one.primary + 180) % 360);
///
/// let two = derive_hue_rotations("red blue", BASE_COLOR).unwrap();
/// assert_eq!(two.primary, one.primary);
///
/// assert!(derive_hue_rotations("red bleu", BASE_COLOR).is_err());
/// ```
pub fn derive_hue_rotations_with<R>(
    spec: &str,
    base: HexColor,
    resolver: &R,
) -> Result<HueRotations, ColorError>
where
    R: ColorResolver + ?Sized,
{
    let rotation = |token: &str| -> Result<u16, ColorError> {
        Ok(nearest_hue_rotation(base, resolver.resolve(token)?))
    };

    let mut tokens = spec.split_whitespace();
    let Some(first) = tokens.next() else {
        return Ok(HueRotations::UNTINTED);
    };
    let primary = rotation(first)?;

    let Some(second) = tokens.next() else {
        return Ok(HueRotations::complementary(primary));
    };
    let opposite = rotation(second)?;

    let ignored = tokens.count();
    if ignored > 0 {
        debug!("color spec {spec:?}: ignoring {ignored} token(s) after the second");
    }

    Ok(HueRotations { primary, opposite })
}

/// Derives the animation epoch for a remaining/duration pair.
///
/// While counting down the key is the duration itself, so one animation
/// spans the whole countdown. In overtime it is `remaining / CYCLE_SECONDS`
/// rounded toward negative infinity: `0` for the first overtime second, then
/// a new key at `-1, -61, -121, ...`.
///
/// ```rust
/// use colortimer::encoding::derive_cycle_key;
///
/// assert_eq!(derive_cycle_key(1, 5), 5);
/// assert_eq!(derive_cycle_key(0, 5), 0);
/// assert_eq!(derive_cycle_key(-1, 5), -1);
/// assert_eq!(derive_cycle_key(-60, 5), -1);
/// assert_eq!(derive_cycle_key(-61, 5), -2);
/// ```
pub fn derive_cycle_key(remaining: i64, duration: i64) -> i64 {
    if remaining > 0 {
        duration
    } else {
        remaining.div_euclid(CYCLE_SECONDS)
    }
}

/// Which way the progress animation plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Start to end.
    Forward,
    /// End to start.
    Reverse,
}

impl Direction {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Direction::Forward => "normal",
                Direction::Reverse => "reverse",
            }
        )
    }
}

/// Whether the progress animation advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayState {
    /// The animation is advancing.
    Playing,
    /// The animation is frozen in place.
    Paused,
}

impl std::fmt::Display for PlayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                PlayState::Playing => "running",
                PlayState::Paused => "paused",
            }
        )
    }
}

/// How the progress animation should run for the current epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationParams {
    /// Length of one run of the animation, in seconds.
    pub duration_secs: i64,
    /// Play direction.
    pub direction: Direction,
    /// Play state, mirroring the timer's running flag.
    pub play_state: PlayState,
}

/// Derives the animation parameters for the current timer values.
///
/// - Counting down: the animation lasts `duration - 1` seconds and plays
///   forward.
/// - Overtime: the animation lasts [`CYCLE_SECONDS`] and alternates
///   direction with the parity of `key` (even forward, odd reverse).
/// - The play state follows `running`.
///
/// ```rust
/// use colortimer::encoding::{derive_animation_params, Direction, PlayState};
///
/// let params = derive_animation_params(0, 30, true, 0);
/// assert_eq!(params.duration_secs, 60);
/// assert_eq!(params.direction, Direction::Forward);
/// assert_eq!(params.play_state, PlayState::Playing);
///
/// let params = derive_animation_params(-30, 30, false, -1);
/// assert_eq!(params.direction, Direction::Reverse);
/// assert_eq!(params.play_state, PlayState::Paused);
/// ```
pub fn derive_animation_params(
    remaining: i64,
    duration: i64,
    running: bool,
    key: i64,
) -> AnimationParams {
    let (duration_secs, direction) = if remaining > 0 {
        (duration - 1, Direction::Forward)
    } else if key.rem_euclid(2) == 0 {
        (CYCLE_SECONDS, Direction::Forward)
    } else {
        (CYCLE_SECONDS, Direction::Reverse)
    };

    AnimationParams {
        duration_secs,
        direction,
        play_state: if running {
            PlayState::Playing
        } else {
            PlayState::Paused
        },
    }
}

/// Where the progress animation is, as a fraction in `0.0..=1.0`.
///
/// Counting down, this is the share of the `duration - 1` second animation
/// that has elapsed. In overtime it is the position inside the current
/// cycle, mirrored when the cycle plays in reverse.
pub fn progress_position(remaining: i64, duration: i64, direction: Direction) -> f64 {
    let forward = if remaining > 0 {
        let span = duration - 1;
        if span <= 0 {
            1.0
        } else {
            ((span - remaining) as f64 / span as f64).clamp(0.0, 1.0)
        }
    } else if remaining == 0 {
        0.0
    } else {
        // Windows run from -1 down to -60, -61 down to -120, and so on.
        (-1 - remaining).rem_euclid(CYCLE_SECONDS) as f64 / CYCLE_SECONDS as f64
    };

    match direction {
        Direction::Forward => forward,
        Direction::Reverse => 1.0 - forward,
    }
}

/// Everything a renderer needs to drive the progress animation.
///
/// When `epoch` changes, the renderer must restart its animation from the
/// beginning using the new `params`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    /// The cycle key.
    pub epoch: i64,
    /// Duration, direction and play state for this epoch.
    pub params: AnimationParams,
    /// Current position inside the animation, `0.0..=1.0`.
    pub position: f64,
}

impl Animation {
    /// Derives the animation for a timer state.
    pub fn of(state: &TimerState) -> Self {
        let epoch = derive_cycle_key(state.remaining, state.duration);
        let params =
            derive_animation_params(state.remaining, state.duration, state.running, epoch);
        Self {
            epoch,
            params,
            position: progress_position(state.remaining, state.duration, params.direction),
        }
    }
}

/// A resolved color specification.
///
/// Holds the raw spec, the base color and the derived hue rotations. The
/// spec is resolved eagerly, so a bad color is reported when it is set, not
/// when the display is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorEncoding {
    spec: String,
    base: HexColor,
    rotations: HueRotations,
}

impl ColorEncoding {
    /// Resolves `spec` against [`BASE_COLOR`].
    pub fn new(spec: &str) -> Result<Self, ColorError> {
        Self::with_base(spec, BASE_COLOR)
    }

    /// Resolves `spec` against a custom base color.
    pub fn with_base(spec: &str, base: HexColor) -> Result<Self, ColorError> {
        Ok(Self {
            spec: spec.to_string(),
            base,
            rotations: derive_hue_rotations(spec, base)?,
        })
    }

    /// Replaces the color spec.
    ///
    /// On error the previous spec and rotations are kept.
    pub fn set_spec(&mut self, spec: &str) -> Result<(), ColorError> {
        self.rotations = derive_hue_rotations(spec, self.base)?;
        self.spec = spec.to_string();
        Ok(())
    }

    /// The raw spec as last set.
    pub fn spec(&self) -> &str {
        &self.spec
    }

    /// The base color.
    pub fn base(&self) -> HexColor {
        self.base
    }

    /// The derived rotations.
    pub fn rotations(&self) -> HueRotations {
        self.rotations
    }

    /// The base color rotated for the given phase.
    pub fn tint(&self, phase: Phase) -> HexColor {
        hue_rotate(self.base, self.rotations.for_phase(phase))
    }
}

impl Default for ColorEncoding {
    fn default() -> Self {
        Self {
            spec: String::new(),
            base: BASE_COLOR,
            rotations: HueRotations::UNTINTED,
        }
    }
}
