//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! Everything here is plain data: the session controller, the terminal view and
//! the input layer all agree on these definitions.
//!
//! # Difficulty Curve Constants
//!
//! Each round's parameters are a step function of the round number. A step
//! `(below, value)` applies to every round strictly below `below`; rounds past
//! the last step use the trailing floor/max constant.
//!
//! | Rounds | Grid | Divergence |
//! |--------|------|------------|
//! | 1-3 | 2x2 | 0.4 |
//! | 4-6 | 3x3 | 0.3 |
//! | 7-9 | 4x4 | 0.2 |
//! | 10-19 | 5x5 | 0.1 |
//! | 20+ | 6x6 | 0.1 |
//!
//! A correct guess on round [`MAX_ROUND`] ends the session as a victory.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Wall-clock cadence of the elapsed-time timer |
//! | `TICK_QUANTUM` | 0.1 | Seconds added to elapsed time per tick |
//! | `ELAPSED_SCALE` | 100.0 | Elapsed time is rounded to 1/100 after each tick |
//!
//! # Examples
//!
//! ```
//! use colour_clicker_types::{Phase, Rgba, GameAction};
//!
//! let faded = Rgba::with_alpha(120, 40, 10, 0.6);
//! assert_eq!(faded.to_string(), "rgba(120,40,10,0.6)");
//! assert_eq!(Rgba::opaque(120, 40, 10).to_string(), "rgb(120,40,10)");
//!
//! assert_eq!(Phase::default(), Phase::Stopped);
//! assert_eq!(GameAction::Select(3).as_str(), "select");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod error;

pub use error::{CurveError, SelectionFault, SessionError};

/// Last round of a session; a correct guess here is a victory.
pub const MAX_ROUND: u32 = 30;

/// Grid size steps as `(below_round, grid_size)`.
pub const GRID_SIZE_STEPS: [(u32, u8); 4] = [(4, 2), (7, 3), (10, 4), (20, 5)];

/// Grid size once every step in [`GRID_SIZE_STEPS`] has been passed.
pub const GRID_SIZE_MAX: u8 = 6;

/// Divergence (alpha delta) steps as `(below_round, divergence)`.
pub const DIVERGENCE_STEPS: [(u32, f64); 3] = [(4, 0.4), (7, 0.3), (10, 0.2)];

/// Divergence once every step in [`DIVERGENCE_STEPS`] has been passed.
pub const DIVERGENCE_MIN: f64 = 0.1;

/// Smallest value a sampled colour channel can take.
pub const CHANNEL_MIN: u8 = 10;

/// Number of distinct values a sampled colour channel can take (10..=189).
pub const CHANNEL_SPAN: u32 = 180;

/// Wall-clock interval between elapsed-time ticks (100ms)
pub const TICK_MS: u32 = 100;

/// Seconds added to the elapsed time on every tick while playing
pub const TICK_QUANTUM: f64 = 0.1;

/// Elapsed time is rounded to `1 / ELAPSED_SCALE` after each tick.
pub const ELAPSED_SCALE: f64 = 100.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_defaults() {
        assert_eq!(MAX_ROUND, 30);
        assert_eq!(GRID_SIZE_STEPS.last(), Some(&(20, 5)));
        assert_eq!(GRID_SIZE_MAX, 6);
        assert_eq!(DIVERGENCE_MIN, 0.1);
        assert_eq!(CHANNEL_MIN as u32 + CHANNEL_SPAN - 1, 189);
    }

    #[test]
    fn rgba_formats_like_css() {
        assert_eq!(Rgba::opaque(10, 20, 30).to_string(), "rgb(10,20,30)");
        assert_eq!(
            Rgba::with_alpha(10, 20, 30, 1.0 - 0.3).to_string(),
            "rgba(10,20,30,0.7)"
        );
    }

    #[test]
    fn rgba_blend_over_white() {
        let c = Rgba::with_alpha(0, 0, 0, 0.5);
        assert_eq!(c.blend_over(255, 255, 255), (128, 128, 128));

        let opaque = Rgba::opaque(12, 34, 56);
        assert_eq!(opaque.blend_over(255, 255, 255), (12, 34, 56));
    }

    #[test]
    fn phase_serializes_lowercase() {
        let json = serde_json::to_string(&Phase::Paused).unwrap();
        assert_eq!(json, "\"paused\"");
    }
}

/// Session lifecycle phase
///
/// The cycle is `Stopped -> Playing <-> Paused`, with `Finished` reachable
/// from `Playing` and every non-playing phase able to start a new session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Stopped,
    Playing,
    Paused,
    Finished,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Stopped => "stopped",
            Phase::Playing => "playing",
            Phase::Paused => "paused",
            Phase::Finished => "finished",
        }
    }

    /// Whether `start()` is accepted from this phase.
    pub fn can_start(&self) -> bool {
        !matches!(self, Phase::Playing)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a finished session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Cleared the final round.
    Victory,
    /// Picked a tile that was not the divergent one.
    Defeat,
}

/// A tile colour: an RGB triple with an optional alpha channel.
///
/// `alpha: None` means fully opaque and formats as `rgb(..)`; a present alpha
/// formats as `rgba(..)` even when it is 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: Option<f64>,
}

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            alpha: None,
        }
    }

    pub const fn with_alpha(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        Self {
            r,
            g,
            b,
            alpha: Some(alpha),
        }
    }

    /// Effective opacity in `[0, 1]`.
    pub fn opacity(&self) -> f64 {
        self.alpha.unwrap_or(1.0).clamp(0.0, 1.0)
    }

    pub fn is_opaque(&self) -> bool {
        self.opacity() >= 1.0
    }

    /// Composite this colour over an opaque background.
    pub fn blend_over(&self, bg_r: u8, bg_g: u8, bg_b: u8) -> (u8, u8, u8) {
        let a = self.opacity();
        let mix = |fg: u8, bg: u8| -> u8 {
            let v = a * f64::from(fg) + (1.0 - a) * f64::from(bg);
            v.round().clamp(0.0, 255.0) as u8
        };
        (mix(self.r, bg_r), mix(self.g, bg_g), mix(self.b, bg_b))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.alpha {
            None => write!(f, "rgb({},{},{})", self.r, self.g, self.b),
            Some(a) => write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, a),
        }
    }
}

/// Operations a caller can apply to a session
///
/// The terminal front end and tests both drive the controller through these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Start (or restart) a session
    Start,
    /// Suspend a playing session
    Pause,
    /// Continue a paused session
    Resume,
    /// Pick the tile at this index
    Select(usize),
    /// Advance elapsed time by one quantum
    Tick,
}

impl GameAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Start => "start",
            GameAction::Pause => "pause",
            GameAction::Resume => "resume",
            GameAction::Select(_) => "select",
            GameAction::Tick => "tick",
        }
    }
}

impl fmt::Display for GameAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
