//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the round-progression state machine and everything it
//! depends on. It has **no dependencies** on terminals, audio or timers:
//!
//! - **Deterministic**: a seeded random source replays identical sessions
//! - **Testable**: every transition is a plain method returning a snapshot
//! - **Portable**: the same controller can sit behind a terminal, a GUI or a test
//!
//! # Module Structure
//!
//! - [`session`]: the [`GameSession`] controller (start/pause/resume/select/tick)
//! - [`round`]: per-round colour and grid generation
//! - [`difficulty`]: round-number to grid size / divergence step functions
//! - [`rng`]: the injectable [`RandomSource`] seam and its implementations
//! - [`snapshot`]: the immutable [`SessionSnapshot`] handed to presentation code
//! - [`signal`]: outbound [`SessionSignal`]s for sound and timer hosts
//! - [`clock`]: the cancelable [`TickClock`] that paces elapsed time
//!
//! # Game Rules
//!
//! - Each round shows an N×N grid where every tile shares one colour except
//!   the divergent tile, which differs only in opacity.
//! - Picking the divergent tile advances to the next round; picking any other
//!   tile ends the session and records the base colour in the failure history.
//! - Clearing round 30 ends the session as a victory.
//!
//! # Example
//!
//! ```
//! use colour_clicker_core::GameSession;
//! use colour_clicker_types::Phase;
//!
//! let mut session = GameSession::seeded(12345);
//! let snap = session.start().unwrap();
//! assert_eq!(snap.round_number, 1);
//! assert_eq!(snap.tile_count, 4);
//!
//! // The correct pick advances the round.
//! let snap = session.select(snap.divergent_index).unwrap();
//! assert_eq!(snap.round_number, 2);
//!
//! // Time only moves while playing.
//! session.pause().unwrap();
//! assert_eq!(session.tick().elapsed_time, 0.0);
//! assert_eq!(session.phase(), Phase::Paused);
//! ```

pub mod clock;
pub mod difficulty;
pub mod rng;
pub mod round;
pub mod session;
pub mod signal;
pub mod snapshot;

pub use colour_clicker_types as types;

// Re-export commonly used types for convenience
pub use clock::TickClock;
pub use difficulty::{DifficultyCurve, Step};
pub use rng::{EntropyRandom, FnSource, RandomSource, ScriptedRandom, SimpleRng};
pub use round::Round;
pub use session::GameSession;
pub use signal::{SessionSignal, Signals, MAX_SIGNALS_PER_ACTION};
pub use snapshot::SessionSnapshot;
