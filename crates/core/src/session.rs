//! Game session module - the round-progression state machine
//!
//! [`GameSession`] owns the whole game: lifecycle phase, the current round,
//! elapsed time and failure history. Every operation takes `&mut self` and is
//! atomic from the caller's point of view; hosts that share a session across
//! threads should guard it with a single mutex.

use tracing::{debug, info, trace};

use crate::difficulty::DifficultyCurve;
use crate::rng::{EntropyRandom, RandomSource, SimpleRng};
use crate::round::Round;
use crate::signal::{SessionSignal, Signals};
use crate::snapshot::SessionSnapshot;
use crate::types::{
    GameAction, Outcome, Phase, Rgba, SelectionFault, SessionError, ELAPSED_SCALE, TICK_QUANTUM,
};

/// The session controller.
#[derive(Debug, Clone)]
pub struct GameSession<R = EntropyRandom> {
    curve: DifficultyCurve,
    rng: R,
    phase: Phase,
    outcome: Option<Outcome>,
    /// Monotonic across the controller's lifetime (increments on start).
    session_number: u32,
    /// Diverges from `round.number` only after a victory, where it runs one past
    /// the last generated round.
    round_number: u32,
    elapsed_time: f64,
    round: Round,
    failure_history: Vec<Rgba>,
    signals: Signals,
}

impl GameSession<EntropyRandom> {
    /// Session with the standard curve and an entropy-seeded random source.
    pub fn new() -> Self {
        Self::with_rng(EntropyRandom::new())
    }
}

impl Default for GameSession<EntropyRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession<SimpleRng> {
    /// Deterministic session: the same seed replays the same rounds.
    pub fn seeded(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl<R: RandomSource> GameSession<R> {
    pub fn with_rng(rng: R) -> Self {
        Self::with_curve(rng, DifficultyCurve::standard())
    }

    pub fn with_curve(rng: R, curve: DifficultyCurve) -> Self {
        let round = Round::initial(&curve);
        Self {
            curve,
            rng,
            phase: Phase::Stopped,
            outcome: None,
            session_number: 0,
            round_number: 0,
            elapsed_time: 0.0,
            round,
            failure_history: Vec::new(),
            signals: Signals::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn session_number(&self) -> u32 {
        self.session_number
    }

    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn grid_size(&self) -> u8 {
        self.round.grid_size
    }

    pub fn tile_count(&self) -> usize {
        self.round.tile_count()
    }

    pub fn failure_history(&self) -> &[Rgba] {
        &self.failure_history
    }

    pub fn curve(&self) -> &DifficultyCurve {
        &self.curve
    }

    /// Start a fresh session from any phase but `Playing`.
    pub fn start(&mut self) -> Result<SessionSnapshot, SessionError> {
        if !self.phase.can_start() {
            return Err(self.invalid(GameAction::Start));
        }

        self.signals.clear();
        self.session_number = self.session_number.wrapping_add(1);
        self.round_number = 0;
        self.elapsed_time = 0.0;
        self.failure_history.clear();
        self.outcome = None;
        self.phase = Phase::Playing;
        self.next_round();

        info!(session = self.session_number, "session started");

        let snap = self.snapshot();
        self.signals.push(SessionSignal::SessionStart(snap.clone()));
        Ok(snap)
    }

    pub fn pause(&mut self) -> Result<SessionSnapshot, SessionError> {
        if self.phase != Phase::Playing {
            return Err(self.invalid(GameAction::Pause));
        }
        self.phase = Phase::Paused;
        debug!(session = self.session_number, elapsed = self.elapsed_time, "paused");
        Ok(self.snapshot())
    }

    pub fn resume(&mut self) -> Result<SessionSnapshot, SessionError> {
        if self.phase != Phase::Paused {
            return Err(self.invalid(GameAction::Resume));
        }
        self.phase = Phase::Playing;
        debug!(session = self.session_number, elapsed = self.elapsed_time, "resumed");
        Ok(self.snapshot())
    }

    /// Pick a tile in the current round.
    ///
    /// A correct pick advances to the next round, or finishes the session as a
    /// victory when the final round was just cleared (no new round is rolled, so
    /// the grid and colours stay frozen). A wrong pick records the round's base
    /// colour and finishes the session as a defeat.
    pub fn select(&mut self, index: usize) -> Result<SessionSnapshot, SessionError> {
        if self.phase != Phase::Playing {
            return Err(SelectionFault::NotPlaying(self.phase).into());
        }
        let tile_count = self.round.tile_count();
        if index >= tile_count {
            return Err(SelectionFault::OutOfRange { index, tile_count }.into());
        }

        self.signals.clear();

        if index == self.round.divergent_index {
            if self.round_number >= self.curve.max_round() {
                self.round_number += 1;
                self.finish(Outcome::Victory);
                let snap = self.snapshot();
                self.signals.push(SessionSignal::CorrectGuess(snap.clone()));
                self.signals.push(SessionSignal::SessionFinish(snap.clone()));
                return Ok(snap);
            }

            self.next_round();
            let snap = self.snapshot();
            self.signals.push(SessionSignal::CorrectGuess(snap.clone()));
            return Ok(snap);
        }

        self.failure_history.push(self.round.base_colour);
        self.finish(Outcome::Defeat);
        let snap = self.snapshot();
        self.signals.push(SessionSignal::IncorrectGuess(snap.clone()));
        self.signals.push(SessionSignal::SessionFinish(snap.clone()));
        Ok(snap)
    }

    /// Advance elapsed time by one quantum. A no-op unless playing.
    pub fn tick(&mut self) -> SessionSnapshot {
        if self.phase == Phase::Playing {
            self.elapsed_time =
                ((self.elapsed_time + TICK_QUANTUM) * ELAPSED_SCALE).round() / ELAPSED_SCALE;
            trace!(elapsed = self.elapsed_time, "tick");
        }
        self.snapshot()
    }

    /// Dispatch an action to the matching operation.
    pub fn apply_action(&mut self, action: GameAction) -> Result<SessionSnapshot, SessionError> {
        match action {
            GameAction::Start => self.start(),
            GameAction::Pause => self.pause(),
            GameAction::Resume => self.resume(),
            GameAction::Select(index) => self.select(index),
            GameAction::Tick => Ok(self.tick()),
        }
    }

    /// Take the signals queued by the last start/select.
    pub fn take_signals(&mut self) -> Signals {
        std::mem::take(&mut self.signals)
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.phase = self.phase;
        out.outcome = self.outcome;
        out.session_number = self.session_number;
        out.round_number = self.round_number;
        out.elapsed_time = self.elapsed_time;
        out.grid_size = self.round.grid_size;
        out.tile_count = self.round.tile_count();
        out.base_colour = self.round.base_colour;
        out.divergent_colour = self.round.divergent_colour;
        out.divergent_index = self.round.divergent_index;
        out.failure_history.clone_from(&self.failure_history);
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            outcome: self.outcome,
            session_number: self.session_number,
            round_number: self.round_number,
            elapsed_time: self.elapsed_time,
            grid_size: self.round.grid_size,
            tile_count: self.round.tile_count(),
            base_colour: self.round.base_colour,
            divergent_colour: self.round.divergent_colour,
            divergent_index: self.round.divergent_index,
            failure_history: self.failure_history.clone(),
        }
    }

    fn next_round(&mut self) {
        self.round_number += 1;
        self.round = Round::generate(self.round_number, &self.curve, &mut self.rng);
    }

    fn finish(&mut self, outcome: Outcome) {
        self.phase = Phase::Finished;
        self.outcome = Some(outcome);
        info!(
            session = self.session_number,
            round = self.round_number,
            elapsed = self.elapsed_time,
            ?outcome,
            "session finished"
        );
    }

    fn invalid(&self, action: GameAction) -> SessionError {
        SessionError::InvalidTransition {
            action,
            phase: self.phase,
        }
    }
}
