//! Front end glue between input, the session controller and the view.
//!
//! `App` interprets [`InputAction`]s for the current phase, reacts to the
//! signals a session operation emits (arming/canceling the tick clock and
//! picking the feedback banner) and feeds elapsed wall-clock time through the
//! [`TickClock`]. It owns no terminal, so the whole loop is testable.

use tracing::{debug, warn};

use crate::core::{GameSession, RandomSource, SessionSignal, SessionSnapshot, TickClock};
use crate::input::{InputAction, TileCursor};
use crate::term::{frame_fingerprint, Banner, FrameBuffer, GameView, HudView, Viewport};
use crate::types::{GameAction, Outcome, Phase};

/// Longest the host waits for input when no tick is due.
pub const IDLE_POLL_MS: u32 = 250;

pub struct App<R: RandomSource> {
    session: GameSession<R>,
    snapshot: SessionSnapshot,
    clock: TickClock,
    cursor: TileCursor,
    banner: Option<Banner>,
    view: GameView,
}

impl<R: RandomSource> App<R> {
    pub fn new(session: GameSession<R>, tick_ms: u32) -> Self {
        let snapshot = session.snapshot();
        let cursor = TileCursor::new(snapshot.grid_size);
        Self {
            session,
            snapshot,
            clock: TickClock::new(tick_ms),
            cursor,
            banner: None,
            view: GameView::default(),
        }
    }

    pub fn snapshot(&self) -> &SessionSnapshot {
        &self.snapshot
    }

    pub fn session(&self) -> &GameSession<R> {
        &self.session
    }

    pub fn clock(&self) -> &TickClock {
        &self.clock
    }

    pub fn cursor(&self) -> &TileCursor {
        &self.cursor
    }

    pub fn banner(&self) -> Option<Banner> {
        self.banner
    }

    pub fn hud(&self) -> HudView {
        HudView {
            cursor: self.snapshot.playable().then(|| self.cursor.index()),
            banner: self.banner,
        }
    }

    /// Interpret one input action for the current phase.
    pub fn handle_input(&mut self, input: InputAction, viewport: Viewport) {
        let phase = self.snapshot.phase;
        let action = match (input, phase) {
            (InputAction::Move(direction), Phase::Playing) => {
                self.cursor.step(direction);
                None
            }
            (InputAction::Move(_), _) => None,

            (InputAction::Confirm, Phase::Playing) => Some(GameAction::Select(self.cursor.index())),
            (InputAction::Confirm, Phase::Paused) => Some(GameAction::Resume),
            (InputAction::Confirm, _) => Some(GameAction::Start),

            (InputAction::TogglePause, Phase::Playing) => Some(GameAction::Pause),
            (InputAction::TogglePause, Phase::Paused) => Some(GameAction::Resume),
            (InputAction::TogglePause, _) => None,

            (InputAction::Restart, p) if p.can_start() => Some(GameAction::Start),
            (InputAction::Restart, _) => None,

            (InputAction::Click { column, row }, Phase::Playing) => {
                match self.view.hit_test(&self.snapshot, viewport, column, row) {
                    Some(index) => {
                        self.cursor.set_index(index);
                        Some(GameAction::Select(index))
                    }
                    None => None,
                }
            }
            (InputAction::Click { .. }, _) => None,
        };

        if let Some(action) = action {
            self.dispatch(action);
        }
    }

    /// Feed wall-clock time; runs every tick that became due.
    ///
    /// Returns the number of ticks applied.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let due = self.clock.advance(elapsed_ms);
        if due == 0 {
            return 0;
        }
        for _ in 0..due {
            self.session.tick();
        }
        self.session.snapshot_into(&mut self.snapshot);
        due
    }

    /// How long the host may block on input before the next tick is due.
    pub fn poll_timeout_ms(&self) -> u32 {
        self.clock
            .until_next_ms()
            .map_or(IDLE_POLL_MS, |ms| ms.min(IDLE_POLL_MS))
    }

    /// Whether the current screen only changes on input.
    pub fn is_static(&self) -> bool {
        !self.snapshot.playable()
    }

    pub fn fingerprint(&self, viewport: Viewport) -> u64 {
        frame_fingerprint(&self.snapshot, &self.hud(), viewport)
    }

    pub fn render_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        self.view
            .render_into_with_hud(&self.snapshot, &self.hud(), viewport, fb);
    }

    fn dispatch(&mut self, action: GameAction) {
        match self.session.apply_action(action) {
            Ok(snapshot) => {
                debug!(?action, phase = ?snapshot.phase, round = snapshot.round_number, "action applied");
                self.snapshot = snapshot;
            }
            Err(err) => {
                warn!(?action, %err, "action rejected");
                return;
            }
        }

        for signal in self.session.take_signals() {
            self.on_signal(&signal);
        }
        self.cursor.sync(self.snapshot.grid_size);
    }

    fn on_signal(&mut self, signal: &SessionSignal) {
        let snap = signal.snapshot();
        match signal {
            SessionSignal::SessionStart(_) => {
                debug!(session = snap.session_number, "tick clock armed");
                self.clock.start();
                self.banner = None;
                self.cursor = TileCursor::new(snap.grid_size);
            }
            SessionSignal::CorrectGuess(_) => {
                debug!(round = snap.round_number, "correct guess");
                self.banner = Some(Banner::Correct);
            }
            SessionSignal::IncorrectGuess(_) => {
                debug!(round = snap.round_number, "incorrect guess");
                self.banner = Some(Banner::Incorrect);
            }
            SessionSignal::SessionFinish(_) => {
                self.clock.cancel();
                if snap.outcome == Some(Outcome::Victory) {
                    self.banner = Some(Banner::Victory);
                }
                debug!(
                    session = snap.session_number,
                    rounds_cleared = snap.rounds_cleared(),
                    "tick clock canceled"
                );
            }
        }
    }
}
