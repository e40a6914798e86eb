//! Outbound signals emitted by the session controller.
//!
//! Signals are fire-and-forget: the controller queues them during an
//! operation and the host drains them with
//! [`GameSession::take_signals`](crate::GameSession::take_signals) to drive
//! sounds, timers and banners.

use arrayvec::ArrayVec;

use crate::snapshot::SessionSnapshot;

/// Most signals a single operation emits (a losing pick emits two).
pub const MAX_SIGNALS_PER_ACTION: usize = 2;

/// Signals queued by the last operation.
pub type Signals = ArrayVec<SessionSignal, MAX_SIGNALS_PER_ACTION>;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionSignal {
    SessionStart(SessionSnapshot),
    CorrectGuess(SessionSnapshot),
    IncorrectGuess(SessionSnapshot),
    SessionFinish(SessionSnapshot),
}

impl SessionSignal {
    pub fn snapshot(&self) -> &SessionSnapshot {
        match self {
            SessionSignal::SessionStart(s)
            | SessionSignal::CorrectGuess(s)
            | SessionSignal::IncorrectGuess(s)
            | SessionSignal::SessionFinish(s) => s,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SessionSignal::SessionStart(_) => "session_start",
            SessionSignal::CorrectGuess(_) => "correct_guess",
            SessionSignal::IncorrectGuess(_) => "incorrect_guess",
            SessionSignal::SessionFinish(_) => "session_finish",
        }
    }
}
