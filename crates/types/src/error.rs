//! Error types for session operations and difficulty configuration.

use thiserror::Error;

use crate::{GameAction, Phase};

/// Why a `select` call was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionFault {
    #[error("tile {index} is outside a grid of {tile_count} tiles")]
    OutOfRange { index: usize, tile_count: usize },
    #[error("tiles can only be selected while playing (session is {0})")]
    NotPlaying(Phase),
}

/// A caller-contract violation reported by the session controller.
///
/// None of these are transient: the session is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("invalid selection: {0}")]
    InvalidSelection(#[from] SelectionFault),
    #[error("invalid transition: cannot {action} while {phase}")]
    InvalidTransition { action: GameAction, phase: Phase },
}

/// Rejected difficulty curve.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    #[error("max round must be at least 1")]
    NoRounds,
    #[error("step thresholds must be strictly ascending (got {previous} then {next})")]
    UnorderedThreshold { previous: u32, next: u32 },
    #[error("grid sizes must be at least 1 and never shrink (got {size} after {previous})")]
    ShrinkingGrid { previous: u8, size: u8 },
    #[error("divergence {0} is outside (0, 1)")]
    DivergenceOutOfRange(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_fault_converts_into_session_error() {
        let err: SessionError = SelectionFault::OutOfRange {
            index: 99,
            tile_count: 4,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "invalid selection: tile 99 is outside a grid of 4 tiles"
        );
    }

    #[test]
    fn transition_error_names_action_and_phase() {
        let err = SessionError::InvalidTransition {
            action: GameAction::Resume,
            phase: Phase::Stopped,
        };
        assert_eq!(
            err.to_string(),
            "invalid transition: cannot resume while stopped"
        );
    }
}
