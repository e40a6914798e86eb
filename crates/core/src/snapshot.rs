use serde::{Deserialize, Serialize};

use crate::types::{Outcome, Phase, Rgba};

/// Immutable view of a session, returned by every controller operation.
///
/// Carries everything a presentation layer needs to lay out the grid. The
/// divergent tile is only distinguishable by its colour value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub outcome: Option<Outcome>,
    pub session_number: u32,
    pub round_number: u32,
    pub elapsed_time: f64,
    pub grid_size: u8,
    pub tile_count: usize,
    pub base_colour: Rgba,
    pub divergent_colour: Rgba,
    pub divergent_index: usize,
    pub failure_history: Vec<Rgba>,
}

impl SessionSnapshot {
    /// Whether tiles accept selections.
    pub fn playable(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Rounds completed so far ("you got through N rounds").
    ///
    /// The current round only counts once it has been cleared, so a defeat on
    /// round 1 reports 0 and a victory on round 30 reports 30.
    pub fn rounds_cleared(&self) -> u32 {
        self.round_number.saturating_sub(1)
    }

    /// Colour tile `index` is drawn with.
    pub fn colour_at(&self, index: usize) -> Option<Rgba> {
        if index >= self.tile_count {
            None
        } else if index == self.divergent_index {
            Some(self.divergent_colour)
        } else {
            Some(self.base_colour)
        }
    }
}
