//! Round generation - the visual parameters of one "find the odd tile" round.

use tracing::debug;

use crate::difficulty::DifficultyCurve;
use crate::rng::RandomSource;
use crate::types::{Rgba, CHANNEL_MIN, CHANNEL_SPAN};

/// Parameters of a single round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Round {
    pub number: u32,
    pub grid_size: u8,
    pub base_colour: Rgba,
    pub divergent_colour: Rgba,
    pub divergent_index: usize,
    pub divergence: f64,
}

impl Round {
    /// Placeholder shown before the first session starts.
    ///
    /// Uses the curve's round-0 grid so the index invariant holds from the
    /// very first snapshot.
    pub fn initial(curve: &DifficultyCurve) -> Self {
        Self {
            number: 0,
            grid_size: curve.grid_size(0),
            base_colour: Rgba::opaque(0, 0, 0),
            divergent_colour: Rgba::opaque(0, 128, 0),
            divergent_index: 0,
            divergence: curve.divergence(0),
        }
    }

    /// Roll the parameters for round `number`.
    ///
    /// Draw order is fixed (r, g, b, coin, index) so a seeded source always
    /// reproduces the same round.
    pub fn generate<R: RandomSource + ?Sized>(
        number: u32,
        curve: &DifficultyCurve,
        rng: &mut R,
    ) -> Self {
        let r = sample_channel(rng);
        let g = sample_channel(rng);
        let b = sample_channel(rng);

        let divergence = curve.divergence(number);
        let faded = Rgba::with_alpha(r, g, b, 1.0 - divergence);
        let solid = Rgba::opaque(r, g, b);

        let divergence_lighter = rng.next_coin();
        let (base_colour, divergent_colour) = if divergence_lighter {
            (faded, solid)
        } else {
            (solid, faded)
        };

        let grid_size = curve.grid_size(number);
        let tile_count = grid_size as u32 * grid_size as u32;
        let divergent_index = rng.next_below(tile_count) as usize;

        debug!(
            round = number,
            grid_size,
            divergence,
            divergent_index,
            base = %base_colour,
            "generated round"
        );

        Self {
            number,
            grid_size,
            base_colour,
            divergent_colour,
            divergent_index,
            divergence,
        }
    }

    pub fn tile_count(&self) -> usize {
        let n = self.grid_size as usize;
        n * n
    }

    /// Colour tile `index` is drawn with, or `None` past the grid.
    pub fn colour_at(&self, index: usize) -> Option<Rgba> {
        if index >= self.tile_count() {
            None
        } else if index == self.divergent_index {
            Some(self.divergent_colour)
        } else {
            Some(self.base_colour)
        }
    }
}

fn sample_channel<R: RandomSource + ?Sized>(rng: &mut R) -> u8 {
    CHANNEL_MIN + rng.next_below(CHANNEL_SPAN) as u8
}
