//! Difficulty curve - maps a round number to grid size and colour divergence
//!
//! Both mappings are step functions. The standard curve is built from the
//! constants in [`crate::types`]; alternate curves can be supplied for testing
//! and are validated on construction.

use crate::types::{
    CurveError, DIVERGENCE_MIN, DIVERGENCE_STEPS, GRID_SIZE_MAX, GRID_SIZE_STEPS, MAX_ROUND,
};

/// One step of a difficulty table: `value` applies to rounds `< below`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step<T> {
    pub below: u32,
    pub value: T,
}

impl<T> Step<T> {
    pub const fn new(below: u32, value: T) -> Self {
        Self { below, value }
    }
}

/// Round-indexed difficulty configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DifficultyCurve {
    grid_steps: Vec<Step<u8>>,
    grid_max: u8,
    divergence_steps: Vec<Step<f64>>,
    divergence_min: f64,
    max_round: u32,
}

impl DifficultyCurve {
    /// Build a validated curve.
    ///
    /// Thresholds in each table must be strictly ascending, grid sizes must be
    /// at least 1 and never shrink (the trailing `grid_max` included), and every
    /// divergence must lie in `(0, 1)`.
    pub fn new(
        grid_steps: Vec<Step<u8>>,
        grid_max: u8,
        divergence_steps: Vec<Step<f64>>,
        divergence_min: f64,
        max_round: u32,
    ) -> Result<Self, CurveError> {
        if max_round == 0 {
            return Err(CurveError::NoRounds);
        }
        check_ascending(&grid_steps)?;
        check_ascending(&divergence_steps)?;

        let mut previous = 1u8;
        for size in grid_steps.iter().map(|s| s.value).chain(Some(grid_max)) {
            if size < previous {
                return Err(CurveError::ShrinkingGrid { previous, size });
            }
            previous = size;
        }

        for d in divergence_steps
            .iter()
            .map(|s| s.value)
            .chain(Some(divergence_min))
        {
            if !(d > 0.0 && d < 1.0) {
                return Err(CurveError::DivergenceOutOfRange(d));
            }
        }

        Ok(Self {
            grid_steps,
            grid_max,
            divergence_steps,
            divergence_min,
            max_round,
        })
    }

    /// The tuned curve the game ships with.
    pub fn standard() -> Self {
        Self {
            grid_steps: GRID_SIZE_STEPS
                .iter()
                .map(|&(below, size)| Step::new(below, size))
                .collect(),
            grid_max: GRID_SIZE_MAX,
            divergence_steps: DIVERGENCE_STEPS
                .iter()
                .map(|&(below, d)| Step::new(below, d))
                .collect(),
            divergence_min: DIVERGENCE_MIN,
            max_round: MAX_ROUND,
        }
    }

    /// Same tables with a different final round.
    pub fn with_max_round(mut self, max_round: u32) -> Result<Self, CurveError> {
        if max_round == 0 {
            return Err(CurveError::NoRounds);
        }
        self.max_round = max_round;
        Ok(self)
    }

    /// Grid side length for `round`.
    pub fn grid_size(&self, round: u32) -> u8 {
        lookup(&self.grid_steps, round).unwrap_or(self.grid_max)
    }

    /// Number of tiles for `round`.
    pub fn tile_count(&self, round: u32) -> usize {
        let n = self.grid_size(round) as usize;
        n * n
    }

    /// Opacity delta between the two colours of `round`.
    pub fn divergence(&self, round: u32) -> f64 {
        lookup(&self.divergence_steps, round).unwrap_or(self.divergence_min)
    }

    pub fn max_round(&self) -> u32 {
        self.max_round
    }
}

impl Default for DifficultyCurve {
    fn default() -> Self {
        Self::standard()
    }
}

fn lookup<T: Copy>(steps: &[Step<T>], round: u32) -> Option<T> {
    steps.iter().find(|s| round < s.below).map(|s| s.value)
}

fn check_ascending<T>(steps: &[Step<T>]) -> Result<(), CurveError> {
    for pair in steps.windows(2) {
        if pair[1].below <= pair[0].below {
            return Err(CurveError::UnorderedThreshold {
                previous: pair[0].below,
                next: pair[1].below,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_grid_thresholds() {
        let curve = DifficultyCurve::standard();
        assert_eq!(curve.grid_size(1), 2);
        assert_eq!(curve.grid_size(3), 2);
        assert_eq!(curve.grid_size(4), 3);
        assert_eq!(curve.grid_size(6), 3);
        assert_eq!(curve.grid_size(7), 4);
        assert_eq!(curve.grid_size(9), 4);
        assert_eq!(curve.grid_size(10), 5);
        assert_eq!(curve.grid_size(19), 5);
        assert_eq!(curve.grid_size(20), 6);
        assert_eq!(curve.grid_size(30), 6);
        assert_eq!(curve.tile_count(20), 36);
    }

    #[test]
    fn test_standard_divergence_thresholds() {
        let curve = DifficultyCurve::standard();
        assert_eq!(curve.divergence(1), 0.4);
        assert_eq!(curve.divergence(3), 0.4);
        assert_eq!(curve.divergence(4), 0.3);
        assert_eq!(curve.divergence(7), 0.2);
        assert_eq!(curve.divergence(9), 0.2);
        assert_eq!(curve.divergence(10), 0.1);
        assert_eq!(curve.divergence(500), 0.1);
    }

    #[test]
    fn test_grid_never_shrinks() {
        let curve = DifficultyCurve::standard();
        let mut last = 0;
        for round in 0..100 {
            let size = curve.grid_size(round);
            assert!(size >= last);
            last = size;
        }
    }

    #[test]
    fn test_standard_curve_passes_validation() {
        let std = DifficultyCurve::standard();
        let rebuilt = DifficultyCurve::new(
            std.grid_steps.clone(),
            std.grid_max,
            std.divergence_steps.clone(),
            std.divergence_min,
            std.max_round,
        )
        .unwrap();
        assert_eq!(rebuilt, std);
    }

    #[test]
    fn test_rejects_unordered_thresholds() {
        let err = DifficultyCurve::new(
            vec![Step::new(5, 2), Step::new(5, 3)],
            4,
            vec![],
            0.1,
            10,
        )
        .unwrap_err();
        assert_eq!(
            err,
            CurveError::UnorderedThreshold {
                previous: 5,
                next: 5
            }
        );
    }

    #[test]
    fn test_rejects_shrinking_grid() {
        let err = DifficultyCurve::new(vec![Step::new(5, 4)], 3, vec![], 0.1, 10).unwrap_err();
        assert_eq!(err, CurveError::ShrinkingGrid { previous: 4, size: 3 });

        let err = DifficultyCurve::new(vec![], 0, vec![], 0.1, 10).unwrap_err();
        assert_eq!(err, CurveError::ShrinkingGrid { previous: 1, size: 0 });
    }

    #[test]
    fn test_rejects_bad_divergence_and_max_round() {
        let err = DifficultyCurve::new(vec![], 2, vec![Step::new(3, 1.0)], 0.1, 10).unwrap_err();
        assert_eq!(err, CurveError::DivergenceOutOfRange(1.0));

        let err = DifficultyCurve::new(vec![], 2, vec![], 0.1, 0).unwrap_err();
        assert_eq!(err, CurveError::NoRounds);

        assert!(DifficultyCurve::standard().with_max_round(0).is_err());
        assert_eq!(
            DifficultyCurve::standard()
                .with_max_round(5)
                .unwrap()
                .max_round(),
            5
        );
    }

    #[test]
    fn test_flat_curve() {
        let curve = DifficultyCurve::new(vec![], 3, vec![], 0.25, 3).unwrap();
        assert_eq!(curve.grid_size(1), 3);
        assert_eq!(curve.grid_size(50), 3);
        assert_eq!(curve.divergence(1), 0.25);
    }
}
