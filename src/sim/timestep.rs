//! Fixed timestep accumulator
//!
//! Turns variable frame times into a whole number of fixed simulation steps.
//! Leftover time carries into the next frame.

use serde::{Deserialize, Serialize};

use crate::consts::{FIXED_TIMESTEP, MAX_SUBSTEPS};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedTimestep {
    step: f32,
    max_substeps: u32,
    accumulator: f32,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(FIXED_TIMESTEP, MAX_SUBSTEPS)
    }
}

impl FixedTimestep {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        Self {
            step,
            max_substeps: max_substeps.max(1),
            accumulator: 0.0,
        }
    }

    /// Length of one step in seconds
    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Time carried over that has not yet been simulated
    #[inline]
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    /// Add a frame's elapsed time and return how many steps to run
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.max(0.0);

        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_substeps {
            self.accumulator -= self.step;
            steps += 1;
        }

        if self.accumulator >= self.step {
            log::debug!(
                "Timestep backlog of {:.3}s dropped after {} substeps",
                self.accumulator,
                steps
            );
            self.accumulator %= self.step;
        }

        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_frames_accumulate() {
        let mut ts = FixedTimestep::default();
        assert_eq!(ts.advance(0.01), 0);
        assert!((ts.accumulator() - 0.01).abs() < 1e-6);
        assert_eq!(ts.advance(0.01), 1);
        assert!(ts.accumulator() < ts.step());
    }

    #[test]
    fn test_exact_multiple() {
        let mut ts = FixedTimestep::new(0.25, 8);
        assert_eq!(ts.advance(0.75), 3);
        assert!(ts.accumulator().abs() < 1e-6);
    }

    #[test]
    fn test_spiral_of_death_is_capped() {
        let mut ts = FixedTimestep::new(0.01, 4);
        assert_eq!(ts.advance(1.0), 4);
        assert!(ts.accumulator() < ts.step());
    }

    #[test]
    fn test_negative_dt_ignored() {
        let mut ts = FixedTimestep::default();
        assert_eq!(ts.advance(-1.0), 0);
        assert_eq!(ts.accumulator(), 0.0);
    }

    #[test]
    fn test_leftover_carries_over() {
        let mut ts = FixedTimestep::new(0.1, 8);
        assert_eq!(ts.advance(0.05), 0);
        assert!((ts.accumulator() - 0.05).abs() < 1e-5);
        assert_eq!(ts.advance(0.06), 1);
    }
}
