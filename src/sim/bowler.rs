//! Simulated pin-fall collaborator.
//!
//! Stands in for physical pin detection in tests, benches and demos: each
//! standing pin falls independently with probability `skill`.

use log::debug;

use crate::core::Result;
use crate::engine::ScoreEngine;

use super::rng::BowlerRng;

/// A deterministic simulated bowler.
#[derive(Clone, Debug)]
pub struct SimulatedBowler {
    rng: BowlerRng,
    skill: f64,
}

impl SimulatedBowler {
    /// Create a bowler. `skill` is the chance each standing pin falls,
    /// clamped to `0.0..=1.0`.
    #[must_use]
    pub fn new(seed: u64, skill: f64) -> Self {
        Self {
            rng: BowlerRng::new(seed),
            skill: skill.clamp(0.0, 1.0),
        }
    }

    #[must_use]
    pub fn skill(&self) -> f64 {
        self.skill
    }

    /// Pins knocked down out of `standing`.
    pub fn deliver(&mut self, standing: u8) -> u8 {
        self.rng.knock_down(standing, self.skill)
    }

    /// Bowl until the engine reports game over. Returns the final score.
    pub fn play_game(&mut self, engine: &mut ScoreEngine) -> Result<u32> {
        while !engine.is_game_over() {
            let pins = self.deliver(engine.standing_pins());
            engine.record_throw(pins)?;
        }

        let score = engine.cumulative_scores().running_total();
        debug!("simulated game finished: {score} (skill {:.2})", self.skill);
        Ok(score)
    }
}
