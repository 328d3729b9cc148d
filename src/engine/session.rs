//! Totals across several games.
//!
//! The tally is owned by the caller and only changes through explicit calls;
//! starting a new game on the engine does not touch it.

use serde::{Deserialize, Serialize};

use crate::scoring::CumulativeScores;

/// Running statistics over completed games.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTally {
    /// Completed games counted.
    pub games: u32,
    /// Sum of final scores.
    pub total: u64,
    /// Highest final score, if any game was counted.
    pub best: Option<u32>,
}

impl SessionTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a finished game. Returns false (and counts nothing) if the scores
    /// do not have a final total yet.
    pub fn add_game(&mut self, scores: &CumulativeScores) -> bool {
        let Some(score) = scores.final_score() else {
            return false;
        };

        self.games += 1;
        self.total += u64::from(score);
        self.best = Some(self.best.map_or(score, |best| best.max(score)));
        true
    }

    /// Mean final score, if any game was counted.
    #[must_use]
    pub fn average(&self) -> Option<f64> {
        (self.games > 0).then(|| self.total as f64 / f64::from(self.games))
    }

    /// Forget every counted game.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
