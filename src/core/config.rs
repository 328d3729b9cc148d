//! Engine configuration.
//!
//! The scoring rules themselves are fixed (standard ten-pin). Configuration
//! only covers how the engine reacts to calls the rules do not allow.

use serde::{Deserialize, Serialize};

/// What `record_throw` does once the game is over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOverPolicy {
    /// Fail with `ScoreError::InvalidState`.
    #[default]
    Reject,
    /// Leave the history untouched and return the game-over status.
    Ignore,
}

/// Score engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Handling of deliveries recorded after the tenth frame is complete.
    pub after_game_over: GameOverPolicy,

    /// Reject deliveries that knock down more pins than are standing
    /// (e.g. 7 then 5 in one frame). Off by default: the pin-fall count is
    /// trusted and only the `0..=10` range is checked.
    pub enforce_standing_pins: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            after_game_over: GameOverPolicy::Reject,
            enforce_standing_pins: false,
        }
    }
}

impl EngineConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the game-over policy.
    #[must_use]
    pub fn with_game_over_policy(mut self, policy: GameOverPolicy) -> Self {
        self.after_game_over = policy;
        self
    }

    /// Enable or disable the standing-pins check.
    #[must_use]
    pub fn with_standing_pins_check(mut self, enabled: bool) -> Self {
        self.enforce_standing_pins = enabled;
        self
    }
}
