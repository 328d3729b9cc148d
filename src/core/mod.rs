//! Core types: deliveries, the throw history, configuration and errors.
//!
//! Everything else in the crate is derived from a `ThrowHistory`.

pub mod throw;
pub mod history;
pub mod config;
pub mod error;

pub use throw::{Throw, FRAMES_PER_GAME, MAX_THROWS_PER_GAME, PINS_PER_RACK};
pub use history::ThrowHistory;
pub use config::{EngineConfig, GameOverPolicy};
pub use error::{Result, ScoreError};
