//! Score engine facade and its collaborator-facing pieces.
//!
//! - `ScoreEngine`: records deliveries, answers status and score queries
//! - `ScoreObserver`: notified after every accepted delivery
//! - `GameRecord`: saveable/replayable list of deliveries
//! - `SessionTally`: caller-owned totals across games

pub mod score_engine;
pub mod observer;
pub mod record;
pub mod session;

pub use score_engine::{Evaluation, ScoreEngine};
pub use observer::{ObserverId, ScoreObserver, ScoreUpdate};
pub use record::GameRecord;
pub use session::SessionTally;
