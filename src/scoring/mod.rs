//! Scoring: game status, pin actions and cumulative frame scores.
//!
//! Both are pure functions of a `ThrowHistory`; calling them repeatedly on the
//! same history always returns the same result.

pub mod status;
pub mod calculator;

pub use status::{check_status, standing_pins, GameStatus, PinAction};
pub use calculator::{cumulative_scores, CumulativeScores};
