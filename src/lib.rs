//! # bowling-score
//!
//! A ten-pin bowling score engine: given the pins knocked down by each
//! delivery, it works out the current frame, whether the game is over,
//! what the pin rack should do next, and the running score per frame.
//!
//! ## Design Principles
//!
//! 1. **History Is the Truth**: The append-only `ThrowHistory` is the only
//!    state. Position, status and scores are pure functions of it.
//!
//! 2. **No Hidden State Machine**: The engine caches one evaluation of the
//!    history and recomputes it on every append, so the cache can never
//!    drift from what the stateless functions return.
//!
//! 3. **Collaborators at the Edges**: Pin detection, the pin rack and the
//!    scoreboard talk to the engine through pin counts, `PinAction`s and
//!    `ScoreObserver` updates. The engine never touches physics or rendering.
//!
//! ## Modules
//!
//! - `core`: Deliveries, the throw history, configuration and errors
//! - `frames`: Locating the current frame; per-frame scoreboard view
//! - `scoring`: Game status, pin actions and cumulative scores
//! - `engine`: The `ScoreEngine` facade, observers, records, session totals
//! - `sim`: Deterministic simulated bowler for tests and benches

pub mod core;
pub mod frames;
pub mod scoring;
pub mod engine;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    Throw, ThrowHistory, EngineConfig, GameOverPolicy, Result, ScoreError,
    FRAMES_PER_GAME, MAX_THROWS_PER_GAME, PINS_PER_RACK,
};

pub use crate::frames::{FrameKind, FrameView, Position, ThrowMark};

pub use crate::scoring::{CumulativeScores, GameStatus, PinAction};

pub use crate::engine::{
    Evaluation, GameRecord, ObserverId, ScoreEngine, ScoreObserver, ScoreUpdate, SessionTally,
};

pub use crate::sim::{BowlerRng, SimulatedBowler};
