//! Score engine facade.
//!
//! The engine owns the throw history and is the only component external
//! collaborators call. All derived state (position, status, scores) is
//! recomputed from the history after every append or reset; the cached
//! `Evaluation` is never updated any other way.

use log::{debug, info, warn};

use crate::core::{EngineConfig, GameOverPolicy, Result, ScoreError, Throw, ThrowHistory};
use crate::frames::{frames, locate, FrameView, Position};
use crate::scoring::calculator::cumulative_scores;
use crate::scoring::status::{standing_after, status_at};
use crate::scoring::{CumulativeScores, GameStatus};

use super::observer::{ObserverId, ObserverRegistry, ScoreObserver, ScoreUpdate};
use super::record::GameRecord;

/// Everything derived from a history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Evaluation {
    pub position: Position,
    pub status: GameStatus,
    pub scores: CumulativeScores,
    /// Pins standing for the next delivery.
    pub standing: u8,
}

impl Evaluation {
    /// Evaluate a history from scratch.
    #[must_use]
    pub fn of(history: &ThrowHistory) -> Self {
        let position = locate(history);
        let status = status_at(history, &position);
        Self {
            position,
            status,
            scores: cumulative_scores(history),
            standing: standing_after(history, status),
        }
    }
}

/// Bowling score engine for one game.
///
/// ## Example
///
/// ```
/// use bowling_score::{PinAction, ScoreEngine};
///
/// let mut engine = ScoreEngine::new();
/// let status = engine.record_throw(7).unwrap();
/// assert_eq!(status.next_pin_action, PinAction::RemoveFallen);
///
/// engine.record_throw(3).unwrap();
/// engine.record_throw(4).unwrap();
/// assert_eq!(engine.cumulative_scores().get(1), Some(14));
/// ```
pub struct ScoreEngine {
    config: EngineConfig,
    history: ThrowHistory,
    evaluation: Evaluation,
    observers: ObserverRegistry,
}

impl Default for ScoreEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreEngine {
    /// Create an engine with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with a custom configuration.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let history = ThrowHistory::new();
        Self {
            config,
            evaluation: Evaluation::of(&history),
            history,
            observers: ObserverRegistry::default(),
        }
    }

    /// Rebuild an engine by recording every delivery of a saved game.
    ///
    /// Invalid records fail with the same error `record_throw` would give.
    pub fn replay(record: &GameRecord, config: EngineConfig) -> Result<Self> {
        let mut engine = Self::with_config(config);
        for &pins in &record.throws {
            engine.record_throw(pins)?;
        }
        Ok(engine)
    }

    // === Recording ===

    /// Record one delivery and return the resulting status.
    ///
    /// Fails with `OutOfRangeThrow` for more than 10 pins (or more than are
    /// standing, when `enforce_standing_pins` is set) and with `InvalidState` after the
    /// game is over, unless the config says to ignore such deliveries. The
    /// history is unchanged on failure.
    pub fn record_throw(&mut self, pins: u8) -> Result<GameStatus> {
        let throw = Throw::new(pins).map_err(|err| {
            warn!("rejected throw: {err}");
            err
        })?;

        if self.evaluation.status.is_game_over {
            return match self.config.after_game_over {
                GameOverPolicy::Reject => {
                    warn!("rejected throw of {pins} pins: game is over");
                    Err(ScoreError::InvalidState("game is over"))
                }
                GameOverPolicy::Ignore => {
                    warn!("ignored throw of {pins} pins: game is over");
                    Ok(self.evaluation.status)
                }
            };
        }

        let standing = self.evaluation.standing;
        if self.config.enforce_standing_pins && pins > standing {
            warn!("rejected throw of {pins} pins: only {standing} standing");
            return Err(ScoreError::OutOfRangeThrow { pins, max: standing });
        }

        self.history.push(throw);
        self.evaluation = Evaluation::of(&self.history);

        let Evaluation { position, status, .. } = self.evaluation;
        debug!(
            "recorded {pins} pins; frame {} throw {}, next {:?}",
            position.frame, position.throws_in_frame, status.next_pin_action
        );
        if status.is_game_over {
            info!(
                "game complete after {} throws, final score {}",
                self.history.len(),
                self.evaluation.scores.running_total()
            );
        }

        self.publish();
        Ok(status)
    }

    /// Clear the history for a new game.
    pub fn reset(&mut self) {
        info!("new game (previous history had {} throws)", self.history.len());
        self.history.clear();
        self.evaluation = Evaluation::of(&self.history);
        self.publish();
    }

    // === Queries ===

    /// Game-over flag and the next pin action.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.evaluation.status
    }

    /// Same as [`ScoreEngine::status`].
    #[must_use]
    pub fn check_status(&self) -> GameStatus {
        self.status()
    }

    /// Running totals for the ten frames.
    #[must_use]
    pub fn cumulative_scores(&self) -> CumulativeScores {
        self.evaluation.scores
    }

    /// Current frame and throw.
    #[must_use]
    pub fn position(&self) -> Position {
        self.evaluation.position
    }

    /// Pins standing for the next delivery.
    #[must_use]
    pub fn standing_pins(&self) -> u8 {
        self.evaluation.standing
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.evaluation.status.is_game_over
    }

    /// Per-frame breakdown for the scoreboard.
    #[must_use]
    pub fn frames(&self) -> Vec<FrameView> {
        frames(&self.history)
    }

    /// The recorded deliveries.
    #[must_use]
    pub fn history(&self) -> &ThrowHistory {
        &self.history
    }

    /// The cached evaluation of the current history.
    #[must_use]
    pub fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Snapshot the history as a saveable record.
    #[must_use]
    pub fn record(&self) -> GameRecord {
        GameRecord::from(&self.history)
    }

    // === Observers ===

    /// Subscribe to updates after each delivery and reset.
    pub fn subscribe(&mut self, observer: impl ScoreObserver + 'static) -> ObserverId {
        self.observers.subscribe(Box::new(observer))
    }

    /// Remove an observer. Returns false if it was not subscribed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn publish(&mut self) {
        if self.observers.is_empty() {
            return;
        }

        let update = ScoreUpdate {
            history: self.history.clone(),
            scores: self.evaluation.scores,
            status: self.evaluation.status,
            frames: frames(&self.history),
        };
        self.observers.notify(&update);
    }
}

impl std::fmt::Debug for ScoreEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreEngine")
            .field("config", &self.config)
            .field("history", &self.history)
            .field("evaluation", &self.evaluation)
            .field("observers", &self.observers.len())
            .finish()
    }
}
