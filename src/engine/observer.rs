//! Score observers.
//!
//! Observers are notified after every accepted delivery and after a reset,
//! with a snapshot of everything the scoreboard needs.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::ThrowHistory;
use crate::frames::FrameView;
use crate::scoring::{CumulativeScores, GameStatus};

/// Unique identifier for a subscribed observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObserverId(pub u32);

impl ObserverId {
    /// Create a new observer ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ObserverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Observer({})", self.0)
    }
}

/// Snapshot published to observers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreUpdate {
    pub history: ThrowHistory,
    pub scores: CumulativeScores,
    pub status: GameStatus,
    pub frames: Vec<FrameView>,
}

/// Receives score updates from a `ScoreEngine`.
pub trait ScoreObserver {
    fn on_update(&mut self, update: &ScoreUpdate);
}

impl<F> ScoreObserver for F
where
    F: FnMut(&ScoreUpdate),
{
    fn on_update(&mut self, update: &ScoreUpdate) {
        self(update)
    }
}

/// Subscribed observers, notified in subscription order.
#[derive(Default)]
pub(crate) struct ObserverRegistry {
    observers: FxHashMap<ObserverId, Box<dyn ScoreObserver>>,
    /// Subscribed ids, oldest first.
    order: Vec<ObserverId>,
    next_id: u32,
}

impl ObserverRegistry {
    pub(crate) fn subscribe(&mut self, observer: Box<dyn ScoreObserver>) -> ObserverId {
        let id = ObserverId::new(self.next_id);
        self.next_id += 1;
        self.observers.insert(id, observer);
        self.order.push(id);
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: ObserverId) -> bool {
        if self.observers.remove(&id).is_none() {
            return false;
        }
        self.order.retain(|&existing| existing != id);
        true
    }

    pub(crate) fn len(&self) -> usize {
        self.observers.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub(crate) fn notify(&mut self, update: &ScoreUpdate) {
        for id in &self.order {
            if let Some(observer) = self.observers.get_mut(id) {
                observer.on_update(update);
            }
        }
    }
}
