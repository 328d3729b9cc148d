//! Append-only throw history.
//!
//! The history is the single source of truth for a game: frame position,
//! game-over state, pin actions and scores are all derived from it.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::throw::Throw;

/// Ordered, append-only sequence of deliveries for one game.
///
/// Backed by an `im` persistent vector, so cloning is O(1) and observers can
/// keep snapshots without copying. Only the engine appends or clears.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThrowHistory {
    throws: Vector<Throw>,
}

impl ThrowHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded deliveries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.throws.len()
    }

    /// True before the first delivery.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.throws.is_empty()
    }

    /// The delivery at `index`, if recorded.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Throw> {
        self.throws.get(index).copied()
    }

    /// The most recent delivery.
    #[must_use]
    pub fn last(&self) -> Option<Throw> {
        self.throws.last().copied()
    }

    /// Iterate deliveries in order.
    pub fn iter(&self) -> impl Iterator<Item = Throw> + '_ {
        self.throws.iter().copied()
    }

    /// Raw pin counts, in order.
    #[must_use]
    pub fn pins(&self) -> Vec<u8> {
        self.iter().map(Throw::pins).collect()
    }

    pub(crate) fn push(&mut self, throw: Throw) {
        self.throws.push_back(throw);
    }

    pub(crate) fn clear(&mut self) {
        self.throws.clear();
    }
}

impl FromIterator<Throw> for ThrowHistory {
    fn from_iter<I: IntoIterator<Item = Throw>>(iter: I) -> Self {
        Self {
            throws: iter.into_iter().collect(),
        }
    }
}

impl TryFrom<&[u8]> for ThrowHistory {
    type Error = super::error::ScoreError;

    /// Build a history from raw pin counts, checking only the `0..=10` range.
    ///
    /// Used to evaluate arbitrary sequences with the stateless functions; the
    /// engine's own history only grows through `ScoreEngine::record_throw`.
    fn try_from(pins: &[u8]) -> Result<Self, Self::Error> {
        pins.iter().map(|&p| Throw::new(p)).collect()
    }
}
