//! Saved game records.
//!
//! A record is just the pin counts in delivery order; everything else is
//! derived on replay.

use serde::{Deserialize, Serialize};

use crate::core::{Result, ThrowHistory};

/// The deliveries of one game, in order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub throws: Vec<u8>,
}

impl GameRecord {
    /// Create a record from raw pin counts. Nothing is validated until replay.
    #[must_use]
    pub fn new(throws: Vec<u8>) -> Self {
        Self { throws }
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a record produced by [`GameRecord::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl From<&ThrowHistory> for GameRecord {
    fn from(history: &ThrowHistory) -> Self {
        Self::new(history.pins())
    }
}
