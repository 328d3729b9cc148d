//! A single delivery and the constants of the ten-pin game.

use serde::{Deserialize, Serialize};

use super::error::{Result, ScoreError};

/// Pins in a full rack.
pub const PINS_PER_RACK: u8 = 10;

/// Frames in one game.
pub const FRAMES_PER_GAME: u8 = 10;

/// Most deliveries a single game can hold (nine spares plus three balls in the tenth).
pub const MAX_THROWS_PER_GAME: usize = 21;

/// Pins knocked down by one delivery, always in `0..=10`.
///
/// Construct through [`Throw::new`]; a `Throw` is immutable once recorded.
///
/// ```
/// use bowling_score::core::Throw;
///
/// let strike = Throw::new(10).unwrap();
/// assert!(strike.is_strike_ball());
/// assert!(Throw::new(11).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Throw(u8);

impl Throw {
    /// Validate a pin count reported by the pin-fall collaborator.
    pub fn new(pins: u8) -> Result<Self> {
        if pins > PINS_PER_RACK {
            return Err(ScoreError::OutOfRangeThrow {
                pins,
                max: PINS_PER_RACK,
            });
        }
        Ok(Self(pins))
    }

    /// Pins knocked down.
    #[must_use]
    pub const fn pins(self) -> u8 {
        self.0
    }

    /// All ten pins down. Only a strike when it is the first ball on a fresh rack.
    #[must_use]
    pub const fn is_strike_ball(self) -> bool {
        self.0 == PINS_PER_RACK
    }

    /// No pins down.
    #[must_use]
    pub const fn is_gutter(self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<u8> for Throw {
    type Error = ScoreError;

    fn try_from(pins: u8) -> Result<Self> {
        Self::new(pins)
    }
}

impl From<Throw> for u8 {
    fn from(throw: Throw) -> Self {
        throw.0
    }
}

impl std::fmt::Display for Throw {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
