//! Cumulative score per frame, with strike and spare lookahead.
//!
//! A strike in frames 1-9 scores ten plus the next two deliveries, a spare
//! ten plus the next one. Frame 10 scores the sum of its own deliveries once
//! it is finished. A frame whose lookahead has not been bowled yet is
//! undetermined, and so is every frame after it.

use serde::{Deserialize, Serialize};

use crate::core::{ThrowHistory, FRAMES_PER_GAME, PINS_PER_RACK};

const FRAMES: usize = FRAMES_PER_GAME as usize;

/// Running totals for the ten frames. `None` means not yet determinable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CumulativeScores([Option<u32>; FRAMES]);

impl CumulativeScores {
    /// Running total through `frame` (1-based), if determined.
    #[must_use]
    pub fn get(&self, frame: u8) -> Option<u32> {
        let index = usize::from(frame).checked_sub(1)?;
        self.0.get(index).copied().flatten()
    }

    /// Iterate the ten entries in frame order.
    pub fn iter(&self) -> impl Iterator<Item = Option<u32>> + '_ {
        self.0.iter().copied()
    }

    /// Number of leading frames with a determined total.
    #[must_use]
    pub fn determined_frames(&self) -> usize {
        self.0.iter().take_while(|s| s.is_some()).count()
    }

    /// The game's final score, once frame 10 is determined.
    #[must_use]
    pub fn final_score(&self) -> Option<u32> {
        self.0[FRAMES - 1]
    }

    /// Latest determined total, or 0 before any frame is determined.
    #[must_use]
    pub fn running_total(&self) -> u32 {
        self.0.iter().rev().find_map(|s| *s).unwrap_or(0)
    }

    /// The entries as a plain array.
    #[must_use]
    pub fn to_options(&self) -> [Option<u32>; FRAMES] {
        self.0
    }
}

/// Compute cumulative scores for a history.
pub fn cumulative_scores(history: &ThrowHistory) -> CumulativeScores {
    let mut scores = [None; FRAMES];
    let mut running_total = 0u32;
    let mut cursor = 0usize;
    let pins = |i: usize| history.get(i).map(|t| u32::from(t.pins()));
    let rack = u32::from(PINS_PER_RACK);

    for (index, slot) in scores.iter_mut().enumerate() {
        let Some(first) = pins(cursor) else { break };

        let (frame_score, consumed) = if index == FRAMES - 1 {
            let bowled: Vec<u32> = (cursor..cursor + 3).map_while(pins).collect();
            let finished = match bowled.as_slice() {
                [_, _, _] => true,
                [a, b] => *a != rack && a + b < rack,
                _ => false,
            };
            (finished.then(|| bowled.iter().sum::<u32>()), bowled.len())
        } else if first == rack {
            let bonus = pins(cursor + 1).zip(pins(cursor + 2));
            (bonus.map(|(b1, b2)| rack + b1 + b2), 1)
        } else {
            match pins(cursor + 1) {
                Some(second) if first + second == rack => {
                    (pins(cursor + 2).map(|bonus| rack + bonus), 2)
                }
                Some(second) => (Some(first + second), 2),
                None => (None, 1),
            }
        };

        let Some(frame_score) = frame_score else { break };
        running_total += frame_score;
        *slot = Some(running_total);
        cursor += consumed;
    }

    CumulativeScores(scores)
}
