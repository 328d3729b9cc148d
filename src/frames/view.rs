//! Per-frame breakdown of a history for scoreboard rendering.
//!
//! Only the classification lives here (which deliveries belong to which
//! frame, and whether each is a strike, spare, gutter or plain count).
//! Layout and text are left to the presentation layer.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Throw, ThrowHistory, FRAMES_PER_GAME, PINS_PER_RACK};

/// Scoreboard symbol for one delivery.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThrowMark {
    /// Ten pins on a fresh rack.
    Strike,
    /// Cleared the rest of a rack.
    Spare,
    /// No pins.
    Gutter,
    /// Any other count.
    Pins(u8),
}

impl std::fmt::Display for ThrowMark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThrowMark::Strike => write!(f, "X"),
            ThrowMark::Spare => write!(f, "/"),
            ThrowMark::Gutter => write!(f, "-"),
            ThrowMark::Pins(n) => write!(f, "{n}"),
        }
    }
}

/// How a frame ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameKind {
    Strike,
    Spare,
    Open,
    /// More deliveries still belong to this frame.
    InProgress,
}

/// One started frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameView {
    /// Frame number, `1..=10`.
    pub number: u8,
    pub throws: SmallVec<[Throw; 3]>,
    pub marks: SmallVec<[ThrowMark; 3]>,
    pub kind: FrameKind,
}

/// Split a history into its started frames.
pub fn frames(history: &ThrowHistory) -> Vec<FrameView> {
    let mut views = Vec::with_capacity(usize::from(FRAMES_PER_GAME));
    let mut cursor = 0;

    for number in 1..=FRAMES_PER_GAME {
        let Some(first) = history.get(cursor) else { break };

        let throws: SmallVec<[Throw; 3]> = if number == FRAMES_PER_GAME {
            (cursor..cursor + 3).map_while(|i| history.get(i)).collect()
        } else if first.is_strike_ball() {
            smallvec::smallvec![first]
        } else {
            (cursor..cursor + 2).map_while(|i| history.get(i)).collect()
        };

        let kind = if number == FRAMES_PER_GAME {
            last_frame_kind(&throws)
        } else {
            frame_kind(&throws)
        };

        cursor += throws.len();
        views.push(FrameView {
            number,
            marks: marks(&throws),
            throws,
            kind,
        });
    }

    views
}

fn frame_kind(throws: &[Throw]) -> FrameKind {
    match throws {
        [first] if first.is_strike_ball() => FrameKind::Strike,
        [first, second] if first.pins() + second.pins() == PINS_PER_RACK => FrameKind::Spare,
        [_, _] => FrameKind::Open,
        _ => FrameKind::InProgress,
    }
}

fn last_frame_kind(throws: &[Throw]) -> FrameKind {
    match throws {
        [first, ..] if first.is_strike_ball() && throws.len() == 3 => FrameKind::Strike,
        [first, second, _] if first.pins() + second.pins() == PINS_PER_RACK => FrameKind::Spare,
        [first, second] if !first.is_strike_ball() && first.pins() + second.pins() < PINS_PER_RACK => {
            FrameKind::Open
        }
        [_, _, _] => FrameKind::Open,
        _ => FrameKind::InProgress,
    }
}

/// Mark each delivery against the rack it was bowled at. The rack is
/// re-set after a strike or spare, which only matters in frame 10. A count
/// larger than the pins standing is marked as a plain count, matching how
/// the frame is scored.
fn marks(throws: &[Throw]) -> SmallVec<[ThrowMark; 3]> {
    let mut standing = PINS_PER_RACK;
    let mut fresh = true;

    throws
        .iter()
        .map(|throw| {
            let pins = throw.pins();
            let mark = if fresh && pins == PINS_PER_RACK {
                ThrowMark::Strike
            } else if !fresh && pins > 0 && pins == standing {
                ThrowMark::Spare
            } else if pins == 0 {
                ThrowMark::Gutter
            } else {
                ThrowMark::Pins(pins)
            };

            if matches!(mark, ThrowMark::Strike | ThrowMark::Spare) {
                standing = PINS_PER_RACK;
                fresh = true;
            } else {
                standing = standing.saturating_sub(pins);
                fresh = false;
            }
            mark
        })
        .collect()
}
