//! Game status: is the game over, and what should the pin rack do next.
//!
//! This is the only place pin-setting behavior is driven from game logic.

use serde::{Deserialize, Serialize};

use crate::core::{ThrowHistory, PINS_PER_RACK};
use crate::frames::{locate, Position};

/// Instruction for the pin-rack collaborator after a delivery.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PinAction {
    /// Nothing to do (the game is over).
    #[default]
    None,
    /// Re-rack all ten pins.
    ResetAll,
    /// Clear only the pins knocked down by the last delivery.
    RemoveFallen,
}

/// Game-over flag plus the next pin action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameStatus {
    pub is_game_over: bool,
    pub next_pin_action: PinAction,
}

impl GameStatus {
    const OVER: Self = Self {
        is_game_over: true,
        next_pin_action: PinAction::None,
    };

    const fn next(action: PinAction) -> Self {
        Self {
            is_game_over: false,
            next_pin_action: action,
        }
    }
}

/// Compute the status of a history.
pub fn check_status(history: &ThrowHistory) -> GameStatus {
    status_at(history, &locate(history))
}

/// Status for a position already located in `history`.
pub(crate) fn status_at(history: &ThrowHistory, pos: &Position) -> GameStatus {
    if pos.complete {
        return GameStatus::OVER;
    }

    let first = history.get(pos.frame_start);
    let second = history.get(pos.frame_start + 1);

    match (pos.in_last_frame(), pos.throws_in_frame) {
        (_, 0) => GameStatus::next(PinAction::ResetAll),
        // A strike in frames 1-9 has already advanced the walker to a fresh frame.
        (false, 1) => GameStatus::next(PinAction::RemoveFallen),
        (true, 1) => match first {
            Some(t) if t.is_strike_ball() => GameStatus::next(PinAction::ResetAll),
            _ => GameStatus::next(PinAction::RemoveFallen),
        },
        (true, 2) => match (first, second) {
            (Some(a), Some(b)) if a.pins() + b.pins() == PINS_PER_RACK => {
                GameStatus::next(PinAction::ResetAll)
            }
            (Some(a), Some(b)) if a.is_strike_ball() && b.is_strike_ball() => {
                GameStatus::next(PinAction::ResetAll)
            }
            _ => GameStatus::next(PinAction::RemoveFallen),
        },
        _ => GameStatus::OVER,
    }
}

/// Pins standing for the next delivery: a full rack after `ResetAll`, the
/// leftovers of the last delivery after `RemoveFallen`, none once the game
/// is over.
pub fn standing_pins(history: &ThrowHistory) -> u8 {
    standing_after(history, check_status(history))
}

pub(crate) fn standing_after(history: &ThrowHistory, status: GameStatus) -> u8 {
    match status.next_pin_action {
        PinAction::None => 0,
        PinAction::ResetAll => PINS_PER_RACK,
        PinAction::RemoveFallen => {
            let last = history.last().map_or(0, |t| t.pins());
            PINS_PER_RACK.saturating_sub(last)
        }
    }
}
