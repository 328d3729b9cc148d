//! Frame walker: where in the game a throw history has reached.
//!
//! Frames 1-9 consume one delivery for a strike and two otherwise. Frame 10
//! holds two deliveries, or three when its first two contain a strike or
//! a spare.

use serde::{Deserialize, Serialize};

use crate::core::{ThrowHistory, FRAMES_PER_GAME, PINS_PER_RACK};

/// The frame/throw boundary reached by a history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Current frame, `1..=10`.
    pub frame: u8,

    /// Deliveries already recorded in the current frame.
    pub throws_in_frame: u8,

    /// Index into the history of the current frame's first delivery.
    pub frame_start: usize,

    /// Every frame is finished; the game is over.
    pub complete: bool,
}

impl Position {
    fn open(frame: u8, throws_in_frame: u8, frame_start: usize) -> Self {
        Self {
            frame,
            throws_in_frame,
            frame_start,
            complete: false,
        }
    }

    /// True while the tenth frame is being bowled or is done.
    #[must_use]
    pub fn in_last_frame(&self) -> bool {
        self.frame == FRAMES_PER_GAME
    }
}

/// Locate the current frame and throw for a history.
pub fn locate(history: &ThrowHistory) -> Position {
    let mut cursor = 0;

    for frame in 1..FRAMES_PER_GAME {
        let Some(first) = history.get(cursor) else {
            return Position::open(frame, 0, cursor);
        };

        if first.is_strike_ball() {
            cursor += 1;
            continue;
        }

        if history.get(cursor + 1).is_none() {
            return Position::open(frame, 1, cursor);
        }
        cursor += 2;
    }

    let recorded = history.len().saturating_sub(cursor).min(3) as u8;
    let complete = match recorded {
        0 | 1 => false,
        2 => match (history.get(cursor), history.get(cursor + 1)) {
            (Some(first), Some(second)) => {
                !first.is_strike_ball() && first.pins() + second.pins() < PINS_PER_RACK
            }
            _ => false,
        },
        _ => true,
    };

    Position {
        frame: FRAMES_PER_GAME,
        throws_in_frame: recorded,
        frame_start: cursor,
        complete,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(pins: &[u8]) -> Position {
        locate(&ThrowHistory::try_from(pins).unwrap())
    }

    #[test]
    fn test_empty_history() {
        let pos = at(&[]);
        assert_eq!((pos.frame, pos.throws_in_frame, pos.frame_start), (1, 0, 0));
        assert!(!pos.complete);
    }

    #[test]
    fn test_mid_frame() {
        let pos = at(&[3]);
        assert_eq!((pos.frame, pos.throws_in_frame), (1, 1));
    }

    #[test]
    fn test_strike_advances_frame() {
        let pos = at(&[10]);
        assert_eq!((pos.frame, pos.throws_in_frame, pos.frame_start), (2, 0, 1));
    }

    #[test]
    fn test_second_ball_ten_is_not_a_strike() {
        // 0 then 10 is a spare: two deliveries consumed.
        let pos = at(&[0, 10, 4]);
        assert_eq!((pos.frame, pos.throws_in_frame, pos.frame_start), (2, 1, 2));
    }

    #[test]
    fn test_reaches_tenth_frame() {
        let pos = at(&[0; 18]);
        assert_eq!((pos.frame, pos.throws_in_frame, pos.frame_start), (10, 0, 18));
        assert!(pos.in_last_frame());
        assert!(!pos.complete);
    }

    #[test]
    fn test_tenth_frame_open_completes() {
        let mut pins = vec![0; 18];
        pins.extend([4, 5]);
        let pos = at(&pins);
        assert_eq!(pos.throws_in_frame, 2);
        assert!(pos.complete);
    }

    #[test]
    fn test_tenth_frame_spare_continues() {
        let mut pins = vec![0; 18];
        pins.extend([4, 6]);
        assert!(!at(&pins).complete);

        pins.push(3);
        let pos = at(&pins);
        assert_eq!(pos.throws_in_frame, 3);
        assert!(pos.complete);
    }

    #[test]
    fn test_tenth_frame_strike_continues() {
        let mut pins = vec![0; 18];
        pins.extend([10, 2]);
        assert!(!at(&pins).complete);
    }

    #[test]
    fn test_perfect_game() {
        assert!(!at(&[10; 11]).complete);
        let pos = at(&[10; 12]);
        assert_eq!((pos.frame, pos.throws_in_frame, pos.frame_start), (10, 3, 9));
        assert!(pos.complete);
    }
}
