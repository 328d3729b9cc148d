//! Scoring integration tests.
//!
//! Whole-game scenarios driven through the engine facade, checked against
//! the stateless scoring functions.

use bowling_score::core::ThrowHistory;
use bowling_score::scoring::{check_status, cumulative_scores};
use bowling_score::frames::FrameKind;
use bowling_score::{EngineConfig, GameStatus, PinAction, ScoreEngine};

fn play(pins: &[u8]) -> ScoreEngine {
    let mut engine = ScoreEngine::new();
    for &p in pins {
        engine
            .record_throw(p)
            .unwrap_or_else(|e| panic!("throw {p} rejected: {e}"));
    }
    engine
}

fn game_over() -> GameStatus {
    GameStatus {
        is_game_over: true,
        next_pin_action: PinAction::None,
    }
}

// =============================================================================
// Whole Games
// =============================================================================

/// Twenty gutter balls score zero and end the game on the twentieth.
#[test]
fn test_gutter_game() {
    let mut engine = ScoreEngine::new();
    for i in 1..=20 {
        let status = engine.record_throw(0).unwrap();
        assert_eq!(status.is_game_over, i == 20, "after throw {i}");
    }

    assert_eq!(engine.cumulative_scores().final_score(), Some(0));
    assert_eq!(engine.status(), game_over());
}

/// Twelve strikes score 300; each strike waits two balls for its total.
#[test]
fn test_perfect_game() {
    let mut engine = ScoreEngine::new();
    for i in 1..=12usize {
        assert!(!engine.is_game_over());
        let status = engine.record_throw(10).unwrap();
        assert_eq!(status.is_game_over, i == 12);

        let expected = if i == 12 { 10 } else { i.saturating_sub(2).min(9) };
        assert_eq!(
            engine.cumulative_scores().determined_frames(),
            expected,
            "after strike {i}"
        );
        if i < 12 {
            assert_eq!(engine.cumulative_scores().final_score(), None);
        }
    }

    assert_eq!(engine.cumulative_scores().final_score(), Some(300));
}

/// All spares of 5 with a final 5: 150.
#[test]
fn test_all_fives() {
    let engine = play(&[5; 21]);
    assert!(engine.is_game_over());
    assert_eq!(engine.cumulative_scores().final_score(), Some(150));
}

/// A mixed, well-known game.
#[test]
fn test_mixed_game() {
    let engine = play(&[10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1]);

    assert!(engine.is_game_over());
    assert_eq!(
        engine.cumulative_scores().to_options(),
        [20, 39, 48, 66, 74, 84, 90, 120, 148, 167].map(Some)
    );
}

// =============================================================================
// Lookahead
// =============================================================================

/// Spare then 3: frame 1 is 13 as soon as the third ball lands.
#[test]
fn test_spare_lookahead() {
    let mut engine = play(&[5, 5]);
    assert_eq!(engine.cumulative_scores().get(1), None);

    engine.record_throw(3).unwrap();
    assert_eq!(engine.cumulative_scores().get(1), Some(13));
}

/// A strike waits for two more balls, even across another strike.
#[test]
fn test_strike_lookahead() {
    let engine = play(&[10, 10]);
    assert_eq!(engine.cumulative_scores().determined_frames(), 0);

    let engine = play(&[10, 10, 4]);
    let scores = engine.cumulative_scores();
    assert_eq!(scores.get(1), Some(24));
    assert_eq!(scores.get(2), None);

    let engine = play(&[10, 10, 4, 2]);
    let scores = engine.cumulative_scores();
    assert_eq!(scores.get(2), Some(40));
    assert_eq!(scores.get(3), Some(46));
}

// =============================================================================
// Tenth Frame
// =============================================================================

/// Open tenth frame ends the game on its second ball.
#[test]
fn test_tenth_frame_open() {
    let mut pins = vec![0; 18];
    pins.extend([4, 5]);
    let engine = play(&pins);

    assert_eq!(engine.status(), game_over());
    assert_eq!(engine.cumulative_scores().final_score(), Some(9));
}

/// Strike, strike, 7 in the tenth: 27 on top of the previous total.
#[test]
fn test_tenth_frame_strike_strike_seven() {
    let mut pins = vec![3, 4];
    pins.extend([0; 16]);
    pins.extend([10, 10, 7]);
    let engine = play(&pins);

    assert!(engine.is_game_over());
    assert_eq!(engine.cumulative_scores().get(9), Some(7));
    assert_eq!(engine.cumulative_scores().final_score(), Some(34));
}

/// Pin actions through a tenth frame that opens with a strike.
#[test]
fn test_tenth_frame_pin_actions() {
    let mut engine = play(&[0; 18]);
    assert_eq!(engine.status().next_pin_action, PinAction::ResetAll);

    assert_eq!(engine.record_throw(10).unwrap().next_pin_action, PinAction::ResetAll);
    assert_eq!(engine.record_throw(6).unwrap().next_pin_action, PinAction::RemoveFallen);
    assert_eq!(engine.standing_pins(), 4);
    assert_eq!(engine.record_throw(4).unwrap(), game_over());
    assert_eq!(engine.cumulative_scores().final_score(), Some(20));
}

/// Spare in the tenth re-racks for the bonus ball.
#[test]
fn test_tenth_frame_spare_bonus() {
    let mut engine = play(&[0; 18]);
    engine.record_throw(3).unwrap();
    assert_eq!(engine.record_throw(7).unwrap().next_pin_action, PinAction::ResetAll);
    assert_eq!(engine.cumulative_scores().final_score(), None);

    engine.record_throw(10).unwrap();
    assert_eq!(engine.cumulative_scores().final_score(), Some(20));
}

/// First two tenth-frame balls summing past ten without a strike keep the
/// frame open for a third ball when counts are trusted.
#[test]
fn test_tenth_frame_overcount() {
    let mut engine = play(&[0; 18]);
    engine.record_throw(3).unwrap();
    let status = engine.record_throw(9).unwrap();

    let position = engine.position();
    assert_eq!((position.frame, position.throws_in_frame), (10, 2));
    assert!(!position.complete);
    assert_eq!(status.next_pin_action, PinAction::RemoveFallen);
    assert!(!status.is_game_over);
    assert_eq!(engine.standing_pins(), 1);
    assert_eq!(engine.cumulative_scores().get(9), Some(0));
    assert_eq!(engine.cumulative_scores().final_score(), None);

    assert_eq!(engine.record_throw(1).unwrap(), game_over());
    assert_eq!(engine.cumulative_scores().final_score(), Some(13));
}

/// An overcount in frames 1-9 scores as an open frame and is marked as one.
#[test]
fn test_overcount_scores_open() {
    let engine = play(&[7, 5, 2]);
    assert_eq!(engine.cumulative_scores().get(1), Some(12));
    assert_eq!(engine.cumulative_scores().get(2), None);

    let frame = &engine.frames()[0];
    let marks: String = frame.marks.iter().map(ToString::to_string).collect();
    assert_eq!(marks, "75");
    assert_eq!(frame.kind, FrameKind::Open);
}

/// The same overcount is rejected when the standing-pins check is on.
#[test]
fn test_overcount_rejected_when_strict() {
    let mut engine = ScoreEngine::with_config(EngineConfig::new().with_standing_pins_check(true));
    engine.record_throw(7).unwrap();
    assert!(engine.record_throw(5).is_err());
    assert_eq!(engine.history().len(), 1);
}

// =============================================================================
// Stateless Agreement
// =============================================================================

/// The engine's answers equal the stateless functions on its own history.
#[test]
fn test_engine_matches_stateless_functions() {
    let pins = [9, 1, 10, 0, 0, 7, 2, 10, 10, 5, 5, 3, 6, 10, 9, 1, 10];
    let mut engine = ScoreEngine::new();

    for &p in &pins {
        engine.record_throw(p).unwrap();
        let history = engine.history();
        assert_eq!(engine.status(), check_status(history));
        assert_eq!(engine.cumulative_scores(), cumulative_scores(history));
    }

    let rebuilt = ThrowHistory::try_from(&pins[..]).unwrap();
    assert_eq!(engine.history(), &rebuilt);
}

/// Queries have no side effects.
#[test]
fn test_queries_are_idempotent() {
    let engine = play(&[10, 3]);
    assert_eq!(engine.status(), engine.status());
    assert_eq!(engine.check_status(), engine.status());
    assert_eq!(engine.cumulative_scores(), engine.cumulative_scores());
    assert_eq!(engine.history().len(), 2);
}
