//! Integration tests for the session lifecycle

use colour_clicker::core::{
    DifficultyCurve, GameSession, RandomSource, ScriptedRandom, SessionSignal,
};
use colour_clicker::types::{
    GameAction, Outcome, Phase, Rgba, SelectionFault, SessionError, MAX_ROUND,
};

fn signal_names<R: RandomSource>(session: &mut GameSession<R>) -> Vec<&'static str> {
    session.take_signals().iter().map(|s| s.name()).collect()
}

#[test]
fn test_full_victory_playthrough() {
    let mut session = GameSession::seeded(12345);
    let mut snap = session.start().unwrap();
    session.take_signals();

    let mut last_round = None;
    for round in 1..=MAX_ROUND {
        assert_eq!(snap.round_number, round);
        assert_eq!(snap.phase, Phase::Playing);
        assert!(snap.divergent_index < snap.tile_count);
        assert_eq!(snap.tile_count, (snap.grid_size as usize).pow(2));

        last_round = Some(snap.clone());
        session.tick();
        snap = session.select(snap.divergent_index).unwrap();
    }

    // The winning pick does not roll a new round.
    let last_round = last_round.unwrap();
    assert_eq!(last_round.round_number, MAX_ROUND);
    assert_eq!(snap.grid_size, 6);
    assert_eq!(snap.grid_size, last_round.grid_size);
    assert_eq!(snap.tile_count, last_round.tile_count);
    assert_eq!(snap.base_colour, last_round.base_colour);
    assert_eq!(snap.divergent_colour, last_round.divergent_colour);
    assert_eq!(snap.divergent_index, last_round.divergent_index);

    assert_eq!(snap.phase, Phase::Finished);
    assert_eq!(snap.outcome, Some(Outcome::Victory));
    assert_eq!(snap.round_number, MAX_ROUND + 1);
    assert_eq!(snap.rounds_cleared(), MAX_ROUND);
    assert!(snap.failure_history.is_empty());
    assert!((snap.elapsed_time - 3.0).abs() < 1e-9);
    assert_eq!(
        signal_names(&mut session),
        vec!["correct_guess", "session_finish"]
    );

    // Further picks and ticks do nothing.
    assert!(matches!(
        session.select(0),
        Err(SessionError::InvalidSelection(SelectionFault::NotPlaying(
            Phase::Finished
        )))
    ));
    assert_eq!(session.tick().elapsed_time, snap.elapsed_time);
}

#[test]
fn test_correct_pick_then_wrong_pick() {
    let mut session = GameSession::seeded(12345);
    let snap = session.start().unwrap();
    assert_eq!(snap.round_number, 1);
    assert_eq!(snap.grid_size, 2);
    assert_eq!(snap.tile_count, 4);
    assert_eq!(snap.phase, Phase::Playing);

    let snap = session.select(snap.divergent_index).unwrap();
    assert_eq!(snap.round_number, 2);
    assert_eq!(snap.grid_size, 2);
    assert_eq!(snap.phase, Phase::Playing);

    let snap = session
        .select((snap.divergent_index + 1) % snap.tile_count)
        .unwrap();
    assert_eq!(snap.phase, Phase::Finished);
    assert_eq!(snap.failure_history.len(), 1);
}

#[test]
fn test_defeat_on_round_three() {
    let mut session = GameSession::seeded(7);
    let snap = session.start().unwrap();
    let snap = session.select(snap.divergent_index).unwrap();
    let snap = session.select(snap.divergent_index).unwrap();
    assert_eq!(snap.round_number, 3);

    let base = snap.base_colour;
    let wrong = (snap.divergent_index + 1) % snap.tile_count;
    let snap = session.select(wrong).unwrap();

    assert_eq!(snap.phase, Phase::Finished);
    assert_eq!(snap.outcome, Some(Outcome::Defeat));
    assert_eq!(snap.round_number, 3);
    assert_eq!(snap.rounds_cleared(), 2);
    assert_eq!(snap.failure_history, vec![base]);
    assert_eq!(
        signal_names(&mut session),
        vec!["incorrect_guess", "session_finish"]
    );
}

#[test]
fn test_restart_after_finish() {
    let mut session = GameSession::seeded(99);
    let snap = session.start().unwrap();
    session.select((snap.divergent_index + 1) % 4).unwrap();
    assert_eq!(session.phase(), Phase::Finished);

    let snap = session.apply_action(GameAction::Start).unwrap();
    assert_eq!(snap.session_number, 2);
    assert_eq!(snap.round_number, 1);
    assert_eq!(snap.elapsed_time, 0.0);
    assert!(snap.failure_history.is_empty());
    assert_eq!(snap.outcome, None);
    assert_eq!(signal_names(&mut session), vec!["session_start"]);
}

#[test]
fn test_pause_freezes_time_and_round() {
    let mut session = GameSession::seeded(1);
    let start = session.start().unwrap();
    session.take_signals();
    for _ in 0..3 {
        session.tick();
    }
    let paused = session.pause().unwrap();
    for _ in 0..10 {
        session.tick();
    }
    let resumed = session.resume().unwrap();

    assert!((paused.elapsed_time - 0.3).abs() < 1e-12);
    assert_eq!(resumed.elapsed_time, paused.elapsed_time);
    assert_eq!(resumed.divergent_index, start.divergent_index);
    assert_eq!(resumed.base_colour, start.base_colour);
    // Pause and resume emit nothing.
    assert!(signal_names(&mut session).is_empty());
}

#[test]
fn test_scripted_round_parameters() {
    // r, g, b, coin, index
    let rng = ScriptedRandom::new(vec![0.5, 0.25, 0.0, 0.9, 0.75]);
    let mut session = GameSession::with_rng(rng);
    let snap = session.start().unwrap();

    assert_eq!(snap.grid_size, 2);
    assert_eq!(snap.base_colour, Rgba::opaque(100, 55, 10));
    assert_eq!(snap.divergent_colour.r, 100);
    assert!((snap.divergent_colour.opacity() - 0.6).abs() < 1e-12);
    assert_eq!(snap.divergent_index, 3);
    assert_eq!(snap.colour_at(3), Some(snap.divergent_colour));
    assert_eq!(snap.colour_at(0), Some(snap.base_colour));
    assert_eq!(snap.colour_at(4), None);
}

#[test]
fn test_scripted_lighter_divergence_swaps_colours() {
    let rng = ScriptedRandom::new(vec![0.5, 0.25, 0.0, 0.1, 0.0]);
    let mut session = GameSession::with_rng(rng);
    let snap = session.start().unwrap();

    assert!(snap.divergent_colour.is_opaque());
    assert!((snap.base_colour.opacity() - 0.6).abs() < 1e-12);
    assert_eq!(snap.divergent_index, 0);
}

#[test]
fn test_short_curve_wins_early() {
    let curve = DifficultyCurve::standard().with_max_round(2).unwrap();
    let mut session = GameSession::with_curve(ScriptedRandom::new(vec![0.3]), curve);
    let snap = session.start().unwrap();
    let snap = session.select(snap.divergent_index).unwrap();
    assert_eq!(snap.phase, Phase::Playing);
    let snap = session.select(snap.divergent_index).unwrap();
    assert_eq!(snap.outcome, Some(Outcome::Victory));
    assert_eq!(snap.rounds_cleared(), 2);
}

#[test]
fn test_boxed_random_source_drives_session() {
    let rng: Box<dyn RandomSource> = Box::new(ScriptedRandom::new(vec![0.0]));
    let mut session = GameSession::with_rng(rng);
    let snap = session.start().unwrap();
    assert_eq!((snap.base_colour.r, snap.base_colour.g, snap.base_colour.b), (10, 10, 10));
    assert!((snap.base_colour.opacity() - 0.6).abs() < 1e-12);
    assert_eq!(snap.divergent_colour, Rgba::opaque(10, 10, 10));
    assert_eq!(snap.divergent_index, 0);
}

#[test]
fn test_signal_snapshots_match_return_value() {
    let mut session = GameSession::seeded(5);
    let snap = session.start().unwrap();
    let signals = session.take_signals();
    assert_eq!(signals.len(), 1);
    assert!(matches!(&signals[0], SessionSignal::SessionStart(s) if *s == snap));

    let next = session.select(snap.divergent_index).unwrap();
    let signals = session.take_signals();
    assert!(matches!(&signals[0], SessionSignal::CorrectGuess(s) if *s == next));
}
