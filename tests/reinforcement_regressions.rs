use magic_menace::{BoardState, Error, Outcome, ReinforcementEngine, StateSpace};

mod common;

use common::{random_games, state};

#[test]
fn win_adds_three_copies_along_the_path() {
    let mut space = StateSpace::new();
    ReinforcementEngine::new()
        .reinforce_code(&mut space, &[5, 2, 6, 4, 9], 1)
        .expect("well-formed win");

    let expected = [
        (BoardState::empty(), 5),
        (state(&[5, 2]), 6),
        (state(&[5, 2, 6, 4]), 9),
    ];
    for (key, square) in expected {
        let matchbox = space.matchbox(&key).expect("traversed state is a key");
        assert_eq!(matchbox.count(square), 3, "at {key}");
        assert_eq!(matchbox.total(), 3, "at {key}");
    }
    assert_eq!(space.learned().count(), 3);
}

#[test]
fn loss_on_empty_table_is_a_noop() {
    let mut space = StateSpace::new();
    ReinforcementEngine::new()
        .reinforce_code(&mut space, &[5, 2, 6, 4, 9], 2)
        .expect("loss underflow is not an error");

    for key in [BoardState::empty(), state(&[5, 2]), state(&[5, 2, 6, 4])] {
        assert!(space.matchbox(&key).unwrap().is_empty());
    }
    assert_eq!(space.total_beads(), 0);
}

#[test]
fn draw_adds_one_copy_at_each_depth() {
    let mut space = StateSpace::new();
    ReinforcementEngine::new()
        .reinforce_code(&mut space, &[2, 8, 9, 1, 4], 0)
        .expect("well-formed draw record");

    assert_eq!(space.matchbox(&BoardState::empty()).unwrap().count(2), 1);
    assert_eq!(space.matchbox(&state(&[2, 8])).unwrap().count(9), 1);
    assert_eq!(space.matchbox(&state(&[2, 8, 9, 1])).unwrap().count(4), 1);
    assert_eq!(space.total_beads(), 3);
}

#[test]
fn loss_removes_at_most_one_copy() {
    let mut space = StateSpace::new();
    let mut engine = ReinforcementEngine::new();
    engine
        .reinforce(&mut space, &[5, 2, 6, 4, 9], Outcome::PlayerOneWin)
        .unwrap();
    engine
        .reinforce(&mut space, &[5, 2, 6, 4, 9], Outcome::PlayerTwoWin)
        .unwrap();
    assert_eq!(space.matchbox(&BoardState::empty()).unwrap().count(5), 2);
    assert_eq!(space.total_beads(), 6);
}

#[test]
fn malformed_move_lists_are_rejected() {
    let mut space = StateSpace::new();
    let mut engine = ReinforcementEngine::new();
    for moves in [
        vec![5, 5],
        vec![0, 1],
        vec![10],
        vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 1],
    ] {
        assert!(
            matches!(
                engine.reinforce(&mut space, &moves, Outcome::Draw),
                Err(Error::InvalidMoveList { .. })
            ),
            "{moves:?}"
        );
    }
    assert_eq!(space.total_beads(), 0);
    assert_eq!(engine.stats().games, 0);
}

#[test]
fn play_past_a_completed_line_is_unknown_and_changes_nothing() {
    let mut space = StateSpace::new();
    let mut engine = ReinforcementEngine::new();
    // Player 1 completes 2 + 7 + 6 on the fifth move, then play continues
    let result = engine.reinforce(&mut space, &[2, 1, 7, 3, 6, 4, 5], Outcome::PlayerOneWin);
    assert!(matches!(result, Err(Error::UnknownBoardState { .. })));
    assert_eq!(space.total_beads(), 0);
}

#[test]
fn random_games_reinforce_without_error_and_counts_stay_consistent() {
    let mut space = StateSpace::new();
    let mut engine = ReinforcementEngine::new();
    let mut expected_added = 0u64;
    for (moves, outcome) in random_games(7, 2_000) {
        let decisions = moves.len().div_ceil(2) as u64;
        match outcome {
            Outcome::PlayerOneWin => expected_added += 3 * decisions,
            Outcome::Draw => expected_added += decisions,
            Outcome::PlayerTwoWin => {}
        }
        engine.reinforce(&mut space, &moves, outcome).unwrap();
    }
    let stats = engine.stats();
    assert_eq!(stats.games, 2_000);
    assert_eq!(stats.wins + stats.draws + stats.losses, 2_000);
    // Losses only ever remove, so the table holds at most what was added
    assert!(space.total_beads() <= expected_added);
}
