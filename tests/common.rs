//! Shared helpers for the integration tests.

use magic_menace::{Game, Move, Outcome};
use rand::{SeedableRng, prelude::IndexedRandom, rngs::StdRng};

/// Play `count` uniformly random games to completion.
pub fn random_games(seed: u64, count: usize) -> Vec<(Vec<Move>, Outcome)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let mut game = Game::new();
            while !game.is_over() {
                let square = *game
                    .legal_moves()
                    .choose(&mut rng)
                    .expect("unfinished game has a free square");
                game.play(square).expect("free square is legal");
            }
            let outcome = game.outcome().expect("finished game has an outcome");
            (game.move_list().as_slice().to_vec(), outcome)
        })
        .collect()
}

pub fn state(moves: &[Move]) -> magic_menace::BoardState {
    magic_menace::BoardState::from_moves(moves).expect("valid history")
}
