use std::path::Path;

use magic_menace::{
    OpponentKind, StateSpace, TrainingConfig, TrainingSession,
    adapters::{InMemoryRepository, MsgPackRepository},
    ports::{Observer, TableRepository},
    training::{GameRecord, TrainingResults},
};
use tempfile::TempDir;

#[derive(Default)]
struct RecordingObserver {
    started_with: Option<usize>,
    games_seen: usize,
    finished: bool,
}

impl Observer for RecordingObserver {
    fn on_training_start(&mut self, total_games: usize) -> magic_menace::Result<()> {
        self.started_with = Some(total_games);
        Ok(())
    }

    fn on_game_end(
        &mut self,
        game_num: usize,
        record: &GameRecord,
        results: &TrainingResults,
    ) -> magic_menace::Result<()> {
        assert_eq!(game_num, self.games_seen);
        assert_eq!(results.games, game_num + 1);
        assert!(!record.moves.is_empty());
        self.games_seen += 1;
        Ok(())
    }

    fn on_training_end(&mut self, _results: &TrainingResults) -> magic_menace::Result<()> {
        self.finished = true;
        Ok(())
    }
}

fn config(games: usize, seed: u64) -> TrainingConfig {
    TrainingConfig::new()
        .with_games(games)
        .with_seed(seed)
        .with_progress(false)
}

#[test]
fn results_tally_every_game() {
    let mut session = TrainingSession::new(config(300, 1)).unwrap();
    let results = session.train().unwrap().clone();
    assert_eq!(results.games, 300);
    assert_eq!(results.wins + results.draws + results.losses, 300);
    assert_eq!(results.win_rate_history.len(), 3);
    assert_eq!(session.engine().stats().games, 300);
    assert!(session.space().learned().count() > 0);
}

#[test]
fn observer_sees_every_event() {
    let mut session = TrainingSession::new(config(25, 2)).unwrap();
    let mut observer = RecordingObserver::default();
    session.train_with(&mut observer).unwrap();
    assert_eq!(observer.started_with, Some(25));
    assert_eq!(observer.games_seen, 25);
    assert!(observer.finished);
}

#[test]
fn same_seed_learns_the_same_table() {
    let mut a = TrainingSession::new(config(200, 42)).unwrap();
    let mut b = TrainingSession::new(config(200, 42)).unwrap();
    a.train().unwrap();
    b.train().unwrap();
    assert_eq!(a.results(), b.results());
    assert_eq!(a.space().snapshot(), b.space().snapshot());
}

#[test]
fn training_against_defensive_opponent_runs() {
    let cfg = config(100, 3).with_opponent(OpponentKind::Defensive);
    let mut session = TrainingSession::new(cfg).unwrap();
    let results = session.train().unwrap();
    assert_eq!(results.games, 100);
}

#[test]
fn trained_table_survives_msgpack_round_trip() {
    let mut session = TrainingSession::new(config(200, 4)).unwrap();
    session.train().unwrap();
    let space = session.into_space();

    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("trained.msgpack");
    let repo = MsgPackRepository::new();
    repo.save(&space, &path).unwrap();
    let loaded = repo.load(&path).unwrap();

    assert_eq!(loaded.len(), space.len());
    assert_eq!(loaded.total_beads(), space.total_beads());
    assert_eq!(loaded.snapshot(), space.snapshot());
}

#[test]
fn training_can_resume_from_a_saved_table() {
    let repo = InMemoryRepository::new();
    let path = Path::new("resume");

    let mut first = TrainingSession::new(config(100, 5)).unwrap();
    first.train().unwrap();
    repo.save(first.space(), path).unwrap();

    let restored: StateSpace = repo.load(path).unwrap();
    assert_eq!(restored.snapshot(), first.space().snapshot());
    let mut second = TrainingSession::with_space(config(100, 6), restored).unwrap();
    second.train().unwrap();

    assert_eq!(second.results().games, 100);
    assert_eq!(second.engine().stats().games, 100);
}
