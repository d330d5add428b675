//! Session tests - restarts and score recording against an in-memory store

use std::path::PathBuf;

use blockdrop::scores::{HighScores, MemoryScoreStore, ScoreStore};
use blockdrop::types::GameAction;
use blockdrop::{GameConfig, Session};

fn config(player: &str) -> GameConfig {
    GameConfig {
        columns: 10,
        rows: 20,
        gravity_ms: 500,
        seed: 7,
        player: player.to_string(),
        scores_path: PathBuf::from("unused.json"),
        bag: true,
    }
}

fn play_until_over(session: &mut Session<MemoryScoreStore>) {
    let mut guard = 0;
    while !session.game().is_game_over() {
        session.apply(GameAction::HardDrop).unwrap();
        guard += 1;
        assert!(guard < 1000, "game never ended");
    }
}

#[test]
fn test_game_over_records_score_once() {
    let mut session = Session::new(config("ann"), MemoryScoreStore::default()).unwrap();
    play_until_over(&mut session);

    let score = session.game().score();
    assert!(score > 0);
    assert_eq!(session.ranking().entries().len(), 1);
    assert_eq!(session.ranking().entries()[0].name, "ann");
    assert_eq!(session.ranking().entries()[0].score, score);
    assert_eq!(session.store().saves(), 1);

    // Further input and an explicit finish do not record again.
    session.apply(GameAction::HardDrop).unwrap();
    session.tick(10_000);
    session.finish();
    assert_eq!(session.ranking().len(), 1);
    assert_eq!(session.store().saves(), 1);

    let log = session.drain_log();
    assert!(log.iter().any(|l| l.starts_with("[Game] game 1 ended")));
    assert!(log.iter().any(|l| l.starts_with("[Scores] ann placed #1")));
    assert!(session.drain_log().is_empty());
}

#[test]
fn test_restart_records_and_starts_fresh() {
    let mut session = Session::new(config("bob"), MemoryScoreStore::default()).unwrap();
    session.apply(GameAction::HardDrop).unwrap();
    assert!(session.game().score() > 0);

    session.apply(GameAction::Restart).unwrap();
    assert_eq!(session.games_played(), 2);
    assert_eq!(session.game().score(), 0);
    assert!(!session.game().is_game_over());
    assert_eq!(session.ranking().len(), 1);
    assert_eq!(session.store().load().unwrap(), *session.ranking());
}

#[test]
fn test_scoreless_game_is_not_recorded() {
    let mut session = Session::new(config("cy"), MemoryScoreStore::default()).unwrap();
    session.finish();
    assert!(session.ranking().is_empty());
    assert_eq!(session.store().saves(), 0);
}

#[test]
fn test_existing_ranking_is_kept() {
    let mut existing = HighScores::new();
    existing.record("zed", 1_000_000);
    let store = MemoryScoreStore::new(existing);

    let mut session = Session::new(config("ann"), store).unwrap();
    play_until_over(&mut session);
    let entries = session.ranking().entries();
    assert_eq!(entries[0].name, "zed");
    assert_eq!(entries[1].name, "ann");
}

#[test]
fn test_invalid_dimensions_are_rejected() {
    let mut bad = config("ann");
    bad.rows = 0;
    assert!(Session::new(bad, MemoryScoreStore::default()).is_err());
}
