//! High score persistence tests

use std::fs;
use std::path::PathBuf;
use std::process;
use std::sync::atomic::{AtomicUsize, Ordering};

use blockdrop::scores::{HighScores, JsonScoreStore, ScoreError, ScoreStore};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Unique scratch directory under the system temp dir
fn scratch_dir(name: &str) -> PathBuf {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    let dir = std::env::temp_dir().join(format!("blockdrop-{name}-{}-{n}", process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn test_missing_file_loads_empty_table() {
    let dir = scratch_dir("missing");
    let store = JsonScoreStore::new(dir.join("highscores.json"));
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_save_creates_directories_and_reloads() {
    let dir = scratch_dir("save");
    let path = dir.join("nested").join("highscores.json");
    let mut store = JsonScoreStore::new(path.clone());

    let mut table = HighScores::new();
    table.record("ann", 1200);
    table.record("bob", 900);
    store.save(&table).unwrap();

    assert!(path.exists());
    assert_eq!(store.load().unwrap(), table);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_file_is_a_json_array_of_entries() {
    let dir = scratch_dir("format");
    let path = dir.join("highscores.json");
    let mut store = JsonScoreStore::new(path.clone());

    let mut table = HighScores::new();
    table.record("ann", 42);
    store.save(&table).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value, serde_json::json!([{ "name": "ann", "score": 42 }]));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_hand_edited_file_is_sorted_and_truncated() {
    let dir = scratch_dir("edited");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("highscores.json");
    fs::write(
        &path,
        r#"[
            {"name": "a", "score": 10},
            {"name": "b", "score": 60},
            {"name": "c", "score": 30},
            {"name": "d", "score": 50},
            {"name": "e", "score": 20},
            {"name": "f", "score": 40}
        ]"#,
    )
    .unwrap();

    let table = JsonScoreStore::new(path).load().unwrap();
    let scores: Vec<u32> = table.entries().iter().map(|e| e.score).collect();
    assert_eq!(scores, vec![60, 50, 40, 30, 20]);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = scratch_dir("malformed");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("highscores.json");
    fs::write(&path, "{ not json").unwrap();

    let err = JsonScoreStore::new(path).load().unwrap_err();
    assert!(matches!(err, ScoreError::Json(_)), "{err}");

    let _ = fs::remove_dir_all(&dir);
}
