use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::ScoreError;
use crate::table::HighScores;

/// Persistence for the ranking
pub trait ScoreStore {
    fn load(&self) -> Result<HighScores, ScoreError>;
    fn save(&mut self, scores: &HighScores) -> Result<(), ScoreError>;
}

/// Score table kept as a pretty-printed JSON array on disk
#[derive(Debug, Clone)]
pub struct JsonScoreStore {
    path: PathBuf,
}

impl JsonScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Resolve the score file location from an environment lookup
pub fn default_path(lookup: impl Fn(&str) -> Option<PathBuf>) -> PathBuf {
    if let Some(explicit) = lookup("BLOCKDROP_SCORES_PATH") {
        return explicit;
    }

    let mut path = lookup("XDG_DATA_HOME")
        .or_else(|| {
            lookup("HOME").map(|mut home| {
                home.push(".local");
                home.push("share");
                home
            })
        })
        .unwrap_or_else(|| PathBuf::from("."));
    path.push("blockdrop");
    path.push("highscores.json");
    path
}

impl ScoreStore for JsonScoreStore {
    fn load(&self) -> Result<HighScores, ScoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(HighScores::new()),
            Err(err) => return Err(err.into()),
        };
        let table: HighScores = serde_json::from_slice(&bytes)?;
        // Hand-edited files may be unsorted or too long.
        Ok(HighScores::from_entries(table.entries().to_vec()))
    }

    fn save(&mut self, scores: &HighScores) -> Result<(), ScoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string_pretty(scores)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

/// In-memory store for tests and headless runs
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    scores: HighScores,
    saves: usize,
}

impl MemoryScoreStore {
    pub fn new(scores: HighScores) -> Self {
        Self { scores, saves: 0 }
    }

    /// Number of successful `save` calls
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> Result<HighScores, ScoreError> {
        Ok(self.scores.clone())
    }

    fn save(&mut self, scores: &HighScores) -> Result<(), ScoreError> {
        self.scores = scores.clone();
        self.saves += 1;
        Ok(())
    }
}
