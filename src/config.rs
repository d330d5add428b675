//! Runtime configuration read from `BLOCKDROP_*` environment variables.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::{BagGenerator, RandomGenerator, ShapeGenerator};
use crate::types::{DEFAULT_COLUMNS, DEFAULT_ROWS, GRAVITY_INTERVAL_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub columns: usize,
    pub rows: usize,
    pub gravity_ms: u32,
    pub seed: u32,
    pub player: String,
    pub scores_path: PathBuf,
    /// 7-bag generator instead of independent uniform draws
    pub bag: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any variable source. Missing or unparseable values
    /// fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let columns = lookup("BLOCKDROP_COLUMNS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_COLUMNS);
        let rows = lookup("BLOCKDROP_ROWS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_ROWS);
        let gravity_ms = lookup("BLOCKDROP_GRAVITY_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(GRAVITY_INTERVAL_MS);
        let seed = lookup("BLOCKDROP_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let non_blank = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let player = non_blank("BLOCKDROP_PLAYER")
            .or_else(|| non_blank("USER"))
            .unwrap_or_else(|| "player".to_string());

        let scores_path = blockdrop_scores::default_path(|key| lookup(key).map(PathBuf::from));

        let bag = lookup("BLOCKDROP_BAG")
            .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true"))
            .unwrap_or(false);

        Self {
            columns,
            rows,
            gravity_ms,
            seed,
            player,
            scores_path,
            bag,
        }
    }

    /// Shape source for the `game`-th game of a session (0-based). Every game
    /// gets its own seed so restarts do not replay the same pieces.
    pub fn generator(&self, game: u32) -> Box<dyn ShapeGenerator> {
        let seed = self.seed.wrapping_add(game);
        if self.bag {
            Box::new(BagGenerator::new(seed))
        } else {
            Box::new(RandomGenerator::new(seed))
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
