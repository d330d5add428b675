//! High score table and its persistence
//!
//! [`HighScores`] is a five-place ranking. [`ScoreStore`] abstracts where it
//! lives: [`JsonScoreStore`] keeps it in a JSON file, [`MemoryScoreStore`]
//! keeps it in memory.
//!
//! ```
//! use blockdrop_scores::{HighScores, MemoryScoreStore, ScoreStore};
//!
//! let mut store = MemoryScoreStore::default();
//! let mut table = store.load().unwrap();
//! assert_eq!(table.record("ann", 1200), Some(1));
//! store.save(&table).unwrap();
//! ```

pub mod error;
pub mod store;
pub mod table;

pub use error::ScoreError;
pub use store::{default_path, JsonScoreStore, MemoryScoreStore, ScoreStore};
pub use table::{HighScores, ScoreEntry, SLOTS};
