use blockdrop_types::HIGH_SCORE_SLOTS;
use serde::{Deserialize, Serialize};

/// Number of places kept in the ranking
pub const SLOTS: usize = HIGH_SCORE_SLOTS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
}

/// Ranking sorted by score, highest first, at most [`SLOTS`] entries.
///
/// Serialized as a plain JSON array of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighScores {
    entries: Vec<ScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from arbitrary entries; sorts and truncates.
    pub fn from_entries(entries: Vec<ScoreEntry>) -> Self {
        let mut table = Self { entries };
        table.normalize();
        table
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Lowest score that still earns a place, `None` while slots are free
    pub fn threshold(&self) -> Option<u32> {
        if self.entries.len() < SLOTS {
            None
        } else {
            self.entries.last().map(|entry| entry.score)
        }
    }

    /// Would `score` make the table?
    pub fn qualifies(&self, score: u32) -> bool {
        self.threshold().map_or(true, |lowest| score > lowest)
    }

    /// Insert a result. Returns its 1-based rank, or `None` if it did not
    /// make the table. Ties rank below existing entries.
    pub fn record(&mut self, name: impl Into<String>, score: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let pos = self
            .entries
            .iter()
            .position(|entry| entry.score < score)
            .unwrap_or(self.entries.len());
        self.entries.insert(
            pos,
            ScoreEntry {
                name: name.into(),
                score,
            },
        );
        self.entries.truncate(SLOTS);
        Some(pos + 1)
    }

    fn normalize(&mut self) {
        // Stable: equal scores keep their file order.
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(SLOTS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, score: u32) -> ScoreEntry {
        ScoreEntry {
            name: name.to_string(),
            score,
        }
    }

    #[test]
    fn record_keeps_descending_order() {
        let mut table = HighScores::new();
        assert_eq!(table.record("ann", 300), Some(1));
        assert_eq!(table.record("bob", 500), Some(1));
        assert_eq!(table.record("cy", 400), Some(2));
        let scores: Vec<u32> = table.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![500, 400, 300]);
    }

    #[test]
    fn table_is_capped_at_five() {
        let mut table = HighScores::new();
        for score in [10, 20, 30, 40, 50] {
            table.record("p", score);
        }
        assert_eq!(table.threshold(), Some(10));
        assert_eq!(table.record("low", 10), None);
        assert_eq!(table.record("mid", 35), Some(3));
        assert_eq!(table.len(), SLOTS);
        assert_eq!(table.entries().last(), Some(&entry("p", 20)));
    }

    #[test]
    fn ties_rank_after_existing_entries() {
        let mut table = HighScores::new();
        table.record("first", 100);
        assert_eq!(table.record("second", 100), Some(2));
        assert_eq!(table.entries()[0].name, "first");
    }

    #[test]
    fn from_entries_sorts_and_truncates() {
        let table = HighScores::from_entries(vec![
            entry("a", 1),
            entry("b", 6),
            entry("c", 3),
            entry("d", 5),
            entry("e", 2),
            entry("f", 4),
        ]);
        let names: Vec<&str> = table.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["b", "d", "f", "c", "e"]);
    }
}
