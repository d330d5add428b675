use crate::types::{Cell, PieceKind, Rotation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i32,
    pub y: i32,
}

/// Read-only copy of everything a presentation layer needs.
///
/// `cells` already contains the active piece's trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub columns: usize,
    pub rows: usize,
    pub cells: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub next: PieceKind,
    pub score: u32,
    pub lines: u32,
    pub game_over: bool,
}

impl BoardSnapshot {
    /// Cell at `(x, y)`, `None` when out of bounds
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        if x >= self.columns || y >= self.rows {
            return None;
        }
        Some(self.cells[y * self.columns + x])
    }

    pub fn playable(&self) -> bool {
        !self.game_over && self.active.is_some()
    }
}
