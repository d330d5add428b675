//! Grid module - the cell matrix under the board
//!
//! Cells are stored in one flat row-major vector (`y * columns + x`).
//! Row 0 is the top of the playfield. The dimensions are fixed at
//! construction; clearing a row shifts everything above it down and leaves a
//! fresh empty row at the top, so the row count never changes.

use crate::error::BoardError;
use crate::types::Cell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    columns: usize,
    rows: usize,
    /// Flat array of cells, row-major order (y * columns + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(columns: usize, rows: usize) -> Result<Self, BoardError> {
        if columns == 0 || rows == 0 {
            return Err(BoardError::InvalidDimensions { columns, rows });
        }
        Ok(Self {
            columns,
            rows,
            cells: vec![None; columns * rows],
        })
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.columns || y as usize >= self.rows {
            return None;
        }
        Some((y as usize) * self.columns + (x as usize))
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Cell at `(x, y)`, `None` when out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Overwrite the cell at `(x, y)`. Returns false if out of bounds.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Within bounds and empty
    pub fn is_vacant(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.columns;
        &self.cells[start..start + self.columns]
    }

    /// Every cell of the row is occupied
    pub fn is_row_full(&self, y: usize) -> bool {
        y < self.rows && self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Remove row `y`, shift the rows above it down by one and empty the top row
    pub fn remove_row(&mut self, y: usize) {
        if y >= self.rows {
            return;
        }
        let width = self.columns;

        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..y * width, width);
        self.cells[..width].fill(None);
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}
