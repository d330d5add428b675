//! Board module - the falling-block state machine
//!
//! The board owns the grid, the active piece and its anchor, the queued next
//! piece and the score. The active piece is always painted into the grid (its
//! *trace*); every command removes the trace, evaluates the new position with
//! the collision predicates and paints it back at either the new or the old
//! position. Locking simply stops tracking the piece, leaving its trace behind
//! as terrain.
//!
//! Scoring:
//! - each single-row descent (`move_down`): +1
//! - each row of a hard drop: +10
//! - each cleared row: +100 × the number of rows cleared so far in the pass
//!
//! Once the spawn position is blocked the board is game-over for good and all
//! commands become no-ops.

use crate::coords::{coordinates_for, Footprint};
use crate::error::BoardError;
use crate::generator::{RandomGenerator, ShapeGenerator};
use crate::grid::Grid;
use crate::shape::Shape;
use crate::snapshot::{ActiveSnapshot, BoardSnapshot};
use crate::types::{
    Cell, HARD_DROP_POINTS, LINE_CLEAR_POINTS, SOFT_DROP_POINTS,
};

/// Anchor adjustments tried in order when an in-place rotation collides.
/// `(dx, dy)`: right 1, left 1, down 1, right 2, left 2, down 2.
pub const ROTATION_KICKS: [(i32, i32); 6] = [(1, 0), (-1, 0), (0, 1), (2, 0), (-2, 0), (0, 2)];

#[derive(Debug, Clone)]
pub struct Board<G = RandomGenerator> {
    grid: Grid,
    active: Option<Shape>,
    next: Shape,
    generator: G,
    pos_x: i32,
    pos_y: i32,
    spawn_x: i32,
    spawn_y: i32,
    score: u32,
    lines: u32,
    game_over: bool,
}

impl Board<RandomGenerator> {
    /// Create a board fed by the default uniform generator
    pub fn new(columns: usize, rows: usize) -> Result<Self, BoardError> {
        Self::with_generator(columns, rows, RandomGenerator::default())
    }
}

impl<G: ShapeGenerator> Board<G> {
    /// Create an empty board. The first next piece is drawn immediately; no
    /// piece is active until [`Board::start`] or [`Board::insert_new_block`].
    pub fn with_generator(columns: usize, rows: usize, mut generator: G) -> Result<Self, BoardError> {
        let grid = Grid::new(columns, rows)?;
        let next = generator.next_shape();
        let spawn_x = (columns / 2) as i32;

        Ok(Self {
            grid,
            active: None,
            next,
            generator,
            pos_x: spawn_x,
            pos_y: 0,
            spawn_x,
            spawn_y: 0,
            score: 0,
            lines: 0,
            game_over: false,
        })
    }

    /// Spawn the first piece. Does nothing once a piece has been spawned.
    pub fn start(&mut self) {
        if self.active.is_none() && !self.game_over {
            self.insert_new_block();
        }
    }

    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total rows cleared since construction
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn next_shape(&self) -> &Shape {
        &self.next
    }

    pub fn active_shape(&self) -> Option<&Shape> {
        self.active.as_ref()
    }

    /// Current anchor `(x, y)` of the active piece
    pub fn anchor(&self) -> (i32, i32) {
        (self.pos_x, self.pos_y)
    }

    /// Color tag at `(x, y)`; fails outside the grid
    pub fn tile(&self, x: i32, y: i32) -> Result<Cell, BoardError> {
        self.grid.get(x, y).ok_or(BoardError::OutOfBounds { x, y })
    }

    /// Absolute cells of the active piece, `None` before the first spawn
    pub fn active_coordinates(&self) -> Option<Footprint> {
        self.active
            .as_ref()
            .map(|shape| coordinates_for(shape, self.pos_x, self.pos_y))
    }

    pub fn move_left(&mut self) -> bool {
        self.move_x(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.move_x(1)
    }

    /// Descend one row (+1 point), or lock and spawn the next piece when the
    /// row below is blocked. Returns true if the piece moved.
    pub fn move_down(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.remove_trace();

        if self.fits_at_row(self.pos_y + 1) {
            self.pos_y += 1;
            self.score += SOFT_DROP_POINTS;
            self.place_trace();
            true
        } else {
            self.place_trace();
            self.insert_new_block();
            false
        }
    }

    /// Drop to the lowest reachable row, lock and spawn the next piece.
    /// Returns the number of rows descended (10 points each).
    pub fn hard_drop(&mut self) -> u32 {
        if !self.is_running() {
            return 0;
        }
        self.remove_trace();

        let mut y = self.pos_y;
        while self.fits_at_row(y + 1) {
            y += 1;
        }
        let rows = (y - self.pos_y) as u32;
        self.score += rows * HARD_DROP_POINTS;
        self.pos_y = y;

        self.place_trace();
        self.insert_new_block();
        rows
    }

    /// Rotate clockwise, falling back to [`ROTATION_KICKS`]. On failure the
    /// piece keeps its original rotation and position.
    pub fn rotate_right(&mut self) -> bool {
        self.rotate(true)
    }

    /// Rotate counter-clockwise with the same kick sequence
    pub fn rotate_left(&mut self) -> bool {
        self.rotate(false)
    }

    /// Lock whatever is active, clear full rows, and spawn the next piece at
    /// the spawn point. Sets game-over when the spawn cells are not free.
    pub fn insert_new_block(&mut self) {
        if self.game_over {
            return;
        }
        self.clear_full_rows();

        self.pos_x = self.spawn_x;
        self.pos_y = self.spawn_y;
        let next = self.generator.next_shape();
        self.active = Some(std::mem::replace(&mut self.next, next));

        if !self.fits_at_row(self.pos_y) {
            self.game_over = true;
        }
        self.place_trace();
    }

    /// Copy of the visible state for renderers
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            columns: self.columns(),
            rows: self.rows(),
            cells: self.grid.cells().to_vec(),
            active: self.active.map(|shape| ActiveSnapshot {
                kind: shape.kind(),
                rotation: shape.rotation(),
                x: self.pos_x,
                y: self.pos_y,
            }),
            next: self.next.kind(),
            score: self.score,
            lines: self.lines,
            game_over: self.game_over,
        }
    }

    fn is_running(&self) -> bool {
        self.active.is_some() && !self.game_over
    }

    fn move_x(&mut self, distance: i32) -> bool {
        if !self.is_running() {
            return false;
        }
        self.remove_trace();

        let moved = self.fits_at_column(self.pos_x + distance, self.pos_y);
        if moved {
            self.pos_x += distance;
        }

        self.place_trace();
        moved
    }

    fn rotate(&mut self, clockwise: bool) -> bool {
        if !self.is_running() {
            return false;
        }
        self.remove_trace();
        self.turn(clockwise);

        if self.fits_at_column(self.pos_x, self.pos_y) {
            self.place_trace();
            return true;
        }

        for (dx, dy) in ROTATION_KICKS {
            // Downward kicks need the lower row and the current row to fit.
            let fits = if dy == 0 {
                self.fits_at_column(self.pos_x + dx, self.pos_y)
            } else {
                self.fits_at_row(self.pos_y + dy) && self.fits_at_column(self.pos_x, self.pos_y)
            };
            if fits {
                self.pos_x += dx;
                self.pos_y += dy;
                self.place_trace();
                return true;
            }
        }

        self.turn(!clockwise);
        self.place_trace();
        false
    }

    fn turn(&mut self, clockwise: bool) {
        if let Some(shape) = self.active.as_mut() {
            if clockwise {
                shape.rotate_right();
            } else {
                shape.rotate_left();
            }
        }
    }

    fn footprint_at(&self, x: i32, y: i32) -> Option<Footprint> {
        self.active
            .as_ref()
            .map(|shape| coordinates_for(shape, x, y))
    }

    /// The active piece fits with its anchor at row `y` in the current column
    fn fits_at_row(&self, y: i32) -> bool {
        match self.footprint_at(self.pos_x, y) {
            Some(cells) => cells.iter().all(|&(cx, cy)| self.grid.is_vacant(cx, cy)),
            None => false,
        }
    }

    /// The active piece fits with its anchor at `(x, y)`: the anchor column is
    /// on the grid, every cell is free, and the piece does not touch both side
    /// walls at once.
    fn fits_at_column(&self, x: i32, y: i32) -> bool {
        let columns = self.columns() as i32;
        if x < 0 || x >= columns {
            return false;
        }
        let Some(cells) = self.footprint_at(x, y) else {
            return false;
        };

        let touches_left = cells.iter().any(|&(cx, _)| cx == 0);
        let touches_right = cells.iter().any(|&(cx, _)| cx == columns - 1);
        if touches_left && touches_right {
            return false;
        }

        cells.iter().all(|&(cx, cy)| self.grid.is_vacant(cx, cy))
    }

    /// One top-to-bottom pass. Rows are re-read after every removal, and the
    /// n-th row cleared in the pass is worth n × 100.
    fn clear_full_rows(&mut self) -> u32 {
        let mut cleared = 0;
        for y in 0..self.grid.rows() {
            if self.grid.is_row_full(y) {
                self.grid.remove_row(y);
                cleared += 1;
                self.score += cleared * LINE_CLEAR_POINTS;
            }
        }
        self.lines += cleared;
        cleared
    }

    fn place_trace(&mut self) {
        let kind = self.active.map(|shape| shape.kind());
        self.paint_trace(kind);
    }

    fn remove_trace(&mut self) {
        self.paint_trace(None);
    }

    // Out-of-range cells are skipped; they only occur on a game-over spawn.
    fn paint_trace(&mut self, cell: Cell) {
        if let Some(cells) = self.active_coordinates() {
            for (x, y) in cells {
                self.grid.set(x, y, cell);
            }
        }
    }
}
