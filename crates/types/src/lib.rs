//! Core types module - shared data structures and constants
//!
//! This module defines the vocabulary shared by the engine, the terminal
//! front end and the score store. Everything here is plain data with no
//! external dependencies.
//!
//! # Board Dimensions
//!
//! The grid size is configurable at construction time. The defaults match the
//! classic playfield:
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the spawn row at the top)
//!
//! # Scoring
//!
//! | Constant | Value | Awarded for |
//! |----------|-------|-------------|
//! | `SOFT_DROP_POINTS` | 1 | each row a piece moves down one step at a time |
//! | `HARD_DROP_POINTS` | 10 | each row a piece descends during a hard drop |
//! | `LINE_CLEAR_POINTS` | 100 | multiplied by the running count of rows cleared in one pass |
//!
//! # Timing
//!
//! - `GRAVITY_INTERVAL_MS`: 500ms between gravity steps
//! - `TICK_MS`: 16ms input/render frame
//!
//! # Examples
//!
//! ```
//! use blockdrop_types::{PieceKind, Rotation, DEFAULT_COLUMNS, DEFAULT_ROWS};
//!
//! assert_eq!(PieceKind::ALL[PieceKind::T.index()], PieceKind::T);
//! assert_eq!(Rotation::Up.rotate_cw(), Rotation::Right);
//! assert_eq!((DEFAULT_COLUMNS, DEFAULT_ROWS), (10, 20));
//! ```

/// Default board width in cells
pub const DEFAULT_COLUMNS: usize = 10;

/// Default board height in cells
pub const DEFAULT_ROWS: usize = 20;

/// Fixed input/render frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Interval between gravity steps in milliseconds
pub const GRAVITY_INTERVAL_MS: u32 = 500;

/// Points per row for a single-step (soft) drop
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points per row descended during a hard drop
pub const HARD_DROP_POINTS: u32 = 10;

/// Base points for a cleared row, multiplied by the running count in the pass
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Number of entries kept in the high score table
pub const HIGH_SCORE_SLOTS: usize = 5;

/// The seven tetromino kinds
///
/// The kind doubles as the color tag of every grid cell the piece occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in declaration order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Position in [`PieceKind::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Rotation states of a piece
///
/// - **Up**: spawn orientation
/// - **Right**: rotated 90° clockwise
/// - **Down**: rotated 180°
/// - **Left**: rotated 90° counter-clockwise
///
/// The cycle goes: Up → Right → Down → Left → Up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    Up,
    Right,
    Down,
    Left,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockdrop_types::Rotation;
    ///
    /// assert_eq!(Rotation::Up.rotate_cw(), Rotation::Right);
    /// assert_eq!(Rotation::Left.rotate_cw(), Rotation::Up);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::Up => Rotation::Right,
            Rotation::Right => Rotation::Down,
            Rotation::Down => Rotation::Left,
            Rotation::Left => Rotation::Up,
        }
    }

    /// Rotate counter-clockwise (-90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockdrop_types::Rotation;
    ///
    /// assert_eq!(Rotation::Up.rotate_ccw(), Rotation::Left);
    /// assert_eq!(Rotation::Right.rotate_ccw(), Rotation::Up);
    /// ```
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::Up => Rotation::Left,
            Rotation::Left => Rotation::Down,
            Rotation::Down => Rotation::Right,
            Rotation::Right => Rotation::Up,
        }
    }

    /// Index into a per-rotation table (Up = 0 .. Left = 3)
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Commands the presentation layer issues against the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one row down, locking it if it cannot descend
    SoftDrop,
    /// Drop piece to the lowest reachable row and lock it
    HardDrop,
    /// Rotate piece 90° clockwise, with kick fallback
    RotateCw,
    /// Rotate piece 90° counter-clockwise, with kick fallback
    RotateCcw,
    /// Discard the board and start a new game
    Restart,
}

/// A cell on the game board
///
/// - `None`: empty
/// - `Some(PieceKind)`: occupied by a locked piece or by the active piece's trace
pub type Cell = Option<PieceKind>;
