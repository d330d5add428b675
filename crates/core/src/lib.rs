//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the falling-block rules: the grid, the shapes and their
//! rotation tables, the board state machine, shape generators and the
//! gravity-driven game loop. It has no dependencies on the terminal, the file
//! system or the clock, so the same seed and the same sequence of commands
//! always produce the same board.
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size cell matrix with row removal
//! - [`shape`]: the seven shapes and their four rotations
//! - [`coords`]: shape offsets to absolute grid cells
//! - [`generator`]: random, 7-bag and fixed-sequence shape sources
//! - [`board`]: movement, rotation kicks, locking, line clearing, scoring
//! - [`gravity`]: elapsed time to gravity steps
//! - [`game`]: board + gravity driven by [`types::GameAction`]s
//! - [`snapshot`]: read-only copies for renderers
//!
//! # Example
//!
//! ```
//! use blockdrop_core::{Board, Game, Gravity, SequenceGenerator};
//! use blockdrop_core::types::{GameAction, PieceKind};
//!
//! let board = Board::with_generator(10, 20, SequenceGenerator::repeat(PieceKind::I)).unwrap();
//! let mut game = Game::new(board, Gravity::default());
//!
//! game.apply_action(GameAction::HardDrop);
//! assert_eq!(game.score(), 190);
//! ```

pub mod board;
pub mod coords;
pub mod error;
pub mod game;
pub mod generator;
pub mod gravity;
pub mod grid;
pub mod shape;
pub mod snapshot;

pub use blockdrop_types as types;

pub use board::{Board, ROTATION_KICKS};
pub use coords::{coordinates_for, Coord, Footprint};
pub use error::BoardError;
pub use game::Game;
pub use generator::{BagGenerator, RandomGenerator, SequenceGenerator, ShapeGenerator, SimpleRng};
pub use gravity::Gravity;
pub use grid::Grid;
pub use shape::{rotation_table, Shape};
pub use snapshot::{ActiveSnapshot, BoardSnapshot};
