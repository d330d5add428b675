//! Terminal input.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Holding a
//! key relies on the terminal's own auto-repeat.

pub mod map;

pub use blockdrop_types as types;

pub use map::{action_for_key, should_quit};
