//! Blockdrop (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and adds the pieces that
//! tie them together: environment configuration and the play session.

pub mod config;
pub mod session;

pub use blockdrop_core as core;
pub use blockdrop_input as input;
pub use blockdrop_scores as scores;
pub use blockdrop_term as term;
pub use blockdrop_types as types;

pub use config::GameConfig;
pub use session::{DynGame, Session};
