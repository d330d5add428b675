//! Terminal presentation.
//!
//! Frames are composed in a plain [`FrameBuffer`] by [`GameView`] and
//! flushed by [`TerminalRenderer`], which only sends what changed. Each board
//! cell is drawn two terminal columns wide.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockdrop_core as core;
pub use blockdrop_scores as scores;
pub use blockdrop_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Hud, Layout, Viewport};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, TerminalRenderer};
