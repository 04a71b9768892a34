//! Terminal input module.
//!
//! Maps `crossterm` key events to engine [`crate::types::Command`]s and
//! recognizes the session keys (quit, restart). There is no auto-repeat
//! handling; each key press is one command.

pub mod map;

pub use cube_tetris_types as types;

pub use map::{is_restart, map_key, should_quit};
