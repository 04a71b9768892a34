//! Cube Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates as `cube_tetris::{core, input, term, types}`
//! so the binary, tests and benches share one import path.

pub use cube_tetris_core as core;
pub use cube_tetris_input as input;
pub use cube_tetris_term as term;
pub use cube_tetris_types as types;
