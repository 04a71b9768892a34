//! Terminal front-end.
//!
//! Draws a [`crate::core::GameSnapshot`] into a character framebuffer and
//! flushes it to the terminal with crossterm. The view is pure and testable;
//! only [`TerminalRenderer`] touches the real terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use cube_tetris_core as core;
pub use cube_tetris_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
