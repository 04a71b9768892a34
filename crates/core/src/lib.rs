//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the falling-block rules: the piece model, the board
//! state machine and a driver session that plays them out. It has no
//! dependencies on terminals, windows or I/O.
//!
//! # Module Structure
//!
//! - [`pieces`]: static 7 x 4 table of 4x4 shape masks
//! - [`piece`]: the falling [`Piece`] value type
//! - [`board`]: grid of cells with collision testing, stamping and row clearing
//! - [`rng`]: seeded uniform category selection
//! - [`config`]: environment-driven [`GameConfig`]
//! - [`game`]: [`Game`] session (gravity tick, lock, clear, spawn, game over)
//! - [`snapshot`]: serializable read-only views for renderers
//!
//! # Rules
//!
//! - Moves and rotations are all-or-nothing: a blocked command changes nothing
//! - Rotation has no wall kicks
//! - The rightmost column is a margin that pieces cannot enter and that row
//!   clearing ignores
//! - Each cleared row scores one point
//!
//! # Example
//!
//! ```
//! use cube_tetris_core::{Board, Piece};
//! use cube_tetris_types::{Category, Direction};
//!
//! let mut board = Board::new(11, 20);
//! let mut piece = Piece::new(Category::J, 4, 16);
//!
//! // Fall until the piece lands on the floor.
//! while !board.move_piece(&mut piece, Direction::Down) {}
//! assert_eq!(piece.y(), 0);
//!
//! // Lock it and compact any full rows.
//! board.stamp_piece(&piece);
//! assert_eq!(board.clear_full_rows(), 0);
//! assert_eq!(board.get_block(0, 4), Category::J.color());
//! ```

pub mod board;
pub mod config;
pub mod game;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use cube_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Cell};
pub use config::{ConfigError, GameConfig};
pub use game::{Game, TickOutcome};
pub use piece::Piece;
pub use pieces::{shape_mask, ShapeMask, ROTATION_STATES};
pub use rng::{PieceGenerator, SimpleRng};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
