//! Snapshot module - read-only views of a running game
//!
//! Snapshots are what renderers and observers consume. They serialize with
//! serde but are never loaded back into a game.

use serde::Serialize;

use crate::piece::Piece;
use crate::types::{Category, Orientation, Rgba};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub category: Category,
    pub orientation: Orientation,
    pub x: i32,
    pub y: i32,
}

impl From<&Piece> for ActiveSnapshot {
    fn from(piece: &Piece) -> Self {
        Self {
            category: piece.category(),
            orientation: piece.orientation(),
            x: piece.x(),
            y: piece.y(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub width: u16,
    pub height: u16,
    pub score: u32,
    pub game_over: bool,
    pub pieces_spawned: u32,
    /// Cell colors, `rows[0]` is the bottom row; `None` marks an empty cell
    pub rows: Vec<Vec<Option<Rgba>>>,
    /// The falling piece, absent once the game is over
    pub active: Option<ActiveSnapshot>,
}

impl GameSnapshot {
    /// Color at (row, col), `None` for empty or out-of-range cells
    pub fn block(&self, row: usize, col: usize) -> Option<Rgba> {
        self.rows.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.rows.iter().flatten().filter(|c| c.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::Game;

    #[test]
    fn snapshot_mirrors_board() {
        let game = Game::with_first(GameConfig::default(), Category::T);
        let snap = game.snapshot();

        assert_eq!(snap.rows.len(), 20);
        assert!(snap.rows.iter().all(|r| r.len() == 11));
        assert_eq!(snap.occupied(), 4);
        for row in 0..20 {
            for col in 0..11 {
                let expected = game.board().get_block(row as i32, col as i32);
                match snap.block(row, col) {
                    Some(color) => assert_eq!(color, expected),
                    None => assert!(expected.is_transparent()),
                }
            }
        }
        assert_eq!(
            snap.active,
            Some(ActiveSnapshot {
                category: Category::T,
                orientation: Orientation::R0,
                x: 4,
                y: 16,
            })
        );
    }

    #[test]
    fn block_out_of_range_is_none() {
        let snap = Game::default().snapshot();
        assert_eq!(snap.block(20, 0), None);
        assert_eq!(snap.block(0, 11), None);
    }
}
