//! Board module - manages the game grid
//!
//! The board is a `width x height` grid of cells stored as a flat row-major
//! vector. Coordinates are `(row, col)` with row 0 at the bottom and rows
//! growing upward.
//!
//! The last column (`width - 1`) is a margin: collision testing rejects any
//! piece cell that would land there and row clearing ignores it. Pieces are
//! never owned by the board; callers pass them in by reference.

use crate::piece::Piece;
use crate::types::{Direction, Rgba};

/// A single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cell {
    pub occupied: bool,
    pub color: Rgba,
}

impl Cell {
    /// Unoccupied, fully transparent cell
    pub const EMPTY: Cell = Cell {
        occupied: false,
        color: Rgba::TRANSPARENT,
    };

    pub fn filled(color: Rgba) -> Self {
        Self {
            occupied: true,
            color,
        }
    }
}

/// The playfield: grid cells plus the cumulative score
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: u16,
    height: u16,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<Cell>,
    score: u32,
}

impl Board {
    /// Create an empty board with score 0
    ///
    /// # Panics
    ///
    /// Panics if `width < 2` or `height == 0`. A one-column board is all
    /// margin, so every row counts as full forever and
    /// [`Board::clear_full_rows`] would never terminate.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width >= 2, "board width must be at least 2, got {width}");
        assert!(height > 0, "board height must be non-zero");
        Self {
            width,
            height,
            cells: vec![Cell::EMPTY; width as usize * height as usize],
            score: 0,
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || row >= self.height as i32 || col < 0 || col >= self.width as i32 {
            return None;
        }
        Some(row as usize * self.width as usize + col as usize)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Columns a piece may occupy (everything left of the margin column)
    pub fn playable_width(&self) -> u16 {
        self.width - 1
    }

    /// Rows cleared since construction or the last [`Board::reset`]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Get cell at (row, col), `None` if out of bounds
    pub fn cell(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Check if position is within bounds and occupied
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        matches!(self.cell(row, col), Some(Cell { occupied: true, .. }))
    }

    /// Color to draw at (row, col): the cell color if occupied, transparent
    /// otherwise (including out of bounds)
    pub fn get_block(&self, row: i32, col: i32) -> Rgba {
        match self.cell(row, col) {
            Some(cell) if cell.occupied => cell.color,
            _ => Rgba::TRANSPARENT,
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Overwrite a single cell. Returns false if out of bounds.
    ///
    /// Writing an unoccupied cell always stores a transparent color.
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = if cell.occupied { cell } else { Cell::EMPTY };
                true
            }
            None => false,
        }
    }

    /// Whether the piece, shifted by the given deltas, would leave the field
    /// or hit an occupied cell
    ///
    /// Each filled mask cell `(i, j)` is tested at row `y + i - down` and
    /// column `x + j + right - left`. A target is out of bounds when its
    /// column is negative or reaches the margin column, or its row is
    /// negative. An occupied target only counts when the back-shifted local
    /// cell `(i - down, j + right - left)` is not part of the piece's own
    /// footprint, so a stamped piece never collides with itself. Rows above
    /// the top of the grid hold no cells and never collide.
    pub fn is_collision(&self, piece: &Piece, down: i32, left: i32, right: i32) -> bool {
        let margin_col = self.width as i32 - 1;

        for (i, j) in piece.filled_cells() {
            let new_row = piece.y() + i - down;
            let new_col = piece.x() + j + right - left;

            if new_col < 0 || new_col >= margin_col || new_row < 0 {
                return true;
            }

            if self.is_occupied(new_row, new_col)
                && !piece.is_within_shape(i - down, j + right - left)
            {
                return true;
            }
        }

        false
    }

    /// Whether any filled cell of the piece sits on an occupied cell
    ///
    /// Unlike [`Board::is_collision`] there is no self-exclusion, so this is
    /// only meaningful for a piece that has not been stamped yet (a fresh
    /// spawn).
    pub fn overlaps(&self, piece: &Piece) -> bool {
        piece
            .board_cells()
            .iter()
            .any(|&(row, col)| self.is_occupied(row, col))
    }

    /// Lift the piece's footprint off the grid
    pub fn clear_piece(&mut self, piece: &Piece) {
        for (row, col) in piece.board_cells() {
            self.set(row, col, Cell::EMPTY);
        }
    }

    /// Stamp the piece's footprint onto the grid with the piece color
    ///
    /// Used after every successful move and to lock a landed piece.
    pub fn stamp_piece(&mut self, piece: &Piece) {
        for (row, col) in piece.board_cells() {
            self.set(row, col, Cell::filled(piece.color()));
        }
    }

    /// Move the piece one cell. Returns true if the move is blocked.
    ///
    /// A blocked move leaves both the piece and the grid untouched; a
    /// downward block is the landing signal.
    pub fn move_piece(&mut self, piece: &mut Piece, direction: Direction) -> bool {
        let (down, left, right) = direction.deltas();

        if self.is_collision(piece, down, left, right) {
            return true;
        }

        self.clear_piece(piece);
        piece.set_position(piece.x() + right - left, piece.y() - down);
        self.stamp_piece(piece);
        false
    }

    /// Rotate the piece in place. Returns true if the rotation happened.
    ///
    /// Legality is tested on a rotated copy; there are no wall kicks.
    pub fn rotate_piece(&mut self, piece: &mut Piece) -> bool {
        let mut rotated = *piece;
        rotated.rotate();

        if self.is_collision(&rotated, 0, 0, 0) {
            return false;
        }

        self.clear_piece(piece);
        piece.rotate();
        self.stamp_piece(piece);
        true
    }

    /// Check if every column left of the margin is occupied
    pub fn is_row_full(&self, row: i32) -> bool {
        let Some(start) = self.index(row, 0) else {
            return false;
        };
        let playable = self.playable_width() as usize;
        self.cells[start..start + playable]
            .iter()
            .all(|cell| cell.occupied)
    }

    /// Remove every full row, compacting the rows above it downward
    ///
    /// Scans from the top row down. After a clear the same row index is
    /// examined again, since it now holds the row that was above it. Each
    /// cleared row adds one to the score. Returns the number of rows cleared.
    pub fn clear_full_rows(&mut self) -> u32 {
        let width = self.width as usize;
        let height = self.height as usize;
        let mut cleared = 0;
        let mut row = self.height as i32 - 1;

        while row >= 0 {
            if !self.is_row_full(row) {
                row -= 1;
                continue;
            }

            let start = row as usize * width;
            // copy_within handles the overlapping ranges
            self.cells.copy_within(start + width..height * width, start);
            self.cells[(height - 1) * width..].fill(Cell::EMPTY);

            self.score += 1;
            cleared += 1;
        }

        cleared
    }

    /// Empty every cell and zero the score
    pub fn reset(&mut self) {
        self.cells.fill(Cell::EMPTY);
        self.score = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(11, 20);
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(0, 10), Some(10));
        assert_eq!(board.index(1, 0), Some(11));
        assert_eq!(board.index(19, 10), Some(219));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(0, 11), None);
        assert_eq!(board.index(20, 0), None);
    }

    #[test]
    fn test_set_empty_cell_forces_transparent() {
        let mut board = Board::new(5, 5);
        board.set(
            2,
            2,
            Cell {
                occupied: false,
                color: Category::S.color(),
            },
        );
        assert_eq!(board.cell(2, 2), Some(Cell::EMPTY));
    }

    #[test]
    fn test_collision_above_top_is_ignored() {
        let board = Board::new(11, 20);
        // I piece vertical at row 18 pokes two cells above the grid.
        let piece = Piece::new(Category::I, 4, 18);
        assert!(!board.is_collision(&piece, 0, 0, 0));
    }

    #[test]
    fn test_stamp_skips_cells_outside_grid() {
        let mut board = Board::new(11, 20);
        let piece = Piece::new(Category::I, 4, 18);
        board.stamp_piece(&piece);
        let occupied = board.cells().iter().filter(|c| c.occupied).count();
        assert_eq!(occupied, 2);
    }

    #[test]
    fn test_clear_full_rows_reexamines_same_index() {
        let mut board = Board::new(4, 4);
        for row in 0..2 {
            for col in 0..3 {
                board.set(row, col, Cell::filled(Category::I.color()));
            }
        }
        board.set(2, 1, Cell::filled(Category::T.color()));

        assert_eq!(board.clear_full_rows(), 2);
        assert_eq!(board.score(), 2);
        assert_eq!(board.get_block(0, 1), Category::T.color());
        assert!(!board.is_occupied(0, 0));
        assert!(!board.is_occupied(2, 1));
    }

    #[test]
    #[should_panic]
    fn test_board_rejects_width_without_playable_column() {
        let _ = Board::new(1, 10);
    }
}
