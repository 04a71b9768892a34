//! Piece module - the falling tetromino
//!
//! A [`Piece`] is a pure value: category, orientation, anchor position and
//! color. Its shape mask is always read from the static rotation table, so a
//! piece can never hold a mask that disagrees with its orientation. Pieces know
//! nothing about the board; legality is the board's job.

use arrayvec::ArrayVec;

use crate::pieces::{shape_mask, ShapeMask};
use crate::types::{Category, CategoryError, Orientation, Rgba, MASK_SIZE};

/// The currently controlled tetromino
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece {
    category: Category,
    orientation: Orientation,
    x: i32,
    y: i32,
    color: Rgba,
}

impl Piece {
    /// Create a piece at orientation 0 with its anchor at `(x, y)`
    pub fn new(category: Category, x: i32, y: i32) -> Self {
        Self {
            category,
            orientation: Orientation::R0,
            x,
            y,
            color: category.color(),
        }
    }

    /// Create a piece from a one-based category number (1 = I ... 7 = J)
    ///
    /// Numbers outside `1..=7` are rejected rather than read out of range.
    pub fn from_number(number: i32, x: i32, y: i32) -> Result<Self, CategoryError> {
        Ok(Self::new(Category::try_from(number)?, x, y))
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    /// Shape mask for the current orientation
    pub fn mask(&self) -> &'static ShapeMask {
        shape_mask(self.category, self.orientation)
    }

    /// Advance a quarter turn. Always succeeds; the board decides legality.
    pub fn rotate(&mut self) {
        self.orientation = self.orientation.next();
    }

    /// Overwrite the anchor position without validation
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Whether the mask is filled at local `(row, col)`
    ///
    /// Indices outside the 4x4 window read as empty.
    pub fn cell_at(&self, row: i32, col: i32) -> bool {
        if !(0..MASK_SIZE as i32).contains(&row) || !(0..MASK_SIZE as i32).contains(&col) {
            return false;
        }
        self.mask()[row as usize][col as usize]
    }

    /// Whether local `(row, col)` belongs to this piece's current footprint
    ///
    /// Collision checks probe shifted coordinates that may leave the 4x4
    /// window, so out-of-range indices answer `false`.
    pub fn is_within_shape(&self, row: i32, col: i32) -> bool {
        self.cell_at(row, col)
    }

    /// Local `(row, col)` of every filled mask cell, row-major
    pub fn filled_cells(&self) -> ArrayVec<(i32, i32), 4> {
        let mut cells = ArrayVec::new();
        for (i, row) in self.mask().iter().enumerate() {
            for (j, &filled) in row.iter().enumerate() {
                if filled {
                    cells.push((i as i32, j as i32));
                }
            }
        }
        cells
    }

    /// Board `(row, col)` of every filled mask cell at the current position
    pub fn board_cells(&self) -> ArrayVec<(i32, i32), 4> {
        self.filled_cells()
            .into_iter()
            .map(|(i, j)| (self.y + i, self.x + j))
            .collect()
    }
}
