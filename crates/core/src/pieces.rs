//! Pieces module - tetromino shape masks
//!
//! Every category has four rotation states, each a 4x4 occupancy mask.
//! Mask row `i` maps to board row `y + i` (rows grow upward) and mask column
//! `j` to board column `x + j`, where `(x, y)` is the piece anchor.
//!
//! The table is static domain data indexed by `(category, orientation)`;
//! pieces never carry their own copy.

use crate::types::{Category, Orientation, MASK_SIZE};

/// 4x4 occupancy grid, indexed `[row][col]`
pub type ShapeMask = [[bool; MASK_SIZE]; MASK_SIZE];

const fn mask(rows: [[u8; MASK_SIZE]; MASK_SIZE]) -> ShapeMask {
    let mut out = [[false; MASK_SIZE]; MASK_SIZE];
    let mut i = 0;
    while i < MASK_SIZE {
        let mut j = 0;
        while j < MASK_SIZE {
            out[i][j] = rows[i][j] != 0;
            j += 1;
        }
        i += 1;
    }
    out
}

/// Rotation states for each category, indexed `[category][orientation]`
pub static ROTATION_STATES: [[ShapeMask; 4]; 7] = [
    // I
    [
        mask([[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0]]),
        mask([[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]),
        mask([[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0]]),
        mask([[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]),
    ],
    // T
    [
        mask([[0, 0, 0, 0], [1, 1, 1, 0], [0, 1, 0, 0], [0, 0, 0, 0]]),
        mask([[0, 1, 0, 0], [0, 1, 1, 0], [0, 1, 0, 0], [0, 0, 0, 0]]),
        mask([[0, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
        mask([[0, 1, 0, 0], [1, 1, 0, 0], [0, 1, 0, 0], [0, 0, 0, 0]]),
    ],
    // O (identical in every orientation)
    [
        mask([[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
        mask([[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
        mask([[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
        mask([[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
    ],
    // Z
    [
        mask([[0, 0, 0, 0], [0, 1, 0, 0], [1, 1, 0, 0], [1, 0, 0, 0]]),
        mask([[0, 0, 0, 0], [1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0]]),
        mask([[0, 0, 0, 0], [0, 0, 1, 0], [0, 1, 1, 0], [0, 1, 0, 0]]),
        mask([[0, 0, 0, 0], [0, 0, 0, 0], [1, 1, 0, 0], [0, 1, 1, 0]]),
    ],
    // S
    [
        mask([[1, 0, 0, 0], [1, 1, 0, 0], [0, 1, 0, 0], [0, 0, 0, 0]]),
        mask([[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
        mask([[0, 1, 0, 0], [0, 1, 1, 0], [0, 0, 1, 0], [0, 0, 0, 0]]),
        mask([[0, 0, 0, 0], [0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0]]),
    ],
    // L
    [
        mask([[0, 1, 0, 0], [0, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0]]),
        mask([[0, 0, 0, 0], [1, 1, 1, 0], [0, 0, 1, 0], [0, 0, 0, 0]]),
        mask([[0, 1, 1, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 0, 0, 0]]),
        mask([[1, 0, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
    ],
    // J
    [
        mask([[1, 0, 0, 0], [1, 0, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0]]),
        mask([[0, 0, 0, 0], [0, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0]]),
        mask([[1, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 0, 0, 0]]),
        mask([[0, 0, 0, 0], [1, 1, 1, 0], [1, 0, 0, 0], [0, 0, 0, 0]]),
    ],
];

/// Get the shape mask for a category and orientation
pub fn shape_mask(category: Category, orientation: Orientation) -> &'static ShapeMask {
    &ROTATION_STATES[category.index()][orientation.index()]
}

/// Number of filled cells in a mask
pub fn filled_count(mask: &ShapeMask) -> usize {
    mask.iter().flatten().filter(|&&filled| filled).count()
}
