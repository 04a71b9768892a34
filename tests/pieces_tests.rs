//! Piece tests - shape table lookups and rotation cycling

use cube_tetris::core::{shape_mask, Piece, ROTATION_STATES};
use cube_tetris::types::{Category, CategoryError, Orientation};

fn mask_rows(piece: &Piece) -> Vec<String> {
    (0..4)
        .map(|row| {
            (0..4)
                .map(|col| if piece.cell_at(row, col) { '#' } else { '.' })
                .collect()
        })
        .collect()
}

#[test]
fn test_rotation_cycle_closes_after_four_turns() {
    for category in Category::ALL {
        let mut piece = Piece::new(category, 4, 16);
        let original = *piece.mask();
        for _ in 0..4 {
            piece.rotate();
        }
        assert_eq!(*piece.mask(), original, "{:?}", category);
        assert_eq!(piece.orientation(), Orientation::R0);
    }
}

#[test]
fn test_mask_always_matches_table() {
    for category in Category::ALL {
        let mut piece = Piece::new(category, 0, 0);
        for orientation in 0..4 {
            assert_eq!(piece.orientation().index(), orientation);
            assert_eq!(
                piece.mask(),
                &ROTATION_STATES[category.index()][orientation]
            );
            assert_eq!(piece.mask(), shape_mask(category, piece.orientation()));
            piece.rotate();
        }
    }
}

#[test]
fn test_t_piece_masks() {
    let mut piece = Piece::new(Category::T, 0, 0);
    assert_eq!(mask_rows(&piece), ["....", "###.", ".#..", "...."]);
    piece.rotate();
    assert_eq!(mask_rows(&piece), [".#..", ".##.", ".#..", "...."]);
    piece.rotate();
    assert_eq!(mask_rows(&piece), [".#..", "###.", "....", "...."]);
    piece.rotate();
    assert_eq!(mask_rows(&piece), [".#..", "##..", ".#..", "...."]);
}

#[test]
fn test_s_and_z_masks() {
    let z = Piece::new(Category::Z, 0, 0);
    assert_eq!(mask_rows(&z), ["....", ".#..", "##..", "#..."]);

    let s = Piece::new(Category::S, 0, 0);
    assert_eq!(mask_rows(&s), ["#...", "##..", ".#..", "...."]);
}

#[test]
fn test_l_and_j_masks() {
    let mut l = Piece::new(Category::L, 0, 0);
    assert_eq!(mask_rows(&l), [".#..", ".#..", "##..", "...."]);
    l.rotate();
    assert_eq!(mask_rows(&l), ["....", "###.", "..#.", "...."]);

    let mut j = Piece::new(Category::J, 0, 0);
    j.rotate();
    j.rotate();
    assert_eq!(mask_rows(&j), ["##..", ".#..", ".#..", "...."]);
}

#[test]
fn test_is_within_shape_matches_cell_at() {
    for category in Category::ALL {
        let piece = Piece::new(category, 2, 2);
        for row in -2..6 {
            for col in -2..6 {
                assert_eq!(piece.is_within_shape(row, col), piece.cell_at(row, col));
            }
        }
    }
}

#[test]
fn test_filled_cells_are_four() {
    for category in Category::ALL {
        let mut piece = Piece::new(category, 0, 0);
        for _ in 0..4 {
            assert_eq!(piece.filled_cells().len(), 4);
            piece.rotate();
        }
    }
}

#[test]
fn test_set_position_is_unchecked() {
    let mut piece = Piece::new(Category::I, 4, 16);
    piece.set_position(-7, 100);
    assert_eq!((piece.x(), piece.y()), (-7, 100));
    assert_eq!(piece.board_cells()[0], (100, -6));
}

#[test]
fn test_invalid_category_numbers_rejected() {
    for number in [-1, 0, 8, 42] {
        assert_eq!(
            Piece::from_number(number, 4, 16),
            Err(CategoryError::OutOfRange(number))
        );
    }
    for number in 1..=7 {
        let piece = Piece::from_number(number, 4, 16).unwrap();
        assert_eq!(piece.category().number(), number);
        assert_eq!(piece.color(), piece.category().color());
    }
}
