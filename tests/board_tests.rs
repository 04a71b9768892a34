//! Board tests - collision, movement, rotation and row clearing

use cube_tetris::core::{Board, Cell, Piece};
use cube_tetris::types::{Category, Direction, Rgba};

const W: u16 = 11;
const H: u16 = 20;

fn fill(board: &mut Board, row: i32, col: i32, category: Category) {
    assert!(board.set(row, col, Cell::filled(category.color())));
}

/// Fill every playable column of `row` except `gap`.
fn fill_row_except(board: &mut Board, row: i32, gap: i32) {
    for col in 0..board.playable_width() as i32 {
        if col != gap {
            fill(board, row, col, Category::Z);
        }
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new(W, H);
    assert_eq!(board.width(), W);
    assert_eq!(board.height(), H);
    assert_eq!(board.score(), 0);

    for row in 0..H as i32 {
        for col in 0..W as i32 {
            assert_eq!(board.cell(row, col), Some(Cell::EMPTY), "({}, {})", row, col);
            assert_eq!(board.get_block(row, col), Rgba::TRANSPARENT);
        }
    }
}

#[test]
fn test_get_block_out_of_bounds_is_transparent() {
    let mut board = Board::new(W, H);
    fill(&mut board, 0, 0, Category::T);

    assert_eq!(board.get_block(0, 0), Category::T.color());
    assert_eq!(board.get_block(-1, 0), Rgba::TRANSPARENT);
    assert_eq!(board.get_block(0, -1), Rgba::TRANSPARENT);
    assert_eq!(board.get_block(H as i32, 0), Rgba::TRANSPARENT);
    assert_eq!(board.get_block(0, W as i32), Rgba::TRANSPARENT);
    assert_eq!(board.cell(0, W as i32), None);
}

#[test]
fn test_fresh_piece_never_collides_with_itself() {
    let mut board = Board::new(W, H);
    let piece = Piece::new(Category::T, 4, 10);
    assert!(!board.is_collision(&piece, 0, 0, 0));

    // Stamped, it still does not collide in place.
    board.stamp_piece(&piece);
    assert!(!board.is_collision(&piece, 0, 0, 0));
}

#[test]
fn test_collision_bounds() {
    let board = Board::new(W, H);

    // O occupies local columns 0..=1.
    let left = Piece::new(Category::O, 0, 5);
    assert!(board.is_collision(&left, 0, 1, 0));
    assert!(!board.is_collision(&left, 0, 0, 1));

    let floor = Piece::new(Category::O, 3, 0);
    assert!(board.is_collision(&floor, 1, 0, 0));

    // Rightmost O cell at column 9 is legal, column 10 is the margin.
    let right = Piece::new(Category::O, 8, 5);
    assert!(!board.is_collision(&right, 0, 0, 0));
    assert!(board.is_collision(&right, 0, 0, 1));
}

#[test]
fn test_collision_with_locked_cell() {
    let mut board = Board::new(W, H);
    fill(&mut board, 4, 3, Category::I);

    let piece = Piece::new(Category::O, 3, 5);
    assert!(board.is_collision(&piece, 1, 0, 0));
    assert!(!board.is_collision(&piece, 0, 0, 1));
}

#[test]
fn test_stamped_piece_moves_through_its_own_cells() {
    let mut board = Board::new(W, H);
    let mut piece = Piece::new(Category::I, 4, 10);
    board.stamp_piece(&piece);

    // The vertical I overlaps its own previous cells on every step down.
    assert!(!board.move_piece(&mut piece, Direction::Down));
    assert_eq!(piece.y(), 9);
    let occupied: Vec<_> = (0..H as i32).filter(|&r| board.is_occupied(r, 5)).collect();
    assert_eq!(occupied, vec![9, 10, 11, 12]);
}

#[test]
fn test_j_piece_drops_to_floor_then_blocks() {
    let mut board = Board::new(11, 20);
    let mut piece = Piece::from_number(7, 4, 16).unwrap();
    assert_eq!(piece.category(), Category::J);

    for expected_y in (0..16).rev() {
        assert!(!board.move_piece(&mut piece, Direction::Down));
        assert_eq!(piece.y(), expected_y);
    }

    let before = board.clone();
    assert!(board.move_piece(&mut piece, Direction::Down));
    assert_eq!(piece.y(), 0);
    assert_eq!(board, before);

    let color = Category::J.color();
    for (row, col) in [(0, 4), (1, 4), (2, 4), (2, 5)] {
        assert_eq!(board.get_block(row, col), color);
    }
    let occupied = board.cells().iter().filter(|c| c.occupied).count();
    assert_eq!(occupied, 4);
}

#[test]
fn test_move_left_and_right() {
    let mut board = Board::new(W, H);
    let mut piece = Piece::new(Category::T, 4, 10);
    board.stamp_piece(&piece);

    assert!(!board.move_piece(&mut piece, Direction::Left));
    assert_eq!((piece.x(), piece.y()), (3, 10));
    assert!(!board.move_piece(&mut piece, Direction::Right));
    assert!(!board.move_piece(&mut piece, Direction::Right));
    assert_eq!((piece.x(), piece.y()), (5, 10));

    let expected: Vec<_> = piece.board_cells().into_iter().collect();
    let mut actual = Vec::new();
    for row in 0..H as i32 {
        for col in 0..W as i32 {
            if board.is_occupied(row, col) {
                actual.push((row, col));
            }
        }
    }
    assert_eq!(actual, expected);
}

#[test]
fn test_pushed_right_never_reaches_margin_column() {
    for category in Category::ALL {
        let mut board = Board::new(W, H);
        let mut piece = Piece::new(category, 4, 10);
        while !board.move_piece(&mut piece, Direction::Right) {}

        let rightmost = piece.board_cells().iter().map(|&(_, c)| c).max().unwrap();
        assert_eq!(rightmost, W as i32 - 2, "{:?}", category);
        assert!(!board.is_occupied(10, W as i32 - 1));
    }
}

#[test]
fn test_blocked_move_changes_nothing() {
    let mut board = Board::new(W, H);
    fill(&mut board, 9, 4, Category::L);
    let mut piece = Piece::new(Category::O, 4, 10);
    board.stamp_piece(&piece);

    let board_before = board.clone();
    let piece_before = piece;
    assert!(board.move_piece(&mut piece, Direction::Down));
    assert_eq!(board, board_before);
    assert_eq!(piece, piece_before);
}

#[test]
fn test_o_piece_rotation_always_succeeds() {
    let mut board = Board::new(W, H);
    let mut piece = Piece::from_number(3, 4, 16).unwrap();
    board.stamp_piece(&piece);
    let mask = *piece.mask();
    let before = board.clone();

    for _ in 0..8 {
        assert!(board.rotate_piece(&mut piece));
        assert_eq!(*piece.mask(), mask);
        assert_eq!(board, before);
    }
}

#[test]
fn test_rotation_blocked_by_wall() {
    let mut board = Board::new(W, H);
    // Vertical I hugging the left wall: its mask column is 1, so x = -1.
    let mut piece = Piece::new(Category::I, -1, 5);
    assert!(!board.is_collision(&piece, 0, 0, 0));
    board.stamp_piece(&piece);
    let before = board.clone();

    // Horizontal I would need column -1.
    assert!(!board.rotate_piece(&mut piece));
    assert_eq!(piece.orientation().index(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_rotation_updates_grid() {
    let mut board = Board::new(W, H);
    let mut piece = Piece::new(Category::I, 4, 10);
    board.stamp_piece(&piece);

    assert!(board.rotate_piece(&mut piece));
    assert_eq!(piece.orientation().index(), 1);
    // Horizontal I lies on local row 1.
    for col in 4..8 {
        assert!(board.is_occupied(11, col));
    }
    assert!(!board.is_occupied(10, 5));
    assert!(!board.is_occupied(13, 5));
}

#[test]
fn test_rotation_overwrites_locked_cell_in_rotated_footprint() {
    let mut board = Board::new(W, H);
    let mut piece = Piece::new(Category::I, 4, 10);
    board.stamp_piece(&piece);
    // The horizontal I lands on row 11, columns 4..=7.
    fill(&mut board, 11, 7, Category::Z);

    // Every target inside the rotated mask counts as the piece's own cell,
    // so locked cells there never block the rotation.
    let mut rotated = piece;
    rotated.rotate();
    assert!(!board.is_collision(&rotated, 0, 0, 0));
    assert!(board.rotate_piece(&mut piece));
    assert_eq!(piece.orientation().index(), 1);
    assert_eq!(board.get_block(11, 7), Category::I.color());
    for col in 4..8 {
        assert!(board.is_occupied(11, col));
    }
}

#[test]
fn test_is_row_full_ignores_margin_column() {
    let mut board = Board::new(W, H);
    fill_row_except(&mut board, 3, -1);
    assert!(board.is_row_full(3));
    assert!(!board.is_occupied(3, W as i32 - 1));

    fill_row_except(&mut board, 4, 9);
    assert!(!board.is_row_full(4));
    assert!(!board.is_row_full(-1));
    assert!(!board.is_row_full(H as i32));
}

#[test]
fn test_landing_piece_completes_row() {
    let mut board = Board::new(W, H);
    fill_row_except(&mut board, 0, 5);
    fill(&mut board, 6, 0, Category::S);

    // Vertical I drops into the gap at column 5.
    let mut piece = Piece::new(Category::I, 4, 16);
    while !board.move_piece(&mut piece, Direction::Down) {}
    assert_eq!(piece.y(), 0);
    board.stamp_piece(&piece);

    let row1_before: Vec<_> = (0..W as i32).map(|c| board.cell(1, c)).collect();
    assert_eq!(board.clear_full_rows(), 1);
    assert_eq!(board.score(), 1);

    // Everything moved down one row and the top row is empty.
    let row0_after: Vec<_> = (0..W as i32).map(|c| board.cell(0, c)).collect();
    assert_eq!(row0_after, row1_before);
    assert!(board.is_occupied(5, 0));
    assert!(!board.is_occupied(6, 0));
    assert!((0..W as i32).all(|c| !board.is_occupied(H as i32 - 1, c)));
    assert!(!board.is_row_full(0));
}

#[test]
fn test_clear_consecutive_and_separated_rows() {
    let mut board = Board::new(W, H);
    for row in [0, 1, 3] {
        fill_row_except(&mut board, row, -1);
    }
    fill(&mut board, 2, 7, Category::T);
    fill(&mut board, 4, 2, Category::L);

    assert_eq!(board.clear_full_rows(), 3);
    assert_eq!(board.score(), 3);
    assert_eq!(board.get_block(0, 7), Category::T.color());
    assert_eq!(board.get_block(1, 2), Category::L.color());
    let occupied = board.cells().iter().filter(|c| c.occupied).count();
    assert_eq!(occupied, 2);

    // Nothing left to clear; score is cumulative.
    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board.score(), 3);
}

#[test]
fn test_clear_top_row() {
    let mut board = Board::new(W, H);
    fill_row_except(&mut board, H as i32 - 1, -1);
    assert_eq!(board.clear_full_rows(), 1);
    assert!(board.cells().iter().all(|c| *c == Cell::EMPTY));
}

#[test]
fn test_overlaps_has_no_self_exclusion() {
    let mut board = Board::new(W, H);
    let piece = Piece::new(Category::S, 4, 16);
    assert!(!board.overlaps(&piece));
    board.stamp_piece(&piece);
    assert!(board.overlaps(&piece));
    assert!(!board.is_collision(&piece, 0, 0, 0));
}

#[test]
fn test_reset() {
    let mut board = Board::new(W, H);
    fill_row_except(&mut board, 0, -1);
    board.clear_full_rows();
    fill(&mut board, 3, 3, Category::I);

    board.reset();
    assert_eq!(board, Board::new(W, H));
}
