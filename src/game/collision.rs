use crate::constants::{BOARD_WIDTH, BOARD_HEIGHT};
use crate::game::board::Board;
use crate::game::piece::Piece;

/// Would `piece`, shifted by `(dx, dy)`, leave the field or overlap a
/// settled cell? Rows above the top edge are only bounds-checked sideways.
pub fn collides(piece: &Piece, board: &Board, dx: i32, dy: i32) -> bool {
    piece.get_blocks().into_iter().any(|(x, y)| {
        let (x, y) = (x + dx, y + dy);
        if y >= BOARD_HEIGHT as i32 || x < 0 || x >= BOARD_WIDTH as i32 {
            return true;
        }
        y >= 0 && board.is_occupied(x, y)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::Cell;
    use crate::game::piece::PieceType;

    fn piece_at(kind: PieceType, x: i32, y: i32) -> Piece {
        let mut piece = Piece::new(kind);
        piece.x = x;
        piece.y = y;
        piece
    }

    #[test]
    fn spawn_on_empty_board_is_legal() {
        let board = Board::new();
        for kind in PieceType::ALL {
            assert!(!collides(&Piece::new(kind), &board, 0, 0), "{:?}", kind);
        }
    }

    #[test]
    fn floor_breach() {
        let board = Board::new();
        let piece = piece_at(PieceType::O, 4, 18);
        assert!(!collides(&piece, &board, 0, 0));
        assert!(collides(&piece, &board, 0, 1));
    }

    #[test]
    fn side_breach() {
        let board = Board::new();
        let left = piece_at(PieceType::O, 0, 5);
        assert!(collides(&left, &board, -1, 0));
        let right = piece_at(PieceType::O, 8, 5);
        assert!(collides(&right, &board, 1, 0));
        assert!(!collides(&right, &board, -1, 0));
    }

    #[test]
    fn empty_matrix_columns_may_hang_outside() {
        let board = Board::new();
        // Column 0 of the vertical I is empty
        let piece = piece_at(PieceType::I, -1, 0);
        assert!(!collides(&piece, &board, 0, 0));
        assert!(collides(&piece, &board, -1, 0));
    }

    #[test]
    fn occupied_cell_blocks() {
        let mut board = Board::new();
        board.set(5, 10, Cell::Filled(PieceType::Z));
        let piece = piece_at(PieceType::O, 4, 8);
        assert!(!collides(&piece, &board, 0, 0));
        assert!(collides(&piece, &board, 0, 1));
    }

    #[test]
    fn rows_above_field_are_not_checked_against_board() {
        let mut board = Board::new();
        for x in 0..10 {
            board.set(x, 0, Cell::Filled(PieceType::L));
        }
        let piece = piece_at(PieceType::O, 4, -2);
        assert!(!collides(&piece, &board, 0, 0));
        assert!(collides(&piece, &board, 0, 1));
        // Sides are still enforced above the field
        assert!(collides(&piece_at(PieceType::O, 9, -2), &board, 0, 0));
    }
}
