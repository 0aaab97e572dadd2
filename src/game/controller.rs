use log::debug;

use crate::game::board::Board;
use crate::game::collision::collides;
use crate::game::piece::Piece;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece moved down one row.
    Moved,
    /// Resting on something below the top row; ready to merge.
    Landed,
    /// Cannot fall while still at the spawn row.
    Blocked,
}

pub fn move_horizontal(piece: &mut Piece, board: &Board, dir: i32) -> bool {
    if collides(piece, board, dir, 0) {
        return false;
    }
    piece.x += dir;
    true
}

/// Rotate clockwise, kicking sideways x+1, x-1, x+2, ... until the shape
/// fits or the next kick step would exceed the rotated width. Nothing is
/// committed unless a fit is found.
pub fn rotate(piece: &mut Piece, board: &Board) -> bool {
    let mut rotated = piece.rotate_clockwise();
    let width = rotated.width() as i32;
    let mut offset: i32 = 1;

    while collides(&rotated, board, 0, 0) {
        rotated.x += offset;
        offset = -(offset + offset.signum());
        if offset > width {
            debug!("rotation of {:?} at x={} abandoned", piece.piece_type, piece.x);
            return false;
        }
    }

    *piece = rotated;
    true
}

pub fn drop_one_row(piece: &mut Piece, board: &Board) -> DropOutcome {
    if !collides(piece, board, 0, 1) {
        piece.y += 1;
        return DropOutcome::Moved;
    }
    if piece.y <= 0 {
        DropOutcome::Blocked
    } else {
        DropOutcome::Landed
    }
}
