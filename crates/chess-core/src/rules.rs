//! Move legality.
//!
//! The rule set is deliberately partial. Moves are checked piece by piece
//! against the board geometry only: there is no notion of check, castling,
//! en passant, or promotion. Bishops and queens are not checked for pieces
//! standing on their path; only rooks scan the squares they cross.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::piece::PieceKind;
use crate::side::Side;
use crate::square::{Square, TOTAL_SQUARES};

/// Destinations reachable from one square.
pub type Destinations = ArrayVec<Square, TOTAL_SQUARES>;

/// Checks whether moving the piece on `from` to `to` is legal for `side`.
///
/// The destination must not hold a piece of `side`; an empty origin or a
/// null move is never legal. Beyond that, the piece's own movement rule
/// decides. Pawn direction follows the pawn's colour, not `side`.
pub fn is_legal_move(board: &Board, from: Square, to: Square, side: Side) -> bool {
    if from == to {
        return false;
    }
    let Some(piece) = board.get(from) else {
        return false;
    };
    if board.get(to).is_some_and(|target| target.side == side) {
        return false;
    }

    let d_row = to.row().abs_diff(from.row());
    let d_col = to.col().abs_diff(from.col());

    match piece.kind {
        PieceKind::Pawn => is_legal_pawn_move(board, from, to, piece.side),
        PieceKind::Rook => is_legal_rook_move(board, from, to),
        PieceKind::Bishop => d_row == d_col,
        PieceKind::Knight => matches!((d_row, d_col), (2, 1) | (1, 2)),
        PieceKind::Queen => d_row == d_col || d_row == 0 || d_col == 0,
        PieceKind::King => d_row <= 1 && d_col <= 1,
    }
}

/// Lists every square the piece on `from` may legally move to.
pub fn legal_destinations(board: &Board, from: Square, side: Side) -> Destinations {
    Square::iter()
        .filter(|&to| is_legal_move(board, from, to, side))
        .collect()
}

fn is_legal_pawn_move(board: &Board, from: Square, to: Square, pawn_side: Side) -> bool {
    let direction = pawn_side.pawn_direction();
    let forward = to.row() as isize - from.row() as isize;

    match to.col().abs_diff(from.col()) {
        0 if forward == direction => board.is_empty(to),
        0 if forward == 2 * direction && from.row() == pawn_side.pawn_home_row() => {
            // The intermediate square is on the board whenever the home-row
            // condition holds.
            from.offset(direction, 0)
                .is_some_and(|mid| board.is_empty(mid) && board.is_empty(to))
        }
        1 if forward == direction => !board.is_empty(to),
        _ => false,
    }
}

fn is_legal_rook_move(board: &Board, from: Square, to: Square) -> bool {
    if from.row() != to.row() && from.col() != to.col() {
        return false;
    }

    let step_row = (to.row() as isize - from.row() as isize).signum();
    let step_col = (to.col() as isize - from.col() as isize).signum();

    let mut current = from;
    while let Some(next) = current.offset(step_row, step_col) {
        if next == to {
            return true;
        }
        if !board.is_empty(next) {
            return false;
        }
        current = next;
    }
    false
}
