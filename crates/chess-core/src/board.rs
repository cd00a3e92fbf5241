//! Chess board storage.
//!
//! The board is plain storage: it never checks whether a write makes sense.
//! Movement rules live in [`crate::rules`].

use std::fmt;

use thiserror::Error;

use crate::piece::{Piece, PieceKind};
use crate::side::Side;
use crate::square::{BOARD_SIZE, Square, TOTAL_SQUARES};

/// Back-rank layout from file A to file H.
const BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Character used for an empty square in board strings.
pub const EMPTY_CHAR: char = '-';

/// Represents an 8x8 chess board.
///
/// Each of the 64 cells, indexed by [`Square`], is either empty or holds a
/// [`Piece`]. There is no invariant on piece counts: a board without kings, or
/// with several, is as valid as the starting position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; TOTAL_SQUARES],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Error returned when parsing a board string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board string has {0} squares, expected 64")]
    WrongLength(usize),
    #[error("unknown piece character '{0}'")]
    InvalidPiece(char),
}

impl Board {
    /// Creates a board in the standard starting position.
    pub fn new() -> Board {
        let mut board = Board::empty();
        board.reset();
        board
    }

    /// Creates a board with no pieces.
    pub const fn empty() -> Board {
        Board {
            cells: [None; TOTAL_SQUARES],
        }
    }

    /// Restores the standard starting position.
    pub fn reset(&mut self) {
        self.cells = [None; TOTAL_SQUARES];
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            self.cells[col] = Some(Piece::new(kind, Side::Black));
            self.cells[BOARD_SIZE + col] = Some(Piece::new(PieceKind::Pawn, Side::Black));
            self.cells[6 * BOARD_SIZE + col] = Some(Piece::new(PieceKind::Pawn, Side::White));
            self.cells[7 * BOARD_SIZE + col] = Some(Piece::new(kind, Side::White));
        }
    }

    /// Creates a board from a 64-character string.
    ///
    /// Row 0 (rank 8) comes first. Uppercase letters are White pieces,
    /// lowercase letters Black pieces, and `-` is an empty square. Whitespace
    /// is ignored so the string may be laid out as a grid.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] if the string does not describe exactly 64
    /// squares or contains an unknown character.
    pub fn from_string(board_string: &str) -> Result<Board, BoardError> {
        let mut board = Board::empty();
        let mut count = 0;
        for c in board_string.chars().filter(|c| !c.is_whitespace()) {
            if count < TOTAL_SQUARES {
                board.cells[count] = match c {
                    EMPTY_CHAR => None,
                    _ => Some(Piece::from_char(c).ok_or(BoardError::InvalidPiece(c))?),
                };
            }
            count += 1;
        }
        if count != TOTAL_SQUARES {
            return Err(BoardError::WrongLength(count));
        }
        Ok(board)
    }

    /// Returns the piece at `sq`, if any.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    /// Overwrites the cell at `sq`.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.cells[sq.index()] = piece;
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_none()
    }

    /// Iterates over occupied squares in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.map(|piece| (Square::from_usize_unchecked(i), piece)))
    }

    /// Returns the board as eight lines of eight characters.
    pub fn to_string_as_board(&self) -> String {
        let mut s = String::with_capacity(TOTAL_SQUARES + BOARD_SIZE);
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 && i % BOARD_SIZE == 0 {
                s.push('\n');
            }
            s.push(cell.map_or(EMPTY_CHAR, Piece::to_char));
        }
        s
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_as_board())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "rnbqkbnr\
                         pppppppp\
                         --------\
                         --------\
                         --------\
                         --------\
                         PPPPPPPP\
                         RNBQKBNR";

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert_eq!(board, Board::default());
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(
            board.get(Square::E1),
            Some(Piece::new(PieceKind::King, Side::White))
        );
        assert_eq!(
            board.get(Square::D8),
            Some(Piece::new(PieceKind::Queen, Side::Black))
        );
        assert_eq!(
            board.get(Square::E2),
            Some(Piece::new(PieceKind::Pawn, Side::White))
        );
        assert!(board.is_empty(Square::E4));
    }

    #[test]
    fn test_from_string() {
        assert_eq!(Board::from_string(START), Ok(Board::new()));

        let grid = "
            ----k---
            --------
            --------
            --------
            ----P---
            --------
            --------
            ----K---";
        let board = Board::from_string(grid).unwrap();
        assert_eq!(board.pieces().count(), 3);
        assert_eq!(
            board.get(Square::E4),
            Some(Piece::new(PieceKind::Pawn, Side::White))
        );
    }

    #[test]
    fn test_from_string_errors() {
        assert_eq!(Board::from_string("----"), Err(BoardError::WrongLength(4)));
        let too_long = format!("{START}-");
        assert_eq!(
            Board::from_string(&too_long),
            Err(BoardError::WrongLength(65))
        );
        let bad = START.replacen('q', "x", 1);
        assert_eq!(Board::from_string(&bad), Err(BoardError::InvalidPiece('x')));
    }

    #[test]
    fn test_set_and_reset() {
        let mut board = Board::new();
        board.set(Square::E4, board.get(Square::E2));
        board.set(Square::E2, None);
        assert!(board.is_empty(Square::E2));
        assert!(!board.is_empty(Square::E4));

        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_missing_king_is_storable() {
        let mut board = Board::new();
        board.set(Square::E1, None);
        board.set(Square::A4, Some(Piece::new(PieceKind::King, Side::Black)));
        assert_eq!(
            board
                .pieces()
                .filter(|(_, p)| p.kind == PieceKind::King)
                .count(),
            2
        );
    }

    #[test]
    fn test_display() {
        let text = Board::new().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "rnbqkbnr");
        assert_eq!(lines[2], "--------");
        assert_eq!(lines[7], "RNBQKBNR");
    }
}
