use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Represents a square on a chess board, ranging from A8 to H1.
///
/// Squares are addressed by `(row, col)` as the board is drawn from White's
/// point of view: row 0 is rank 8 (Black's back rank) and column 0 is file A.
/// The board is indexed as follows:
///
/// ```text
///      A  B  C  D  E  F  G  H
/// 8   00 01 02 03 04 05 06 07
/// 7   08 09 10 11 12 13 14 15
/// 6   16 17 18 19 20 21 22 23
/// 5   24 25 26 27 28 29 30 31
/// 4   32 33 34 35 36 37 38 39
/// 3   40 41 42 43 44 45 46 47
/// 2   48 49 50 51 52 53 54 55
/// 1   56 57 58 59 60 61 62 63
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
#[rustfmt::skip]
pub enum Square {
    A8, B8, C8, D8, E8, F8, G8, H8,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A1, B1, C1, D1, E1, F1, G1, H1,
}

/// Constants for board dimensions
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// File labels, left to right.
pub const FILE_LABELS: [char; BOARD_SIZE] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// Rank labels, top (row 0) to bottom (row 7).
pub const RANK_LABELS: [char; BOARD_SIZE] = ['8', '7', '6', '5', '4', '3', '2', '1'];

impl Square {
    /// Converts the `Square` into a `usize` index (0-63).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts a `usize` value into a `Square` enum without bounds checking.
    ///
    /// # Arguments
    ///
    /// * `index` - The `usize` value to convert (0-63).
    #[inline]
    pub fn from_usize_unchecked(index: usize) -> Square {
        debug_assert!(
            index < TOTAL_SQUARES,
            "Index out of bounds for Square enum. index: {index:?}"
        );
        // SAFETY: `Square` is `repr(u8)` with 64 contiguous variants starting at 0.
        unsafe { std::mem::transmute(index as u8) }
    }

    /// Safely converts a `usize` value into a `Square` enum.
    ///
    /// # Returns
    ///
    /// `Some(Square)` if the index is in 0-63, `None` otherwise.
    #[inline]
    pub fn from_usize(index: usize) -> Option<Square> {
        (index < TOTAL_SQUARES).then(|| Square::from_usize_unchecked(index))
    }

    /// Creates a `Square` from row and column coordinates.
    ///
    /// # Returns
    ///
    /// `Some(Square)` if both coordinates are in 0-7, `None` otherwise.
    #[inline]
    pub fn from_row_col(row: usize, col: usize) -> Option<Square> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square::from_usize_unchecked(row * BOARD_SIZE + col))
        } else {
            None
        }
    }

    /// Returns the row (0 = rank 8, 7 = rank 1).
    #[inline]
    pub fn row(self) -> usize {
        self.index() / BOARD_SIZE
    }

    /// Returns the column (0 = file A, 7 = file H).
    #[inline]
    pub fn col(self) -> usize {
        self.index() % BOARD_SIZE
    }

    /// Returns the square shifted by the given row and column deltas, if it is
    /// still on the board.
    #[inline]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Square> {
        let row = self.row().checked_add_signed(d_row)?;
        let col = self.col().checked_add_signed(d_col)?;
        Square::from_row_col(row, col)
    }

    /// Returns an iterator over all 64 squares, A8 first and H1 last.
    #[inline]
    pub fn iter() -> impl Iterator<Item = Square> {
        (0..TOTAL_SQUARES).map(Square::from_usize_unchecked)
    }
}

/// Error type for square-related operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareError {
    /// Invalid square string format (must be 2 characters)
    #[error("Invalid square format: must be 2 characters (e.g., 'e2')")]
    InvalidFormat,
    /// Invalid file character (must be a-h or A-H)
    #[error("Invalid file '{0}': must be a-h or A-H")]
    InvalidFile(char),
    /// Invalid rank character (must be 1-8)
    #[error("Invalid rank '{0}': must be 1-8")]
    InvalidRank(char),
}

impl FromStr for Square {
    type Err = SquareError;

    /// Parses a string in algebraic notation (e.g., "e2", "H8").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(SquareError::InvalidFormat);
        };

        let file = FILE_LABELS
            .iter()
            .position(|&f| f == file_char.to_ascii_lowercase())
            .ok_or(SquareError::InvalidFile(file_char))?;
        let row = RANK_LABELS
            .iter()
            .position(|&r| r == rank_char)
            .ok_or(SquareError::InvalidRank(rank_char))?;

        Ok(Square::from_usize_unchecked(row * BOARD_SIZE + file))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", FILE_LABELS[self.col()], RANK_LABELS[self.row()])
    }
}
