use std::fmt;

/// Represents one of the two sides of a chess game.
///
/// The `Side` enum has two variants:
///
/// * `White` - Moves first, starts on rows 6 and 7 (ranks 2 and 1).
/// * `Black` - Starts on rows 0 and 1 (ranks 8 and 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// Both sides in display order.
    pub const ALL: [Side; 2] = [Side::White, Side::Black];

    /// Returns the opposite side.
    ///
    /// # Returns
    ///
    /// * `Side::Black` for `Side::White`
    /// * `Side::White` for `Side::Black`
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Returns the capitalized name of the side.
    pub fn as_str(self) -> &'static str {
        match self {
            Side::White => "White",
            Side::Black => "Black",
        }
    }

    /// Returns a stable index (White = 0, Black = 1).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Row delta of a single pawn step for this side.
    ///
    /// White pawns walk toward row 0, Black pawns toward row 7.
    #[inline]
    pub(crate) fn pawn_direction(self) -> isize {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    /// Row from which this side's pawns may advance two squares.
    #[inline]
    pub(crate) fn pawn_home_row(self) -> usize {
        match self {
            Side::White => 6,
            Side::Black => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Side::White.opposite(), Side::Black);
        assert_eq!(Side::Black.opposite(), Side::White);
        assert_eq!(Side::White.opposite().opposite(), Side::White);
    }

    #[test]
    fn test_pawn_geometry() {
        assert_eq!(Side::White.pawn_direction(), -1);
        assert_eq!(Side::Black.pawn_direction(), 1);
        assert_eq!(Side::White.pawn_home_row(), 6);
        assert_eq!(Side::Black.pawn_home_row(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(Side::White.to_string(), "White");
        assert_eq!(Side::Black.to_string(), "Black");
        assert_eq!(Side::ALL.map(Side::index), [0, 1]);
    }
}
