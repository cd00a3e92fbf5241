//! Pieces captured by each side, in capture order.

use crate::piece::Piece;
use crate::side::Side;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CapturedTally {
    by_side: [Vec<Piece>; 2],
}

impl CapturedTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pieces captured by `side`, oldest first.
    pub fn pieces(&self, side: Side) -> &[Piece] {
        &self.by_side[side.index()]
    }

    /// Appends a piece taken by `side`.
    pub fn record(&mut self, side: Side, piece: Piece) {
        self.by_side[side.index()].push(piece);
    }

    /// Removes the most recently appended occurrence of `piece` from the
    /// list of `side`.
    ///
    /// # Returns
    ///
    /// `true` if an entry was removed.
    pub fn remove_last(&mut self, side: Side, piece: Piece) -> bool {
        let pieces = &mut self.by_side[side.index()];
        match pieces.iter().rposition(|&p| p == piece) {
            Some(index) => {
                pieces.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.by_side.iter().all(Vec::is_empty)
    }

    pub fn clear(&mut self) {
        self.by_side.iter_mut().for_each(Vec::clear);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::PieceKind;

    const BLACK_PAWN: Piece = Piece::new(PieceKind::Pawn, Side::Black);
    const BLACK_KNIGHT: Piece = Piece::new(PieceKind::Knight, Side::Black);

    #[test]
    fn test_record_keeps_order_per_side() {
        let mut tally = CapturedTally::new();
        tally.record(Side::White, BLACK_PAWN);
        tally.record(Side::White, BLACK_KNIGHT);
        tally.record(Side::Black, Piece::new(PieceKind::Queen, Side::White));

        assert_eq!(tally.pieces(Side::White), &[BLACK_PAWN, BLACK_KNIGHT]);
        assert_eq!(tally.pieces(Side::Black).len(), 1);
    }

    #[test]
    fn test_remove_last_takes_latest_match() {
        let mut tally = CapturedTally::new();
        tally.record(Side::White, BLACK_PAWN);
        tally.record(Side::White, BLACK_KNIGHT);
        tally.record(Side::White, BLACK_PAWN);

        assert!(tally.remove_last(Side::White, BLACK_PAWN));
        assert_eq!(tally.pieces(Side::White), &[BLACK_PAWN, BLACK_KNIGHT]);
        assert!(!tally.remove_last(Side::Black, BLACK_PAWN));
    }

    #[test]
    fn test_clear() {
        let mut tally = CapturedTally::new();
        tally.record(Side::Black, BLACK_PAWN);
        assert!(!tally.is_empty());
        tally.clear();
        assert!(tally.is_empty());
    }
}
