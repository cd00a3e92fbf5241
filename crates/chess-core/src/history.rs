//! Move records and the history stack used for undo.

use crate::piece::Piece;
use crate::side::Side;
use crate::square::Square;

/// An executed move, with enough information to reverse it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    /// The piece that moved.
    pub piece: Piece,
    /// The piece that stood on `to` before the move, if any.
    pub captured: Option<Piece>,
}

impl MoveRecord {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Side that made the move.
    #[inline]
    pub fn mover(&self) -> Side {
        self.piece.side
    }
}

/// Stack of executed moves, oldest first.
///
/// Records are only ever appended, or removed from the top by undo.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistoryLog {
    records: Vec<MoveRecord>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    /// Removes and returns the most recent record.
    pub fn pop(&mut self) -> Option<MoveRecord> {
        self.records.pop()
    }

    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn as_slice(&self) -> &[MoveRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MoveRecord> {
        self.records.iter()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl<'a> IntoIterator for &'a HistoryLog {
    type Item = &'a MoveRecord;
    type IntoIter = std::slice::Iter<'a, MoveRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::PieceKind;

    fn record(from: Square, to: Square, captured: Option<Piece>) -> MoveRecord {
        MoveRecord {
            from,
            to,
            piece: Piece::new(PieceKind::Rook, Side::White),
            captured,
        }
    }

    #[test]
    fn test_stack_discipline() {
        let mut log = HistoryLog::new();
        assert!(log.pop().is_none());

        let first = record(Square::A1, Square::A4, None);
        let second = record(
            Square::A4,
            Square::A7,
            Some(Piece::new(PieceKind::Pawn, Side::Black)),
        );
        log.push(first);
        log.push(second);

        assert_eq!(log.len(), 2);
        assert_eq!(log.last(), Some(&second));
        assert_eq!(log.pop(), Some(second));
        assert_eq!(log.as_slice(), &[first]);
        assert_eq!(log.pop(), Some(first));
        assert!(log.is_empty());
    }

    #[test]
    fn test_record_accessors() {
        let quiet = record(Square::A1, Square::A4, None);
        assert!(!quiet.is_capture());
        assert_eq!(quiet.mover(), Side::White);

        let capture = record(
            Square::A1,
            Square::A8,
            Some(Piece::new(PieceKind::Rook, Side::Black)),
        );
        assert!(capture.is_capture());
    }
}
