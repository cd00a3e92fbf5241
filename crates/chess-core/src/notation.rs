//! Display strings for adapters: piece glyphs, move-log lines, and status.
//!
//! Nothing in the rules or the game state depends on this module.

use crate::history::MoveRecord;
use crate::piece::{Piece, PieceKind};
use crate::side::Side;

/// Which characters to draw pieces with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GlyphSet {
    /// Unicode chess symbols (♔ … ♟)
    #[default]
    Unicode,
    /// Letters: uppercase White, lowercase Black
    Ascii,
}

impl Piece {
    /// Returns the glyph for this piece in the given set.
    pub fn glyph(self, set: GlyphSet) -> char {
        match set {
            GlyphSet::Unicode => unicode_glyph(self),
            GlyphSet::Ascii => self.to_char(),
        }
    }

    /// Parses a Unicode chess symbol or an ASCII letter.
    pub fn from_glyph(c: char) -> Option<Piece> {
        Piece::from_char(c).or_else(|| {
            PieceKind::ALL
                .into_iter()
                .flat_map(|kind| Side::ALL.map(|side| Piece::new(kind, side)))
                .find(|&piece| unicode_glyph(piece) == c)
        })
    }
}

fn unicode_glyph(piece: Piece) -> char {
    match (piece.side, piece.kind) {
        (Side::White, PieceKind::King) => '♔',
        (Side::White, PieceKind::Queen) => '♕',
        (Side::White, PieceKind::Rook) => '♖',
        (Side::White, PieceKind::Bishop) => '♗',
        (Side::White, PieceKind::Knight) => '♘',
        (Side::White, PieceKind::Pawn) => '♙',
        (Side::Black, PieceKind::King) => '♚',
        (Side::Black, PieceKind::Queen) => '♛',
        (Side::Black, PieceKind::Rook) => '♜',
        (Side::Black, PieceKind::Bishop) => '♝',
        (Side::Black, PieceKind::Knight) => '♞',
        (Side::Black, PieceKind::Pawn) => '♟',
    }
}

/// Full move number for the record at 1-based position `ply` in the history.
///
/// White's and Black's moves share a number: plies 1 and 2 are move 1.
#[inline]
pub fn move_number(ply: usize) -> usize {
    ply.div_ceil(2)
}

/// Formats a move-log line, e.g. `1. ♙ e2 → e4` or `3. ♗ b5 → c6 (♞)`.
pub fn move_log_line(ply: usize, record: &MoveRecord, set: GlyphSet) -> String {
    let mut line = format!(
        "{}. {} {} → {}",
        move_number(ply),
        record.piece.glyph(set),
        record.from,
        record.to
    );
    if let Some(captured) = record.captured {
        line.push_str(&format!(" ({})", captured.glyph(set)));
    }
    line
}

/// Status line for the side to move, e.g. `White's turn`.
pub fn status_text(side_to_move: Side) -> String {
    format!("{side_to_move}'s turn")
}

/// Joins captured pieces with spaces.
pub fn captured_text(pieces: &[Piece], set: GlyphSet) -> String {
    pieces
        .iter()
        .map(|p| p.glyph(set).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::Square;

    #[test]
    fn test_glyph_roundtrip() {
        for kind in PieceKind::ALL {
            for side in Side::ALL {
                let piece = Piece::new(kind, side);
                assert_eq!(Piece::from_glyph(piece.glyph(GlyphSet::Unicode)), Some(piece));
                assert_eq!(Piece::from_glyph(piece.glyph(GlyphSet::Ascii)), Some(piece));
            }
        }
        assert_eq!(Piece::from_glyph('?'), None);
    }

    #[test]
    fn test_move_number() {
        assert_eq!(move_number(1), 1);
        assert_eq!(move_number(2), 1);
        assert_eq!(move_number(3), 2);
        assert_eq!(move_number(10), 5);
    }

    #[test]
    fn test_move_log_line() {
        let quiet = MoveRecord {
            from: Square::E2,
            to: Square::E4,
            piece: Piece::new(PieceKind::Pawn, Side::White),
            captured: None,
        };
        assert_eq!(move_log_line(1, &quiet, GlyphSet::Unicode), "1. ♙ e2 → e4");
        assert_eq!(move_log_line(1, &quiet, GlyphSet::Ascii), "1. P e2 → e4");

        let capture = MoveRecord {
            from: Square::B5,
            to: Square::C6,
            piece: Piece::new(PieceKind::Bishop, Side::White),
            captured: Some(Piece::new(PieceKind::Knight, Side::Black)),
        };
        assert_eq!(
            move_log_line(5, &capture, GlyphSet::Unicode),
            "3. ♗ b5 → c6 (♞)"
        );
    }

    #[test]
    fn test_status_and_captured_text() {
        assert_eq!(status_text(Side::White), "White's turn");
        assert_eq!(status_text(Side::Black), "Black's turn");

        let pieces = [
            Piece::new(PieceKind::Pawn, Side::Black),
            Piece::new(PieceKind::Rook, Side::Black),
        ];
        assert_eq!(captured_text(&pieces, GlyphSet::Unicode), "♟ ♜");
        assert_eq!(captured_text(&pieces, GlyphSet::Ascii), "p r");
        assert_eq!(captured_text(&[], GlyphSet::Ascii), "");
    }
}
