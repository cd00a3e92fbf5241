//! Display-side view of the game for the terminal front ends.
//!
//! `GameView` is the CLI's [`Presenter`]: the core pushes board, status,
//! captures, and move-log updates into it, and the line mode and the TUI
//! draw from it.

use chess_core::board::Board;
use chess_core::game_state::GameState;
use chess_core::history::MoveRecord;
use chess_core::notation::{self, GlyphSet};
use chess_core::piece::Piece;
use chess_core::presenter::{self, Presenter};
use chess_core::selection::Selection;
use chess_core::side::Side;
use chess_core::square::{BOARD_SIZE, RANK_LABELS, Square};
use colored::{ColoredString, Colorize};

/// Display settings chosen on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub glyphs: GlyphSet,
    /// Mark the legal destinations of the selected piece
    pub show_highlights: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            glyphs: GlyphSet::Unicode,
            show_highlights: true,
        }
    }
}

/// What the terminal currently shows.
#[derive(Debug, Clone)]
pub struct GameView {
    options: DisplayOptions,
    board: Board,
    selection: Selection,
    highlights: Vec<Square>,
    side_to_move: Side,
    captured: [Vec<Piece>; 2],
    move_log: Vec<String>,
}

impl GameView {
    /// Creates a view and paints the whole of `game` into it.
    pub fn new(game: &GameState, options: DisplayOptions) -> Self {
        let mut view = Self {
            options,
            board: Board::empty(),
            selection: Selection::Idle,
            highlights: Vec::new(),
            side_to_move: Side::White,
            captured: [Vec::new(), Vec::new()],
            move_log: Vec::new(),
        };
        presenter::render_all(game, &mut view);
        view
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Whether `sq` should be drawn as a destination of the selected piece.
    pub fn is_highlighted(&self, sq: Square) -> bool {
        self.options.show_highlights && self.highlights.contains(&sq)
    }

    /// Glyph for the piece on `sq`, if any.
    pub fn glyph(&self, sq: Square) -> Option<char> {
        self.board.get(sq).map(|p| p.glyph(self.options.glyphs))
    }

    pub fn status(&self) -> String {
        notation::status_text(self.side_to_move)
    }

    /// Space-separated glyphs of the pieces `side` has taken.
    pub fn captured_text(&self, side: Side) -> String {
        notation::captured_text(&self.captured[side.index()], self.options.glyphs)
    }

    pub fn move_log(&self) -> &[String] {
        &self.move_log
    }

    /// Returns a plain text representation of the board.
    ///
    /// Empty destinations of the selected piece are shown as `.`.
    pub fn board_string(&self) -> String {
        let mut result = String::new();

        result.push_str("   a b c d e f g h\n");
        result.push_str("  +-+-+-+-+-+-+-+-+\n");

        for row in 0..BOARD_SIZE {
            let mut line = format!("{} |", RANK_LABELS[row]);
            for col in 0..BOARD_SIZE {
                let sq = Square::from_usize_unchecked(row * BOARD_SIZE + col);
                let symbol = match self.glyph(sq) {
                    Some(glyph) => glyph,
                    None if self.is_highlighted(sq) => '.',
                    None => ' ',
                };
                line.push(symbol);
                line.push('|');
            }

            match row {
                0 => line.push_str(&format!(" {}", self.status())),
                1 => {
                    line.push_str(" White captured: ");
                    line.push_str(&self.captured_text(Side::White));
                }
                2 => {
                    line.push_str(" Black captured: ");
                    line.push_str(&self.captured_text(Side::Black));
                }
                _ => {}
            }

            result.push_str(line.trim_end());
            result.push('\n');
            if row < BOARD_SIZE - 1 {
                result.push_str("  +-+-+-+-+-+-+-+-+\n");
            }
        }

        result.push_str("  +-+-+-+-+-+-+-+-+\n");
        result
    }

    /// Prints a colored representation of the board to the terminal.
    pub fn print(&self) {
        println!("      a   b   c   d   e   f   g   h");
        println!("    ┌───┬───┬───┬───┬───┬───┬───┬───┐");

        for row in 0..BOARD_SIZE {
            print!("  {} │", RANK_LABELS[row]);
            for col in 0..BOARD_SIZE {
                let sq = Square::from_usize_unchecked(row * BOARD_SIZE + col);
                print!("{}│", self.colored_cell(sq));
            }

            match row {
                2 => println!("   {}", self.colored_status()),
                3 => println!("   White captured: {}", self.captured_text(Side::White)),
                4 => println!("   Black captured: {}", self.captured_text(Side::Black)),
                6 => match self.move_log.last() {
                    Some(line) => println!("   Last: {}", line.bright_magenta()),
                    None => println!(),
                },
                _ => println!(),
            }

            if row < BOARD_SIZE - 1 {
                println!("    ├───┼───┼───┼───┼───┼───┼───┼───┤");
            }
        }

        println!("    └───┴───┴───┴───┴───┴───┴───┴───┘");
    }

    fn colored_cell(&self, sq: Square) -> ColoredString {
        let piece = self.board.get(sq);
        let highlighted = self.is_highlighted(sq);

        let cell = match piece {
            Some(p) => {
                let text = format!(" {} ", p.glyph(self.options.glyphs));
                match p.side {
                    Side::White => text.as_str().bright_yellow(),
                    Side::Black => text.as_str().bright_green(),
                }
            }
            None if highlighted => " · ".bright_cyan(),
            None => "   ".normal(),
        };

        if self.selection.square() == Some(sq) {
            cell.on_blue()
        } else if highlighted && piece.is_some() {
            cell.on_red()
        } else {
            cell
        }
    }

    fn colored_status(&self) -> ColoredString {
        match self.side_to_move {
            Side::White => self.status().as_str().bright_yellow(),
            Side::Black => self.status().as_str().bright_green(),
        }
    }
}

impl Presenter for GameView {
    fn render_board(&mut self, board: &Board, selection: Selection, highlights: &[Square]) {
        self.board = *board;
        self.selection = selection;
        self.highlights = highlights.to_vec();
    }

    fn render_status(&mut self, side_to_move: Side) {
        self.side_to_move = side_to_move;
    }

    fn render_captured(&mut self, side: Side, pieces: &[Piece]) {
        self.captured[side.index()] = pieces.to_vec();
    }

    fn append_move_log(&mut self, ply: usize, record: &MoveRecord) {
        self.move_log
            .push(notation::move_log_line(ply, record, self.options.glyphs));
    }

    fn pop_move_log(&mut self) {
        self.move_log.pop();
    }

    fn clear_move_log(&mut self) {
        self.move_log.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::presenter::{InputEvent, dispatch};

    fn ascii() -> DisplayOptions {
        DisplayOptions {
            glyphs: GlyphSet::Ascii,
            show_highlights: true,
        }
    }

    fn click(game: &mut GameState, view: &mut GameView, sq: Square) {
        dispatch(game, InputEvent::CellClicked(sq), view);
    }

    #[test]
    fn test_initial_board_string() {
        let game = GameState::new();
        let view = GameView::new(&game, ascii());
        let text = view.board_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 18);
        assert_eq!(lines[0], "   a b c d e f g h");
        assert_eq!(lines[2], "8 |r|n|b|q|k|b|n|r| White's turn");
        assert_eq!(lines[4], "7 |p|p|p|p|p|p|p|p| White captured:");
        assert_eq!(lines[6], "6 | | | | | | | | | Black captured:");
        assert_eq!(lines[16], "1 |R|N|B|Q|K|B|N|R|");
    }

    #[test]
    fn test_selection_marks_destinations() {
        let mut game = GameState::new();
        let mut view = GameView::new(&game, ascii());
        click(&mut game, &mut view, Square::E2);

        assert_eq!(view.selection(), Selection::Selected(Square::E2));
        let text = view.board_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[10], "4 | | | | |.| | | |");
        assert_eq!(lines[12], "3 | | | | |.| | | |");
    }

    #[test]
    fn test_highlights_can_be_hidden() {
        let mut game = GameState::new();
        let options = DisplayOptions {
            show_highlights: false,
            ..ascii()
        };
        let mut view = GameView::new(&game, options);
        click(&mut game, &mut view, Square::E2);

        assert!(!view.is_highlighted(Square::E4));
        assert!(!view.board_string().contains('.'));
    }

    #[test]
    fn test_move_updates_log_and_captures() {
        let mut game = GameState::new();
        let mut view = GameView::new(&game, ascii());
        for sq in [Square::E2, Square::E4, Square::D7, Square::D5, Square::E4, Square::D5] {
            click(&mut game, &mut view, sq);
        }

        assert_eq!(
            view.move_log(),
            &["1. P e2 → e4", "1. p d7 → d5", "2. P e4 → d5 (p)"]
        );
        assert_eq!(view.captured_text(Side::White), "p");
        assert_eq!(view.status(), "Black's turn");
        assert_eq!(view.glyph(Square::D5), Some('P'));

        dispatch(&mut game, InputEvent::UndoRequested, &mut view);
        assert_eq!(view.move_log().len(), 2);
        assert_eq!(view.captured_text(Side::White), "");
        assert_eq!(view.side_to_move(), Side::White);
    }

    #[test]
    fn test_view_of_game_in_progress() {
        let mut game = GameState::new();
        game.attempt_move(Square::G1, Square::F3).unwrap();
        let view = GameView::new(&game, DisplayOptions::default());
        assert_eq!(view.move_log(), &["1. ♘ g1 → f3"]);
        assert_eq!(view.glyph(Square::F3), Some('♘'));
        assert_eq!(view.board(), game.board());
    }
}
