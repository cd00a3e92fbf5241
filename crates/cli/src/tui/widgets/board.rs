//! Board widget for rendering the chess board.

use chess_core::history::MoveRecord;
use chess_core::side::Side;
use chess_core::square::{BOARD_SIZE, FILE_LABELS, RANK_LABELS, Square};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::game::GameView;

/// Widget for rendering the chess board.
pub struct BoardWidget<'a> {
    view: &'a GameView,
    /// Cursor position (row, col)
    cursor: (usize, usize),
    last_move: Option<MoveRecord>,
}

impl<'a> BoardWidget<'a> {
    /// Creates a new board widget.
    pub fn new(view: &'a GameView) -> Self {
        Self {
            view,
            cursor: (0, 0),
            last_move: None,
        }
    }

    /// Sets the cursor position.
    pub fn cursor(mut self, row: usize, col: usize) -> Self {
        self.cursor = (row, col);
        self
    }

    /// Sets the last move.
    pub fn last_move(mut self, record: Option<MoveRecord>) -> Self {
        self.last_move = record;
        self
    }
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Minimum size check
        if area.width < 36 || area.height < 19 {
            return;
        }

        // File labels
        let mut header = vec![Span::raw("    ")];
        for (i, file) in FILE_LABELS.iter().enumerate() {
            if i > 0 {
                header.push(Span::raw("   "));
            }
            header.push(Span::styled(
                file.to_string(),
                Style::default().fg(Color::Cyan),
            ));
        }
        buf.set_line(area.x, area.y, &Line::from(header), area.width);

        let top_border = "  ┌───┬───┬───┬───┬───┬───┬───┬───┐";
        buf.set_string(area.x, area.y + 1, top_border, Style::default());

        let selected = self.view.selection().square();

        for row in 0..BOARD_SIZE {
            let y = area.y + 2 + (row as u16) * 2;

            let rank = format!("{} │", RANK_LABELS[row]);
            buf.set_string(area.x, y, &rank, Style::default().fg(Color::Cyan));

            for col in 0..BOARD_SIZE {
                let sq = Square::from_usize_unchecked(row * BOARD_SIZE + col);
                let is_highlighted = self.view.is_highlighted(sq);

                let (content, mut style) = match (self.view.glyph(sq), self.view.board().get(sq)) {
                    (Some(glyph), Some(piece)) => {
                        let fg = match piece.side {
                            Side::White => Color::Yellow,
                            Side::Black => Color::Green,
                        };
                        (format!(" {glyph} "), Style::default().fg(fg))
                    }
                    _ if is_highlighted => (" · ".to_string(), Style::default().fg(Color::Cyan)),
                    _ => ("   ".to_string(), Style::default()),
                };

                if self
                    .last_move
                    .is_some_and(|record| record.from == sq || record.to == sq)
                {
                    style = style.bg(Color::Rgb(50, 50, 80));
                }
                if is_highlighted && self.view.board().get(sq).is_some() {
                    style = style.bg(Color::Red);
                }
                if selected == Some(sq) {
                    style = style.bg(Color::Blue).add_modifier(Modifier::BOLD);
                }
                if self.cursor == (row, col) {
                    style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
                }

                let x = area.x + 3 + (col as u16) * 4;
                buf.set_string(x, y, &content, style);

                if col < BOARD_SIZE - 1 {
                    buf.set_string(x + 3, y, "│", Style::default());
                }
            }

            // Right border
            buf.set_string(area.x + 34, y, "│", Style::default());

            if row < BOARD_SIZE - 1 {
                let separator = "  ├───┼───┼───┼───┼───┼───┼───┼───┤";
                buf.set_string(area.x, y + 1, separator, Style::default());
            }
        }

        let bottom_border = "  └───┴───┴───┴───┴───┴───┴───┴───┘";
        buf.set_string(area.x, area.y + 17, bottom_border, Style::default());

        if let Some(cursor_sq) = Square::from_row_col(self.cursor.0, self.cursor.1) {
            let cursor_info = format!("  Cursor: {cursor_sq}");
            buf.set_string(
                area.x,
                area.y + 18,
                &cursor_info,
                Style::default().fg(Color::Cyan),
            );
        }
    }
}
