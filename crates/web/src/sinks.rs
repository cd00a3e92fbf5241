//! Display callbacks supplied from JavaScript.
//!
//! The page passes an object whose function properties receive updates:
//!
//! ```js
//! new Game({
//!   cell(row, col, glyph, mark) { ... },  // mark: "", "selected", "target", "capture"
//!   status(text) { ... },
//!   captured(side, text) { ... },          // side: "white" | "black"
//!   appendLog(line) { ... },
//!   popLog() { ... },
//!   clearLog() { ... },
//! });
//! ```
//!
//! Missing properties are skipped. Functions are called with the object as
//! `this`.

use chess_core::board::Board;
use chess_core::history::MoveRecord;
use chess_core::notation::{self, GlyphSet};
use chess_core::piece::Piece;
use chess_core::presenter::Presenter;
use chess_core::selection::Selection;
use chess_core::side::Side;
use chess_core::square::Square;
use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

/// How a cell should be decorated.
pub fn cell_mark(board: &Board, selection: Selection, highlights: &[Square], sq: Square) -> &'static str {
    if selection.square() == Some(sq) {
        "selected"
    } else if highlights.contains(&sq) {
        if board.is_empty(sq) { "target" } else { "capture" }
    } else {
        ""
    }
}

/// Lowercase side name used across the JS boundary.
pub fn side_name(side: Side) -> &'static str {
    match side {
        Side::White => "white",
        Side::Black => "black",
    }
}

/// Parses `white` / `black`, case-insensitively.
pub fn parse_side(side: &str) -> Result<Side, String> {
    match side.to_ascii_lowercase().as_str() {
        "white" | "w" => Ok(Side::White),
        "black" | "b" => Ok(Side::Black),
        _ => Err(format!("unknown side: {side}")),
    }
}

/// Presenter forwarding to JS callbacks.
pub struct JsSinks {
    this: JsValue,
    cell: Option<Function>,
    status: Option<Function>,
    captured: Option<Function>,
    append_log: Option<Function>,
    pop_log: Option<Function>,
    clear_log: Option<Function>,
    glyphs: GlyphSet,
}

impl JsSinks {
    pub fn new(target: Option<&Object>, glyphs: GlyphSet) -> Self {
        let lookup = |name: &str| -> Option<Function> {
            let target = target?;
            Reflect::get(target, &JsValue::from_str(name))
                .ok()?
                .dyn_into::<Function>()
                .ok()
        };

        Self {
            this: target.map_or(JsValue::UNDEFINED, |t| t.clone().into()),
            cell: lookup("cell"),
            status: lookup("status"),
            captured: lookup("captured"),
            append_log: lookup("appendLog"),
            pop_log: lookup("popLog"),
            clear_log: lookup("clearLog"),
            glyphs,
        }
    }

    pub fn glyphs(&self) -> GlyphSet {
        self.glyphs
    }

    pub fn set_glyphs(&mut self, glyphs: GlyphSet) {
        self.glyphs = glyphs;
    }

    fn call(&self, sink: &Option<Function>, args: &[JsValue]) {
        let Some(func) = sink else {
            return;
        };
        let args: Array = args.iter().collect();
        if let Err(err) = func.apply(&self.this, &args) {
            log::warn!("display callback failed: {err:?}");
        }
    }
}

impl Presenter for JsSinks {
    fn render_board(&mut self, board: &Board, selection: Selection, highlights: &[Square]) {
        if self.cell.is_none() {
            return;
        }
        for sq in Square::iter() {
            let glyph = board
                .get(sq)
                .map(|p| p.glyph(self.glyphs).to_string())
                .unwrap_or_default();
            let mark = cell_mark(board, selection, highlights, sq);
            self.call(
                &self.cell,
                &[
                    JsValue::from(sq.row() as u32),
                    JsValue::from(sq.col() as u32),
                    JsValue::from_str(&glyph),
                    JsValue::from_str(mark),
                ],
            );
        }
    }

    fn render_status(&mut self, side_to_move: Side) {
        let text = notation::status_text(side_to_move);
        self.call(&self.status, &[JsValue::from_str(&text)]);
    }

    fn render_captured(&mut self, side: Side, pieces: &[Piece]) {
        let text = notation::captured_text(pieces, self.glyphs);
        self.call(
            &self.captured,
            &[JsValue::from_str(side_name(side)), JsValue::from_str(&text)],
        );
    }

    fn append_move_log(&mut self, ply: usize, record: &MoveRecord) {
        let line = notation::move_log_line(ply, record, self.glyphs);
        self.call(&self.append_log, &[JsValue::from_str(&line)]);
    }

    fn pop_move_log(&mut self) {
        self.call(&self.pop_log, &[]);
    }

    fn clear_move_log(&mut self) {
        self.call(&self.clear_log, &[]);
    }
}
