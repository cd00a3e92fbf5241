//! WebAssembly bindings: a two-player chess board driven by page clicks.

mod logger;
mod sinks;

use chess_core::game_state::GameState;
use chess_core::notation::GlyphSet;
use chess_core::presenter::{self, EventOutcome, InputEvent};
use chess_core::side::Side;
use chess_core::square::Square;
use js_sys::Object;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::sinks::JsSinks;

/// Serializable view of the whole game for JS consumers.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
struct StateSnapshot {
    /// 64 glyphs, row 0 (rank 8) first; empty string for an empty cell
    board: Vec<String>,
    side_to_move: &'static str,
    status: String,
    selection: Option<u8>,
    highlights: Vec<u8>,
    captured_by_white: Vec<String>,
    captured_by_black: Vec<String>,
    move_log: Vec<String>,
}

fn board_glyphs(state: &GameState, glyphs: GlyphSet) -> Vec<String> {
    Square::iter()
        .map(|sq| {
            state
                .board()
                .get(sq)
                .map(|p| p.glyph(glyphs).to_string())
                .unwrap_or_default()
        })
        .collect()
}

fn captured_glyphs(state: &GameState, side: Side, glyphs: GlyphSet) -> Vec<String> {
    state
        .captured(side)
        .iter()
        .map(|p| p.glyph(glyphs).to_string())
        .collect()
}

fn move_log_lines(state: &GameState, glyphs: GlyphSet) -> Vec<String> {
    state
        .history()
        .iter()
        .enumerate()
        .map(|(i, record)| chess_core::notation::move_log_line(i + 1, record, glyphs))
        .collect()
}

fn snapshot(state: &GameState, glyphs: GlyphSet) -> StateSnapshot {
    StateSnapshot {
        board: board_glyphs(state, glyphs),
        side_to_move: sinks::side_name(state.side_to_move()),
        status: state.status_text(),
        selection: state.selection().square().map(|sq| sq.index() as u8),
        highlights: state.highlights().iter().map(|sq| sq.index() as u8).collect(),
        captured_by_white: captured_glyphs(state, Side::White, glyphs),
        captured_by_black: captured_glyphs(state, Side::Black, glyphs),
        move_log: move_log_lines(state, glyphs),
    }
}

fn square_at(row: u8, col: u8) -> Result<Square, String> {
    Square::from_row_col(row as usize, col as usize)
        .ok_or_else(|| format!("square out of range: row {row}, col {col}"))
}

fn parse_square(text: &str) -> Result<Square, JsError> {
    text.parse::<Square>()
        .map_err(|e| JsError::new(&e.to_string()))
}

#[wasm_bindgen]
pub struct Game {
    state: GameState,
    sinks: JsSinks,
}

#[wasm_bindgen]
impl Game {
    /// Creates a game in the starting position.
    ///
    /// `sinks` is an optional object of display callbacks; every callback it
    /// has is invoked once right away to paint the initial position.
    #[wasm_bindgen(constructor)]
    pub fn new(sinks: Option<Object>) -> Game {
        console_error_panic_hook::set_once();
        logger::init();

        let mut game = Game {
            state: GameState::new(),
            sinks: JsSinks::new(sinks.as_ref(), GlyphSet::Unicode),
        };
        presenter::render_all(&game.state, &mut game.sinks);
        game
    }

    /// Handles a click on (row, col), row 0 being rank 8.
    ///
    /// Returns the outcome: `ignored`, `selected`, `deselected`,
    /// `reselected`, or `moved`.
    pub fn click(&mut self, row: u8, col: u8) -> Result<String, JsError> {
        let sq = square_at(row, col).map_err(|e| JsError::new(&e))?;
        match presenter::dispatch(&mut self.state, InputEvent::CellClicked(sq), &mut self.sinks) {
            EventOutcome::Click(outcome) => Ok(outcome.as_str().to_string()),
            _ => Ok(String::new()),
        }
    }

    /// Moves a piece by coordinates such as `"e2"`, `"e4"`.
    ///
    /// Returns the move-log line on success.
    #[wasm_bindgen(js_name = "attemptMove")]
    pub fn attempt_move(&mut self, from: &str, to: &str) -> Result<String, JsError> {
        let (from, to) = (parse_square(from)?, parse_square(to)?);
        self.state
            .attempt_move(from, to)
            .map_err(|e| JsError::new(&e.to_string()))?;

        presenter::render_all(&self.state, &mut self.sinks);
        Ok(move_log_lines(&self.state, self.sinks.glyphs())
            .pop()
            .unwrap_or_default())
    }

    /// Takes back the last move. Returns `false` if there was none.
    pub fn undo(&mut self) -> bool {
        matches!(
            presenter::dispatch(&mut self.state, InputEvent::UndoRequested, &mut self.sinks),
            EventOutcome::Undone(Some(_))
        )
    }

    /// Starts over from the initial position.
    pub fn restart(&mut self) {
        presenter::dispatch(&mut self.state, InputEvent::RestartRequested, &mut self.sinks);
    }

    /// Switches between chess symbols and letters and repaints.
    #[wasm_bindgen(js_name = "setAsciiGlyphs")]
    pub fn set_ascii_glyphs(&mut self, ascii: bool) {
        let glyphs = if ascii {
            GlyphSet::Ascii
        } else {
            GlyphSet::Unicode
        };
        self.sinks.set_glyphs(glyphs);
        presenter::render_all(&self.state, &mut self.sinks);
    }

    /// 64 glyphs, row 0 (rank 8) first; empty string for an empty cell.
    pub fn board(&self) -> Vec<String> {
        board_glyphs(&self.state, self.sinks.glyphs())
    }

    /// `"white"` or `"black"`.
    #[wasm_bindgen(js_name = "sideToMove")]
    pub fn side_to_move(&self) -> String {
        sinks::side_name(self.state.side_to_move()).to_string()
    }

    pub fn status(&self) -> String {
        self.state.status_text()
    }

    /// Glyphs of the pieces `side` has captured, oldest first.
    pub fn captured(&self, side: &str) -> Result<Vec<String>, JsError> {
        let side = sinks::parse_side(side).map_err(|e| JsError::new(&e))?;
        Ok(captured_glyphs(&self.state, side, self.sinks.glyphs()))
    }

    #[wasm_bindgen(js_name = "moveLog")]
    pub fn move_log(&self) -> Vec<String> {
        move_log_lines(&self.state, self.sinks.glyphs())
    }

    /// Cell indices (`row * 8 + col`) the selected piece may move to.
    pub fn highlights(&self) -> Vec<u8> {
        self.state
            .highlights()
            .iter()
            .map(|sq| sq.index() as u8)
            .collect()
    }

    /// Cell index of the selected piece, if any.
    pub fn selection(&self) -> Option<u8> {
        self.state.selection().square().map(|sq| sq.index() as u8)
    }

    /// Full state as a plain object.
    pub fn state(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&snapshot(&self.state, self.sinks.glyphs()))
            .map_err(|e| JsError::new(&e.to_string()))
    }
}

/// Sets the console log level (`off`, `error`, `warn`, `info`, `debug`, `trace`).
#[wasm_bindgen(js_name = "setLogLevel")]
pub fn set_log_level(level: &str) -> Result<(), JsError> {
    logger::init();
    let filter = logger::parse_level(level).map_err(|e| JsError::new(&e))?;
    log::set_max_level(filter);
    Ok(())
}

/// Counts move sequences of `depth` plies from the starting position and
/// logs the timing to the console.
#[wasm_bindgen]
pub fn perft(depth: u32) -> f64 {
    let now = || {
        web_sys::window()
            .and_then(|w| w.performance())
            .map_or(0.0, |p| p.now())
    };

    let start = now();
    let nodes = chess_core::perft::perft_root(depth);
    let elapsed = now() - start;

    web_sys::console::log_1(
        &format!("Perft depth {depth} - Nodes: {nodes} ({elapsed:.1} ms)").into(),
    );
    nodes as f64
}
