//! Interactive TUI (Terminal User Interface) for the chess board.
//!
//! This module provides a full-featured terminal interface using ratatui,
//! supporting keyboard navigation and mouse input.

use crate::game::DisplayOptions;
use crate::tui;

/// Main TUI loop.
///
/// Takes over the terminal until the user quits, then restores it.
///
/// # Arguments
/// * `options` - Glyph set and highlight settings from the command line
pub fn ui_loop(options: DisplayOptions) -> Result<(), String> {
    let app = tui::App::new(options);

    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();

    result.map_err(|e| e.to_string())
}
