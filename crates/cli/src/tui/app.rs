//! Application state and main loop for the TUI.

use std::time::Duration;

use chess_core::game_state::GameState;
use chess_core::presenter::{self, EventOutcome, InputEvent};
use chess_core::selection::ClickOutcome;
use chess_core::square::{BOARD_SIZE, Square};
use ratatui::DefaultTerminal;

use crate::game::{DisplayOptions, GameView};

use super::event::{self, Event};
use super::render;

/// Cursor start: White's king pawn.
const INITIAL_CURSOR: (usize, usize) = (6, 4);

/// UI mode for handling different interaction states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Normal game play mode
    Normal,
    /// Confirming quit
    ConfirmQuit,
}

/// Main application state.
pub struct App {
    /// Current game state
    pub game: GameState,
    /// What the board and info panel show
    pub view: GameView,
    /// Current UI mode
    pub ui_mode: UiMode,
    /// Cursor position on the board (row, col), row 0 = rank 8
    pub cursor: (usize, usize),
    /// Whether the application should quit
    pub should_quit: bool,
    /// Status message to display
    pub status_message: Option<String>,
}

impl App {
    /// Creates a new App instance.
    pub fn new(options: DisplayOptions) -> Self {
        let game = GameState::new();
        let view = GameView::new(&game, options);
        Self {
            game,
            view,
            ui_mode: UiMode::Normal,
            cursor: INITIAL_CURSOR,
            should_quit: false,
            status_message: None,
        }
    }

    /// Runs the main TUI loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> std::io::Result<()> {
        // Enable mouse capture
        crossterm::execute!(std::io::stdout(), crossterm::event::EnableMouseCapture)?;

        loop {
            terminal.draw(|frame| render::render(frame, &self))?;

            if let Some(event) = event::poll_event(Duration::from_millis(100))? {
                self.handle_event(event);
            }

            if self.should_quit {
                break;
            }
        }

        // Disable mouse capture on exit
        crossterm::execute!(std::io::stdout(), crossterm::event::DisableMouseCapture)?;

        Ok(())
    }

    /// Handles an input event.
    fn handle_event(&mut self, event: Event) {
        match self.ui_mode {
            UiMode::Normal => self.handle_normal_event(event),
            UiMode::ConfirmQuit => self.handle_confirm_quit_event(event),
        }
    }

    /// Handles events in normal game mode.
    fn handle_normal_event(&mut self, event: Event) {
        match event {
            Event::ForceQuit => {
                self.should_quit = true;
            }
            Event::Quit => {
                self.ui_mode = UiMode::ConfirmQuit;
            }
            Event::CursorUp => {
                self.cursor.0 = self.cursor.0.saturating_sub(1);
            }
            Event::CursorDown => {
                if self.cursor.0 < BOARD_SIZE - 1 {
                    self.cursor.0 += 1;
                }
            }
            Event::CursorLeft => {
                self.cursor.1 = self.cursor.1.saturating_sub(1);
            }
            Event::CursorRight => {
                if self.cursor.1 < BOARD_SIZE - 1 {
                    self.cursor.1 += 1;
                }
            }
            Event::Select => {
                self.click_cursor();
            }
            Event::Click(row, col) => {
                if row < BOARD_SIZE && col < BOARD_SIZE {
                    self.cursor = (row, col);
                    self.click_cursor();
                }
            }
            Event::Undo => {
                self.undo_move();
            }
            Event::NewGame => {
                self.new_game();
            }
            Event::Char(_) => {}
        }
    }

    /// Handles events in quit confirmation mode.
    fn handle_confirm_quit_event(&mut self, event: Event) {
        match event {
            Event::ForceQuit | Event::Char('y') | Event::Char('Y') => {
                self.should_quit = true;
            }
            // `n` arrives as `NewGame` from the key map.
            Event::NewGame | Event::Char('N') | Event::Quit => {
                self.ui_mode = UiMode::Normal;
            }
            _ => {}
        }
    }

    /// Feeds a click on the cursor square into the game.
    fn click_cursor(&mut self) {
        let Some(sq) = Square::from_row_col(self.cursor.0, self.cursor.1) else {
            return;
        };

        let outcome = presenter::dispatch(
            &mut self.game,
            InputEvent::CellClicked(sq),
            &mut self.view,
        );
        self.status_message = match outcome {
            EventOutcome::Click(ClickOutcome::Ignored) => Some(format!(
                "Select a {} piece",
                self.game.side_to_move().as_str().to_lowercase()
            )),
            EventOutcome::Click(ClickOutcome::Deselected) => Some("Selection cleared".to_string()),
            EventOutcome::Click(ClickOutcome::Moved(_)) => self.view.move_log().last().cloned(),
            _ => None,
        };
    }

    /// Undoes the last move.
    fn undo_move(&mut self) {
        let outcome = presenter::dispatch(&mut self.game, InputEvent::UndoRequested, &mut self.view);
        self.status_message = match outcome {
            EventOutcome::Undone(Some(_)) => Some("Move undone".to_string()),
            _ => Some("Nothing to undo".to_string()),
        };
    }

    /// Starts a new game.
    fn new_game(&mut self) {
        presenter::dispatch(&mut self.game, InputEvent::RestartRequested, &mut self.view);
        self.cursor = INITIAL_CURSOR;
        self.status_message = Some("New game started".to_string());
    }
}
