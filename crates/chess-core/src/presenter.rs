//! The boundary between the game state and whatever draws it.
//!
//! An adapter implements [`Presenter`] over its own display technology and
//! routes its input through [`dispatch`]. Each event is handled to completion
//! and the matching re-render calls are issued before `dispatch` returns.

use crate::board::Board;
use crate::game_state::GameState;
use crate::history::MoveRecord;
use crate::piece::Piece;
use crate::selection::{ClickOutcome, Selection};
use crate::side::Side;
use crate::square::Square;

/// Display sinks an adapter provides.
pub trait Presenter {
    /// Redraws all 64 cells, the selected square, and the legal destinations
    /// of the selection.
    fn render_board(&mut self, board: &Board, selection: Selection, highlights: &[Square]);

    /// Updates the turn indicator.
    fn render_status(&mut self, side_to_move: Side);

    /// Replaces the list of pieces captured by `side`.
    fn render_captured(&mut self, side: Side, pieces: &[Piece]);

    /// Appends one line to the move log. `ply` is the 1-based position of
    /// `record` in the history.
    fn append_move_log(&mut self, ply: usize, record: &MoveRecord);

    /// Removes the last move-log line.
    fn pop_move_log(&mut self);

    /// Empties the move log.
    fn clear_move_log(&mut self);
}

/// Input events the adapter feeds into the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    CellClicked(Square),
    RestartRequested,
    UndoRequested,
}

/// Result of [`dispatch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    Click(ClickOutcome),
    /// The reverted move, or `None` when the history was empty
    Undone(Option<MoveRecord>),
    Restarted,
}

/// Handles one input event and re-renders what it changed.
pub fn dispatch<P>(game: &mut GameState, event: InputEvent, presenter: &mut P) -> EventOutcome
where
    P: Presenter + ?Sized,
{
    match event {
        InputEvent::CellClicked(sq) => {
            let outcome = game.click(sq);
            match outcome {
                ClickOutcome::Ignored => {}
                ClickOutcome::Selected(_)
                | ClickOutcome::Deselected
                | ClickOutcome::Reselected(_) => render_board(game, presenter),
                ClickOutcome::Moved(record) => {
                    render_board(game, presenter);
                    render_captured(game, presenter);
                    presenter.append_move_log(game.history().len(), &record);
                    presenter.render_status(game.side_to_move());
                }
            }
            EventOutcome::Click(outcome)
        }
        InputEvent::UndoRequested => {
            let undone = game.undo();
            if undone.is_some() {
                render_board(game, presenter);
                render_captured(game, presenter);
                presenter.pop_move_log();
                presenter.render_status(game.side_to_move());
            }
            EventOutcome::Undone(undone)
        }
        InputEvent::RestartRequested => {
            game.restart();
            presenter.clear_move_log();
            render_board(game, presenter);
            render_captured(game, presenter);
            presenter.render_status(game.side_to_move());
            EventOutcome::Restarted
        }
    }
}

/// Paints everything, including the full move log, from scratch.
pub fn render_all<P>(game: &GameState, presenter: &mut P)
where
    P: Presenter + ?Sized,
{
    presenter.clear_move_log();
    for (i, record) in game.history().iter().enumerate() {
        presenter.append_move_log(i + 1, record);
    }
    render_board(game, presenter);
    render_captured(game, presenter);
    presenter.render_status(game.side_to_move());
}

fn render_board<P: Presenter + ?Sized>(game: &GameState, presenter: &mut P) {
    presenter.render_board(game.board(), game.selection(), &game.highlights());
}

fn render_captured<P: Presenter + ?Sized>(game: &GameState, presenter: &mut P) {
    for side in Side::ALL {
        presenter.render_captured(side, game.captured(side));
    }
}
