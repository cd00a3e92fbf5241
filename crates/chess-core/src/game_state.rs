//! Game state management.
//!
//! This module provides the `GameState` struct, the single owner of all
//! mutable game data: the board, the side to move, the click selection, the
//! move history, and the captured-piece tallies. Adapters hold one
//! `GameState` and pass it by reference into their event handlers.

use thiserror::Error;

use crate::board::Board;
use crate::captured::CapturedTally;
use crate::history::{HistoryLog, MoveRecord};
use crate::notation;
use crate::piece::Piece;
use crate::rules::{self, Destinations};
use crate::selection::{ClickOutcome, Selection};
use crate::side::Side;
use crate::square::Square;

/// Reasons [`GameState::attempt_move`] can refuse a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("no piece on {0}")]
    EmptyOrigin(Square),
    #[error("the piece on {square} belongs to {owner}, but it is {to_move}'s turn")]
    NotSideToMove {
        square: Square,
        owner: Side,
        to_move: Side,
    },
    #[error("illegal move: {from} to {to}")]
    IllegalMove { from: Square, to: Square },
}

/// Represents the state of a chess game session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// The current board position.
    board: Board,
    /// Which side's turn it is to move.
    side_to_move: Side,
    /// Piece picked by the last click, if any.
    selection: Selection,
    /// Executed moves, oldest first.
    history: HistoryLog,
    /// Pieces taken by each side.
    captured: CapturedTally,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a new game in the starting position with White to move.
    pub fn new() -> Self {
        Self::from_board(Board::new(), Side::White)
    }

    /// Creates a game from an arbitrary position with empty history.
    ///
    /// # Arguments
    ///
    /// * `board` - The board position to start from
    /// * `side_to_move` - Which side moves next
    pub fn from_board(board: Board, side_to_move: Side) -> Self {
        Self {
            board,
            side_to_move,
            selection: Selection::Idle,
            history: HistoryLog::new(),
            captured: CapturedTally::new(),
        }
    }

    /// Discards the current game and returns to the starting position.
    pub fn restart(&mut self) {
        self.board.reset();
        self.side_to_move = Side::White;
        self.selection = Selection::Idle;
        self.history.clear();
        self.captured.clear();
        log::debug!("game restarted");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Pieces captured by `side`, in capture order.
    pub fn captured(&self, side: Side) -> &[Piece] {
        self.captured.pieces(side)
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    /// Status line such as `White's turn`.
    pub fn status_text(&self) -> String {
        notation::status_text(self.side_to_move)
    }

    /// Checks a move for the side to move without executing it.
    pub fn is_legal_move(&self, from: Square, to: Square) -> bool {
        rules::is_legal_move(&self.board, from, to, self.side_to_move)
    }

    /// Legal destinations of the selected piece; empty while idle.
    pub fn highlights(&self) -> Destinations {
        match self.selection {
            Selection::Selected(from) => {
                rules::legal_destinations(&self.board, from, self.side_to_move)
            }
            Selection::Idle => Destinations::new(),
        }
    }

    /// Validates and executes a move for the side to move.
    ///
    /// On success the selection is cleared and the turn passes to the other
    /// side. On failure nothing changes.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if `from` is empty, holds a piece of the other
    /// side, or the piece cannot legally reach `to`.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> Result<MoveRecord, MoveError> {
        let piece = self.board.get(from).ok_or(MoveError::EmptyOrigin(from))?;
        if piece.side != self.side_to_move {
            return Err(MoveError::NotSideToMove {
                square: from,
                owner: piece.side,
                to_move: self.side_to_move,
            });
        }
        if !self.is_legal_move(from, to) {
            return Err(MoveError::IllegalMove { from, to });
        }
        Ok(self.execute(from, to, piece))
    }

    /// Undoes the most recent move.
    ///
    /// # Returns
    ///
    /// The reverted record, or `None` if there was nothing to undo.
    pub fn undo(&mut self) -> Option<MoveRecord> {
        let record = self.history.pop()?;

        self.board.set(record.from, Some(record.piece));
        self.board.set(record.to, record.captured);

        let mover = record.mover();
        if let Some(captured) = record.captured {
            self.captured.remove_last(mover, captured);
        }
        self.side_to_move = mover;
        self.selection = Selection::Idle;

        log::debug!("undo {} {} -> {}", record.piece.to_char(), record.from, record.to);
        Some(record)
    }

    /// Feeds a click on `sq` into the selection state machine.
    ///
    /// * Idle: selects `sq` if it holds a piece of the side to move.
    /// * Selected: moves there if legal; otherwise drops the selection and,
    ///   when `sq` holds a piece of the side to move, selects it instead.
    pub fn click(&mut self, sq: Square) -> ClickOutcome {
        let outcome = match self.selection {
            Selection::Idle if self.owns(sq) => {
                self.selection = Selection::Selected(sq);
                ClickOutcome::Selected(sq)
            }
            Selection::Idle => ClickOutcome::Ignored,
            Selection::Selected(from) => match self.board.get(from) {
                Some(piece) if self.is_legal_move(from, sq) => {
                    ClickOutcome::Moved(self.execute(from, sq, piece))
                }
                _ if self.owns(sq) => {
                    self.selection = Selection::Selected(sq);
                    ClickOutcome::Reselected(sq)
                }
                _ => {
                    self.selection = Selection::Idle;
                    ClickOutcome::Deselected
                }
            },
        };
        log::trace!("click {sq}: {}", outcome.as_str());
        outcome
    }

    fn owns(&self, sq: Square) -> bool {
        self.board
            .get(sq)
            .is_some_and(|piece| piece.side == self.side_to_move)
    }

    /// Moves `piece` from `from` to `to`; the caller has already checked
    /// legality.
    fn execute(&mut self, from: Square, to: Square, piece: Piece) -> MoveRecord {
        let captured = self.board.get(to);

        if let Some(taken) = captured {
            self.captured.record(self.side_to_move, taken);
        }
        self.board.set(to, Some(piece));
        self.board.set(from, None);

        let record = MoveRecord {
            from,
            to,
            piece,
            captured,
        };
        self.history.push(record);
        self.selection = Selection::Idle;
        self.side_to_move = self.side_to_move.opposite();

        log::debug!(
            "move {} {from} -> {to}{}",
            piece.to_char(),
            if record.is_capture() { " (capture)" } else { "" }
        );
        record
    }
}
