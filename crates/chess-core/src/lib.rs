//! Move legality and game state for a two-player chess board.
//!
//! The crate is independent of any display technology. [`GameState`] owns
//! the board, turn, selection, history, and captures; adapters drive it
//! through [`presenter::dispatch`] and draw it through their own
//! [`presenter::Presenter`] implementation.
//!
//! [`GameState`]: game_state::GameState

pub mod board;
pub mod captured;
pub mod game_state;
pub mod history;
pub mod notation;
pub mod perft;
pub mod piece;
pub mod presenter;
pub mod rules;
pub mod selection;
pub mod side;
pub mod square;
