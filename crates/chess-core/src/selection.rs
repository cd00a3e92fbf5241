//! Click selection states.
//!
//! The transitions themselves are driven by [`GameState::click`], which owns
//! the board the selection refers to.
//!
//! [`GameState::click`]: crate::game_state::GameState::click

use crate::history::MoveRecord;
use crate::square::Square;

/// Current selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    /// Nothing selected
    #[default]
    Idle,
    /// A piece of the side to move is selected
    Selected(Square),
}

impl Selection {
    /// Returns the selected square, if any.
    #[inline]
    pub fn square(self) -> Option<Square> {
        match self {
            Selection::Idle => None,
            Selection::Selected(sq) => Some(sq),
        }
    }

    #[inline]
    pub fn is_idle(self) -> bool {
        self == Selection::Idle
    }
}

/// What a single click did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Idle and the click did not hit a piece of the side to move
    Ignored,
    /// Idle and a piece of the side to move was selected
    Selected(Square),
    /// An illegal destination was clicked; the selection was dropped
    Deselected,
    /// An illegal destination holding a piece of the side to move was
    /// clicked; that piece is now selected instead
    Reselected(Square),
    /// The selected piece moved
    Moved(MoveRecord),
}

impl ClickOutcome {
    /// Short lowercase name, used by adapters.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClickOutcome::Ignored => "ignored",
            ClickOutcome::Selected(_) => "selected",
            ClickOutcome::Deselected => "deselected",
            ClickOutcome::Reselected(_) => "reselected",
            ClickOutcome::Moved(_) => "moved",
        }
    }

    /// Whether the click changed anything visible.
    pub fn changed(&self) -> bool {
        !matches!(self, ClickOutcome::Ignored)
    }
}
