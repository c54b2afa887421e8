//! Error type for deck operations.
//!
//! None of these are fatal. Every operation that returns `Err` leaves the
//! deck, group and board exactly as they were, so hosts whose event
//! delivery is unreliable (duplicate dispatch, events after teardown) can
//! treat any error as a no-op.

use thiserror::Error;

use super::{CardId, DeckId};

/// Result alias for deck operations.
pub type DeckResult<T> = std::result::Result<T, DeckError>;

/// Why an operation was ignored.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("{0} is not in the deck")]
    UnknownCard(CardId),

    #[error("{0} is not registered")]
    UnknownDeck(DeckId),

    #[error("{0} appears more than once")]
    DuplicateCard(CardId),

    #[error("{0} is already registered")]
    DuplicateDeck(DeckId),

    #[error("`{op}` is not valid while {state}")]
    InvalidTransition {
        op: &'static str,
        state: &'static str,
    },

    #[error("a drag is already in progress")]
    AlreadyDragging,

    #[error("no drag is in progress")]
    NoActiveDrag,

    #[error("dragging is disabled for {0}")]
    DragDisabled(DeckId),

    #[error("{0} does not accept dropped cards")]
    DropsDisabled(DeckId),

    #[error("{deck} cannot hold {incoming} more cards (limit {max})")]
    CapacityExceeded {
        deck: DeckId,
        incoming: usize,
        max: usize,
    },
}
