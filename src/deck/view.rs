//! Render snapshots.
//!
//! The engine never touches presentation. After each transition the host
//! reads a `DeckView` and styles cards from it (selected, dragging, drop
//! marker position, receiving highlight).

use serde::{Deserialize, Serialize};

use crate::core::{CardId, DeckId};

/// Interaction state of a deck as the host sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeckState {
    /// No drag from this deck.
    Idle,
    /// A drag from this deck is active; no card in this deck is hovered.
    Dragging,
    /// A drag from this deck is hovering one of its own cards.
    DraggingOverSelf,
}

/// Snapshot of everything a host needs to render one deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckView {
    /// Deck this view describes.
    pub deck: DeckId,
    /// Interaction state.
    pub state: DeckState,
    /// Card ids in display order.
    pub order: Vec<CardId>,
    /// Selected card ids, in display order.
    pub selected: Vec<CardId>,
    /// Card the pointer grabbed, if a drag started here.
    pub dragged: Option<CardId>,
    /// Cards moving with the drag, in display order.
    pub payload: Vec<CardId>,
    /// Card under the pointer, for this deck's own drag or a received one.
    pub hover: Option<CardId>,
    /// Where a drop would land in this deck.
    pub insertion_index: Option<usize>,
    /// A drag from a sibling deck is over this deck.
    pub receiving: bool,
}

impl DeckView {
    /// Check if the view shows a drag started in this deck.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state != DeckState::Idle
    }

    /// Check if a card is rendered as selected.
    #[must_use]
    pub fn is_selected(&self, card: CardId) -> bool {
        self.selected.contains(&card)
    }
}
