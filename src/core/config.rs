//! Deck configuration types.
//!
//! Hosts configure each deck when it mounts by providing a `DeckConfig`.
//! The engine never hardcodes lanes or capabilities; a board is just the
//! set of configs it was given.

use serde::{Deserialize, Serialize};

/// Deck identifier. Hosts decide what decks exist.
///
/// The engine doesn't interpret deck IDs - they're opaque identifiers
/// used by the group coordinator to route drag focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DeckId(pub u16);

impl DeckId {
    /// Create a new deck ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for DeckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Deck({})", self.0)
    }
}

/// Configuration for a single deck.
///
/// Defaults: single selection only, dragging enabled, drops from sibling
/// decks accepted, no capacity limit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Unique identifier for this deck.
    pub id: DeckId,

    /// Human-readable name (for debugging/display).
    pub name: String,

    /// Allow additive and range selection.
    ///
    /// When false, every selection replaces the previous one.
    pub multi_select: bool,

    /// Allow drags to start from this deck.
    pub drag_enabled: bool,

    /// Accept cards dragged in from sibling decks.
    pub accepts_drops: bool,

    /// Maximum cards allowed after a cross-deck drop. `None` for unlimited.
    pub max_cards: Option<usize>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self::new(DeckId::new(0), "")
    }
}

impl DeckConfig {
    /// Create a new deck configuration.
    pub fn new(id: DeckId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            multi_select: false,
            drag_enabled: true,
            accepts_drops: true,
            max_cards: None,
        }
    }

    /// Allow additive and range selection.
    #[must_use]
    pub fn multi_select(mut self) -> Self {
        self.multi_select = true;
        self
    }

    /// Disallow dragging cards out of (or within) this deck.
    #[must_use]
    pub fn without_drag(mut self) -> Self {
        self.drag_enabled = false;
        self
    }

    /// Refuse cards dragged from sibling decks.
    #[must_use]
    pub fn without_drops(mut self) -> Self {
        self.accepts_drops = false;
        self
    }

    /// Set maximum card limit.
    #[must_use]
    pub fn with_max_cards(mut self, max: usize) -> Self {
        self.max_cards = Some(max);
        self
    }

    /// Check whether `incoming` more cards fit next to `current` ones.
    #[must_use]
    pub fn has_room_for(&self, current: usize, incoming: usize) -> bool {
        self.max_cards
            .is_none_or(|max| current.saturating_add(incoming) <= max)
    }
}
