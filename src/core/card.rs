//! Card identification.
//!
//! Every card placed in a deck is identified by an explicit `CardId` key.
//! Decks never compare cards by value or by reference; they ask the card
//! for its id. This keeps selection and drag state valid when the host
//! rebuilds its card values (e.g. after deserializing a fresh copy).
//!
//! ## Usage
//!
//! ```
//! use card_deck::core::{Card, CardId};
//!
//! #[derive(Clone, Debug)]
//! struct Task {
//!     key: u32,
//!     title: String,
//! }
//!
//! impl Card for Task {
//!     fn id(&self) -> CardId {
//!         CardId(self.key)
//!     }
//! }
//!
//! let task = Task { key: 7, title: "Write docs".into() };
//! assert_eq!(task.id(), CardId(7));
//!
//! // Bare ids are cards too.
//! assert_eq!(CardId(3).id(), CardId(3));
//! ```

use serde::{Deserialize, Serialize};

/// Stable identity key for a card.
///
/// Ids must be unique within a single deck. The same id may appear in
/// different decks of a board only if the host treats them as distinct
/// cards; cross-deck moves carry the card value, not the id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// An item that can live in a deck.
///
/// The only requirement is a stable identity key. Decks clone cards only
/// when moving them between decks.
pub trait Card: Clone {
    /// The identity key of this card.
    fn id(&self) -> CardId;
}

impl Card for CardId {
    fn id(&self) -> CardId {
        *self
    }
}
