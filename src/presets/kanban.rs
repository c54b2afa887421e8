//! Kanban board preset.
//!
//! One deck per lane, left to right. Every lane accepts drops from every
//! other lane; lanes may carry a work-in-progress limit.
//!
//! ```
//! use card_deck::core::CardId;
//! use card_deck::presets::{lane_id, KanbanBuilder};
//!
//! let board = KanbanBuilder::new()
//!     .lane("Todo", vec![CardId(1), CardId(2)])
//!     .lane("Doing", vec![])
//!     .wip_limit(2)
//!     .lane("Done", vec![])
//!     .build()
//!     .unwrap();
//!
//! let doing = lane_id(&board, "Doing").unwrap();
//! assert_eq!(board.deck(doing).unwrap().config().max_cards, Some(2));
//! ```

use std::sync::Arc;

use crate::board::Board;
use crate::core::{Card, DeckConfig, DeckId, DeckResult};
use crate::group::{DeckListener, NoopListener};

struct Lane<C> {
    name: String,
    cards: Vec<C>,
    wip_limit: Option<usize>,
    listener: Arc<dyn DeckListener>,
}

/// Builder for a lane board.
pub struct KanbanBuilder<C> {
    lanes: Vec<Lane<C>>,
    multi_select: bool,
}

impl<C> Default for KanbanBuilder<C> {
    fn default() -> Self {
        Self {
            lanes: Vec::new(),
            multi_select: true,
        }
    }
}

impl<C: Card> KanbanBuilder<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a lane holding `cards`.
    #[must_use]
    pub fn lane(mut self, name: impl Into<String>, cards: Vec<C>) -> Self {
        self.lanes.push(Lane {
            name: name.into(),
            cards,
            wip_limit: None,
            listener: Arc::new(NoopListener),
        });
        self
    }

    /// Limit the most recently added lane to `limit` cards.
    #[must_use]
    pub fn wip_limit(mut self, limit: usize) -> Self {
        if let Some(lane) = self.lanes.last_mut() {
            lane.wip_limit = Some(limit);
        }
        self
    }

    /// Attach a listener to the most recently added lane.
    #[must_use]
    pub fn listener(mut self, listener: Arc<dyn DeckListener>) -> Self {
        if let Some(lane) = self.lanes.last_mut() {
            lane.listener = listener;
        }
        self
    }

    /// Restrict every lane to single selection.
    #[must_use]
    pub fn single_select(mut self) -> Self {
        self.multi_select = false;
        self
    }

    /// Build the board. Lane decks get ids `0..n` in lane order.
    pub fn build(self) -> DeckResult<Board<C>> {
        let mut board = Board::new();
        for (index, lane) in (0u16..).zip(self.lanes) {
            let mut config = DeckConfig::new(DeckId::new(index), lane.name);
            config.multi_select = self.multi_select;
            config.max_cards = lane.wip_limit;
            board.add_deck(config, lane.cards, lane.listener)?;
        }
        Ok(board)
    }
}

/// Find a lane's deck id by name.
#[must_use]
pub fn lane_id<C: Card>(board: &Board<C>, name: &str) -> Option<DeckId> {
    board
        .decks()
        .iter()
        .find(|deck| deck.config().name == name)
        .map(|deck| deck.id())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CardId, DeckError};

    #[test]
    fn test_lane_ids_follow_order() {
        let board = KanbanBuilder::<CardId>::new()
            .lane("Todo", vec![])
            .lane("Doing", vec![])
            .lane("Done", vec![])
            .build()
            .unwrap();

        assert_eq!(lane_id(&board, "Todo"), Some(DeckId::new(0)));
        assert_eq!(lane_id(&board, "Done"), Some(DeckId::new(2)));
        assert_eq!(lane_id(&board, "Blocked"), None);
        assert_eq!(board.group().len(), 3);
    }

    #[test]
    fn test_single_select() {
        let board = KanbanBuilder::<CardId>::new()
            .lane("Todo", vec![CardId(1)])
            .single_select()
            .build()
            .unwrap();

        assert!(!board.decks()[0].config().multi_select);
    }

    #[test]
    fn test_duplicate_card_in_lane() {
        let result = KanbanBuilder::new()
            .lane("Todo", vec![CardId(1), CardId(1)])
            .build();

        assert_eq!(result.unwrap_err(), DeckError::DuplicateCard(CardId(1)));
    }
}
