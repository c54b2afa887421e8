//! Single deck controller.
//!
//! A `Deck` owns one ordered card list together with its selection and
//! drag lifecycle. Every operation is synchronous and either applies
//! completely or returns a `DeckError` without touching any state.
//!
//! ## Lifecycle
//!
//! ```text
//! Idle ──begin_drag──▶ Dragging ──notify_drag_position──▶ DraggingOverSelf
//!   ▲                     │                                    │
//!   └──────── end_drag / take_payload ◀────────────────────────┘
//! ```
//!
//! Independently of its own drag, a deck may be *receiving*: a drag that
//! began in a sibling deck is over it. Receiving never touches the
//! selection until the drop is accepted.
//!
//! ## Usage
//!
//! ```
//! use card_deck::core::{CardId, DeckConfig, DeckId, HoverPoint, Modifiers};
//! use card_deck::deck::Deck;
//!
//! let (x, y, z) = (CardId(1), CardId(2), CardId(3));
//! let mut deck = Deck::new(DeckConfig::new(DeckId::new(0), "Todo"), vec![x, y, z]).unwrap();
//!
//! deck.on_pointer_down(y, Modifiers::NONE).unwrap();
//! deck.begin_drag(y).unwrap();
//! assert_eq!(deck.notify_drag_position(x, HoverPoint::UPPER).unwrap(), Some(0));
//! deck.end_drag(true).unwrap();
//!
//! assert_eq!(deck.cards(), &[y, x, z]);
//! ```

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::core::{Card, CardId, DeckConfig, DeckError, DeckId, DeckResult, HoverPoint, Modifiers};

use super::drag::{extract_block, move_block, ActiveDrag, DragState, Payload, Receiving};
use super::selection::SelectionSet;
use super::view::{DeckState, DeckView};

/// One deck: ordered cards, selection, drag state.
#[derive(Clone, Debug)]
pub struct Deck<C> {
    config: DeckConfig,
    cards: Vec<C>,
    selection: SelectionSet,
    drag: DragState,
    receiving: Option<Receiving>,
}

impl<C: Card> Deck<C> {
    /// Create a deck holding `cards` in the given order.
    ///
    /// Fails if two cards share an id.
    pub fn new(config: DeckConfig, cards: Vec<C>) -> DeckResult<Self> {
        check_unique(&cards)?;
        Ok(Self {
            config,
            cards,
            selection: SelectionSet::new(),
            drag: DragState::Idle,
            receiving: None,
        })
    }

    /// Create a deck with no cards.
    #[must_use]
    pub fn empty(config: DeckConfig) -> Self {
        Self {
            config,
            cards: Vec::new(),
            selection: SelectionSet::new(),
            drag: DragState::Idle,
            receiving: None,
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// This deck's id.
    #[must_use]
    pub fn id(&self) -> DeckId {
        self.config.id
    }

    /// This deck's configuration.
    #[must_use]
    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    /// Cards in display order.
    #[must_use]
    pub fn cards(&self) -> &[C] {
        &self.cards
    }

    /// Card ids in display order.
    pub fn ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().map(|c| c.id())
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Index of a card in display order.
    #[must_use]
    pub fn position(&self, card: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id() == card)
    }

    /// Check if the deck holds a card.
    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.position(card).is_some()
    }

    /// Look up a card by id.
    #[must_use]
    pub fn get(&self, card: CardId) -> Option<&C> {
        self.cards.iter().find(|c| c.id() == card)
    }

    fn require(&self, card: CardId) -> DeckResult<usize> {
        self.position(card).ok_or(DeckError::UnknownCard(card))
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Select a card.
    ///
    /// Non-additive selection replaces the selection with `card`; additive
    /// selection toggles it. Decks without `multi_select` always replace.
    pub fn toggle_select(&mut self, card: CardId, additive: bool) -> DeckResult<()> {
        self.require(card)?;
        if additive && self.config.multi_select {
            self.selection.toggle(card);
        } else {
            self.selection.select_only(card);
        }
        Ok(())
    }

    /// Select every card from the anchor to `card`, inclusive.
    ///
    /// Without an anchor (or without `multi_select`) this selects only
    /// `card`, which then becomes the anchor.
    pub fn select_range(&mut self, card: CardId) -> DeckResult<()> {
        let end = self.require(card)?;
        let start = self
            .selection
            .anchor()
            .and_then(|anchor| self.position(anchor))
            .filter(|_| self.config.multi_select);

        let Some(start) = start else {
            self.selection.select_only(card);
            return Ok(());
        };

        let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
        let range: Vec<CardId> = self.cards[lo..=hi].iter().map(|c| c.id()).collect();
        self.selection.select_many(range);
        Ok(())
    }

    /// Select every card in the deck.
    pub fn select_all(&mut self) -> DeckResult<()> {
        if !self.config.multi_select {
            return Err(DeckError::InvalidTransition {
                op: "select_all",
                state: "single-select",
            });
        }
        let all: Vec<CardId> = self.ids().collect();
        self.selection.select_many(all);
        Ok(())
    }

    /// Empty the selection. An active drag keeps its payload.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Check if a card is selected.
    #[must_use]
    pub fn is_selected(&self, card: CardId) -> bool {
        self.selection.contains(card)
    }

    /// The selection set.
    #[must_use]
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Selected card ids in display order.
    #[must_use]
    pub fn selected_in_order(&self) -> Vec<CardId> {
        self.ids().filter(|&id| self.selection.contains(id)).collect()
    }

    /// Pointer pressed on a card.
    ///
    /// An unselected card becomes selected (range, additive or single,
    /// per `modifiers`). A selected card keeps the current selection so
    /// that a following drag carries all of it.
    ///
    /// Returns `true` if the selection changed.
    pub fn on_pointer_down(&mut self, card: CardId, modifiers: Modifiers) -> DeckResult<bool> {
        self.require(card)?;
        if self.selection.contains(card) {
            return Ok(false);
        }
        if modifiers.range {
            self.select_range(card)?;
        } else {
            self.toggle_select(card, modifiers.additive)?;
        }
        Ok(true)
    }

    // =========================================================================
    // Own drag
    // =========================================================================

    /// Interaction state of this deck's own drag.
    #[must_use]
    pub fn state(&self) -> DeckState {
        match &self.drag {
            DragState::Idle => DeckState::Idle,
            DragState::Dragging(drag) if drag.target.hover.is_some() => DeckState::DraggingOverSelf,
            DragState::Dragging(_) => DeckState::Dragging,
        }
    }

    /// The drag state.
    #[must_use]
    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    /// Check if a drag started in this deck is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Number of cards carried by the active drag (0 when idle).
    #[must_use]
    pub fn payload_len(&self) -> usize {
        self.drag.payload().len()
    }

    /// Start dragging `card` together with the rest of the selection.
    ///
    /// An unselected card is selected on its own first.
    pub fn begin_drag(&mut self, card: CardId) -> DeckResult<()> {
        if self.drag.is_dragging() {
            return Err(DeckError::AlreadyDragging);
        }
        if !self.config.drag_enabled {
            return Err(DeckError::DragDisabled(self.id()));
        }
        if self.receiving.is_some() {
            return Err(DeckError::InvalidTransition {
                op: "begin_drag",
                state: "receiving",
            });
        }
        self.require(card)?;

        if !self.selection.contains(card) {
            self.selection.select_only(card);
        }

        let payload: Payload = self
            .cards
            .iter()
            .map(|c| c.id())
            .filter(|&id| self.selection.contains(id))
            .collect();

        debug!(deck = %self.id(), dragged = %card, payload = payload.len(), "drag started");
        self.drag = DragState::Dragging(ActiveDrag::new(card, payload));
        Ok(())
    }

    /// Pointer moved over `hover` during a drag.
    ///
    /// Applies to this deck's own drag, or to a received drag when this
    /// deck is receiving. Returns the insertion index a drop would use.
    /// Hovering the dragged card itself keeps the previous index.
    pub fn notify_drag_position(
        &mut self,
        hover: CardId,
        point: HoverPoint,
    ) -> DeckResult<Option<usize>> {
        let deck = self.config.id;
        if !self.drag.is_dragging() && self.receiving.is_none() {
            return Err(DeckError::InvalidTransition {
                op: "notify_drag_position",
                state: "idle",
            });
        }
        let hover_index = self.require(hover)?;
        let half = point.half();

        if let DragState::Dragging(drag) = &mut self.drag {
            if hover == drag.dragged {
                drag.target.hover = Some(hover);
                return Ok(drag.target.insertion_index);
            }
            let index = drag.target.update(hover, hover_index, half);
            trace!(%deck, %hover, ?half, index, "drag position");
            return Ok(Some(index));
        }

        let Some(receiving) = &mut self.receiving else {
            return Err(DeckError::NoActiveDrag);
        };
        let index = receiving.target.update(hover, hover_index, half);
        trace!(%deck, %hover, ?half, index, origin = %receiving.origin, "received drag position");
        Ok(Some(index))
    }

    /// Forget the hover target and insertion index of the active drag.
    ///
    /// Used when the pointer leaves the deck for a sibling.
    pub fn clear_drop_target(&mut self) {
        if let DragState::Dragging(drag) = &mut self.drag {
            drag.target.clear();
        }
    }

    /// Finish this deck's own drag.
    ///
    /// A committed drag with a known insertion index moves the payload
    /// there as one block and returns the block's new start index. An
    /// aborted drag, or one that never computed an index, leaves the order
    /// untouched and returns `None`. Either way the deck returns to idle
    /// with its selection intact.
    pub fn end_drag(&mut self, committed: bool) -> DeckResult<Option<usize>> {
        let DragState::Dragging(drag) = std::mem::take(&mut self.drag) else {
            return Err(DeckError::InvalidTransition {
                op: "end_drag",
                state: "idle",
            });
        };

        let moved_to = match (committed, drag.target.insertion_index) {
            (true, Some(index)) => Some(move_block(&mut self.cards, &drag.payload, index)),
            _ => None,
        };

        debug!(
            deck = %self.id(),
            dragged = %drag.dragged,
            committed,
            ?moved_to,
            "drag ended"
        );
        Ok(moved_to)
    }

    /// Finish this deck's drag by handing its payload to another deck.
    ///
    /// Removes the payload cards (in display order) and returns them. The
    /// deck returns to idle and the moved cards leave the selection.
    pub fn take_payload(&mut self) -> DeckResult<Vec<C>> {
        let DragState::Dragging(drag) = std::mem::take(&mut self.drag) else {
            return Err(DeckError::NoActiveDrag);
        };

        let block = extract_block(&mut self.cards, &drag.payload);
        self.selection.retain(|id| !drag.payload.contains(&id));

        debug!(deck = %self.id(), moved = block.len(), "payload handed off");
        Ok(block)
    }

    // =========================================================================
    // Received drag
    // =========================================================================

    /// A drag that began in `origin` entered this deck.
    ///
    /// Re-entering from the same origin keeps the current drop target.
    pub fn on_external_deck_entered(&mut self, origin: DeckId) -> DeckResult<()> {
        if origin == self.id() {
            return Err(DeckError::InvalidTransition {
                op: "on_external_deck_entered",
                state: "the drag origin",
            });
        }
        if self.drag.is_dragging() {
            return Err(DeckError::AlreadyDragging);
        }
        if !self.config.accepts_drops {
            return Err(DeckError::DropsDisabled(self.id()));
        }
        if self.receiving.is_some_and(|r| r.origin == origin) {
            return Ok(());
        }
        self.receiving = Some(Receiving::new(origin));
        Ok(())
    }

    /// The received drag left this deck.
    pub fn on_external_deck_left(&mut self) -> DeckResult<()> {
        self.receiving
            .take()
            .map(|_| ())
            .ok_or(DeckError::NoActiveDrag)
    }

    /// Check if a drag from a sibling deck is over this deck.
    #[must_use]
    pub fn is_receiving(&self) -> bool {
        self.receiving.is_some()
    }

    /// The received drag, if any.
    #[must_use]
    pub fn receiving(&self) -> Option<&Receiving> {
        self.receiving.as_ref()
    }

    /// Check that a drop of `incoming` cards would be accepted.
    pub fn can_accept(&self, incoming: &[CardId]) -> DeckResult<()> {
        if self.receiving.is_none() {
            return Err(DeckError::NoActiveDrag);
        }
        if !self.config.accepts_drops {
            return Err(DeckError::DropsDisabled(self.id()));
        }
        if let Some(max) = self.config.max_cards {
            if !self.config.has_room_for(self.cards.len(), incoming.len()) {
                return Err(DeckError::CapacityExceeded {
                    deck: self.id(),
                    incoming: incoming.len(),
                    max,
                });
            }
        }
        let mut seen: FxHashSet<CardId> = self.ids().collect();
        for &id in incoming {
            if !seen.insert(id) {
                return Err(DeckError::DuplicateCard(id));
            }
        }
        Ok(())
    }

    /// Insert cards delivered by a sibling deck's drag.
    ///
    /// Cards land at the received insertion index (end of the deck if the
    /// pointer never hovered a card), become the selection, and the deck
    /// stops receiving. Returns the index of the first inserted card.
    pub fn accept_drop(&mut self, cards: Vec<C>) -> DeckResult<usize> {
        let ids: Vec<CardId> = cards.iter().map(|c| c.id()).collect();
        self.can_accept(&ids)?;
        let Some(receiving) = self.receiving.take() else {
            return Err(DeckError::NoActiveDrag);
        };

        let at = receiving
            .target
            .insertion_index
            .unwrap_or(self.cards.len())
            .min(self.cards.len());
        self.cards.splice(at..at, cards);
        self.selection.clear();
        self.selection.select_many(ids);

        debug!(deck = %self.id(), origin = %receiving.origin, at, "drop accepted");
        Ok(at)
    }

    // =========================================================================
    // Card list mutation
    // =========================================================================

    /// Insert a card at `position` (end of the deck if `None`).
    ///
    /// Any live drop target is cleared since indices shift.
    pub fn add_card(&mut self, card: C, position: Option<usize>) -> DeckResult<usize> {
        if self.contains(card.id()) {
            return Err(DeckError::DuplicateCard(card.id()));
        }
        let at = position.unwrap_or(self.cards.len()).min(self.cards.len());
        self.cards.insert(at, card);
        self.clear_targets();
        Ok(at)
    }

    /// Remove a card. It also leaves the selection and any drag payload.
    pub fn remove_card(&mut self, card: CardId) -> DeckResult<C> {
        let index = self.require(card)?;
        let removed = self.cards.remove(index);
        self.prune();
        Ok(removed)
    }

    /// Move a single card so that it ends up at `index`.
    ///
    /// Not available during this deck's own drag.
    pub fn move_card(&mut self, card: CardId, index: usize) -> DeckResult<usize> {
        if self.drag.is_dragging() {
            return Err(DeckError::InvalidTransition {
                op: "move_card",
                state: "dragging",
            });
        }
        let from = self.require(card)?;
        let value = self.cards.remove(from);
        let to = index.min(self.cards.len());
        self.cards.insert(to, value);
        self.clear_targets();
        Ok(to)
    }

    /// Replace the whole card list.
    ///
    /// Selection and payload keep only the cards that survive. A drag
    /// whose grabbed card disappeared is aborted.
    pub fn replace_cards(&mut self, cards: Vec<C>) -> DeckResult<()> {
        check_unique(&cards)?;
        self.cards = cards;
        self.prune();
        Ok(())
    }

    /// Drop selection, drag and receiving state.
    pub fn reset(&mut self) {
        self.selection.clear();
        self.drag = DragState::Idle;
        self.receiving = None;
    }

    fn clear_targets(&mut self) {
        self.clear_drop_target();
        if let Some(receiving) = &mut self.receiving {
            receiving.target.clear();
        }
    }

    fn prune(&mut self) {
        let present: FxHashSet<CardId> = self.ids().collect();
        self.selection.retain(|id| present.contains(&id));

        let lost_anchor = self
            .drag
            .dragged()
            .is_some_and(|dragged| !present.contains(&dragged));
        if lost_anchor {
            debug!(deck = %self.id(), "dragged card removed, drag aborted");
            self.drag = DragState::Idle;
        } else if let DragState::Dragging(drag) = &mut self.drag {
            drag.payload.retain(|id| present.contains(&*id));
        }
        self.clear_targets();
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Snapshot for the host to render.
    #[must_use]
    pub fn view(&self) -> DeckView {
        let target = match (&self.drag, &self.receiving) {
            (DragState::Dragging(drag), _) => Some(drag.target),
            (DragState::Idle, Some(receiving)) => Some(receiving.target),
            (DragState::Idle, None) => None,
        };
        let payload = self.drag.payload();

        DeckView {
            deck: self.id(),
            state: self.state(),
            order: self.ids().collect(),
            selected: self.selected_in_order(),
            dragged: self.drag.dragged(),
            payload: self.ids().filter(|id| payload.contains(id)).collect(),
            hover: target.and_then(|t| t.hover),
            insertion_index: target.and_then(|t| t.insertion_index),
            receiving: self.receiving.is_some(),
        }
    }
}

fn check_unique<C: Card>(cards: &[C]) -> DeckResult<()> {
    let mut seen = FxHashSet::default();
    for card in cards {
        if !seen.insert(card.id()) {
            return Err(DeckError::DuplicateCard(card.id()));
        }
    }
    Ok(())
}
