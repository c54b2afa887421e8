//! A board: several decks sharing one drag.
//!
//! The board owns its deck controllers and a `DeckGroup`. Each operation
//! applies the deck-local transition, routes the matching group signal
//! (awaiting listeners), then applies the routing outcome to the decks
//! involved: the deck that was left stops receiving, the deck that was
//! entered starts receiving.
//!
//! Only one drag exists per board. A committed drop whose entered deck is
//! not the origin moves the payload across decks.

use std::sync::Arc;

use tracing::debug;

use crate::core::{Card, CardId, DeckConfig, DeckError, DeckId, DeckResult, HoverPoint, Modifiers};
use crate::deck::{Deck, DeckView};
use crate::group::{DeckGroup, DeckListener, RouteOutcome};

use super::event::HostEvent;

/// Decks plus the group routing drags between them.
#[derive(Debug)]
pub struct Board<C> {
    decks: Vec<Deck<C>>,
    group: DeckGroup,
}

impl<C> Default for Board<C> {
    fn default() -> Self {
        Self {
            decks: Vec::new(),
            group: DeckGroup::new(),
        }
    }
}

impl<C: Card> Board<C> {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Membership
    // =========================================================================

    /// Mount a deck.
    pub fn add_deck(
        &mut self,
        config: DeckConfig,
        cards: Vec<C>,
        listener: Arc<dyn DeckListener>,
    ) -> DeckResult<DeckId> {
        let id = config.id;
        if self.group.is_member(id) {
            return Err(DeckError::DuplicateDeck(id));
        }
        let deck = Deck::new(config, cards)?;
        self.group.register_deck(id, listener)?;
        self.decks.push(deck);
        Ok(id)
    }

    /// Unmount a deck and return it.
    ///
    /// Removing the entered deck fires its `drag_left`; removing the
    /// origin ends the drag for the whole board.
    pub async fn remove_deck(&mut self, deck: DeckId) -> DeckResult<Deck<C>> {
        let index = self.index(deck)?;
        let origin = self.group.origin();
        let outcome = self.group.unregister_deck(deck).await?;

        let removed = self.decks.remove(index);
        if origin == Some(deck) {
            for other in &mut self.decks {
                other.on_external_deck_left().ok();
            }
        } else if let Some(origin) = origin {
            self.apply(outcome, origin);
        }
        Ok(removed)
    }

    /// Look up a deck.
    #[must_use]
    pub fn deck(&self, deck: DeckId) -> Option<&Deck<C>> {
        self.decks.iter().find(|d| d.id() == deck)
    }

    /// Look up a deck for direct card-list edits.
    pub fn deck_mut(&mut self, deck: DeckId) -> Option<&mut Deck<C>> {
        self.decks.iter_mut().find(|d| d.id() == deck)
    }

    /// Decks in mount order.
    #[must_use]
    pub fn decks(&self) -> &[Deck<C>] {
        &self.decks
    }

    /// The routing group.
    #[must_use]
    pub fn group(&self) -> &DeckGroup {
        &self.group
    }

    /// Views of every deck, in mount order.
    #[must_use]
    pub fn views(&self) -> Vec<DeckView> {
        self.decks.iter().map(Deck::view).collect()
    }

    fn index(&self, deck: DeckId) -> DeckResult<usize> {
        self.decks
            .iter()
            .position(|d| d.id() == deck)
            .ok_or(DeckError::UnknownDeck(deck))
    }

    fn views_of(&self, decks: &[DeckId]) -> Vec<DeckView> {
        self.decks
            .iter()
            .filter(|d| decks.contains(&d.id()))
            .map(Deck::view)
            .collect()
    }

    /// Apply a routing outcome to the deck controllers.
    fn apply(&mut self, outcome: RouteOutcome, origin: DeckId) {
        if let Some(left) = outcome.left {
            if let Some(deck) = self.deck_mut(left) {
                if left == origin {
                    deck.clear_drop_target();
                } else {
                    deck.on_external_deck_left().ok();
                }
            }
        }
        if let Some(entered) = outcome.entered.filter(|&d| d != origin) {
            if let Some(deck) = self.deck_mut(entered) {
                if let Err(error) = deck.on_external_deck_entered(origin) {
                    debug!(deck = %entered, %error, "deck not receiving");
                }
            }
        }
    }

    /// Clear selection in every deck except `keep`.
    fn clear_other_selections(&mut self, keep: DeckId) -> Vec<DeckId> {
        let mut cleared = Vec::new();
        for deck in &mut self.decks {
            if deck.id() != keep && !deck.selection().is_empty() {
                deck.clear_selection();
                cleared.push(deck.id());
            }
        }
        cleared
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Pointer pressed on a card.
    ///
    /// A selection change in one deck clears the others and is announced
    /// to every member.
    pub async fn pointer_down(
        &mut self,
        deck: DeckId,
        card: CardId,
        modifiers: Modifiers,
    ) -> DeckResult<Vec<DeckView>> {
        let index = self.index(deck)?;
        if !self.decks[index].on_pointer_down(card, modifiers)? {
            return Ok(vec![self.decks[index].view()]);
        }

        let mut affected = self.clear_other_selections(deck);
        affected.push(deck);
        self.group.route_deck_selected(deck).await?;
        Ok(self.views_of(&affected))
    }

    /// Clear a deck's selection.
    pub fn clear_selection(&mut self, deck: DeckId) -> DeckResult<Vec<DeckView>> {
        let index = self.index(deck)?;
        self.decks[index].clear_selection();
        Ok(vec![self.decks[index].view()])
    }

    // =========================================================================
    // Drag
    // =========================================================================

    /// Start a drag on `card` in `deck`.
    ///
    /// The pointer is over the origin at this point, so the origin becomes
    /// the entered deck straight away.
    pub async fn begin_drag(&mut self, deck: DeckId, card: CardId) -> DeckResult<Vec<DeckView>> {
        if self.group.is_dragging() {
            return Err(DeckError::AlreadyDragging);
        }
        let index = self.index(deck)?;
        {
            let origin = &self.decks[index];
            if !origin.config().drag_enabled {
                return Err(DeckError::DragDisabled(deck));
            }
            if !origin.contains(card) {
                return Err(DeckError::UnknownCard(card));
            }
        }

        let mut affected = Vec::new();
        if !self.decks[index].is_selected(card) {
            affected = self.clear_other_selections(deck);
            self.decks[index].toggle_select(card, false)?;
            self.group.route_deck_selected(deck).await?;
        }

        self.decks[index].begin_drag(card)?;
        self.group.route_drag_started(deck).await?;
        let outcome = self.group.route_drag_entered(deck).await?;
        self.apply(outcome, deck);

        affected.push(deck);
        Ok(self.views_of(&affected))
    }

    /// The drag entered `deck`.
    ///
    /// Entering a deck that refuses drops means the pointer is over no
    /// valid target: the current target is left and nothing is entered.
    pub async fn drag_enter(&mut self, deck: DeckId) -> DeckResult<Vec<DeckView>> {
        let origin = self.group.origin().ok_or(DeckError::NoActiveDrag)?;
        let index = self.index(deck)?;

        let outcome = if deck != origin && !self.decks[index].config().accepts_drops {
            match self.group.entered() {
                Some(current) => self.group.route_drag_left(current).await?,
                None => RouteOutcome::default(),
            }
        } else {
            self.group.route_drag_entered(deck).await?
        };

        self.apply(outcome, origin);
        let affected: Vec<DeckId> = outcome.left.into_iter().chain(outcome.entered).collect();
        Ok(self.views_of(&affected))
    }

    /// The drag left `deck`.
    pub async fn drag_leave(&mut self, deck: DeckId) -> DeckResult<Vec<DeckView>> {
        let origin = self.group.origin().ok_or(DeckError::NoActiveDrag)?;
        self.index(deck)?;

        let outcome = self.group.route_drag_left(deck).await?;
        self.apply(outcome, origin);
        Ok(self.views_of(&outcome.left.into_iter().collect::<Vec<_>>()))
    }

    /// The drag moved over `card` in `deck`.
    ///
    /// Enters `deck` first if the host skipped the enter event.
    pub async fn drag_over(
        &mut self,
        deck: DeckId,
        card: CardId,
        point: HoverPoint,
    ) -> DeckResult<Vec<DeckView>> {
        let origin = self.group.origin().ok_or(DeckError::NoActiveDrag)?;
        let index = self.index(deck)?;
        {
            let target = &self.decks[index];
            if !target.contains(card) {
                return Err(DeckError::UnknownCard(card));
            }
            if deck != origin && !target.config().accepts_drops {
                return Err(DeckError::DropsDisabled(deck));
            }
        }

        let mut affected = Vec::new();
        if self.group.entered() != Some(deck) {
            let outcome = self.group.route_drag_entered(deck).await?;
            self.apply(outcome, origin);
            affected.extend(outcome.left);
        }

        self.decks[index].notify_drag_position(card, point)?;
        affected.push(deck);
        Ok(self.views_of(&affected))
    }

    /// Finish the drag.
    ///
    /// A committed drag over the origin reorders within it. A committed
    /// drag over a sibling moves the payload there, unless the sibling
    /// cannot take it, in which case nothing moves. A drag released over
    /// no deck, or aborted, changes no order.
    pub async fn end_drag(&mut self, committed: bool) -> DeckResult<Vec<DeckView>> {
        let origin = self.group.origin().ok_or(DeckError::NoActiveDrag)?;
        let o = self.index(origin)?;
        let mut affected = vec![origin];

        // The host may have pruned the grabbed card away; routing still ends.
        let moved_to = if self.decks[o].is_dragging() {
            self.finish_drag(o, committed)?
        } else {
            debug!(%origin, "origin no longer dragging");
            None
        };
        affected.extend(self.group.entered());

        let outcome = self.group.route_drag_ended().await?;
        self.apply(outcome, origin);

        if let Some(target) = moved_to {
            affected.extend(self.clear_other_selections(target));
            self.group.route_deck_selected(target).await?;
        }

        affected.sort_unstable();
        affected.dedup();
        Ok(self.views_of(&affected))
    }

    /// Apply the end of the drag to the decks. Returns the deck that
    /// received the payload, if it moved.
    fn finish_drag(&mut self, o: usize, committed: bool) -> DeckResult<Option<DeckId>> {
        let origin = self.decks[o].id();
        let target = match self.group.entered() {
            Some(target) if committed && target != origin => target,
            entered => {
                let local = committed && entered == Some(origin);
                self.decks[o].end_drag(local)?;
                return Ok(None);
            }
        };

        let t = self.index(target)?;
        let payload: Vec<CardId> = self.decks[o].drag().payload().to_vec();
        if let Err(error) = self.decks[t].can_accept(&payload) {
            debug!(%origin, %target, %error, "drop refused");
            self.decks[o].end_drag(false)?;
            return Ok(None);
        }

        let cards = self.decks[o].take_payload()?;
        self.decks[t].accept_drop(cards)?;
        debug!(%origin, %target, moved = payload.len(), "cards moved between decks");
        Ok(Some(target))
    }

    // =========================================================================
    // Host events
    // =========================================================================

    /// Apply one host event and return the views of the decks it touched.
    ///
    /// Events the engine ignores (stale ids, out-of-order delivery,
    /// duplicates) are logged and produce no views and no state change.
    pub async fn dispatch(&mut self, event: HostEvent) -> Vec<DeckView> {
        let kind = event.kind();
        let result = match event {
            HostEvent::PointerDown { deck, card, modifiers } => {
                self.pointer_down(deck, card, modifiers).await
            }
            HostEvent::DragStart { deck, card } => self.begin_drag(deck, card).await,
            HostEvent::DragEnter { deck } => self.drag_enter(deck).await,
            HostEvent::DragLeave { deck } => self.drag_leave(deck).await,
            HostEvent::DragOver { deck, card, point } => self.drag_over(deck, card, point).await,
            HostEvent::Drop => self.end_drag(true).await,
            HostEvent::DragCancel => self.end_drag(false).await,
            HostEvent::ClearSelection { deck } => self.clear_selection(deck),
        };

        match result {
            Ok(views) => views,
            Err(error) => {
                debug!(event = kind, %error, "event ignored");
                Vec::new()
            }
        }
    }
}
