//! Deck group coordinator.
//!
//! Serializes cross-deck drag focus: at any time at most one member deck
//! is the entered drop target. Entering a new deck always fires the
//! previous deck's `drag_left` (and awaits it) before the new deck's
//! `drag_entered`.
//!
//! The coordinator only knows deck ids and listeners. It never sees card
//! data; the board applies each `RouteOutcome` to the decks themselves.

use std::sync::Arc;

use tracing::debug;

use crate::core::{DeckError, DeckId, DeckResult};

use super::listener::DeckListener;

/// Which decks a routing call left and entered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteOutcome {
    /// Deck whose `drag_left` fired.
    pub left: Option<DeckId>,
    /// Deck whose `drag_entered` fired.
    pub entered: Option<DeckId>,
}

impl RouteOutcome {
    /// Check if the call changed nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.entered.is_none()
    }
}

/// Routes drag focus between member decks.
#[derive(Default)]
pub struct DeckGroup {
    /// Members in registration order.
    members: Vec<(DeckId, Arc<dyn DeckListener>)>,

    /// Deck the active drag began in.
    origin: Option<DeckId>,

    /// Deck the active drag is over.
    entered: Option<DeckId>,
}

impl std::fmt::Debug for DeckGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeckGroup")
            .field("members", &self.members.iter().map(|(id, _)| *id).collect::<Vec<_>>())
            .field("origin", &self.origin)
            .field("entered", &self.entered)
            .finish()
    }
}

impl DeckGroup {
    /// Create an empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a deck to the group.
    pub fn register_deck(&mut self, deck: DeckId, listener: Arc<dyn DeckListener>) -> DeckResult<()> {
        if self.is_member(deck) {
            return Err(DeckError::DuplicateDeck(deck));
        }
        self.members.push((deck, listener));
        debug!(%deck, members = self.members.len(), "deck registered");
        Ok(())
    }

    /// Remove a deck from the group.
    ///
    /// If the deck is the entered target its `drag_left` fires first. If
    /// it is the drag origin, the drag is over: the entered deck (if any)
    /// is left and the group returns to neutral.
    pub async fn unregister_deck(&mut self, deck: DeckId) -> DeckResult<RouteOutcome> {
        if !self.is_member(deck) {
            return Err(DeckError::UnknownDeck(deck));
        }

        let outcome = if self.entered == Some(deck) || self.origin == Some(deck) {
            let left = self.leave_entered().await;
            if self.origin == Some(deck) {
                self.origin = None;
            }
            RouteOutcome { left, entered: None }
        } else {
            RouteOutcome::default()
        };

        self.members.retain(|(id, _)| *id != deck);
        debug!(%deck, members = self.members.len(), "deck unregistered");
        Ok(outcome)
    }

    /// Check if a deck is registered.
    #[must_use]
    pub fn is_member(&self, deck: DeckId) -> bool {
        self.members.iter().any(|(id, _)| *id == deck)
    }

    /// Registered deck ids, in registration order.
    pub fn members(&self) -> impl Iterator<Item = DeckId> + '_ {
        self.members.iter().map(|(id, _)| *id)
    }

    /// Number of registered decks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if no deck is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Deck the active drag began in.
    #[must_use]
    pub fn origin(&self) -> Option<DeckId> {
        self.origin
    }

    /// Deck the active drag is over.
    #[must_use]
    pub fn entered(&self) -> Option<DeckId> {
        self.entered
    }

    /// Check if a drag is being routed.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    fn listener(&self, deck: DeckId) -> Option<Arc<dyn DeckListener>> {
        self.members
            .iter()
            .find(|(id, _)| *id == deck)
            .map(|(_, listener)| Arc::clone(listener))
    }

    fn listeners(&self) -> Vec<(DeckId, Arc<dyn DeckListener>)> {
        self.members
            .iter()
            .map(|(id, listener)| (*id, Arc::clone(listener)))
            .collect()
    }

    /// Fire `drag_left` on the entered deck, if any, and clear it.
    async fn leave_entered(&mut self) -> Option<DeckId> {
        let left = self.entered.take()?;
        let origin = self.origin.unwrap_or(left);
        if let Some(listener) = self.listener(left) {
            listener.drag_left(left, origin).await;
        }
        debug!(deck = %left, %origin, "drag left");
        Some(left)
    }

    /// Tell every member that a card was selected in `deck`.
    pub async fn route_deck_selected(&mut self, deck: DeckId) -> DeckResult<()> {
        if !self.is_member(deck) {
            return Err(DeckError::UnknownDeck(deck));
        }
        for (_, listener) in self.listeners() {
            listener.deck_selected(deck).await;
        }
        Ok(())
    }

    /// Record `origin` as the drag source and tell the other members.
    ///
    /// No deck is entered yet.
    pub async fn route_drag_started(&mut self, origin: DeckId) -> DeckResult<()> {
        if !self.is_member(origin) {
            return Err(DeckError::UnknownDeck(origin));
        }
        if self.origin.is_some() {
            return Err(DeckError::AlreadyDragging);
        }

        self.origin = Some(origin);
        self.entered = None;
        debug!(%origin, "drag started");

        for (id, listener) in self.listeners() {
            if id != origin {
                listener.drag_started(origin).await;
            }
        }
        Ok(())
    }

    /// Make `target` the entered deck.
    ///
    /// Leaves the previously entered deck first. Entering the deck that is
    /// already entered does nothing.
    pub async fn route_drag_entered(&mut self, target: DeckId) -> DeckResult<RouteOutcome> {
        if !self.is_member(target) {
            return Err(DeckError::UnknownDeck(target));
        }
        let Some(origin) = self.origin else {
            return Err(DeckError::NoActiveDrag);
        };
        if self.entered == Some(target) {
            return Ok(RouteOutcome::default());
        }

        let left = self.leave_entered().await;
        if let Some(listener) = self.listener(target) {
            listener.drag_entered(target, origin).await;
        }
        self.entered = Some(target);
        debug!(deck = %target, %origin, "drag entered");

        Ok(RouteOutcome {
            left,
            entered: Some(target),
        })
    }

    /// The pointer left `target` without entering another deck.
    ///
    /// Does nothing unless `target` is the entered deck.
    pub async fn route_drag_left(&mut self, target: DeckId) -> DeckResult<RouteOutcome> {
        if !self.is_member(target) {
            return Err(DeckError::UnknownDeck(target));
        }
        if self.origin.is_none() {
            return Err(DeckError::NoActiveDrag);
        }
        if self.entered != Some(target) {
            return Ok(RouteOutcome::default());
        }

        let left = self.leave_entered().await;
        Ok(RouteOutcome { left, entered: None })
    }

    /// The drag finished. Leaves the entered deck and returns to neutral.
    pub async fn route_drag_ended(&mut self) -> DeckResult<RouteOutcome> {
        let Some(origin) = self.origin else {
            return Err(DeckError::NoActiveDrag);
        };

        let left = self.leave_entered().await;
        self.origin = None;
        debug!(%origin, "drag ended");

        Ok(RouteOutcome { left, entered: None })
    }
}
