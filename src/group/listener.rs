//! Typed listeners for group routing signals.
//!
//! Each deck registered with a `DeckGroup` supplies one listener. The
//! host implements it to react to routing signals, e.g. to play a
//! highlight transition. Callbacks are awaited one at a time, so a
//! listener may take as long as its animation needs without breaking the
//! leave-before-enter ordering.

use async_trait::async_trait;

use crate::core::DeckId;

/// Receives routing signals for one deck.
///
/// Every method has an empty default, so listeners implement only what
/// they care about.
#[async_trait]
pub trait DeckListener: Send + Sync {
    /// A card was selected in `deck`. Sent to every member.
    async fn deck_selected(&self, _deck: DeckId) {}

    /// A drag began in `origin`. Sent to every member except `origin`.
    async fn drag_started(&self, _origin: DeckId) {}

    /// The drag from `origin` is now over `target` (this deck).
    async fn drag_entered(&self, _target: DeckId, _origin: DeckId) {}

    /// The drag from `origin` is no longer over `target` (this deck).
    async fn drag_left(&self, _target: DeckId, _origin: DeckId) {}
}

/// Listener that ignores every signal.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopListener;

#[async_trait]
impl DeckListener for NoopListener {}
