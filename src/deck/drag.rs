//! Drag state and reordering.
//!
//! A deck is either idle or dragging. Idle carries nothing, so "not
//! dragging" can never coexist with a dragged card, hover target or
//! insertion index. A drag carries the card the pointer grabbed, the
//! payload (every card that moves with it) and the live drop target.
//!
//! ## Insertion index
//!
//! The insertion index is a position in the deck's card sequence *before*
//! any card is removed: the hovered card's index when the pointer is in
//! its upper half, one past it otherwise. When a drop commits, the
//! payload is lifted out as one block and the index is shifted left by
//! the number of payload cards that preceded it.

use smallvec::SmallVec;

use crate::core::{Card, CardId, DeckId, HoverHalf};

/// Ids carried by a drag. Most drags move one to a handful of cards.
pub type Payload = SmallVec<[CardId; 4]>;

/// Live drop target: the hovered card and the index a drop would use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DropTarget {
    /// Card currently under the pointer.
    pub hover: Option<CardId>,
    /// Where a committed drop would insert.
    pub insertion_index: Option<usize>,
}

impl DropTarget {
    /// Point the target at `hover`, sitting at `hover_index`.
    ///
    /// Returns the new insertion index.
    pub fn update(&mut self, hover: CardId, hover_index: usize, half: HoverHalf) -> usize {
        let index = insertion_index(hover_index, half);
        self.hover = Some(hover);
        self.insertion_index = Some(index);
        index
    }

    /// Forget the hover target and index.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// An in-progress drag that began in this deck.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveDrag {
    /// The card the pointer grabbed.
    pub dragged: CardId,
    /// Cards moving with the drag, in deck order. Always contains `dragged`.
    pub payload: Payload,
    /// Live drop target within this deck.
    pub target: DropTarget,
}

impl ActiveDrag {
    /// Start a drag anchored on `dragged` carrying `payload`.
    ///
    /// `dragged` is added to the payload if the caller left it out.
    #[must_use]
    pub fn new(dragged: CardId, mut payload: Payload) -> Self {
        if !payload.contains(&dragged) {
            payload.push(dragged);
        }
        Self {
            dragged,
            payload,
            target: DropTarget::default(),
        }
    }
}

/// Drag lifecycle of a single deck.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A drag started in this deck.
    Dragging(ActiveDrag),
}

impl DragState {
    /// Check if a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// The grabbed card, if dragging.
    #[must_use]
    pub fn dragged(&self) -> Option<CardId> {
        match self {
            Self::Idle => None,
            Self::Dragging(drag) => Some(drag.dragged),
        }
    }

    /// The live drop target, if dragging.
    #[must_use]
    pub fn target(&self) -> Option<&DropTarget> {
        match self {
            Self::Idle => None,
            Self::Dragging(drag) => Some(&drag.target),
        }
    }

    /// The payload, empty when idle.
    #[must_use]
    pub fn payload(&self) -> &[CardId] {
        match self {
            Self::Idle => &[],
            Self::Dragging(drag) => &drag.payload,
        }
    }

    /// Short name of the state, for diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Dragging(_) => "dragging",
        }
    }
}

/// A drag from a sibling deck hovering this one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Receiving {
    /// Deck the drag began in.
    pub origin: DeckId,
    /// Live drop target within this deck.
    pub target: DropTarget,
}

impl Receiving {
    /// Start receiving a drag from `origin`.
    #[must_use]
    pub fn new(origin: DeckId) -> Self {
        Self {
            origin,
            target: DropTarget::default(),
        }
    }
}

/// Insertion index for a pointer over the card at `hover_index`.
#[must_use]
pub const fn insertion_index(hover_index: usize, half: HoverHalf) -> usize {
    match half {
        HoverHalf::Upper => hover_index,
        HoverHalf::Lower => hover_index + 1,
    }
}

/// Move every card whose id is in `payload` to `insertion`, as one block.
///
/// The block keeps the cards' current relative order. `insertion` is an
/// index into `cards` as it is before the move and is clamped to its
/// length. Returns the index of the first moved card afterwards.
///
/// The result is always a permutation of the input.
pub fn move_block<C: Card>(cards: &mut Vec<C>, payload: &[CardId], insertion: usize) -> usize {
    let insertion = insertion.min(cards.len());
    let preceding = cards[..insertion]
        .iter()
        .filter(|c| payload.contains(&c.id()))
        .count();

    let (block, mut rest): (Vec<C>, Vec<C>) =
        cards.drain(..).partition(|c| payload.contains(&c.id()));

    let at = insertion - preceding;
    rest.splice(at..at, block);
    *cards = rest;
    at
}

/// Remove every card whose id is in `payload`, preserving their order.
pub fn extract_block<C: Card>(cards: &mut Vec<C>, payload: &[CardId]) -> Vec<C> {
    let (block, rest): (Vec<C>, Vec<C>) =
        cards.drain(..).partition(|c| payload.contains(&c.id()));
    *cards = rest;
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn ids(raw: &[u32]) -> Vec<CardId> {
        raw.iter().copied().map(CardId).collect()
    }

    #[test]
    fn test_insertion_index() {
        assert_eq!(insertion_index(0, HoverHalf::Upper), 0);
        assert_eq!(insertion_index(0, HoverHalf::Lower), 1);
        assert_eq!(insertion_index(4, HoverHalf::Upper), 4);
        assert_eq!(insertion_index(4, HoverHalf::Lower), 5);
    }

    #[test]
    fn test_move_single_up() {
        // [X, Y, Z] drag Y before X
        let mut cards = ids(&[1, 2, 3]);
        let at = move_block(&mut cards, &[CardId(2)], 0);
        assert_eq!(cards, ids(&[2, 1, 3]));
        assert_eq!(at, 0);
    }

    #[test]
    fn test_move_single_down() {
        // [X, Y, Z] drag X after Z
        let mut cards = ids(&[1, 2, 3]);
        let at = move_block(&mut cards, &[CardId(1)], 3);
        assert_eq!(cards, ids(&[2, 3, 1]));
        assert_eq!(at, 2);
    }

    #[test]
    fn test_move_onto_own_slot_is_stable() {
        let mut cards = ids(&[1, 2, 3]);
        move_block(&mut cards, &[CardId(2)], 1);
        assert_eq!(cards, ids(&[1, 2, 3]));

        move_block(&mut cards, &[CardId(2)], 2);
        assert_eq!(cards, ids(&[1, 2, 3]));
    }

    #[test]
    fn test_move_scattered_block_keeps_order() {
        // Payload 1 and 4 (deck order), dropped before 3
        let mut cards = ids(&[1, 2, 3, 4, 5]);
        let at = move_block(&mut cards, &[CardId(4), CardId(1)], 2);
        assert_eq!(cards, ids(&[2, 1, 4, 3, 5]));
        assert_eq!(at, 1);
    }

    #[test]
    fn test_move_clamps_index() {
        let mut cards = ids(&[1, 2, 3]);
        move_block(&mut cards, &[CardId(1)], 99);
        assert_eq!(cards, ids(&[2, 3, 1]));
    }

    #[test]
    fn test_extract_block() {
        let mut cards = ids(&[1, 2, 3, 4]);
        let block = extract_block(&mut cards, &[CardId(3), CardId(1)]);
        assert_eq!(block, ids(&[1, 3]));
        assert_eq!(cards, ids(&[2, 4]));
    }

    #[test]
    fn test_active_drag_always_carries_dragged() {
        let drag = ActiveDrag::new(CardId(9), smallvec![CardId(1)]);
        assert!(drag.payload.contains(&CardId(9)));
        assert_eq!(drag.target, DropTarget::default());
    }

    #[test]
    fn test_idle_carries_nothing() {
        let state = DragState::Idle;
        assert!(!state.is_dragging());
        assert_eq!(state.dragged(), None);
        assert!(state.target().is_none());
        assert!(state.payload().is_empty());
    }

    #[test]
    fn test_drop_target_update_and_clear() {
        let mut target = DropTarget::default();
        assert_eq!(target.update(CardId(5), 2, HoverHalf::Lower), 3);
        assert_eq!(target.hover, Some(CardId(5)));

        target.clear();
        assert_eq!(target, DropTarget::default());
    }
}
