//! Selection set for a single deck.
//!
//! Tracks which cards are selected, independent of any drag. The set knows
//! nothing about deck order or membership; the deck controller checks that
//! a card exists before asking the set to select it, and prunes the set
//! whenever cards leave the deck.

use rustc_hash::FxHashSet;

use crate::core::CardId;

/// Selected card ids plus the anchor used for range selection.
///
/// The anchor is the card most recently selected by a single or additive
/// click. Range selection extends from it.
#[derive(Clone, Debug, Default)]
pub struct SelectionSet {
    selected: FxHashSet<CardId>,
    anchor: Option<CardId>,
}

impl SelectionSet {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection with a single card.
    pub fn select_only(&mut self, card: CardId) {
        self.selected.clear();
        self.selected.insert(card);
        self.anchor = Some(card);
    }

    /// Toggle membership of a card.
    ///
    /// Returns `true` if the card is selected afterwards.
    pub fn toggle(&mut self, card: CardId) -> bool {
        if self.selected.remove(&card) {
            if self.anchor == Some(card) {
                self.anchor = None;
            }
            false
        } else {
            self.selected.insert(card);
            self.anchor = Some(card);
            true
        }
    }

    /// Replace the selection with `cards`, keeping the current anchor.
    pub fn select_many(&mut self, cards: impl IntoIterator<Item = CardId>) {
        self.selected.clear();
        self.selected.extend(cards);
        if self.anchor.is_some_and(|a| !self.selected.contains(&a)) {
            self.anchor = None;
        }
    }

    /// Remove a single card. Returns `true` if it was selected.
    pub fn remove(&mut self, card: CardId) -> bool {
        if self.anchor == Some(card) {
            self.anchor = None;
        }
        self.selected.remove(&card)
    }

    /// Keep only the cards for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(CardId) -> bool) {
        self.selected.retain(|&c| keep(c));
        if self.anchor.is_some_and(|a| !self.selected.contains(&a)) {
            self.anchor = None;
        }
    }

    /// Empty the selection.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.anchor = None;
    }

    /// Check if a card is selected.
    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.selected.contains(&card)
    }

    /// The range-selection anchor, if any.
    #[must_use]
    pub fn anchor(&self) -> Option<CardId> {
        self.anchor
    }

    /// Number of selected cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Iterate selected ids (unordered).
    pub fn iter(&self) -> impl Iterator<Item = CardId> + '_ {
        self.selected.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_only_replaces() {
        let mut set = SelectionSet::new();
        set.select_only(CardId(1));
        set.select_only(CardId(2));

        assert!(!set.contains(CardId(1)));
        assert!(set.contains(CardId(2)));
        assert_eq!(set.len(), 1);
        assert_eq!(set.anchor(), Some(CardId(2)));
    }

    #[test]
    fn test_toggle() {
        let mut set = SelectionSet::new();

        assert!(set.toggle(CardId(1)));
        assert!(set.toggle(CardId(2)));
        assert_eq!(set.len(), 2);
        assert_eq!(set.anchor(), Some(CardId(2)));

        // Toggling the anchor off drops the anchor
        assert!(!set.toggle(CardId(2)));
        assert_eq!(set.anchor(), None);
        assert!(set.contains(CardId(1)));
    }

    #[test]
    fn test_select_many_keeps_anchor_when_present() {
        let mut set = SelectionSet::new();
        set.select_only(CardId(3));

        set.select_many([CardId(3), CardId(4), CardId(5)]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.anchor(), Some(CardId(3)));

        set.select_many([CardId(6)]);
        assert_eq!(set.anchor(), None);
    }

    #[test]
    fn test_retain_prunes_anchor() {
        let mut set = SelectionSet::new();
        set.toggle(CardId(1));
        set.toggle(CardId(2));

        set.retain(|c| c != CardId(2));
        assert!(set.contains(CardId(1)));
        assert!(!set.contains(CardId(2)));
        assert_eq!(set.anchor(), None);
    }

    #[test]
    fn test_clear() {
        let mut set = SelectionSet::new();
        set.select_only(CardId(1));
        set.clear();

        assert!(set.is_empty());
        assert_eq!(set.anchor(), None);
    }
}
