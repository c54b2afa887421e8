//! Host events.
//!
//! The host translates its own pointer and drag events into `HostEvent`s
//! and hands them to `Board::dispatch`. Events serialize as internally
//! tagged JSON, so a script layer can post them directly:
//!
//! ```
//! use card_deck::board::HostEvent;
//! use card_deck::core::{CardId, DeckId, Modifiers};
//!
//! let event: HostEvent =
//!     serde_json::from_str(r#"{ "kind": "pointer_down", "deck": 0, "card": 7 }"#).unwrap();
//!
//! assert_eq!(
//!     event,
//!     HostEvent::PointerDown { deck: DeckId(0), card: CardId(7), modifiers: Modifiers::NONE }
//! );
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{CardId, DeckId, HoverPoint, Modifiers};

/// One discrete interaction event from the host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HostEvent {
    /// Pointer pressed on a card.
    PointerDown {
        deck: DeckId,
        card: CardId,
        #[serde(default)]
        modifiers: Modifiers,
    },

    /// The host started a drag on a card.
    DragStart { deck: DeckId, card: CardId },

    /// The drag entered a deck's bounds.
    DragEnter { deck: DeckId },

    /// The drag left a deck's bounds.
    DragLeave { deck: DeckId },

    /// The drag moved over a card.
    DragOver {
        deck: DeckId,
        card: CardId,
        point: HoverPoint,
    },

    /// The pointer was released over the current target.
    Drop,

    /// The drag was cancelled (escape, released outside any target).
    DragCancel,

    /// Selection in a deck was cleared (e.g. click on empty space).
    ClearSelection { deck: DeckId },
}

impl HostEvent {
    /// Short name of the event kind, for diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::PointerDown { .. } => "pointer_down",
            Self::DragStart { .. } => "drag_start",
            Self::DragEnter { .. } => "drag_enter",
            Self::DragLeave { .. } => "drag_leave",
            Self::DragOver { .. } => "drag_over",
            Self::Drop => "drop",
            Self::DragCancel => "drag_cancel",
            Self::ClearSelection { .. } => "clear_selection",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_variant_json() {
        let event: HostEvent = serde_json::from_str(r#"{ "kind": "drop" }"#).unwrap();
        assert_eq!(event, HostEvent::Drop);
        assert_eq!(event.kind(), "drop");
    }

    #[test]
    fn test_drag_over_json() {
        let json = r#"{ "kind": "drag_over", "deck": 1, "card": 4,
                        "point": { "offset_y": 3.0, "height": 20.0 } }"#;
        let event: HostEvent = serde_json::from_str(json).unwrap();
        assert_eq!(
            event,
            HostEvent::DragOver {
                deck: DeckId(1),
                card: CardId(4),
                point: HoverPoint::new(3.0, 20.0),
            }
        );
    }

    #[test]
    fn test_modifiers_json() {
        let json = r#"{ "kind": "pointer_down", "deck": 0, "card": 1,
                        "modifiers": { "range": true } }"#;
        let event: HostEvent = serde_json::from_str(json).unwrap();
        assert_eq!(
            event,
            HostEvent::PointerDown { deck: DeckId(0), card: CardId(1), modifiers: Modifiers::RANGE }
        );
    }
}
