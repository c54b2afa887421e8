//! Pointer input as delivered by the host.
//!
//! The host measures the hovered card's bounding box and reports the
//! pointer's vertical offset inside it. The engine only needs to know
//! which half the pointer is in.

use serde::{Deserialize, Serialize};

/// Modifier keys held during a pointer event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    /// Toggle the card in or out of the selection (Ctrl/Cmd).
    pub additive: bool,
    /// Extend the selection from the anchor to the card (Shift).
    pub range: bool,
}

impl Modifiers {
    /// No modifier keys held.
    pub const NONE: Self = Self { additive: false, range: false };

    /// Additive (toggle) selection.
    pub const ADDITIVE: Self = Self { additive: true, range: false };

    /// Range selection.
    pub const RANGE: Self = Self { additive: false, range: true };
}

/// Which half of the hovered card the pointer is over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverHalf {
    /// Insert before the hovered card.
    Upper,
    /// Insert after the hovered card.
    Lower,
}

/// Pointer position relative to the hovered card's bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HoverPoint {
    /// Distance from the top edge of the card.
    pub offset_y: f64,
    /// Height of the card.
    pub height: f64,
}

impl HoverPoint {
    /// Create a hover point.
    #[must_use]
    pub const fn new(offset_y: f64, height: f64) -> Self {
        Self { offset_y, height }
    }

    /// A point in the upper half of a unit-height card.
    pub const UPPER: Self = Self::new(0.25, 1.0);

    /// A point in the lower half of a unit-height card.
    pub const LOWER: Self = Self::new(0.75, 1.0);

    /// Which half of the card this point falls in.
    ///
    /// The split is at exactly 50%; a point on the midline counts as the
    /// lower half. Degenerate boxes (zero or NaN height) also resolve to
    /// the lower half.
    #[must_use]
    pub fn half(self) -> HoverHalf {
        if self.offset_y * 2.0 < self.height {
            HoverHalf::Upper
        } else {
            HoverHalf::Lower
        }
    }
}
