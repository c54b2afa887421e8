//! # card-deck
//!
//! A framework-independent interaction engine for draggable cards.
//!
//! ## Design Principles
//!
//! 1. **Pure State**: The engine holds selection, drag and order state and
//!    emits `DeckView` snapshots. Rendering is entirely the host's job.
//!
//! 2. **Forgiving Input**: Host event delivery is unreliable (duplicates,
//!    stale ids, events after teardown). Every operation either applies
//!    completely or returns a `DeckError` and changes nothing.
//!
//! 3. **Explicit Identity**: Cards are compared by their `CardId` key,
//!    never by value or reference.
//!
//! ## Architecture
//!
//! - **Deck**: One ordered card list with its selection and drag
//!   lifecycle. Synchronous.
//!
//! - **Deck Group**: Routes cross-deck drag focus so at most one deck is
//!   the entered drop target. Listener callbacks are async and awaited in
//!   order, so a deck's "left" always completes before the next deck's
//!   "entered".
//!
//! - **Board**: Decks plus a group, wired together, including moves of
//!   cards between decks.
//!
//! ## Modules
//!
//! - `core`: Card and deck ids, configuration, pointer input, errors
//! - `deck`: Selection, drag state, the deck controller, render views
//! - `group`: Deck group coordinator and listener trait
//! - `board`: Board and host events
//! - `presets`: Ready-made board layouts (Kanban)

pub mod core;
pub mod deck;
pub mod group;
pub mod board;
pub mod presets;

// Re-export commonly used types
pub use crate::core::{
    Card, CardId,
    DeckId, DeckConfig,
    DeckError, DeckResult,
    HoverHalf, HoverPoint, Modifiers,
};

pub use crate::deck::{Deck, DeckState, DeckView, DragState, SelectionSet};

pub use crate::group::{DeckGroup, DeckListener, NoopListener, RouteOutcome};

pub use crate::board::{Board, HostEvent};

pub use crate::presets::KanbanBuilder;
