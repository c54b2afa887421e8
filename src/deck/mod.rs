//! Single-deck state: selection, drag lifecycle, ordering.
//!
//! ## Key Types
//!
//! - `Deck`: One ordered card list with its selection and drag state
//! - `SelectionSet`: Selected card ids plus a range anchor
//! - `DragState`: Idle, or dragging with a payload and drop target
//! - `DeckView`: Render snapshot handed to the host

pub mod controller;
pub mod drag;
pub mod selection;
pub mod view;

pub use controller::Deck;
pub use drag::{ActiveDrag, DragState, DropTarget, Payload, Receiving};
pub use selection::SelectionSet;
pub use view::{DeckState, DeckView};
