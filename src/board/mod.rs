//! Boards: decks wired to a group coordinator.
//!
//! ## Key Types
//!
//! - `Board`: Owns decks and a `DeckGroup`, handles cross-deck moves
//! - `HostEvent`: One discrete pointer/drag event from the host

pub mod event;
pub mod manager;

pub use event::HostEvent;
pub use manager::Board;
