//! Cross-deck drag routing.
//!
//! A deck group is a set of decks sharing one drag focus, e.g. the
//! columns of a board. The coordinator tracks where the drag began and
//! which deck it is over, and signals member listeners in a strict order.
//!
//! ## Key Types
//!
//! - `DeckGroup`: Membership and drag focus
//! - `DeckListener`: Async callbacks a deck registers with the group
//! - `RouteOutcome`: Which decks a routing call left and entered

pub mod coordinator;
pub mod listener;

pub use coordinator::{DeckGroup, RouteOutcome};
pub use listener::{DeckListener, NoopListener};
