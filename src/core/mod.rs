//! Core engine types: card and deck identity, configuration, input, errors.
//!
//! This module contains the building blocks shared by decks, the group
//! coordinator and boards. Hosts configure decks via `DeckConfig` rather
//! than modifying the engine.

pub mod card;
pub mod config;
pub mod error;
pub mod input;

pub use card::{Card, CardId};
pub use config::{DeckConfig, DeckId};
pub use error::{DeckError, DeckResult};
pub use input::{HoverHalf, HoverPoint, Modifiers};
