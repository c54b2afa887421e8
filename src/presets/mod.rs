//! Ready-made board layouts.

pub mod kanban;

pub use kanban::{lane_id, KanbanBuilder};
