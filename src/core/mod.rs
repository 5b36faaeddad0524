//! Core data model: weak orders and the engine error type.

pub mod errors;
pub mod order;

pub use errors::{FusionError, Result};
pub use order::{ElementId, OrderEntry, TieGroup, WeakOrder};
