//! Relational algebra over weak orders.
//!
//! - [`dominance`]: one weak order → dominance matrix
//! - [`conflict`]: two dominance matrices → conflict core
//! - [`estimate`]: dominance matrix → per-element rank estimates

pub mod conflict;
pub mod dominance;
pub mod estimate;
pub mod matrix;

pub use conflict::{extract_conflict_core, ConflictCore, FusedMatrix};
pub use dominance::{build_dominance_matrix, DominanceMatrix};
pub use estimate::{estimate, estimate_all, RankEstimate};
pub use matrix::BoolMatrix;
