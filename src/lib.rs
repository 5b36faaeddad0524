//! Ranking relation fusion.
//!
//! Given two weak orders over the same elements, rankfuse builds a
//! dominance matrix for each, extracts the conflict core both orders agree
//! on, and reconstructs a single consensus weak order from it.

// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod consensus;
pub mod core;
pub mod io;
pub mod relation;

// Re-export commonly used types
pub use crate::core::{ElementId, FusionError, OrderEntry, Result, TieGroup, WeakOrder};

pub use crate::relation::{
    build_dominance_matrix, estimate, estimate_all, extract_conflict_core, BoolMatrix,
    ConflictCore, DominanceMatrix, FusedMatrix, RankEstimate,
};

pub use crate::consensus::{
    fuse, fuse_orders, group_elements, recluster, recluster_tiers, FusionOptions, FusionReport,
    GroupingStrategy, ScoredGroup,
};

pub use crate::config::RankfuseConfig;
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
