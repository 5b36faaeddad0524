//! CLI command implementations for rankfuse operations.
//!
//! Available commands:
//! - **fuse**: Reconstruct the consensus of two weak orders
//! - **core**: Print the fused agreement matrix
//! - **contradictions**: List pairs the two orders rank in opposite directions
//! - **matrix**: Print the dominance matrix of one order
//! - **init**: Initialize a new rankfuse configuration file

pub mod core;
pub mod fuse;
pub mod init;
pub mod matrix;

pub use self::core::{contradictions_command, core_command, CoreConfig};
pub use fuse::{fuse_command, FuseConfig};
pub use init::init_config;
pub use matrix::matrix_command;

use crate::config::{load_config, load_config_file, RankfuseConfig};
use anyhow::Result;
use std::path::Path;

/// Explicit config file if one was given, otherwise the discovered one
pub fn resolve_config(explicit: Option<&Path>) -> Result<RankfuseConfig> {
    match explicit {
        Some(path) => load_config_file(path),
        None => Ok(load_config()),
    }
}
