//! CLI module for rankfuse
//!
//! This module provides the command-line interface for rankfuse, including:
//! - Argument parsing (`args`)
//! - Runtime setup (`setup`)

pub mod args;
pub mod setup;

// Re-export commonly used types for convenience
pub use args::{Cli, Commands, OrderPair};
pub use setup::{configure_colors, init_logging};

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    args::parse_args()
}
