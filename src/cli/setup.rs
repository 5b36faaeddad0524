//! Setup and initialization functions for the CLI
//!
//! Logging goes to stderr so stdout carries only the serialized result.

use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the verbosity-derived log filter
pub const LOG_ENV_VAR: &str = "RANKFUSE_LOG";

/// Map `-v` repetitions to a default filter directive
pub fn filter_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global tracing subscriber once at startup.
///
/// `log` records from dependencies are bridged into the same subscriber.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(filter_for_verbosity(verbosity)));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if let Err(e) = result {
        // Already configured - this is fine, just ignore
        eprintln!("Note: Logging already configured: {}", e);
    }
}

/// Disable coloured output when requested or when NO_COLOR is set
pub fn configure_colors(plain: bool) {
    if plain || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }
}
