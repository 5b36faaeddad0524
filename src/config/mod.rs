//! Configuration for rankfuse.
//!
//! Settings live in `.rankfuse.toml`, discovered in the working directory
//! or one of its ancestors, or passed explicitly with `--config`. Command
//! line flags override file settings, which override built-in defaults.

pub mod core;
pub mod loader;

pub use self::core::{EngineConfig, GroupingConfig, OutputConfig, RankfuseConfig, DEFAULT_CONFIG};
pub use loader::{load_config, load_config_file, load_config_from, parse_config, CONFIG_FILE_NAME};
