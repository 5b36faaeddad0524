pub mod input;
pub mod output;

pub use input::{load_pair, OrderSource};
pub use output::{create_writer, OutputFormat, OutputWriter};

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
