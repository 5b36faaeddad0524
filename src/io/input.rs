//! Order sources: inline JSON, files, or standard input.

use crate::core::WeakOrder;
use anyhow::{Context, Result};
use std::fmt;
use std::io::Read;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderSource {
    /// Encoded order given directly on the command line
    Inline(String),
    File(PathBuf),
    Stdin,
}

impl OrderSource {
    /// Classify a command-line argument.
    ///
    /// `-` is standard input, anything starting with `[` is inline JSON,
    /// everything else is a path.
    pub fn from_arg(arg: &str) -> Self {
        let trimmed = arg.trim();
        if trimmed == "-" {
            Self::Stdin
        } else if trimmed.starts_with('[') {
            Self::Inline(trimmed.to_string())
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    pub fn read_text(&self) -> Result<String> {
        match self {
            Self::Inline(text) => Ok(text.clone()),
            Self::File(path) => super::read_file(path),
            Self::Stdin => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read order from standard input")?;
                Ok(text)
            }
        }
    }

    pub fn load(&self) -> Result<WeakOrder> {
        let text = self.read_text()?;
        let order = text
            .trim()
            .parse::<WeakOrder>()
            .with_context(|| format!("Invalid weak order from {self}"))?;
        log::debug!("Loaded {} elements in {} groups from {}", order.len(), order.group_count(), self);
        Ok(order)
    }
}

impl fmt::Display for OrderSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inline(_) => write!(f, "inline argument"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdin => write!(f, "standard input"),
        }
    }
}

/// Load the two orders of a fusion run.
pub fn load_pair(left: &OrderSource, right: &OrderSource) -> Result<(WeakOrder, WeakOrder)> {
    if *left == OrderSource::Stdin && *right == OrderSource::Stdin {
        anyhow::bail!("Only one order can be read from standard input");
    }
    Ok((left.load()?, right.load()?))
}
