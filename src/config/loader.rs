use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use super::core::RankfuseConfig;

pub const CONFIG_FILE_NAME: &str = ".rankfuse.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to parse config from a TOML string
pub fn parse_config(contents: &str) -> Result<RankfuseConfig, String> {
    toml::from_str::<RankfuseConfig>(contents)
        .map_err(|e| format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))
}

/// Load an explicitly requested config file; failures are errors.
pub fn load_config_file(path: &Path) -> anyhow::Result<RankfuseConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = parse_config(&contents).map_err(anyhow::Error::msg)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try loading a discovered config file, warning on anything but absence
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<RankfuseConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // Only log actual errors, not "file not found"
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Failed to read config file {}: {}", config_path.display(), e);
            }
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file
pub fn load_config_from(start: PathBuf) -> RankfuseConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            RankfuseConfig::default()
        })
}

pub fn load_config() -> RankfuseConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!("Failed to get current directory: {}. Using default config.", e);
            RankfuseConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consensus::GroupingStrategy;
    use crate::io::OutputFormat;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(indoc! {r#"
            [grouping]
            strategy = "greedy"

            [engine]
            parallel = true

            [output]
            format = "terminal"
        "#})
        .unwrap();

        assert_eq!(config.grouping_strategy(), GroupingStrategy::Greedy);
        assert!(config.parallel());
        assert_eq!(config.output_format(), OutputFormat::Terminal);
    }

    #[test]
    fn test_parse_partial_config_keeps_defaults() {
        let config = parse_config("[engine]\nparallel = true\n").unwrap();
        assert_eq!(config.grouping_strategy(), GroupingStrategy::Closure);
        assert!(config.parallel());
    }

    #[test]
    fn test_parse_rejects_unknown_strategy() {
        let err = parse_config("[grouping]\nstrategy = \"random\"\n").unwrap_err();
        assert!(err.contains(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_directory_ancestors_respects_depth() {
        let dirs: Vec<PathBuf> = directory_ancestors(PathBuf::from("/a/b/c/d"), 3).collect();
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/a/b/c/d"),
                PathBuf::from("/a/b/c"),
                PathBuf::from("/a/b")
            ]
        );
    }

    #[test]
    fn test_config_discovered_in_ancestor() {
        let root = TempDir::new().unwrap();
        let nested = root.path().join("x").join("y");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[grouping]\nstrategy = \"greedy\"\n",
        )
        .unwrap();

        let config = load_config_from(nested);
        assert_eq!(config.grouping_strategy(), GroupingStrategy::Greedy);
    }

    #[test]
    fn test_invalid_discovered_config_falls_back_to_defaults() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join(CONFIG_FILE_NAME), "not = [valid").unwrap();

        let config = load_config_from(root.path().to_path_buf());
        assert_eq!(config, RankfuseConfig::default());
    }

    #[test]
    fn test_explicit_config_errors_are_reported() {
        let root = TempDir::new().unwrap();
        let path = root.path().join("custom.toml");
        assert!(load_config_file(&path).is_err());

        fs::write(&path, "[output]\nformat = \"xml\"\n").unwrap();
        assert!(load_config_file(&path).is_err());

        fs::write(&path, "[output]\nformat = \"markdown\"\n").unwrap();
        assert_eq!(
            load_config_file(&path).unwrap().output_format(),
            OutputFormat::Markdown
        );
    }
}
