use crate::consensus::{FusionOptions, GroupingStrategy};
use crate::io::OutputFormat;
use serde::{Deserialize, Serialize};

/// Root configuration structure for rankfuse
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RankfuseConfig {
    /// Consensus grouping configuration
    #[serde(default)]
    pub grouping: Option<GroupingConfig>,

    /// Engine execution configuration
    #[serde(default)]
    pub engine: Option<EngineConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GroupingConfig {
    #[serde(default)]
    pub strategy: GroupingStrategy,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Build the two dominance matrices concurrently
    #[serde(default)]
    pub parallel: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

impl RankfuseConfig {
    pub fn grouping_strategy(&self) -> GroupingStrategy {
        self.grouping
            .as_ref()
            .map(|g| g.strategy)
            .unwrap_or_default()
    }

    pub fn parallel(&self) -> bool {
        self.engine.as_ref().is_some_and(|e| e.parallel)
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output.as_ref().map(|o| o.format).unwrap_or_default()
    }

    /// Fusion options with command-line overrides applied on top
    pub fn fusion_options(&self, grouping: Option<GroupingStrategy>) -> FusionOptions {
        FusionOptions::default()
            .with_grouping(grouping.unwrap_or_else(|| self.grouping_strategy()))
            .with_parallel(self.parallel())
    }
}

/// Template written by `rankfuse init`
pub const DEFAULT_CONFIG: &str = r#"# Rankfuse Configuration

[grouping]
# "closure" ties every chain of contradicted pairs together;
# "greedy" only ties elements that contradict a group's first element
strategy = "closure"

[engine]
parallel = false

[output]
format = "json"
"#;
