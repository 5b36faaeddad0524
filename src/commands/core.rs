//! Standalone views of the conflict core: the fused matrix itself and the
//! list of contradicted pairs.

use crate::config::RankfuseConfig;
use crate::io::{create_writer, load_pair, OrderSource, OutputFormat};
use crate::relation::{build_dominance_matrix, extract_conflict_core, ConflictCore};
use anyhow::Result;
use std::io::Write;

#[derive(Debug, Clone)]
pub struct CoreConfig {
    pub left: OrderSource,
    pub right: OrderSource,
    pub format: Option<OutputFormat>,
}

fn load_core(config: &CoreConfig) -> Result<ConflictCore> {
    let (left, right) = load_pair(&config.left, &config.right)?;
    let core = extract_conflict_core(build_dominance_matrix(&left), build_dominance_matrix(&right))?;
    Ok(core)
}

/// Write the fused agreement matrix.
pub fn core_command(config: &CoreConfig, settings: &RankfuseConfig, out: impl Write) -> Result<()> {
    let core = load_core(config)?;
    let format = config.format.unwrap_or_else(|| settings.output_format());
    create_writer(format, Box::new(out)).write_matrix("Fused Matrix", core.fused().as_matrix())
}

/// Write the pairs the two orders rank in opposite directions.
pub fn contradictions_command(
    config: &CoreConfig,
    settings: &RankfuseConfig,
    out: impl Write,
) -> Result<()> {
    let core = load_core(config)?;
    let pairs = core.contradictions();
    tracing::info!(count = pairs.len(), "found contradictions");
    let format = config.format.unwrap_or_else(|| settings.output_format());
    create_writer(format, Box::new(out)).write_contradictions(&pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(left: &str, right: &str) -> CoreConfig {
        CoreConfig {
            left: OrderSource::from_arg(left),
            right: OrderSource::from_arg(right),
            format: Some(OutputFormat::Json),
        }
    }

    #[test]
    fn test_core_command_prints_fused_matrix() {
        let mut buffer = Vec::new();
        core_command(&config("[1,2]", "[2,1]"), &RankfuseConfig::default(), &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "[[1,0],[0,1]]\n");
    }

    #[test]
    fn test_contradictions_command() {
        let mut buffer = Vec::new();
        contradictions_command(
            &config(
                "[1,[2,3],4,[5,6,7],8,9,10]",
                "[[1,2],[3,4,5],6,7,9,[8,10]]",
            ),
            &RankfuseConfig::default(),
            &mut buffer,
        )
        .unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "[[8,9]]\n");
    }

    #[test]
    fn test_no_contradictions_is_empty_array() {
        let mut buffer = Vec::new();
        contradictions_command(&config("[[1,2],3]", "[1,[2,3]]"), &RankfuseConfig::default(), &mut buffer)
            .unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "[]\n");
    }
}
