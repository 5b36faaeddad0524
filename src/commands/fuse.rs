use crate::config::RankfuseConfig;
use crate::consensus::{fuse_orders, GroupingStrategy};
use crate::io::{create_writer, load_pair, OrderSource, OutputFormat};
use anyhow::Result;
use std::io::Write;

#[derive(Debug, Clone)]
pub struct FuseConfig {
    pub left: OrderSource,
    pub right: OrderSource,
    pub format: Option<OutputFormat>,
    pub grouping: Option<GroupingStrategy>,
}

/// Fuse two orders and write the consensus.
pub fn fuse_command(config: &FuseConfig, settings: &RankfuseConfig, out: impl Write) -> Result<()> {
    let (left, right) = load_pair(&config.left, &config.right)?;
    let options = settings.fusion_options(config.grouping);
    tracing::info!(
        elements = left.len(),
        grouping = ?options.grouping,
        parallel = options.parallel,
        "fusing orders"
    );

    let report = fuse_orders(&left, &right, &options)?;

    let format = config.format.unwrap_or_else(|| settings.output_format());
    create_writer(format, Box::new(out)).write_fusion(&report)
}
