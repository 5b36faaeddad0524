use crate::config::RankfuseConfig;
use crate::io::{create_writer, OrderSource, OutputFormat};
use crate::relation::build_dominance_matrix;
use anyhow::Result;
use std::io::Write;

/// Write the dominance matrix of a single order.
pub fn matrix_command(
    source: &OrderSource,
    format: Option<OutputFormat>,
    settings: &RankfuseConfig,
    out: impl Write,
) -> Result<()> {
    let order = source.load()?;
    let matrix = build_dominance_matrix(&order);
    let format = format.unwrap_or_else(|| settings.output_format());
    create_writer(format, Box::new(out)).write_matrix("Dominance Matrix", matrix.as_matrix())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_command() {
        let mut buffer = Vec::new();
        matrix_command(
            &OrderSource::from_arg("[2,[1,3]]"),
            None,
            &RankfuseConfig::default(),
            &mut buffer,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "[[1,0,1],[1,1,1],[1,0,1]]\n"
        );
    }

    #[test]
    fn test_matrix_command_rejects_invalid_order() {
        let result = matrix_command(
            &OrderSource::from_arg("[1,3]"),
            None,
            &RankfuseConfig::default(),
            Vec::new(),
        );
        assert!(result.is_err());
    }
}
