use crate::consensus::FusionReport;
use crate::core::ElementId;
use crate::relation::BoolMatrix;
use clap::ValueEnum;
use colored::*;
use comfy_table::{presets::UTF8_FULL, Table};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Compact JSON in the input convention
    #[default]
    Json,
    Markdown,
    /// Coloured human-readable report
    Terminal,
}

pub trait OutputWriter {
    fn write_fusion(&mut self, report: &FusionReport) -> anyhow::Result<()>;
    fn write_matrix(&mut self, title: &str, matrix: &BoolMatrix) -> anyhow::Result<()>;
    fn write_contradictions(&mut self, pairs: &[(ElementId, ElementId)]) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_fusion(&mut self, report: &FusionReport) -> anyhow::Result<()> {
        serde_json::to_writer(&mut self.writer, &report.consensus)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_matrix(&mut self, _title: &str, matrix: &BoolMatrix) -> anyhow::Result<()> {
        serde_json::to_writer(&mut self.writer, matrix)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_contradictions(&mut self, pairs: &[(ElementId, ElementId)]) -> anyhow::Result<()> {
        serde_json::to_writer(&mut self.writer, pairs)?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_pairs(&mut self, pairs: &[(ElementId, ElementId)]) -> anyhow::Result<()> {
        if pairs.is_empty() {
            writeln!(self.writer, "None.")?;
            return Ok(());
        }
        for (i, j) in pairs {
            writeln!(self.writer, "- ({i}, {j})")?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_fusion(&mut self, report: &FusionReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Consensus")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "`{}`", report.consensus)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Tier | Members | Left position | Right position |")?;
        writeln!(self.writer, "|------|---------|---------------|----------------|")?;
        for (index, tier) in report.tiers.iter().enumerate() {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                index + 1,
                format_members(&tier.members),
                tier.left.position,
                tier.right.position
            )?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "## Contradictions")?;
        writeln!(self.writer)?;
        self.write_pairs(&report.core.contradictions())?;
        Ok(())
    }

    fn write_matrix(&mut self, title: &str, matrix: &BoolMatrix) -> anyhow::Result<()> {
        writeln!(self.writer, "## {title}")?;
        writeln!(self.writer)?;
        let header: Vec<String> = (1..=matrix.size()).map(|j| j.to_string()).collect();
        writeln!(self.writer, "|   | {} |", header.join(" | "))?;
        writeln!(self.writer, "|---|{}", "---|".repeat(matrix.size()))?;
        for (i, row) in matrix.to_binary_rows().iter().enumerate() {
            let cells: Vec<String> = row.iter().map(u8::to_string).collect();
            writeln!(self.writer, "| **{}** | {} |", i + 1, cells.join(" | "))?;
        }
        Ok(())
    }

    fn write_contradictions(&mut self, pairs: &[(ElementId, ElementId)]) -> anyhow::Result<()> {
        writeln!(self.writer, "## Contradictions")?;
        writeln!(self.writer)?;
        self.write_pairs(pairs)
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn print_header(&mut self, title: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", title.bold().blue())?;
        writeln!(self.writer, "{}", "=".repeat(title.len()).blue())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_contradiction_summary(
        &mut self,
        pairs: &[(ElementId, ElementId)],
    ) -> anyhow::Result<()> {
        if pairs.is_empty() {
            writeln!(self.writer, "{} No contradictions", "✓".green())?;
            return Ok(());
        }
        let listed: Vec<String> = pairs.iter().map(|(i, j)| format!("({i}, {j})")).collect();
        writeln!(
            self.writer,
            "{} {} contradicted pair(s): {}",
            "⚠".yellow(),
            pairs.len().to_string().yellow(),
            listed.join(", ")
        )?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_fusion(&mut self, report: &FusionReport) -> anyhow::Result<()> {
        self.print_header("Consensus Weak Order")?;
        writeln!(
            self.writer,
            "  {} {}",
            "Consensus:".bold(),
            report.consensus.to_string().green()
        )?;
        writeln!(
            self.writer,
            "  Elements: {}, tiers: {}",
            report.consensus.len(),
            report.consensus.group_count()
        )?;
        writeln!(self.writer)?;

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["Tier", "Members", "Left position", "Right position"]);
        for (index, tier) in report.tiers.iter().enumerate() {
            table.add_row(vec![
                (index + 1).to_string(),
                format_members(&tier.members),
                tier.left.position.to_string(),
                tier.right.position.to_string(),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;

        self.print_contradiction_summary(&report.core.contradictions())
    }

    fn write_matrix(&mut self, title: &str, matrix: &BoolMatrix) -> anyhow::Result<()> {
        self.print_header(title)?;
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);

        let mut header = vec![String::new()];
        header.extend((1..=matrix.size()).map(|j| j.to_string()));
        table.set_header(header);

        for (i, row) in matrix.to_binary_rows().iter().enumerate() {
            let mut cells = vec![(i + 1).to_string()];
            cells.extend(row.iter().map(u8::to_string));
            table.add_row(cells);
        }
        writeln!(self.writer, "{table}")?;
        Ok(())
    }

    fn write_contradictions(&mut self, pairs: &[(ElementId, ElementId)]) -> anyhow::Result<()> {
        self.print_header("Contradictions")?;
        self.print_contradiction_summary(pairs)
    }
}

fn format_members(members: &[ElementId]) -> String {
    match members {
        [single] => single.to_string(),
        _ => {
            let ids: Vec<String> = members.iter().map(ElementId::to_string).collect();
            format!("[{}]", ids.join(", "))
        }
    }
}

pub fn create_writer<'a>(format: OutputFormat, out: Box<dyn Write + 'a>) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(out)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(out)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(out)),
    }
}
