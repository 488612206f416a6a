//! Report rendering for the CLI front-end.
//!
//! One writer per output format, all implementing [`ReportWriter`]. JSON is
//! the machine interface, markdown suits sharing, and the terminal writer
//! renders colored tables for interactive use.

use crate::catalog::FacetCategory;
use crate::classify::DerivedClassification;
use crate::core::BusinessRecord;
use crate::filter::FilterStatistics;
use chrono::{DateTime, Utc};
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

/// Catalog of facet categories with counts, plus provenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogReport {
    pub generated_at: DateTime<Utc>,
    pub total_records: usize,
    pub categories: Vec<FacetCategory>,
}

/// Condensed listing row for result output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSummary {
    pub id: u64,
    pub name: String,
    pub area: Option<String>,
    pub price_tier: String,
    pub verification: String,
    pub rating: f32,
}

impl RecordSummary {
    pub fn from_parts(record: &BusinessRecord, derived: &DerivedClassification) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            area: record.area_text().map(str::to_string),
            price_tier: derived.price.tier.id().to_string(),
            verification: derived.quality.verification_status.id().to_string(),
            rating: record.rating,
        }
    }
}

/// Outcome of one filter evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterReport {
    pub generated_at: DateTime<Utc>,
    pub selection_query: String,
    pub stats: FilterStatistics,
    pub results: Vec<RecordSummary>,
}

/// Full classification detail for one record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedRecord {
    pub id: u64,
    pub name: String,
    pub classification: DerivedClassification,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub generated_at: DateTime<Utc>,
    pub items: Vec<ClassifiedRecord>,
}

pub trait ReportWriter {
    fn write_catalog(&mut self, report: &CatalogReport) -> anyhow::Result<()>;
    fn write_results(&mut self, report: &FilterReport) -> anyhow::Result<()>;
    fn write_classifications(&mut self, report: &ClassificationReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_catalog(&mut self, report: &CatalogReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_results(&mut self, report: &FilterReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_classifications(&mut self, report: &ClassificationReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
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
}

impl<W: Write> ReportWriter for MarkdownWriter<W> {
    fn write_catalog(&mut self, report: &CatalogReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Facet Catalog")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {} over {} listings",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.total_records
        )?;
        for category in &report.categories {
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "## {} ({})",
                category.label,
                if category.multi_select {
                    "multi-select"
                } else {
                    "single-select"
                }
            )?;
            writeln!(self.writer)?;
            writeln!(self.writer, "| Option | Count | Verified |")?;
            writeln!(self.writer, "|--------|-------|----------|")?;
            for option in &category.options {
                writeln!(
                    self.writer,
                    "| {} | {} | {} |",
                    option.label,
                    option.count,
                    if option.verified { "yes" } else { "~" }
                )?;
            }
        }
        Ok(())
    }

    fn write_results(&mut self, report: &FilterReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Filtered Listings")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Selection: `{}`",
            if report.selection_query.is_empty() {
                "(none)"
            } else {
                &report.selection_query
            }
        )?;
        writeln!(
            self.writer,
            "Matched {} of {} listings",
            report.stats.matched, report.stats.total_records
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Name | Area | Tier | Verification | Rating |")?;
        writeln!(self.writer, "|------|------|------|--------------|--------|")?;
        for row in &report.results {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {:.1} |",
                row.name,
                row.area.as_deref().unwrap_or("-"),
                row.price_tier,
                row.verification,
                row.rating
            )?;
        }
        Ok(())
    }

    fn write_classifications(&mut self, report: &ClassificationReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Classifications")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Name | Tier | Confidence | Verification | Completion |"
        )?;
        writeln!(
            self.writer,
            "|------|------|------------|--------------|------------|"
        )?;
        for item in &report.items {
            let c = &item.classification;
            writeln!(
                self.writer,
                "| {} | {} | {:.2} | {} | {}% |",
                item.name,
                c.price.tier.id(),
                c.price.confidence,
                c.quality.verification_status.id(),
                c.quality.completion_percentage
            )?;
        }
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for TerminalWriter<W> {
    fn write_catalog(&mut self, report: &CatalogReport) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{} ({} listings)",
            "Facet Catalog".bold(),
            report.total_records
        )?;
        for category in &report.categories {
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", category.label.cyan().bold())?;
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["Option", "Count", "Verified"]);
            for option in &category.options {
                table.add_row(vec![
                    Cell::new(&option.label),
                    Cell::new(option.count),
                    Cell::new(if option.verified { "yes" } else { "~" }),
                ]);
            }
            writeln!(self.writer, "{table}")?;
        }
        Ok(())
    }

    fn write_results(&mut self, report: &FilterReport) -> anyhow::Result<()> {
        let headline = format!(
            "{} of {} listings matched",
            report.stats.matched, report.stats.total_records
        );
        if report.stats.matched == 0 {
            // An empty result set is an expected state, not an error.
            writeln!(self.writer, "{}", headline.yellow())?;
            return Ok(());
        }
        writeln!(self.writer, "{}", headline.green().bold())?;
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Name", "Area", "Tier", "Verification", "Rating"]);
        for row in &report.results {
            table.add_row(vec![
                Cell::new(&row.name),
                Cell::new(row.area.as_deref().unwrap_or("-")),
                Cell::new(&row.price_tier),
                Cell::new(&row.verification),
                Cell::new(format!("{:.1}", row.rating)),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        Ok(())
    }

    fn write_classifications(&mut self, report: &ClassificationReport) -> anyhow::Result<()> {
        for item in &report.items {
            let c = &item.classification;
            writeln!(self.writer, "{} (#{})", item.name.bold(), item.id)?;
            writeln!(
                self.writer,
                "  price: {} (confidence {:.2}{})",
                c.price.tier.id().cyan(),
                c.price.confidence,
                if c.price.verified { ", verified" } else { "" }
            )?;
            for factor in &c.price.factors {
                writeln!(self.writer, "    - {factor}")?;
            }
            writeln!(
                self.writer,
                "  quality: {} ({}% complete, contact {})",
                c.quality.verification_status.id().cyan(),
                c.quality.completion_percentage,
                c.quality.contact_confidence_score
            )?;
            let mut settings = Vec::new();
            for facet in crate::classify::EnvironmentFacet::ALL {
                let signal = c.environment.signal(facet);
                if signal.likely {
                    settings.push(format!("{} ({:.2})", facet.id(), signal.confidence));
                }
            }
            if !settings.is_empty() {
                writeln!(self.writer, "  setting: {}", settings.join(", "))?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

/// Writer factory for a format and sink.
pub fn create_writer<W: Write + 'static>(format: OutputFormat, writer: W) -> Box<dyn ReportWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}
