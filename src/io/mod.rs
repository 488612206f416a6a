pub mod input;
pub mod output;

pub use input::load_records;
pub use output::{
    create_writer, CatalogReport, ClassificationReport, ClassifiedRecord, FilterReport,
    OutputFormat, RecordSummary, ReportWriter,
};

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}
