use crate::commands::{load_config, open_writer};
use crate::engine::Directory;
use crate::io::input::load_records;
use crate::io::output::{CatalogReport, OutputFormat};
use anyhow::Result;
use chrono::Utc;
use std::path::PathBuf;

pub struct CatalogArgs {
    pub input: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: PathBuf,
}

pub fn run_catalog(args: CatalogArgs) -> Result<()> {
    let config = load_config(&args.config)?;
    let records = load_records(&args.input)?;
    let directory = Directory::new(records, config);

    let report = CatalogReport {
        generated_at: Utc::now(),
        total_records: directory.records().len(),
        categories: directory.catalog().to_vec(),
    };

    let mut writer = open_writer(args.format, args.output.as_ref())?;
    writer.write_catalog(&report)
}
