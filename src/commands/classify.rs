use crate::commands::{load_config, open_writer};
use crate::engine::Directory;
use crate::io::input::load_records;
use crate::io::output::{ClassificationReport, ClassifiedRecord, OutputFormat};
use anyhow::{bail, Result};
use chrono::Utc;
use std::path::PathBuf;

pub struct ClassifyArgs {
    pub input: PathBuf,
    pub id: Option<u64>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: PathBuf,
}

pub fn run_classify(args: ClassifyArgs) -> Result<()> {
    let config = load_config(&args.config)?;
    let records = load_records(&args.input)?;
    let directory = Directory::new(records, config);

    let items: Vec<ClassifiedRecord> = directory
        .records()
        .iter()
        .filter(|record| args.id.map_or(true, |id| record.id == id))
        .map(|record| ClassifiedRecord {
            id: record.id,
            name: record.name.clone(),
            classification: directory.classification(record),
        })
        .collect();

    if let Some(id) = args.id {
        if items.is_empty() {
            bail!("no record with id {id} in {}", args.input.display());
        }
    }

    let report = ClassificationReport {
        generated_at: Utc::now(),
        items,
    };

    let mut writer = open_writer(args.format, args.output.as_ref())?;
    writer.write_classifications(&report)
}
