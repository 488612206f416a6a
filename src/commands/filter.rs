use crate::commands::{load_config, open_writer};
use crate::engine::Directory;
use crate::filter::FilterSelection;
use crate::io::input::load_records;
use crate::io::output::{FilterReport, OutputFormat, RecordSummary};
use anyhow::Result;
use chrono::Utc;
use std::path::PathBuf;

pub struct FilterArgs {
    pub input: PathBuf,
    pub query: String,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub top: Option<usize>,
    pub config: PathBuf,
}

pub fn run_filter(args: FilterArgs) -> Result<()> {
    let config = load_config(&args.config)?;
    let records = load_records(&args.input)?;
    let directory = Directory::new(records, config);

    let selection = FilterSelection::from_query(&args.query);
    let (matched, stats) = directory.apply_with_stats(&selection);

    let mut results: Vec<RecordSummary> = matched
        .iter()
        .map(|record| RecordSummary::from_parts(record, &directory.classification(record)))
        .collect();
    if let Some(top) = args.top {
        results.truncate(top);
    }

    let report = FilterReport {
        generated_at: Utc::now(),
        selection_query: selection.to_query(),
        stats,
        results,
    };

    let mut writer = open_writer(args.format, args.output.as_ref())?;
    writer.write_results(&report)
}
