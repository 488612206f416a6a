//! CLI command implementations.
//!
//! Each submodule handles one subcommand: load the collection, run the
//! engine, and hand the report to the writer for the requested format.

pub mod catalog;
pub mod classify;
pub mod filter;
pub mod init;

pub use catalog::run_catalog;
pub use classify::run_classify;
pub use filter::run_filter;
pub use init::init_config;

use crate::io::output::{create_writer, OutputFormat, ReportWriter};
use anyhow::{Context, Result};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

/// Writer for the chosen format, targeting a file when requested and stdout
/// otherwise.
pub(crate) fn open_writer(
    format: OutputFormat,
    output: Option<&PathBuf>,
) -> Result<Box<dyn ReportWriter>> {
    let sink: Box<dyn io::Write> = match output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?,
        ),
        None => Box::new(io::stdout()),
    };
    Ok(create_writer(format, sink))
}

pub(crate) fn load_config(path: &Path) -> Result<crate::config::FacetConfig> {
    crate::config::FacetConfig::load(path)
        .with_context(|| format!("failed to load configuration from {}", path.display()))
}
