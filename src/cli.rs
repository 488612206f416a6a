use crate::io::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "facetmap")]
#[command(about = "Heuristic classification and faceted filtering for directory listings", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the facet catalog with live option counts
    Catalog {
        /// JSON file holding the business record collection
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file
        #[arg(long, default_value = "facetmap.toml")]
        config: PathBuf,
    },

    /// Apply a filter selection and list the matching records
    Filter {
        /// JSON file holding the business record collection
        input: PathBuf,

        /// Selection as query-string pairs, e.g.
        /// "location=ubud&services=retreats,accommodation"
        #[arg(short, long, default_value = "")]
        query: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show only the first N matches
        #[arg(long = "top")]
        top: Option<usize>,

        /// Configuration file
        #[arg(long, default_value = "facetmap.toml")]
        config: PathBuf,
    },

    /// Show the derived classification for records
    Classify {
        /// JSON file holding the business record collection
        input: PathBuf,

        /// Classify only the record with this id
        #[arg(long)]
        id: Option<u64>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file
        #[arg(long, default_value = "facetmap.toml")]
        config: PathBuf,
    },

    /// Write a default facetmap.toml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}
