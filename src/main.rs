use anyhow::Result;
use clap::Parser;
use facetmap::cli::{Cli, Commands};
use facetmap::commands::{self, catalog::CatalogArgs, classify::ClassifyArgs, filter::FilterArgs};

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Catalog {
            input,
            format,
            output,
            config,
        } => commands::run_catalog(CatalogArgs {
            input,
            format,
            output,
            config,
        }),
        Commands::Filter {
            input,
            query,
            format,
            output,
            top,
            config,
        } => commands::run_filter(FilterArgs {
            input,
            query,
            format,
            output,
            top,
            config,
        }),
        Commands::Classify {
            input,
            id,
            format,
            output,
            config,
        } => commands::run_classify(ClassifyArgs {
            input,
            id,
            format,
            output,
            config,
        }),
        Commands::Init { force } => commands::init_config(force),
    }
}
