//! bidmerge CLI entry point.

use std::path::Path;

use anyhow::ensure;
use clap::Parser;

mod cli;
mod logging;
mod summary;

use crate::cli::Cli;
use crate::logging::init_logging;
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    init_logging(
        cli.verbosity.tracing_level_filter(),
        !cli.verbosity.is_present(),
    );
    match run(&cli) {
        Ok(report) => {
            print_summary(&report, cli.vendor_files.len());
        }
        Err(error) => {
            eprintln!("error: {error}");
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<bidmerge_core::MergeReport> {
    for path in cli.vendor_files.iter().chain([&cli.bid_file]) {
        ensure!(
            is_xlsx(path),
            "only .xlsx files are supported: {}",
            path.display()
        );
    }
    let report = bidmerge_core::merge(&cli.vendor_files, &cli.bid_file)?;
    Ok(report)
}

fn is_xlsx(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx"))
}
