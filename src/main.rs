//! Main entry point for the ziplatest CLI application.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use ziplatest::{Cli, ScanSummary, scan};

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ScanSummary> {
    let cli = Cli::parse();
    Ok(scan::run(&cli.config())?)
}

/// Progress and warnings go to stderr; the summary goes to stdout.
fn init_logging() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .format_target(false)
        .format_timestamp(None)
        .init();
}

fn print_summary(summary: &ScanSummary) {
    println!("Archives found: {}", summary.archives_found);
    println!("Archives processed: {}", summary.archives_processed);
    if summary.archives_skipped > 0 {
        println!("Archives skipped: {}", summary.archives_skipped);
    }
    println!("Results saved to: {}", summary.output_file.display());
    println!("Unique files: {}", summary.unique_files);
}
