use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, DEFAULT_OUTPUT_FILE};

#[derive(Parser, Debug)]
#[command(name = "ziplatest")]
#[command(version)]
#[command(about = "Report which ZIP archive holds the latest copy of every file", long_about = None)]
#[command(after_help = "Examples:\n  \
  ziplatest /mnt/releases                   scan and write latest_releases.txt\n  \
  ziplatest /mnt/releases -o report.txt     write the report to report.txt")]
pub struct Cli {
    /// Directory searched recursively for .zip archives
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Report file to create
    #[arg(short = 'o', long = "output", value_name = "FILE", default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: PathBuf,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config::new(&self.input_dir, &self.output_file)
    }
}
