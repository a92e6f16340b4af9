/// CLI argument parsing.
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "palettr",
    version,
    about = "Palettr - A terminal-based palette generator"
)]
pub struct Cli {
    /// Seed the color generator for a reproducible palette sequence
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log at info level
    #[arg(short, long)]
    pub verbose: bool,

    /// Log at debug level
    #[arg(long)]
    pub debug: bool,

    /// Where to write the log (defaults to the user's data directory)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else if self.verbose {
            "info"
        } else {
            "warn"
        }
    }
}
