use std::path::PathBuf;

use clap::Parser;

use crate::models::config::{Config, DEFAULT_FONTS_DIR};

/// Extract TeX metrics for curated characters from the font files and merge
/// them into the metrics JSON read on stdin. The result is written to stdout.
#[derive(Debug, Parser)]
#[command(name = "extract-ttfs", version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the font files
    #[arg(long, value_name = "DIR", default_value = DEFAULT_FONTS_DIR)]
    pub fonts_dir: PathBuf,

    /// Enable debug output on stderr
    #[arg(long)]
    pub debug: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config::new(cli.debug, cli.fonts_dir)
    }
}

/// Parse command line arguments into a configuration
pub fn parse_args() -> Config {
    Cli::parse().into()
}
