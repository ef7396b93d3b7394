use std::process::ExitCode;

use log::{debug, error};

use ttf_metrics::cli::{parse_args, read_stdin_dataset, write_stdout_dataset};
use ttf_metrics::utils::init_logging;
use ttf_metrics::{merge_fonts, Config, Result};

fn run(config: &Config) -> Result<()> {
    let mut dataset = read_stdin_dataset()?;
    debug!("Read metrics for {} fonts", dataset.len());

    merge_fonts(&mut dataset, config)?;

    // Nothing reaches stdout unless every font was merged
    write_stdout_dataset(&dataset)
}

fn main() -> ExitCode {
    let config = parse_args();
    init_logging(&config);

    if config.debug_mode {
        debug!("Debug mode enabled");
        debug!("Loading fonts from {}", config.fonts_dir.display());
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
