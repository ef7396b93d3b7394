use std::io::{self, Read, Write};

use crate::error::Result;
use crate::models::metrics::{dataset_to_string, read_dataset};
use crate::models::MetricsDataset;

/// Read the existing metrics dataset from stdin
pub fn read_stdin_dataset() -> Result<MetricsDataset> {
    let mut input = String::new();
    io::stdin().lock().read_to_string(&mut input)?;
    read_dataset(input.as_bytes())
}

/// Write the dataset to stdout in one piece
pub fn write_stdout_dataset(dataset: &MetricsDataset) -> Result<()> {
    let output = dataset_to_string(dataset)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
