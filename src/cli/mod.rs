//! Command-line interface handling and stdin/stdout exchange

mod args;
mod interaction;

pub use args::{parse_args, Cli};
pub use interaction::{read_stdin_dataset, write_stdout_dataset};
