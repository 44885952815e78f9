//! Command-line surface for the `marbles` binary.

mod args;
mod output;

pub(crate) use args::{CliArgs, parse_cli};
pub(crate) use output::{OutputFormat, print_json, print_plain};
