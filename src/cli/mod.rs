//! Command-line interface layer.
//!
//! Parses arguments, loads configuration and dispatches to the scanner or
//! translator, printing results along the way.

use anyhow::Result;

pub mod args;
mod commands;
mod exit_status;
mod prompt;
mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    run::run(args)
}
