use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{init::init, scan::scan, translate::translate},
    exit_status::ExitStatus,
};

/// Dispatch to the handler of the parsed subcommand.
pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Scan(cmd)) => scan(cmd),
        Some(Command::Translate(cmd)) => translate(cmd),
        Some(Command::Init) => init(),
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}
