use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, extract::extract, init::init},
    exit_status::ExitStatus,
};

/// Dispatch to the command handler.
///
/// `Err` means the command could not run at all (bad config, unreadable key
/// list, unwritable output directory). Problems found in the sources are part
/// of the returned `CommandResult`.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::Init) => init(),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}

pub fn exit_status(result: &CommandResult) -> ExitStatus {
    if result.error_count > 0 {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    }
}
