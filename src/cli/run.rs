//! Dispatches parsed arguments to the command handlers.
use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, check::check, init::init, lookup::lookup, merge::merge,
    },
};
use anyhow::Result;

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Merge(cmd)) => merge(cmd),
        Some(Command::Lookup(cmd)) => lookup(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
