//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Run dictionary checks over every module in the project
//! - `merge`: Print or write a module's effective dictionary
//! - `lookup`: Translate one key through a module's effective dictionary
//! - `init`: Initialize the tdict configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use super::commands::check::CheckRule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Merge(cmd)) => cmd.common.verbose,
            Some(Command::Lookup(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project root to scan for modules (overrides config location)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Primary locale (overrides config file)
    #[arg(long, env = "TDICT_PRIMARY_LOCALE")]
    pub primary_locale: Option<String>,

    /// Reject supplements that change existing primary-locale values
    #[arg(long)]
    pub protect_primary: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct MergeCommand {
    /// Module file whose effective dictionary is produced
    pub module: PathBuf,

    /// Write the merged dictionary here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    /// Module file to look the key up in
    pub module: PathBuf,

    /// Translation key (the primary-locale source string)
    pub key: String,

    /// Locale to translate into (default: primary locale)
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Placeholder value, e.g. --arg average=3
    /// Can be specified multiple times.
    #[arg(long = "arg", value_name = "NAME=VALUE")]
    pub args: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check dictionary modules (unknown keys, placeholders, overrides, ...)
    Check(CheckCommand),
    /// Print a module's effective dictionary with all supplements merged in
    Merge(MergeCommand),
    /// Translate a key using a module's effective dictionary
    Lookup(LookupCommand),
    /// Initialize a new .tdictrc.json configuration file
    Init,
}
