use super::super::exit_status::ExitStatus;
use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    Merge(MergeSummary),
    Lookup(LookupSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct CheckSummary {
    /// Number of module files that were loaded and checked.
    pub modules_checked: usize,
    /// Paths under the root the scanner could not read.
    pub skipped_paths: usize,
}

#[derive(Debug)]
pub struct MergeSummary {
    /// Module as shown to the user.
    pub module: String,
    /// Pretty JSON of the effective dictionary.
    pub json: String,
    /// Where the JSON was written; `None` means it goes to stdout.
    pub output: Option<String>,
    pub locale_count: usize,
    pub entry_count: usize,
}

#[derive(Debug)]
pub struct LookupSummary {
    /// Formatted translation, or the raw key when it is unknown.
    pub text: String,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: String,
}

/// Result of running tdict commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// All issues found during the check.
    /// Empty for non-check commands.
    pub issues: Vec<Issue>,
}

impl CommandResult {
    /// Result without issues for commands that only produce output.
    pub fn output(summary: CommandSummary) -> Self {
        Self {
            summary,
            error_count: 0,
            warning_count: 0,
            issues: Vec::new(),
        }
    }

    /// Exit 1 when any error-severity issue was found; warnings alone pass.
    pub fn exit_status(&self) -> ExitStatus {
        ExitStatus::from_error_count(self.error_count)
    }
}
