use std::fs;

use anyhow::{Context, Result};
use tracing::info;

use super::super::args::MergeCommand;
use super::{CommandResult, CommandSummary, MergeSummary, helper::resolve_requested};
use crate::core::ProjectContext;

pub fn merge(cmd: MergeCommand) -> Result<CommandResult> {
    let mut ctx = ProjectContext::with_modules(&cmd.common, std::slice::from_ref(&cmd.module))?;
    let (label, dictionary) = resolve_requested(&mut ctx)?;

    let mut json =
        serde_json::to_string_pretty(&dictionary).context("Failed to serialize dictionary")?;
    json.push('\n');

    let output = match &cmd.output {
        Some(path) => {
            fs::write(path, &json)
                .with_context(|| format!("Failed to write merged dictionary: {:?}", path))?;
            info!(module = %label, output = %path.display(), "wrote merged dictionary");
            Some(path.display().to_string())
        }
        None => None,
    };

    Ok(CommandResult::output(CommandSummary::Merge(MergeSummary {
        module: label,
        json,
        output,
        locale_count: dictionary.len(),
        entry_count: dictionary.entry_count(),
    })))
}
