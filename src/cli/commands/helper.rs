use anyhow::{Context, Result, bail};

use super::{CommandResult, CommandSummary};
use crate::{
    core::{ProjectContext, TranslationDictionary},
    issues::{Issue, Severity, compare_issues},
};

pub fn finish(summary: CommandSummary, mut issues: Vec<Issue>) -> CommandResult {
    issues.sort_by(compare_issues);

    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let warning_count = issues.len() - error_count;

    CommandResult {
        summary,
        error_count,
        warning_count,
        issues,
    }
}

/// Resolve the module named on the command line.
///
/// Unlike `check`, a module that fails to load or resolve is a hard error.
/// Returns the module's display path and its effective dictionary.
pub fn resolve_requested(ctx: &mut ProjectContext) -> Result<(String, TranslationDictionary)> {
    let path = ctx
        .module_paths
        .first()
        .cloned()
        .context("No module given")?;
    let label = ctx.display_path(&path);

    if let Some(warning) = ctx.graph().warnings().find(|w| w.file_path == path) {
        bail!("{}", warning.error);
    }

    let dictionary = ctx
        .graph_mut()
        .resolve(&path)
        .with_context(|| format!("Failed to resolve {}", label))?
        .clone();

    Ok((label, dictionary))
}
