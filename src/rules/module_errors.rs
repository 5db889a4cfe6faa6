//! Module loading and resolution failures.
//!
//! These are not selectable rules: a module that cannot be parsed or whose
//! supplements cannot be resolved is always reported, like parse errors are.
//! Failures propagate to every parent during resolution, so each one is
//! reported once, at the module that declares the broken supplement.

use std::path::Path;

use crate::{
    core::{MergeError, ProjectContext, ResolveError},
    issues::{ParseErrorIssue, SupplementErrorIssue},
};

/// Files that exist but could not be parsed.
///
/// Missing files are reported through the modules that reference them.
pub fn check_parse_errors(ctx: &ProjectContext) -> Vec<ParseErrorIssue> {
    ctx.graph()
        .warnings()
        .filter(|warning| !warning.missing)
        .map(|warning| ParseErrorIssue {
            file_path: ctx.display_path(&warning.file_path),
            error: warning.error.clone(),
        })
        .collect()
}

/// Missing or unparsable supplements, supplement cycles and, when
/// `include_merge_failures` is set, supplements rejected by the merge policy.
///
/// Callers that run the primary-override rule leave merge failures out, since
/// that rule reports them per key.
pub fn check_supplement_errors(
    ctx: &ProjectContext,
    include_merge_failures: bool,
) -> Vec<SupplementErrorIssue> {
    ctx.resolve_errors()
        .iter()
        .filter_map(|(path, error)| supplement_error(ctx, path, error, include_merge_failures))
        .collect()
}

fn supplement_error(
    ctx: &ProjectContext,
    path: &Path,
    error: &ResolveError,
    include_merge_failures: bool,
) -> Option<SupplementErrorIssue> {
    let message = match error {
        ResolveError::MissingSupplement { module, supplement } if module == path => {
            let label = ctx.display_path(supplement);
            match ctx.graph().warning(supplement) {
                Some(warning) if !warning.missing => {
                    format!("supplement {} could not be parsed", label)
                }
                _ => format!("supplement {} not found", label),
            }
        }
        ResolveError::Merge {
            module,
            source: MergeError::PrimaryLocaleOverride { supplement, locale, key },
        } if include_merge_failures && module == path => {
            let supplement = ctx
                .graph()
                .module(module)
                .and_then(|m| m.supplements.get(*supplement))
                .map(|s| ctx.display_path(s))
                .unwrap_or_else(|| format!("#{}", supplement));
            format!(
                "supplement {} overrides protected locale '{}' for key \"{}\"",
                supplement, locale, key
            )
        }
        ResolveError::Cycle { chain } if chain.first().is_some_and(|p| p == path) => {
            let chain: Vec<String> = chain.iter().map(|p| ctx.display_path(p)).collect();
            format!("supplement cycle: {}", chain.join(" -> "))
        }
        ResolveError::UnknownModule(_) => error.to_string(),
        _ => return None,
    };

    Some(SupplementErrorIssue {
        file_path: ctx.display_path(path),
        error: message,
    })
}
