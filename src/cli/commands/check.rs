use anyhow::Result;
use clap::ValueEnum;
use tracing::debug;

use super::super::args::CheckCommand;
use super::{
    helper::finish,
    {CheckSummary, CommandResult, CommandSummary},
};

use crate::{
    core::ProjectContext,
    issues::Issue,
    rules::{
        module_errors::{check_parse_errors, check_supplement_errors},
        placeholder_mismatch::check_placeholder_mismatch_issues,
        primary_override::check_primary_override_issues,
        unknown_key::check_unknown_keys_issues,
        unknown_locale::check_unknown_locale_issues,
        untranslated::check_untranslated_issues,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    UnknownKey,
    PlaceholderMismatch,
    Untranslated,
    PrimaryOverride,
    UnknownLocale,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::UnknownKey,
            CheckRule::PlaceholderMismatch,
            CheckRule::Untranslated,
            CheckRule::PrimaryOverride,
            CheckRule::UnknownLocale,
        ]
    }
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = ProjectContext::scan(&cmd.common)?;

    let checks = if cmd.checks.is_empty() {
        CheckRule::all()
    } else {
        cmd.checks.clone()
    };

    // Without the per-key rule, policy-rejected merges are reported per module.
    let report_merge_failures = !checks.contains(&CheckRule::PrimaryOverride);
    let mut all_issues: Vec<Issue> = Vec::new();

    for check in checks {
        match check {
            CheckRule::UnknownKey => {
                let issues = check_unknown_keys_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::UnknownKey));
            }
            CheckRule::PlaceholderMismatch => {
                let issues = check_placeholder_mismatch_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::PlaceholderMismatch));
            }
            CheckRule::Untranslated => {
                let issues = check_untranslated_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::Untranslated));
            }
            CheckRule::PrimaryOverride => {
                let issues = check_primary_override_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::PrimaryOverride));
            }
            CheckRule::UnknownLocale => {
                let issues = check_unknown_locale_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::UnknownLocale));
            }
        }
    }

    let supplement_errors = check_supplement_errors(&ctx, report_merge_failures);
    all_issues.extend(supplement_errors.into_iter().map(Issue::SupplementError));
    let parse_errors = check_parse_errors(&ctx);
    all_issues.extend(parse_errors.into_iter().map(Issue::ParseError));

    debug!(
        modules = ctx.graph().len(),
        issues = all_issues.len(),
        "check finished"
    );

    Ok(finish(
        CommandSummary::Check(CheckSummary {
            modules_checked: ctx.graph().len(),
            skipped_paths: ctx.skipped_count,
        }),
        all_issues,
    ))
}
