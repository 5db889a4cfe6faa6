//! Untranslated value detection rule.
//!
//! Detects translations identical to the primary locale value, which may
//! indicate that the text was copied over without being translated. Values
//! without alphabetic characters (numbers, symbols, bare placeholders) are
//! skipped.

use crate::{
    core::{DictionaryModule, ProjectContext, TranslationDictionary},
    issues::UntranslatedIssue,
    rules::{helpers::translated_entries, module_views},
    utils::contains_alphabetic,
};

pub fn check_untranslated_issues(ctx: &ProjectContext) -> Vec<UntranslatedIssue> {
    module_views(ctx)
        .iter()
        .flat_map(|view| {
            check_untranslated(&view.label, view.module, view.effective, ctx.primary_locale())
        })
        .collect()
}

/// Check one module for values identical to their primary counterpart.
///
/// # Arguments
/// * `file_label` - Path shown in reports
/// * `module` - The module whose own entries are checked
/// * `effective` - The module's effective dictionary (primary values)
/// * `primary_locale` - The primary locale code (e.g., "en")
pub fn check_untranslated(
    file_label: &str,
    module: &DictionaryModule,
    effective: &TranslationDictionary,
    primary_locale: &str,
) -> Vec<UntranslatedIssue> {
    translated_entries(module, primary_locale)
        .filter(|(_, key, value)| {
            contains_alphabetic(value) && effective.get(primary_locale, key) == Some(*value)
        })
        .map(|(locale, key, value)| UntranslatedIssue {
            context: module.entry_context(file_label, locale, key, value),
            primary_locale: primary_locale.to_string(),
        })
        .collect()
}
