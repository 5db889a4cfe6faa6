//! Placeholder mismatch detection rule.
//!
//! `%(name)s` tokens are substituted at lookup time by name, so a translation
//! must carry exactly the placeholders of its primary value. A renamed or
//! dropped placeholder silently loses the argument.

use crate::{
    core::{DictionaryModule, ProjectContext, TranslationDictionary, placeholders},
    issues::PlaceholderMismatchIssue,
    rules::{helpers::translated_entries, module_views},
};

pub fn check_placeholder_mismatch_issues(ctx: &ProjectContext) -> Vec<PlaceholderMismatchIssue> {
    module_views(ctx)
        .iter()
        .flat_map(|view| {
            check_placeholder_mismatch(
                &view.label,
                view.module,
                view.effective,
                ctx.primary_locale(),
            )
        })
        .collect()
}

pub fn check_placeholder_mismatch(
    file_label: &str,
    module: &DictionaryModule,
    effective: &TranslationDictionary,
    primary_locale: &str,
) -> Vec<PlaceholderMismatchIssue> {
    let mut issues = Vec::new();

    for (locale, key, value) in translated_entries(module, primary_locale) {
        // Unknown keys are reported by their own rule.
        let Some(primary_value) = effective.get(primary_locale, key) else {
            continue;
        };

        let expected = placeholders(primary_value);
        let actual = placeholders(value);
        if expected != actual {
            issues.push(PlaceholderMismatchIssue {
                context: module.entry_context(file_label, locale, key, value),
                expected: expected.into_iter().map(String::from).collect(),
                actual: actual.into_iter().map(String::from).collect(),
            });
        }
    }

    issues
}
