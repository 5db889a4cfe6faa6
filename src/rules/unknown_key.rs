//! Unknown key detection rule.
//!
//! The primary locale defines the complete key set. A translation whose key
//! is missing from the module's effective primary table can never be looked
//! up and usually means the English source string was edited.

use crate::{
    core::{DictionaryModule, ProjectContext, TranslationDictionary},
    issues::UnknownKeyIssue,
    rules::{helpers::translated_entries, module_views},
};

pub fn check_unknown_keys_issues(ctx: &ProjectContext) -> Vec<UnknownKeyIssue> {
    module_views(ctx)
        .iter()
        .flat_map(|view| {
            check_unknown_keys(&view.label, view.module, view.effective, ctx.primary_locale())
        })
        .collect()
}

pub fn check_unknown_keys(
    file_label: &str,
    module: &DictionaryModule,
    effective: &TranslationDictionary,
    primary_locale: &str,
) -> Vec<UnknownKeyIssue> {
    translated_entries(module, primary_locale)
        .filter(|(_, key, _)| effective.get(primary_locale, key).is_none())
        .map(|(locale, key, value)| UnknownKeyIssue {
            context: module.entry_context(file_label, locale, key, value),
            primary_locale: primary_locale.to_string(),
        })
        .collect()
}
