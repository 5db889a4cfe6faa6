//! Primary override detection rule.
//!
//! The merge lets a supplement replace primary-locale values. That is legal
//! at runtime but breaks the convention that the primary table is owned by
//! the module that declares it. This rule replays each module's supplements
//! in merge order and reports every primary value that gets replaced.

use crate::{
    core::{DictionaryModule, ModuleGraph, ProjectContext, TranslationDictionary},
    issues::PrimaryOverrideIssue,
    rules::module_views,
};

pub fn check_primary_override_issues(ctx: &ProjectContext) -> Vec<PrimaryOverrideIssue> {
    let graph = ctx.graph();
    let protected = ctx.config.protect_primary_locale;

    module_views(ctx)
        .iter()
        .filter(|view| !view.module.supplements.is_empty())
        .flat_map(|view| {
            let supplements = supplement_views(ctx, graph, view.module);
            check_primary_override(
                &view.label,
                view.module,
                &supplements,
                ctx.primary_locale(),
                protected,
            )
        })
        .collect()
}

/// Supplements of `module` as `(label, effective dictionary)`, skipping any
/// that failed to load.
fn supplement_views<'a>(
    ctx: &ProjectContext,
    graph: &'a ModuleGraph,
    module: &DictionaryModule,
) -> Vec<(String, &'a TranslationDictionary)> {
    module
        .supplements
        .iter()
        .filter_map(|path| {
            let dictionary = graph
                .best_effort(path)
                .or_else(|| graph.module(path).map(|m| &m.dictionary))?;
            Some((ctx.display_path(path), dictionary))
        })
        .collect()
}

pub fn check_primary_override(
    file_label: &str,
    module: &DictionaryModule,
    supplements: &[(String, &TranslationDictionary)],
    primary_locale: &str,
    protected: bool,
) -> Vec<PrimaryOverrideIssue> {
    let mut issues = Vec::new();
    let mut current = module
        .dictionary
        .locale(primary_locale)
        .cloned()
        .unwrap_or_default();

    for (label, supplement) in supplements {
        let Some(table) = supplement.locale(primary_locale) else {
            continue;
        };
        for (key, value) in table {
            if let Some(previous) = current.get(key)
                && previous != value
            {
                issues.push(PrimaryOverrideIssue {
                    context: module.entry_context(file_label, primary_locale, key, previous),
                    supplement: label.clone(),
                    replacement: value.clone(),
                    protected,
                });
            }
            current.insert(key.clone(), value.clone());
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::parsers::json::parse_module_source;

    fn parse(path: &str, content: &str) -> DictionaryModule {
        parse_module_source(Path::new(path), content).unwrap()
    }

    #[test]
    fn test_reports_replaced_primary_value() {
        let base = parse(
            "admin.json",
            r#"{
  "$supplements": ["s.json"],
  "en": {
    "A": "Apple",
    "B": "Banana"
  }
}"#,
        );
        let supplement = parse("s.json", r#"{"en": {"B": "Banana2", "C": "Cherry"}}"#);

        let issues = check_primary_override(
            "admin.json",
            &base,
            &[("s.json".to_string(), &supplement.dictionary)],
            "en",
            false,
        );

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].context.key, "B");
        assert_eq!(issues[0].context.value, "Banana");
        assert_eq!(issues[0].context.location.line, 5);
        assert_eq!(issues[0].replacement, "Banana2");
        assert_eq!(issues[0].supplement, "s.json");
        assert!(!issues[0].protected);
    }

    #[test]
    fn test_reports_conflict_between_supplements() {
        let base = parse("admin.json", r#"{"en": {"A": "Apple"}}"#);
        let s1 = parse("s1.json", r#"{"en": {"C": "Cherry"}}"#);
        let s2 = parse("s2.json", r#"{"en": {"C": "Cherry2"}}"#);

        let issues = check_primary_override(
            "admin.json",
            &base,
            &[
                ("s1.json".to_string(), &s1.dictionary),
                ("s2.json".to_string(), &s2.dictionary),
            ],
            "en",
            true,
        );

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].context.value, "Cherry");
        assert_eq!(issues[0].supplement, "s2.json");
        assert!(issues[0].protected);
    }

    #[test]
    fn test_identical_and_new_values_are_fine() {
        let base = parse("admin.json", r#"{"en": {"A": "Apple"}}"#);
        let supplement = parse("s.json", r#"{"en": {"A": "Apple", "D": "Date"}, "fr": {"A": "Abricot"}}"#);

        let issues = check_primary_override(
            "admin.json",
            &base,
            &[("s.json".to_string(), &supplement.dictionary)],
            "en",
            false,
        );
        assert!(issues.is_empty());
    }
}
