use crate::core::{DictionaryModule, ProjectContext, TranslationDictionary};

/// A loaded module together with what rules need to check it.
pub struct ModuleView<'a> {
    /// Path as shown in reports.
    pub label: String,
    pub module: &'a DictionaryModule,
    /// Effective dictionary, its permissive view when the merge policy
    /// rejected it, or the raw one when resolution failed.
    pub effective: &'a TranslationDictionary,
}

/// Views over every loaded module, in path order.
pub fn module_views(ctx: &ProjectContext) -> Vec<ModuleView<'_>> {
    let graph = ctx.graph();
    graph
        .modules()
        .map(|module| ModuleView {
            label: ctx.display_path(&module.path),
            module,
            effective: graph
                .best_effort(&module.path)
                .unwrap_or(&module.dictionary),
        })
        .collect()
}

/// Iterate `(locale, key, value)` over a module's own non-primary entries.
pub fn translated_entries<'a>(
    module: &'a DictionaryModule,
    primary_locale: &'a str,
) -> impl Iterator<Item = (&'a str, &'a str, &'a str)> + 'a {
    module
        .dictionary
        .iter()
        .filter(move |(locale, _)| locale.as_str() != primary_locale)
        .flat_map(|(locale, table)| {
            table
                .iter()
                .map(move |(key, value)| (locale.as_str(), key.as_str(), value.as_str()))
        })
}
