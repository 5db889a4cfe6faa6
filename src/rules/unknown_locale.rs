//! Unknown locale detection rule.
//!
//! Locales are managed centrally. When `locales` is configured, any other
//! locale table in a module is reported. The primary locale is always
//! allowed.

use crate::{
    core::{DictionaryModule, ProjectContext},
    issues::UnknownLocaleIssue,
    rules::module_views,
};

pub fn check_unknown_locale_issues(ctx: &ProjectContext) -> Vec<UnknownLocaleIssue> {
    if ctx.config.locales.is_empty() {
        return Vec::new();
    }

    module_views(ctx)
        .iter()
        .flat_map(|view| {
            check_unknown_locales(
                &view.label,
                view.module,
                &ctx.config.locales,
                ctx.primary_locale(),
            )
        })
        .collect()
}

pub fn check_unknown_locales(
    file_label: &str,
    module: &DictionaryModule,
    allowed: &[String],
    primary_locale: &str,
) -> Vec<UnknownLocaleIssue> {
    module
        .dictionary
        .locales()
        .filter(|locale| locale.as_str() != primary_locale && !allowed.contains(locale))
        .map(|locale| UnknownLocaleIssue {
            location: module.locale_location(file_label, locale),
            locale: locale.clone(),
            allowed: allowed.to_vec(),
        })
        .collect()
}
