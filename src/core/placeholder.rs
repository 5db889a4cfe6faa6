//! `%(name)s` placeholder handling.
//!
//! Locale strings embed named placeholders in printf-with-names style, e.g.
//! `"Select %(dimensionText)s"`. They pass through merging untouched and are
//! substituted only at lookup time.

use std::{
    collections::{BTreeSet, HashMap},
    sync::LazyLock,
};

use regex::{Captures, Regex};

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%\(([A-Za-z_][A-Za-z0-9_]*)\)s").expect("placeholder pattern is valid")
});

/// Named arguments for placeholder substitution.
pub type PlaceholderArgs = HashMap<String, String>;

/// Collect the distinct placeholder names used in `text`.
pub fn placeholders(text: &str) -> BTreeSet<&str> {
    PLACEHOLDER
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

/// Substitute placeholders from `args`.
///
/// Placeholders without a matching argument are kept verbatim.
pub fn format_placeholders(text: &str, args: &PlaceholderArgs) -> String {
    if args.is_empty() || !text.contains("%(") {
        return text.to_string();
    }

    PLACEHOLDER
        .replace_all(text, |caps: &Captures<'_>| {
            match args.get(&caps[1]) {
                Some(value) => value.clone(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
