use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Translations for a single locale, keyed by translation key.
///
/// Keys are either semantic identifiers (`noRoleName`) or the literal
/// English source string (`"Create role"`). Values may embed `%(name)s`
/// placeholders which are kept verbatim.
pub type LocaleTable = BTreeMap<String, String>;

/// A multi-locale translation dictionary (`{"en": {...}, "fr": {...}}`).
///
/// Serializes transparently as a JSON object of locale tables, so a merged
/// dictionary can be written back out in the same shape it was read in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationDictionary {
    locales: BTreeMap<String, LocaleTable>,
}

impl TranslationDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the table for a locale.
    pub fn locale(&self, locale: &str) -> Option<&LocaleTable> {
        self.locales.get(locale)
    }

    /// Get the table for a locale, creating an empty one if absent.
    pub fn locale_mut(&mut self, locale: &str) -> &mut LocaleTable {
        self.locales.entry(locale.to_string()).or_default()
    }

    /// Insert a single entry, returning the previous value if any.
    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.locales
            .entry(locale.into())
            .or_default()
            .insert(key.into(), value.into())
    }

    /// Insert a whole locale table, replacing any existing one.
    pub fn insert_locale(&mut self, locale: impl Into<String>, table: LocaleTable) {
        self.locales.insert(locale.into(), table);
    }

    /// Look up a value without any fallback.
    pub fn get(&self, locale: &str, key: &str) -> Option<&str> {
        self.locales
            .get(locale)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }

    pub fn contains_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Iterate `(locale, table)` pairs in locale order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &LocaleTable)> {
        self.locales.iter()
    }

    /// Locale codes in sorted order.
    pub fn locales(&self) -> impl Iterator<Item = &String> {
        self.locales.keys()
    }

    /// Number of locales (including empty ones).
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Total number of entries across all locales.
    pub fn entry_count(&self) -> usize {
        self.locales.values().map(BTreeMap::len).sum()
    }
}

impl<L, K, V> FromIterator<(L, Vec<(K, V)>)> for TranslationDictionary
where
    L: Into<String>,
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (L, Vec<(K, V)>)>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        for (locale, entries) in iter {
            let table = dictionary.locale_mut(&locale.into());
            for (key, value) in entries {
                table.insert(key.into(), value.into());
            }
        }
        dictionary
    }
}
