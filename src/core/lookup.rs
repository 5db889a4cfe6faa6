use tracing::debug;

use super::{
    TranslationDictionary,
    placeholder::{PlaceholderArgs, format_placeholders},
};

/// Resolves `(key, locale, args)` to display text against a merged dictionary.
///
/// Non-primary locale tables are partial; anything they lack falls back to
/// the primary locale.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    dictionary: &'a TranslationDictionary,
    primary_locale: &'a str,
}

impl<'a> Translator<'a> {
    pub fn new(dictionary: &'a TranslationDictionary, primary_locale: &'a str) -> Self {
        Self {
            dictionary,
            primary_locale,
        }
    }

    pub fn primary_locale(&self) -> &'a str {
        self.primary_locale
    }

    /// Raw value for `key` in `locale`, falling back to the primary locale.
    pub fn get(&self, key: &str, locale: &str) -> Option<&'a str> {
        if let Some(value) = self.dictionary.get(locale, key) {
            return Some(value);
        }
        let fallback = self.dictionary.get(self.primary_locale, key);
        if fallback.is_some() && locale != self.primary_locale {
            debug!(key, locale, "falling back to primary locale");
        }
        fallback
    }

    /// Formatted text for `key`, or the key itself when no locale defines it.
    pub fn translate(&self, key: &str, locale: &str, args: &PlaceholderArgs) -> String {
        match self.get(key, locale) {
            Some(value) => format_placeholders(value, args),
            None => {
                debug!(key, locale, "translation key not found");
                key.to_string()
            }
        }
    }
}
