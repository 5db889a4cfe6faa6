//! Supplemental translation merging.
//!
//! A base dictionary absorbs an ordered list of supplements locale by locale
//! and key by key. Later supplements win over earlier ones and over the base
//! (last-write-wins). Locales missing from the base are created.
//!
//! The permissive merge never filters: a supplement may add locales or keys
//! unknown to the base's primary table, and it may even replace primary
//! (`en`) values. [`MergePolicy::ProtectPrimary`] turns the latter into an
//! error for callers that want the "never touch `en`" convention enforced.

use tracing::debug;

use super::{MergeError, TranslationDictionary};

/// How a merge treats writes into the primary locale.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MergePolicy {
    /// Accept every write, including overrides of primary values.
    #[default]
    Permissive,
    /// Reject supplements that change an existing value in `primary_locale`.
    /// New primary keys and identical values are accepted.
    ProtectPrimary { primary_locale: String },
}

/// Counters describing what a merge changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Entries written for keys the base did not have yet.
    pub inserted: usize,
    /// Entries whose previous value was replaced by a different one.
    pub overridden: usize,
    /// Locales created in the base.
    pub locales_added: usize,
}

/// Merge `supplements` into `base` in place, last-write-wins.
///
/// Note that this performs no special-casing of the primary locale: a
/// supplement defining `en.B` replaces the base's `en.B`. Use [`Merger`] with
/// [`MergePolicy::ProtectPrimary`] to reject that instead.
pub fn merge_supplemental_translations<'a, I>(base: &mut TranslationDictionary, supplements: I)
where
    I: IntoIterator<Item = &'a TranslationDictionary>,
{
    for supplement in supplements {
        apply(base, supplement);
    }
}

/// Like [`merge_supplemental_translations`] but leaves `base` untouched and
/// returns the merged copy.
pub fn merged<'a, I>(base: &TranslationDictionary, supplements: I) -> TranslationDictionary
where
    I: IntoIterator<Item = &'a TranslationDictionary>,
{
    let mut result = base.clone();
    merge_supplemental_translations(&mut result, supplements);
    result
}

/// A merge driven by a [`MergePolicy`].
#[derive(Debug, Clone, Default)]
pub struct Merger {
    policy: MergePolicy,
}

impl Merger {
    pub fn new(policy: MergePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &MergePolicy {
        &self.policy
    }

    /// Merge `supplements` into `base`.
    ///
    /// Under `ProtectPrimary` all supplements are validated before anything is
    /// written, so on error `base` is unchanged.
    pub fn merge(
        &self,
        base: &mut TranslationDictionary,
        supplements: &[&TranslationDictionary],
    ) -> Result<MergeStats, MergeError> {
        if let MergePolicy::ProtectPrimary { primary_locale } = &self.policy {
            check_primary_untouched(base, supplements, primary_locale)?;
        }

        let mut stats = MergeStats::default();
        for supplement in supplements {
            let step = apply(base, supplement);
            stats.inserted += step.inserted;
            stats.overridden += step.overridden;
            stats.locales_added += step.locales_added;
        }

        debug!(
            supplements = supplements.len(),
            inserted = stats.inserted,
            overridden = stats.overridden,
            locales_added = stats.locales_added,
            "merged supplemental translations"
        );
        Ok(stats)
    }
}

fn apply(base: &mut TranslationDictionary, supplement: &TranslationDictionary) -> MergeStats {
    let mut stats = MergeStats::default();

    for (locale, table) in supplement.iter() {
        if !base.contains_locale(locale) {
            stats.locales_added += 1;
        }
        let target = base.locale_mut(locale);
        for (key, value) in table {
            match target.insert(key.clone(), value.clone()) {
                None => stats.inserted += 1,
                Some(previous) if previous != *value => stats.overridden += 1,
                Some(_) => {}
            }
        }
    }

    stats
}

/// Replay the supplements' primary tables against the base and fail on the
/// first write that would change an existing value.
fn check_primary_untouched(
    base: &TranslationDictionary,
    supplements: &[&TranslationDictionary],
    primary_locale: &str,
) -> Result<(), MergeError> {
    // Earlier supplements may add primary keys that later ones then change.
    let mut primary = base.locale(primary_locale).cloned().unwrap_or_default();

    for (index, supplement) in supplements.iter().enumerate() {
        let Some(table) = supplement.locale(primary_locale) else {
            continue;
        };
        for (key, value) in table {
            match primary.get(key) {
                Some(existing) if existing != value => {
                    return Err(MergeError::PrimaryLocaleOverride {
                        supplement: index,
                        locale: primary_locale.to_string(),
                        key: key.clone(),
                    });
                }
                Some(_) => {}
                None => {
                    primary.insert(key.clone(), value.clone());
                }
            }
        }
    }

    Ok(())
}
