//! Core data types shared by the merge, resolver and rules.
//!
//! - `dictionary`: TranslationDictionary and LocaleTable
//! - `entry`: file locations of individual entries

pub mod dictionary;
pub mod entry;

pub use dictionary::{LocaleTable, TranslationDictionary};
pub use entry::{EntryContext, EntryLocation};
