//! Core dictionary engine.
//!
//! - `data`: TranslationDictionary, LocaleTable and entry locations
//! - `merge`: supplemental translation merging
//! - `parsers`: dictionary module file parsing
//! - `file_scanner`: module discovery under the project root
//! - `resolve`: module graph and effective dictionaries
//! - `placeholder` / `lookup`: `%(name)s` formatting and locale fallback
//! - `context`: configuration plus loaded graph for commands and rules

pub mod context;
pub mod data;
pub mod error;
pub mod file_scanner;
pub mod lookup;
pub mod merge;
pub mod parsers;
pub mod placeholder;
pub mod resolve;

pub use context::ProjectContext;
pub use data::{EntryContext, EntryLocation, LocaleTable, TranslationDictionary};
pub use error::{MergeError, ResolveError};
pub use lookup::Translator;
pub use merge::{MergePolicy, MergeStats, Merger, merge_supplemental_translations, merged};
pub use parsers::json::DictionaryModule;
pub use placeholder::{PlaceholderArgs, format_placeholders, placeholders};
pub use resolve::{ModuleGraph, ModuleLoadWarning};
