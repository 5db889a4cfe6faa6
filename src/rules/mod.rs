//! Dictionary checks.
//!
//! Each rule exposes a `check_*_issues(&ProjectContext)` entry point used by
//! the `check` command, backed by a pure per-module function that the tests
//! drive directly.

pub mod helpers;
pub mod module_errors;
pub mod placeholder_mismatch;
pub mod primary_override;
pub mod unknown_key;
pub mod unknown_locale;
pub mod untranslated;

pub use helpers::{ModuleView, module_views};
