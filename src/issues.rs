//! Issue types for dictionary checks.
//!
//! Each issue is self-contained with everything the reporter needs to
//! display it: location, message, severity and optional details.

use std::cmp::Ordering;

use enum_dispatch::enum_dispatch;

use crate::core::{EntryContext, EntryLocation};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    UnknownKey,
    PlaceholderMismatch,
    Untranslated,
    PrimaryOverride,
    UnknownLocale,
    SupplementError,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::UnknownKey => write!(f, "unknown-key"),
            Rule::PlaceholderMismatch => write!(f, "placeholder-mismatch"),
            Rule::Untranslated => write!(f, "untranslated"),
            Rule::PrimaryOverride => write!(f, "primary-override"),
            Rule::UnknownLocale => write!(f, "unknown-locale"),
            Rule::SupplementError => write!(f, "supplement-error"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types - Entries
// ============================================================

/// Non-primary entry whose key is absent from the effective primary table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKeyIssue {
    pub context: EntryContext,
    pub primary_locale: String,
}

impl UnknownKeyIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnknownKey
    }
}

/// Translation whose `%(name)s` placeholders differ from the primary value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMismatchIssue {
    pub context: EntryContext,
    /// Placeholders in the primary value, sorted.
    pub expected: Vec<String>,
    /// Placeholders in this translation, sorted.
    pub actual: Vec<String>,
}

impl PlaceholderMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::PlaceholderMismatch
    }
}

/// Translation identical to the primary value (possibly not translated).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UntranslatedIssue {
    pub context: EntryContext,
    pub primary_locale: String,
}

impl UntranslatedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Untranslated
    }
}

/// A supplement replaces a value in the base module's primary table.
///
/// Points at the base module's entry, which is the value being lost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryOverrideIssue {
    pub context: EntryContext,
    /// Supplement providing the replacement.
    pub supplement: String,
    pub replacement: String,
    /// Set when `protectPrimaryLocale` turns the override into an error.
    pub protected: bool,
}

impl PrimaryOverrideIssue {
    pub fn rule() -> Rule {
        Rule::PrimaryOverride
    }
}

/// Locale outside the configured `locales` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocaleIssue {
    pub location: EntryLocation,
    pub locale: String,
    pub allowed: Vec<String>,
}

impl UnknownLocaleIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnknownLocale
    }
}

// ============================================================
// Issue Types - Files
// ============================================================

/// A module's supplements could not be resolved (missing file, cycle).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplementErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl SupplementErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::SupplementError
    }
}

/// File could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A dictionary issue found during checking.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    UnknownKey(UnknownKeyIssue),
    PlaceholderMismatch(PlaceholderMismatchIssue),
    Untranslated(UntranslatedIssue),
    PrimaryOverride(PrimaryOverrideIssue),
    UnknownLocale(UnknownLocaleIssue),
    SupplementError(SupplementErrorIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }
}

/// Order issues by file, line, column, then rule.
pub fn compare_issues(a: &Issue, b: &Issue) -> Ordering {
    let (a_path, a_line, a_col) = a.location().position();
    let (b_path, b_line, b_col) = b.location().position();

    a_path
        .cmp(b_path)
        .then_with(|| a_line.cmp(&b_line))
        .then_with(|| a_col.cmp(&b_col))
        .then_with(|| a.rule().cmp(&b.rule()))
        .then_with(|| a.message().cmp(&b.message()))
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// A dictionary entry (has locale, key and value).
    Entry(&'a EntryContext),
    /// A position without entry context (e.g. a locale declaration).
    At(&'a EntryLocation),
    /// File-level only (no line context).
    File { path: &'a str },
}

impl<'a> ReportLocation<'a> {
    /// `(file, line, col)`; file-level locations use line and column 0.
    pub fn position(&self) -> (&'a str, usize, usize) {
        match *self {
            ReportLocation::Entry(ctx) => (ctx.file_path(), ctx.line(), ctx.col()),
            ReportLocation::At(loc) => (&loc.file_path, loc.line, loc.col),
            ReportLocation::File { path } => (path, 0, 0),
        }
    }
}

/// Trait for types that can be reported to CLI.
///
/// Implemented by all issue types; `enum_dispatch` forwards the `Issue` enum
/// to them without dynamic dispatch.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (key, locale, error).
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<String> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for UnknownKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "in {} (\"{}\") but not in {}",
            self.context.locale, self.context.value, self.primary_locale
        ))
    }
}

impl Report for PlaceholderMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{} expects [{}], got [{}]",
            self.context.locale,
            self.expected.join(", "),
            self.actual.join(", ")
        ))
    }

    fn hint(&self) -> Option<String> {
        Some("placeholders must be copied verbatim, e.g. %(name)s".to_string())
    }
}

impl Report for UntranslatedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "(\"{}\") identical to {} in {}",
            self.context.value, self.primary_locale, self.context.locale
        ))
    }
}

impl Report for PrimaryOverrideIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        if self.protected {
            Severity::Error
        } else {
            Severity::Warning
        }
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "(\"{}\") replaced by \"{}\" from {}",
            self.context.value, self.replacement, self.supplement
        ))
    }
}

impl Report for UnknownLocaleIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::At(&self.location)
    }

    fn message(&self) -> String {
        self.locale.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("allowed locales: {}", self.allowed.join(", ")))
    }
}

impl Report for SupplementErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}
