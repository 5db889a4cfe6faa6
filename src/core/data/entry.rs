/// Position of an entry inside a dictionary module file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct EntryLocation {
    /// Path to the module file (e.g., "./components/AdminApp/i18n.json").
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub col: usize,
}

impl EntryLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }

    /// Create with default column (1).
    pub fn with_line(file_path: impl Into<String>, line: usize) -> Self {
        Self::new(file_path, line, 1)
    }
}

/// A located `locale.key = value` entry, used by issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryContext {
    pub location: EntryLocation,
    pub locale: String,
    pub key: String,
    pub value: String,
    /// The module line holding the entry, for report snippets.
    pub source_line: Option<String>,
}

impl EntryContext {
    pub fn new(
        location: EntryLocation,
        locale: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            location,
            locale: locale.into(),
            key: key.into(),
            value: value.into(),
            source_line: None,
        }
    }

    pub fn with_source_line(mut self, line: impl Into<String>) -> Self {
        self.source_line = Some(line.into());
        self
    }

    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }
}
