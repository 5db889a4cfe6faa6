use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::{
    core::{EntryContext, EntryLocation, LocaleTable, TranslationDictionary},
    utils::normalize_path,
};

/// Top-level member listing a module's supplements, relative to the module.
pub const SUPPLEMENTS_FIELD: &str = "$supplements";

/// 1-based line and column of a JSON member name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Position {
    line: usize,
    col: usize,
}

impl Default for Position {
    fn default() -> Self {
        Self { line: 1, col: 1 }
    }
}

/// A parsed dictionary module file.
#[derive(Debug, Clone)]
pub struct DictionaryModule {
    /// Normalized path of the module file.
    pub path: PathBuf,
    /// The module's own tables, before any supplement is merged in.
    pub dictionary: TranslationDictionary,
    /// Normalized supplement paths, in merge order.
    pub supplements: Vec<PathBuf>,
    source: String,
    line_index: Vec<usize>,
    locale_positions: HashMap<String, Position>,
    entry_positions: HashMap<String, HashMap<String, Position>>,
}

impl DictionaryModule {
    pub fn file_path(&self) -> String {
        self.path.to_string_lossy().to_string()
    }

    fn locale_position(&self, locale: &str) -> Position {
        self.locale_positions
            .get(locale)
            .copied()
            .unwrap_or_default()
    }

    fn entry_position(&self, locale: &str, key: &str) -> Position {
        self.entry_positions
            .get(locale)
            .and_then(|keys| keys.get(key))
            .copied()
            .unwrap_or_default()
    }

    /// Line where `locale` is declared (1 if unknown).
    pub fn locale_line(&self, locale: &str) -> usize {
        self.locale_position(locale).line
    }

    /// Line where `locale.key` is declared (1 if unknown).
    pub fn entry_line(&self, locale: &str, key: &str) -> usize {
        self.entry_position(locale, key).line
    }

    /// Text of a 1-based source line, without the line break.
    pub fn source_line(&self, line: usize) -> Option<&str> {
        let start = *self.line_index.get(line.checked_sub(1)?)?;
        let end = self
            .line_index
            .get(line)
            .copied()
            .unwrap_or(self.source.len());
        Some(self.source[start..end].trim_end_matches(['\n', '\r']))
    }

    /// Location of the `locale` member, reported under `file_label`.
    pub fn locale_location(&self, file_label: &str, locale: &str) -> EntryLocation {
        let pos = self.locale_position(locale);
        EntryLocation::new(file_label, pos.line, pos.col)
    }

    /// Located context for an entry of this module, reported under `file_label`.
    pub fn entry_context(
        &self,
        file_label: &str,
        locale: &str,
        key: &str,
        value: &str,
    ) -> EntryContext {
        let pos = self.entry_position(locale, key);
        let context = EntryContext::new(
            EntryLocation::new(file_label, pos.line, pos.col),
            locale,
            key,
            value,
        );
        match self.source_line(pos.line) {
            Some(line) => context.with_source_line(line),
            None => context,
        }
    }
}

pub fn parse_module_file(path: &Path) -> Result<DictionaryModule> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dictionary file: {:?}", path))?;
    parse_module_source(path, &content)
}

/// Parse module `content` as if it was read from `path`.
pub fn parse_module_source(path: &Path, content: &str) -> Result<DictionaryModule> {
    let json: Value = serde_json::from_str(content)
        .with_context(|| format!("Failed to parse JSON file: {:?}", path))?;

    let Value::Object(members) = json else {
        bail!("{:?}: expected a JSON object of locale tables", path);
    };

    let path = normalize_path(path);
    let base_dir = path.parent().unwrap_or(Path::new("")).to_path_buf();
    // Pre-compute line index for O(log n) line lookups
    let line_index = build_line_index(content);

    let mut locator = MemberLocator::new(content, &line_index);
    let mut module = DictionaryModule {
        path,
        dictionary: TranslationDictionary::new(),
        supplements: Vec::new(),
        source: String::new(),
        line_index: Vec::new(),
        locale_positions: HashMap::new(),
        entry_positions: HashMap::new(),
    };

    for (name, value) in members {
        if name == SUPPLEMENTS_FIELD {
            module.supplements = parse_supplements(&module.path, &base_dir, value)?;
            continue;
        }

        let Value::Object(entries) = value else {
            bail!(
                "{:?}: locale '{}' must map to an object of strings",
                module.path,
                name
            );
        };

        let locale_pos = locator.locate(&name);
        let mut table = LocaleTable::new();
        let mut positions = HashMap::with_capacity(entries.len());
        for (key, value) in entries {
            let Value::String(text) = value else {
                bail!(
                    "{:?}: value of '{}' in locale '{}' must be a string",
                    module.path,
                    key,
                    name
                );
            };
            positions.insert(key.clone(), locator.locate(&key));
            table.insert(key, text);
        }

        module.locale_positions.insert(name.clone(), locale_pos);
        module.entry_positions.insert(name.clone(), positions);
        module.dictionary.insert_locale(name, table);
    }

    module.source = content.to_string();
    module.line_index = line_index;
    Ok(module)
}

fn parse_supplements(module: &Path, base_dir: &Path, value: Value) -> Result<Vec<PathBuf>> {
    let Value::Array(items) = value else {
        bail!("{:?}: '{}' must be an array of paths", module, SUPPLEMENTS_FIELD);
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::String(rel) => Ok(normalize_path(&base_dir.join(rel))),
            other => bail!(
                "{:?}: '{}' entries must be strings, got {}",
                module,
                SUPPLEMENTS_FIELD,
                other
            ),
        })
        .collect()
}

/// Build an index of line start byte offsets for O(log n) line lookups.
///
/// The returned vector contains byte offsets where each line starts.
/// Line 1 starts at offset 0, line 2 starts after the first '\n', etc.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0]; // Line 1 starts at offset 0
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Find line number for a byte offset using binary search.
///
/// Returns 1-based line number.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1, // Exact match at line start
        Err(line) => line,    // Falls within this line
    }
}

/// Finds member names in the order `serde_json` yields them.
///
/// With `preserve_order` that is file order, so each search resumes where the
/// previous match ended: a locale is never matched inside an earlier table
/// and the whole file is scanned once. Only matches followed by `:` count,
/// which skips string values with the same text. Keys are never split on `.`,
/// since literal English keys contain dots.
struct MemberLocator<'a> {
    content: &'a str,
    line_index: &'a [usize],
    offset: usize,
}

impl<'a> MemberLocator<'a> {
    fn new(content: &'a str, line_index: &'a [usize]) -> Self {
        Self {
            content,
            line_index,
            offset: 0,
        }
    }

    /// Position of the next member called `name`, or line 1 when not found.
    fn locate(&mut self, name: &str) -> Position {
        // Match the name as JSON would spell it, escapes included.
        let Ok(pattern) = serde_json::to_string(name) else {
            return Position::default();
        };

        let mut pos = self.offset;
        while let Some(rel_pos) = self.content[pos..].find(&pattern) {
            let key_start = pos + rel_pos;
            let after_pattern = key_start + pattern.len();
            if self.content[after_pattern..].trim_start().starts_with(':') {
                self.offset = after_pattern;
                return self.position_at(key_start);
            }
            pos = key_start + 1;
        }
        Position::default()
    }

    fn position_at(&self, offset: usize) -> Position {
        let line = offset_to_line(self.line_index, offset);
        let line_start = self.line_index[line - 1];
        Position {
            line,
            col: self.content[line_start..offset].chars().count() + 1,
        }
    }
}
