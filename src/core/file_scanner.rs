use std::path::{Path, PathBuf};

use glob::Pattern;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Result of scanning for dictionary module files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Matching module files, sorted.
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Walk `root` and collect files whose root-relative path matches one of
/// `includes` and none of `ignores`.
///
/// Invalid patterns are skipped with a warning; `Config::validate` normally
/// rejects them earlier.
pub fn scan_module_files(root: &Path, includes: &[String], ignores: &[String]) -> ScanResult {
    let include_patterns = compile_patterns(includes, "include");
    let ignore_patterns = compile_patterns(ignores, "ignore");
    let mut result = ScanResult::default();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                result.skipped_count += 1;
                debug!("cannot access path: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);
        let relative_str = relative.to_string_lossy();

        if ignore_patterns.iter().any(|p| p.matches(&relative_str)) {
            continue;
        }
        if include_patterns.iter().any(|p| p.matches(&relative_str)) {
            debug!(path = %relative_str, "found dictionary module");
            result.files.push(path.to_path_buf());
        }
    }

    result.files.sort();
    result
}

fn compile_patterns(patterns: &[String], kind: &str) -> Vec<Pattern> {
    patterns
        .iter()
        .filter_map(|p| match Pattern::new(p) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                warn!("invalid {} pattern '{}': {}", kind, p, e);
                None
            }
        })
        .collect()
}
