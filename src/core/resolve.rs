//! Module graph loading and effective dictionary resolution.
//!
//! A module's effective dictionary is its own tables with the effective
//! dictionaries of its supplements merged in, in declaration order. Nested
//! supplements are therefore applied depth-first: a parent sees what its
//! supplement exports, not the supplement's raw file.

use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    path::{Path, PathBuf},
};

use rayon::prelude::*;
use tracing::{debug, warn};

use super::{
    MergePolicy, Merger, ResolveError, TranslationDictionary,
    parsers::json::{DictionaryModule, parse_module_file},
};
use crate::utils::normalize_path;

/// A module file that could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleLoadWarning {
    pub file_path: PathBuf,
    pub error: String,
    /// True when the file does not exist at all.
    pub missing: bool,
}

/// Loaded modules plus memoized effective dictionaries.
#[derive(Debug, Default)]
pub struct ModuleGraph {
    modules: BTreeMap<PathBuf, DictionaryModule>,
    failures: BTreeMap<PathBuf, ModuleLoadWarning>,
    merger: Merger,
    resolved: HashMap<PathBuf, TranslationDictionary>,
    /// Permissive views of modules the merge policy rejected.
    fallbacks: HashMap<PathBuf, TranslationDictionary>,
}

impl ModuleGraph {
    /// Load `roots` and, transitively, every supplement they reference.
    ///
    /// Each wave of newly discovered files is parsed in parallel. Files that
    /// fail to load are kept as warnings instead of aborting.
    pub fn load(roots: &[PathBuf], merger: Merger) -> Self {
        let mut graph = Self {
            merger,
            ..Self::default()
        };

        let mut frontier: BTreeSet<PathBuf> = roots.iter().map(|p| normalize_path(p)).collect();
        while !frontier.is_empty() {
            let parsed: Vec<_> = frontier
                .par_iter()
                .map(|path| (path.clone(), parse_module_file(path)))
                .collect();

            let mut next = BTreeSet::new();
            for (path, result) in parsed {
                match result {
                    Ok(module) => {
                        for supplement in &module.supplements {
                            if !graph.is_known(supplement) && !frontier.contains(supplement) {
                                next.insert(supplement.clone());
                            }
                        }
                        debug!(
                            path = %path.display(),
                            locales = module.dictionary.len(),
                            supplements = module.supplements.len(),
                            "loaded dictionary module"
                        );
                        graph.modules.insert(path, module);
                    }
                    Err(e) => {
                        let missing = !path.is_file();
                        warn!(path = %path.display(), "failed to load dictionary module: {:#}", e);
                        graph.failures.insert(
                            path.clone(),
                            ModuleLoadWarning {
                                file_path: path,
                                error: format!("{:#}", e),
                                missing,
                            },
                        );
                    }
                }
            }
            frontier = next;
        }

        graph
    }

    /// Build a graph from already parsed modules. Supplements that are not
    /// among `modules` resolve as missing.
    pub fn from_modules(modules: impl IntoIterator<Item = DictionaryModule>, merger: Merger) -> Self {
        Self {
            modules: modules
                .into_iter()
                .map(|m| (m.path.clone(), m))
                .collect(),
            merger,
            ..Self::default()
        }
    }

    fn is_known(&self, path: &Path) -> bool {
        self.modules.contains_key(path) || self.failures.contains_key(path)
    }

    pub fn module(&self, path: &Path) -> Option<&DictionaryModule> {
        self.modules.get(&normalize_path(path))
    }

    /// Loaded modules in path order.
    pub fn modules(&self) -> impl Iterator<Item = &DictionaryModule> {
        self.modules.values()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Files that failed to load, in path order.
    pub fn warnings(&self) -> impl Iterator<Item = &ModuleLoadWarning> {
        self.failures.values()
    }

    /// Load failure recorded for `path`, if any.
    pub fn warning(&self, path: &Path) -> Option<&ModuleLoadWarning> {
        self.failures.get(&normalize_path(path))
    }

    /// Effective dictionary of a module resolved earlier.
    pub fn effective(&self, path: &Path) -> Option<&TranslationDictionary> {
        self.resolved.get(&normalize_path(path))
    }

    /// Effective dictionary of `path`, or its permissive view when the merge
    /// policy rejected it and [`ModuleGraph::resolve_policy_fallbacks`] ran.
    pub fn best_effort(&self, path: &Path) -> Option<&TranslationDictionary> {
        let path = normalize_path(path);
        self.resolved
            .get(&path)
            .or_else(|| self.fallbacks.get(&path))
    }

    /// Resolve the effective dictionary of `path`.
    pub fn resolve(&mut self, path: &Path) -> Result<&TranslationDictionary, ResolveError> {
        let path = normalize_path(path);
        let mut stack = Vec::new();
        self.ensure_resolved(&path, &mut stack)?;
        self.resolved
            .get(&path)
            .ok_or(ResolveError::UnknownModule(path))
    }

    /// Resolve every loaded module, returning the failures.
    pub fn resolve_all(&mut self) -> Vec<(PathBuf, ResolveError)> {
        let paths: Vec<PathBuf> = self.modules.keys().cloned().collect();
        paths
            .into_iter()
            .filter_map(|path| {
                let mut stack = Vec::new();
                self.ensure_resolved(&path, &mut stack)
                    .err()
                    .map(|e| (path, e))
            })
            .collect()
    }

    /// Resolve without the merge policy every module that has no effective
    /// dictionary yet.
    ///
    /// The results are only visible through [`ModuleGraph::best_effort`];
    /// `resolve` and `effective` still fail for these modules. Modules with
    /// missing supplements or cycles stay unresolved.
    pub fn resolve_policy_fallbacks(&mut self) {
        if *self.merger.policy() == MergePolicy::Permissive {
            return;
        }

        let mut permissive =
            ModuleGraph::from_modules(self.modules.values().cloned(), Merger::default());
        permissive.resolve_all();
        for (path, dictionary) in permissive.resolved {
            if !self.resolved.contains_key(&path) {
                debug!(path = %path.display(), "using permissive view of rejected module");
                self.fallbacks.insert(path, dictionary);
            }
        }
    }

    fn ensure_resolved(
        &mut self,
        path: &Path,
        stack: &mut Vec<PathBuf>,
    ) -> Result<(), ResolveError> {
        if self.resolved.contains_key(path) {
            return Ok(());
        }
        if let Some(pos) = stack.iter().position(|p| p == path) {
            let mut chain = stack[pos..].to_vec();
            chain.push(path.to_path_buf());
            return Err(ResolveError::Cycle { chain });
        }

        let module = self
            .modules
            .get(path)
            .ok_or_else(|| ResolveError::UnknownModule(path.to_path_buf()))?;
        let mut effective = module.dictionary.clone();
        let supplements = module.supplements.clone();

        stack.push(path.to_path_buf());
        for supplement in &supplements {
            if !self.modules.contains_key(supplement) {
                return Err(ResolveError::MissingSupplement {
                    module: path.to_path_buf(),
                    supplement: supplement.clone(),
                });
            }
            self.ensure_resolved(supplement, stack)?;
        }
        stack.pop();

        let resolved_supplements: Vec<&TranslationDictionary> = supplements
            .iter()
            .filter_map(|s| self.resolved.get(s))
            .collect();
        self.merger
            .merge(&mut effective, &resolved_supplements)
            .map_err(|source| ResolveError::Merge {
                module: path.to_path_buf(),
                source,
            })?;

        debug!(path = %path.display(), "resolved effective dictionary");
        self.resolved.insert(path.to_path_buf(), effective);
        Ok(())
    }
}
