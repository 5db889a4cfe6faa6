use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};
use tracing::{debug, info};

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{Merger, ModuleGraph, ResolveError, file_scanner::scan_module_files},
    utils::{display_path, normalize_path},
};

/// Configuration plus the loaded module graph, shared by commands and rules.
///
/// Configuration priority (highest to lowest):
/// 1. CLI arguments (e.g., `--primary-locale pt`)
/// 2. `.tdictrc.json` config file
/// 3. Built-in defaults
pub struct ProjectContext {
    pub config: Config,

    /// Directory module paths are scanned from and reported relative to.
    pub root_dir: PathBuf,

    /// Module files found by scanning, or the ones named on the command line.
    pub module_paths: Vec<PathBuf>,

    /// Paths the scanner could not access.
    pub skipped_count: usize,

    graph: ModuleGraph,

    resolve_errors: Vec<(PathBuf, ResolveError)>,
}

impl ProjectContext {
    /// Scan the project for modules, load them and resolve every one.
    pub fn scan(args: &CommonArgs) -> Result<Self> {
        let (config, root_dir) = load_settings(args)?;

        let scan = scan_module_files(&root_dir, &config.includes, &config.ignores);
        info!(
            root = %root_dir.display(),
            modules = scan.files.len(),
            skipped = scan.skipped_count,
            "scanned dictionary modules"
        );

        let mut graph = ModuleGraph::load(&scan.files, Merger::new(config.merge_policy()));
        let resolve_errors = graph.resolve_all();
        graph.resolve_policy_fallbacks();

        Ok(Self {
            config,
            root_dir,
            module_paths: scan.files,
            skipped_count: scan.skipped_count,
            graph,
            resolve_errors,
        })
    }

    /// Load only `modules` (and their supplements), relative to the working directory.
    pub fn with_modules(args: &CommonArgs, modules: &[PathBuf]) -> Result<Self> {
        let (config, root_dir) = load_settings(args)?;
        let cwd = env::current_dir().context("Failed to get current directory")?;
        let roots: Vec<PathBuf> = modules.iter().map(|m| normalize_path(&cwd.join(m))).collect();

        debug!(?roots, "loading requested modules");
        let graph = ModuleGraph::load(&roots, Merger::new(config.merge_policy()));

        Ok(Self {
            config,
            root_dir,
            module_paths: roots,
            skipped_count: 0,
            graph,
            resolve_errors: Vec::new(),
        })
    }

    pub fn primary_locale(&self) -> &str {
        &self.config.primary_locale
    }

    pub fn graph(&self) -> &ModuleGraph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut ModuleGraph {
        &mut self.graph
    }

    /// Resolution failures collected by [`ProjectContext::scan`].
    pub fn resolve_errors(&self) -> &[(PathBuf, ResolveError)] {
        &self.resolve_errors
    }

    /// Path for user-facing output, relative to the project root when possible.
    pub fn display_path(&self, path: &Path) -> String {
        display_path(path, &self.root_dir)
    }
}

fn load_settings(args: &CommonArgs) -> Result<(Config, PathBuf)> {
    let cwd = env::current_dir().context("Failed to get current directory")?;
    let loaded = load_config(&cwd)?;
    let mut config = loaded.config;

    if let Some(locale) = &args.primary_locale {
        config.primary_locale = locale.clone();
    }
    if args.protect_primary {
        config.protect_primary_locale = true;
    }
    config.validate()?;

    let root_dir = match (&args.root, loaded.config_dir) {
        (Some(root), _) => normalize_path(&cwd.join(root)),
        (None, Some(config_dir)) => config_dir,
        (None, None) => cwd,
    };
    debug!(root = %root_dir.display(), primary = %config.primary_locale, "configuration loaded");

    Ok((config, root_dir))
}
