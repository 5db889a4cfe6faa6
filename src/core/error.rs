use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by a merge under a non-permissive policy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    /// A supplement would replace an existing value in the protected locale.
    #[error(
        "supplement #{supplement} overrides protected locale '{locale}' for key \"{key}\""
    )]
    PrimaryLocaleOverride {
        /// Zero-based index of the offending supplement.
        supplement: usize,
        locale: String,
        key: String,
    },
}

/// Errors raised while resolving a module's effective dictionary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The module was never loaded into the graph.
    #[error("module {} is not loaded", .0.display())]
    UnknownModule(PathBuf),

    /// A `$supplements` entry points at a file that is missing or unparsable.
    #[error("module {} lists missing supplement {}", module.display(), supplement.display())]
    MissingSupplement { module: PathBuf, supplement: PathBuf },

    /// A module reaches itself through its supplements.
    #[error("supplement cycle: {}", format_chain(chain))]
    Cycle { chain: Vec<PathBuf> },

    /// The merge policy rejected a supplement of `module`.
    #[error("cannot merge supplements into {}: {source}", module.display())]
    Merge {
        module: PathBuf,
        #[source]
        source: MergeError,
    },
}

fn format_chain(chain: &[PathBuf]) -> String {
    chain
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
