//! tdict - translation dictionary merger and checker
//!
//! tdict merges supplemental translation dictionaries into a base dictionary
//! (later supplements win, whole locales are added as needed), resolves
//! modules that declare their supplements in JSON, looks up and formats
//! translated strings, and checks dictionary modules for common mistakes.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (check, merge, lookup, init)
//! - `config`: Configuration file loading and parsing
//! - `core`: Dictionary model, merge, module resolution and lookup
//! - `issues`: Issue type definitions and reporting
//! - `rules`: Checks run by `tdict check`
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
pub mod utils;
