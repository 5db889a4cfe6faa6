//! Parsers for dictionary module files.
//!
//! - `json`: JSON dictionary modules (`{"$supplements": [...], "en": {...}}`)

pub mod json;
