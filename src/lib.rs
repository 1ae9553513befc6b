//! i18n-sync - translation key extractor for JavaScript/TypeScript projects
//!
//! Scans source files for calls to a translation function (`t("key", {...})`),
//! collects the keys with their plural flag and parameters, and keeps one JSON
//! translation file per language in sync: missing keys are added with an empty
//! value, existing translations are never touched.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface (build hook surface)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction and synchronization engine

pub mod cli;
pub mod config;
pub mod core;
