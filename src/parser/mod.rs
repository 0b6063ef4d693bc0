//! Parsers for theme settings documents.
//!
//! This module loads the YAML settings the theme component is configured
//! with and validates them into immutable model values.

pub mod report;
pub mod settings;

// Re-export commonly used functions
pub use report::{IssueKind, SettingsIssue, SettingsReport};
pub use settings::{check_settings_str, parse_settings_file, parse_settings_str};
