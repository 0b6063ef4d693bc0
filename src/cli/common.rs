//! Shared CLI plumbing: error type, exit codes and settings lookup.

use crate::config::Config;
use crate::constants::APP_BINARY_NAME;
use crate::models::{CategoryId, ThemeSettings};
use crate::parser::{self, settings::read_settings_file};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Process exit codes.
pub struct ExitCode;

impl ExitCode {
    /// Command succeeded
    pub const SUCCESS: i32 = 0;
    /// Settings or arguments failed validation
    pub const VALIDATION: i32 = 1;
    /// A file could not be read or written
    pub const IO: i32 = 2;
}

/// Category of a CLI failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// Invalid input
    Validation,
    /// File system failure
    Io,
}

/// Error returned by command handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Failure category
    pub kind: CliErrorKind,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Validation failure (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// I/O failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// Process exit code for this error.
    pub const fn exit_code(&self) -> i32 {
        match self.kind {
            CliErrorKind::Validation => ExitCode::VALIDATION,
            CliErrorKind::Io => ExitCode::IO,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type of command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Picks the settings file: the explicit flag, else `paths.settings` from
/// the app config.
pub fn settings_path(explicit: Option<&Path>) -> CliResult<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    let config = Config::load()
        .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

    config.paths.settings.ok_or_else(|| {
        CliError::validation(format!(
            "No settings file given. Use --settings or run '{APP_BINARY_NAME} config set --settings FILE'"
        ))
    })
}

/// Reads the settings file's contents.
///
/// Missing or unreadable files are I/O errors.
pub fn read_settings(explicit: Option<&Path>) -> CliResult<String> {
    let path = settings_path(explicit)?;
    debug!(path = %path.display(), "Reading settings file");
    read_settings_file(&path).map_err(|e| CliError::io(format!("{e:#}")))
}

/// Loads validated settings.
///
/// Missing files are I/O errors; invalid documents are validation errors.
pub fn load_settings(explicit: Option<&Path>) -> CliResult<ThemeSettings> {
    let content = read_settings(explicit)?;
    parser::parse_settings_str(&content).map_err(|e| CliError::validation(format!("{e:#}")))
}

/// Parses `--category` values, accepting delimited lists too.
pub fn parse_categories(values: &[String]) -> CliResult<Vec<CategoryId>> {
    let mut categories = Vec::new();

    for value in values {
        for entry in value
            .split(|c: char| c == ',' || c == '|' || c == ';' || c.is_whitespace())
            .filter(|entry| !entry.is_empty())
        {
            let id = entry
                .parse::<CategoryId>()
                .map_err(|e| CliError::validation(format!("Invalid category: {e}")))?;
            if !categories.contains(&id) {
                categories.push(id);
            }
        }
    }

    if categories.is_empty() {
        return Err(CliError::validation("At least one category is required"));
    }

    Ok(categories)
}

/// Serializes a value as pretty JSON and prints it.
pub fn print_json<T: serde::Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::validation("x").exit_code(), 1);
        assert_eq!(CliError::io("x").exit_code(), 2);
    }

    #[test]
    fn test_parse_categories() {
        let values = vec!["5".to_string(), "7|9".to_string(), "5".to_string()];
        let categories = parse_categories(&values).unwrap();
        assert_eq!(
            categories,
            vec![CategoryId::new(5), CategoryId::new(7), CategoryId::new(9)]
        );
    }

    #[test]
    fn test_parse_categories_rejects_garbage() {
        let err = parse_categories(&["abc".to_string()]).unwrap_err();
        assert_eq!(err.kind, CliErrorKind::Validation);

        assert!(parse_categories(&[]).is_err());
    }

    #[test]
    fn test_explicit_settings_path_wins() {
        let path = settings_path(Some(Path::new("custom.yml"))).unwrap();
        assert_eq!(path, PathBuf::from("custom.yml"));
    }
}
