//! Findings collected while validating a settings document.

// Allow format! appended to String - more readable for building messages
#![allow(clippy::format_push_string)]

use serde::Serialize;
use std::fmt;

/// Validation result with errors and warnings.
///
/// Errors make the document unusable; warnings describe input that was
/// ignored or replaced by a default.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SettingsReport {
    /// Problems that prevent the settings from loading
    pub errors: Vec<SettingsIssue>,
    /// Input that was ignored or defaulted
    pub warnings: Vec<SettingsIssue>,
}

impl SettingsReport {
    /// Creates a new empty report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Returns true if there are no errors (warnings are allowed).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Adds an error to the report.
    pub fn add_error(&mut self, issue: SettingsIssue) {
        self.errors.push(issue);
    }

    /// Adds a warning to the report.
    pub fn add_warning(&mut self, issue: SettingsIssue) {
        self.warnings.push(issue);
    }

    /// Formats the report as a user-facing message.
    #[must_use]
    pub fn format_message(&self) -> String {
        let mut message = String::new();

        if !self.errors.is_empty() {
            message.push_str(&format!("{} settings errors:\n", self.errors.len()));
            for (idx, error) in self.errors.iter().enumerate() {
                message.push_str(&format!("  {}. {}\n", idx + 1, error));
            }
        }

        if !self.warnings.is_empty() {
            if !message.is_empty() {
                message.push('\n');
            }
            message.push_str(&format!("{} warnings:\n", self.warnings.len()));
            for (idx, warning) in self.warnings.iter().enumerate() {
                message.push_str(&format!("  {}. {}\n", idx + 1, warning));
            }
        }

        message
    }
}

/// One finding, tied to the settings key it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsIssue {
    /// Type of finding
    pub kind: IssueKind,
    /// Settings key the finding refers to
    pub key: String,
    /// Human-readable description
    pub message: String,
}

impl SettingsIssue {
    /// Creates a new issue.
    pub fn new(kind: IssueKind, key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            key: key.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for SettingsIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.key, self.kind, self.message)
    }
}

/// Types of settings findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Category list entry that is not a category id
    InvalidCategoryEntry,
    /// Style token that names no variant
    UnknownStyleToken,
    /// Style token shadowed by membership lists for the same viewport
    IgnoredStyleToken,
    /// Tie-break or default policy value that is not recognised
    InvalidPolicy,
    /// Size constraint enabled without a usable value
    MissingConstraintValue,
    /// Count setting outside its allowed range
    InvalidCount,
    /// Carousel location that is not recognised
    InvalidDisplayLocation,
    /// Key the theme component does not read
    UnknownKey,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCategoryEntry => write!(f, "Invalid Category Entry"),
            Self::UnknownStyleToken => write!(f, "Unknown Style Token"),
            Self::IgnoredStyleToken => write!(f, "Ignored Style Token"),
            Self::InvalidPolicy => write!(f, "Invalid Policy"),
            Self::MissingConstraintValue => write!(f, "Missing Constraint Value"),
            Self::InvalidCount => write!(f, "Invalid Count"),
            Self::InvalidDisplayLocation => write!(f, "Invalid Display Location"),
            Self::UnknownKey => write!(f, "Unknown Key"),
        }
    }
}
