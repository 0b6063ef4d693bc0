//! Validation command for settings files.

use crate::cli::common::{self, CliError, CliResult};
use crate::parser::{check_settings_str, SettingsIssue};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Validate a settings file for errors and warnings
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to the YAML settings file (defaults to the configured one)
    #[arg(short, long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat warnings as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Serialize)]
struct ValidationResponse<'a> {
    valid: bool,
    errors: &'a [SettingsIssue],
    warnings: &'a [SettingsIssue],
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let content = common::read_settings(self.settings.as_deref())?;
        let report = check_settings_str(&content)
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        let response = ValidationResponse {
            valid: report.is_valid(),
            errors: &report.errors,
            warnings: &report.warnings,
        };

        if self.json {
            common::print_json(&response)?;
        } else {
            if response.valid {
                println!("✓ Validation passed");
            } else {
                println!("✗ Validation failed");
            }

            if !report.errors.is_empty() || !report.warnings.is_empty() {
                println!("\nIssues:");
                for issue in &report.errors {
                    println!("  ✗ {issue}");
                }
                for issue in &report.warnings {
                    println!("  ⚠ {issue}");
                }
            }
        }

        if !response.valid {
            return Err(CliError::validation("Validation failed"));
        }

        if self.strict && !report.warnings.is_empty() {
            return Err(CliError::validation("Warnings found in strict mode"));
        }

        Ok(())
    }
}
