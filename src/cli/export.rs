//! Export command for generating a markdown style summary.

use crate::cli::common::{self, CliError, CliResult};
use crate::export;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Export a markdown summary of the card style settings
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Path to the YAML settings file (defaults to the configured one)
    #[arg(short, long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Category to include in the resolution table; repeat or use a delimited list
    #[arg(short, long = "category", value_name = "ID")]
    pub categories: Vec<String>,

    /// Output path for the markdown file (prints to stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let categories = if self.categories.is_empty() {
            Vec::new()
        } else {
            common::parse_categories(&self.categories)?
        };

        let settings = common::load_settings(self.settings.as_deref())?;
        let markdown = export::generate_style_summary(&settings, &categories);

        match &self.output {
            Some(path) => {
                fs::write(path, markdown)
                    .map_err(|e| CliError::io(format!("Failed to write output file: {e}")))?;
                println!("✓ Exported style summary to: {}", path.display());
            }
            None => print!("{markdown}"),
        }

        Ok(())
    }
}
