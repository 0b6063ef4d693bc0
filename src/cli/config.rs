//! Configuration management CLI commands.

use crate::cli::common::{self, CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Default settings file for commands run without --settings
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Default log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: String,
    paths: PathsOutput,
    logging: LoggingOutput,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    settings: Option<String>,
}

#[derive(Serialize, Debug)]
struct LoggingOutput {
    level: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        let config_file = Config::config_file_path()
            .map_err(|e| CliError::io(format!("{e:#}")))?
            .to_string_lossy()
            .to_string();

        let output = ConfigOutput {
            config_file,
            paths: PathsOutput {
                settings: config
                    .paths
                    .settings
                    .as_ref()
                    .map(|p| p.to_string_lossy().to_string()),
            },
            logging: LoggingOutput {
                level: config.logging.level,
            },
        };

        if self.json {
            return common::print_json(&output);
        }

        println!("Config file: {}", output.config_file);
        println!("\n[paths]");
        println!(
            "  settings: {}",
            output.paths.settings.as_deref().unwrap_or("(not set)")
        );
        println!("\n[logging]");
        println!("  level: {}", output.logging.level);

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.settings.is_none() && self.log_level.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --settings or --log-level",
            ));
        }

        let mut config = Config::load().unwrap_or_default();

        if let Some(path) = &self.settings {
            if !path.is_file() {
                return Err(CliError::validation(format!(
                    "Settings file does not exist: {}",
                    path.display()
                )));
            }

            let absolute = std::fs::canonicalize(path).map_err(|e| {
                CliError::io(format!("Failed to resolve {}: {e}", path.display()))
            })?;
            config.paths.settings = Some(absolute);
        }

        if let Some(level) = &self.log_level {
            config
                .set_log_level(level)
                .map_err(|e| CliError::validation(e.to_string()))?;
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}
