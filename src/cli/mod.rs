//! CLI command handlers for topic-cards.
//!
//! Headless, scriptable access to card style resolution, settings
//! validation and carousel planning for automation and CI.

pub mod carousel;
pub mod common;
pub mod config;
pub mod export;
pub mod resolve;
pub mod validate;

// Re-export types used by main.rs and tests
pub use carousel::CarouselArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use export::ExportArgs;
pub use resolve::ResolveArgs;
pub use validate::ValidateArgs;
