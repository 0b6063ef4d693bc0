//! Topic Cards - card style resolver for a forum theme component
//!
//! Resolves which card layout a category's topic list uses on desktop and
//! mobile, validates settings documents, and plans carousels.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use topic_cards::cli::{
    CarouselArgs, CliError, ConfigArgs, ExitCode, ExportArgs, ResolveArgs, ValidateArgs,
};
use topic_cards::config::Config;
use topic_cards::constants::APP_BINARY_NAME;

/// Topic Cards - card style resolver for a forum theme component
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve the card style for categories
    Resolve(ResolveArgs),
    /// Validate a settings file
    Validate(ValidateArgs),
    /// Show the carousels rendered on a page
    Carousel(CarouselArgs),
    /// Export a markdown style summary
    Export(ExportArgs),
    /// Manage application configuration
    Config(ConfigArgs),
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins; otherwise `--verbose` selects debug, else the configured level.
fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        "debug".to_string()
    } else {
        Config::load()
            .map(|config| config.logging.level)
            .unwrap_or_else(|_| "warn".to_string())
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(command: &Commands) -> Result<(), CliError> {
    match command {
        Commands::Resolve(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
        Commands::Carousel(args) => args.execute(),
        Commands::Export(args) => args.execute(),
        Commands::Config(args) => args.execute(),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }

    std::process::exit(ExitCode::SUCCESS);
}
