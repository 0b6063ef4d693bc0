//! Resolve command: prints the card style for categories.

use crate::cli::common::{self, CliResult};
use crate::export::CardClasses;
use crate::models::{CategoryId, ThemeSettings, Viewport};
use crate::services::resolve_all;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Resolve the card style for one or more categories
#[derive(Debug, Clone, Args)]
pub struct ResolveArgs {
    /// Path to the YAML settings file (defaults to the configured one)
    #[arg(short, long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Category id; repeat or use a delimited list
    #[arg(short, long = "category", value_name = "ID", required = true)]
    pub categories: Vec<String>,

    /// Only resolve this viewport (desktop or mobile)
    #[arg(long, value_name = "VIEWPORT")]
    pub viewport: Option<Viewport>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// One row of resolve output.
#[derive(Debug, Serialize)]
struct ResolveRow {
    category: CategoryId,
    viewport: Viewport,
    variant: String,
    modifiers: Vec<&'static str>,
    container_classes: Vec<String>,
    card_classes: Vec<String>,
    style: String,
}

#[derive(Debug, Serialize)]
struct ResolveResponse {
    results: Vec<ResolveRow>,
}

impl ResolveArgs {
    /// Execute the resolve command
    pub fn execute(&self) -> CliResult<()> {
        let categories = common::parse_categories(&self.categories)?;
        let settings = common::load_settings(self.settings.as_deref())?;

        let viewports: Vec<Viewport> = match self.viewport {
            Some(viewport) => vec![viewport],
            None => Viewport::ALL.to_vec(),
        };

        let results = build_rows(&settings, &categories, &viewports);

        if self.json {
            return common::print_json(&ResolveResponse { results });
        }

        for row in &results {
            if row.card_classes.is_empty() {
                println!("{} {:<8} none", row.category, row.viewport.as_str());
                continue;
            }
            println!(
                "{} {:<8} {}",
                row.category,
                row.viewport.as_str(),
                row.card_classes.join(" ")
            );
            if !row.style.is_empty() {
                println!("  style: {}", row.style);
            }
        }

        Ok(())
    }
}

fn build_rows(
    settings: &ThemeSettings,
    categories: &[CategoryId],
    viewports: &[Viewport],
) -> Vec<ResolveRow> {
    let mut rows = Vec::with_capacity(categories.len() * viewports.len());

    for &category in categories {
        let styles = resolve_all(category, &settings.style);
        for &viewport in viewports {
            let resolved = styles.get(viewport);
            let classes = CardClasses::render(resolved, &settings.style);
            rows.push(ResolveRow {
                category,
                viewport,
                variant: resolved.variant.to_string(),
                modifiers: resolved.modifier_classes(),
                style: classes.style_attribute(),
                container_classes: classes.container,
                card_classes: classes.card,
            });
        }
    }

    rows
}
