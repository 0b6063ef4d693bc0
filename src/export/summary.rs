//! Markdown summary of a theme settings document.
//!
//! Lists the effective rule for each viewport, the tie-break, the default
//! policy and the size constraints, followed by a table of resolved styles
//! for the requested categories.

use crate::models::{CategoryId, SizeConstraint, ThemeSettings, Viewport};
use crate::services::{resolve_all, ResolvedStyle};
use std::fmt::Write as _;

/// Generates a markdown summary of the settings.
///
/// # Arguments
///
/// * `settings` - Validated theme settings
/// * `categories` - Categories to list in the resolution table
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use topic_cards::export::summary::generate_style_summary;
/// use topic_cards::models::CategoryId;
/// use topic_cards::parser::parse_settings_file;
///
/// let settings = parse_settings_file(Path::new("settings.yml"))?;
/// let summary = generate_style_summary(&settings, &[CategoryId::new(5)]);
/// println!("{summary}");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn generate_style_summary(settings: &ThemeSettings, categories: &[CategoryId]) -> String {
    let style = &settings.style;
    let mut output = String::new();

    output.push_str("# Topic Card Styles\n\n");

    output.push_str("## Rules\n");
    for viewport in Viewport::ALL {
        let _ = writeln!(
            output,
            "- **{}:** {}",
            capitalize(viewport.as_str()),
            style.rule(viewport)
        );
    }
    let _ = writeln!(output, "- **Tie-break:** {}", style.tie_break());
    let _ = writeln!(output, "- **Default policy:** {}", style.default_policy());
    output.push('\n');

    output.push_str("## Size Constraints\n");
    for constraint in SizeConstraint::ALL {
        match style.constraints().value(constraint) {
            Some(px) => {
                let _ = writeln!(output, "- **{}:** {px}px", constraint.class_name());
            }
            None => {
                let _ = writeln!(output, "- **{}:** Disabled", constraint.class_name());
            }
        }
    }
    output.push('\n');

    output.push_str("## Carousel\n");
    let carousel = &settings.carousel;
    let _ = writeln!(output, "- **Display location:** {}", carousel.display_location);
    let _ = writeln!(output, "- **Max items:** {}", carousel.max_items);
    let _ = writeln!(
        output,
        "- **Pagination dots:** {}",
        if carousel.show_dots { "Yes" } else { "No" }
    );
    if carousel.subcategory_categories.is_empty() {
        output.push_str("- **Subcategory carousel:** None\n");
    } else {
        let _ = writeln!(
            output,
            "- **Subcategory carousel:** {} (min {} children)",
            carousel.subcategory_categories, carousel.subcategory_min_children
        );
    }
    output.push('\n');

    if categories.is_empty() {
        return output;
    }

    output.push_str("## Categories\n\n");
    output.push_str("| Category | Desktop | Mobile |\n");
    output.push_str("|----------|---------|--------|\n");
    for category in categories {
        let styles = resolve_all(*category, style);
        let _ = writeln!(
            output,
            "| {} | {} | {} |",
            category,
            format_cell(&styles.desktop),
            format_cell(&styles.mobile)
        );
    }

    output
}

fn format_cell(style: &ResolvedStyle) -> String {
    let modifiers = style.modifier_classes();
    if modifiers.is_empty() {
        style.variant.to_string()
    } else {
        format!("{} ({})", style.variant, modifiers.join(", "))
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
