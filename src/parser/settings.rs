//! Theme settings document parsing.
//!
//! The theme component's settings arrive as a flat YAML mapping, the same
//! shape the host application stores them in:
//!
//! ```yaml
//! list_view_categories: "5|12"
//! grid_view_categories: "7"
//! card_style_mobile: grid
//! set_card_max_height: true
//! card_max_height: 275
//! carousel_display_location: home
//! ```
//!
//! The document is deserialized into a loosely typed [`SettingsDocument`],
//! then compiled into validated [`ThemeSettings`]. Everything the compiler
//! ignores or replaces is recorded in a [`SettingsReport`].

use crate::models::{
    CarouselConfig, CategorySet, DefaultPolicy, DisplayLocation, StyleConfig, ThemeSettings,
    TieBreak, Variant, ViewportRule,
};
use crate::parser::report::{IssueKind, SettingsIssue, SettingsReport};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// Settings keys that drive one viewport.
struct ViewportKeys {
    list: &'static str,
    grid: &'static str,
    token: &'static str,
}

const DESKTOP_KEYS: ViewportKeys = ViewportKeys {
    list: "list_view_categories",
    grid: "grid_view_categories",
    token: "card_style_desktop",
};

const MOBILE_KEYS: ViewportKeys = ViewportKeys {
    list: "mobile_list_view_categories",
    grid: "mobile_grid_view_categories",
    token: "card_style_mobile",
};

/// A category list as it may appear in YAML.
///
/// Host settings store lists as delimited strings, but hand-written files
/// often use a bare id or a sequence.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CategoryList {
    /// `"5|7"`, `"5, 7"`, `"5;7"`
    Text(String),
    /// `5`
    Id(i64),
    /// `[5, "7"]`
    Items(Vec<CategoryListItem>),
}

/// One element of a YAML sequence category list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CategoryListItem {
    /// Numeric entry
    Id(i64),
    /// String entry, itself parsed as a delimited list
    Text(String),
}

impl CategoryList {
    /// Resolves the list into a set plus the entries that were rejected.
    pub fn to_set(&self) -> (CategorySet, Vec<String>) {
        let mut set = CategorySet::new();
        let mut rejected = Vec::new();

        match self {
            Self::Text(text) => return CategorySet::parse_list(text),
            Self::Id(id) => insert_numeric(*id, &mut set, &mut rejected),
            Self::Items(items) => {
                for item in items {
                    match item {
                        CategoryListItem::Id(id) => insert_numeric(*id, &mut set, &mut rejected),
                        CategoryListItem::Text(text) => {
                            let (parsed, bad) = CategorySet::parse_list(text);
                            parsed.iter().for_each(|id| {
                                set.insert(id);
                            });
                            rejected.extend(bad);
                        }
                    }
                }
            }
        }

        (set, rejected)
    }
}

/// Negative YAML integers are not category ids.
fn insert_numeric(id: i64, set: &mut CategorySet, rejected: &mut Vec<String>) {
    match u64::try_from(id) {
        Ok(id) => {
            set.insert(id.into());
        }
        Err(_) => rejected.push(id.to_string()),
    }
}

/// Raw settings document, before validation.
///
/// Every field is optional; defaults are applied during compilation so
/// the report can tell "absent" apart from "present but empty".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SettingsDocument {
    /// Desktop list-view categories
    pub list_view_categories: Option<CategoryList>,
    /// Desktop grid-view categories
    pub grid_view_categories: Option<CategoryList>,
    /// Mobile list-view categories
    pub mobile_list_view_categories: Option<CategoryList>,
    /// Mobile grid-view categories
    pub mobile_grid_view_categories: Option<CategoryList>,
    /// Global desktop style token
    pub card_style_desktop: Option<String>,
    /// Global mobile style token
    pub card_style_mobile: Option<String>,
    /// Tie-break: `list` or `grid`
    pub category_priority: Option<String>,
    /// Default policy: a style token, or `none`/`disabled`
    pub empty_category_fallback: Option<String>,
    /// Enable max-height on row cards
    pub set_card_max_height: bool,
    /// Max height in px
    pub card_max_height: Option<u32>,
    /// Enable max-width on tile cards
    pub set_grid_card_max_width: bool,
    /// Max width in px
    pub grid_card_max_width: Option<u32>,
    /// Enable fixed grid height on desktop
    pub set_card_grid_height: bool,
    /// Grid height in px
    pub card_grid_height: Option<u32>,
    /// Topic carousel location
    pub carousel_display_location: Option<String>,
    /// Topic carousel pagination dots
    pub carousel_show_dots: bool,
    /// Topic carousel item cap
    pub carousel_max_items: Option<u64>,
    /// Categories with a subcategory carousel
    pub subcategory_carousel_categories: Option<CategoryList>,
    /// Minimum subcategories for the subcategory carousel
    pub subcategory_carousel_min_children: Option<u64>,
    /// Keys this component does not read
    #[serde(flatten)]
    pub unknown: BTreeMap<String, serde_yml::Value>,
}

/// Parses a settings file into validated theme settings.
///
/// # Errors
///
/// Returns errors for:
/// - File not found or unreadable
/// - Invalid YAML or mistyped values
/// - Any error-level finding in the settings report
pub fn parse_settings_file(path: &Path) -> Result<ThemeSettings> {
    let content = read_settings_file(path)?;

    parse_settings_str(&content)
        .with_context(|| format!("Failed to load settings file: {}", path.display()))
}

/// Parses a settings document from a string.
///
/// Warnings are logged and otherwise tolerated.
pub fn parse_settings_str(content: &str) -> Result<ThemeSettings> {
    let document = parse_document(content)?;
    let (settings, report) = compile(&document);

    for issue in &report.warnings {
        warn!(key = %issue.key, kind = %issue.kind, "{}", issue.message);
    }

    match settings {
        Some(settings) => {
            debug!(
                desktop = %settings.style.rule(crate::models::Viewport::Desktop),
                mobile = %settings.style.rule(crate::models::Viewport::Mobile),
                "Loaded card style settings"
            );
            Ok(settings)
        }
        None => anyhow::bail!("Invalid settings\n{}", report.format_message()),
    }
}

/// Validates a settings document without failing on semantic errors.
///
/// Only YAML syntax and type errors are returned as `Err`; everything else
/// is reported.
pub fn check_settings_str(content: &str) -> Result<SettingsReport> {
    let document = parse_document(content)?;
    let (_, report) = compile(&document);
    Ok(report)
}

/// Reads a settings file with descriptive errors.
pub fn read_settings_file(path: &Path) -> Result<String> {
    if !path.exists() {
        anyhow::bail!("Settings file not found: {}", path.display());
    }

    if !path.is_file() {
        anyhow::bail!(
            "Path is not a file: {}\n\n\
             Please provide a path to a YAML settings file.",
            path.display()
        );
    }

    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file: {}", path.display()))
}

/// Deserializes the raw document. An empty document yields all defaults.
fn parse_document(content: &str) -> Result<SettingsDocument> {
    let value: serde_yml::Value =
        serde_yml::from_str(content).context("Failed to parse settings YAML")?;

    if value.is_null() {
        return Ok(SettingsDocument::default());
    }

    serde_yml::from_value(value).context("Settings document has an unexpected shape")
}

/// Compiles a raw document into validated settings.
///
/// Returns `None` for the settings when the report carries errors.
pub fn compile(document: &SettingsDocument) -> (Option<ThemeSettings>, SettingsReport) {
    let mut report = SettingsReport::new();

    let tie_break = compile_tie_break(document.category_priority.as_deref(), &mut report);
    let default_policy =
        compile_default_policy(document.empty_category_fallback.as_deref(), &mut report);

    let desktop = compile_viewport_rule(
        &DESKTOP_KEYS,
        document.list_view_categories.as_ref(),
        document.grid_view_categories.as_ref(),
        document.card_style_desktop.as_deref(),
        &mut report,
    );
    let mobile = compile_viewport_rule(
        &MOBILE_KEYS,
        document.mobile_list_view_categories.as_ref(),
        document.mobile_grid_view_categories.as_ref(),
        document.card_style_mobile.as_deref(),
        &mut report,
    );

    let mut builder = StyleConfig::builder(tie_break, default_policy)
        .desktop(desktop)
        .mobile(mobile);

    if let Some(px) = compile_constraint(
        "card_max_height",
        document.set_card_max_height,
        document.card_max_height,
        &mut report,
    ) {
        builder = builder.max_height(px);
    }
    if let Some(px) = compile_constraint(
        "grid_card_max_width",
        document.set_grid_card_max_width,
        document.grid_card_max_width,
        &mut report,
    ) {
        builder = builder.max_width(px);
    }
    if let Some(px) = compile_constraint(
        "card_grid_height",
        document.set_card_grid_height,
        document.card_grid_height,
        &mut report,
    ) {
        builder = builder.grid_height(px);
    }

    let carousel = compile_carousel(document, &mut report);

    for key in document.unknown.keys() {
        report.add_warning(SettingsIssue::new(
            IssueKind::UnknownKey,
            key.clone(),
            "Key is not used by the topic cards component",
        ));
    }

    // Zero pixel values are rejected by the builder.
    let style = match builder.build() {
        Ok(style) => Some(style),
        Err(e) => {
            report.add_error(SettingsIssue::new(
                IssueKind::MissingConstraintValue,
                "constraints",
                e.to_string(),
            ));
            None
        }
    };

    let settings = match style {
        Some(style) if report.is_valid() => Some(ThemeSettings { style, carousel }),
        _ => None,
    };

    (settings, report)
}

fn compile_tie_break(token: Option<&str>, report: &mut SettingsReport) -> TieBreak {
    let Some(token) = token else {
        return TieBreak::GridWins;
    };

    match token.trim().to_lowercase().as_str() {
        "list" => TieBreak::ListWins,
        "grid" => TieBreak::GridWins,
        other => {
            report.add_error(SettingsIssue::new(
                IssueKind::InvalidPolicy,
                "category_priority",
                format!("'{other}' is not a valid priority. Must be 'list' or 'grid'"),
            ));
            TieBreak::GridWins
        }
    }
}

fn compile_default_policy(token: Option<&str>, report: &mut SettingsReport) -> DefaultPolicy {
    let Some(token) = token else {
        return DefaultPolicy::Fallback(Variant::List);
    };

    match token.parse::<Variant>() {
        Ok(Variant::None) => DefaultPolicy::Disabled,
        Ok(variant) => DefaultPolicy::Fallback(variant),
        Err(e) => {
            report.add_error(SettingsIssue::new(
                IssueKind::InvalidPolicy,
                "empty_category_fallback",
                format!("{e}. Must be a card style or 'none'"),
            ));
            DefaultPolicy::Fallback(Variant::List)
        }
    }
}

/// Picks the rule for one viewport.
///
/// Membership lists with members win over a global token. When the list
/// keys are present but name no category, a valid token decides instead.
fn compile_viewport_rule(
    keys: &ViewportKeys,
    list: Option<&CategoryList>,
    grid: Option<&CategoryList>,
    token: Option<&str>,
    report: &mut SettingsReport,
) -> ViewportRule {
    let lists_present = list.is_some() || grid.is_some();
    let list = compile_category_list(keys.list, list, report);
    let grid = compile_category_list(keys.grid, grid, report);

    if !list.is_empty() || !grid.is_empty() {
        if let Some(token) = token {
            report.add_warning(SettingsIssue::new(
                IssueKind::IgnoredStyleToken,
                keys.token,
                format!(
                    "'{}' is ignored because {} / {} are configured",
                    token.trim(),
                    keys.list,
                    keys.grid
                ),
            ));
        }

        return ViewportRule::membership(list, grid);
    }

    if let Some(token) = token {
        match token.parse::<Variant>() {
            Ok(variant) => return ViewportRule::global(variant),
            Err(e) => report.add_warning(SettingsIssue::new(
                IssueKind::UnknownStyleToken,
                keys.token,
                format!("{e}; the default policy applies"),
            )),
        }
    }

    if lists_present {
        ViewportRule::membership(list, grid)
    } else {
        ViewportRule::Unset
    }
}

fn compile_category_list(
    key: &str,
    list: Option<&CategoryList>,
    report: &mut SettingsReport,
) -> CategorySet {
    let Some(list) = list else {
        return CategorySet::new();
    };

    let (set, rejected) = list.to_set();
    for entry in rejected {
        report.add_warning(SettingsIssue::new(
            IssueKind::InvalidCategoryEntry,
            key,
            format!("'{entry}' is not a category id and was ignored"),
        ));
    }

    set
}

fn compile_constraint(
    key: &str,
    enabled: bool,
    value: Option<u32>,
    report: &mut SettingsReport,
) -> Option<u32> {
    if !enabled {
        return None;
    }

    match value {
        Some(px) => Some(px),
        None => {
            report.add_error(SettingsIssue::new(
                IssueKind::MissingConstraintValue,
                key,
                "Constraint is enabled but no value is set",
            ));
            None
        }
    }
}

fn compile_count(key: &str, value: Option<u64>, default: usize, report: &mut SettingsReport) -> usize {
    match value {
        None => default,
        Some(0) => {
            report.add_error(SettingsIssue::new(
                IssueKind::InvalidCount,
                key,
                "Must be at least 1",
            ));
            default
        }
        Some(n) => usize::try_from(n).unwrap_or(usize::MAX),
    }
}

fn compile_carousel(document: &SettingsDocument, report: &mut SettingsReport) -> CarouselConfig {
    let defaults = CarouselConfig::default();

    let display_location = match document.carousel_display_location.as_deref() {
        None => defaults.display_location,
        Some(token) => token.parse::<DisplayLocation>().unwrap_or_else(|e| {
            report.add_warning(SettingsIssue::new(
                IssueKind::InvalidDisplayLocation,
                "carousel_display_location",
                format!("{e}; the carousel stays disabled"),
            ));
            DisplayLocation::Disabled
        }),
    };

    CarouselConfig {
        display_location,
        show_dots: document.carousel_show_dots,
        max_items: compile_count(
            "carousel_max_items",
            document.carousel_max_items,
            defaults.max_items,
            report,
        ),
        subcategory_categories: compile_category_list(
            "subcategory_carousel_categories",
            document.subcategory_carousel_categories.as_ref(),
            report,
        ),
        subcategory_min_children: compile_count(
            "subcategory_carousel_min_children",
            document.subcategory_carousel_min_children,
            defaults.subcategory_min_children,
            report,
        ),
    }
}
