//! Shared test fixtures for settings and CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;
use topic_cards::models::ThemeSettings;
use topic_cards::parser::parse_settings_str;

/// Category configured in the list lane.
pub const LIST_CATEGORY: u64 = 11;
/// Category configured in the grid lane.
pub const GRID_CATEGORY: u64 = 22;
/// Category configured nowhere.
pub const UNCONFIGURED_CATEGORY: u64 = 33;

/// Desktop membership for one category plus a mobile style token.
///
/// `desktop_style` is "list" or "grid" and decides which list the category
/// goes into; the other list is left empty.
pub fn desktop_membership_yaml(category: u64, desktop_style: &str, mobile_style: &str) -> String {
    let list = if desktop_style == "list" {
        category.to_string()
    } else {
        String::new()
    };
    let grid = if desktop_style == "grid" {
        category.to_string()
    } else {
        String::new()
    };

    format!(
        "list_view_categories: \"{list}\"\n\
         grid_view_categories: \"{grid}\"\n\
         card_style_mobile: {mobile_style}\n"
    )
}

/// One list category, one grid category, grid on mobile.
pub fn per_category_yaml() -> String {
    format!(
        "list_view_categories: \"{LIST_CATEGORY}\"\n\
         grid_view_categories: \"{GRID_CATEGORY}\"\n\
         card_style_mobile: grid\n"
    )
}

/// Every size constraint enabled.
pub fn all_constraints_yaml() -> String {
    format!(
        "{}set_card_max_height: true\n\
         card_max_height: 275\n\
         set_grid_card_max_width: true\n\
         grid_card_max_width: 360\n\
         set_card_grid_height: true\n\
         card_grid_height: 420\n",
        per_category_yaml()
    )
}

/// Parses settings, panicking on invalid documents.
pub fn settings(yaml: &str) -> ThemeSettings {
    parse_settings_str(yaml).expect("fixture settings should be valid")
}

/// Writes a settings file into a fresh temp directory.
pub fn create_temp_settings_file(yaml: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("settings.yml");
    write_settings_file(yaml, &path).expect("Failed to write settings file");
    (path, temp_dir)
}

/// Writes a settings file to a path.
pub fn write_settings_file(yaml: &str, path: &Path) -> std::io::Result<()> {
    fs::write(path, yaml)
}

/// Path to the topic-cards binary
pub fn topic_cards_bin() -> &'static str {
    env!("CARGO_BIN_EXE_topic-cards")
}

/// Creates a Command with an isolated config directory.
///
/// `RUST_LOG` is cleared so log output never depends on the caller's shell.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(topic_cards_bin());
    cmd.env("TOPIC_CARDS_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}
