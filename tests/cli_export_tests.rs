//! End-to-end tests for `topic-cards export` command.

use std::fs;

mod fixtures;
use fixtures::*;

#[test]
fn test_export_to_stdout() {
    let (settings_path, temp_dir) = create_temp_settings_file(&per_category_yaml());

    let output = isolated_command(
        &[
            "export",
            "--settings",
            settings_path.to_str().unwrap(),
            "--category",
            &format!("{LIST_CATEGORY}|{UNCONFIGURED_CATEGORY}"),
        ],
        temp_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("# Topic Card Styles"));
    assert!(stdout.contains("| Category | Desktop | Mobile |"));
    assert!(stdout.contains(&format!("| {LIST_CATEGORY} | list | grid |")), "{stdout}");
    assert!(
        stdout.contains(&format!("| {UNCONFIGURED_CATEGORY} | none | grid |")),
        "{stdout}"
    );
}

#[test]
fn test_export_to_file() {
    let (settings_path, temp_dir) = create_temp_settings_file(&all_constraints_yaml());
    let output_path = temp_dir.path().join("styles.md");

    let output = isolated_command(
        &[
            "export",
            "--settings",
            settings_path.to_str().unwrap(),
            "--category",
            &GRID_CATEGORY.to_string(),
            "--output",
            output_path.to_str().unwrap(),
        ],
        temp_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    assert!(output_path.exists(), "Export file should be created");

    let content = fs::read_to_string(&output_path).unwrap();
    assert!(content.contains("- **has-grid-height:** 420px"));
    assert!(content.contains(&format!(
        "| {GRID_CATEGORY} | grid (has-max-width, has-grid-height) | grid (has-max-width) |"
    )));
}

#[test]
fn test_export_without_categories_has_no_table() {
    let (settings_path, temp_dir) = create_temp_settings_file(&per_category_yaml());

    let output = isolated_command(
        &["export", "--settings", settings_path.to_str().unwrap()],
        temp_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("## Rules"));
    assert!(!stdout.contains("| Category |"));
}

#[test]
fn test_export_invalid_settings() {
    let (settings_path, temp_dir) =
        create_temp_settings_file("set_card_grid_height: true\ncard_grid_height: 0\n");

    let output = isolated_command(
        &["export", "--settings", settings_path.to_str().unwrap()],
        temp_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("has-grid-height"), "{stderr}");
}
