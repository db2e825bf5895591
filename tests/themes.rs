mod common;

use common::CliHarness;

#[test]
fn test_themes_lists_every_built_in_theme() {
    let cli = CliHarness::new("themes");
    let out = cli.stdout(&["themes"]);

    assert_eq!(out.lines().count(), 8, "Eight built-in themes:\n{out}");
    assert!(out.contains("General"));
    assert!(out.contains("Tech & Startups"));
    assert!(out.lines().all(|line| line.ends_with("cards")));
}

#[test]
fn test_themes_shows_cards_of_one_theme() {
    let cli = CliHarness::new("themes-one");
    let out = cli.stdout(&["themes", "food & drink"]);
    assert!(out.lines().count() >= 3);
    assert!(out.lines().all(|line| line.contains(" <-> ")));
}

#[test]
fn test_unknown_theme_fails() {
    let cli = CliHarness::new("themes-unknown");
    let err = cli.stderr(&["themes", "Underwater Basket Weaving"]);
    assert!(err.starts_with("Error:"), "stderr was: {err}");
}

#[test]
fn test_log_file_written_to_data_dir() {
    let cli = CliHarness::new("themes-log");
    cli.stdout(&["themes"]);
    assert!(cli.data_dir().join("spectral-mind.log").exists());
}
