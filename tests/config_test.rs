use std::fs;
use std::path::PathBuf;

use symptom_checker::application::ApplicationError;
use symptom_checker::config::Settings;
use symptom_checker::util::testing;
use tempfile::TempDir;

#[test]
fn given_no_config_file_when_loading_then_defaults() {
    testing::init_test_setup();
    let settings = Settings::load_from(None).unwrap();

    assert_eq!(settings.history_limit, Settings::default().history_limit);
    assert!(settings.history_file.ends_with("history.toml"));
}

#[test]
fn given_partial_config_file_when_loading_then_overrides_only_given_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("symcheck.toml");
    fs::write(&path, "history_limit = 3\nsave_history = false\n").unwrap();

    let settings = Settings::load_from(Some(&path)).unwrap();

    assert_eq!(settings.history_limit, 3);
    assert!(!settings.save_history);
    assert_eq!(settings.estimated_total, 6);
}

#[test]
fn given_absolute_history_path_when_loading_then_kept_verbatim() {
    let dir = TempDir::new().unwrap();
    let history = dir.path().join("h.toml");
    let path = dir.path().join("symcheck.toml");
    fs::write(&path, format!("history_file = {:?}\n", history.display().to_string())).unwrap();

    let settings = Settings::load_from(Some(&path)).unwrap();

    assert_eq!(settings.history_file, history);
}

#[test]
fn given_tilde_history_path_when_loading_then_expanded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("symcheck.toml");
    fs::write(&path, "history_file = \"~/symcheck/history.toml\"\n").unwrap();

    let settings = Settings::load_from(Some(&path)).unwrap();

    assert!(!settings.history_file.starts_with("~"));
    assert!(settings
        .history_file
        .ends_with(PathBuf::from("symcheck").join("history.toml")));
}

#[test]
fn given_malformed_config_file_when_loading_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("symcheck.toml");
    fs::write(&path, "history_limit = \"lots\"\n").unwrap();

    let result = Settings::load_from(Some(&path));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_missing_config_file_when_loading_explicitly_then_config_error() {
    let dir = TempDir::new().unwrap();

    let result = Settings::load_from(Some(&dir.path().join("absent.toml")));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}
