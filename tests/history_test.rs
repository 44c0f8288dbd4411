use chrono::{TimeZone, Utc};
use symptom_checker::application::{
    ApplicationError, AssessmentHistory, AssessmentRecord, HistoryStore,
};
use symptom_checker::domain::{build_tree, parse_answers, Session};
use symptom_checker::util::testing;
use tempfile::TempDir;

fn assess(script: &str, second: u32) -> AssessmentRecord {
    let tree = build_tree();
    let mut session = Session::start(&tree);
    for answer in parse_answers(script).unwrap() {
        session.answer(answer);
    }
    AssessmentRecord::new(
        session.current_diagnosis().unwrap().clone(),
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, second).unwrap(),
    )
}

#[test]
fn given_missing_file_when_loading_then_empty_history() {
    testing::init_test_setup();
    let dir = TempDir::new().unwrap();
    let store = HistoryStore::new(dir.path().join("history.toml"));

    let history = store.load(10).unwrap();

    assert!(history.is_empty());
    assert_eq!(history.limit(), 10);
}

#[test]
fn given_saved_assessments_when_reloaded_then_newest_first_with_details() {
    let dir = TempDir::new().unwrap();
    let store = HistoryStore::new(dir.path().join("nested").join("history.toml"));

    store.append(assess("y", 1), 10).unwrap();
    store.append(assess("n,y,y", 2), 10).unwrap();

    let history = store.load(10).unwrap();
    let conditions: Vec<_> = history
        .iter_recent()
        .map(|r| r.diagnosis.condition.as_str())
        .collect();
    assert_eq!(
        conditions,
        vec![
            "POSSIBLE MENINGITIS OR SERIOUS INFECTION",
            "POTENTIAL MEDICAL EMERGENCY"
        ]
    );
    assert_eq!(history.latest(), Some(&assess("n,y,y", 2)));
}

#[test]
fn given_limit_when_appending_past_it_then_oldest_dropped_on_disk() {
    let dir = TempDir::new().unwrap();
    let store = HistoryStore::new(dir.path().join("history.toml"));

    for second in 0..5 {
        store.append(assess("y", second), 3).unwrap();
    }

    let history = store.load(10).unwrap();
    assert_eq!(history.len(), 3);
    let seconds: Vec<_> = history
        .iter_recent()
        .map(|r| r.date.format("%S").to_string())
        .collect();
    assert_eq!(seconds, vec!["04", "03", "02"]);
}

#[test]
fn given_larger_file_than_limit_when_loading_then_truncated_to_newest() {
    let dir = TempDir::new().unwrap();
    let store = HistoryStore::new(dir.path().join("history.toml"));
    let mut history = AssessmentHistory::new(10);
    for second in 0..6 {
        history.push(assess("y", second));
    }
    store.save(&history).unwrap();

    let loaded = store.load(2).unwrap();

    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded.latest(), Some(&assess("y", 5)));
}

#[test]
fn given_history_file_when_cleared_then_file_removed() {
    let dir = TempDir::new().unwrap();
    let store = HistoryStore::new(dir.path().join("history.toml"));
    store.append(assess("y", 0), 10).unwrap();

    store.clear().unwrap();
    store.clear().unwrap();

    assert!(!store.path().exists());
    assert!(store.load(10).unwrap().is_empty());
}

#[test]
fn given_corrupt_file_when_loading_then_history_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.toml");
    std::fs::write(&path, "assessments = 42").unwrap();

    let result = HistoryStore::new(&path).load(10);

    match result {
        Err(ApplicationError::History { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected history error, got {other:?}"),
    }
}
