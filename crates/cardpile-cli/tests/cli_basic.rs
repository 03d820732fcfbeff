//! Basic CLI E2E tests.
//!
//! Each test runs the built binary against its own data directory.

mod common;

use common::{assert_contains, json_lines, run_cli, run_cli_failure, run_cli_success};

#[test]
fn test_cards_add_and_list() {
    let home = tempfile::tempdir().unwrap();
    run_cli_success(home.path(), &["cards", "add", "  cześć ", "hello"]);
    run_cli_success(home.path(), &["cards", "add", "proszę", "please"]);

    let out = run_cli_success(home.path(), &["cards", "list", "--json"]);
    let cards: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0]["prompt"], "proszę");
    assert_eq!(cards[1]["prompt"], "cześć");
    assert!(cards[0]["id"].is_string());
}

#[test]
fn test_cards_add_blank_fails() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, _) = run_cli_failure(home.path(), &["cards", "add", "   ", "x"]);
    assert_contains(&stderr, "must not be empty");
}

#[test]
fn test_cards_remove_by_position_and_id() {
    let home = tempfile::tempdir().unwrap();
    run_cli_success(home.path(), &["cards", "add", "a", "1"]);
    run_cli_success(home.path(), &["cards", "add", "b", "2"]);
    run_cli_success(home.path(), &["cards", "add", "c", "3"]);

    run_cli_success(home.path(), &["cards", "remove", "0"]);
    let out = run_cli_success(home.path(), &["cards", "list", "--json"]);
    let cards: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();
    assert_eq!(cards.len(), 2);

    let id = cards[0]["id"].as_str().unwrap().to_string();
    run_cli_success(home.path(), &["cards", "remove", &id]);
    let out = run_cli_success(home.path(), &["cards", "list"]);
    assert!(!out.contains(&id));

    run_cli_failure(home.path(), &["cards", "remove", "not-an-id"]);
}

#[test]
fn test_config_get_set() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(home.path(), &["config", "get", "session.duration_secs"]);
    assert_eq!(out.trim(), "100");

    run_cli_success(home.path(), &["config", "set", "session.duration_secs", "30"]);
    let out = run_cli_success(home.path(), &["config", "get", "session.duration_secs"]);
    assert_eq!(out.trim(), "30");

    run_cli_failure(home.path(), &["config", "set", "session.nope", "1"]);
    let (_, stderr, code) = run_cli_failure(home.path(), &["config", "get", "nope"]);
    assert_eq!(code, 1);
    assert_contains(&stderr, "error: unknown config key: nope");
}

#[test]
fn test_config_set_echoes_and_list_is_settable() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(
        home.path(),
        &["config", "set", "gesture.removal_threshold", "80"],
    );
    assert_eq!(out.trim(), "gesture.removal_threshold = 80.0");

    let out = run_cli_success(home.path(), &["config", "list"]);
    assert_contains(&out, "gesture.removal_threshold = 80.0");
    assert_contains(&out, "session.duration_secs = 100");
    assert_contains(&out, "storage.cards_key = Cards");

    let out = run_cli_success(home.path(), &["config", "reset"]);
    assert_contains(&out, "gesture.removal_threshold = 100.0");
}

#[test]
fn test_config_rejects_non_positive_threshold() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, _) = run_cli_failure(
        home.path(),
        &["config", "set", "gesture.removal_threshold", "-5"],
    );
    assert_contains(&stderr, "gesture.removal_threshold");
    let out = run_cli_success(home.path(), &["config", "get", "gesture.removal_threshold"]);
    assert_eq!(out.trim(), "100.0");
}

#[test]
fn test_study_session_to_exhaustion() {
    let home = tempfile::tempdir().unwrap();
    run_cli_success(home.path(), &["cards", "add", "a", "1"]);
    run_cli_success(home.path(), &["cards", "add", "b", "2"]);

    let (stdout, _, code) = run_cli(
        home.path(),
        &["study", "--no-clock"],
        "tap\ndrag 40\nright\ndrag -130\nright\nquit\n",
    );
    assert_eq!(code, 0);

    let lines = json_lines(&stdout);
    let types: Vec<&str> = lines
        .iter()
        .filter_map(|v| v["type"].as_str())
        .collect();
    assert_eq!(
        types,
        [
            "session_reset",
            "answer_toggled",
            "card_removed",
            "card_removed",
            "timer_paused",
            "deck_exhausted",
        ]
    );
    let last = lines.last().unwrap();
    assert_eq!(last["phase"], "exhausted");
    assert_eq!(last["tally"]["correct"], 1);
    assert_eq!(last["tally"]["incorrect"], 1);
}

#[test]
fn test_study_expires() {
    let home = tempfile::tempdir().unwrap();
    run_cli_success(home.path(), &["cards", "add", "a", "1"]);

    let (stdout, _, code) = run_cli(
        home.path(),
        &["study", "--no-clock", "--duration", "3"],
        "bg\ntick 5\nfg\ntick 3\nright\n",
    );
    assert_eq!(code, 0);

    let lines = json_lines(&stdout);
    let last = lines.last().unwrap();
    assert_eq!(last["phase"], "expired");
    assert_eq!(last["remaining_secs"], 0);
    assert_eq!(last["card_count"], 1);
    assert!(lines.iter().any(|v| v["type"] == "timer_expired"));
}

#[test]
fn test_study_huge_tick_count_finishes() {
    let home = tempfile::tempdir().unwrap();
    run_cli_success(home.path(), &["cards", "add", "a", "1"]);

    let (stdout, _, code) = run_cli(
        home.path(),
        &["study", "--no-clock"],
        "tick 18446744073709551615\ndrag 500\nquit\n",
    );
    assert_eq!(code, 0);

    let lines = json_lines(&stdout);
    let last = lines.last().unwrap();
    assert_eq!(last["phase"], "expired");
    assert_eq!(last["card_count"], 1);
    assert_eq!(
        lines.iter().filter(|v| v["type"] == "timer_expired").count(),
        1
    );
}
