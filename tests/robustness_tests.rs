mod common;

use predicates::prelude::*;
use serde_json::json;

#[test]
fn test_unrecognized_input_keeps_transaction_open() {
    let output = common::vendo()
        .args(["--format", "json"])
        .write_stdin(common::script(&["$1", "", "  ", "coffee", "D", "50c", "cancel"]))
        .output()
        .unwrap();
    assert!(output.status.success());

    let values = common::json_lines(&output.stdout);
    assert_eq!(values[1], json!({"event": "invalid_input", "input": ""}));
    assert_eq!(values[3], json!({"event": "invalid_input", "input": "coffee"}));
    assert_eq!(
        values[5],
        json!({"event": "coin_accepted", "coin": "50c", "balance": 150})
    );
    assert_eq!(values[6], json!({"event": "change_returned", "amount": 150}));
}

#[test]
fn test_mixed_case_and_whitespace() {
    let output = common::vendo()
        .args(["--format", "json"])
        .write_stdin("$2\r\n 50C \nb\nTERMINATE\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let names = common::event_names(&common::json_lines(&output.stdout));
    assert_eq!(
        names,
        vec![
            "coin_accepted",
            "coin_accepted",
            "item_dispensed",
            "transaction_ended",
            "terminating",
            "transaction_ended",
        ]
    );
}

#[test]
fn test_invalid_utf8_line_is_retried() {
    let mut input = b"$1\n".to_vec();
    input.extend_from_slice(b"\xff\xfe\n");
    input.extend_from_slice(b"cancel\n");

    let output = common::vendo()
        .args(["--format", "json"])
        .write_stdin(input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let names = common::event_names(&common::json_lines(&output.stdout));
    assert_eq!(
        &names[..4],
        &["coin_accepted", "read_failed", "change_returned", "transaction_ended"]
    );
}

#[test]
fn test_consecutive_undecodable_lines_still_dispense() {
    let mut input = b"$2\n".to_vec();
    input.extend_from_slice(b"\xe9t\xe9\n\xe9\n\xff\n");
    input.extend_from_slice(b"A\n");

    let output = common::vendo()
        .args(["--format", "json"])
        .write_stdin(input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let values = common::json_lines(&output.stdout);
    assert_eq!(
        &common::event_names(&values)[..6],
        &[
            "coin_accepted",
            "read_failed",
            "read_failed",
            "read_failed",
            "item_dispensed",
            "transaction_ended",
        ]
    );
    assert_eq!(values[4], json!({"event": "item_dispensed", "item": "organic_raw"}));
}

#[test]
fn test_missing_script_file_fails() {
    common::vendo()
        .args(["--script", "does/not/exist.txt"])
        .assert()
        .failure();
}

#[test]
fn test_debug_logs_go_to_stderr() {
    common::vendo()
        .args(["--format", "json", "--log-level", "debug"])
        .write_stdin(common::script(&["10c", "terminate"]))
        .assert()
        .success()
        .stderr(predicate::str::contains("input classified"))
        .stdout(predicate::str::contains("input classified").not());
}
