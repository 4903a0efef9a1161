#![allow(dead_code)]

use assert_cmd::Command;
use assert_cmd::cargo_bin;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde_json::Value;

pub const COIN_LABELS: [&str; 5] = ["10c", "20c", "50c", "$1", "$2"];

/// The binary with a clean logging environment.
pub fn vendo() -> Command {
    let mut cmd = Command::new(cargo_bin!("vendo"));
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Joins input tokens into the text a user would type, one per line.
pub fn script(lines: &[&str]) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Parses JSON-lines output into values.
pub fn json_lines(stdout: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|line| serde_json::from_str(line).expect("stdout line is not JSON"))
        .collect()
}

/// Names of the `event` fields, in order.
pub fn event_names(values: &[Value]) -> Vec<String> {
    values
        .iter()
        .filter_map(|value| value["event"].as_str().map(str::to_string))
        .collect()
}

/// A reproducible random sequence of accepted coin labels.
pub fn random_coins(seed: u64, count: usize) -> Vec<&'static str> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .filter_map(|_| COIN_LABELS.choose(&mut rng).copied())
        .collect()
}

pub fn coin_cents(label: &str) -> u64 {
    match label {
        "10c" => 10,
        "20c" => 20,
        "50c" => 50,
        "$1" => 100,
        "$2" => 200,
        other => panic!("not a coin label: {other}"),
    }
}
