// Integration tests for the unirec binary

use std::path::PathBuf;
use std::process::{Command, Output};

fn unirec(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_unirec"))
		.args(args)
		.env_remove("UNIREC_SEED")
		.output()
		.expect("Failed to run unirec")
}

fn fixture() -> String {
	PathBuf::from(env!("CARGO_MANIFEST_DIR"))
		.join("tests/fixtures/campus.json")
		.to_string_lossy()
		.to_string()
}

#[test]
fn test_version_display() {
	let output = unirec(&["--version"]);
	assert!(output.status.success(), "Version command failed");

	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("unirec"), "Expected 'unirec' in version output");
}

#[test]
fn test_help_display() {
	let output = unirec(&["--help"]);
	assert!(output.status.success(), "Help command failed");

	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(
		stdout.contains("run") && stdout.contains("rank") && stdout.contains("vocab"),
		"Expected subcommands in help output"
	);
}

#[test]
fn test_run_json_report() {
	let data = fixture();
	let output = unirec(&["run", "-d", &data, "--json", "--seed", "7"]);
	assert!(output.status.success(), "Run command failed");

	let report: serde_json::Value =
		serde_json::from_slice(&output.stdout).expect("Expected pure JSON on stdout");
	assert_eq!(report["params"]["seed"], 7);
	assert_eq!(report["users"].as_array().map(|u| u.len()), Some(4));
}

#[test]
fn test_run_summary() {
	let data = fixture();
	let output = unirec(&["run", "-d", &data, "-n", "2"]);
	assert!(output.status.success(), "Run command failed");

	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("Top picks"));
	assert!(stdout.contains("u4"));
}

#[test]
fn test_rank_json() {
	let data = fixture();
	let output = unirec(&["rank", "-d", &data, "-u", "u2", "-t", "jobs", "-n", "1", "--json"]);
	assert!(output.status.success(), "Rank command failed");

	let recs: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
	assert_eq!(recs[0]["asset_id"], "j2");
	assert_eq!(recs[0]["asset_type"], "job");
}

#[test]
fn test_rank_unknown_user_is_skipped() {
	let data = fixture();
	let output = unirec(&["rank", "-d", &data, "-u", "ghost"]);
	assert!(output.status.success(), "Unknown user should be skipped");

	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("Unknown user"));
}

#[test]
fn test_rank_json_unknown_user_is_empty() {
	let data = fixture();
	let output = unirec(&["rank", "-d", &data, "-u", "ghost", "--json"]);
	assert!(output.status.success(), "Unknown user should be skipped in JSON mode too");

	let recs: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
	assert_eq!(recs.as_array().map(|r| r.len()), Some(0));
}

#[test]
fn test_invalid_ratio_rejected() {
	let data = fixture();
	let output = unirec(&["run", "-d", &data, "--positive", "0.7", "--negative", "0.6"]);
	assert!(!output.status.success(), "Ratios summing above 1 must fail");
}

#[test]
fn test_missing_dataset_fails() {
	let output = unirec(&["vocab", "-d", "/definitely/not/here.json"]);
	assert!(!output.status.success());
}

#[test]
fn test_vocab_lists_terms() {
	let data = fixture();
	let output = unirec(&["vocab", "-d", &data, "-n", "5"]);
	assert!(output.status.success(), "Vocab command failed");

	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("terms from 12 documents"));
}
