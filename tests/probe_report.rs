// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Probe binary reporting.

mod common;

use common::probe_command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_human_report_names_the_selected_mode() {
    probe_command()
        .assert()
        .success()
        .stdout(predicate::str::contains("Vestibule Dispatch Report"))
        .stdout(predicate::str::contains("Mode: "))
        .stdout(predicate::str::contains("application-main"));
}

#[test]
fn test_json_report_reflects_runtime_only_environment() {
    let output = probe_command()
        .env("VESTIBULE_RUNTIME_ONLY", "yes")
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["selected_mode"], "embedded-runtime-only");
    assert_eq!(json["flags"]["runtime_only"], true);
    assert!(json["timestamp"].is_string());
}

#[test]
fn test_json_report_flags_the_ci_token_without_side_effects() {
    let output = probe_command()
        .args(["--json", "--", "host", "--CI"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["selected_mode"], "application-main");
    assert_eq!(json["ci_token_present"], true);
    assert_eq!(json["argv"], serde_json::json!(["host", "--CI"]));
}

#[test]
fn test_probe_is_a_dry_run() {
    // The token is reported, never propagated: a probe must not mutate the
    // environment its caller will dispatch in.
    let output = probe_command()
        .args(["--json", "--", "host", "--ci"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["flags"]["ci"], false);
}

#[test]
fn test_report_written_to_output_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("report.json");

    probe_command()
        .arg("--json")
        .arg("--output")
        .arg(&path)
        .assert()
        .success();

    let contents = fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert!(json["selected_mode"].is_string());
}

#[test]
fn test_verbose_human_report_lists_inputs() {
    probe_command()
        .args(["-v", "--", "host", "--flag"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Arguments (2):"))
        .stdout(predicate::str::contains("[1] --flag"));
}

#[test]
fn test_empty_flag_value_reported_as_unset() {
    let output = probe_command()
        .env("VESTIBULE_INTERNAL_CRASH_SERVICE", "")
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["flags"]["crash_service"], false);
    assert_eq!(json["selected_mode"], "application-main");
}
