// Tokenforge - Design Token Pipeline
//
// Copyright (c) 2026 Tokenforge contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! End-to-end CLI tests

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use tempfile::{tempdir, TempDir};

fn tokenforge_cmd() -> Command {
    Command::cargo_bin("tokenforge").expect("Failed to find tokenforge binary")
}

fn write_json(dir: &TempDir, name: &str, value: &Value) {
    fs::write(
        dir.path().join(name),
        serde_json::to_string_pretty(value).expect("serialize fixture"),
    )
    .expect("Failed to write fixture");
}

fn read_json(dir: &TempDir, name: &str) -> Value {
    let content = fs::read_to_string(dir.path().join(name)).expect("Failed to read output");
    serde_json::from_str(&content).expect("output is not valid JSON")
}

/// A well-formed sync directory: one primitive color and a semantic token
/// referencing it in both modes.
fn good_sync_dir() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");
    write_json(
        &dir,
        "primitive.json",
        &json!([{
            "primitive": {
                "modes": [{"id": "2:0", "name": "Default"}],
                "variables": {
                    "color/blue/500": {
                        "type": "color",
                        "valuesByMode": {"Default": "#3b82f6"},
                        "description": "Brand blue"
                    }
                }
            }
        }]),
    );
    write_json(
        &dir,
        "semantic.json",
        &json!([{
            "semantic": {
                "modes": [{"id": "1:0", "name": "Light"}, {"id": "1:1", "name": "Dark"}],
                "variables": {
                    "accent": {
                        "type": "color",
                        "valuesByMode": {
                            "Light": "{color.blue.500}",
                            "Dark": "{color.blue.500}"
                        },
                        "description": "Accent color"
                    }
                }
            }
        }]),
    );
    dir
}

// ==================== Build: happy path ====================

#[test]
fn test_build_succeeds_on_clean_input() {
    let sync = good_sync_dir();
    let out = tempdir().unwrap();

    tokenforge_cmd()
        .args(["build", "--sync-dir"])
        .arg(sync.path())
        .arg("--out-dir")
        .arg(out.path())
        .assert()
        .success();

    assert!(out.path().join("primitive.json").exists());
    assert!(out.path().join("semantic-light.json").exists());
    assert!(out.path().join("semantic-dark.json").exists());
    assert!(out.path().join("component-light.json").exists());
    assert!(out.path().join("component-dark.json").exists());
    assert!(sync.path().join("tokens-reexport.json").exists());
}

#[test]
fn test_build_resolves_reference_and_round_trips_color() {
    let sync = good_sync_dir();
    let out = tempdir().unwrap();

    tokenforge_cmd()
        .args(["build", "--sync-dir"])
        .arg(sync.path())
        .arg("--out-dir")
        .arg(out.path())
        .assert()
        .success();

    let light = read_json(&out, "semantic-light.json");
    let value = light["accent"]["value"].as_str().expect("accent value");
    assert!(value.starts_with("oklch("), "got {}", value);

    // The stored OKLCH converts back to the original color, within the
    // one-unit-per-channel rounding guarantee.
    let hex = tokenforge_color::oklch_to_hex(value).expect("conversion");
    let channels = |h: &str| -> Vec<i32> {
        (0..3)
            .map(|i| i32::from_str_radix(&h[1 + 2 * i..3 + 2 * i], 16).unwrap())
            .collect()
    };
    for (got, want) in channels(&hex).into_iter().zip(channels("#3b82f6")) {
        assert!((got - want).abs() <= 1, "{} vs #3b82f6", hex);
    }
}

#[test]
fn test_build_reexport_shape() {
    let sync = good_sync_dir();
    let out = tempdir().unwrap();

    tokenforge_cmd()
        .args(["build", "--sync-dir"])
        .arg(sync.path())
        .arg("--out-dir")
        .arg(out.path())
        .assert()
        .success();

    let reexport = read_json(&sync, "tokens-reexport.json");
    let list = reexport.as_array().expect("re-export is a list");
    assert_eq!(list.len(), 3);

    let semantic = &list[1]["semantic"];
    let by_mode = &semantic["variables"]["accent"]["valuesByMode"];
    assert!(by_mode.get("Light").is_some());
    assert!(by_mode.get("Dark").is_some());
}

// ==================== Build: broken reference ====================

#[test]
fn test_build_broken_reference_fails_and_leaves_placeholder() {
    let sync = good_sync_dir();
    write_json(
        &sync,
        "semantic.json",
        &json!([{
            "semantic": {
                "modes": [{"id": "1:0", "name": "Light"}, {"id": "1:1", "name": "Dark"}],
                "variables": {
                    "accent": {
                        "type": "color",
                        "valuesByMode": {"Light": "{color.blue.999}"},
                        "description": "Accent color"
                    }
                }
            }
        }]),
    );
    let out = tempdir().unwrap();

    tokenforge_cmd()
        .args(["build", "--sync-dir"])
        .arg(sync.path())
        .arg("--out-dir")
        .arg(out.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("color.blue.999"));

    let light = read_json(&out, "semantic-light.json");
    assert_eq!(light["accent"]["value"], json!("{color.blue.999}"));
}

#[test]
fn test_build_broken_reference_reports_exactly_one_error() {
    let sync = good_sync_dir();
    write_json(
        &sync,
        "semantic.json",
        &json!([{
            "semantic": {
                "modes": [{"id": "1:0", "name": "Light"}, {"id": "1:1", "name": "Dark"}],
                "variables": {
                    "accent": {
                        "type": "color",
                        "valuesByMode": {"Light": "{color.blue.999}"},
                        "description": "Accent color"
                    }
                }
            }
        }]),
    );
    let out = tempdir().unwrap();

    let output = tokenforge_cmd()
        .args(["build", "--format", "json", "--sync-dir"])
        .arg(sync.path())
        .arg("--out-dir")
        .arg(out.path())
        .assert()
        .failure()
        .get_output()
        .clone();

    let report: Value =
        serde_json::from_slice(&output.stdout).expect("report is not valid JSON");
    let reference_errors = report["diagnostics"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|d| d["rule"] == json!("references") && d["severity"] == json!("error"))
        .count();
    assert_eq!(reference_errors, 1);
}

// ==================== Build: degradation ====================

#[test]
fn test_build_malformed_source_degrades_to_warning() {
    let sync = good_sync_dir();
    fs::write(sync.path().join("components.json"), "{not json").unwrap();
    let out = tempdir().unwrap();

    tokenforge_cmd()
        .args(["build", "--sync-dir"])
        .arg(sync.path())
        .arg("--out-dir")
        .arg(out.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("malformed JSON"));
}

#[test]
fn test_build_unknown_shape_flattens_with_warning() {
    let sync = tempdir().unwrap();
    write_json(
        &sync,
        "primitive.json",
        &json!({"color": {"gray": {"type": "color", "value": "#6b7280", "description": "Gray"}}}),
    );
    let out = tempdir().unwrap();

    tokenforge_cmd()
        .args(["build", "--sync-dir"])
        .arg(sync.path())
        .arg("--out-dir")
        .arg(out.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("unrecognized document shape"));

    let primitive = read_json(&out, "primitive.json");
    assert!(primitive.get("color.gray").is_some());
}

// ==================== Validate ====================

#[test]
fn test_validate_clean_processed_dir() {
    let sync = good_sync_dir();
    let out = tempdir().unwrap();

    tokenforge_cmd()
        .args(["build", "--sync-dir"])
        .arg(sync.path())
        .arg("--out-dir")
        .arg(out.path())
        .assert()
        .success();

    tokenforge_cmd()
        .args(["validate", "--out-dir"])
        .arg(out.path())
        .assert()
        .success();
}

#[test]
fn test_validate_empty_dir_fails() {
    let out = tempdir().unwrap();
    tokenforge_cmd()
        .args(["validate", "--out-dir"])
        .arg(out.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No processed documents"));
}

#[test]
fn test_validate_flags_broken_reference_in_processed_file() {
    let out = tempdir().unwrap();
    fs::write(
        out.path().join("semantic-light.json"),
        serde_json::to_string_pretty(&json!({
            "accent": {"type": "color", "value": "{gone}", "description": "d"}
        }))
        .unwrap(),
    )
    .unwrap();

    tokenforge_cmd()
        .args(["validate", "--out-dir"])
        .arg(out.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("gone"));
}

// ==================== CLI surface ====================

#[test]
fn test_help_lists_subcommands() {
    tokenforge_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("watch"));
}

#[test]
fn test_unknown_subcommand_fails() {
    tokenforge_cmd().arg("frobnicate").assert().failure();
}
