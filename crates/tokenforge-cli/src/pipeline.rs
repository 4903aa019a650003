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

//! One-shot pipeline orchestration.
//!
//! A run reads the exports from the sync directory, normalizes and merges
//! them into the canonical tree, resolves references tier by tier, and
//! writes the processed documents plus the re-export. Each source file is
//! optional; a malformed file degrades to a warning and the run continues
//! with the rest.

use crate::commands::read_file;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tokenforge_core::emit::{
    processed_documents, reexport_document, PROCESSED_FILES, REEXPORT_FILE,
};
use tokenforge_core::{
    build_lookup, make_reference, normalize_into, parse_export, resolve_group, CanonicalTree,
    CoreError, Lookup, NormalizeOptions, ResolveOutcome, StructuralIssue,
};
use tokenforge_lint::{NamedDocument, ValidationInput};

/// Export files read from the sync directory, all optional.
pub const SOURCE_FILES: [&str; 3] = ["primitive.json", "semantic.json", "components.json"];

/// Outcome of one pipeline run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Non-fatal problems: skipped files, unresolved references, cycles,
    /// color conversion fallbacks.
    pub warnings: Vec<String>,
    /// Half-tokens found while emitting, for the validator.
    pub structural_issues: Vec<StructuralIssue>,
    /// Documents written, processed files first, re-export last.
    pub files_written: Vec<PathBuf>,
}

fn record_outcome(warnings: &mut Vec<String>, stage: &str, outcome: &ResolveOutcome) {
    for broken in &outcome.broken {
        let err = CoreError::reference(format!(
            "{} -> {} has no target",
            broken.path,
            make_reference(&broken.target)
        ));
        warnings.push(format!("{}: {}", stage, err));
    }
    for cycle in &outcome.cycles {
        let err = CoreError::cycle(cycle.join(" -> "));
        warnings.push(format!("{}: {}", stage, err));
    }
}

/// Run the pipeline once: ingest, resolve, emit.
///
/// # Errors
///
/// Returns `Err` only for I/O failures on the output side; missing or
/// malformed source files are warnings.
pub fn run(sync_dir: &Path, out_dir: &Path) -> Result<RunSummary, String> {
    let mut summary = RunSummary::default();
    let mut tree = CanonicalTree::new();
    let options = NormalizeOptions::pipeline();

    for name in SOURCE_FILES {
        let path = sync_dir.join(name);
        if !path.exists() {
            summary.warnings.push(format!("{}: not found, skipped", name));
            continue;
        }
        let content = read_file(&path)?;
        match parse_export(&content) {
            Ok(doc) => {
                summary
                    .warnings
                    .extend(normalize_into(&mut tree, &doc, name, &options));
            }
            Err(e) => {
                summary
                    .warnings
                    .push(format!("{}: malformed JSON, skipped ({})", name, e));
            }
        }
    }

    // Resolution order: primitives, then each semantic mode against the
    // resolved primitives, then components against everything. Both
    // semantic modes enter the component lookup; dark wins on path ties.
    let upstream = Lookup::new();
    record_outcome(
        &mut summary.warnings,
        "primitive",
        &resolve_group(&mut tree.primitive, &upstream),
    );

    let upstream = build_lookup([&tree.primitive]);
    record_outcome(
        &mut summary.warnings,
        "semantic-light",
        &resolve_group(&mut tree.semantic.light, &upstream),
    );
    record_outcome(
        &mut summary.warnings,
        "semantic-dark",
        &resolve_group(&mut tree.semantic.dark, &upstream),
    );

    let upstream = build_lookup([&tree.primitive, &tree.semantic.light, &tree.semantic.dark]);
    record_outcome(
        &mut summary.warnings,
        "component-light",
        &resolve_group(&mut tree.component.light, &upstream),
    );
    record_outcome(
        &mut summary.warnings,
        "component-dark",
        &resolve_group(&mut tree.component.dark, &upstream),
    );

    fs::create_dir_all(out_dir)
        .map_err(|e| format!("Failed to create '{}': {}", out_dir.display(), e))?;

    for (name, (doc, issues)) in PROCESSED_FILES.iter().zip(processed_documents(&tree)) {
        summary.structural_issues.extend(issues);
        let path = out_dir.join(name);
        write_json(&path, &Value::Object(doc))?;
        summary.files_written.push(path);
    }

    let reexport_path = sync_dir.join(REEXPORT_FILE);
    write_json(&reexport_path, &reexport_document(&tree))?;
    summary.files_written.push(reexport_path);

    Ok(summary)
}

fn write_json(path: &Path, value: &Value) -> Result<(), String> {
    let mut content = serde_json::to_string_pretty(value)
        .map_err(|e| format!("JSON serialization error: {}", e))?;
    content.push('\n');
    fs::write(path, content).map_err(|e| format!("Failed to write '{}': {}", path.display(), e))
}

/// Load whichever processed documents exist in `out_dir` for validation.
///
/// # Errors
///
/// Returns `Err` when a present file cannot be read or is not a JSON
/// object; processed documents are machine-written, so corruption here is
/// not degradable.
pub fn load_processed(out_dir: &Path) -> Result<ValidationInput, String> {
    let mut documents = Vec::new();
    for name in PROCESSED_FILES {
        let path = out_dir.join(name);
        if !path.exists() {
            continue;
        }
        let content = read_file(&path)?;
        let value: Value = serde_json::from_str(&content)
            .map_err(|e| format!("'{}' is not valid JSON: {}", path.display(), e))?;
        match value {
            Value::Object(tokens) => documents.push(NamedDocument::new(name, tokens)),
            _ => {
                return Err(format!(
                    "'{}' is not a flat token document",
                    path.display()
                ))
            }
        }
    }
    Ok(ValidationInput::new(documents))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn write_source(dir: &Path, name: &str, value: &Value) {
        fs::write(dir.join(name), serde_json::to_string_pretty(value).unwrap()).unwrap();
    }

    fn sample_sync_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        write_source(
            dir.path(),
            "primitive.json",
            &json!([{
                "primitive": {
                    "modes": [{"id": "m1", "name": "Default"}],
                    "variables": {
                        "color.blue.500": {
                            "type": "color",
                            "valuesByMode": {"Default": "#3b82f6"}
                        }
                    }
                }
            }]),
        );
        write_source(
            dir.path(),
            "semantic.json",
            &json!([{
                "semantic": {
                    "modes": [{"id": "m1", "name": "Light"}, {"id": "m2", "name": "Dark"}],
                    "variables": {
                        "accent": {
                            "type": "color",
                            "valuesByMode": {"Light": "{color.blue.500}", "Dark": "{color.blue.500}"}
                        }
                    }
                }
            }]),
        );
        dir
    }

    // ==================== run tests ====================

    #[test]
    fn test_run_writes_all_documents() {
        let sync = sample_sync_dir();
        let out = TempDir::new().unwrap();
        let summary = run(sync.path(), out.path()).unwrap();
        for name in PROCESSED_FILES {
            assert!(out.path().join(name).exists(), "missing {}", name);
        }
        assert!(sync.path().join(REEXPORT_FILE).exists());
        assert_eq!(summary.files_written.len(), PROCESSED_FILES.len() + 1);
    }

    #[test]
    fn test_run_resolves_semantic_reference() {
        let sync = sample_sync_dir();
        let out = TempDir::new().unwrap();
        run(sync.path(), out.path()).unwrap();

        let light: Value = serde_json::from_str(
            &fs::read_to_string(out.path().join("semantic-light.json")).unwrap(),
        )
        .unwrap();
        let value = light["accent"]["value"].as_str().unwrap();
        assert!(value.starts_with("oklch("), "got {}", value);
    }

    #[test]
    fn test_run_missing_file_is_warning() {
        let sync = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let summary = run(sync.path(), out.path()).unwrap();
        assert!(summary
            .warnings
            .iter()
            .any(|w| w.contains("components.json") && w.contains("skipped")));
    }

    #[test]
    fn test_run_malformed_json_degrades() {
        let sync = sample_sync_dir();
        fs::write(sync.path().join("components.json"), "{not json").unwrap();
        let out = TempDir::new().unwrap();
        let summary = run(sync.path(), out.path()).unwrap();
        assert!(summary
            .warnings
            .iter()
            .any(|w| w.contains("components.json") && w.contains("malformed JSON")));
        // The other files still processed.
        assert!(out.path().join("primitive.json").exists());
    }

    #[test]
    fn test_run_records_broken_reference() {
        let sync = sample_sync_dir();
        write_source(
            sync.path(),
            "semantic.json",
            &json!([{
                "semantic": {
                    "modes": [{"id": "m1", "name": "Light"}, {"id": "m2", "name": "Dark"}],
                    "variables": {
                        "accent": {
                            "type": "color",
                            "valuesByMode": {"Light": "{color.blue.999}", "Dark": "{color.blue.999}"}
                        }
                    }
                }
            }]),
        );
        let out = TempDir::new().unwrap();
        let summary = run(sync.path(), out.path()).unwrap();
        assert!(summary
            .warnings
            .iter()
            .any(|w| w.contains("{color.blue.999}") && w.contains("has no target")));

        let light: Value = serde_json::from_str(
            &fs::read_to_string(out.path().join("semantic-light.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(light["accent"]["value"], json!("{color.blue.999}"));
    }

    // ==================== load_processed tests ====================

    #[test]
    fn test_load_processed_roundtrip() {
        let sync = sample_sync_dir();
        let out = TempDir::new().unwrap();
        run(sync.path(), out.path()).unwrap();
        let input = load_processed(out.path()).unwrap();
        assert_eq!(input.documents.len(), PROCESSED_FILES.len());
        assert!(input
            .documents
            .iter()
            .any(|d| d.name == "primitive.json" && d.tokens.contains_key("color.blue.500")));
    }

    #[test]
    fn test_load_processed_rejects_non_object() {
        let out = TempDir::new().unwrap();
        fs::write(out.path().join("primitive.json"), "[1, 2]").unwrap();
        assert!(load_processed(out.path()).is_err());
    }

    #[test]
    fn test_load_processed_skips_missing_files() {
        let out = TempDir::new().unwrap();
        let input = load_processed(out.path()).unwrap();
        assert!(input.documents.is_empty());
    }
}
