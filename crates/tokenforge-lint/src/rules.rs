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

//! Validation check rules.
//!
//! Each check is a pure function returning its own diagnostics; the
//! runner folds them. No check short-circuits another.

use crate::diagnostic::{Diagnostic, DiagnosticKind};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashSet};
use tokenforge_core::{find_reference_cycles, parse_reference, StructuralIssue};

/// One processed document: file name plus flat `path -> token` map.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedDocument {
    pub name: String,
    pub tokens: Map<String, Value>,
}

impl NamedDocument {
    pub fn new(name: impl Into<String>, tokens: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            tokens,
        }
    }

    /// Collection identity: the file name with mode suffix and extension
    /// stripped (`semantic-light.json` -> `semantic`).
    pub fn collection(&self) -> &str {
        let base = self.name.strip_suffix(".json").unwrap_or(&self.name);
        base.strip_suffix("-light")
            .or_else(|| base.strip_suffix("-dark"))
            .unwrap_or(base)
    }
}

/// The full set of processed documents validated in one pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationInput {
    pub documents: Vec<NamedDocument>,
}

impl ValidationInput {
    pub fn new(documents: Vec<NamedDocument>) -> Self {
        Self { documents }
    }
}

/// Critical text/background pairs checked for contrast by default.
pub const DEFAULT_CONTRAST_PAIRS: [(&str, &str); 2] = [
    ("button.primary.text", "button.primary.background"),
    ("text.primary", "background.primary"),
];

/// Every leaf must carry `type` and `value`; `description` is encouraged.
pub fn check_completeness(doc: &NamedDocument) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    for (path, entry) in &doc.tokens {
        let Some(obj) = entry.as_object() else {
            out.push(
                Diagnostic::error(
                    DiagnosticKind::MissingValue,
                    format!("{}: token entry is not an object", doc.name),
                    "completeness",
                )
                .with_path(path),
            );
            continue;
        };
        if !obj.contains_key("value") {
            out.push(
                Diagnostic::error(
                    DiagnosticKind::MissingValue,
                    format!("{}: token has no value", doc.name),
                    "completeness",
                )
                .with_path(path),
            );
        }
        if !obj.contains_key("type") {
            out.push(
                Diagnostic::warning(
                    DiagnosticKind::MissingType,
                    format!("{}: token has no type", doc.name),
                    "completeness",
                )
                .with_path(path),
            );
        }
        if !obj.contains_key("description") {
            out.push(
                Diagnostic::warning(
                    DiagnosticKind::MissingDescription,
                    format!("{}: token has no description", doc.name),
                    "completeness",
                )
                .with_path(path),
            );
        }
    }
    out
}

fn reference_of(entry: &Value) -> Option<&str> {
    entry
        .get("value")
        .and_then(Value::as_str)
        .and_then(parse_reference)
}

/// Every reference left in a processed document must point at a path that
/// exists in some collection.
pub fn check_references(input: &ValidationInput) -> Vec<Diagnostic> {
    let known: HashSet<&str> = input
        .documents
        .iter()
        .flat_map(|doc| doc.tokens.keys().map(String::as_str))
        .collect();

    let mut out = Vec::new();
    for doc in &input.documents {
        for (path, entry) in &doc.tokens {
            if let Some(target) = reference_of(entry) {
                if !known.contains(target) {
                    out.push(
                        Diagnostic::error(
                            DiagnosticKind::BrokenReference,
                            format!("{}: reference to missing token '{}'", doc.name, target),
                            "references",
                        )
                        .with_path(path),
                    );
                }
            }
        }
    }
    out
}

/// The reference graph of each document must be acyclic.
pub fn check_cycles(input: &ValidationInput) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    for doc in &input.documents {
        let edges: BTreeMap<String, String> = doc
            .tokens
            .iter()
            .filter_map(|(path, entry)| {
                Some((path.clone(), reference_of(entry)?.to_string()))
            })
            .collect();

        for cycle in find_reference_cycles(&edges) {
            let chain = cycle.join(" -> ");
            out.push(
                Diagnostic::error(
                    DiagnosticKind::CircularReference,
                    format!("{}: circular reference {} -> {}", doc.name, chain, cycle[0]),
                    "cycles",
                )
                .with_path(cycle[0].clone()),
            );
        }
    }
    out
}

fn color_value<'a>(doc: &'a NamedDocument, path: &str) -> Option<&'a str> {
    doc.tokens.get(path)?.get("value")?.as_str()
}

/// Critical text/background pairs must meet the minimum contrast ratio.
/// Pairs not present in a document are skipped; failures are errors,
/// passes are informational.
pub fn check_contrast(
    input: &ValidationInput,
    pairs: &[(String, String)],
    min_ratio: f64,
) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    for doc in &input.documents {
        for (fg_path, bg_path) in pairs {
            let (Some(fg), Some(bg)) = (color_value(doc, fg_path), color_value(doc, bg_path))
            else {
                continue;
            };
            match tokenforge_color::contrast_ratio(fg, bg, min_ratio) {
                Ok(contrast) if contrast.passes => {
                    out.push(Diagnostic::info(
                        DiagnosticKind::Contrast,
                        format!(
                            "{}: {} on {} is {:.2}:1 ({})",
                            doc.name, fg_path, bg_path, contrast.ratio, contrast.level
                        ),
                        "contrast",
                    ));
                }
                Ok(contrast) => {
                    out.push(
                        Diagnostic::error(
                            DiagnosticKind::Contrast,
                            format!(
                                "{}: {} on {} is {:.2}:1 ({}), below {}:1",
                                doc.name, fg_path, bg_path, contrast.ratio, contrast.level,
                                min_ratio
                            ),
                            "contrast",
                        )
                        .with_path(fg_path.clone()),
                    );
                }
                Err(err) => {
                    out.push(
                        Diagnostic::warning(
                            DiagnosticKind::Contrast,
                            format!(
                                "{}: could not evaluate {} on {}: {}",
                                doc.name, fg_path, bg_path, err
                            ),
                            "contrast",
                        )
                        .with_path(fg_path.clone()),
                    );
                }
            }
        }
    }
    out
}

/// Identical trailing path segments across different collections are
/// flagged as potential naming collisions. Heuristic; never an error.
pub fn check_naming_collisions(input: &ValidationInput) -> Vec<Diagnostic> {
    // trailing segment -> (collection, full path) occurrences
    let mut by_segment: BTreeMap<&str, Vec<(&str, &str)>> = BTreeMap::new();
    for doc in &input.documents {
        let collection = doc.collection();
        for path in doc.tokens.keys() {
            let segment = path.rsplit('.').next().unwrap_or(path);
            let entry = by_segment.entry(segment).or_default();
            if !entry.iter().any(|(c, p)| *c == collection && *p == path) {
                entry.push((collection, path));
            }
        }
    }

    let mut out = Vec::new();
    for (segment, occurrences) in by_segment {
        let collections: HashSet<&str> = occurrences.iter().map(|(c, _)| *c).collect();
        let distinct_paths: HashSet<&str> = occurrences.iter().map(|(_, p)| *p).collect();
        if collections.len() > 1 && distinct_paths.len() > 1 {
            let examples: Vec<&str> = occurrences.iter().take(2).map(|(_, p)| *p).collect();
            out.push(Diagnostic::warning(
                DiagnosticKind::NamingCollision,
                format!(
                    "trailing segment '{}' appears in multiple collections (e.g. {})",
                    segment,
                    examples.join(", ")
                ),
                "collisions",
            ));
        }
    }
    out
}

/// Convert flattener structural issues into diagnostics.
pub fn structural_diagnostics(issues: &[StructuralIssue]) -> Vec<Diagnostic> {
    issues
        .iter()
        .map(|issue| {
            let message = format!("node is missing '{}'", issue.missing_field);
            let diag = if issue.missing_field == "value" {
                Diagnostic::error(DiagnosticKind::MissingValue, message, "structure")
            } else {
                Diagnostic::warning(DiagnosticKind::MissingType, message, "structure")
            };
            diag.with_path(issue.path.clone())
        })
        .collect()
}
