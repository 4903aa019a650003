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

//! Tree flattening and lookup-table construction.
//!
//! A lookup table is a process-local, rebuildable projection: a flat
//! `dotted.path -> value` map built fresh from a collection each
//! resolution pass. It is never persisted and carries no identity beyond
//! the pass that created it.

use crate::document::{is_token, Group};
use crate::value::Token;
use serde_json::Value;
use std::collections::HashMap;

/// A token recorded at its full dotted path.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatToken {
    pub path: String,
    pub token: Token,
}

/// A node that looks like a token but is missing one of the two required
/// fields. The flattener records these for the validator instead of
/// silently skipping them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralIssue {
    /// Dotted path of the malformed node.
    pub path: String,
    /// Which required field is absent: `"type"` or `"value"`.
    pub missing_field: &'static str,
}

/// Result of flattening one group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlattenOutcome {
    /// Tokens in tree walk order.
    pub tokens: Vec<FlatToken>,
    /// Half-token nodes encountered during the walk.
    pub issues: Vec<StructuralIssue>,
}

/// Flat `path -> value` projection used during reference resolution.
pub type Lookup = HashMap<String, Value>;

fn type_name_of(node: &serde_json::Map<String, Value>) -> String {
    match node.get("type") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

fn walk(group: &Group, prefix: &str, out: &mut FlattenOutcome) {
    for (key, node) in group {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        let obj = match node {
            Value::Object(obj) => obj,
            // Scalars directly under a group carry no token structure.
            _ => continue,
        };

        if is_token(obj) {
            let token = Token {
                token_type: type_name_of(obj),
                value: obj.get("value").cloned().unwrap_or(Value::Null),
                description: obj
                    .get("description")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            };
            out.tokens.push(FlatToken { path, token });
        } else if obj.contains_key("type") {
            out.issues.push(StructuralIssue {
                path,
                missing_field: "value",
            });
        } else if obj.contains_key("value") {
            out.issues.push(StructuralIssue {
                path,
                missing_field: "type",
            });
        } else {
            walk(obj, &path, out);
        }
    }
}

/// Flatten a group into dotted-path tokens plus structural issues.
pub fn flatten(group: &Group) -> FlattenOutcome {
    let mut out = FlattenOutcome::default();
    walk(group, "", &mut out);
    out
}

/// Build a lookup table from one or more groups, in order. When the same
/// path occurs in several groups, the later group wins.
pub fn build_lookup<'a>(groups: impl IntoIterator<Item = &'a Group>) -> Lookup {
    let mut lookup = Lookup::new();
    for group in groups {
        for flat in flatten(group).tokens {
            lookup.insert(flat.path, flat.token.value);
        }
    }
    lookup
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn group(v: Value) -> Group {
        match v {
            Value::Object(m) => m,
            _ => panic!("expected object"),
        }
    }

    // ==================== flatten tests ====================

    #[test]
    fn test_flatten_nested_paths() {
        let g = group(json!({
            "color": {
                "blue": {
                    "500": {"type": "color", "value": "#3b82f6"}
                }
            },
            "spacing": {"type": "dimension", "value": "4px"}
        }));
        let out = flatten(&g);
        let paths: Vec<&str> = out.tokens.iter().map(|t| t.path.as_str()).collect();
        assert_eq!(paths, ["color.blue.500", "spacing"]);
        assert!(out.issues.is_empty());
    }

    #[test]
    fn test_flatten_reads_token_fields() {
        let g = group(json!({
            "a": {"type": "color", "value": "#fff", "description": "white"}
        }));
        let out = flatten(&g);
        assert_eq!(out.tokens[0].token.token_type, "color");
        assert_eq!(out.tokens[0].token.value, json!("#fff"));
        assert_eq!(out.tokens[0].token.description.as_deref(), Some("white"));
    }

    #[test]
    fn test_flatten_records_half_tokens() {
        let g = group(json!({
            "no_value": {"type": "color"},
            "no_type": {"value": "#fff"},
            "fine": {"type": "color", "value": "#000"}
        }));
        let out = flatten(&g);
        assert_eq!(out.tokens.len(), 1);
        assert_eq!(out.issues.len(), 2);
        assert_eq!(out.issues[0].path, "no_value");
        assert_eq!(out.issues[0].missing_field, "value");
        assert_eq!(out.issues[1].path, "no_type");
        assert_eq!(out.issues[1].missing_field, "type");
    }

    #[test]
    fn test_flatten_skips_genuine_containers() {
        let g = group(json!({"empty": {}, "nested": {"also_empty": {}}}));
        let out = flatten(&g);
        assert!(out.tokens.is_empty());
        assert!(out.issues.is_empty());
    }

    #[test]
    fn test_flatten_skips_scalar_leaves() {
        let g = group(json!({"version": "1.0", "a": {"type": "number", "value": 1}}));
        let out = flatten(&g);
        assert_eq!(out.tokens.len(), 1);
        assert_eq!(out.tokens[0].path, "a");
    }

    #[test]
    fn test_flatten_preserves_walk_order() {
        let g = group(json!({
            "z": {"type": "number", "value": 1},
            "a": {"m": {"type": "number", "value": 2}}
        }));
        let out = flatten(&g);
        let paths: Vec<&str> = out.tokens.iter().map(|t| t.path.as_str()).collect();
        assert_eq!(paths, ["z", "a.m"]);
    }

    // ==================== build_lookup tests ====================

    #[test]
    fn test_build_lookup_single_group() {
        let g = group(json!({
            "color": {"blue": {"type": "color", "value": "#00f"}}
        }));
        let lookup = build_lookup([&g]);
        assert_eq!(lookup.get("color.blue"), Some(&json!("#00f")));
    }

    #[test]
    fn test_build_lookup_later_group_wins() {
        let light = group(json!({"accent": {"type": "color", "value": "light"}}));
        let dark = group(json!({"accent": {"type": "color", "value": "dark"}}));
        let lookup = build_lookup([&light, &dark]);
        assert_eq!(lookup.get("accent"), Some(&json!("dark")));
    }

    #[test]
    fn test_lookup_is_rebuilt_not_shared() {
        let g = group(json!({"a": {"type": "number", "value": 1}}));
        let first = build_lookup([&g]);
        let second = build_lookup([&g]);
        assert_eq!(first, second);
    }
}
