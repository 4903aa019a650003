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

//! Shape normalization into the canonical tree.
//!
//! Every detected shape is reduced to the canonical structure
//! `{primitive, semantic{light,dark}, component{light,dark}}`. Hex color
//! literals become OKLCH at this stage so the canonical store is
//! perceptual-space-native. Normalization never fails: malformed pieces
//! degrade to warnings and the rest of the document still contributes.

use crate::detect::{detect_format, DetectedFormat};
use crate::document::{merge_groups, CanonicalTree, Collection, Group, Mode};
use crate::error::CoreError;
use crate::value::TokenType;
use serde_json::{json, Map, Value};
use tokenforge_color::hex_to_oklch;

/// Per-caller normalization policy.
///
/// The legacy `float -> dimension` rename is an explicit option rather
/// than an implicit rule: the CLI pipeline enables it to match the files
/// the design tool reads back, library callers opt in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Rename the `float` variable type to `dimension`.
    pub remap_float_to_dimension: bool,
}

impl NormalizeOptions {
    /// Policy used by the file pipeline.
    pub fn pipeline() -> Self {
        Self {
            remap_float_to_dimension: true,
        }
    }
}

/// The single place type renames happen.
fn remap_type(name: &str, opts: &NormalizeOptions) -> String {
    if opts.remap_float_to_dimension && name == "float" {
        "dimension".to_string()
    } else {
        name.to_string()
    }
}

/// Normalize one parsed export document into the canonical tree.
///
/// `source` names the input file for diagnostics only. Returns the
/// warnings accumulated while processing; the tree is mutated in place
/// with leaf-level last-writer-wins merging, so calling this repeatedly
/// for several source files implements the merge policy.
pub fn normalize_into(
    tree: &mut CanonicalTree,
    doc: &Value,
    source: &str,
    opts: &NormalizeOptions,
) -> Vec<String> {
    let mut warnings = Vec::new();

    match detect_format(doc) {
        DetectedFormat::W3cDtcg => {
            if let Some(list) = doc.as_array() {
                normalize_w3c_list(tree, list, source, opts, &mut warnings);
            }
        }
        DetectedFormat::W3cDtcgSingle => {
            let list = vec![doc.clone()];
            normalize_w3c_list(tree, &list, source, opts, &mut warnings);
        }
        DetectedFormat::LegacyAdapter => {
            if let Some(list) = doc.as_array() {
                normalize_legacy_list(tree, list, source, opts, &mut warnings);
            }
        }
        DetectedFormat::Unknown => {
            warnings.push(format!(
                "{}: {}",
                source,
                CoreError::shape("unrecognized document shape, flattening as primitive tokens")
            ));
            if let Some(obj) = doc.as_object() {
                let converted = convert_tree(obj, opts, &mut warnings);
                merge_groups(&mut tree.primitive, converted);
            } else {
                warnings.push(format!("{}: document is not an object, nothing to do", source));
            }
        }
    }

    warnings
}

/// Name/id pair for a mode declared in a collection wrapper.
#[derive(Debug, Clone, Default)]
struct ModeKeys {
    id: Option<String>,
    name: Option<String>,
}

impl ModeKeys {
    fn from_entry(entry: &Value) -> Self {
        Self {
            id: entry.get("id").and_then(Value::as_str).map(str::to_string),
            name: entry.get("name").and_then(Value::as_str).map(str::to_string),
        }
    }

    fn named(&self, name: &str) -> bool {
        self.name
            .as_deref()
            .is_some_and(|n| n.eq_ignore_ascii_case(name))
    }
}

/// Identify the light and dark modes from a `modes` list.
///
/// Names win; when absent, the first two modes are taken positionally. A
/// single-mode collection serves both.
fn identify_modes(modes: &[Value]) -> (ModeKeys, ModeKeys) {
    let keys: Vec<ModeKeys> = modes.iter().map(ModeKeys::from_entry).collect();

    let light = keys.iter().find(|k| k.named("light"));
    let dark = keys.iter().find(|k| k.named("dark"));

    let light = light.or(keys.first()).cloned().unwrap_or_default();
    let dark = dark
        .or(keys.get(1))
        .or(keys.first())
        .cloned()
        .unwrap_or_default();

    (light, dark)
}

/// Read a variable's value for a mode, trying display name then id.
fn mode_value<'a>(values_by_mode: &'a Map<String, Value>, keys: &ModeKeys) -> Option<&'a Value> {
    keys.name
        .as_deref()
        .and_then(|n| values_by_mode.get(n))
        .or_else(|| keys.id.as_deref().and_then(|id| values_by_mode.get(id)))
}

/// Build a canonical token object, converting hex colors to OKLCH.
fn make_token(
    type_name: &str,
    value: &Value,
    description: Option<&str>,
    opts: &NormalizeOptions,
    path: &str,
    warnings: &mut Vec<String>,
) -> Value {
    let token_type = remap_type(type_name, opts);
    let value = convert_color_value(&token_type, value, path, warnings);

    let mut obj = Map::new();
    obj.insert("type".to_string(), json!(token_type));
    obj.insert("value".to_string(), value);
    if let Some(desc) = description {
        obj.insert("description".to_string(), json!(desc));
    }
    Value::Object(obj)
}

fn convert_color_value(
    token_type: &str,
    value: &Value,
    path: &str,
    warnings: &mut Vec<String>,
) -> Value {
    if TokenType::from_name(token_type) != TokenType::Color {
        return value.clone();
    }
    let Some(s) = value.as_str() else {
        return value.clone();
    };
    if s.starts_with("oklch(") || !s.starts_with('#') {
        // Already perceptual, or a reference/keyword; leave untouched.
        return value.clone();
    }
    match hex_to_oklch(s) {
        Ok(oklch) => json!(oklch),
        Err(err) => {
            warnings.push(format!(
                "{}: {}",
                path,
                CoreError::conversion(format!("{}, passing value through", err))
            ));
            value.clone()
        }
    }
}

/// Insert a token at a dotted path, creating intermediate groups.
fn insert_at_path(group: &mut Group, path: &str, token: Value) {
    let mut segments = path.split('.').peekable();
    let mut current = group;

    while let Some(segment) = segments.next() {
        if segments.peek().is_none() {
            current.insert(segment.to_string(), token);
            return;
        }

        let entry = current
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        match entry {
            Value::Object(obj) => current = obj,
            _ => return,
        }
    }
}

fn normalize_w3c_list(
    tree: &mut CanonicalTree,
    list: &[Value],
    source: &str,
    opts: &NormalizeOptions,
    warnings: &mut Vec<String>,
) {
    for element in list {
        let Some(wrapper) = element.as_object() else {
            continue;
        };
        for (collection_name, body) in wrapper {
            let Some(collection) = Collection::from_name(collection_name) else {
                warnings.push(format!(
                    "{}: {}",
                    source,
                    CoreError::shape(format!("unknown collection '{}', skipped", collection_name))
                ));
                continue;
            };

            let modes = body
                .get("modes")
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default();
            let (light, dark) = identify_modes(&modes);

            let Some(variables) = body.get("variables").and_then(Value::as_object) else {
                continue;
            };

            for (var_name, var) in variables {
                let path = var_name.replace('/', ".");
                let Some(type_name) = var.get("type").and_then(Value::as_str) else {
                    warnings.push(format!(
                        "{}: {}",
                        source,
                        CoreError::shape(format!("variable '{}' has no type, skipped", path))
                    ));
                    continue;
                };
                let description = var.get("description").and_then(Value::as_str);
                let empty = Map::new();
                let values_by_mode = var
                    .get("valuesByMode")
                    .and_then(Value::as_object)
                    .unwrap_or(&empty);

                match collection {
                    Collection::Primitive => {
                        // Primitives carry a single implicit mode.
                        let value = mode_value(values_by_mode, &light)
                            .or_else(|| values_by_mode.values().next());
                        if let Some(value) = value {
                            let token =
                                make_token(type_name, value, description, opts, &path, warnings);
                            insert_at_path(&mut tree.primitive, &path, token);
                        } else {
                            warnings.push(format!(
                                "{}: variable '{}' has no value in any mode",
                                source, path
                            ));
                        }
                    }
                    Collection::Semantic | Collection::Component => {
                        let dest = match collection {
                            Collection::Semantic => &mut tree.semantic,
                            _ => &mut tree.component,
                        };
                        let mut defined = false;
                        for (mode, keys) in [(Mode::Light, &light), (Mode::Dark, &dark)] {
                            if let Some(value) = mode_value(values_by_mode, keys) {
                                defined = true;
                                let token = make_token(
                                    type_name,
                                    value,
                                    description,
                                    opts,
                                    &path,
                                    warnings,
                                );
                                insert_at_path(dest.get_mut(mode), &path, token);
                            }
                        }
                        if !defined {
                            warnings.push(format!(
                                "{}: variable '{}' has no value in any mode",
                                source, path
                            ));
                        }
                    }
                }
            }
        }
    }
}

fn normalize_legacy_list(
    tree: &mut CanonicalTree,
    list: &[Value],
    source: &str,
    opts: &NormalizeOptions,
    warnings: &mut Vec<String>,
) {
    for element in list {
        let Some(wrapper) = element.as_object() else {
            continue;
        };
        for (collection_name, body) in wrapper {
            let Some(collection) = Collection::from_name(collection_name) else {
                warnings.push(format!(
                    "{}: {}",
                    source,
                    CoreError::shape(format!("unknown collection '{}', skipped", collection_name))
                ));
                continue;
            };
            let Some(modes) = body.get("modes").and_then(Value::as_object) else {
                continue;
            };

            for (mode_name, subtree) in modes {
                let Some(subtree) = subtree.as_object() else {
                    continue;
                };
                let converted = convert_tree(subtree, opts, warnings);

                match collection {
                    Collection::Primitive => {
                        merge_groups(&mut tree.primitive, converted);
                    }
                    Collection::Semantic | Collection::Component => {
                        let dest = match collection {
                            Collection::Semantic => &mut tree.semantic,
                            _ => &mut tree.component,
                        };
                        let mode = if mode_name.eq_ignore_ascii_case("light") {
                            Mode::Light
                        } else if mode_name.eq_ignore_ascii_case("dark") {
                            Mode::Dark
                        } else {
                            warnings.push(format!(
                                "{}: unrecognized mode '{}' in '{}', skipped",
                                source, mode_name, collection_name
                            ));
                            continue;
                        };
                        merge_groups(dest.get_mut(mode), converted);
                    }
                }
            }
        }
    }
}

/// Recursively normalize a nested token tree: type remap plus hex -> OKLCH
/// on color tokens. Container nodes recurse, everything else is copied.
fn convert_tree(tree: &Map<String, Value>, opts: &NormalizeOptions, warnings: &mut Vec<String>) -> Group {
    convert_tree_inner(tree, opts, "", warnings)
}

fn convert_tree_inner(
    tree: &Map<String, Value>,
    opts: &NormalizeOptions,
    prefix: &str,
    warnings: &mut Vec<String>,
) -> Group {
    let mut out = Group::new();
    for (key, node) in tree {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        let converted = match node {
            Value::Object(obj) if crate::document::is_token(obj) => {
                let type_name = obj
                    .get("type")
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                let description = obj.get("description").and_then(Value::as_str);
                let value = obj.get("value").cloned().unwrap_or(Value::Null);
                make_token(type_name, &value, description, opts, &path, warnings)
            }
            Value::Object(obj) => Value::Object(convert_tree_inner(obj, opts, &path, warnings)),
            other => other.clone(),
        };
        out.insert(key.clone(), converted);
    }
    out
}
