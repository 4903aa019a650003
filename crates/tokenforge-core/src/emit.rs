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

//! Output document construction.
//!
//! Two surfaces: the flat processed documents consumed by downstream
//! build tooling, and the w3c-dtcg-like re-export handed back to the
//! design tool with light/dark merged into `valuesByMode` per token.

use crate::document::{CanonicalTree, Collection, Group, Mode};
use crate::flatten::{flatten, StructuralIssue};
use serde_json::{json, Map, Value};

/// File names of the processed documents, paired with the group each one
/// is built from.
pub const PROCESSED_FILES: [&str; 5] = [
    "primitive.json",
    "semantic-light.json",
    "semantic-dark.json",
    "component-light.json",
    "component-dark.json",
];

/// Name of the re-export document written back into the sync directory.
pub const REEXPORT_FILE: &str = "tokens-reexport.json";

/// Build one flat processed document: `path -> {type, value, description?}`
/// sorted by path for deterministic output. Structural issues surface for
/// the validator.
pub fn flat_document(group: &Group) -> (Map<String, Value>, Vec<StructuralIssue>) {
    let outcome = flatten(group);

    let mut entries: Vec<_> = outcome.tokens.into_iter().collect();
    entries.sort_by(|a, b| a.path.cmp(&b.path));

    let mut doc = Map::new();
    for flat in entries {
        if let Ok(value) = serde_json::to_value(&flat.token) {
            doc.insert(flat.path, value);
        }
    }
    (doc, outcome.issues)
}

/// The five processed documents for a canonical tree, in
/// [`PROCESSED_FILES`] order.
pub fn processed_documents(tree: &CanonicalTree) -> Vec<(Map<String, Value>, Vec<StructuralIssue>)> {
    vec![
        flat_document(&tree.primitive),
        flat_document(&tree.semantic.light),
        flat_document(&tree.semantic.dark),
        flat_document(&tree.component.light),
        flat_document(&tree.component.dark),
    ]
}

fn mode_entry(mode: Mode) -> Value {
    json!({"id": mode.slug(), "name": mode.name()})
}

/// Merge a moded collection into `path -> {type, valuesByMode, description?}`
/// variables. A path defined in only one mode fills the missing mode from
/// the defined one as an explicit last-resort default.
fn moded_variables(light: &Group, dark: &Group) -> Map<String, Value> {
    let light_tokens = flatten(light).tokens;
    let dark_tokens = flatten(dark).tokens;

    let mut variables = Map::new();

    let mut add = |path: &str, token: &crate::value::Token, mode: Mode| {
        let entry = variables.entry(path.to_string()).or_insert_with(|| {
            let mut obj = Map::new();
            obj.insert("type".to_string(), json!(token.token_type));
            obj.insert("valuesByMode".to_string(), Value::Object(Map::new()));
            if let Some(desc) = &token.description {
                obj.insert("description".to_string(), json!(desc));
            }
            Value::Object(obj)
        });
        if let Some(by_mode) = entry
            .get_mut("valuesByMode")
            .and_then(Value::as_object_mut)
        {
            by_mode.insert(mode.name().to_string(), token.value.clone());
        }
    };

    for flat in &light_tokens {
        add(&flat.path, &flat.token, Mode::Light);
    }
    for flat in &dark_tokens {
        add(&flat.path, &flat.token, Mode::Dark);
    }

    // Fill single-mode gaps.
    for value in variables.values_mut() {
        let Some(by_mode) = value.get_mut("valuesByMode").and_then(Value::as_object_mut) else {
            continue;
        };
        if let (Some(light_value), None) =
            (by_mode.get(Mode::Light.name()).cloned(), by_mode.get(Mode::Dark.name()))
        {
            by_mode.insert(Mode::Dark.name().to_string(), light_value);
        } else if let (None, Some(dark_value)) =
            (by_mode.get(Mode::Light.name()), by_mode.get(Mode::Dark.name()).cloned())
        {
            by_mode.insert(Mode::Light.name().to_string(), dark_value);
        }
    }

    variables
}

fn single_mode_variables(group: &Group) -> Map<String, Value> {
    let mut variables = Map::new();
    for flat in flatten(group).tokens {
        let mut obj = Map::new();
        obj.insert("type".to_string(), json!(flat.token.token_type));
        obj.insert(
            "valuesByMode".to_string(),
            json!({"Default": flat.token.value}),
        );
        if let Some(desc) = &flat.token.description {
            obj.insert("description".to_string(), json!(desc));
        }
        variables.insert(flat.path, Value::Object(obj));
    }
    variables
}

/// Build the re-export document: a list of collection wrappers in the
/// canonical w3c-dtcg shape. Round-trips through the format detector as
/// `w3c-dtcg`.
pub fn reexport_document(tree: &CanonicalTree) -> Value {
    let primitive = json!({
        Collection::Primitive.name(): {
            "modes": [{"id": "default", "name": "Default"}],
            "variables": single_mode_variables(&tree.primitive),
        }
    });
    let semantic = json!({
        Collection::Semantic.name(): {
            "modes": [mode_entry(Mode::Light), mode_entry(Mode::Dark)],
            "variables": moded_variables(&tree.semantic.light, &tree.semantic.dark),
        }
    });
    let component = json!({
        Collection::Component.name(): {
            "modes": [mode_entry(Mode::Light), mode_entry(Mode::Dark)],
            "variables": moded_variables(&tree.component.light, &tree.component.dark),
        }
    });

    Value::Array(vec![primitive, semantic, component])
}
