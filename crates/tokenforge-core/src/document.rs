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

//! Canonical token tree.
//!
//! The canonical structure is three fixed collections: `primitive` (single
//! implicit mode), `semantic` and `component` (both split light/dark).
//! Groups are `serde_json` maps so insertion order is preserved for output
//! stability (the workspace enables `preserve_order`).

use serde_json::{Map, Value};

/// A named mapping from key to token or nested group.
pub type Group = Map<String, Value>;

/// The three fixed token tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Primitive,
    Semantic,
    Component,
}

impl Collection {
    /// Match a collection wrapper name from an export document.
    ///
    /// Matching is case-insensitive and prefix-based so that both
    /// "component" and "components" route to the component tier.
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        if lower.starts_with("primitive") {
            Some(Self::Primitive)
        } else if lower.starts_with("semantic") {
            Some(Self::Semantic)
        } else if lower.starts_with("component") {
            Some(Self::Component)
        } else {
            None
        }
    }

    /// Canonical collection name used in re-export documents.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Primitive => "primitive",
            Self::Semantic => "semantic",
            Self::Component => "components",
        }
    }
}

/// A named variant axis for semantic and component tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    /// Display name as used in export documents.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// Lowercase name used in output file names.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Light/dark pair of groups for a moded collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModeSet {
    pub light: Group,
    pub dark: Group,
}

impl ModeSet {
    /// Borrow the group for a mode.
    pub fn get(&self, mode: Mode) -> &Group {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }

    /// Mutably borrow the group for a mode.
    pub fn get_mut(&mut self, mode: Mode) -> &mut Group {
        match mode {
            Mode::Light => &mut self.light,
            Mode::Dark => &mut self.dark,
        }
    }
}

/// The merged canonical structure every input shape normalizes into.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanonicalTree {
    pub primitive: Group,
    pub semantic: ModeSet,
    pub component: ModeSet,
}

impl CanonicalTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no source document contributed any tokens.
    pub fn is_empty(&self) -> bool {
        self.primitive.is_empty()
            && self.semantic.light.is_empty()
            && self.semantic.dark.is_empty()
            && self.component.light.is_empty()
            && self.component.dark.is_empty()
    }
}

/// A node is a token iff it carries both `type` and `value`; otherwise it
/// is a group and is recursed into.
pub fn is_token(node: &Map<String, Value>) -> bool {
    node.contains_key("type") && node.contains_key("value")
}

/// Merge `src` into `dest` recursively.
///
/// Groups merge key by key; leaves (tokens and non-object values) are
/// last-writer-wins. A group is never wholesale-replaced by a later file
/// unless the later value is itself a leaf.
pub fn merge_groups(dest: &mut Group, src: Group) {
    for (key, incoming) in src {
        match (dest.get_mut(&key), incoming) {
            (Some(Value::Object(existing)), Value::Object(incoming_obj))
                if !is_token(existing) && !is_token(&incoming_obj) =>
            {
                merge_groups(existing, incoming_obj);
            }
            (_, incoming) => {
                dest.insert(key, incoming);
            }
        }
    }
}
