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

//! Reference resolution.
//!
//! Rewrites `{dotted.path}` token values against a lookup table built from
//! already-resolved upstream collections. Chains inside the group being
//! resolved are followed transitively; cycles are detected with a DFS over
//! the reference graph (visited set plus recursion stack, O(V+E)) and
//! their members are left unresolved. Broken references keep their
//! placeholder and are recorded, never fatal.

use crate::document::{is_token, Group};
use crate::flatten::{flatten, Lookup};
use crate::value::parse_reference;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap, HashSet};

/// A reference whose target exists in neither the lookup nor the group
/// being resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokenReference {
    /// Path of the referencing token.
    pub path: String,
    /// The missing target path.
    pub target: String,
}

/// Result of one resolution pass over a group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolveOutcome {
    /// References with no target anywhere.
    pub broken: Vec<BrokenReference>,
    /// Detected cycles, each as the full chain of member paths.
    pub cycles: Vec<Vec<String>>,
}

impl ResolveOutcome {
    /// True when every reference substituted cleanly.
    pub fn is_clean(&self) -> bool {
        self.broken.is_empty() && self.cycles.is_empty()
    }
}

/// Find cycles in a reference graph given as `path -> target` edges.
///
/// Classic DFS with a visited set and a recursion stack; re-entering the
/// stack yields the cycle chain from the first occurrence of the target.
/// Edges pointing outside the node set are dead ends, not errors.
pub fn find_reference_cycles(edges: &BTreeMap<String, String>) -> Vec<Vec<String>> {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut cycles = Vec::new();

    for start in edges.keys() {
        if visited.contains(start.as_str()) {
            continue;
        }

        let mut stack: Vec<&str> = Vec::new();
        let mut on_stack: HashSet<&str> = HashSet::new();
        let mut current = start.as_str();

        loop {
            if on_stack.contains(current) {
                let pos = stack.iter().position(|p| *p == current).unwrap_or(0);
                cycles.push(stack[pos..].iter().map(|p| p.to_string()).collect());
                break;
            }
            if visited.contains(current) {
                break;
            }

            stack.push(current);
            on_stack.insert(current);

            match edges.get(current) {
                Some(target) if edges.contains_key(target) => current = target.as_str(),
                _ => break,
            }
        }

        for path in stack {
            visited.insert(path);
        }
    }

    cycles
}

/// Resolve all references in `group` against `lookup`.
///
/// The lookup holds literals from upstream collections; references between
/// tokens of `group` itself are chased transitively (cycle-guarded). Every
/// substitution writes the looked-up literal verbatim, so an unresolved
/// placeholder inherited from upstream stays a placeholder for the
/// validator to flag.
pub fn resolve_group(group: &mut Group, lookup: &Lookup) -> ResolveOutcome {
    let mut outcome = ResolveOutcome::default();

    // Raw local values, used both for the edge map and for chain chasing.
    let local: HashMap<String, Value> = flatten(group)
        .tokens
        .into_iter()
        .map(|flat| (flat.path, flat.token.value))
        .collect();

    let edges: BTreeMap<String, String> = local
        .iter()
        .filter_map(|(path, value)| {
            let target = value.as_str().and_then(parse_reference)?;
            Some((path.clone(), target.to_string()))
        })
        .collect();

    outcome.cycles = find_reference_cycles(&edges);
    let cycle_members: HashSet<&String> = outcome.cycles.iter().flatten().collect();

    // Compute each referencing token's literal, skipping cycle members.
    let mut resolved: HashMap<String, Value> = HashMap::new();
    for (path, target) in &edges {
        if cycle_members.contains(path) {
            continue;
        }

        let mut current = target.clone();
        let literal = loop {
            if let Some(local_value) = local.get(&current) {
                if cycle_members.contains(&current) {
                    // Chain ends in a cycle; nothing to substitute.
                    break None;
                }
                match local_value.as_str().and_then(parse_reference) {
                    Some(next) => current = next.to_string(),
                    None => break Some(local_value.clone()),
                }
            } else if let Some(upstream) = lookup.get(&current) {
                // One substitution: upstream values are taken verbatim.
                break Some(upstream.clone());
            } else {
                outcome.broken.push(BrokenReference {
                    path: path.clone(),
                    target: current.clone(),
                });
                break None;
            }
        };

        if let Some(literal) = literal {
            resolved.insert(path.clone(), literal);
        }
    }

    rewrite(group, "", &resolved);
    outcome
}

fn rewrite(group: &mut Group, prefix: &str, resolved: &HashMap<String, Value>) {
    for (key, node) in group.iter_mut() {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        if let Value::Object(obj) = node {
            if is_token(obj) {
                if let Some(literal) = resolved.get(&path) {
                    obj.insert("value".to_string(), literal.clone());
                }
            } else {
                rewrite(obj, &path, resolved);
            }
        }
    }
}
