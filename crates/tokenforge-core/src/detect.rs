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

//! Export-shape detection.
//!
//! Classification is a pure function into a closed enum; the normalizer
//! matches exhaustively on the result and performs no further runtime
//! shape inspection. Absence of structure is not an error, it is
//! [`DetectedFormat::Unknown`].

use serde_json::Value;

/// The known token-export shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectedFormat {
    /// List of collection wrappers with a `modes` *list* and `variables`.
    W3cDtcg,
    /// Single collection wrapper with both `modes` and `variables`;
    /// treated as a one-element [`DetectedFormat::W3cDtcg`] list.
    W3cDtcgSingle,
    /// List of collection wrappers whose `modes` is a *mapping* from mode
    /// name to a nested token tree.
    LegacyAdapter,
    /// Anything else; handled best-effort as a flat primitive tree.
    Unknown,
}

impl DetectedFormat {
    /// Tag string used in diagnostics.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::W3cDtcg => "w3c-dtcg",
            Self::W3cDtcgSingle => "w3c-dtcg-single",
            Self::LegacyAdapter => "legacy-adapter",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for DetectedFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// The single-key wrapper body of a list element, if it is one.
fn wrapper_body(element: &Value) -> Option<&Value> {
    let obj = element.as_object()?;
    if obj.len() != 1 {
        return None;
    }
    obj.values().next()
}

/// Classify a parsed export document. Ordered rules, first match wins;
/// never fails.
pub fn detect_format(doc: &Value) -> DetectedFormat {
    // Rules 1 and 2: non-empty list keyed by collection wrappers.
    if let Some(list) = doc.as_array() {
        if let Some(body) = list.first().and_then(wrapper_body) {
            match body.get("modes") {
                Some(Value::Array(_)) if body.get("variables").is_some() => {
                    return DetectedFormat::W3cDtcg;
                }
                Some(Value::Object(_)) => return DetectedFormat::LegacyAdapter,
                _ => {}
            }
        }
        return DetectedFormat::Unknown;
    }

    // Rule 3: single wrapper object carrying both modes and variables.
    if let Some(body) = wrapper_body(doc) {
        if body.get("modes").is_some() && body.get("variables").is_some() {
            return DetectedFormat::W3cDtcgSingle;
        }
    }

    DetectedFormat::Unknown
}
