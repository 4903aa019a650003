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

//! Core data model and transformations for the design-token pipeline.
//!
//! A pipeline run is a deterministic sequence of pure transformations:
//! detect the export shape ([`detect_format`]), normalize it into the
//! canonical three-tier tree ([`normalize_into`]), flatten collections
//! into lookup tables ([`build_lookup`]), resolve `{dotted.path}`
//! references ([`resolve_group`]), and construct the output documents
//! ([`emit`]). Colors are converted to OKLCH at normalization time so the
//! canonical store is perceptual-space-native.

pub mod detect;
pub mod document;
pub mod emit;
pub mod flatten;
pub mod normalize;
pub mod resolve;

mod error;
mod value;

use serde_json::Value;

/// Parse a raw export document into JSON.
///
/// # Errors
///
/// Returns a [`CoreError`] of kind `Parse` when the content is not valid
/// JSON. Pipeline callers degrade this to a warning and skip the file.
pub fn parse_export(content: &str) -> CoreResult<Value> {
    serde_json::from_str(content).map_err(|e| CoreError::parse(e.to_string()))
}

pub use detect::{detect_format, DetectedFormat};
pub use document::{
    is_token, merge_groups, CanonicalTree, Collection, Group, Mode, ModeSet,
};
pub use error::{CoreError, CoreErrorKind, CoreResult};
pub use flatten::{build_lookup, flatten, FlatToken, FlattenOutcome, Lookup, StructuralIssue};
pub use normalize::{normalize_into, NormalizeOptions};
pub use resolve::{find_reference_cycles, resolve_group, BrokenReference, ResolveOutcome};
pub use value::{make_reference, parse_reference, Token, TokenType};
