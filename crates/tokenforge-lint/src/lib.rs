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

//! Validation for processed design-token documents.
//!
//! Checks run over the flat processed documents, never over the raw
//! export: completeness of `type`/`value`/`description`, reference
//! integrity across collections, reference-graph acyclicity, WCAG
//! contrast of critical text/background pairs, and naming-collision
//! heuristics. Errors fail the gate; warnings and info never do.
//!
//! # Example
//!
//! ```
//! use tokenforge_lint::{validate, NamedDocument, ValidationConfig, ValidationInput};
//! use serde_json::json;
//!
//! let tokens = json!({
//!     "accent": {"type": "color", "value": "{color.blue.999}"}
//! });
//! let input = ValidationInput::new(vec![NamedDocument::new(
//!     "semantic-light.json",
//!     tokens.as_object().unwrap().clone(),
//! )]);
//! let report = validate(&input, &ValidationConfig::default());
//! assert!(report.has_errors());
//! ```

pub mod diagnostic;
pub mod rules;
pub mod runner;

pub use diagnostic::{Diagnostic, DiagnosticKind, Severity};
pub use rules::{structural_diagnostics, NamedDocument, ValidationInput, DEFAULT_CONTRAST_PAIRS};
pub use runner::{validate, ValidationConfig, ValidationReport};
