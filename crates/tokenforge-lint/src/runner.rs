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

//! Validation runner and report.

use crate::diagnostic::{Diagnostic, Severity};
use crate::rules::{
    check_completeness, check_contrast, check_cycles, check_naming_collisions, check_references,
    ValidationInput, DEFAULT_CONTRAST_PAIRS,
};

/// Configuration for a validation run.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationConfig {
    /// Minimum contrast ratio for critical pairs.
    pub min_contrast: f64,
    /// Text/background path pairs checked for contrast.
    pub contrast_pairs: Vec<(String, String)>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_contrast: tokenforge_color::AA_MIN_RATIO,
            contrast_pairs: DEFAULT_CONTRAST_PAIRS
                .iter()
                .map(|(fg, bg)| (fg.to_string(), bg.to_string()))
                .collect(),
        }
    }
}

/// Aggregated result of running all checks over a [`ValidationInput`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Append diagnostics produced outside the rule set, e.g. structural
    /// issues surfaced by the flattener.
    pub fn extend(&mut self, diagnostics: Vec<Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity() == severity)
            .count()
    }

    /// The gate: true when any error-level diagnostic is present.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity() == Severity::Error)
    }

    /// Plain-text rendering, one diagnostic per line followed by a
    /// summary line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for diag in &self.diagnostics {
            out.push_str(&diag.to_string());
            out.push('\n');
        }
        out.push_str(&format!(
            "{} error(s), {} warning(s)\n",
            self.error_count(),
            self.warning_count()
        ));
        out
    }
}

/// Run every check over the input and collect the diagnostics.
pub fn validate(input: &ValidationInput, config: &ValidationConfig) -> ValidationReport {
    let mut diagnostics = Vec::new();
    for doc in &input.documents {
        diagnostics.extend(check_completeness(doc));
    }
    diagnostics.extend(check_references(input));
    diagnostics.extend(check_cycles(input));
    diagnostics.extend(check_contrast(
        input,
        &config.contrast_pairs,
        config.min_contrast,
    ));
    diagnostics.extend(check_naming_collisions(input));
    ValidationReport::new(diagnostics)
}
