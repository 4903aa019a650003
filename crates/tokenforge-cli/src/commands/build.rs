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

//! Build command - run the pipeline once and validate the output

use super::render_report;
use crate::pipeline;
use colored::Colorize;
use std::path::Path;
use tokenforge_lint::{structural_diagnostics, ValidationConfig};

/// Run the pipeline once over `sync_dir`, write to `out_dir`, and
/// validate the result.
///
/// # Errors
///
/// Returns `Err` if the run itself fails (output I/O) or validation
/// reports at least one error. Missing or malformed source files degrade
/// to warnings.
pub fn build(sync_dir: &str, out_dir: &str, format: &str) -> Result<(), String> {
    let summary = pipeline::run(Path::new(sync_dir), Path::new(out_dir))?;

    for warning in &summary.warnings {
        eprintln!("{} {}", "warning:".yellow(), warning);
    }
    // Keep stdout pure JSON when a machine-readable report is requested.
    if format != "json" {
        println!(
            "{} {} document(s) written",
            "✓".green().bold(),
            summary.files_written.len()
        );
    }

    let input = pipeline::load_processed(Path::new(out_dir))?;
    let mut report = tokenforge_lint::validate(&input, &ValidationConfig::default());
    report.extend(structural_diagnostics(&summary.structural_issues));
    render_report(&report, format)?;

    if report.has_errors() {
        Err("Validation errors found".to_string())
    } else {
        Ok(())
    }
}
