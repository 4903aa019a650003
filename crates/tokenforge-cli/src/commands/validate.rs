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

//! Validate command - check existing processed documents

use super::render_report;
use crate::pipeline;
use std::path::Path;
use tokenforge_lint::ValidationConfig;

/// Validate the processed documents in `out_dir` without reprocessing.
///
/// # Errors
///
/// Returns `Err` if the directory holds no processed documents, a present
/// document cannot be parsed, or validation reports at least one error.
pub fn validate(out_dir: &str, format: &str) -> Result<(), String> {
    let input = pipeline::load_processed(Path::new(out_dir))?;
    if input.documents.is_empty() {
        return Err(format!(
            "No processed documents found in '{}'. Run `tokenforge build` first.",
            out_dir
        ));
    }

    let report = tokenforge_lint::validate(&input, &ValidationConfig::default());
    render_report(&report, format)?;

    if report.has_errors() {
        Err("Validation errors found".to_string())
    } else {
        Ok(())
    }
}
