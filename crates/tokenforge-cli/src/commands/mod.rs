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

//! CLI command implementations

mod build;
mod validate;
mod watch;

pub use build::build;
pub use validate::validate;
pub use watch::watch;

use colored::Colorize;
use std::fs;
use std::path::Path;
use tokenforge_lint::{Severity, ValidationReport};

/// Default maximum file size to prevent OOM on pathological inputs (1 GB).
/// Can be overridden via the `TOKENFORGE_MAX_FILE_SIZE` environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

fn get_max_file_size() -> u64 {
    std::env::var("TOKENFORGE_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file from disk with size validation.
///
/// # Errors
///
/// Returns `Err` if the metadata cannot be read, the file exceeds the
/// configured maximum size, or the contents are not valid UTF-8.
pub fn read_file(path: &Path) -> Result<String, String> {
    let metadata = fs::metadata(path)
        .map_err(|e| format!("Failed to get metadata for '{}': {}", path.display(), e))?;

    let max_file_size = get_max_file_size();

    if metadata.len() > max_file_size {
        return Err(format!(
            "File '{}' is too large ({} bytes). Maximum allowed size is {} bytes.\n\
             To process larger files, set TOKENFORGE_MAX_FILE_SIZE environment variable (in bytes).",
            path.display(),
            metadata.len(),
            max_file_size
        ));
    }

    fs::read_to_string(path).map_err(|e| format!("Failed to read '{}': {}", path.display(), e))
}

/// Print a validation report as colored text or machine-readable JSON.
pub fn render_report(report: &ValidationReport, format: &str) -> Result<(), String> {
    match format {
        "json" => {
            let json = serde_json::json!({
                "diagnostics": report.diagnostics().iter().map(|d| {
                    serde_json::json!({
                        "severity": d.severity().to_string(),
                        "rule": d.rule_id(),
                        "message": d.message(),
                        "path": d.path()
                    })
                }).collect::<Vec<_>>(),
                "errors": report.error_count(),
                "warnings": report.warning_count()
            });
            let output = serde_json::to_string_pretty(&json)
                .map_err(|e| format!("JSON serialization error: {}", e))?;
            println!("{}", output);
        }
        _ => {
            if report.diagnostics().is_empty() {
                println!("{} no issues found", "✓".green().bold());
            } else {
                for diag in report.diagnostics() {
                    let severity_str = match diag.severity() {
                        Severity::Error => "error".red(),
                        Severity::Warning => "warning".yellow(),
                        Severity::Info => "info".blue(),
                    };
                    match diag.path() {
                        Some(path) => println!(
                            "  [{}] {}: {} ({})",
                            diag.rule_id(),
                            severity_str,
                            diag.message(),
                            path
                        ),
                        None => println!(
                            "  [{}] {}: {}",
                            diag.rule_id(),
                            severity_str,
                            diag.message()
                        ),
                    }
                }
                println!(
                    "{} error(s), {} warning(s)",
                    report.error_count(),
                    report.warning_count()
                );
            }
        }
    }
    Ok(())
}
