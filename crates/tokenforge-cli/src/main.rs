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

//! Tokenforge Command Line Interface

use clap::Parser;
use std::process::ExitCode;
use tokenforge_cli::cli::Commands;

/// Tokenforge - design-token normalization and resolution pipeline
///
/// Reads design-tool token exports from a sync directory, normalizes them
/// into the canonical three-tier structure, resolves references, converts
/// colors to OKLCH, and writes the processed documents plus a re-export
/// for the design tool.
///
/// # Examples
///
/// ```bash
/// # One-shot pipeline run
/// tokenforge build --sync-dir sync --out-dir processed
///
/// # Validate existing processed documents
/// tokenforge validate --out-dir processed
///
/// # Watch the sync directory and reprocess on change
/// tokenforge watch --sync-dir sync --out-dir processed
/// ```
#[derive(Parser)]
#[command(name = "tokenforge")]
#[command(author, version, about = "Tokenforge - design-token pipeline toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
