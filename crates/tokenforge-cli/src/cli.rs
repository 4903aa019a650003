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

//! CLI command definitions and argument parsing.

use clap::Subcommand;

use crate::commands;

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Run the pipeline once: normalize, resolve, emit, validate
    Build {
        /// Directory holding the design-tool exports
        /// (primitive.json, semantic.json, components.json)
        #[arg(long, default_value = "sync")]
        sync_dir: String,

        /// Directory the processed documents are written to
        #[arg(long, default_value = "processed")]
        out_dir: String,

        /// Report format: "text" (colored) or "json"
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Validate existing processed documents without reprocessing
    Validate {
        /// Directory holding the processed documents
        #[arg(long, default_value = "processed")]
        out_dir: String,

        /// Report format: "text" (colored) or "json"
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Watch the sync directory and rerun the pipeline on change
    Watch {
        /// Directory holding the design-tool exports
        #[arg(long, default_value = "sync")]
        sync_dir: String,

        /// Directory the processed documents are written to
        #[arg(long, default_value = "processed")]
        out_dir: String,

        /// Debounce window in milliseconds
        #[arg(long, default_value_t = 500)]
        debounce_ms: u64,
    },
}

impl Commands {
    /// Execute the command with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `Err` if file I/O fails, the pipeline cannot run, or
    /// validation reports at least one error.
    pub fn execute(self) -> Result<(), String> {
        match self {
            Commands::Build {
                sync_dir,
                out_dir,
                format,
            } => commands::build(&sync_dir, &out_dir, &format),
            Commands::Validate { out_dir, format } => commands::validate(&out_dir, &format),
            Commands::Watch {
                sync_dir,
                out_dir,
                debounce_ms,
            } => commands::watch(&sync_dir, &out_dir, debounce_ms),
        }
    }
}
