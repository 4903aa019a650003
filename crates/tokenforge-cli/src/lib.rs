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

//! Tokenforge CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **build**: run the pipeline once (normalize, resolve, emit) and
//!   validate the output
//! - **validate**: validate an existing processed directory without
//!   reprocessing
//! - **watch**: watch the sync directory and rerun the pipeline on change
//!
//! # Error Handling
//!
//! All commands return `Result<(), String>`; the binary maps `Err` to a
//! non-zero exit code, which is the CI gate.
//!
//! # Security
//!
//! Reads are size-guarded (configurable via `TOKENFORGE_MAX_FILE_SIZE`)
//! so a pathological export cannot exhaust memory.

pub mod cli;
pub mod commands;
pub mod pipeline;
pub mod watch;
