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

//! Watch command - reprocess on sync-directory changes

use crate::watch::run_watch;
use std::path::Path;
use std::time::Duration;

/// Watch `sync_dir` and rerun the pipeline on change.
///
/// Runs until the process is stopped. An initial run happens immediately
/// so the output directory is current before the first change.
///
/// # Errors
///
/// Returns `Err` if the initial run fails on output I/O or the watcher
/// cannot be attached to `sync_dir`.
pub fn watch(sync_dir: &str, out_dir: &str, debounce_ms: u64) -> Result<(), String> {
    let sync_dir = Path::new(sync_dir);
    let out_dir = Path::new(out_dir);

    if !sync_dir.is_dir() {
        return Err(format!("Sync directory '{}' does not exist", sync_dir.display()));
    }

    let summary = crate::pipeline::run(sync_dir, out_dir)?;
    println!("initial run: {} document(s) written", summary.files_written.len());

    run_watch(sync_dir, out_dir, Duration::from_millis(debounce_ms))
}
