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

//! Debounced watch/reprocess loop.
//!
//! File events from the sync directory are debounced into a single run;
//! triggers arriving while a run is in flight are dropped, never queued.
//! A failing run is logged and the loop returns to idle, so one bad save
//! never wedges the watcher.

use crate::pipeline;
use colored::Colorize;
use notify::{Event, EventKind, RecursiveMode, Watcher};
use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;
use tokenforge_core::emit::REEXPORT_FILE;

/// Processing state of the watch loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    /// Waiting for file events.
    Idle,
    /// A pipeline run is in flight.
    Processing,
}

impl WatchState {
    /// Handle an incoming trigger. Returns `true` when a run should
    /// start; a trigger during `Processing` is dropped, not queued.
    pub fn on_trigger(&mut self) -> bool {
        match self {
            WatchState::Idle => {
                *self = WatchState::Processing;
                true
            }
            WatchState::Processing => false,
        }
    }

    /// Return to idle after a run, successful or not.
    pub fn finish(&mut self) {
        *self = WatchState::Idle;
    }
}

/// Whether a filesystem event should trigger a run. Only content changes
/// to `.json` files count, and the re-export the pipeline itself writes
/// is excluded to avoid self-triggering.
fn is_relevant(event: &Event) -> bool {
    if !matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    ) {
        return false;
    }
    event.paths.iter().any(|path| {
        path.extension().is_some_and(|ext| ext == "json")
            && path.file_name().is_some_and(|name| name != REEXPORT_FILE)
    })
}

/// Watch `sync_dir` and rerun the pipeline on change until the process is
/// stopped.
///
/// # Errors
///
/// Returns `Err` if the watcher cannot be created or attached; per-run
/// failures are logged and do not end the loop.
pub fn run_watch(sync_dir: &Path, out_dir: &Path, debounce: Duration) -> Result<(), String> {
    let (tx, rx) = mpsc::channel();

    let mut watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
        if let Ok(event) = res {
            if is_relevant(&event) {
                let _ = tx.send(());
            }
        }
    })
    .map_err(|e| format!("Failed to create watcher: {}", e))?;

    watcher
        .watch(sync_dir, RecursiveMode::NonRecursive)
        .map_err(|e| format!("Failed to watch '{}': {}", sync_dir.display(), e))?;

    println!(
        "Watching {} (debounce {} ms), Ctrl-C to stop",
        sync_dir.display(),
        debounce.as_millis()
    );

    let mut state = WatchState::Idle;
    loop {
        // Block until the first event of a burst, then let the burst
        // settle.
        if rx.recv().is_err() {
            return Ok(());
        }
        while rx.recv_timeout(debounce).is_ok() {}

        // Runs execute synchronously on this thread, so each trigger
        // finds the loop idle; triggers landing mid-run queue on the
        // channel instead and the post-run drain drops them.
        if state.on_trigger() {
            match pipeline::run(sync_dir, out_dir) {
                Ok(summary) => {
                    for warning in &summary.warnings {
                        eprintln!("{} {}", "warning:".yellow(), warning);
                    }
                    println!(
                        "{} reprocessed, {} document(s) written",
                        "✓".green().bold(),
                        summary.files_written.len()
                    );
                }
                Err(e) => eprintln!("{} run failed: {}", "✗".red().bold(), e),
            }

            drain_pending(&rx);
            state.finish();
        }
    }
}

/// Discard triggers that accumulated during a run (including the
/// pipeline's own writes that slipped past the name filter).
fn drain_pending(rx: &mpsc::Receiver<()>) {
    while rx.try_recv().is_ok() {}
}
