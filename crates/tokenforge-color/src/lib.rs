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

//! Color conversion for the token pipeline.
//!
//! The canonical store keeps colors in OKLCH (perceptually uniform); the
//! external hand-off and the contrast checks work in legacy hex. This crate
//! provides the two conversions, a structural validator for the textual
//! `oklch(L C H)` shape, and the WCAG contrast-ratio computation.
//!
//! Conversion failures are typed: `oklch_to_hex` returns a [`ColorError`]
//! rather than silently producing a placeholder, so callers can choose to
//! propagate. Pipeline callers that want the legacy behavior substitute
//! [`FALLBACK_HEX`] themselves and log a warning.

mod contrast;
mod error;
mod oklch;

pub use contrast::{contrast_ratio, Contrast, ContrastLevel, AA_MIN_RATIO};
pub use error::{ColorError, ColorResult};
pub use oklch::{hex_to_oklch, is_valid_oklch, oklch_to_hex, FALLBACK_HEX};
