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

//! WCAG contrast-ratio computation.

use crate::error::ColorResult;
use crate::oklch::{self, oklch_to_hex};

/// Default minimum ratio (WCAG AA for normal text).
pub const AA_MIN_RATIO: f64 = 4.5;

/// Discrete WCAG conformance level for a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContrastLevel {
    /// Ratio >= 7.0.
    Aaa,
    /// Ratio >= 4.5.
    Aa,
    /// Ratio >= 3.0 (large text only).
    AaLarge,
    /// Ratio below 3.0.
    Fail,
}

impl ContrastLevel {
    /// Classify a raw ratio into its WCAG level.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 7.0 {
            Self::Aaa
        } else if ratio >= 4.5 {
            Self::Aa
        } else if ratio >= 3.0 {
            Self::AaLarge
        } else {
            Self::Fail
        }
    }
}

impl std::fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Aaa => write!(f, "AAA"),
            Self::Aa => write!(f, "AA"),
            Self::AaLarge => write!(f, "AA Large"),
            Self::Fail => write!(f, "FAIL"),
        }
    }
}

/// Result of a contrast check between two colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contrast {
    /// Luminance ratio, in `[1.0, 21.0]`.
    pub ratio: f64,
    /// Whether the ratio meets the caller-supplied minimum. Independent of
    /// the discrete `level` label.
    pub passes: bool,
    /// WCAG conformance level for the ratio.
    pub level: ContrastLevel,
}

/// WCAG relative luminance of an 8-bit sRGB color.
fn relative_luminance(rgb: [u8; 3]) -> f64 {
    let linearize = |channel: u8| {
        let c = channel as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * linearize(rgb[0]) + 0.7152 * linearize(rgb[1]) + 0.0722 * linearize(rgb[2])
}

/// Normalize a color literal (hex or `oklch(...)`) to 8-bit channels.
fn to_channels(value: &str) -> ColorResult<[u8; 3]> {
    if value.trim_start().starts_with("oklch(") {
        oklch::parse_hex(&oklch_to_hex(value)?)
    } else {
        oklch::parse_hex(value)
    }
}

/// Compute the WCAG contrast ratio between two color literals.
///
/// Both inputs may be hex or `oklch(L C H)` strings; OKLCH values are
/// converted to hex first. `min_ratio` drives `passes` only; the `level`
/// label is always classified against the fixed WCAG thresholds.
///
/// # Errors
///
/// Returns a [`crate::ColorError`] if either input fails to parse as a
/// color.
pub fn contrast_ratio(color_a: &str, color_b: &str, min_ratio: f64) -> ColorResult<Contrast> {
    let lum_a = relative_luminance(to_channels(color_a)?);
    let lum_b = relative_luminance(to_channels(color_b)?);

    let (lighter, darker) = if lum_a >= lum_b {
        (lum_a, lum_b)
    } else {
        (lum_b, lum_a)
    };
    let ratio = (lighter + 0.05) / (darker + 0.05);

    Ok(Contrast {
        ratio,
        passes: ratio >= min_ratio,
        level: ContrastLevel::from_ratio(ratio),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Level classification tests ====================

    #[test]
    fn test_level_boundary_aaa() {
        assert_eq!(ContrastLevel::from_ratio(7.0), ContrastLevel::Aaa);
        assert_eq!(ContrastLevel::from_ratio(6.999), ContrastLevel::Aa);
    }

    #[test]
    fn test_level_boundary_aa() {
        assert_eq!(ContrastLevel::from_ratio(4.5), ContrastLevel::Aa);
        assert_eq!(ContrastLevel::from_ratio(4.499), ContrastLevel::AaLarge);
    }

    #[test]
    fn test_level_boundary_aa_large() {
        assert_eq!(ContrastLevel::from_ratio(3.0), ContrastLevel::AaLarge);
        assert_eq!(ContrastLevel::from_ratio(2.999), ContrastLevel::Fail);
    }

    #[test]
    fn test_level_ratio_one_fails() {
        assert_eq!(ContrastLevel::from_ratio(1.0), ContrastLevel::Fail);
    }

    #[test]
    fn test_level_display() {
        assert_eq!(format!("{}", ContrastLevel::Aaa), "AAA");
        assert_eq!(format!("{}", ContrastLevel::Aa), "AA");
        assert_eq!(format!("{}", ContrastLevel::AaLarge), "AA Large");
        assert_eq!(format!("{}", ContrastLevel::Fail), "FAIL");
    }

    // ==================== contrast_ratio tests ====================

    #[test]
    fn test_black_on_white_is_max() {
        let c = contrast_ratio("#000000", "#ffffff", AA_MIN_RATIO).unwrap();
        assert!((c.ratio - 21.0).abs() < 0.01);
        assert!(c.passes);
        assert_eq!(c.level, ContrastLevel::Aaa);
    }

    #[test]
    fn test_identical_colors_ratio_one() {
        let c = contrast_ratio("#3b82f6", "#3b82f6", AA_MIN_RATIO).unwrap();
        assert!((c.ratio - 1.0).abs() < 1e-9);
        assert!(!c.passes);
        assert_eq!(c.level, ContrastLevel::Fail);
    }

    #[test]
    fn test_order_independent() {
        let a = contrast_ratio("#112233", "#eeeeee", AA_MIN_RATIO).unwrap();
        let b = contrast_ratio("#eeeeee", "#112233", AA_MIN_RATIO).unwrap();
        assert!((a.ratio - b.ratio).abs() < 1e-12);
    }

    #[test]
    fn test_passes_tracks_caller_threshold() {
        // White vs mid gray sits between 3.0 and 4.5.
        let c = contrast_ratio("#ffffff", "#8a8a8a", 3.0).unwrap();
        assert_eq!(c.level, ContrastLevel::AaLarge);
        assert!(c.passes);

        let strict = contrast_ratio("#ffffff", "#8a8a8a", AA_MIN_RATIO).unwrap();
        assert!(!strict.passes);
    }

    #[test]
    fn test_accepts_oklch_inputs() {
        let oklch_white = crate::oklch::hex_to_oklch("#ffffff").unwrap();
        let c = contrast_ratio(&oklch_white, "#000000", AA_MIN_RATIO).unwrap();
        assert!((c.ratio - 21.0).abs() < 0.1);
    }

    #[test]
    fn test_rejects_garbage_input() {
        assert!(contrast_ratio("banana", "#ffffff", AA_MIN_RATIO).is_err());
    }
}
