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

//! Hex/OKLCH conversion.
//!
//! Uses the Ottosson OKLab matrices directly; the pack carries no color
//! crate and the math is small enough to keep in-tree. Textual format is
//! `oklch(L C H)` with L and C rounded to 3 decimals and H to 2.

use crate::error::{ColorError, ColorResult};

/// Neutral-gray sentinel substituted by pipeline callers when an OKLCH
/// value fails to convert back to hex. Callers must treat this as
/// "conversion failed", not as a real color.
pub const FALLBACK_HEX: &str = "#6b7280";

/// Parse a `#rgb` or `#rrggbb` hex string into 8-bit channels.
pub(crate) fn parse_hex(hex: &str) -> ColorResult<[u8; 3]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    // Length checks below count bytes; multi-byte input must bail before
    // the fixed-offset slicing.
    if !digits.is_ascii() {
        return Err(ColorError::InvalidHex(hex.to_string()));
    }
    let expanded: String = match digits.len() {
        // 3-digit shorthand: each nibble doubles
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return Err(ColorError::InvalidHex(hex.to_string())),
    };

    let parse_channel = |s: &str| {
        u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidHex(hex.to_string()))
    };

    Ok([
        parse_channel(&expanded[0..2])?,
        parse_channel(&expanded[2..4])?,
        parse_channel(&expanded[4..6])?,
    ])
}

fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// Linear sRGB -> OKLab (Ottosson 2020 matrices).
fn linear_srgb_to_oklab(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let l = 0.412_221_470_8 * r + 0.536_332_536_3 * g + 0.051_445_992_9 * b;
    let m = 0.211_903_498_2 * r + 0.680_699_545_1 * g + 0.107_396_956_6 * b;
    let s = 0.088_302_461_9 * r + 0.281_718_837_6 * g + 0.629_978_700_5 * b;

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    (
        0.210_454_255_3 * l_ + 0.793_617_785_0 * m_ - 0.004_072_046_8 * s_,
        1.977_998_495_1 * l_ - 2.428_592_205_0 * m_ + 0.450_593_709_9 * s_,
        0.025_904_037_1 * l_ + 0.782_771_766_2 * m_ - 0.808_675_766_0 * s_,
    )
}

/// OKLab -> linear sRGB (inverse matrices).
fn oklab_to_linear_srgb(l: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let l_ = l + 0.396_337_777_4 * a + 0.215_803_757_3 * b;
    let m_ = l - 0.105_561_345_8 * a - 0.063_854_172_8 * b;
    let s_ = l - 0.089_484_177_5 * a - 1.291_485_548_0 * b;

    let l3 = l_ * l_ * l_;
    let m3 = m_ * m_ * m_;
    let s3 = s_ * s_ * s_;

    (
        4.076_741_662_1 * l3 - 3.307_711_591_3 * m3 + 0.230_969_929_2 * s3,
        -1.268_438_004_6 * l3 + 2.609_757_401_1 * m3 - 0.341_319_396_5 * s3,
        -0.004_196_086_3 * l3 - 0.703_418_614_7 * m3 + 1.707_614_701_0 * s3,
    )
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Convert a hex color literal to its `oklch(L C H)` textual form.
///
/// Accepts `#rrggbb` and the `#rgb` shorthand. L and C are rounded to
/// 3 decimals, H to 2; hue is normalized into `[0, 360)`.
///
/// # Errors
///
/// Returns [`ColorError::InvalidHex`] if the input is not a hex color.
/// Pipeline callers treat that as "pass the value through unchanged".
pub fn hex_to_oklch(hex: &str) -> ColorResult<String> {
    let [r, g, b] = parse_hex(hex)?;

    let (l, a, bb) = linear_srgb_to_oklab(
        srgb_to_linear(r as f64 / 255.0),
        srgb_to_linear(g as f64 / 255.0),
        srgb_to_linear(b as f64 / 255.0),
    );

    let c = (a * a + bb * bb).sqrt();
    let mut h = bb.atan2(a).to_degrees();
    if h < 0.0 {
        h += 360.0;
    }

    Ok(format!(
        "oklch({} {} {})",
        round_to(l, 3),
        round_to(c, 3),
        round_to(h, 2)
    ))
}

fn parse_oklch(value: &str) -> ColorResult<(f64, f64, f64)> {
    let inner = value
        .trim()
        .strip_prefix("oklch(")
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| ColorError::InvalidOklch(value.to_string()))?;

    let parts: Vec<&str> = inner.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(ColorError::InvalidOklch(value.to_string()));
    }

    let mut nums = [0.0_f64; 3];
    for (slot, part) in nums.iter_mut().zip(&parts) {
        *slot = part
            .parse::<f64>()
            .map_err(|_| ColorError::InvalidOklch(value.to_string()))?;
    }

    Ok((nums[0], nums[1], nums[2]))
}

/// Structural check for the `oklch(L C H)` textual shape.
///
/// Validates the prefix and that exactly three numeric components sit
/// inside the parentheses. Does not validate value ranges.
pub fn is_valid_oklch(value: &str) -> bool {
    parse_oklch(value).is_ok()
}

/// Convert an `oklch(L C H)` textual value back to a `#rrggbb` hex string.
///
/// Out-of-gamut channels are clamped to the sRGB cube before quantizing.
///
/// # Errors
///
/// Returns [`ColorError::InvalidOklch`] if the textual shape does not
/// parse. Pipeline callers substitute [`FALLBACK_HEX`] and log a warning.
pub fn oklch_to_hex(value: &str) -> ColorResult<String> {
    let (l, c, h) = parse_oklch(value)?;

    let h_rad = h.to_radians();
    let (r, g, b) = oklab_to_linear_srgb(l, c * h_rad.cos(), c * h_rad.sin());

    let quantize = |lin: f64| -> u8 {
        let srgb = linear_to_srgb(lin).clamp(0.0, 1.0);
        (srgb * 255.0).round() as u8
    };

    Ok(format!(
        "#{:02x}{:02x}{:02x}",
        quantize(r),
        quantize(g),
        quantize(b)
    ))
}
