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

//! Error types for color conversion.

use thiserror::Error;

/// An error produced while parsing or converting a color value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input was not a 3- or 6-digit hex color.
    #[error("invalid hex color '{0}'")]
    InvalidHex(String),
    /// The input did not match the `oklch(L C H)` textual shape.
    #[error("invalid oklch value '{0}'")]
    InvalidOklch(String),
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_hex_display() {
        let err = ColorError::InvalidHex("zzz".to_string());
        assert_eq!(format!("{}", err), "invalid hex color 'zzz'");
    }

    #[test]
    fn test_invalid_oklch_display() {
        let err = ColorError::InvalidOklch("oklch()".to_string());
        assert_eq!(format!("{}", err), "invalid oklch value 'oklch()'");
    }

    #[test]
    fn test_error_is_std_error() {
        fn accepts_error<E: std::error::Error>(_: E) {}
        accepts_error(ColorError::InvalidHex("x".to_string()));
    }

    #[test]
    fn test_error_clone_eq() {
        let err = ColorError::InvalidOklch("bad".to_string());
        assert_eq!(err.clone(), err);
    }
}
