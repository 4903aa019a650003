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

//! Error types for the token pipeline core.

use std::fmt;
use thiserror::Error;

/// The kind of error that occurred in the pipeline core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreErrorKind {
    /// Malformed JSON or unreadable source document.
    Parse,
    /// Document structure violates the token model.
    Shape,
    /// Reference target missing from the lookup.
    Reference,
    /// Circular reference chain.
    Cycle,
    /// Color or value conversion failure.
    Conversion,
}

impl fmt::Display for CoreErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse => write!(f, "ParseError"),
            Self::Shape => write!(f, "ShapeError"),
            Self::Reference => write!(f, "ReferenceError"),
            Self::Cycle => write!(f, "CycleError"),
            Self::Conversion => write!(f, "ConversionError"),
        }
    }
}

/// An error from the token pipeline core.
#[derive(Debug, Clone, Error)]
#[error("{kind}: {message}")]
pub struct CoreError {
    /// The kind of error.
    pub kind: CoreErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Dotted token path the error relates to, when known.
    pub path: Option<String>,
}

impl CoreError {
    /// Create a new error.
    pub fn new(kind: CoreErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            path: None,
        }
    }

    /// Attach the dotted token path the error relates to.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    // Convenience constructors for each error kind
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(CoreErrorKind::Parse, message)
    }

    pub fn shape(message: impl Into<String>) -> Self {
        Self::new(CoreErrorKind::Shape, message)
    }

    pub fn reference(message: impl Into<String>) -> Self {
        Self::new(CoreErrorKind::Reference, message)
    }

    pub fn cycle(message: impl Into<String>) -> Self {
        Self::new(CoreErrorKind::Cycle, message)
    }

    pub fn conversion(message: impl Into<String>) -> Self {
        Self::new(CoreErrorKind::Conversion, message)
    }
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== CoreErrorKind Display tests ====================

    #[test]
    fn test_error_kind_display() {
        assert_eq!(format!("{}", CoreErrorKind::Parse), "ParseError");
        assert_eq!(format!("{}", CoreErrorKind::Shape), "ShapeError");
        assert_eq!(format!("{}", CoreErrorKind::Reference), "ReferenceError");
        assert_eq!(format!("{}", CoreErrorKind::Cycle), "CycleError");
        assert_eq!(format!("{}", CoreErrorKind::Conversion), "ConversionError");
    }

    // ==================== Constructor tests ====================

    #[test]
    fn test_error_constructors() {
        assert_eq!(CoreError::parse("x").kind, CoreErrorKind::Parse);
        assert_eq!(CoreError::shape("x").kind, CoreErrorKind::Shape);
        assert_eq!(CoreError::reference("x").kind, CoreErrorKind::Reference);
        assert_eq!(CoreError::cycle("x").kind, CoreErrorKind::Cycle);
        assert_eq!(CoreError::conversion("x").kind, CoreErrorKind::Conversion);
    }

    #[test]
    fn test_error_with_path() {
        let err = CoreError::reference("missing target").with_path("color.blue.500");
        assert_eq!(err.path, Some("color.blue.500".to_string()));
    }

    #[test]
    fn test_error_display() {
        let err = CoreError::cycle("a -> b -> a");
        let msg = format!("{}", err);
        assert!(msg.contains("CycleError"));
        assert!(msg.contains("a -> b -> a"));
    }

    #[test]
    fn test_error_is_std_error() {
        fn accepts_error<E: std::error::Error>(_: E) {}
        accepts_error(CoreError::parse("bad json"));
    }
}
