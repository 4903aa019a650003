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

//! Token value types and reference-string parsing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The declared type of a design token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenType {
    Color,
    Dimension,
    String,
    Number,
    Boolean,
    FontFamily,
    FontWeight,
    /// Any type name the pipeline does not interpret specially.
    Other(String),
}

impl TokenType {
    /// Parse a type name as exported by the design tool.
    pub fn from_name(name: &str) -> Self {
        match name {
            "color" => Self::Color,
            "dimension" => Self::Dimension,
            "string" => Self::String,
            "number" => Self::Number,
            "boolean" => Self::Boolean,
            "fontFamily" => Self::FontFamily,
            "fontWeight" => Self::FontWeight,
            other => Self::Other(other.to_string()),
        }
    }

    /// The canonical type name.
    pub fn name(&self) -> &str {
        match self {
            Self::Color => "color",
            Self::Dimension => "dimension",
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::FontFamily => "fontFamily",
            Self::FontWeight => "fontWeight",
            Self::Other(name) => name,
        }
    }
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A flattened token: declared type, literal-or-reference value, and an
/// optional description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Declared type name (`color`, `dimension`, ...).
    #[serde(rename = "type")]
    pub token_type: String,
    /// Literal value or a `{dotted.path}` reference string.
    pub value: Value,
    /// Optional human description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Token {
    /// Create a token without a description.
    pub fn new(token_type: impl Into<String>, value: Value) -> Self {
        Self {
            token_type: token_type.into(),
            value,
            description: None,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the reference target if the value is a `{dotted.path}`
    /// reference string.
    pub fn reference_target(&self) -> Option<&str> {
        self.value.as_str().and_then(parse_reference)
    }
}

/// Parse a reference string of the exact form `{dotted.path}`.
///
/// The braces must wrap the whole value; partial interpolation such as
/// `"prefix-{x}-suffix"` is not a reference and returns `None`.
pub fn parse_reference(value: &str) -> Option<&str> {
    let inner = value.strip_prefix('{')?.strip_suffix('}')?;
    if inner.is_empty() || inner.contains('{') || inner.contains('}') {
        return None;
    }
    Some(inner)
}

/// Format a dotted path as a reference string.
pub fn make_reference(path: &str) -> String {
    format!("{{{}}}", path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ==================== TokenType tests ====================

    #[test]
    fn test_token_type_round_trip_names() {
        for name in [
            "color",
            "dimension",
            "string",
            "number",
            "boolean",
            "fontFamily",
            "fontWeight",
        ] {
            assert_eq!(TokenType::from_name(name).name(), name);
        }
    }

    #[test]
    fn test_token_type_other_preserved() {
        let t = TokenType::from_name("float");
        assert_eq!(t, TokenType::Other("float".to_string()));
        assert_eq!(t.name(), "float");
    }

    #[test]
    fn test_token_type_display() {
        assert_eq!(format!("{}", TokenType::Color), "color");
        assert_eq!(format!("{}", TokenType::FontWeight), "fontWeight");
    }

    // ==================== Reference parsing tests ====================

    #[test]
    fn test_parse_reference_whole_string() {
        assert_eq!(parse_reference("{color.blue.500}"), Some("color.blue.500"));
    }

    #[test]
    fn test_parse_reference_rejects_partial() {
        assert_eq!(parse_reference("prefix-{x}-suffix"), None);
        assert_eq!(parse_reference("{x} trailing"), None);
    }

    #[test]
    fn test_parse_reference_rejects_empty() {
        assert_eq!(parse_reference("{}"), None);
        assert_eq!(parse_reference(""), None);
    }

    #[test]
    fn test_parse_reference_rejects_nested_braces() {
        assert_eq!(parse_reference("{a{b}}"), None);
    }

    #[test]
    fn test_parse_reference_rejects_plain_string() {
        assert_eq!(parse_reference("#3b82f6"), None);
    }

    #[test]
    fn test_make_reference() {
        assert_eq!(make_reference("a.b.c"), "{a.b.c}");
        assert_eq!(parse_reference(&make_reference("a.b.c")), Some("a.b.c"));
    }

    // ==================== Token tests ====================

    #[test]
    fn test_token_reference_target() {
        let t = Token::new("color", json!("{color.blue.500}"));
        assert_eq!(t.reference_target(), Some("color.blue.500"));

        let literal = Token::new("color", json!("#3b82f6"));
        assert_eq!(literal.reference_target(), None);

        let non_string = Token::new("number", json!(4));
        assert_eq!(non_string.reference_target(), None);
    }

    #[test]
    fn test_token_serialization_shape() {
        let t = Token::new("color", json!("#3b82f6")).with_description("brand blue");
        let v = serde_json::to_value(&t).unwrap();
        assert_eq!(v["type"], "color");
        assert_eq!(v["value"], "#3b82f6");
        assert_eq!(v["description"], "brand blue");
    }

    #[test]
    fn test_token_serialization_omits_missing_description() {
        let t = Token::new("number", json!(8));
        let v = serde_json::to_value(&t).unwrap();
        assert!(v.get("description").is_none());
    }

    #[test]
    fn test_token_deserialization() {
        let t: Token =
            serde_json::from_value(json!({"type": "dimension", "value": "4px"})).unwrap();
        assert_eq!(t.token_type, "dimension");
        assert_eq!(t.value, json!("4px"));
        assert_eq!(t.description, None);
    }
}
