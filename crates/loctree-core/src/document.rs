//! Document boundary: JSON text ↔ `serde_json::Value`
//!
//! Thin wrappers the batch driver uses around serde_json. Mapping key order
//! is preserved (the `preserve_order` feature), so a rewrite touches only
//! the values the transforms actually changed.

use serde_json::Value;

use crate::error::{Error, Result};

/// Parse JSON text into a document tree
pub fn from_str(text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(Error::Parse)
}

/// Serialize a document tree as pretty JSON: 2-space indent, raw UTF-8
/// (Cyrillic is not `\u`-escaped), trailing newline.
pub fn to_pretty(value: &Value) -> Result<String> {
    let mut text = serde_json::to_string_pretty(value).map_err(Error::Serialize)?;
    text.push('\n');
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_round_trip_preserves_key_order() {
        let text = "{\n  \"z\": \"я\",\n  \"a\": \"б\"\n}\n";
        let tree = from_str(text).unwrap();
        assert_eq!(to_pretty(&tree).unwrap(), text);
    }

    #[test]
    fn test_pretty_output_keeps_cyrillic_raw() {
        let out = to_pretty(&json!({"k": "Привет"})).unwrap();
        assert!(out.contains("Привет"));
        assert!(!out.contains("\\u"));
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = from_str("{not json").unwrap_err();
        assert!(err.to_string().starts_with("parse error"));
    }
}
