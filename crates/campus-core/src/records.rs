//! Utilities for records output format

/// Escape backslashes and double quotes for a quoted records field.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\\', r"\\").replace('"', r#"\""#)
}

/// A location name as a quoted records field
pub fn quoted(name: &str) -> String {
    format!("\"{}\"", escape_quotes(name))
}
