//! JSON text layer: parse text into a [`Value`] and render it back.

use thiserror::Error;

use crate::Value;

/// Text could not be parsed as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at line {line} column {column}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        let line = err.line();
        let column = err.column();
        // serde_json's Display appends its own position suffix; keep the bare message.
        let full = err.to_string();
        let message = match full.rfind(" at line ") {
            Some(idx) => full[..idx].to_string(),
            None => full,
        };
        Self {
            message,
            line,
            column,
        }
    }
}

/// Parse JSON text. Trailing non-whitespace input is an error.
pub fn parse(text: &str) -> Result<Value, ParseError> {
    Ok(serde_json::from_str(text)?)
}

/// Render a value as JSON text.
///
/// `minify` selects compact output; otherwise the text is pretty-printed with
/// two-space indentation. Object members are written in order, duplicates
/// included.
pub fn render(value: &Value, minify: bool) -> String {
    let rendered = if minify {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    rendered.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_duplicate_keys_in_order() {
        let v = parse(r#"{"b": 1, "a": 2, "b": 3}"#).unwrap();
        assert_eq!(
            v,
            Value::object([
                ("b", Value::from(1)),
                ("a", Value::from(2)),
                ("b", Value::from(3)),
            ])
        );
    }

    #[test]
    fn parse_scalars() {
        assert_eq!(parse("null").unwrap(), Value::Null);
        assert_eq!(parse("true").unwrap(), Value::Bool(true));
        assert_eq!(parse("-12").unwrap(), Value::Number(-12.0));
        assert_eq!(parse("1.5e2").unwrap(), Value::Number(150.0));
        assert_eq!(parse(r#""hé""#).unwrap(), Value::from("hé"));
    }

    #[test]
    fn parse_error_reports_position() {
        let err = parse("{\n  \"a\": }").unwrap_err();
        assert_eq!(err.line, 2);
        assert!(err.column > 0);
        assert!(!err.message.contains(" at line "));
    }

    #[test]
    fn parse_rejects_trailing_input() {
        assert!(parse("[1] 2").is_err());
    }

    #[test]
    fn render_integral_numbers_without_fraction() {
        let v = Value::Array(vec![Value::from(5), Value::from(-0.5), Value::from(1e20)]);
        assert_eq!(render(&v, true), "[5,-0.5,1e+20]");
    }

    #[test]
    fn render_keeps_negative_zero() {
        let v = Value::Array(vec![Value::from(-0.0), Value::from(0.0)]);
        assert_eq!(render(&v, true), "[-0.0,0]");
    }

    #[test]
    fn render_pretty() {
        let v = Value::object([("a", Value::from(1))]);
        assert_eq!(render(&v, false), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn render_keeps_duplicates() {
        let v = Value::object([("x", Value::Null), ("x", Value::from(true))]);
        assert_eq!(render(&v, true), r#"{"x":null,"x":true}"#);
        assert_eq!(v.to_string(), r#"{"x":null,"x":true}"#);
    }
}
