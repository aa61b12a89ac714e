//! Entry points: apply a codec to values or JSON text.
//!
//! Each operation comes in two forms. The plain form returns the error; the
//! `_opt` form returns `None` instead and logs the error at `debug` level.

use json_joy_json_value::{parse, render, Value};

use crate::codec::Codec;
use crate::error::{DecodeError, EncodeError};

pub fn to_value<T>(codec: &Codec<T>, value: &T) -> Result<Value, EncodeError> {
    codec.encode(value)
}

pub fn to_value_opt<T>(codec: &Codec<T>, value: &T) -> Option<Value> {
    to_value(codec, value)
        .inspect_err(|err| tracing::debug!(error = %err, "encode failed"))
        .ok()
}

/// Encode and render as JSON text, compact when `minify` is set and
/// pretty-printed otherwise.
pub fn to_string<T>(codec: &Codec<T>, value: &T, minify: bool) -> Result<String, EncodeError> {
    to_value(codec, value).map(|encoded| render(&encoded, minify))
}

pub fn to_string_opt<T>(codec: &Codec<T>, value: &T, minify: bool) -> Option<String> {
    to_string(codec, value, minify)
        .inspect_err(|err| tracing::debug!(error = %err, "encode failed"))
        .ok()
}

pub fn from_value<T>(codec: &Codec<T>, value: &Value) -> Result<T, DecodeError> {
    codec.decode(value)
}

pub fn from_value_opt<T>(codec: &Codec<T>, value: &Value) -> Option<T> {
    from_value(codec, value)
        .inspect_err(|err| tracing::debug!(error = %err, "decode failed"))
        .ok()
}

/// Parse JSON text and decode it. Malformed text is [`DecodeError::Parse`].
pub fn from_string<T>(codec: &Codec<T>, text: &str) -> Result<T, DecodeError> {
    from_value(codec, &parse(text)?)
}

pub fn from_string_opt<T>(codec: &Codec<T>, text: &str) -> Option<T> {
    from_string(codec, text)
        .inspect_err(|err| tracing::debug!(error = %err, "decode failed"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{dft, req};
    use crate::object::obj2;
    use crate::primitives::{int, string};

    fn greeting() -> Codec<(String, i32)> {
        obj2(req("hello", string()), dft("n", int(), 0))
    }

    #[test]
    fn text_round_trip() {
        let text = to_string(&greeting(), &("world".to_string(), 5), true).unwrap();
        assert_eq!(text, r#"{"n":5,"hello":"world"}"#);
        assert_eq!(from_string(&greeting(), &text), Ok(("world".to_string(), 5)));
    }

    #[test]
    fn pretty_output() {
        let text = to_string(&greeting(), &("world".to_string(), 0), false).unwrap();
        assert_eq!(text, "{\n  \"hello\": \"world\"\n}");
    }

    #[test]
    fn parse_errors_pass_through() {
        assert!(matches!(
            from_string(&greeting(), "{\"hello\":"),
            Err(DecodeError::Parse(_))
        ));
        assert_eq!(from_string_opt(&greeting(), "{\"hello\":"), None);
    }

    #[test]
    fn opt_forms() {
        assert_eq!(
            from_string_opt(&greeting(), r#"{"hello":"x"}"#),
            Some(("x".to_string(), 0))
        );
        assert_eq!(from_value_opt(&greeting(), &Value::Null), None);
        let positive = crate::conv::satisfies(|n: &i32| *n > 0, int());
        assert_eq!(to_value_opt(&positive, &-1), None);
        assert_eq!(to_string_opt(&positive, &2, true), Some("2".to_string()));
    }

    #[test]
    fn non_finite_numbers_do_not_render_as_null() {
        let c = crate::primitives::number();
        assert_eq!(to_string(&c, &f64::NAN, true), Err(EncodeError::OutOfDomain));
        assert_eq!(to_string_opt(&c, &f64::INFINITY, true), None);
        assert_eq!(to_string(&c, &-0.0, true), Ok("-0.0".to_string()));
    }
}
