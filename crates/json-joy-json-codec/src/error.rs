//! Decode and encode error types.

use json_joy_json_value::{ParseError, Value};
use thiserror::Error;

/// Why a [`Value`] could not be decoded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("missing field \"{0}\"")]
    MissingField(String),
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[error("expected an array of {expected} elements, found {found}")]
    ArityMismatch { expected: usize, found: usize },
    #[error("invalid enum value {0}")]
    InvalidEnumValue(Value),
    #[error("no union case matches the input")]
    NoMatchingUnionCase,
    #[error("decoded value is out of domain")]
    OutOfDomain,
    #[error("expected an object, found {0}")]
    NotAnObject(&'static str),
    #[error("expected an array, found {0}")]
    NotAnArray(&'static str),
    #[error("unexpected field \"{0}\"")]
    UnexpectedField(String),
    #[error("invalid JSON text: {0}")]
    Parse(#[from] ParseError),
}

/// Why a program value could not be encoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("value is out of domain")]
    OutOfDomain,
    #[error("value is not listed in the enum")]
    InvalidEnumValue,
    #[error("value does not belong to this case")]
    CaseMismatch,
    #[error("no case matches this value")]
    NoMatchingCase,
    #[error("expected the inner encoder to produce an object, got {0}")]
    NotAnObject(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            DecodeError::MissingField("id".into()).to_string(),
            "missing field \"id\""
        );
        assert_eq!(
            DecodeError::TypeMismatch {
                expected: "string",
                found: "number"
            }
            .to_string(),
            "expected string, found number"
        );
        assert_eq!(
            DecodeError::InvalidEnumValue(Value::from("x")).to_string(),
            "invalid enum value \"x\""
        );
        assert_eq!(
            EncodeError::NoMatchingCase.to_string(),
            "no case matches this value"
        );
    }
}
