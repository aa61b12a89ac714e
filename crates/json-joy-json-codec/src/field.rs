//! Field descriptors: a member name, a presence policy and an inner codec.
//!
//! Fields only exist to be handed to the object builders (`obj1`..`obj10`).
//!
//! The lenient policies ([`opt`], [`dft`]) treat a member that is present
//! but fails its inner codec as if it were absent, and report the discarded
//! error through `tracing` at `trace` level. [`opt_strict`] and
//! [`dft_strict`] propagate the inner error instead.

use std::fmt;
use std::sync::Arc;

use json_joy_json_value::Value;

use crate::codec::Codec;
use crate::error::{DecodeError, EncodeError};

type ReadFn<T> = dyn Fn(Option<&Value>) -> Result<T, DecodeError> + Send + Sync;
type WriteFn<T> = dyn Fn(&T) -> Result<Option<Value>, EncodeError> + Send + Sync;

/// How object decoding treats a missing or unparsable member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
    Default,
}

/// A named member of an object codec.
pub struct Field<T> {
    name: Arc<str>,
    presence: Presence,
    read: Arc<ReadFn<T>>,
    write: Arc<WriteFn<T>>,
}

impl<T> Field<T> {
    fn new<R, W>(name: Arc<str>, presence: Presence, read: R, write: W) -> Self
    where
        R: Fn(Option<&Value>) -> Result<T, DecodeError> + Send + Sync + 'static,
        W: Fn(&T) -> Result<Option<Value>, EncodeError> + Send + Sync + 'static,
    {
        Self {
            name,
            presence,
            read: Arc::new(read),
            write: Arc::new(write),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn presence(&self) -> Presence {
        self.presence
    }

    /// Decode this field from an object's members. Other members are ignored.
    pub(crate) fn decode_from(&self, members: &[(String, Value)]) -> Result<T, DecodeError> {
        let found = members
            .iter()
            .find(|(k, _)| k.as_str() == &*self.name)
            .map(|(_, v)| v);
        (self.read)(found)
    }

    /// Prepend this field's member to `members`, unless it is elided.
    pub(crate) fn encode_into(
        &self,
        value: &T,
        members: &mut Vec<(String, Value)>,
    ) -> Result<(), EncodeError> {
        if let Some(encoded) = (self.write)(value)? {
            members.insert(0, (self.name.to_string(), encoded));
        }
        Ok(())
    }
}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            presence: self.presence,
            read: self.read.clone(),
            write: self.write.clone(),
        }
    }
}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("presence", &self.presence)
            .finish()
    }
}

fn swallowed(name: &str, err: &DecodeError) {
    tracing::trace!(field = name, error = %err, "discarding undecodable field");
}

/// Required member: absent is [`DecodeError::MissingField`], malformed
/// propagates the inner error.
pub fn req<T: 'static>(name: impl Into<String>, codec: Codec<T>) -> Field<T> {
    let name: Arc<str> = Arc::from(name.into());
    let (decoder, encoder) = codec.into_parts();
    let missing = name.clone();
    Field::new(
        name,
        Presence::Required,
        move |found| match found {
            Some(value) => decoder.decode(value),
            None => Err(DecodeError::MissingField(missing.to_string())),
        },
        move |value| encoder.encode(value).map(Some),
    )
}

fn optional<T: 'static>(name: String, codec: Codec<T>, strict: bool) -> Field<Option<T>> {
    let name: Arc<str> = Arc::from(name);
    let (decoder, encoder) = codec.into_parts();
    let label = name.clone();
    Field::new(
        name,
        Presence::Optional,
        move |found| match found {
            None => Ok(None),
            Some(value) => match decoder.decode(value) {
                Ok(decoded) => Ok(Some(decoded)),
                Err(err) if strict => Err(err),
                Err(err) => {
                    swallowed(&label, &err);
                    Ok(None)
                }
            },
        },
        move |value: &Option<T>| match value {
            Some(inner) => encoder.encode(inner).map(Some),
            None => Ok(None),
        },
    )
}

/// Optional member. Absent or malformed decodes to `None`; `None` is not
/// written.
pub fn opt<T: 'static>(name: impl Into<String>, codec: Codec<T>) -> Field<Option<T>> {
    optional(name.into(), codec, false)
}

/// Like [`opt`], but a present member that fails to decode is an error.
pub fn opt_strict<T: 'static>(name: impl Into<String>, codec: Codec<T>) -> Field<Option<T>> {
    optional(name.into(), codec, true)
}

fn defaulted<T, F>(name: String, codec: Codec<T>, default: T, equal: F, strict: bool) -> Field<T>
where
    T: Clone + Send + Sync + 'static,
    F: Fn(&T, &T) -> bool + Send + Sync + 'static,
{
    let name: Arc<str> = Arc::from(name);
    let (decoder, encoder) = codec.into_parts();
    let fallback = default.clone();
    let label = name.clone();
    Field::new(
        name,
        Presence::Default,
        move |found| match found {
            None => Ok(fallback.clone()),
            Some(value) => match decoder.decode(value) {
                Ok(decoded) => Ok(decoded),
                Err(err) if strict => Err(err),
                Err(err) => {
                    swallowed(&label, &err);
                    Ok(fallback.clone())
                }
            },
        },
        move |value| {
            if equal(value, &default) {
                Ok(None)
            } else {
                encoder.encode(value).map(Some)
            }
        },
    )
}

/// Member with a default. Absent or malformed decodes to `default`; a value
/// equal to `default` is not written.
pub fn dft<T>(name: impl Into<String>, codec: Codec<T>, default: T) -> Field<T>
where
    T: PartialEq + Clone + Send + Sync + 'static,
{
    defaulted(name.into(), codec, default, <T as PartialEq>::eq, false)
}

/// [`dft`] with a caller-supplied equality for elision.
pub fn dft_by<T, F>(name: impl Into<String>, codec: Codec<T>, default: T, equal: F) -> Field<T>
where
    T: Clone + Send + Sync + 'static,
    F: Fn(&T, &T) -> bool + Send + Sync + 'static,
{
    defaulted(name.into(), codec, default, equal, false)
}

/// Like [`dft`], but a present member that fails to decode is an error.
pub fn dft_strict<T>(name: impl Into<String>, codec: Codec<T>, default: T) -> Field<T>
where
    T: PartialEq + Clone + Send + Sync + 'static,
{
    defaulted(name.into(), codec, default, <T as PartialEq>::eq, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{int, string};
    use tracing_test::traced_test;

    fn members(pairs: &[(&str, Value)]) -> Vec<(String, Value)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn req_missing_and_malformed() {
        let f = req("id", int());
        assert_eq!(f.presence(), Presence::Required);
        assert_eq!(
            f.decode_from(&[]),
            Err(DecodeError::MissingField("id".to_string()))
        );
        assert_eq!(
            f.decode_from(&members(&[("id", Value::from("x"))])),
            Err(DecodeError::TypeMismatch {
                expected: "int",
                found: "string"
            })
        );
        assert_eq!(f.decode_from(&members(&[("id", Value::from(3))])), Ok(3));
    }

    #[test]
    fn lookup_takes_first_duplicate() {
        let f = req("id", int());
        let m = members(&[("id", Value::from(1)), ("id", Value::from(2))]);
        assert_eq!(f.decode_from(&m), Ok(1));
    }

    #[test]
    fn opt_swallows_and_strict_does_not() {
        let m = members(&[("tag", Value::from(1))]);
        assert_eq!(opt("tag", string()).decode_from(&m), Ok(None));
        assert!(opt_strict("tag", string()).decode_from(&m).is_err());
        assert_eq!(opt_strict("tag", string()).decode_from(&[]), Ok(None));
    }

    #[traced_test]
    #[test]
    fn swallowed_error_is_traced() {
        let m = members(&[("tag", Value::from(1))]);
        assert_eq!(opt("tag", string()).decode_from(&m), Ok(None));
        assert!(logs_contain("discarding undecodable field"));
    }

    #[test]
    fn dft_swallows_and_strict_does_not() {
        let m = members(&[("n", Value::from("five"))]);
        assert_eq!(dft("n", int(), 7).decode_from(&m), Ok(7));
        assert!(dft_strict("n", int(), 7).decode_from(&m).is_err());
        assert_eq!(dft_strict("n", int(), 7).decode_from(&[]), Ok(7));
    }

    #[test]
    fn encode_elides_and_prepends() {
        let mut acc = Vec::new();
        req("a", int()).encode_into(&1, &mut acc).unwrap();
        dft("b", int(), 0).encode_into(&0, &mut acc).unwrap();
        opt("c", int()).encode_into(&None, &mut acc).unwrap();
        opt("d", int()).encode_into(&Some(4), &mut acc).unwrap();
        assert_eq!(acc, members(&[("d", Value::from(4)), ("a", Value::from(1))]));
    }

    #[test]
    fn dft_by_uses_custom_equality() {
        let f = dft_by("s", string(), String::new(), |a: &String, b: &String| {
            a.trim() == b.trim()
        });
        let mut acc = Vec::new();
        f.encode_into(&"   ".to_string(), &mut acc).unwrap();
        assert!(acc.is_empty());
        f.encode_into(&"x".to_string(), &mut acc).unwrap();
        assert_eq!(acc, members(&[("s", Value::from("x"))]));
    }
}
