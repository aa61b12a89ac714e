//! Leaf codecs: each maps one [`Value`] shape to one Rust type and back.

use json_joy_json_value::{Members, Value};

use crate::codec::{Codec, Decoder, Encoder};
use crate::error::{DecodeError, EncodeError};

// Exclusive upper bound of i64 as f64 (2^63).
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

fn mismatch(expected: &'static str, found: &Value) -> DecodeError {
    DecodeError::TypeMismatch {
        expected,
        found: found.kind(),
    }
}

/// An integral number in `[min, max_excl)`.
fn integral(
    value: &Value,
    expected: &'static str,
    min: f64,
    max_excl: f64,
) -> Result<f64, DecodeError> {
    match value {
        Value::Number(n) if n.fract() == 0.0 && *n >= min && *n < max_excl => Ok(*n),
        other => Err(mismatch(expected, other)),
    }
}

pub(crate) fn object_members(value: &Value) -> Result<&Members, DecodeError> {
    match value {
        Value::Object(members) => Ok(members),
        other => Err(DecodeError::NotAnObject(other.kind())),
    }
}

pub(crate) fn array_items(value: &Value) -> Result<&[Value], DecodeError> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(DecodeError::NotAnArray(other.kind())),
    }
}

pub fn string() -> Codec<String> {
    Codec::new(
        |value| match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(mismatch("string", other)),
        },
        |s: &String| Ok(Value::String(s.clone())),
    )
}

pub fn bool() -> Codec<bool> {
    Codec::new(
        |value| match value {
            Value::Bool(b) => Ok(*b),
            other => Err(mismatch("boolean", other)),
        },
        |b: &bool| Ok(Value::Bool(*b)),
    )
}

/// 32-bit integer. Fractional or out-of-range numbers are rejected.
pub fn int() -> Codec<i32> {
    Codec::new(
        |value| {
            integral(value, "int", i32::MIN as f64, i32::MAX as f64 + 1.0).map(|n| n as i32)
        },
        |n: &i32| Ok(Value::Number(*n as f64)),
    )
}

/// 64-bit integer carried over the `f64` number channel.
///
/// Magnitudes of 2^53 and above may not round-trip exactly.
pub fn int64() -> Codec<i64> {
    Codec::new(
        |value| integral(value, "int64", -I64_BOUND, I64_BOUND).map(|n| n as i64),
        |n: &i64| Ok(Value::Number(*n as f64)),
    )
}

/// Decoder-only floating point leaf. See [`number`] for a full codec.
pub fn float() -> Decoder<f64> {
    Decoder::new(|value| match value {
        Value::Number(n) => Ok(*n),
        other => Err(mismatch("number", other)),
    })
}

/// Full `f64` codec. NaN and the infinities have no JSON form and fail to
/// encode with [`EncodeError::OutOfDomain`].
pub fn number() -> Codec<f64> {
    Codec::from_parts(
        float(),
        Encoder::new(|n: &f64| {
            if n.is_finite() {
                Ok(Value::Number(*n))
            } else {
                Err(EncodeError::OutOfDomain)
            }
        }),
    )
}

pub fn null() -> Codec<()> {
    Codec::new(
        |value| match value {
            Value::Null => Ok(()),
            other => Err(mismatch("null", other)),
        },
        |_: &()| Ok(Value::Null),
    )
}

/// Homogeneous array. The first element that fails to decode fails the list.
pub fn list<T: 'static>(item: Codec<T>) -> Codec<Vec<T>> {
    let decode_item = item.decoder().clone();
    let encode_item = item.encoder().clone();
    Codec::new(
        move |value| {
            array_items(value)?
                .iter()
                .map(|v| decode_item.decode(v))
                .collect()
        },
        move |items: &Vec<T>| {
            items
                .iter()
                .map(|v| encode_item.encode(v))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array)
        },
    )
}

/// Object used as a string-keyed map. Member order and duplicates are kept.
pub fn assoc<T: 'static>(item: Codec<T>) -> Codec<Vec<(String, T)>> {
    let decode_item = item.decoder().clone();
    let encode_item = item.encoder().clone();
    Codec::new(
        move |value| {
            object_members(value)?
                .iter()
                .map(|(k, v)| decode_item.decode(v).map(|item| (k.clone(), item)))
                .collect()
        },
        move |entries: &Vec<(String, T)>| {
            entries
                .iter()
                .map(|(k, v)| encode_item.encode(v).map(|item| (k.clone(), item)))
                .collect::<Result<Members, EncodeError>>()
                .map(Value::Object)
        },
    )
}

/// `null` maps to `None`; anything else goes through `inner`.
pub fn nullable<T: 'static>(inner: Codec<T>) -> Codec<Option<T>> {
    let decode_inner = inner.decoder().clone();
    let encode_inner = inner.encoder().clone();
    Codec::new(
        move |value| match value {
            Value::Null => Ok(None),
            other => decode_inner.decode(other).map(Some),
        },
        move |opt: &Option<T>| match opt {
            Some(v) => encode_inner.encode(v),
            None => Ok(Value::Null),
        },
    )
}

/// Identity codec over raw values.
pub fn any_value() -> Codec<Value> {
    Codec::new(|value| Ok(value.clone()), |value: &Value| Ok(value.clone()))
}

/// Strict empty object: any member is rejected.
pub fn empty() -> Codec<()> {
    Codec::new(
        |value| match object_members(value)?.first() {
            Some((name, _)) => Err(DecodeError::UnexpectedField(name.clone())),
            None => Ok(()),
        },
        |_: &()| Ok(Value::Object(Vec::new())),
    )
}

/// Any object, members ignored.
pub fn obj0() -> Codec<()> {
    Codec::new(
        |value| object_members(value).map(|_| ()),
        |_: &()| Ok(Value::Object(Vec::new())),
    )
}

/// Map a finite set of tags, decoded by `tag`, to values.
///
/// Lookups scan `pairs` front to back in both directions, so the first
/// matching pair wins.
pub fn enum_<K, T>(tag: Codec<K>, pairs: Vec<(K, T)>) -> Codec<T>
where
    K: PartialEq + Send + Sync + 'static,
    T: PartialEq + Clone + Send + Sync + 'static,
{
    let (decode_tag, encode_tag) = tag.into_parts();
    let pairs = std::sync::Arc::new(pairs);
    let lookup = pairs.clone();
    Codec::new(
        move |value| {
            let key = decode_tag.decode(value)?;
            lookup
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.clone())
                .ok_or_else(|| DecodeError::InvalidEnumValue(value.clone()))
        },
        move |v: &T| match pairs.iter().find(|(_, candidate)| candidate == v) {
            Some((k, _)) => encode_tag.encode(k),
            None => Err(EncodeError::InvalidEnumValue),
        },
    )
}

pub fn string_enum<K, T>(pairs: Vec<(K, T)>) -> Codec<T>
where
    K: Into<String>,
    T: PartialEq + Clone + Send + Sync + 'static,
{
    enum_(
        string(),
        pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
    )
}

/// The literal string `name`, carrying no data.
pub fn constant(name: impl Into<String>) -> Codec<()> {
    string_enum(vec![(name.into(), ())])
}
