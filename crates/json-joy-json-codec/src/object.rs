//! Object builders: `obj1`..`obj10` over field descriptors, and `merge_objs`.
//!
//! Decoding reads every field from the same member list and never rejects
//! members it was not asked about. Encoding starts from an empty object and
//! lets each field prepend its member, so the output lists fields in reverse
//! declaration order. [`crate::obj0`] and [`crate::empty`] cover the
//! zero-field case.

use json_joy_json_value::Value;

use crate::codec::Codec;
use crate::error::EncodeError;
use crate::field::Field;
use crate::primitives::object_members;

macro_rules! object_codec {
    ($(#[$meta:meta])* $name:ident => $(($field:ident, $value:ident, $T:ident)),+) => {
        $(#[$meta])*
        #[allow(clippy::too_many_arguments)]
        pub fn $name<$($T: 'static),+>($($field: Field<$T>),+) -> Codec<($($T,)+)> {
            let readers = ($($field.clone(),)+);
            let writers = ($($field,)+);
            Codec::new(
                move |value| {
                    let members = object_members(value)?;
                    let ($($field,)+) = &readers;
                    Ok(($($field.decode_from(members)?,)+))
                },
                move |tuple: &($($T,)+)| {
                    let ($($value,)+) = tuple;
                    let ($($field,)+) = &writers;
                    let mut members = Vec::new();
                    $($field.encode_into($value, &mut members)?;)+
                    Ok(Value::Object(members))
                },
            )
        }
    };
}

object_codec!(
    /// Object codec with one field.
    obj1 => (f1, v1, T1)
);
object_codec!(
    /// Object codec with 2 fields.
    obj2 => (f1, v1, T1), (f2, v2, T2)
);
object_codec!(
    /// Object codec with 3 fields.
    obj3 => (f1, v1, T1), (f2, v2, T2), (f3, v3, T3)
);
object_codec!(
    /// Object codec with 4 fields.
    obj4 => (f1, v1, T1), (f2, v2, T2), (f3, v3, T3), (f4, v4, T4)
);
object_codec!(
    /// Object codec with 5 fields.
    obj5 => (f1, v1, T1), (f2, v2, T2), (f3, v3, T3), (f4, v4, T4), (f5, v5, T5)
);
object_codec!(
    /// Object codec with 6 fields.
    obj6 => (f1, v1, T1), (f2, v2, T2), (f3, v3, T3), (f4, v4, T4), (f5, v5, T5), (f6, v6, T6)
);
object_codec!(
    /// Object codec with 7 fields.
    obj7 => (f1, v1, T1), (f2, v2, T2), (f3, v3, T3), (f4, v4, T4), (f5, v5, T5), (f6, v6, T6), (f7, v7, T7)
);
object_codec!(
    /// Object codec with 8 fields.
    obj8 => (f1, v1, T1), (f2, v2, T2), (f3, v3, T3), (f4, v4, T4), (f5, v5, T5), (f6, v6, T6), (f7, v7, T7), (f8, v8, T8)
);
object_codec!(
    /// Object codec with 9 fields.
    obj9 => (f1, v1, T1), (f2, v2, T2), (f3, v3, T3), (f4, v4, T4), (f5, v5, T5), (f6, v6, T6), (f7, v7, T7), (f8, v8, T8), (f9, v9, T9)
);
object_codec!(
    /// Object codec with 10 fields.
    obj10 => (f1, v1, T1), (f2, v2, T2), (f3, v3, T3), (f4, v4, T4), (f5, v5, T5), (f6, v6, T6), (f7, v7, T7), (f8, v8, T8), (f9, v9, T9), (f10, v10, T10)
);

fn into_members(value: Value) -> Result<Vec<(String, Value)>, EncodeError> {
    match value {
        Value::Object(members) => Ok(members),
        other => Err(EncodeError::NotAnObject(other.kind())),
    }
}

/// Pair two object codecs that read from the same object.
///
/// Both decoders see the whole input. On encode both encoders must produce
/// objects; their members are concatenated (`a`'s first) without removing
/// duplicate names.
pub fn merge_objs<A: 'static, B: 'static>(a: Codec<A>, b: Codec<B>) -> Codec<(A, B)> {
    let (decode_a, encode_a) = a.into_parts();
    let (decode_b, encode_b) = b.into_parts();
    Codec::new(
        move |value| Ok((decode_a.decode(value)?, decode_b.decode(value)?)),
        move |(x, y): &(A, B)| {
            let mut members = into_members(encode_a.encode(x)?)?;
            members.extend(into_members(encode_b.encode(y)?)?);
            Ok(Value::Object(members))
        },
    )
}
