//! Tuple builders: `tup1`..`tup10` map fixed-length arrays to Rust tuples.
//!
//! The input array must have exactly as many elements as the tuple; any
//! other length is [`DecodeError::ArityMismatch`], whatever the elements are.

use json_joy_json_value::Value;

use crate::codec::Codec;
use crate::error::DecodeError;
use crate::primitives::array_items;

macro_rules! tuple_codec {
    ($(#[$meta:meta])* $name:ident, $arity:literal => $(($codec:ident, $value:ident, $T:ident)),+) => {
        $(#[$meta])*
        #[allow(clippy::too_many_arguments)]
        pub fn $name<$($T: 'static),+>($($codec: Codec<$T>),+) -> Codec<($($T,)+)> {
            let decoders = ($($codec.decoder().clone(),)+);
            let encoders = ($($codec.encoder().clone(),)+);
            Codec::new(
                move |value| {
                    let items = array_items(value)?;
                    let [$($value),+] = items else {
                        return Err(DecodeError::ArityMismatch {
                            expected: $arity,
                            found: items.len(),
                        });
                    };
                    let ($($codec,)+) = &decoders;
                    Ok(($($codec.decode($value)?,)+))
                },
                move |tuple: &($($T,)+)| {
                    let ($($value,)+) = tuple;
                    let ($($codec,)+) = &encoders;
                    Ok(Value::Array(vec![$($codec.encode($value)?),+]))
                },
            )
        }
    };
}

tuple_codec!(
    /// Single-element array.
    tup1, 1 => (c1, v1, T1)
);
tuple_codec!(
    /// Array of exactly 2 elements.
    tup2, 2 => (c1, v1, T1), (c2, v2, T2)
);
tuple_codec!(
    /// Array of exactly 3 elements.
    tup3, 3 => (c1, v1, T1), (c2, v2, T2), (c3, v3, T3)
);
tuple_codec!(
    /// Array of exactly 4 elements.
    tup4, 4 => (c1, v1, T1), (c2, v2, T2), (c3, v3, T3), (c4, v4, T4)
);
tuple_codec!(
    /// Array of exactly 5 elements.
    tup5, 5 => (c1, v1, T1), (c2, v2, T2), (c3, v3, T3), (c4, v4, T4), (c5, v5, T5)
);
tuple_codec!(
    /// Array of exactly 6 elements.
    tup6, 6 => (c1, v1, T1), (c2, v2, T2), (c3, v3, T3), (c4, v4, T4), (c5, v5, T5), (c6, v6, T6)
);
tuple_codec!(
    /// Array of exactly 7 elements.
    tup7, 7 => (c1, v1, T1), (c2, v2, T2), (c3, v3, T3), (c4, v4, T4), (c5, v5, T5), (c6, v6, T6), (c7, v7, T7)
);
tuple_codec!(
    /// Array of exactly 8 elements.
    tup8, 8 => (c1, v1, T1), (c2, v2, T2), (c3, v3, T3), (c4, v4, T4), (c5, v5, T5), (c6, v6, T6), (c7, v7, T7), (c8, v8, T8)
);
tuple_codec!(
    /// Array of exactly 9 elements.
    tup9, 9 => (c1, v1, T1), (c2, v2, T2), (c3, v3, T3), (c4, v4, T4), (c5, v5, T5), (c6, v6, T6), (c7, v7, T7), (c8, v8, T8), (c9, v9, T9)
);
tuple_codec!(
    /// Array of exactly 10 elements.
    tup10, 10 => (c1, v1, T1), (c2, v2, T2), (c3, v3, T3), (c4, v4, T4), (c5, v5, T5), (c6, v6, T6), (c7, v7, T7), (c8, v8, T8), (c9, v9, T9), (c10, v10, T10)
);
