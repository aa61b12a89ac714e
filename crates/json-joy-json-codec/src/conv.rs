//! Projection ([`conv`]) and domain restriction ([`satisfies`]).

use crate::codec::Codec;
use crate::error::{DecodeError, EncodeError};

/// Present a `Codec<B>` as a `Codec<A>` through a pair of total conversions.
///
/// The usual use is record ↔ tuple, so that an object builder can target a
/// tuple while callers work with a struct.
pub fn conv<A, B, ToRepr, FromRepr>(to_repr: ToRepr, from_repr: FromRepr, inner: Codec<B>) -> Codec<A>
where
    A: 'static,
    B: 'static,
    ToRepr: Fn(&A) -> B + Send + Sync + 'static,
    FromRepr: Fn(B) -> A + Send + Sync + 'static,
{
    let (decoder, encoder) = inner.into_parts();
    Codec::from_parts(decoder.map(from_repr), encoder.contramap(to_repr))
}

/// Restrict `inner` to values for which `predicate` holds, in both directions.
///
/// Decoding checks after `inner` succeeds; encoding checks before `inner`
/// runs. Either way a failed check is `OutOfDomain`.
pub fn satisfies<T, P>(predicate: P, inner: Codec<T>) -> Codec<T>
where
    T: 'static,
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    let (decoder, encoder) = inner.into_parts();
    let predicate = std::sync::Arc::new(predicate);
    let check = predicate.clone();
    Codec::new(
        move |value| {
            let decoded = decoder.decode(value)?;
            if check(&decoded) {
                Ok(decoded)
            } else {
                Err(DecodeError::OutOfDomain)
            }
        },
        move |value: &T| {
            if predicate(value) {
                encoder.encode(value)
            } else {
                Err(EncodeError::OutOfDomain)
            }
        },
    )
}
