//! Recursive decoders.
//!
//! [`mu`] ties the knot through a recursive call rather than a cyclic
//! structure: every decode builds the next level's self reference on demand,
//! so the depth of recursion follows the nesting depth of the input.
//! Deeply nested input can exhaust the stack; callers that accept untrusted
//! documents should bound their size.
//!
//! Encoders have no counterpart here. A recursive encoder is an ordinary
//! recursive function wrapped with [`Encoder::new`]; [`mu_codec`] pairs one
//! with a [`mu`] decoder.

use std::sync::Arc;

use crate::codec::{Codec, Decoder, Encoder};

/// Fixpoint of a decoder transformer.
///
/// `f` receives a decoder standing for the result itself and returns the
/// decoder for one level of the structure.
pub fn mu<T, F>(f: F) -> Decoder<T>
where
    T: 'static,
    F: Fn(Decoder<T>) -> Decoder<T> + Send + Sync + 'static,
{
    unroll(Arc::new(f))
}

fn unroll<T, F>(f: Arc<F>) -> Decoder<T>
where
    T: 'static,
    F: Fn(Decoder<T>) -> Decoder<T> + Send + Sync + 'static,
{
    Decoder::new(move |value| f(unroll(f.clone())).decode(value))
}

/// A recursive codec: the decoder is the fixpoint of `f`, the encoder is the
/// one supplied.
///
/// `f` receives a codec standing for the result itself, made of the `mu`
/// decoder and `encoder`.
pub fn mu_codec<T, F>(encoder: Encoder<T>, f: F) -> Codec<T>
where
    T: 'static,
    F: Fn(Codec<T>) -> Codec<T> + Send + Sync + 'static,
{
    let self_encoder = encoder.clone();
    let decoder = mu(move |this: Decoder<T>| {
        f(Codec::from_parts(this, self_encoder.clone()))
            .decoder()
            .clone()
    });
    Codec::from_parts(decoder, encoder)
}
