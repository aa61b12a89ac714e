//! [`Decoder`], [`Encoder`] and the [`Codec`] pairing them.
//!
//! All three are thin `Arc` wrappers around closures: cloning is cheap, and
//! every instance is `Send + Sync` regardless of the target type, so a codec
//! built once can be shared between threads.

use std::fmt;
use std::sync::Arc;

use json_joy_json_value::Value;

use crate::error::{DecodeError, EncodeError};

type DecodeFn<T> = dyn Fn(&Value) -> Result<T, DecodeError> + Send + Sync;
type EncodeFn<T> = dyn Fn(&T) -> Result<Value, EncodeError> + Send + Sync;

/// Turns a [`Value`] into a `T`, or fails.
pub struct Decoder<T>(Arc<DecodeFn<T>>);

impl<T> Decoder<T> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Result<T, DecodeError> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn decode(&self, value: &Value) -> Result<T, DecodeError> {
        (self.0)(value)
    }

    /// Post-process every successful decode.
    pub fn map<U, F>(self, f: F) -> Decoder<U>
    where
        T: 'static,
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        Decoder::new(move |value| self.decode(value).map(&f))
    }
}

impl<T> Clone for Decoder<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> fmt::Debug for Decoder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Decoder")
    }
}

/// Turns a `&T` into a [`Value`]. Fails only where the domain was restricted.
pub struct Encoder<T>(Arc<EncodeFn<T>>);

impl<T> Encoder<T> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&T) -> Result<Value, EncodeError> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Wrap an encoder that cannot fail.
    pub fn total<F>(f: F) -> Self
    where
        F: Fn(&T) -> Value + Send + Sync + 'static,
    {
        Self::new(move |value| Ok(f(value)))
    }

    pub fn encode(&self, value: &T) -> Result<Value, EncodeError> {
        (self.0)(value)
    }

    /// Encode a `U` by first projecting it to `T`.
    pub fn contramap<U, F>(self, f: F) -> Encoder<U>
    where
        T: 'static,
        U: 'static,
        F: Fn(&U) -> T + Send + Sync + 'static,
    {
        Encoder::new(move |value| self.encode(&f(value)))
    }
}

impl<T> Clone for Encoder<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> fmt::Debug for Encoder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Encoder")
    }
}

/// A decoder and an encoder for the same type, declared together.
///
/// By convention `decode(encode(v)) == v`; the library does not check it.
pub struct Codec<T> {
    decoder: Decoder<T>,
    encoder: Encoder<T>,
}

impl<T> Codec<T> {
    pub fn new<D, E>(decode: D, encode: E) -> Self
    where
        D: Fn(&Value) -> Result<T, DecodeError> + Send + Sync + 'static,
        E: Fn(&T) -> Result<Value, EncodeError> + Send + Sync + 'static,
    {
        Self::from_parts(Decoder::new(decode), Encoder::new(encode))
    }

    pub fn from_parts(decoder: Decoder<T>, encoder: Encoder<T>) -> Self {
        Self { decoder, encoder }
    }

    pub fn decode(&self, value: &Value) -> Result<T, DecodeError> {
        self.decoder.decode(value)
    }

    pub fn encode(&self, value: &T) -> Result<Value, EncodeError> {
        self.encoder.encode(value)
    }

    pub fn decoder(&self) -> &Decoder<T> {
        &self.decoder
    }

    pub fn encoder(&self) -> &Encoder<T> {
        &self.encoder
    }

    pub fn into_parts(self) -> (Decoder<T>, Encoder<T>) {
        (self.decoder, self.encoder)
    }
}

impl<T> Clone for Codec<T> {
    fn clone(&self) -> Self {
        Self {
            decoder: self.decoder.clone(),
            encoder: self.encoder.clone(),
        }
    }
}

impl<T> fmt::Debug for Codec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Codec")
    }
}
