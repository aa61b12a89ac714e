//! `json-joy-json-codec` — bidirectional JSON codec combinators.
//!
//! A [`Codec<T>`] pairs a decoder (`Value -> T`) with an encoder
//! (`T -> Value`). Codecs are built once from leaves ([`string`], [`int`],
//! [`list`], ...) and combinators ([`obj2`], [`tup3`], [`union`], [`conv`],
//! [`mu`], ...), so the two directions cannot drift apart.
//!
//! # Example
//!
//! ```
//! use json_joy_json_codec::{conv, dft, from_string, obj2, req, string, int, to_string};
//!
//! #[derive(Debug, PartialEq)]
//! struct Greeting {
//!     hello: String,
//!     n: i32,
//! }
//!
//! let codec = conv(
//!     |g: &Greeting| (g.hello.clone(), g.n),
//!     |(hello, n)| Greeting { hello, n },
//!     obj2(req("hello", string()), dft("n", int(), 0)),
//! );
//!
//! let g = from_string(&codec, r#"{"hello": "world", "extra": true}"#).unwrap();
//! assert_eq!(g, Greeting { hello: "world".into(), n: 0 });
//! assert_eq!(to_string(&codec, &g, true).unwrap(), r#"{"hello":"world"}"#);
//! ```

pub mod codec;
pub mod conv;
pub mod convert;
pub mod error;
pub mod field;
pub mod fix;
pub mod object;
pub mod primitives;
pub mod tuple;
pub mod union;

pub use codec::{Codec, Decoder, Encoder};
pub use conv::{conv, satisfies};
pub use convert::{
    from_string, from_string_opt, from_value, from_value_opt, to_string, to_string_opt, to_value,
    to_value_opt,
};
pub use error::{DecodeError, EncodeError};
pub use field::{dft, dft_by, dft_strict, opt, opt_strict, req, Field, Presence};
pub use fix::{mu, mu_codec};
pub use json_joy_json_value::{parse, render, ParseError, Value};
pub use object::{merge_objs, obj1, obj10, obj2, obj3, obj4, obj5, obj6, obj7, obj8, obj9};
pub use primitives::{
    any_value, assoc, bool, constant, empty, enum_, float, int, int64, list, null, nullable,
    number, obj0, string, string_enum,
};
pub use tuple::{tup1, tup10, tup2, tup3, tup4, tup5, tup6, tup7, tup8, tup9};
pub use union::{case, union, Case};
