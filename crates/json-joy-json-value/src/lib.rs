//! `json-joy-json-value` — the structured JSON value used by the codec crate.
//!
//! Unlike `serde_json::Value`, objects are an ordered list of members and may
//! carry the same key more than once. Text parsing and rendering are
//! delegated to `serde_json`.
//!
//! # Example
//!
//! ```
//! use json_joy_json_value::{parse, render, Value};
//!
//! let value = parse(r#"{"a": 1, "a": [true, null]}"#).unwrap();
//! assert_eq!(value.as_object().map(|m| m.len()), Some(2));
//! assert_eq!(value.get("a"), Some(&Value::Number(1.0)));
//! assert_eq!(render(&value, true), r#"{"a":1,"a":[true,null]}"#);
//! ```

mod serde_impl;
mod text;
mod value;

pub use text::{parse, render, ParseError};
pub use value::{Members, Value};
