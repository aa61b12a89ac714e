//! Union dispatch over an ordered list of cases.
//!
//! There is no tag lookup: decoding tries every case in declaration order
//! and keeps the first success, so when several cases accept the same input
//! the earliest one wins. Encoding picks the first case whose `narrow`
//! projection accepts the value.

use std::sync::Arc;

use json_joy_json_value::Value;

use crate::codec::{Codec, Decoder, Encoder};
use crate::error::{DecodeError, EncodeError};

type TryEncodeFn<W> = dyn Fn(&W) -> Option<Result<Value, EncodeError>> + Send + Sync;

/// One variant of a union over `W`, with the variant's payload type erased.
pub struct Case<W> {
    decoder: Decoder<W>,
    try_encode: Arc<TryEncodeFn<W>>,
}

impl<W: 'static> Case<W> {
    /// `None` when the value does not belong to this case; otherwise the
    /// result of the case's inner encoder.
    pub fn try_encode(&self, value: &W) -> Option<Result<Value, EncodeError>> {
        (self.try_encode)(value)
    }

    pub fn decode(&self, value: &Value) -> Result<W, DecodeError> {
        self.decoder.decode(value)
    }

    /// This case alone, as a codec over the whole type. Encoding a value of
    /// another case fails with [`EncodeError::CaseMismatch`].
    pub fn codec(&self) -> Codec<W> {
        let try_encode = self.try_encode.clone();
        Codec::from_parts(
            self.decoder.clone(),
            Encoder::new(move |value| {
                try_encode(value).unwrap_or(Err(EncodeError::CaseMismatch))
            }),
        )
    }
}

impl<W> Clone for Case<W> {
    fn clone(&self) -> Self {
        Self {
            decoder: self.decoder.clone(),
            try_encode: self.try_encode.clone(),
        }
    }
}

/// Package one variant of `W`.
///
/// `narrow` extracts the payload when the value is this variant, `widen`
/// rebuilds the whole value from a decoded payload.
pub fn case<W, P, N, Wd>(narrow: N, widen: Wd, inner: Codec<P>) -> Case<W>
where
    W: 'static,
    P: 'static,
    N: Fn(&W) -> Option<P> + Send + Sync + 'static,
    Wd: Fn(P) -> W + Send + Sync + 'static,
{
    let (decoder, encoder) = inner.into_parts();
    Case {
        decoder: decoder.map(widen),
        try_encode: Arc::new(move |value: &W| narrow(value).map(|part| encoder.encode(&part))),
    }
}

/// Combine cases into one codec, tried in order.
pub fn union<W: 'static>(cases: Vec<Case<W>>) -> Codec<W> {
    let cases: Arc<[Case<W>]> = cases.into();
    let encode_cases = cases.clone();
    Codec::new(
        move |value| {
            for (index, case) in cases.iter().enumerate() {
                match case.decode(value) {
                    Ok(decoded) => return Ok(decoded),
                    Err(err) => {
                        tracing::trace!(case = index, error = %err, "union case rejected input");
                    }
                }
            }
            Err(DecodeError::NoMatchingUnionCase)
        },
        move |value: &W| {
            encode_cases
                .iter()
                .find_map(|case| case.try_encode(value))
                .unwrap_or(Err(EncodeError::NoMatchingCase))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conv::{conv, satisfies};
    use crate::field::req;
    use crate::object::obj2;
    use crate::primitives::{constant, int, number, string};
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq)]
    enum Shape {
        Circle(f64),
        Rect(f64, f64),
    }

    fn shape() -> Codec<Shape> {
        union(vec![
            case(
                |s: &Shape| match s {
                    Shape::Circle(r) => Some(((), *r)),
                    _ => None,
                },
                |((), r)| Shape::Circle(r),
                obj2(req("kind", constant("circle")), req("r", number())),
            ),
            case(
                |s: &Shape| match s {
                    Shape::Rect(w, h) => Some((*w, *h)),
                    _ => None,
                },
                |(w, h)| Shape::Rect(w, h),
                obj2(req("w", number()), req("h", number())),
            ),
        ])
    }

    fn v(j: serde_json::Value) -> Value {
        Value::from(j)
    }

    #[test]
    fn dispatches_on_decode() {
        assert_eq!(
            shape().decode(&v(json!({"kind": "circle", "r": 1.5}))),
            Ok(Shape::Circle(1.5))
        );
        assert_eq!(
            shape().decode(&v(json!({"w": 2, "h": 3}))),
            Ok(Shape::Rect(2.0, 3.0))
        );
        assert_eq!(
            shape().decode(&v(json!({"w": 2}))),
            Err(DecodeError::NoMatchingUnionCase)
        );
    }

    #[test]
    fn dispatches_on_encode() {
        assert_eq!(
            shape().encode(&Shape::Rect(1.0, 2.0)),
            Ok(v(json!({"h": 2, "w": 1})))
        );
        assert_eq!(
            shape().encode(&Shape::Circle(0.5)),
            Ok(v(json!({"r": 0.5, "kind": "circle"})))
        );
    }

    #[test]
    fn first_listed_case_wins() {
        let c = union(vec![
            case(|n: &i64| Some(*n as i32), |n: i32| i64::from(n) * 100, int()),
            case(|n: &i64| Some(*n as i32), |n: i32| i64::from(n), int()),
        ]);
        assert_eq!(c.decode(&Value::from(2)), Ok(200));
    }

    #[test]
    fn no_case_matches_value() {
        let only_circles = union(vec![case(
            |s: &Shape| match s {
                Shape::Circle(r) => Some(*r),
                _ => None,
            },
            Shape::Circle,
            number(),
        )]);
        assert_eq!(
            only_circles.encode(&Shape::Rect(1.0, 1.0)),
            Err(EncodeError::NoMatchingCase)
        );
    }

    #[test]
    fn lone_case_codec_reports_case_mismatch() {
        let circle = case(
            |s: &Shape| match s {
                Shape::Circle(r) => Some(*r),
                _ => None,
            },
            Shape::Circle,
            number(),
        )
        .codec();
        assert_eq!(circle.encode(&Shape::Circle(2.0)), Ok(Value::from(2.0)));
        assert_eq!(
            circle.encode(&Shape::Rect(1.0, 1.0)),
            Err(EncodeError::CaseMismatch)
        );
    }

    #[test]
    fn selected_case_inner_error_propagates() {
        let c = union(vec![
            case(
                |n: &i32| Some(*n),
                |n| n,
                satisfies(|n: &i32| *n > 0, int()),
            ),
            case(|n: &i32| Some(*n), |n| n, int()),
        ]);
        assert_eq!(c.encode(&-1), Err(EncodeError::OutOfDomain));
    }

    #[test]
    fn string_or_number() {
        #[derive(Debug, Clone, PartialEq)]
        enum Id {
            Name(String),
            Num(i32),
        }
        let c = union(vec![
            case(
                |id: &Id| match id {
                    Id::Name(s) => Some(s.clone()),
                    _ => None,
                },
                Id::Name,
                string(),
            ),
            case(
                |id: &Id| match id {
                    Id::Num(n) => Some(*n),
                    _ => None,
                },
                Id::Num,
                conv(|n: &i32| *n, |n| n, int()),
            ),
        ]);
        assert_eq!(c.decode(&v(json!("x"))), Ok(Id::Name("x".to_string())));
        assert_eq!(c.decode(&v(json!(4))), Ok(Id::Num(4)));
        assert_eq!(c.encode(&Id::Num(4)), Ok(v(json!(4))));
    }
}
