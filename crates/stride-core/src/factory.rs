// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Range Factory
//!
//! Python-style helpers for building integer ranges from a start, an end
//! and a step, where the end may also be written as an infinity token such
//! as `"-oo"` or `"∞"`.
//!
//! A start at or below the end counts up over `[start, end)`; otherwise the
//! range is `(end, start]` counted down from `start`. The step defaults to
//! `1`, so a descending range needs an explicit negative step to visit
//! anything.

use crate::{
    error::{RangeError, Result},
    math::{
        extended::{le, Extended},
        int_range::{IntRange, IntoIntEndpoint},
    },
};
use num_bigint::BigInt;

/// Tokens read as `+∞`.
pub const POSITIVE_INFINITY_TOKENS: [&str; 6] = ["+inf", "+oo", "+∞", "inf", "oo", "∞"];

/// Tokens read as `-∞`.
pub const NEGATIVE_INFINITY_TOKENS: [&str; 3] = ["-inf", "-oo", "-∞"];

/// Conversion of user input into a range endpoint.
pub trait IntoEndpoint {
    /// Converts `self` into an extended integer.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidEndpoint`] for text that is neither an
    /// infinity token nor an integer.
    fn into_endpoint(self) -> Result<Extended<BigInt>>;
}

macro_rules! impl_into_endpoint {
    ($($t:ty),*) => {
        $(
            impl IntoEndpoint for $t {
                #[inline]
                fn into_endpoint(self) -> Result<Extended<BigInt>> {
                    Ok(self.into_int_endpoint())
                }
            }
        )*
    };
}

impl_into_endpoint!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, BigInt, Extended<BigInt>
);

/// Parses an infinity token or a decimal integer.
///
/// # Examples
///
/// ```rust
/// # use stride_core::{factory::parse_endpoint, math::extended::Extended};
/// # use num_bigint::BigInt;
///
/// assert_eq!(parse_endpoint("-oo").unwrap(), Extended::NegInf);
/// assert_eq!(parse_endpoint("∞").unwrap(), Extended::PosInf);
/// assert_eq!(parse_endpoint("42").unwrap(), Extended::Finite(BigInt::from(42)));
/// assert!(parse_endpoint("forty-two").is_err());
/// ```
pub fn parse_endpoint(token: &str) -> Result<Extended<BigInt>> {
    if POSITIVE_INFINITY_TOKENS.contains(&token) {
        return Ok(Extended::PosInf);
    }
    if NEGATIVE_INFINITY_TOKENS.contains(&token) {
        return Ok(Extended::NegInf);
    }
    token
        .parse::<BigInt>()
        .map(Extended::Finite)
        .map_err(|_| RangeError::InvalidEndpoint {
            token: token.to_string(),
        })
}

impl IntoEndpoint for &str {
    #[inline]
    fn into_endpoint(self) -> Result<Extended<BigInt>> {
        parse_endpoint(self)
    }
}

impl IntoEndpoint for String {
    #[inline]
    fn into_endpoint(self) -> Result<Extended<BigInt>> {
        parse_endpoint(&self)
    }
}

impl IntoEndpoint for &String {
    #[inline]
    fn into_endpoint(self) -> Result<Extended<BigInt>> {
        parse_endpoint(self)
    }
}

/// Returns `range_by(0, end, 1)`.
///
/// # Examples
///
/// ```rust
/// # use stride_core::factory::range;
/// # use num_bigint::BigInt;
///
/// let values: Vec<BigInt> = range(3).unwrap().into_iter().collect();
/// assert_eq!(values, vec![BigInt::from(0), BigInt::from(1), BigInt::from(2)]);
/// ```
#[inline]
pub fn range(end: impl IntoEndpoint) -> Result<IntRange> {
    range_by(0, end, 1)
}

/// Returns `range_by(start, end, 1)`.
#[inline]
pub fn range_between(start: impl Into<BigInt>, end: impl IntoEndpoint) -> Result<IntRange> {
    range_by(start, end, 1)
}

/// Builds `[start, end)` when `start <= end` and `(end, start]` counted down
/// from `start` otherwise.
///
/// # Errors
///
/// Returns [`RangeError::InvalidEndpoint`] for an unparsable `end` and
/// [`RangeError::ZeroStep`] for a zero `step`.
///
/// # Examples
///
/// ```rust
/// # use stride_core::factory::range_by;
/// # use num_bigint::BigInt;
///
/// let firsts: Vec<BigInt> = range_by(5, "-oo", -1).unwrap().iter().take(3).collect();
/// assert_eq!(firsts, vec![BigInt::from(5), BigInt::from(4), BigInt::from(3)]);
/// ```
pub fn range_by(
    start: impl Into<BigInt>,
    end: impl IntoEndpoint,
    step: impl Into<BigInt>,
) -> Result<IntRange> {
    use crate::math::bound::BoundType::{Closed, Open};

    let start = Extended::Finite(start.into());
    let end = end.into_endpoint()?;
    if le(&[&start, &end]) {
        IntRange::new(Closed, start, end, Open, step, Some(true))
    } else {
        IntRange::new(Open, end, start, Closed, step, Some(false))
    }
}

/// Builds an [`IntRange`](crate::math::int_range::IntRange) the way
/// [`range`](crate::factory::range), [`range_between`](crate::factory::range_between)
/// and [`range_by`](crate::factory::range_by) do, picking the helper by arity.
///
/// # Examples
///
/// ```rust
/// # use stride_core::range;
///
/// assert_eq!(range!(4).unwrap().to_string(), "[0..4)");
/// assert_eq!(range!(2, "oo").unwrap().to_string(), "[2..+∞)");
/// assert_eq!(range!(10, 0, -5).unwrap().to_string(), "(0..10] step -5");
/// ```
#[macro_export]
macro_rules! range {
    ($end:expr $(,)?) => {
        $crate::factory::range($end)
    };
    ($start:expr, $end:expr $(,)?) => {
        $crate::factory::range_between($start, $end)
    };
    ($start:expr, $end:expr, $step:expr $(,)?) => {
        $crate::factory::range_by($start, $end, $step)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorKind, math::range::Size};

    fn ints(values: &[i64]) -> Vec<BigInt> {
        values.iter().copied().map(BigInt::from).collect()
    }

    #[test]
    fn test_infinity_tokens() {
        for token in POSITIVE_INFINITY_TOKENS {
            assert_eq!(token.into_endpoint(), Ok(Extended::PosInf));
        }
        for token in NEGATIVE_INFINITY_TOKENS {
            assert_eq!(token.to_string().into_endpoint(), Ok(Extended::NegInf));
        }
        assert_eq!("-17".into_endpoint(), Ok(Extended::Finite(BigInt::from(-17))));
    }

    #[test]
    fn test_invalid_token() {
        let err = range("Infinity").unwrap_err();
        assert_eq!(
            err,
            RangeError::InvalidEndpoint {
                token: "Infinity".to_string()
            }
        );
        assert_eq!(err.kind(), ErrorKind::Domain);
    }

    #[test]
    fn test_single_argument_counts_from_zero() {
        let r = range(5).unwrap();
        assert_eq!(r.iter().collect::<Vec<_>>(), ints(&[0, 1, 2, 3, 4]));
        assert!(range(0).unwrap().is_empty());
        assert!(range(-3).unwrap().is_empty());
    }

    #[test]
    fn test_descending_needs_negative_step() {
        assert!(range_between(5, 0).unwrap().is_empty());
        let r = range_by(5, 0, -2).unwrap();
        assert_eq!(r.iter().collect::<Vec<_>>(), ints(&[5, 3, 1]));
    }

    #[test]
    fn test_descending_to_negative_infinity() {
        let r = range_by(5, "-oo", -1).unwrap();
        assert_eq!(r.size(), Size::Infinite);
        assert_eq!(
            r.iter().take(10).collect::<Vec<_>>(),
            ints(&[5, 4, 3, 2, 1, 0, -1, -2, -3, -4])
        );
    }

    #[test]
    fn test_ascending_to_positive_infinity() {
        let r = range_between(-2, "+inf").unwrap();
        assert_eq!(r.iter().take(3).collect::<Vec<_>>(), ints(&[-2, -1, 0]));
        assert_eq!(r.to_string(), "[-2..+∞)");
    }

    #[test]
    fn test_zero_step_rejected() {
        assert_eq!(range_by(0, 10, 0).unwrap_err(), RangeError::ZeroStep);
    }

    #[test]
    fn test_macro_arities() {
        assert_eq!(crate::range!(3).unwrap(), range(3).unwrap());
        assert_eq!(crate::range!(1, 3).unwrap(), IntRange::closed_open(1, 3));
        assert_eq!(
            crate::range!(1, 10, 3).unwrap().iter().collect::<Vec<_>>(),
            ints(&[1, 4, 7])
        );
        assert_eq!(
            crate::range!(0, "oo",).unwrap(),
            IntRange::at_least(0)
        );
    }
}
