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

//! Scalar element types for ranges.
//!
//! A range only needs its endpoints to be ordered. Measuring a range needs
//! more: a distance between two endpoints. The distance is looked up lazily,
//! so a range over a type without a distance can be built, queried and
//! combined freely and only fails when `size` is asked for.

use crate::error::{RangeError, Result};
use crate::math::extended::Extended;
use num_bigint::BigInt;
use num_traits::Zero;
use std::fmt::{Debug, Display};

/// A scalar type usable as a range endpoint.
///
/// # Examples
///
/// ```rust
/// # use stride_core::num::element::Element;
///
/// assert_eq!(<f64 as Element>::distance(&1.5, &4.0).unwrap(), 2.5);
/// assert!(0.0f64.is_origin());
/// ```
pub trait Element: PartialOrd + Clone + Debug + Display {
    /// The type of the difference between two elements.
    type Distance: Clone + PartialEq + Debug + Display;

    /// The distance reported for degenerate and empty ranges.
    fn zero_distance() -> Self::Distance;

    /// Returns `upper - lower`.
    ///
    /// The default implementation reports the type as unsupported.
    fn distance(lower: &Self, upper: &Self) -> Result<Self::Distance> {
        let _ = (lower, upper);
        Err(RangeError::UnsupportedType {
            type_name: std::any::type_name::<Self>(),
        })
    }

    /// Returns `true` if this value is the origin (zero) of its domain.
    fn is_origin(&self) -> bool {
        false
    }

    /// Lifts a value onto the extended line.
    ///
    /// Types with native infinities map them onto the sentinels so that a
    /// range never stores an infinity as a finite endpoint.
    fn into_extended(self) -> Extended<Self> {
        Extended::Finite(self)
    }
}

macro_rules! impl_element_for_float {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                type Distance = $t;

                #[inline]
                fn zero_distance() -> Self::Distance {
                    0.0
                }

                #[inline]
                fn distance(lower: &Self, upper: &Self) -> Result<Self::Distance> {
                    Ok(upper - lower)
                }

                #[inline]
                fn is_origin(&self) -> bool {
                    *self == 0.0
                }

                #[inline]
                fn into_extended(self) -> Extended<Self> {
                    if self == <$t>::INFINITY {
                        Extended::PosInf
                    } else if self == <$t>::NEG_INFINITY {
                        Extended::NegInf
                    } else {
                        Extended::Finite(self)
                    }
                }
            }
        )*
    };
}

macro_rules! impl_element_for_int {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                type Distance = BigInt;

                #[inline]
                fn zero_distance() -> Self::Distance {
                    BigInt::zero()
                }

                #[inline]
                fn distance(lower: &Self, upper: &Self) -> Result<Self::Distance> {
                    Ok(BigInt::from(*upper) - BigInt::from(*lower))
                }

                #[inline]
                fn is_origin(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_element_for_float!(f32, f64);
impl_element_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Element for BigInt {
    type Distance = BigInt;

    #[inline]
    fn zero_distance() -> Self::Distance {
        BigInt::zero()
    }

    #[inline]
    fn distance(lower: &Self, upper: &Self) -> Result<Self::Distance> {
        Ok(upper - lower)
    }

    #[inline]
    fn is_origin(&self) -> bool {
        self.is_zero()
    }
}

#[cfg(feature = "chrono")]
macro_rules! impl_element_for_time {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                type Distance = chrono::Duration;

                #[inline]
                fn zero_distance() -> Self::Distance {
                    chrono::Duration::zero()
                }

                #[inline]
                fn distance(lower: &Self, upper: &Self) -> Result<Self::Distance> {
                    Ok(*upper - *lower)
                }
            }
        )*
    };
}

#[cfg(feature = "chrono")]
impl_element_for_time!(chrono::DateTime<chrono::Utc>, chrono::NaiveDateTime, chrono::NaiveDate);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[derive(Debug, Clone, PartialEq, PartialOrd)]
    struct Label(&'static str);

    impl Display for Label {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl Element for Label {
        type Distance = usize;

        fn zero_distance() -> Self::Distance {
            0
        }
    }

    #[test]
    fn test_float_distance() {
        assert_eq!(f64::distance(&4.0, &5.0), Ok(1.0));
        assert_eq!(f32::distance(&-1.0, &1.0), Ok(2.0));
    }

    #[test]
    fn test_int_distance_does_not_overflow() {
        let d = i64::distance(&i64::MIN, &i64::MAX).unwrap();
        assert_eq!(d, BigInt::from(u64::MAX));
    }

    #[test]
    fn test_big_distance() {
        let d = BigInt::distance(&BigInt::from(-3), &BigInt::from(7)).unwrap();
        assert_eq!(d, BigInt::from(10));
    }

    #[test]
    fn test_origin() {
        assert!(0i32.is_origin());
        assert!(!1u8.is_origin());
        assert!(BigInt::zero().is_origin());
        assert!((-0.0f64).is_origin());
    }

    #[test]
    fn test_native_infinities_lift_to_sentinels() {
        assert_eq!(f64::INFINITY.into_extended(), Extended::PosInf);
        assert_eq!(f32::NEG_INFINITY.into_extended(), Extended::NegInf);
        assert_eq!(2.5f64.into_extended(), Extended::Finite(2.5));
        assert_eq!(7i32.into_extended(), Extended::Finite(7));
    }

    #[test]
    fn test_unsupported_distance() {
        let err = Label::distance(&Label("a"), &Label("b")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedType);
        assert!(!Label("a").is_origin());
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_time_distance() {
        use chrono::{Duration, NaiveDate};

        let a = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let b = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(NaiveDate::distance(&a, &b), Ok(Duration::days(30)));

        let start = a.and_hms_opt(8, 0, 0).unwrap();
        let end = a.and_hms_opt(9, 30, 0).unwrap();
        assert_eq!(
            chrono::NaiveDateTime::distance(&start, &end),
            Ok(Duration::minutes(90))
        );
    }
}
