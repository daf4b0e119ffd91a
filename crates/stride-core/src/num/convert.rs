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

//! Conversions between element domains.
//!
//! `ToInteger` rounds an element onto the integer lattice (ceiling for lower
//! endpoints, floor for upper endpoints) and `ToFloat` maps it onto `f64`.
//! Both return extended values: a float that is already infinite, or too
//! large to represent, maps onto the matching sentinel. Timestamps convert
//! through milliseconds since the Unix epoch.

use crate::math::extended::Extended;
use num_bigint::BigInt;
use num_traits::{FromPrimitive, ToPrimitive};

/// Conversion of an element onto the integers.
pub trait ToInteger {
    /// Returns `true` if the value already is an integer.
    fn is_integer(&self) -> bool;

    /// Returns the smallest integer not less than this value.
    fn ceil_integer(&self) -> Extended<BigInt>;

    /// Returns the largest integer not greater than this value.
    fn floor_integer(&self) -> Extended<BigInt>;
}

/// Conversion of an element onto `f64`.
pub trait ToFloat {
    /// Returns this value as a float, or a sentinel if it is out of range.
    fn to_float(&self) -> Extended<f64>;
}

/// Maps a float onto the extended integers after rounding with `round`.
///
/// NaN maps to `fallback`, which callers pick so that the resulting range
/// side is unsatisfiable.
fn float_to_integer(value: f64, round: fn(f64) -> f64, fallback: Extended<BigInt>) -> Extended<BigInt> {
    if value.is_nan() {
        return fallback;
    }
    if value == f64::INFINITY {
        return Extended::PosInf;
    }
    if value == f64::NEG_INFINITY {
        return Extended::NegInf;
    }
    BigInt::from_f64(round(value)).map_or(fallback, Extended::Finite)
}

/// Maps a float onto the extended floats, turning infinities into sentinels.
fn float_to_extended(value: f64) -> Extended<f64> {
    if value == f64::INFINITY {
        Extended::PosInf
    } else if value == f64::NEG_INFINITY {
        Extended::NegInf
    } else {
        Extended::Finite(value)
    }
}

macro_rules! impl_convert_for_float {
    ($($t:ty),*) => {
        $(
            impl ToInteger for $t {
                #[inline]
                fn is_integer(&self) -> bool {
                    self.is_finite() && self.fract() == 0.0
                }

                #[inline]
                fn ceil_integer(&self) -> Extended<BigInt> {
                    float_to_integer(f64::from(*self), f64::ceil, Extended::PosInf)
                }

                #[inline]
                fn floor_integer(&self) -> Extended<BigInt> {
                    float_to_integer(f64::from(*self), f64::floor, Extended::NegInf)
                }
            }

            impl ToFloat for $t {
                #[inline]
                fn to_float(&self) -> Extended<f64> {
                    float_to_extended(f64::from(*self))
                }
            }
        )*
    };
}

macro_rules! impl_convert_for_int {
    ($($t:ty),*) => {
        $(
            impl ToInteger for $t {
                #[inline]
                fn is_integer(&self) -> bool {
                    true
                }

                #[inline]
                fn ceil_integer(&self) -> Extended<BigInt> {
                    Extended::Finite(BigInt::from(*self))
                }

                #[inline]
                fn floor_integer(&self) -> Extended<BigInt> {
                    Extended::Finite(BigInt::from(*self))
                }
            }

            impl ToFloat for $t {
                #[inline]
                fn to_float(&self) -> Extended<f64> {
                    float_to_extended(*self as f64)
                }
            }
        )*
    };
}

impl_convert_for_float!(f32, f64);
impl_convert_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl ToInteger for BigInt {
    #[inline]
    fn is_integer(&self) -> bool {
        true
    }

    #[inline]
    fn ceil_integer(&self) -> Extended<BigInt> {
        Extended::Finite(self.clone())
    }

    #[inline]
    fn floor_integer(&self) -> Extended<BigInt> {
        Extended::Finite(self.clone())
    }
}

impl ToFloat for BigInt {
    fn to_float(&self) -> Extended<f64> {
        match self.to_f64() {
            Some(value) => float_to_extended(value),
            None if self.sign() == num_bigint::Sign::Minus => Extended::NegInf,
            None => Extended::PosInf,
        }
    }
}

#[cfg(feature = "chrono")]
mod time {
    use super::*;
    use chrono::{DateTime, NaiveDateTime, Utc};

    impl ToInteger for DateTime<Utc> {
        #[inline]
        fn is_integer(&self) -> bool {
            true
        }

        #[inline]
        fn ceil_integer(&self) -> Extended<BigInt> {
            Extended::Finite(BigInt::from(self.timestamp_millis()))
        }

        #[inline]
        fn floor_integer(&self) -> Extended<BigInt> {
            Extended::Finite(BigInt::from(self.timestamp_millis()))
        }
    }

    impl ToFloat for DateTime<Utc> {
        #[inline]
        fn to_float(&self) -> Extended<f64> {
            Extended::Finite(self.timestamp_millis() as f64)
        }
    }

    impl ToInteger for NaiveDateTime {
        #[inline]
        fn is_integer(&self) -> bool {
            true
        }

        #[inline]
        fn ceil_integer(&self) -> Extended<BigInt> {
            self.and_utc().ceil_integer()
        }

        #[inline]
        fn floor_integer(&self) -> Extended<BigInt> {
            self.and_utc().floor_integer()
        }
    }

    impl ToFloat for NaiveDateTime {
        #[inline]
        fn to_float(&self) -> Extended<f64> {
            self.and_utc().to_float()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_rounding() {
        assert!(!1.5f64.is_integer());
        assert!(2.0f64.is_integer());
        assert_eq!(1.5f64.ceil_integer(), Extended::Finite(BigInt::from(2)));
        assert_eq!(1.5f64.floor_integer(), Extended::Finite(BigInt::from(1)));
        assert_eq!((-1.5f64).ceil_integer(), Extended::Finite(BigInt::from(-1)));
        assert_eq!((-1.5f64).floor_integer(), Extended::Finite(BigInt::from(-2)));
    }

    #[test]
    fn test_float_non_finite() {
        assert!(!f64::INFINITY.is_integer());
        assert_eq!(f64::INFINITY.ceil_integer(), Extended::PosInf);
        assert_eq!(f64::NEG_INFINITY.floor_integer(), Extended::NegInf);
        assert_eq!(f64::NAN.ceil_integer(), Extended::PosInf);
        assert_eq!(f64::NAN.floor_integer(), Extended::NegInf);
        assert_eq!(f64::INFINITY.to_float(), Extended::PosInf);
    }

    #[test]
    fn test_int_conversions() {
        assert!(7u16.is_integer());
        assert_eq!((-7i32).floor_integer(), Extended::Finite(BigInt::from(-7)));
        assert_eq!(7i64.to_float(), Extended::Finite(7.0));
    }

    #[test]
    fn test_big_to_float() {
        assert_eq!(BigInt::from(3).to_float(), Extended::Finite(3.0));
        let huge = BigInt::from(10).pow(400);
        assert_eq!(huge.to_float(), Extended::PosInf);
        assert_eq!((-huge).to_float(), Extended::NegInf);
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_time_to_millis() {
        use chrono::{TimeZone, Utc};

        let t = Utc.timestamp_millis_opt(1_500).unwrap();
        assert_eq!(t.ceil_integer(), Extended::Finite(BigInt::from(1_500)));
        assert_eq!(t.naive_utc().to_float(), Extended::Finite(1_500.0));
    }
}
