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

//! # Integer Ranges
//!
//! `IntRange` is a range over arbitrary-precision integers with a step and a
//! direction. Iteration is lazy, so ranges that are unbounded in the
//! direction of travel can still be consumed with `take` and friends.
//!
//! The direction is carried by `lower_is_start`: iteration starts at the
//! lower endpoint when it is `true` and at the upper endpoint otherwise. A
//! step whose sign disagrees with the direction leaves nothing to visit, so
//! such a range is normalized to the empty range.

use crate::{
    error::{RangeError, Result},
    math::{
        bound::BoundType,
        extended::Extended,
        range::{Range, Size},
    },
};
use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::{cmp::Ordering, iter::FusedIterator};

/// Conversion into an integer endpoint that may be infinite.
///
/// # Examples
///
/// ```rust
/// # use stride_core::math::{extended::Extended, int_range::IntoIntEndpoint};
/// # use num_bigint::BigInt;
///
/// assert_eq!(7u8.into_int_endpoint(), Extended::Finite(BigInt::from(7)));
/// assert_eq!(Extended::<BigInt>::NegInf.into_int_endpoint(), Extended::NegInf);
/// ```
pub trait IntoIntEndpoint {
    /// Converts `self` into an extended integer.
    fn into_int_endpoint(self) -> Extended<BigInt>;
}

macro_rules! impl_into_int_endpoint {
    ($($t:ty),*) => {
        $(
            impl IntoIntEndpoint for $t {
                #[inline]
                fn into_int_endpoint(self) -> Extended<BigInt> {
                    Extended::Finite(BigInt::from(self))
                }
            }
        )*
    };
}

impl_into_int_endpoint!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, BigInt);

impl IntoIntEndpoint for &BigInt {
    #[inline]
    fn into_int_endpoint(self) -> Extended<BigInt> {
        Extended::Finite(self.clone())
    }
}

impl IntoIntEndpoint for Extended<BigInt> {
    #[inline]
    fn into_int_endpoint(self) -> Extended<BigInt> {
        self
    }
}

/// A stepped range over the integers.
///
/// Equality compares the closed forms and the step, so `(0..4)` and
/// `[1..3]` with the same step are equal.
///
/// # Examples
///
/// ```rust
/// # use stride_core::math::int_range::IntRange;
/// # use num_bigint::BigInt;
///
/// let r = IntRange::closed(1, 5).steps(-2).unwrap();
/// let values: Vec<BigInt> = r.iter().collect();
/// assert_eq!(values, vec![BigInt::from(5), BigInt::from(3), BigInt::from(1)]);
/// ```
#[derive(Debug, Clone)]
pub struct IntRange {
    range: Range<BigInt>,
    step: BigInt,
    lower_is_start: bool,
}

impl IntRange {
    /// Creates a new integer range.
    ///
    /// When `lower_is_start` is `None` the direction follows the sign of
    /// `step`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InfiniteClosedBound`] if a closed bound is paired
    /// with an infinite endpoint, and [`RangeError::ZeroStep`] if `step` is
    /// zero.
    pub fn new(
        lower_bound: BoundType,
        lower: impl IntoIntEndpoint,
        upper: impl IntoIntEndpoint,
        upper_bound: BoundType,
        step: impl Into<BigInt>,
        lower_is_start: Option<bool>,
    ) -> Result<Self> {
        let range = Range::new(
            lower_bound,
            lower.into_int_endpoint(),
            upper.into_int_endpoint(),
            upper_bound,
        )?;
        let step = step.into();
        if step.is_zero() {
            return Err(RangeError::ZeroStep);
        }
        let lower_is_start = lower_is_start.unwrap_or_else(|| step.is_positive());
        Ok(Self::from_parts(range, step, lower_is_start))
    }

    fn from_parts(range: Range<BigInt>, step: BigInt, lower_is_start: bool) -> Self {
        let candidate = Self {
            range,
            step,
            lower_is_start,
        };
        if candidate.range.is_empty() || candidate.size() == Size::Finite(BigInt::zero()) {
            Self::empty()
        } else {
            candidate
        }
    }

    /// Wraps a range, picking the direction the named constructors would.
    ///
    /// A range bounded only from above counts down from its upper endpoint,
    /// every other range counts up from its lower endpoint.
    pub(crate) fn from_range(range: Range<BigInt>) -> Self {
        let descending = range.is_lower_infinite() && range.is_upper_finite();
        if descending {
            Self::from_parts(range, -BigInt::one(), false)
        } else {
            Self::from_parts(range, BigInt::one(), true)
        }
    }

    #[inline]
    fn ascending(range: Range<BigInt>) -> Self {
        Self::from_parts(range, BigInt::one(), true)
    }

    #[inline]
    fn descending(range: Range<BigInt>) -> Self {
        Self::from_parts(range, -BigInt::one(), false)
    }

    /// Creates `(a, b)` counting up by one.
    #[inline]
    pub fn open(lower: impl IntoIntEndpoint, upper: impl IntoIntEndpoint) -> Self {
        Self::ascending(Range::open(
            lower.into_int_endpoint(),
            upper.into_int_endpoint(),
        ))
    }

    /// Creates `[a, b]` counting up by one.
    #[inline]
    pub fn closed(lower: impl Into<BigInt>, upper: impl Into<BigInt>) -> Self {
        Self::ascending(Range::closed(lower.into(), upper.into()))
    }

    /// Creates `[a, b)` counting up by one.
    #[inline]
    pub fn closed_open(lower: impl Into<BigInt>, upper: impl IntoIntEndpoint) -> Self {
        Self::ascending(Range::closed_open(lower.into(), upper.into_int_endpoint()))
    }

    /// Creates `(a, b]` counting up by one.
    #[inline]
    pub fn open_closed(lower: impl IntoIntEndpoint, upper: impl Into<BigInt>) -> Self {
        Self::ascending(Range::open_closed(lower.into_int_endpoint(), upper.into()))
    }

    /// Creates `(a, +∞)` or `[a, +∞)` counting up by one.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InfiniteClosedBound`] for a closed infinite `a`.
    #[inline]
    pub fn down_to(bound_type: BoundType, lower: impl IntoIntEndpoint) -> Result<Self> {
        Range::down_to(bound_type, lower.into_int_endpoint()).map(Self::ascending)
    }

    /// Creates `(a, +∞)` counting up by one.
    #[inline]
    pub fn greater_than(lower: impl IntoIntEndpoint) -> Self {
        Self::ascending(Range::greater_than(lower.into_int_endpoint()))
    }

    /// Creates `[a, +∞)` counting up by one.
    #[inline]
    pub fn at_least(lower: impl Into<BigInt>) -> Self {
        Self::ascending(Range::at_least(lower.into()))
    }

    /// Creates `(-∞, b)` or `(-∞, b]` counting down by one.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InfiniteClosedBound`] for a closed infinite `b`.
    #[inline]
    pub fn up_to(upper: impl IntoIntEndpoint, bound_type: BoundType) -> Result<Self> {
        Range::up_to(upper.into_int_endpoint(), bound_type).map(Self::descending)
    }

    /// Creates `(-∞, b)` counting down by one.
    #[inline]
    pub fn less_than(upper: impl IntoIntEndpoint) -> Self {
        Self::descending(Range::less_than(upper.into_int_endpoint()))
    }

    /// Creates `(-∞, b]` counting down by one.
    #[inline]
    pub fn at_most(upper: impl Into<BigInt>) -> Self {
        Self::descending(Range::at_most(upper.into()))
    }

    /// Creates the range over every integer.
    #[inline]
    pub fn all() -> Self {
        Self::ascending(Range::all())
    }

    /// Returns the canonical empty integer range.
    #[inline]
    pub fn empty() -> Self {
        Self {
            range: Range::empty(),
            step: BigInt::one(),
            lower_is_start: true,
        }
    }

    /// Returns a copy with a new step, iterating from the lower endpoint when
    /// the step is positive.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::ZeroStep`] if `step` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::int_range::IntRange;
    ///
    /// let evens = IntRange::closed(0, 10).steps(2).unwrap();
    /// assert_eq!(evens.iter().count(), 6);
    /// assert!(IntRange::closed(0, 10).steps(0).is_err());
    /// ```
    pub fn steps(&self, step: impl Into<BigInt>) -> Result<Self> {
        let step = step.into();
        let lower_is_start = step.is_positive();
        self.steps_with_start(step, lower_is_start)
    }

    /// Returns a copy with a new step and an explicit direction.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::ZeroStep`] if `step` is zero.
    pub fn steps_with_start(&self, step: impl Into<BigInt>, lower_is_start: bool) -> Result<Self> {
        let step = step.into();
        if step.is_zero() {
            return Err(RangeError::ZeroStep);
        }
        Ok(Self::from_parts(self.range.clone(), step, lower_is_start))
    }

    /// Returns the step.
    #[inline]
    pub fn step(&self) -> &BigInt {
        &self.step
    }

    /// Returns `true` if iteration starts at the lower endpoint.
    #[inline]
    pub fn lower_is_start(&self) -> bool {
        self.lower_is_start
    }

    /// Returns the underlying continuous range.
    #[inline]
    pub fn as_range(&self) -> &Range<BigInt> {
        &self.range
    }

    /// Returns `true` if the range visits no integer.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Returns `true` if `value` lies between the endpoints.
    ///
    /// The step is not consulted.
    #[inline]
    pub fn includes(&self, value: &BigInt) -> bool {
        self.range.includes(value)
    }

    /// Returns `true` if every integer of `other` lies within `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::int_range::IntRange;
    ///
    /// assert!(IntRange::closed(1, 9).encloses(&IntRange::open(0, 10)));
    /// ```
    pub fn encloses(&self, other: &Self) -> bool {
        self.to_closed_range()
            .range
            .encloses(&other.to_closed_range().range)
    }

    /// Returns a copy of this range.
    #[inline]
    pub fn to_int_range(&self) -> Self {
        self.clone()
    }

    /// Returns the number of integers visited by iteration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::{int_range::IntRange, range::Size};
    /// # use num_bigint::BigInt;
    ///
    /// assert_eq!(IntRange::closed(1, 10).steps(3).unwrap().size(), Size::Finite(BigInt::from(4)));
    /// assert_eq!(IntRange::at_least(0).size(), Size::Infinite);
    /// ```
    pub fn size(&self) -> Size<BigInt> {
        let Some((lower, lower_bound, upper, upper_bound)) = self.range.endpoints() else {
            return Size::Finite(BigInt::zero());
        };
        let (Extended::Finite(lower), Extended::Finite(upper)) = (lower, upper) else {
            return Size::Infinite;
        };
        if self.step.is_positive() != self.lower_is_start {
            return Size::Finite(BigInt::zero());
        }

        let lower = if lower_bound.is_open() { lower + 1 } else { lower.clone() };
        let upper = if upper_bound.is_open() { upper - 1 } else { upper.clone() };
        let span = if self.lower_is_start {
            upper - lower
        } else {
            lower - upper
        };

        let against_step = (self.step.is_positive() && span.is_negative())
            || (self.step.is_negative() && span.is_positive());
        if against_step {
            return Size::Finite(BigInt::zero());
        }
        Size::Finite(span.abs() / self.step.abs() + 1)
    }

    /// Returns the equivalent range with every finite endpoint closed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::int_range::IntRange;
    ///
    /// assert_eq!(IntRange::open(0, 4).to_closed_range().to_string(), "[1..3]");
    /// ```
    pub fn to_closed_range(&self) -> Self {
        let Some((lower, lower_bound, upper, upper_bound)) = self.range.endpoints() else {
            return self.clone();
        };
        let lower = match lower {
            Extended::Finite(v) if lower_bound.is_open() => Extended::Finite(v + 1),
            other => other.clone(),
        };
        let upper = match upper {
            Extended::Finite(v) if upper_bound.is_open() => Extended::Finite(v - 1),
            other => other.clone(),
        };
        let closed_if_finite = |e: &Extended<BigInt>| {
            if e.is_finite() {
                BoundType::Closed
            } else {
                BoundType::Open
            }
        };

        Self {
            range: Range::normalized(
                closed_if_finite(&lower),
                lower.clone(),
                upper.clone(),
                closed_if_finite(&upper),
            ),
            step: self.step.clone(),
            lower_is_start: self.lower_is_start,
        }
    }

    /// Returns a lazy iterator over the integers of this range.
    ///
    /// A range whose start lies at infinity has no first element; iterating
    /// it yields nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::int_range::IntRange;
    /// # use num_bigint::BigInt;
    ///
    /// let firsts: Vec<BigInt> = IntRange::at_most(0).iter().take(3).collect();
    /// assert_eq!(firsts, vec![BigInt::from(0), BigInt::from(-1), BigInt::from(-2)]);
    ///
    /// assert_eq!(IntRange::all().iter().next(), None);
    /// ```
    pub fn iter(&self) -> IntRangeIter {
        let closed = self.to_closed_range();
        let Some((lower, _, upper, _)) = closed.range.endpoints() else {
            return IntRangeIter::exhausted(self.step.clone());
        };

        let (start, end) = if self.lower_is_start {
            (lower, upper)
        } else {
            (upper, lower)
        };
        let Extended::Finite(start) = start else {
            log::debug!("{self} starts at {start}; iteration yields nothing");
            return IntRangeIter::exhausted(self.step.clone());
        };

        IntRangeIter {
            cursor: Some(start.clone()),
            end: end.clone(),
            step: self.step.clone(),
        }
    }
}

impl Default for IntRange {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl IntRange {
    /// The value a single-element range yields, taken from its start side.
    fn only_value(&self) -> Option<BigInt> {
        let (lower, lower_bound, upper, upper_bound) = self.range.endpoints()?;
        if self.lower_is_start {
            let value = lower.finite()?;
            Some(if lower_bound.is_open() { value + 1 } else { value.clone() })
        } else {
            let value = upper.finite()?;
            Some(if upper_bound.is_open() { value - 1 } else { value.clone() })
        }
    }
}

impl PartialEq for IntRange {
    fn eq(&self, other: &Self) -> bool {
        self.step == other.step && self.to_closed_range().range == other.to_closed_range().range
    }
}

impl Eq for IntRange {}

impl std::fmt::Display for IntRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let size = self.size();
        let Some((lower, lower_bound, upper, upper_bound)) = self.range.endpoints() else {
            return write!(f, "∅");
        };
        if size == Size::Finite(BigInt::zero()) {
            return write!(f, "∅");
        }

        let magnitude = self.step.abs();
        let scale = if magnitude.is_one() {
            String::new()
        } else {
            magnitude.to_string()
        };

        let first_positive = BigInt::from(if lower_bound.is_closed() { 1 } else { 0 });
        let last_negative = BigInt::from(if upper_bound.is_closed() { -1 } else { 0 });

        if lower.is_infinite() && upper.is_infinite() {
            write!(f, "{scale}ℤ")
        } else if upper.is_infinite() && lower.finite() == Some(&first_positive) {
            write!(f, "{scale}ℤ⁺")
        } else if lower.is_infinite() && upper.finite() == Some(&last_negative) {
            write!(f, "{scale}ℤ⁻")
        } else if let Some(only) = self
            .only_value()
            .filter(|_| size == Size::Finite(BigInt::one()))
        {
            write!(f, "{{{only}}}")
        } else {
            write!(
                f,
                "{}{lower}..{upper}{}",
                lower_bound.brackets().0,
                upper_bound.brackets().1
            )?;
            if !magnitude.is_one() {
                write!(f, " step {}", self.step)?;
            }
            Ok(())
        }
    }
}

/// A lazy iterator over the integers of an [`IntRange`].
#[derive(Debug, Clone)]
pub struct IntRangeIter {
    cursor: Option<BigInt>,
    end: Extended<BigInt>,
    step: BigInt,
}

impl IntRangeIter {
    #[inline]
    fn exhausted(step: BigInt) -> Self {
        Self {
            cursor: None,
            end: Extended::NegInf,
            step,
        }
    }

    #[inline]
    fn admits(&self, value: &BigInt) -> bool {
        let past = if self.step.is_positive() {
            Ordering::Less
        } else {
            Ordering::Greater
        };
        self.end.cmp_value(value) != Some(past)
    }
}

impl Iterator for IntRangeIter {
    type Item = BigInt;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.cursor.take()?;
        if !self.admits(&current) {
            return None;
        }
        self.cursor = Some(&current + &self.step);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let Some(cursor) = &self.cursor else {
            return (0, Some(0));
        };
        let Extended::Finite(end) = &self.end else {
            return (usize::MAX, None);
        };
        if !self.admits(cursor) {
            return (0, Some(0));
        }
        let remaining: BigInt = (end - cursor).abs() / self.step.abs() + 1;
        match remaining.to_usize() {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for IntRangeIter {}

impl IntoIterator for IntRange {
    type Item = BigInt;
    type IntoIter = IntRangeIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &IntRange {
    type Item = BigInt;
    type IntoIter = IntRangeIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::bound::BoundSide;
    use proptest::prelude::*;

    fn ints(values: &[i64]) -> Vec<BigInt> {
        values.iter().copied().map(BigInt::from).collect()
    }

    #[test]
    fn test_negative_step_counts_down() {
        let r = IntRange::closed(1, 5).steps(-2).unwrap();
        assert!(!r.lower_is_start());
        assert_eq!(r.size(), Size::Finite(BigInt::from(3)));
        assert_eq!(r.iter().collect::<Vec<_>>(), ints(&[5, 3, 1]));
        assert_eq!(r.to_string(), "[1..5] step -2");
    }

    #[test]
    fn test_open_unit_gap_is_empty() {
        let r = IntRange::open(4, 5);
        assert!(r.is_empty());
        assert_eq!(r.size(), Size::Finite(BigInt::zero()));
        assert_eq!(r.to_string(), "∅");
        assert_eq!(r, IntRange::empty());
        assert_eq!(r.iter().next(), None);
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(
            IntRange::new(BoundType::Closed, 0, 5, BoundType::Closed, 0, None).unwrap_err(),
            RangeError::ZeroStep
        );
        assert_eq!(
            IntRange::new(
                BoundType::Closed,
                Extended::NegInf,
                5,
                BoundType::Closed,
                1,
                None
            )
            .unwrap_err(),
            RangeError::InfiniteClosedBound {
                side: BoundSide::Lower
            }
        );
        assert!(IntRange::up_to(Extended::PosInf, BoundType::Closed).is_err());
        assert!(IntRange::closed(0, 3).steps_with_start(0, true).is_err());
    }

    #[test]
    fn test_new_direction_defaults_to_step_sign() {
        let up = IntRange::new(BoundType::Closed, 0, 3, BoundType::Open, 1, None).unwrap();
        assert!(up.lower_is_start());
        assert_eq!(up.iter().collect::<Vec<_>>(), ints(&[0, 1, 2]));

        let down = IntRange::new(BoundType::Open, 0, 3, BoundType::Closed, -1, None).unwrap();
        assert!(!down.lower_is_start());
        assert_eq!(down.iter().collect::<Vec<_>>(), ints(&[3, 2, 1]));
    }

    #[test]
    fn test_mismatched_direction_is_empty() {
        let r = IntRange::new(BoundType::Closed, 1, 5, BoundType::Closed, 1, Some(false)).unwrap();
        assert!(r.is_empty());
        assert_eq!(r.size(), Size::Finite(BigInt::zero()));
    }

    #[test]
    fn test_named_constructor_directions() {
        assert_eq!(IntRange::at_most(3).step(), &BigInt::from(-1));
        assert!(!IntRange::less_than(3).lower_is_start());
        assert!(!IntRange::up_to(3, BoundType::Open).unwrap().lower_is_start());
        assert!(IntRange::at_least(3).lower_is_start());
        assert!(IntRange::greater_than(3).lower_is_start());
        assert!(IntRange::down_to(BoundType::Open, 3).unwrap().lower_is_start());
        assert_eq!(IntRange::all().step(), &BigInt::one());
    }

    #[test]
    fn test_size() {
        assert_eq!(IntRange::closed(1, 10).size(), Size::Finite(BigInt::from(10)));
        assert_eq!(IntRange::closed_open(1, 10).size(), Size::Finite(BigInt::from(9)));
        assert_eq!(
            IntRange::closed(1, 10).steps(4).unwrap().size(),
            Size::Finite(BigInt::from(3))
        );
        assert_eq!(IntRange::closed(7, 7).size(), Size::Finite(BigInt::one()));
        assert_eq!(IntRange::greater_than(7).size(), Size::Infinite);
        assert_eq!(IntRange::all().size(), Size::Infinite);
    }

    #[test]
    fn test_huge_values() {
        let big: BigInt = BigInt::from(u128::MAX) * 4;
        let r = IntRange::closed(big.clone(), &big + 2);
        assert_eq!(r.size(), Size::Finite(BigInt::from(3)));
        assert_eq!(r.iter().last(), Some(&big + 2));
    }

    #[test]
    fn test_display_forms() {
        assert_eq!(IntRange::all().to_string(), "ℤ");
        assert_eq!(IntRange::all().steps(3).unwrap().to_string(), "3ℤ");
        assert_eq!(IntRange::at_least(1).to_string(), "ℤ⁺");
        assert_eq!(IntRange::greater_than(0).to_string(), "ℤ⁺");
        assert_eq!(IntRange::at_least(1).steps(2).unwrap().to_string(), "2ℤ⁺");
        assert_eq!(IntRange::at_most(-1).to_string(), "ℤ⁻");
        assert_eq!(IntRange::less_than(0).to_string(), "ℤ⁻");
        assert_eq!(IntRange::at_most(-1).steps(-2).unwrap().to_string(), "2ℤ⁻");
        assert_eq!(IntRange::at_least(5).to_string(), "[5..+∞)");
        assert_eq!(IntRange::at_most(3).to_string(), "(-∞..3]");
        assert_eq!(IntRange::open(2, 4).to_string(), "{3}");
        assert_eq!(IntRange::closed(3, 3).to_string(), "{3}");
        assert_eq!(IntRange::open_closed(2, 3).to_string(), "{3}");
        assert_eq!(IntRange::closed(3, 7).steps(5).unwrap().to_string(), "{3}");
        assert_eq!(IntRange::closed(3, 7).steps(-5).unwrap().to_string(), "{7}");
        assert_eq!(IntRange::closed_open(3, 8).steps(-5).unwrap().to_string(), "{7}");
        assert_eq!(IntRange::closed_open(0, 10).steps(5).unwrap().to_string(), "[0..10) step 5");
    }

    #[test]
    fn test_equality_uses_closed_form() {
        assert_eq!(IntRange::open(0, 4), IntRange::closed(1, 3));
        assert_ne!(IntRange::closed(1, 3), IntRange::closed(1, 3).steps(2).unwrap());
        assert_eq!(IntRange::closed(1, 3).to_closed_range(), IntRange::closed(1, 3));
    }

    #[test]
    fn test_includes_and_encloses() {
        let r = IntRange::open(0, 10);
        assert!(r.includes(&BigInt::from(1)));
        assert!(!r.includes(&BigInt::from(10)));
        assert!(IntRange::closed(1, 9).encloses(&r));
        assert!(r.encloses(&IntRange::closed(1, 9)));
        assert!(!IntRange::closed(1, 8).encloses(&r));
        assert!(IntRange::all().encloses(&IntRange::at_most(3)));
    }

    #[test]
    fn test_illegal_directions_yield_nothing() {
        assert_eq!(IntRange::all().iter().next(), None);
        assert_eq!(IntRange::at_least(5).steps(-1).unwrap().iter().next(), None);
        assert_eq!(
            IntRange::at_most(5).steps_with_start(1, true).unwrap().iter().next(),
            None
        );
        assert_eq!(IntRange::at_least(5).steps(-1).unwrap().size(), Size::Infinite);
    }

    #[test]
    fn test_unbounded_iteration_is_lazy() {
        let firsts: Vec<BigInt> = IntRange::greater_than(10).steps(5).unwrap().iter().take(3).collect();
        assert_eq!(firsts, ints(&[11, 16, 21]));

        let mut it = IntRange::at_least(0).iter();
        assert_eq!(it.size_hint(), (usize::MAX, None));
        assert_eq!(it.nth(1_000), Some(BigInt::from(1_000)));
    }

    #[test]
    fn test_iterator_is_fused_and_sized() {
        let mut it = IntRange::closed(0, 9).steps(3).unwrap().into_iter();
        assert_eq!(it.size_hint(), (4, Some(4)));
        assert_eq!(it.by_ref().count(), 4);
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);

        let r = IntRange::closed(0, 2);
        let mut sum = BigInt::zero();
        for v in &r {
            sum += v;
        }
        assert_eq!(sum, BigInt::from(3));
    }

    #[test]
    fn test_to_int_range_is_identity() {
        let r = IntRange::closed(1, 5).steps(-2).unwrap();
        assert_eq!(r.to_int_range(), r);
        assert_eq!(r.as_range().to_int_range(), IntRange::closed(1, 5));
    }

    fn bound() -> impl Strategy<Value = BoundType> {
        any::<bool>().prop_map(|closed| if closed { BoundType::Closed } else { BoundType::Open })
    }

    proptest! {
        #[test]
        fn prop_size_matches_iteration(
            lower in -1000i64..1000,
            upper in -1000i64..1000,
            lb in bound(),
            ub in bound(),
            magnitude in 1i64..=10,
            negative in any::<bool>()
        ) {
            let step = if negative { -magnitude } else { magnitude };
            let r = IntRange::new(lb, lower, upper, ub, step, None).unwrap();
            let count = r.iter().count();
            prop_assert_eq!(r.size(), Size::Finite(BigInt::from(count)));
            prop_assert_eq!(r.iter().size_hint(), (count, Some(count)));
            prop_assert_eq!(r.is_empty(), count == 0);
        }

        #[test]
        fn prop_iteration_stays_inside(
            lower in -200i64..200,
            upper in -200i64..200,
            lb in bound(),
            ub in bound(),
            step in prop_oneof![-7i64..=-1, 1i64..=7]
        ) {
            let r = IntRange::new(lb, lower, upper, ub, step, None).unwrap();
            for v in r.iter() {
                prop_assert!(r.includes(&v));
            }
        }
    }
}
