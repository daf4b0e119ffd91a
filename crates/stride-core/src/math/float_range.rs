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

//! # Float Ranges
//!
//! `FloatRange` steps through a range of `f64` values. Repeatedly adding a
//! decimal step such as `0.1` drifts off the decimal grid, so each advanced
//! value is rounded back to the number of fractional digits found in the
//! start value and the step.

use crate::{
    error::{RangeError, Result},
    math::{
        bound::BoundType,
        extended::Extended,
        int_range::IntRange,
        range::{Range, Size},
    },
    num::precision::{fraction_digits, round_to},
};
use num_bigint::BigInt;
use num_traits::{FromPrimitive, Zero};
use std::{cmp::Ordering, iter::FusedIterator};

/// Digits kept when dividing the span by the step, enough to absorb binary
/// rounding error without merging distinct step counts.
const QUOTIENT_DIGITS: u32 = 9;

/// A stepped range over `f64`.
///
/// Iteration must begin at a concrete value, so a finite start endpoint has
/// to be closed.
///
/// # Examples
///
/// ```rust
/// # use stride_core::math::float_range::FloatRange;
///
/// let r = FloatRange::closed(0.0, 1.0).steps(0.25).unwrap();
/// let values: Vec<f64> = r.iter().collect();
/// assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FloatRange {
    range: Range<f64>,
    step: f64,
    lower_is_start: bool,
}

impl FloatRange {
    /// Creates a new float range.
    ///
    /// When `lower_is_start` is `None` the direction follows the sign of
    /// `step`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InfiniteClosedBound`] if a closed bound is paired
    /// with an infinite endpoint, [`RangeError::ZeroStep`] if `step` is zero
    /// or NaN, and [`RangeError::OpenStart`] if iteration would begin at a
    /// finite open endpoint. The start is checked as given, so `(5, 5)` is
    /// rejected even though it is empty.
    ///
    /// ```rust
    /// # use stride_core::math::{bound::BoundType, float_range::FloatRange};
    ///
    /// let r = FloatRange::new(BoundType::Open, 5.0, 5.0, BoundType::Open, 1.0, None);
    /// assert!(r.is_err());
    /// ```
    pub fn new(
        lower_bound: BoundType,
        lower: impl Into<Extended<f64>>,
        upper: impl Into<Extended<f64>>,
        upper_bound: BoundType,
        step: f64,
        lower_is_start: Option<bool>,
    ) -> Result<Self> {
        let (lower, upper) = (lower.into().lifted(), upper.into().lifted());
        let range = Range::<f64>::new(lower_bound, lower, upper, upper_bound)?;
        if step.is_nan() || step == 0.0 {
            return Err(RangeError::ZeroStep);
        }
        let lower_is_start = lower_is_start.unwrap_or(step > 0.0);
        let (start, start_bound) = if lower_is_start {
            (lower, lower_bound)
        } else {
            (upper, upper_bound)
        };
        if start.is_finite() && start_bound.is_open() {
            return Err(RangeError::OpenStart);
        }
        Self::from_parts(range, step, lower_is_start)
    }

    fn from_parts(range: Range<f64>, step: f64, lower_is_start: bool) -> Result<Self> {
        let Some((lower, lower_bound, upper, upper_bound)) = range.endpoints() else {
            return Ok(Self::empty());
        };
        let (start, start_bound) = if lower_is_start {
            (lower, lower_bound)
        } else {
            (upper, upper_bound)
        };
        if start.is_finite() && start_bound.is_open() {
            return Err(RangeError::OpenStart);
        }

        let candidate = Self {
            range,
            step,
            lower_is_start,
        };
        if candidate.size() == Size::Finite(BigInt::zero()) {
            Ok(Self::empty())
        } else {
            Ok(candidate)
        }
    }

    /// Wraps a range, picking the direction the named constructors would.
    pub(crate) fn from_range(range: Range<f64>) -> Result<Self> {
        if range.is_lower_infinite() && range.is_upper_finite() {
            Self::from_parts(range, -1.0, false)
        } else {
            Self::from_parts(range, 1.0, true)
        }
    }

    #[inline]
    fn ascending(range: Range<f64>) -> Result<Self> {
        Self::from_parts(range, 1.0, true)
    }

    #[inline]
    fn descending(range: Range<f64>) -> Result<Self> {
        Self::from_parts(range, -1.0, false)
    }

    /// Creates `(a, b)` counting up by one.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::OpenStart`] unless `a` is `-∞`.
    #[inline]
    pub fn open(lower: impl Into<Extended<f64>>, upper: impl Into<Extended<f64>>) -> Result<Self> {
        Self::new(BoundType::Open, lower, upper, BoundType::Open, 1.0, Some(true))
    }

    /// Creates `[a, b]` counting up by one.
    #[inline]
    pub fn closed(lower: f64, upper: f64) -> Self {
        Self::ascending(Range::closed(lower, upper)).unwrap_or_else(|_| Self::empty())
    }

    /// Creates `[a, b)` counting up by one.
    #[inline]
    pub fn closed_open(lower: f64, upper: impl Into<Extended<f64>>) -> Self {
        Self::ascending(Range::closed_open(lower, upper)).unwrap_or_else(|_| Self::empty())
    }

    /// Creates `(a, b]` counting up by one.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::OpenStart`] unless `a` is `-∞`.
    #[inline]
    pub fn open_closed(lower: impl Into<Extended<f64>>, upper: f64) -> Result<Self> {
        Self::new(BoundType::Open, lower, upper, BoundType::Closed, 1.0, Some(true))
    }

    /// Creates `(a, +∞)` or `[a, +∞)` counting up by one.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InfiniteClosedBound`] for a closed infinite `a`
    /// and [`RangeError::OpenStart`] for an open finite `a`.
    #[inline]
    pub fn down_to(bound_type: BoundType, lower: impl Into<Extended<f64>>) -> Result<Self> {
        Self::new(bound_type, lower, Extended::PosInf, BoundType::Open, 1.0, Some(true))
    }

    /// Creates `(a, +∞)` counting up by one.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::OpenStart`] unless `a` is `-∞`.
    #[inline]
    pub fn greater_than(lower: impl Into<Extended<f64>>) -> Result<Self> {
        Self::new(BoundType::Open, lower, Extended::PosInf, BoundType::Open, 1.0, Some(true))
    }

    /// Creates `[a, +∞)` counting up by one.
    #[inline]
    pub fn at_least(lower: f64) -> Self {
        Self::ascending(Range::at_least(lower)).unwrap_or_else(|_| Self::empty())
    }

    /// Creates `(-∞, b)` or `(-∞, b]` counting down by one.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InfiniteClosedBound`] for a closed infinite `b`
    /// and [`RangeError::OpenStart`] for an open finite `b`.
    #[inline]
    pub fn up_to(upper: impl Into<Extended<f64>>, bound_type: BoundType) -> Result<Self> {
        Self::new(BoundType::Open, Extended::NegInf, upper, bound_type, -1.0, Some(false))
    }

    /// Creates `(-∞, b)` counting down by one.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::OpenStart`] unless `b` is `+∞`.
    #[inline]
    pub fn less_than(upper: impl Into<Extended<f64>>) -> Result<Self> {
        Self::new(BoundType::Open, Extended::NegInf, upper, BoundType::Open, -1.0, Some(false))
    }

    /// Creates `(-∞, b]` counting down by one.
    #[inline]
    pub fn at_most(upper: f64) -> Self {
        Self::descending(Range::at_most(upper)).unwrap_or_else(|_| Self::empty())
    }

    /// Creates the range over every float. Its start lies at infinity, so
    /// iterating it yields nothing.
    #[inline]
    pub fn all() -> Self {
        Self::ascending(Range::all()).unwrap_or_else(|_| Self::empty())
    }

    /// Returns the canonical empty float range.
    #[inline]
    pub fn empty() -> Self {
        Self {
            range: Range::empty(),
            step: 1.0,
            lower_is_start: true,
        }
    }

    /// Returns a copy with a new step, iterating from the lower endpoint when
    /// the step is positive.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::ZeroStep`] for a zero or NaN step and
    /// [`RangeError::OpenStart`] if the new start endpoint is open.
    pub fn steps(&self, step: f64) -> Result<Self> {
        self.steps_with_start(step, step > 0.0)
    }

    /// Returns a copy with a new step and an explicit direction.
    ///
    /// # Errors
    ///
    /// Same as [`FloatRange::steps`].
    pub fn steps_with_start(&self, step: f64, lower_is_start: bool) -> Result<Self> {
        if step.is_nan() || step == 0.0 {
            return Err(RangeError::ZeroStep);
        }
        Self::from_parts(self.range.clone(), step, lower_is_start)
    }

    /// Returns the step.
    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns `true` if iteration starts at the lower endpoint.
    #[inline]
    pub fn lower_is_start(&self) -> bool {
        self.lower_is_start
    }

    /// Returns the underlying continuous range.
    #[inline]
    pub fn as_range(&self) -> &Range<f64> {
        &self.range
    }

    /// Returns `true` if iteration visits no value.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Returns `true` if `value` lies between the endpoints.
    #[inline]
    pub fn includes(&self, value: f64) -> bool {
        self.range.includes(&value)
    }

    /// Returns `true` if `other` lies between the endpoints of `self`.
    #[inline]
    pub fn encloses(&self, other: &Self) -> bool {
        self.range.encloses(&other.range)
    }

    /// Converts to an integer range over the integers between the endpoints.
    #[inline]
    pub fn to_int_range(&self) -> IntRange {
        self.range.to_int_range()
    }

    /// Returns a copy of this range.
    #[inline]
    pub fn to_float_range(&self) -> Self {
        self.clone()
    }

    fn start_and_end(&self) -> Option<(&Extended<f64>, &Extended<f64>, BoundType)> {
        let (lower, lower_bound, upper, upper_bound) = self.range.endpoints()?;
        if self.lower_is_start {
            Some((lower, upper, upper_bound))
        } else {
            Some((upper, lower, lower_bound))
        }
    }

    /// Returns the number of fractional digits iteration rounds to.
    pub fn precision(&self) -> u32 {
        let start = self
            .start_and_end()
            .and_then(|(start, ..)| start.finite().copied())
            .map_or(0, fraction_digits);
        start.max(fraction_digits(self.step))
    }

    /// Returns the number of values visited by iteration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::{float_range::FloatRange, range::Size};
    /// # use num_bigint::BigInt;
    ///
    /// let r = FloatRange::closed_open(0.0, 1.0).steps(0.1).unwrap();
    /// assert_eq!(r.size(), Size::Finite(BigInt::from(10)));
    /// ```
    pub fn size(&self) -> Size<BigInt> {
        let Some((start, end, end_bound)) = self.start_and_end() else {
            return Size::Finite(BigInt::zero());
        };
        let (Extended::Finite(start), Extended::Finite(end)) = (start, end) else {
            return Size::Infinite;
        };
        if (self.step > 0.0) != self.lower_is_start {
            return Size::Finite(BigInt::zero());
        }

        let quotient = round_to((end - start) / self.step, QUOTIENT_DIGITS);
        let mut whole_steps = quotient.floor();
        if end_bound.is_open()
            && round_to(start + whole_steps * self.step, self.precision()) == *end
        {
            whole_steps -= 1.0;
        }
        if whole_steps < 0.0 {
            return Size::Finite(BigInt::zero());
        }
        BigInt::from_f64(whole_steps + 1.0).map_or(Size::Infinite, Size::Finite)
    }

    /// Returns a lazy iterator over the values of this range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::float_range::FloatRange;
    ///
    /// let r = FloatRange::closed(0.0, 0.3).steps(0.1).unwrap();
    /// assert_eq!(r.iter().collect::<Vec<_>>(), vec![0.0, 0.1, 0.2, 0.3]);
    /// ```
    pub fn iter(&self) -> FloatRangeIter {
        let precision = self.precision();
        let Some((start, end, end_bound)) = self.start_and_end() else {
            return FloatRangeIter::exhausted(self.step);
        };
        let Extended::Finite(start) = start else {
            log::debug!("{self} starts at {start}; iteration yields nothing");
            return FloatRangeIter::exhausted(self.step);
        };

        FloatRangeIter {
            cursor: Some(*start),
            end: *end,
            end_bound,
            step: self.step,
            precision,
        }
    }
}

impl Default for FloatRange {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Display for FloatRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.range)?;
        if !self.range.is_empty() && self.step.abs() != 1.0 {
            write!(f, " step {}", self.step)?;
        }
        Ok(())
    }
}

/// A lazy iterator over the values of a [`FloatRange`].
#[derive(Debug, Clone)]
pub struct FloatRangeIter {
    cursor: Option<f64>,
    end: Extended<f64>,
    end_bound: BoundType,
    step: f64,
    precision: u32,
}

impl FloatRangeIter {
    #[inline]
    fn exhausted(step: f64) -> Self {
        Self {
            cursor: None,
            end: Extended::NegInf,
            end_bound: BoundType::Open,
            step,
            precision: 0,
        }
    }

    #[inline]
    fn admits(&self, value: f64) -> bool {
        let ordering = self.end.cmp_value(&value);
        let ordering = if self.step > 0.0 {
            ordering.map(Ordering::reverse)
        } else {
            ordering
        };
        self.end_bound.admits(ordering)
    }
}

impl Iterator for FloatRangeIter {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.cursor.take()?;
        if !self.admits(current) {
            return None;
        }
        let next = round_to(current + self.step, self.precision);
        if next == current {
            log::debug!("step {} vanishes at {current}; stopping", self.step);
        } else {
            self.cursor = Some(next);
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.cursor {
            None => (0, Some(0)),
            Some(_) if self.end.is_infinite() => (usize::MAX, None),
            Some(_) => (0, None),
        }
    }
}

impl FusedIterator for FloatRangeIter {}

impl IntoIterator for FloatRange {
    type Item = f64;
    type IntoIter = FloatRangeIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &FloatRange {
    type Item = f64;
    type IntoIter = FloatRangeIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_decimal_steps_stay_on_grid() {
        let r = FloatRange::closed(0.0, 1.0).steps(0.1).unwrap();
        let values: Vec<f64> = r.iter().collect();
        let expected: Vec<f64> = (0..=10).map(|k| f64::from(k) / 10.0).collect();
        assert_eq!(values, expected);
        assert_eq!(r.size(), Size::Finite(BigInt::from(11)));
        assert_eq!(r.precision(), 1);
    }

    #[test]
    fn test_open_end_excluded() {
        let r = FloatRange::closed_open(0.0, 1.0).steps(0.25).unwrap();
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![0.0, 0.25, 0.5, 0.75]);
        assert_eq!(r.size(), Size::Finite(BigInt::from(4)));
    }

    #[test]
    fn test_negative_step() {
        let r = FloatRange::closed(0.0, 1.0).steps(-0.5).unwrap();
        assert!(!r.lower_is_start());
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![1.0, 0.5, 0.0]);
        assert_eq!(r.size(), Size::Finite(BigInt::from(3)));
    }

    #[test]
    fn test_open_start_rejected() {
        assert_eq!(FloatRange::open(0.0, 1.0).unwrap_err(), RangeError::OpenStart);
        assert_eq!(FloatRange::greater_than(2.0).unwrap_err(), RangeError::OpenStart);
        assert_eq!(FloatRange::less_than(2.0).unwrap_err(), RangeError::OpenStart);
        assert_eq!(
            FloatRange::closed_open(0.0, 1.0).steps(-0.5).unwrap_err(),
            RangeError::OpenStart
        );
        assert!(FloatRange::open_closed(Extended::NegInf, 1.0).is_ok());
        assert!(FloatRange::up_to(1.0, BoundType::Closed).is_ok());
    }

    #[test]
    fn test_open_start_checked_before_emptiness() {
        assert_eq!(FloatRange::open(5.0, 5.0).unwrap_err(), RangeError::OpenStart);
        assert_eq!(FloatRange::open(3.0, 1.0).unwrap_err(), RangeError::OpenStart);
        assert_eq!(
            FloatRange::new(BoundType::Closed, 3.0, 1.0, BoundType::Open, -1.0, None).unwrap_err(),
            RangeError::OpenStart
        );
        assert!(FloatRange::closed_open(3.0, 1.0).is_empty());
    }

    #[test]
    fn test_native_infinities() {
        use crate::math::bound::BoundSide;

        let r = FloatRange::closed(f64::NEG_INFINITY, 0.0);
        assert_eq!(r.as_range(), &Range::at_most(0.0));
        assert_eq!(r.size(), Size::Infinite);
        assert_eq!(r.iter().next(), None);

        assert_eq!(
            FloatRange::new(BoundType::Closed, f64::NEG_INFINITY, 0.0, BoundType::Closed, 1.0, None)
                .unwrap_err(),
            RangeError::InfiniteClosedBound {
                side: BoundSide::Lower
            }
        );
        assert!(FloatRange::open(f64::NEG_INFINITY, 0.0).is_ok());
    }

    #[test]
    fn test_zero_or_nan_step_rejected() {
        let r = FloatRange::closed(0.0, 1.0);
        assert_eq!(r.steps(0.0).unwrap_err(), RangeError::ZeroStep);
        assert_eq!(r.steps(f64::NAN).unwrap_err(), RangeError::ZeroStep);
        assert_eq!(
            FloatRange::new(BoundType::Closed, 0.0, 1.0, BoundType::Closed, -0.0, None).unwrap_err(),
            RangeError::ZeroStep
        );
    }

    #[test]
    fn test_unbounded_iteration() {
        let up: Vec<f64> = FloatRange::at_least(1.5).iter().take(3).collect();
        assert_eq!(up, vec![1.5, 2.5, 3.5]);

        let down: Vec<f64> = FloatRange::at_most(0.0).iter().take(3).collect();
        assert_eq!(down, vec![0.0, -1.0, -2.0]);

        assert_eq!(FloatRange::all().iter().next(), None);
        assert_eq!(FloatRange::all().size(), Size::Infinite);
    }

    #[test]
    fn test_degenerate_and_empty() {
        let r = FloatRange::closed(2.5, 2.5);
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![2.5]);
        assert_eq!(r.size(), Size::Finite(BigInt::from(1)));

        assert!(FloatRange::closed(3.0, 1.0).is_empty());
        assert_eq!(FloatRange::closed(3.0, 1.0), FloatRange::empty());
        assert_eq!(FloatRange::closed_open(1.0, 1.0).iter().next(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(FloatRange::closed(0.0, 1.0).to_string(), "[0, 1]");
        assert_eq!(
            FloatRange::closed(0.0, 1.0).steps(0.1).unwrap().to_string(),
            "[0, 1] step 0.1"
        );
        assert_eq!(FloatRange::at_least(0.0).to_string(), "ℝ⁺");
        assert_eq!(FloatRange::empty().to_string(), "∅");
    }

    #[test]
    fn test_conversions() {
        let r = FloatRange::closed(0.5, 3.5);
        assert_eq!(r.to_int_range().to_string(), "[1..3]");
        assert_eq!(r.to_float_range(), r);
        assert!(r.includes(3.5));
        assert!(r.encloses(&FloatRange::closed(1.0, 2.0)));
    }

    fn stepped() -> impl Strategy<Value = FloatRange> {
        (
            -50i32..50,
            -50i32..50,
            1i32..=25,
            any::<bool>(),
            any::<bool>(),
        )
            .prop_map(|(a, b, s, negative, closed_end)| {
                let (lower, upper) = (f64::from(a.min(b)) / 10.0, f64::from(a.max(b)) / 10.0);
                let step = f64::from(s) / 10.0;
                let end = if closed_end { BoundType::Closed } else { BoundType::Open };
                if negative {
                    FloatRange::new(end, lower, upper, BoundType::Closed, -step, None)
                } else {
                    FloatRange::new(BoundType::Closed, lower, upper, end, step, None)
                }
                .unwrap()
            })
    }

    proptest! {
        #[test]
        fn prop_size_matches_iteration(r in stepped()) {
            let values: Vec<f64> = r.iter().collect();
            prop_assert_eq!(r.size(), Size::Finite(BigInt::from(values.len())));
            for v in &values {
                prop_assert!(r.includes(*v));
            }
        }
    }
}
