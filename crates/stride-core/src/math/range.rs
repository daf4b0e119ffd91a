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

//! # Continuous Ranges
//!
//! `Range<T>` is an interval over an ordered scalar domain. Each endpoint is
//! either a concrete value or an infinity sentinel, and each bound is
//! independently open or closed. Every range that no element can satisfy is
//! normalized to one canonical empty value, so equality and emptiness checks
//! never depend on how the emptiness came about.
//!
//! Construction only fails when a closed bound is paired with an infinite
//! endpoint; every other combination yields a (possibly empty) range.

use crate::{
    error::{RangeError, Result},
    math::{
        bound::{BoundSide, BoundType},
        extended::{le, Extended},
        float_range::FloatRange,
        int_range::IntRange,
    },
    num::{
        convert::{ToFloat, ToInteger},
        element::Element,
    },
};
use smallvec::SmallVec;
use std::{
    cmp::Ordering,
    ops::{BitAnd, BitOr},
};

/// The measure of a range: a finite quantity or unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Size<D> {
    /// A finite measure.
    Finite(D),
    /// The range is unbounded on at least one side.
    Infinite,
}

impl<D> Size<D> {
    /// Returns `true` for [`Size::Infinite`].
    #[inline]
    pub fn is_infinite(&self) -> bool {
        matches!(self, Self::Infinite)
    }

    /// Returns the finite measure, if any.
    #[inline]
    pub fn finite(&self) -> Option<&D> {
        match self {
            Self::Finite(d) => Some(d),
            Self::Infinite => None,
        }
    }

    /// Converts into the finite measure, if any.
    #[inline]
    pub fn into_finite(self) -> Option<D> {
        match self {
            Self::Finite(d) => Some(d),
            Self::Infinite => None,
        }
    }
}

impl<D> std::fmt::Display for Size<D>
where
    D: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Finite(d) => write!(f, "{d}"),
            Self::Infinite => write!(f, "∞"),
        }
    }
}

/// An interval over an ordered scalar domain.
///
/// # Examples
///
/// ```rust
/// # use stride_core::math::range::{Range, Size};
///
/// let r = Range::closed(1.0, 3.0);
/// assert_eq!(r.size().unwrap(), Size::Finite(2.0));
/// assert_eq!(r.to_string(), "[1, 3]");
/// assert!(r.includes(&2.5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Range<T> {
    inner: InnerRange<T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum InnerRange<T> {
    Empty,
    Normal(Endpoints<T>),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Endpoints<T> {
    lower: Extended<T>,
    lower_bound: BoundType,
    upper: Extended<T>,
    upper_bound: BoundType,
}

impl<T> Endpoints<T>
where
    T: PartialOrd,
{
    #[inline]
    fn is_unsatisfiable(&self) -> bool {
        !self.lower_bound.compare(&self.lower, &self.upper)
            || !self.upper_bound.compare(&self.lower, &self.upper)
    }
}

impl<T> Range<T>
where
    T: Element,
{
    /// Creates a new range from its four components.
    ///
    /// Returns the canonical empty range if no element satisfies both bounds.
    /// Native float infinities are stored as the matching sentinels.
    ///
    /// Passing [`Extended`] values leaves `T` open to inference, because
    /// `Extended<T>` also converts into `Extended<Extended<T>>`. Name the
    /// element type in that case (`Range::<i64>::new(...)`).
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InfiniteClosedBound`] if a closed bound is paired
    /// with an infinite endpoint, including `f64::INFINITY` and
    /// `f64::NEG_INFINITY`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::{bound::BoundType, extended::Extended, range::Range};
    ///
    /// let r = Range::new(BoundType::Open, 5, 5, BoundType::Closed).unwrap();
    /// assert!(r.is_empty());
    ///
    /// assert!(Range::<i32>::new(BoundType::Closed, Extended::NegInf, 5, BoundType::Open).is_err());
    /// ```
    pub fn new(
        lower_bound: BoundType,
        lower: impl Into<Extended<T>>,
        upper: impl Into<Extended<T>>,
        upper_bound: BoundType,
    ) -> Result<Self> {
        let (lower, upper) = (lower.into().lifted(), upper.into().lifted());
        if lower.is_infinite() && lower_bound.is_closed() {
            return Err(RangeError::InfiniteClosedBound {
                side: BoundSide::Lower,
            });
        }
        if upper.is_infinite() && upper_bound.is_closed() {
            return Err(RangeError::InfiniteClosedBound {
                side: BoundSide::Upper,
            });
        }
        Ok(Self::normalized(lower_bound, lower, upper, upper_bound))
    }

    /// Builds a range without validation, substituting the canonical empty
    /// range where needed.
    ///
    /// Native infinities are lifted and an infinite endpoint always gets an
    /// open bound.
    pub(crate) fn normalized(
        lower_bound: BoundType,
        lower: Extended<T>,
        upper: Extended<T>,
        upper_bound: BoundType,
    ) -> Self {
        let (lower, upper) = (lower.lifted(), upper.lifted());
        let lower_bound = open_if_infinite(&lower, lower_bound);
        let upper_bound = open_if_infinite(&upper, upper_bound);

        let endpoints = Endpoints {
            lower,
            lower_bound,
            upper,
            upper_bound,
        };
        if endpoints.is_unsatisfiable() {
            log::trace!(
                "normalizing {}{}, {}{} to the empty range",
                endpoints.lower_bound.brackets().0,
                endpoints.lower,
                endpoints.upper,
                endpoints.upper_bound.brackets().1
            );
            return Self::empty();
        }
        Self {
            inner: InnerRange::Normal(endpoints),
        }
    }

    /// Creates the open range `(a, b)`.
    #[inline]
    pub fn open(lower: impl Into<Extended<T>>, upper: impl Into<Extended<T>>) -> Self {
        Self::normalized(BoundType::Open, lower.into(), upper.into(), BoundType::Open)
    }

    /// Creates the closed range `[a, b]`.
    ///
    /// A native float infinity opens its side.
    ///
    /// ```rust
    /// # use stride_core::math::range::Range;
    ///
    /// assert_eq!(Range::closed(f64::NEG_INFINITY, 0.0).to_string(), "(-∞, 0]");
    /// ```
    #[inline]
    pub fn closed(lower: T, upper: T) -> Self {
        Self::normalized(
            BoundType::Closed,
            Extended::Finite(lower),
            Extended::Finite(upper),
            BoundType::Closed,
        )
    }

    /// Creates the half-open range `[a, b)`.
    #[inline]
    pub fn closed_open(lower: T, upper: impl Into<Extended<T>>) -> Self {
        Self::normalized(
            BoundType::Closed,
            Extended::Finite(lower),
            upper.into(),
            BoundType::Open,
        )
    }

    /// Creates the half-open range `(a, b]`.
    #[inline]
    pub fn open_closed(lower: impl Into<Extended<T>>, upper: T) -> Self {
        Self::normalized(
            BoundType::Open,
            lower.into(),
            Extended::Finite(upper),
            BoundType::Closed,
        )
    }

    /// Creates the range `(a, +∞)` or `[a, +∞)`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InfiniteClosedBound`] for a closed infinite `a`.
    #[inline]
    pub fn down_to(bound_type: BoundType, lower: impl Into<Extended<T>>) -> Result<Self> {
        Self::new(bound_type, lower, Extended::PosInf, BoundType::Open)
    }

    /// Creates the range `(a, +∞)`.
    #[inline]
    pub fn greater_than(lower: impl Into<Extended<T>>) -> Self {
        Self::open(lower, Extended::PosInf)
    }

    /// Creates the range `[a, +∞)`.
    #[inline]
    pub fn at_least(lower: T) -> Self {
        Self::closed_open(lower, Extended::PosInf)
    }

    /// Creates the range `(-∞, b)` or `(-∞, b]`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InfiniteClosedBound`] for a closed infinite `b`.
    #[inline]
    pub fn up_to(upper: impl Into<Extended<T>>, bound_type: BoundType) -> Result<Self> {
        Self::new(BoundType::Open, Extended::NegInf, upper, bound_type)
    }

    /// Creates the range `(-∞, b)`.
    #[inline]
    pub fn less_than(upper: impl Into<Extended<T>>) -> Self {
        Self::open(Extended::NegInf, upper)
    }

    /// Creates the range `(-∞, b]`.
    #[inline]
    pub fn at_most(upper: T) -> Self {
        Self::open_closed(Extended::NegInf, upper)
    }

    /// Creates the range `(-∞, +∞)`.
    #[inline]
    pub fn all() -> Self {
        Self::open(Extended::NegInf, Extended::PosInf)
    }

    /// Returns the canonical empty range.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            inner: InnerRange::Empty,
        }
    }

    /// Returns the four components, or `None` for the empty range.
    #[inline]
    pub fn endpoints(&self) -> Option<(&Extended<T>, BoundType, &Extended<T>, BoundType)> {
        match &self.inner {
            InnerRange::Empty => None,
            InnerRange::Normal(e) => Some((&e.lower, e.lower_bound, &e.upper, e.upper_bound)),
        }
    }

    /// Returns the lower endpoint, or `None` for the empty range.
    #[inline]
    pub fn lower_endpoint(&self) -> Option<&Extended<T>> {
        self.endpoints().map(|(lower, ..)| lower)
    }

    /// Returns the upper endpoint, or `None` for the empty range.
    #[inline]
    pub fn upper_endpoint(&self) -> Option<&Extended<T>> {
        self.endpoints().map(|(_, _, upper, _)| upper)
    }

    /// Returns the lower bound type, or `None` for the empty range.
    #[inline]
    pub fn lower_bound_type(&self) -> Option<BoundType> {
        self.endpoints().map(|(_, bound, ..)| bound)
    }

    /// Returns the upper bound type, or `None` for the empty range.
    #[inline]
    pub fn upper_bound_type(&self) -> Option<BoundType> {
        self.endpoints().map(|(.., bound)| bound)
    }

    /// Returns `true` if the lower endpoint is a concrete value.
    #[inline]
    pub fn is_lower_finite(&self) -> bool {
        self.lower_endpoint().is_some_and(Extended::is_finite)
    }

    /// Returns `true` if the lower endpoint is `-∞`.
    #[inline]
    pub fn is_lower_infinite(&self) -> bool {
        self.lower_endpoint().is_some_and(Extended::is_infinite)
    }

    /// Returns `true` if the upper endpoint is a concrete value.
    #[inline]
    pub fn is_upper_finite(&self) -> bool {
        self.upper_endpoint().is_some_and(Extended::is_finite)
    }

    /// Returns `true` if the upper endpoint is `+∞`.
    #[inline]
    pub fn is_upper_infinite(&self) -> bool {
        self.upper_endpoint().is_some_and(Extended::is_infinite)
    }

    /// Returns `true` if the range is unbounded on either side.
    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.is_lower_infinite() || self.is_upper_infinite()
    }

    /// Returns the measure `upper - lower` of the range.
    ///
    /// The empty range and degenerate ranges measure zero, ranges with an
    /// infinite endpoint measure [`Size::Infinite`].
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::UnsupportedType`] if the element type defines no
    /// distance.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::range::{Range, Size};
    ///
    /// assert_eq!(Range::open(4.0, 5.0).size().unwrap(), Size::Finite(1.0));
    /// assert_eq!(Range::at_least(0.0).size().unwrap(), Size::Infinite);
    /// ```
    pub fn size(&self) -> Result<Size<T::Distance>> {
        let Some((lower, _, upper, _)) = self.endpoints() else {
            return Ok(Size::Finite(T::zero_distance()));
        };
        if lower == upper {
            return Ok(Size::Finite(T::zero_distance()));
        }
        match (lower, upper) {
            (Extended::Finite(l), Extended::Finite(u)) => T::distance(l, u).map(Size::Finite),
            _ => Ok(Size::Infinite),
        }
    }

    /// Returns `true` if no element satisfies the range.
    #[inline]
    pub fn is_empty(&self) -> bool {
        match &self.inner {
            InnerRange::Empty => true,
            InnerRange::Normal(e) => e.is_unsatisfiable(),
        }
    }

    /// Returns `true` if `value` lies within the range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::range::Range;
    ///
    /// let r = Range::closed_open(0, 10);
    /// assert!(r.includes(&0));
    /// assert!(!r.includes(&10));
    /// ```
    pub fn includes(&self, value: &T) -> bool {
        match &self.inner {
            InnerRange::Empty => false,
            InnerRange::Normal(e) => {
                e.lower_bound.admits(e.lower.cmp_value(value))
                    && e.upper_bound
                        .admits(e.upper.cmp_value(value).map(Ordering::reverse))
            }
        }
    }

    /// Returns `true` if every value lies within the range.
    ///
    /// Always `false` for the empty range.
    pub fn includes_all<'a, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        !self.is_empty() && values.into_iter().all(|value| self.includes(value))
    }

    /// Returns `true` if `self` is a superset of `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::range::Range;
    ///
    /// let outer = Range::closed(0, 10);
    /// assert!(outer.encloses(&Range::open(0, 10)));
    /// assert!(!Range::open(0, 10).encloses(&outer));
    /// assert!(outer.encloses(&Range::empty()));
    /// ```
    pub fn encloses(&self, other: &Self) -> bool {
        let (a, b) = match (&self.inner, &other.inner) {
            (_, InnerRange::Empty) => return true,
            (InnerRange::Empty, _) => return other.is_empty(),
            (InnerRange::Normal(a), InnerRange::Normal(b)) => (a, b),
        };

        let lower_side = if a.lower == b.lower {
            a.lower_bound.is_closed() || b.lower_bound.is_open()
        } else {
            a.lower < b.lower
        };
        let upper_side = if a.upper == b.upper {
            a.upper_bound.is_closed() || b.upper_bound.is_open()
        } else {
            b.upper < a.upper
        };
        lower_side && upper_side
    }

    /// Returns `true` if `self ⊆ other`.
    #[inline]
    pub fn is_subset(&self, other: &Self) -> bool {
        other.encloses(self)
    }

    /// Returns `true` if `self ⊇ other`.
    #[inline]
    pub fn is_superset(&self, other: &Self) -> bool {
        self.encloses(other)
    }

    /// Returns `true` if `self ⊂ other`.
    #[inline]
    pub fn is_proper_subset(&self, other: &Self) -> bool {
        other.encloses(self) && self != other
    }

    /// Returns `true` if `self ⊃ other`.
    #[inline]
    pub fn is_proper_superset(&self, other: &Self) -> bool {
        self.encloses(other) && self != other
    }

    /// Calculates the union of two ranges.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::DisjointUnion`] if the union is not a single
    /// contiguous range, including two ranges meeting at one point that both
    /// exclude.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::range::Range;
    ///
    /// let a = Range::closed_open(0, 5);
    /// let b = Range::closed(5, 8);
    /// assert_eq!(a.union(&b).unwrap(), Range::closed(0, 8));
    ///
    /// assert!(Range::open(1, 2).union(&Range::open(2, 3)).is_err());
    /// ```
    pub fn union(&self, other: &Self) -> Result<Self> {
        let (a, b) = match (&self.inner, &other.inner) {
            (InnerRange::Empty, _) => return Ok(other.clone()),
            (_, InnerRange::Empty) => return Ok(self.clone()),
            (InnerRange::Normal(a), InnerRange::Normal(b)) => (a, b),
        };

        if self.encloses(other) {
            return Ok(self.clone());
        }
        if other.encloses(self) {
            return Ok(other.clone());
        }

        let (first, second) = if le(&[&a.lower, &b.lower, &a.upper, &b.upper]) {
            (a, b)
        } else if le(&[&b.lower, &a.lower, &b.upper, &a.upper]) {
            (b, a)
        } else {
            return Err(self.disjoint_union(other));
        };

        if second.lower == first.upper
            && second.lower_bound.is_open()
            && first.upper_bound.is_open()
        {
            return Err(self.disjoint_union(other));
        }

        Ok(Self::normalized(
            first.lower_bound,
            first.lower.clone(),
            second.upper.clone(),
            second.upper_bound,
        ))
    }

    fn disjoint_union(&self, other: &Self) -> RangeError {
        log::debug!("rejecting union of {self} and {other}: not contiguous");
        RangeError::DisjointUnion {
            left: self.to_string(),
            right: other.to_string(),
        }
    }

    /// Calculates the intersection of two ranges.
    ///
    /// Disjoint inputs produce the canonical empty range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::range::Range;
    ///
    /// let a = Range::closed(0, 10);
    /// let b = Range::open(5, 15);
    /// assert_eq!(a.intersection(&b), Range::open_closed(5, 10));
    /// assert!(a.intersection(&Range::closed(11, 12)).is_empty());
    /// ```
    pub fn intersection(&self, other: &Self) -> Self {
        let (a, b) = match (&self.inner, &other.inner) {
            (InnerRange::Normal(a), InnerRange::Normal(b)) => (a, b),
            _ => return Self::empty(),
        };

        if self.encloses(other) {
            return other.clone();
        }
        if other.encloses(self) {
            return self.clone();
        }

        if le(&[&a.lower, &b.lower, &a.upper, &b.upper]) {
            Self::normalized(b.lower_bound, b.lower.clone(), a.upper.clone(), a.upper_bound)
        } else if le(&[&b.lower, &a.lower, &b.upper, &a.upper]) {
            Self::normalized(a.lower_bound, a.lower.clone(), b.upper.clone(), b.upper_bound)
        } else {
            Self::empty()
        }
    }

    /// Returns `true` if the ranges share no element.
    #[inline]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.intersection(other).is_empty()
    }

    /// Calculates the set difference `self - other`.
    ///
    /// # Returns
    ///
    /// A `SmallVec` containing:
    /// * 0 ranges: If `other` encloses `self`.
    /// * 1 range: If `other` clips one side of `self` or is disjoint.
    /// * 2 ranges: If `other` lies strictly inside `self`, splitting it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::range::Range;
    ///
    /// let a = Range::closed(0, 10);
    /// let diff = a.difference(&Range::closed(4, 6));
    /// assert_eq!(diff.len(), 2);
    /// assert_eq!(diff[0], Range::closed_open(0, 4));
    /// assert_eq!(diff[1], Range::open_closed(6, 10));
    /// ```
    pub fn difference(&self, other: &Self) -> SmallVec<[Self; 2]> {
        if self.is_empty() {
            return SmallVec::new();
        }
        let b = match &other.inner {
            InnerRange::Normal(b) if !self.is_disjoint(other) => b,
            _ => return smallvec::smallvec![self.clone()],
        };

        let mut pieces = SmallVec::new();
        if b.lower.is_finite() {
            let below = Self::normalized(
                BoundType::Open,
                Extended::NegInf,
                b.lower.clone(),
                b.lower_bound.flip(),
            );
            let left = self.intersection(&below);
            if !left.is_empty() {
                pieces.push(left);
            }
        }
        if b.upper.is_finite() {
            let above = Self::normalized(
                b.upper_bound.flip(),
                b.upper.clone(),
                Extended::PosInf,
                BoundType::Open,
            );
            let right = self.intersection(&above);
            if !right.is_empty() {
                pieces.push(right);
            }
        }
        pieces
    }
}

impl<T> Range<T>
where
    T: Element + ToInteger,
{
    /// Converts to an integer range over the integers this range contains.
    ///
    /// A non-integer lower endpoint rounds up and a non-integer upper
    /// endpoint rounds down; both become closed. Integer endpoints keep their
    /// bound type and infinite endpoints pass through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::range::Range;
    ///
    /// let r = Range::open(1.5, 4.0).to_int_range();
    /// assert_eq!(r.to_string(), "[2..4)");
    /// ```
    pub fn to_int_range(&self) -> IntRange {
        let Some((lower, lower_bound, upper, upper_bound)) = self.endpoints() else {
            return IntRange::empty();
        };

        let (lower, lower_bound) = match lower {
            Extended::Finite(v) if v.is_integer() => (v.ceil_integer(), lower_bound),
            Extended::Finite(v) => (v.ceil_integer(), BoundType::Closed),
            Extended::NegInf => (Extended::NegInf, BoundType::Open),
            Extended::PosInf => (Extended::PosInf, BoundType::Open),
        };
        let (upper, upper_bound) = match upper {
            Extended::Finite(v) if v.is_integer() => (v.floor_integer(), upper_bound),
            Extended::Finite(v) => (v.floor_integer(), BoundType::Closed),
            Extended::NegInf => (Extended::NegInf, BoundType::Open),
            Extended::PosInf => (Extended::PosInf, BoundType::Open),
        };

        IntRange::from_range(Range::normalized(
            lower_bound,
            lower,
            upper,
            upper_bound,
        ))
    }
}

impl<T> Range<T>
where
    T: Element + ToFloat,
{
    /// Converts to a float range with the same bounds.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::OpenStart`] if the resulting float range would
    /// start iterating from a finite open bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::range::Range;
    ///
    /// let r = Range::closed(1, 3).to_float_range().unwrap();
    /// assert_eq!(r.to_string(), "[1, 3]");
    /// assert!(Range::open(1, 3).to_float_range().is_err());
    /// ```
    pub fn to_float_range(&self) -> Result<FloatRange> {
        let Some((lower, lower_bound, upper, upper_bound)) = self.endpoints() else {
            return Ok(FloatRange::empty());
        };

        let lower = match lower {
            Extended::Finite(v) => v.to_float(),
            Extended::NegInf => Extended::NegInf,
            Extended::PosInf => Extended::PosInf,
        };
        let upper = match upper {
            Extended::Finite(v) => v.to_float(),
            Extended::NegInf => Extended::NegInf,
            Extended::PosInf => Extended::PosInf,
        };

        FloatRange::from_range(Range::normalized(
            lower_bound,
            lower,
            upper,
            upper_bound,
        ))
    }
}

/// An endpoint on a sentinel is never closed.
#[inline]
fn open_if_infinite<U>(endpoint: &Extended<U>, bound: BoundType) -> BoundType {
    if endpoint.is_infinite() {
        BoundType::Open
    } else {
        bound
    }
}

impl<T> std::fmt::Display for Range<T>
where
    T: Element,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let e = match &self.inner {
            InnerRange::Empty => return write!(f, "∅"),
            InnerRange::Normal(e) => e,
        };

        if e.lower.is_infinite() && e.upper.is_infinite() {
            write!(f, "ℝ")
        } else if e.lower.finite().is_some_and(Element::is_origin) && e.upper.is_infinite() {
            write!(f, "ℝ⁺")
        } else if e.lower.is_infinite() && e.upper.finite().is_some_and(Element::is_origin) {
            write!(f, "ℝ⁻")
        } else if e.lower_bound.is_closed() && e.upper_bound.is_closed() && e.lower == e.upper {
            write!(f, "{{{}}}", e.lower)
        } else {
            write!(
                f,
                "{}{}, {}{}",
                e.lower_bound.brackets().0,
                e.lower,
                e.upper,
                e.upper_bound.brackets().1
            )
        }
    }
}

impl<T> Default for Range<T>
where
    T: Element,
{
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> BitAnd for &Range<T>
where
    T: Element,
{
    type Output = Range<T>;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<T> BitAnd for Range<T>
where
    T: Element,
{
    type Output = Range<T>;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(&rhs)
    }
}

impl<T> BitOr for &Range<T>
where
    T: Element,
{
    type Output = Result<Range<T>>;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<T> BitOr for Range<T>
where
    T: Element,
{
    type Output = Result<Range<T>>;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(&rhs)
    }
}

impl<T> From<std::ops::Range<T>> for Range<T>
where
    T: Element,
{
    #[inline]
    fn from(range: std::ops::Range<T>) -> Self {
        Self::closed_open(range.start, range.end)
    }
}

impl<T> From<std::ops::RangeInclusive<T>> for Range<T>
where
    T: Element,
{
    #[inline]
    fn from(range: std::ops::RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        Self::closed(start, end)
    }
}

impl<T> From<std::ops::RangeFrom<T>> for Range<T>
where
    T: Element,
{
    #[inline]
    fn from(range: std::ops::RangeFrom<T>) -> Self {
        Self::at_least(range.start)
    }
}

impl<T> From<std::ops::RangeTo<T>> for Range<T>
where
    T: Element,
{
    #[inline]
    fn from(range: std::ops::RangeTo<T>) -> Self {
        Self::less_than(range.end)
    }
}

impl<T> From<std::ops::RangeToInclusive<T>> for Range<T>
where
    T: Element,
{
    #[inline]
    fn from(range: std::ops::RangeToInclusive<T>) -> Self {
        Self::at_most(range.end)
    }
}

impl<T> From<std::ops::RangeFull> for Range<T>
where
    T: Element,
{
    #[inline]
    fn from(_: std::ops::RangeFull) -> Self {
        Self::all()
    }
}
