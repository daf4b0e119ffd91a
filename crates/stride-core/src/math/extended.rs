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

//! # Extended Order
//!
//! Values of an ordered domain extended with two sentinels, `-∞` and `+∞`.
//! `NegInf` compares below every concrete value, `PosInf` above every
//! concrete value, and `NegInf < PosInf`. Concrete values compare with their
//! native ordering.
//!
//! The chained comparators [`lt`], [`le`] and [`eq`] check that every adjacent
//! pair of a sequence satisfies the relation, left to right, stopping at the
//! first failing pair.

use crate::num::element::Element;
use std::cmp::Ordering;

/// A concrete value or one of the two infinity sentinels.
///
/// The derived ordering follows declaration order, so
/// `NegInf < Finite(_) < PosInf` holds for every concrete value.
///
/// # Examples
///
/// ```rust
/// # use stride_core::math::extended::Extended;
///
/// assert!(Extended::NegInf < Extended::Finite(-1_000));
/// assert!(Extended::Finite(1_000) < Extended::PosInf);
/// assert!(Extended::<i32>::NegInf < Extended::PosInf);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Extended<T> {
    /// Negative infinity, below every concrete value.
    NegInf,
    /// A concrete value.
    Finite(T),
    /// Positive infinity, above every concrete value.
    PosInf,
}

impl<T> Extended<T> {
    /// Returns `true` if this is a concrete value.
    #[inline]
    pub fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// Returns `true` if this is one of the two sentinels.
    #[inline]
    pub fn is_infinite(&self) -> bool {
        !self.is_finite()
    }

    /// Returns `true` for `-∞`.
    #[inline]
    pub fn is_neg_inf(&self) -> bool {
        matches!(self, Self::NegInf)
    }

    /// Returns `true` for `+∞`.
    #[inline]
    pub fn is_pos_inf(&self) -> bool {
        matches!(self, Self::PosInf)
    }

    /// Returns the concrete value, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::extended::Extended;
    ///
    /// assert_eq!(Extended::Finite(3).finite(), Some(&3));
    /// assert_eq!(Extended::<i32>::PosInf.finite(), None);
    /// ```
    #[inline]
    pub fn finite(&self) -> Option<&T> {
        match self {
            Self::Finite(value) => Some(value),
            _ => None,
        }
    }

    /// Converts into the concrete value, if any.
    #[inline]
    pub fn into_finite(self) -> Option<T> {
        match self {
            Self::Finite(value) => Some(value),
            _ => None,
        }
    }

    /// Maps the concrete value, keeping sentinels as they are.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Extended<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::NegInf => Extended::NegInf,
            Self::Finite(value) => Extended::Finite(f(value)),
            Self::PosInf => Extended::PosInf,
        }
    }

    /// Compares this extended value against a concrete value.
    ///
    /// Returns `None` only when the concrete values are unordered (e.g. NaN).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::extended::Extended;
    /// # use std::cmp::Ordering;
    ///
    /// assert_eq!(Extended::PosInf.cmp_value(&7), Some(Ordering::Greater));
    /// assert_eq!(Extended::Finite(7).cmp_value(&7), Some(Ordering::Equal));
    /// ```
    #[inline]
    pub fn cmp_value(&self, value: &T) -> Option<Ordering>
    where
        T: PartialOrd,
    {
        match self {
            Self::NegInf => Some(Ordering::Less),
            Self::Finite(own) => own.partial_cmp(value),
            Self::PosInf => Some(Ordering::Greater),
        }
    }

    /// Moves a finite value that is a native infinity onto its sentinel.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::extended::Extended;
    ///
    /// assert_eq!(Extended::Finite(f64::NEG_INFINITY).lifted(), Extended::NegInf);
    /// assert_eq!(Extended::Finite(1.5).lifted(), Extended::Finite(1.5));
    /// ```
    #[inline]
    pub fn lifted(self) -> Self
    where
        T: Element,
    {
        match self {
            Self::Finite(value) => value.into_extended(),
            other => other,
        }
    }
}

impl<T> From<T> for Extended<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::Finite(value)
    }
}

impl<T> std::fmt::Display for Extended<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegInf => write!(f, "-∞"),
            Self::Finite(value) => write!(f, "{value}"),
            Self::PosInf => write!(f, "+∞"),
        }
    }
}

/// Returns `true` if `v1 < v2 < ... < vn`.
///
/// Sequences with fewer than two values are trivially ordered.
///
/// # Examples
///
/// ```rust
/// # use stride_core::math::extended::{lt, Extended};
///
/// assert!(lt(&[&Extended::NegInf, &Extended::Finite(1), &Extended::PosInf]));
/// assert!(!lt(&[&Extended::Finite(1), &Extended::Finite(1)]));
/// ```
#[inline]
pub fn lt<T>(values: &[&Extended<T>]) -> bool
where
    T: PartialOrd,
{
    values.windows(2).all(|pair| pair[0] < pair[1])
}

/// Returns `true` if `v1 <= v2 <= ... <= vn`.
///
/// # Examples
///
/// ```rust
/// # use stride_core::math::extended::{le, Extended};
///
/// assert!(le(&[&Extended::Finite(1), &Extended::Finite(1), &Extended::PosInf]));
/// assert!(!le(&[&Extended::Finite(5), &Extended::NegInf]));
/// ```
#[inline]
pub fn le<T>(values: &[&Extended<T>]) -> bool
where
    T: PartialOrd,
{
    values.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Returns `true` if `v1 == v2 == ... == vn`.
#[inline]
pub fn eq<T>(values: &[&Extended<T>]) -> bool
where
    T: PartialEq,
{
    values.windows(2).all(|pair| pair[0] == pair[1])
}
