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

//! # Bound Types
//!
//! Whether an endpoint value itself belongs to a range. An `Open` bound
//! excludes its endpoint (`a < x`), a `Closed` bound includes it (`a <= x`).
//! The comparison is infinity-aware, so the same test works for finite and
//! infinite endpoints alike.

use crate::math::extended::Extended;
use std::cmp::Ordering;

/// The side of a range an endpoint sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundSide {
    /// The lower endpoint.
    Lower,
    /// The upper endpoint.
    Upper,
}

/// The type of a range bound.
///
/// # Examples
///
/// ```rust
/// # use stride_core::math::bound::BoundType;
/// # use stride_core::math::extended::Extended;
///
/// let a = Extended::Finite(3);
/// assert!(BoundType::Closed.compare(&a, &a));
/// assert!(!BoundType::Open.compare(&a, &a));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundType {
    /// The bound excludes its endpoint.
    Open,
    /// The bound includes its endpoint.
    Closed,
}

impl BoundType {
    /// Returns `true` for [`BoundType::Open`].
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Returns `true` for [`BoundType::Closed`].
    #[inline]
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Returns the opposite bound type.
    #[inline]
    pub const fn flip(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    /// Returns `a < b` for `Open` and `a <= b` for `Closed`.
    #[inline]
    pub fn compare<T>(self, a: &Extended<T>, b: &Extended<T>) -> bool
    where
        T: PartialOrd,
    {
        self.admits(a.partial_cmp(b))
    }

    /// Returns `true` if the ordering of `a` relative to `b` satisfies this
    /// bound when `a` is the smaller side.
    ///
    /// Unordered comparisons (`None`) never satisfy a bound.
    #[inline]
    pub fn admits(self, ordering: Option<Ordering>) -> bool {
        match (self, ordering) {
            (_, Some(Ordering::Less)) => true,
            (Self::Closed, Some(Ordering::Equal)) => true,
            _ => false,
        }
    }

    /// Returns the bracket pair used when rendering this bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::bound::BoundType;
    ///
    /// assert_eq!(BoundType::Open.brackets(), ('(', ')'));
    /// assert_eq!(BoundType::Closed.brackets(), ('[', ']'));
    /// ```
    #[inline]
    pub const fn brackets(self) -> (char, char) {
        match self {
            Self::Open => ('(', ')'),
            Self::Closed => ('[', ']'),
        }
    }

    /// Returns the inequality symbols used when rendering this bound.
    #[inline]
    pub const fn inequalities(self) -> (&'static str, &'static str) {
        match self {
            Self::Open => ("<", ">"),
            Self::Closed => ("<=", ">="),
        }
    }
}

impl TryFrom<char> for BoundType {
    type Error = char;

    /// Parses a bracket character; returns the character back if it is not
    /// one of `(`, `)`, `[` or `]`.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '(' | ')' => Ok(Self::Open),
            '[' | ']' => Ok(Self::Closed),
            other => Err(other),
        }
    }
}

impl std::fmt::Display for BoundType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_finite() {
        let one = Extended::Finite(1);
        let two = Extended::Finite(2);

        assert!(BoundType::Open.compare(&one, &two));
        assert!(BoundType::Closed.compare(&one, &two));
        assert!(!BoundType::Open.compare(&two, &one));
        assert!(!BoundType::Closed.compare(&two, &one));
        assert!(BoundType::Closed.compare(&one, &one));
        assert!(!BoundType::Open.compare(&one, &one));
    }

    #[test]
    fn test_compare_infinite() {
        let neg: Extended<i32> = Extended::NegInf;
        let pos: Extended<i32> = Extended::PosInf;
        let zero = Extended::Finite(0);

        assert!(BoundType::Open.compare(&neg, &zero));
        assert!(BoundType::Open.compare(&zero, &pos));
        assert!(BoundType::Open.compare(&neg, &pos));
        assert!(!BoundType::Open.compare(&pos, &neg));
        assert!(!BoundType::Open.compare(&neg, &neg));
        assert!(!BoundType::Closed.compare(&pos, &zero));
    }

    #[test]
    fn test_admits_unordered() {
        assert!(!BoundType::Closed.admits(None));
        assert!(!BoundType::Open.admits(Some(Ordering::Equal)));
        assert!(!BoundType::Closed.admits(Some(Ordering::Greater)));
    }

    #[test]
    fn test_flip() {
        assert_eq!(BoundType::Open.flip(), BoundType::Closed);
        assert_eq!(BoundType::Closed.flip(), BoundType::Open);
    }

    #[test]
    fn test_parse_brackets() {
        assert_eq!(BoundType::try_from('('), Ok(BoundType::Open));
        assert_eq!(BoundType::try_from(')'), Ok(BoundType::Open));
        assert_eq!(BoundType::try_from('['), Ok(BoundType::Closed));
        assert_eq!(BoundType::try_from(']'), Ok(BoundType::Closed));
        assert_eq!(BoundType::try_from('{'), Err('{'));
    }

    #[test]
    fn test_inequalities() {
        assert_eq!(BoundType::Open.inequalities(), ("<", ">"));
        assert_eq!(BoundType::Closed.inequalities(), ("<=", ">="));
    }
}
