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

//! Error types shared by every range family.
//!
//! All failures are synchronous and happen at the offending call. A
//! constructor either returns a fully built value or an error; no partially
//! built range ever escapes.

use crate::math::bound::BoundSide;
use std::fmt::Display;

/// The broad category a [`RangeError`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request violates the rules of the range domain itself.
    Domain,
    /// The element type lacks an operation the query needs.
    UnsupportedType,
}

/// The error type for range construction, set algebra and queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// A closed bound was paired with an infinite endpoint.
    InfiniteClosedBound {
        /// The side carrying the offending bound.
        side: BoundSide,
    },
    /// A stepped range was given a step of zero (or a non-number step).
    ZeroStep,
    /// The union of two ranges would not be a single contiguous range.
    DisjointUnion {
        /// The rendered left operand.
        left: String,
        /// The rendered right operand.
        right: String,
    },
    /// A float range was asked to start iterating from an open bound.
    OpenStart,
    /// A textual endpoint is neither an infinity token nor an integer.
    InvalidEndpoint {
        /// The text that failed to parse.
        token: String,
    },
    /// The element type does not define a distance between two values.
    UnsupportedType {
        /// The name of the element type.
        type_name: &'static str,
    },
}

impl RangeError {
    /// Returns the category of this error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::error::{ErrorKind, RangeError};
    ///
    /// assert_eq!(RangeError::ZeroStep.kind(), ErrorKind::Domain);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedType { .. } => ErrorKind::UnsupportedType,
            _ => ErrorKind::Domain,
        }
    }
}

impl Display for RangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InfiniteClosedBound { side: BoundSide::Lower } => {
                write!(f, "Lower endpoint -∞ cannot be closed")
            }
            Self::InfiniteClosedBound { side: BoundSide::Upper } => {
                write!(f, "Upper endpoint +∞ cannot be closed")
            }
            Self::ZeroStep => write!(f, "Step must be a nonzero number"),
            Self::DisjointUnion { left, right } => {
                write!(f, "Cannot union {left} and {right}: the result is not contiguous")
            }
            Self::OpenStart => write!(f, "Cannot start iterating from an open bound"),
            Self::InvalidEndpoint { token } => {
                write!(f, "Could not parse '{token}' as an integer or infinity token")
            }
            Self::UnsupportedType { type_name } => {
                write!(f, "Unsupported element type: {type_name}")
            }
        }
    }
}

impl std::error::Error for RangeError {}

/// Convenience alias used throughout `stride-core`.
pub type Result<T> = std::result::Result<T, RangeError>;
