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

//! # Math Primitives
//!
//! Interval types over ordered domains, from the order extension they are
//! built on up to the stepped integer and float ranges.
//!
//! ## Submodules
//!
//! - `extended`: `Extended<T>`, a value domain widened with `-∞` and `+∞`,
//!   and the chained comparators `lt`, `le` and `eq`.
//! - `bound`: `BoundType` (open or closed) and the comparison each bound
//!   type applies to a pair of endpoints.
//! - `range`: `Range<T>`, a continuous interval with construction
//!   validation, predicates (membership, enclosure, disjointness), set
//!   operations (union/intersection/difference), measurement and rendering.
//! - `int_range`: `IntRange`, a stepped interval over big integers with lazy
//!   iteration in either direction.
//! - `float_range`: `FloatRange`, a stepped interval over `f64` whose
//!   iteration stays on the decimal grid of its start and step.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod bound;
pub mod extended;
pub mod float_range;
pub mod int_range;
pub mod range;
