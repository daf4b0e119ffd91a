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

//! # Stride Core
//!
//! Interval arithmetic over ordered domains. A range is a set of values
//! between two endpoints, each of which may be a concrete value or an
//! infinity, with each bound independently open or closed.
//!
//! ## Modules
//!
//! - `math`: The range types themselves. `Range<T>` supports membership,
//!   enclosure, union, intersection, difference and measurement over any
//!   ordered element type; `IntRange` and `FloatRange` add a step and a
//!   direction for lazy iteration.
//! - `num`: The element capabilities ranges rely on: distances for
//!   `size`, conversions onto the integers and floats, and decimal
//!   precision tracking for float iteration.
//! - `factory`: `range`, `range_between` and `range_by` (plus the `range!`
//!   macro) for building integer ranges Python-style, with infinity tokens
//!   such as `"-oo"` accepted as endpoints.
//! - `error`: `RangeError` and the crate-wide `Result` alias.
//!
//! ## Features
//!
//! - `chrono` (default): Ranges over `chrono` dates and timestamps, measured
//!   as `chrono::Duration`.
//!
//! ## Logging
//!
//! Diagnostics go through the `log` facade: empty-range normalization at
//! `trace`, rejected unions and ranges whose iteration cannot start at
//! `debug`. No logger is installed by this crate.
//!
//! ## Example
//!
//! ```rust
//! use stride_core::math::range::Range;
//!
//! let a = Range::closed(0, 10);
//! let b = Range::open(5, 15);
//! assert_eq!((&a & &b).to_string(), "(5, 10]");
//! assert_eq!((&a | &b).unwrap().to_string(), "[0, 15)");
//! ```

pub mod error;
pub mod factory;
pub mod math;
pub mod num;
