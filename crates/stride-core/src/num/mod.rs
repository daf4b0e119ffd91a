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

//! # Numeric Foundations
//!
//! Traits describing the scalar domains a range can be built over. This
//! module mirrors the capability-trait style used across the crate: each
//! trait names one capability, and blanket macros implement it for the
//! primitive types.
//!
//! ## Submodules
//!
//! - `element`: The `Element` trait every range endpoint type implements,
//!   with the distance used by `Range::size`. Implemented for big integers,
//!   primitive integers, floats and (with the `chrono` feature) timestamps.
//! - `convert`: `ToInteger` and `ToFloat`, the conversions behind
//!   `Range::to_int_range` and `Range::to_float_range`.
//! - `precision`: Decimal precision helpers that keep stepped float
//!   iteration free of accumulated rounding drift.

pub mod convert;
pub mod element;
pub mod precision;
