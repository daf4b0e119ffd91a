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

//! Decimal precision helpers for stepped float iteration.
//!
//! Repeatedly adding a decimal step such as `0.1` to a float accumulates
//! binary rounding error. Rounding every advanced value back to the number
//! of fractional digits present in the start and the step keeps the
//! progression on the decimal grid the caller wrote down.

/// The largest number of fractional digits tracked during iteration.
pub const MAX_PRECISION: u32 = 15;

/// Returns the number of fractional digits in the shortest decimal
/// rendering of `value`, capped at [`MAX_PRECISION`].
///
/// # Examples
///
/// ```rust
/// # use stride_core::num::precision::fraction_digits;
///
/// assert_eq!(fraction_digits(3.0), 0);
/// assert_eq!(fraction_digits(0.25), 2);
/// assert_eq!(fraction_digits(-1.125), 3);
/// ```
pub fn fraction_digits(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    let rendered = value.to_string();
    let digits = rendered
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len());
    u32::try_from(digits).map_or(MAX_PRECISION, |d| d.min(MAX_PRECISION))
}

/// Rounds `value` to `digits` fractional digits, half away from zero.
///
/// Values that cannot be scaled without overflowing are returned unchanged.
///
/// # Examples
///
/// ```rust
/// # use stride_core::num::precision::round_to;
///
/// assert_eq!(round_to(0.1 + 0.2, 1), 0.3);
/// assert_eq!(round_to(2.5, 0), 3.0);
/// ```
pub fn round_to(value: f64, digits: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(digits.min(MAX_PRECISION) as i32);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}
