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

use crate::digits::{abs_value, ten};
use crate::num::DigitInt;

/// Returns the number of decimal digits in `|n|`.
///
/// Counts by repeated division by 10, so `digit_length(0)` is `0`, not `1`:
/// the loop terminates before stripping a single digit. Callers that want a
/// printed width for zero must special-case it themselves.
///
/// Runs in `O(digits)` time and cannot fail.
///
/// # Examples
///
/// ```rust
/// # use denary_core::digits::digit_length;
/// assert_eq!(digit_length(11234352_i64), 8);
/// assert_eq!(digit_length(-5421_i32), 4);
/// assert_eq!(digit_length(0_u64), 0);
/// ```
#[inline]
pub fn digit_length<T: DigitInt>(n: T) -> u32 {
    let ten = ten::<T>();
    let mut value = abs_value(n);
    let mut length = 0;
    while value != T::zero() {
        value = value / ten;
        length += 1;
    }
    length
}

/// Returns the digit of `|n|` at `position`, counted 1-based from the most
/// significant digit.
///
/// Strips `digit_length(n) - position` trailing digits by division, then
/// returns the new trailing digit.
///
/// # Panics
///
/// Panics if `position` is outside `1..=digit_length(n)`. An out-of-range
/// position is a contract violation, not a recoverable condition; note that
/// this makes every position invalid for `n == 0`.
///
/// # Examples
///
/// ```rust
/// # use denary_core::digits::digit_at;
/// assert_eq!(digit_at(5421_i64, 2), 4);
/// assert_eq!(digit_at(5421_i64, 4), 1);
/// assert_eq!(digit_at(-903_i32, 1), 9);
/// ```
pub fn digit_at<T: DigitInt>(n: T, position: u32) -> u8 {
    let length = digit_length(n);
    assert!(
        position >= 1 && position <= length,
        "Invalid digit position: {position} is not within 1..={length} for {n}"
    );

    let ten = ten::<T>();
    let mut value = abs_value(n);
    for _ in 0..(length - position) {
        value = value / ten;
    }
    (value % ten)
        .to_u8()
        .expect("a decimal digit always fits in u8")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_length_basic() {
        assert_eq!(digit_length(11234352_i64), 8);
        assert_eq!(digit_length(1_i64), 1);
        assert_eq!(digit_length(9_i64), 1);
        assert_eq!(digit_length(10_i64), 2);
        assert_eq!(digit_length(123456789_i64), 9);
    }

    #[test]
    fn test_digit_length_zero_is_zero() {
        // Counter-intuitive but contractual: zero has no digits to strip.
        assert_eq!(digit_length(0_i64), 0);
        assert_eq!(digit_length(0_u8), 0);
        assert_eq!(digit_length(0_i128), 0);
    }

    #[test]
    fn test_digit_length_negative() {
        assert_eq!(digit_length(-1_i64), 1);
        assert_eq!(digit_length(-5421_i32), 4);
        assert_eq!(digit_length(-11234352_i64), 8);
    }

    #[test]
    fn test_digit_length_extremes() {
        assert_eq!(digit_length(u64::MAX), 20);
        assert_eq!(digit_length(i64::MAX), 19);
        assert_eq!(digit_length(u8::MAX), 3);
    }

    #[test]
    fn test_digit_length_across_widths() {
        assert_eq!(digit_length(42_u8), 2);
        assert_eq!(digit_length(42_u16), 2);
        assert_eq!(digit_length(42_i32), 2);
        assert_eq!(digit_length(42_u128), 2);
        assert_eq!(digit_length(42_usize), 2);
    }

    #[test]
    fn test_digit_at_basic() {
        assert_eq!(digit_at(5421_i64, 2), 4);
        assert_eq!(digit_at(5421_i64, 1), 5);
        assert_eq!(digit_at(5421_i64, 3), 2);
        assert_eq!(digit_at(5421_i64, 4), 1);
    }

    #[test]
    fn test_digit_at_single_digit() {
        assert_eq!(digit_at(7_u32, 1), 7);
    }

    #[test]
    fn test_digit_at_negative_uses_magnitude() {
        assert_eq!(digit_at(-5421_i64, 2), 4);
        assert_eq!(digit_at(-903_i32, 1), 9);
    }

    #[test]
    fn test_digit_at_interior_zero() {
        assert_eq!(digit_at(903_i64, 2), 0);
        assert_eq!(digit_at(100000_i64, 6), 0);
    }

    #[test]
    #[should_panic(expected = "Invalid digit position")]
    fn test_digit_at_position_zero_panics() {
        digit_at(5421_i64, 0);
    }

    #[test]
    #[should_panic(expected = "Invalid digit position")]
    fn test_digit_at_position_past_end_panics() {
        digit_at(5421_i64, 5);
    }

    #[test]
    #[should_panic(expected = "Invalid digit position")]
    fn test_digit_at_zero_has_no_valid_position() {
        digit_at(0_i64, 1);
    }
}
