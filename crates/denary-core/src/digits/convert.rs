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

use crate::digits::{DigitVec, ten};
use crate::num::DigitInt;
use smallvec::smallvec;

/// Decomposes a non-negative integer into a [`DigitVec`] of exactly `length`
/// digits, most-significant digit first.
///
/// Fills right-to-left: each step writes the current least-significant digit
/// and divides by 10. Two deliberate edge cases follow from that:
///
/// - If `length` is smaller than `digit_length(n)`, the result holds only
///   the least-significant `length` digits. Truncation is silent, not an
///   error.
/// - If `length` is larger, the leading positions come out as zero digits.
///
/// # Panics
///
/// Panics if `n` is negative. A negative input is a contract violation; take
/// the absolute value first if the magnitude's digits are wanted.
///
/// # Examples
///
/// ```rust
/// # use denary_core::digits::to_digits;
/// let digits = to_digits(123456789_i64, 9);
/// assert_eq!(digits.as_slice(), [1, 2, 3, 4, 5, 6, 7, 8, 9]);
///
/// // Truncation keeps the least-significant digits.
/// assert_eq!(to_digits(123456789_i64, 3).as_slice(), [7, 8, 9]);
///
/// // Oversized lengths zero-pad on the left.
/// assert_eq!(to_digits(42_u32, 4).as_slice(), [0, 0, 4, 2]);
/// ```
pub fn to_digits<T: DigitInt>(n: T, length: usize) -> DigitVec {
    assert!(
        n >= T::zero(),
        "Invalid decomposition input: {n} is negative"
    );

    let ten = ten::<T>();
    let mut digits: DigitVec = smallvec![0u8; length];
    let mut value = n;
    for slot in digits.iter_mut().rev() {
        *slot = (value % ten)
            .to_u8()
            .expect("a decimal digit always fits in u8");
        value = value / ten;
    }
    digits
}

/// Composes a digit slice, most-significant digit first, back into an
/// integer.
///
/// Accumulates `value = value * 10 + digit` left to right, which is the
/// exact-integer evaluation of `Σ digits[i] * 10^(len - i - 1)`. No
/// floating-point is involved, so composition is exact for every length the
/// target type can hold.
///
/// Digits are expected to be in `[0, 9]` but are not range-checked;
/// out-of-range values yield a mathematically consistent (if meaningless)
/// result. Overflow beyond `T` follows Rust's standard arithmetic semantics
/// (panic in debug builds, wrap in release).
///
/// # Examples
///
/// ```rust
/// # use denary_core::digits::from_digits;
/// let n: i64 = from_digits(&[1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// assert_eq!(n, 123456789);
/// assert_eq!(from_digits::<u32>(&[]), 0);
/// ```
pub fn from_digits<T: DigitInt>(digits: &[u8]) -> T {
    let ten = ten::<T>();
    let mut value = T::zero();
    for &digit in digits {
        let digit = T::from(digit).expect("digit must be representable in the target type");
        value = value * ten + digit;
    }
    value
}

/// Sums the digits of a slice, widened to `u64`.
///
/// # Examples
///
/// ```rust
/// # use denary_core::digits::digit_sum;
/// assert_eq!(digit_sum(&[1, 2, 3, 4, 5, 6, 7, 8, 9]), 45);
/// ```
#[inline]
pub fn digit_sum(digits: &[u8]) -> u64 {
    digits.iter().map(|&d| u64::from(d)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digits::digit_length;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_to_digits_exact_length() {
        let digits = to_digits(123456789_i64, 9);
        assert_eq!(digits.as_slice(), [1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(digits.len(), 9);
    }

    #[test]
    fn test_to_digits_truncates_to_least_significant() {
        assert_eq!(to_digits(123456789_i64, 3).as_slice(), [7, 8, 9]);
        assert_eq!(to_digits(5421_u32, 1).as_slice(), [1]);
    }

    #[test]
    fn test_to_digits_zero_pads_leading() {
        assert_eq!(to_digits(42_u32, 4).as_slice(), [0, 0, 4, 2]);
        assert_eq!(to_digits(0_i64, 3).as_slice(), [0, 0, 0]);
    }

    #[test]
    fn test_to_digits_zero_length() {
        assert!(to_digits(123_i64, 0).is_empty());
        assert!(to_digits(0_i64, 0).is_empty());
    }

    #[test]
    fn test_to_digits_matches_digit_length() {
        for n in [0_u64, 1, 9, 10, 99, 100, 11234352, u64::MAX] {
            let length = digit_length(n) as usize;
            assert_eq!(to_digits(n, length).len(), length);
        }
    }

    #[test]
    #[should_panic(expected = "Invalid decomposition input")]
    fn test_to_digits_negative_panics() {
        to_digits(-1_i64, 1);
    }

    #[test]
    fn test_from_digits_basic() {
        assert_eq!(from_digits::<i64>(&[1, 2, 3, 4, 5, 6, 7, 8, 9]), 123456789);
        assert_eq!(from_digits::<u32>(&[5, 4, 2, 1]), 5421);
        assert_eq!(from_digits::<i32>(&[7]), 7);
    }

    #[test]
    fn test_from_digits_empty_and_zeros() {
        assert_eq!(from_digits::<i64>(&[]), 0);
        assert_eq!(from_digits::<i64>(&[0, 0, 0]), 0);
        // Leading zeros do not disturb the value.
        assert_eq!(from_digits::<u64>(&[0, 0, 4, 2]), 42);
    }

    #[test]
    fn test_from_digits_exact_for_wide_values() {
        // 19 digits; a float pow based composition would round here.
        let digits = to_digits(i64::MAX, 19);
        assert_eq!(from_digits::<i64>(&digits), i64::MAX);

        let digits = to_digits(u64::MAX, 20);
        assert_eq!(from_digits::<u64>(&digits), u64::MAX);
    }

    #[test]
    fn test_digit_sum_basic() {
        assert_eq!(digit_sum(&[1, 2, 3, 4, 5, 6, 7, 8, 9]), 45);
        assert_eq!(digit_sum(&[9, 9, 9]), 27);
        assert_eq!(digit_sum(&[0]), 0);
        assert_eq!(digit_sum(&[]), 0);
    }

    #[test]
    fn test_round_trip_literals() {
        let n = 123456789_i64;
        let length = digit_length(n) as usize;
        let digits = to_digits(n, length);
        assert_eq!(digits.len(), length);
        assert_eq!(from_digits::<i64>(&digits), n);
    }

    #[test]
    fn test_round_trip_random() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..1_000 {
            let n: u64 = rng.gen();
            let length = digit_length(n) as usize;
            let digits = to_digits(n, length);
            assert!(digits.iter().all(|&d| d <= 9));
            assert_eq!(from_digits::<u64>(&digits), n);
        }
        for _ in 0..1_000 {
            let n = rng.gen_range(0..=i64::MAX);
            let length = digit_length(n) as usize;
            assert_eq!(from_digits::<i64>(&to_digits(n, length)), n);
        }
    }
}
