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

//! # Arbitrary-Precision Digit Operations
//!
//! The digit primitives over `num_bigint::BigInt`. All operations work on
//! the magnitude of their input; sign is never part of a digit sequence.
//! Digit sequences are the same [`DigitVec`] the native family uses, so the
//! two families compose freely.

use denary_core::digits::DigitVec;
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};
use smallvec::smallvec;

/// The decimal base as a `BigUint`.
#[inline]
fn ten() -> BigUint {
    BigUint::from(10u32)
}

/// Returns the number of decimal digits in the magnitude of `n`.
///
/// Counts by repeated division by 10, so `digit_length` of zero is `0`, not
/// `1`, exactly as in the native variant.
///
/// # Examples
///
/// ```rust
/// # use num_bigint::BigInt;
/// # use denary_big::digits::digit_length;
/// assert_eq!(digit_length(&BigInt::from(11234352)), 8);
/// assert_eq!(digit_length(&BigInt::from(-5421)), 4);
/// assert_eq!(digit_length(&BigInt::ZERO), 0);
/// ```
pub fn digit_length(n: &BigInt) -> u64 {
    let ten = ten();
    let mut value = n.magnitude().clone();
    let mut length = 0;
    while !value.is_zero() {
        value /= &ten;
        length += 1;
    }
    length
}

/// Returns the digit of the magnitude of `n` at `position`, counted 1-based
/// from the most significant digit.
///
/// # Panics
///
/// Panics if `position` is outside `1..=digit_length(n)`, the same contract
/// the native `digit_at` enforces.
///
/// # Examples
///
/// ```rust
/// # use num_bigint::BigInt;
/// # use denary_big::digits::digit_at;
/// let n = BigInt::from(123456789);
/// assert_eq!(digit_at(&n, 3), 3);
/// assert_eq!(digit_at(&n, 7), 7);
/// ```
pub fn digit_at(n: &BigInt, position: u64) -> u8 {
    let length = digit_length(n);
    assert!(
        position >= 1 && position <= length,
        "Invalid digit position: {position} is not within 1..={length} for {n}"
    );

    let ten = ten();
    let mut value = n.magnitude().clone();
    for _ in 0..(length - position) {
        value /= &ten;
    }
    let (_, digit) = value.div_rem(&ten);
    digit
        .to_u8()
        .expect("a decimal digit always fits in u8")
}

/// Decomposes a non-negative `BigInt` into a [`DigitVec`] of exactly
/// `length` digits, most-significant digit first.
///
/// Shares the native variant's edge cases: a `length` below the true digit
/// count silently keeps only the least-significant `length` digits, and a
/// `length` above it zero-pads on the left.
///
/// # Panics
///
/// Panics if `n` is negative.
///
/// # Examples
///
/// ```rust
/// # use num_bigint::BigInt;
/// # use denary_big::digits::to_digits;
/// let digits = to_digits(&BigInt::from(5421), 4);
/// assert_eq!(digits.as_slice(), [5, 4, 2, 1]);
/// ```
pub fn to_digits(n: &BigInt, length: usize) -> DigitVec {
    assert!(
        n.sign() != Sign::Minus,
        "Invalid decomposition input: {n} is negative"
    );

    let ten = ten();
    let mut digits: DigitVec = smallvec![0u8; length];
    let mut value = n.magnitude().clone();
    for slot in digits.iter_mut().rev() {
        let (quotient, remainder) = value.div_rem(&ten);
        *slot = remainder
            .to_u8()
            .expect("a decimal digit always fits in u8");
        value = quotient;
    }
    digits
}

/// Composes a digit slice, most-significant digit first, into a `BigInt`.
///
/// Accumulates multiply-by-ten-and-add per digit in exact big-integer
/// arithmetic; composition is exact for any length. Digits are expected to
/// be in `[0, 9]` but are not range-checked.
///
/// # Examples
///
/// ```rust
/// # use num_bigint::BigInt;
/// # use denary_big::digits::from_digits;
/// let n = from_digits(&[1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// assert_eq!(n, BigInt::from(123456789));
/// ```
pub fn from_digits(digits: &[u8]) -> BigInt {
    let ten = ten();
    let mut value = BigUint::zero();
    for &digit in digits {
        value = value * &ten + digit;
    }
    BigInt::from(value)
}
