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

//! # Decimal Digit Operations
//!
//! The five digit primitives over primitive integers:
//!
//! - [`digit_length`]: number of decimal digits in `|n|` (0 for 0).
//! - [`digit_at`]: the digit at a 1-based position counted from the most
//!   significant digit.
//! - [`to_digits`]: decompose a non-negative integer into a [`DigitVec`],
//!   most-significant digit first, padded or truncated to a target length.
//! - [`from_digits`]: compose a digit slice back into an integer.
//! - [`digit_sum`]: sum of a digit slice.
//!
//! Digit operations act on the absolute value of their input; sign is never
//! part of a digit sequence. Preconditions (digit position in range, input
//! non-negative for decomposition) are contracts enforced by `assert!`:
//! violating them is a programming error and panics rather than returning a
//! recoverable error.

use crate::num::DigitInt;
use smallvec::SmallVec;

mod convert;
mod extract;

pub use convert::{digit_sum, from_digits, to_digits};
pub use extract::{digit_at, digit_length};

/// An owned sequence of decimal digits, most-significant digit first.
///
/// Each element is a digit in `[0, 9]`. Up to 20 digits (enough for any
/// `u64`) are stored inline; longer sequences spill to the heap.
pub type DigitVec = SmallVec<[u8; 20]>;

/// The decimal base in the integer type at hand.
#[inline]
pub(crate) fn ten<T: DigitInt>() -> T {
    T::from(10u8).expect("the decimal base must be representable in any primitive integer type")
}

/// The absolute value of `n`.
///
/// For the minimum value of a signed type the result is not representable;
/// the subtraction overflows and panics in debug builds.
#[inline]
pub(crate) fn abs_value<T: DigitInt>(n: T) -> T {
    if n < T::zero() {
        T::zero() - n
    } else {
        n
    }
}
