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

//! # Digit Numeric Trait
//!
//! Unified numeric bounds for the digit operations. `DigitInt` specifies the
//! integer capabilities the `digits` module requires: the intrinsic primitive
//! integer surface (`PrimInt`, which carries comparison, division, remainder,
//! and lossless-where-possible casts via `NumCast`) plus formatting bounds so
//! contract-violation messages can render the offending value.
//!
//! ## Motivation
//!
//! The digit operations should work identically for `i32`, `u64`, `i128`,
//! and friends without per-type code. Collecting the bounds into one alias
//! keeps the generic signatures short and in one place.

use num_traits::PrimInt;

/// A trait alias for primitive integer types the digit operations accept.
///
/// Implemented automatically for every type satisfying the bounds, which is
/// all of Rust's built-in integer types (`i8` through `i128`, `u8` through
/// `u128`, `isize`, `usize`).
pub trait DigitInt: PrimInt + std::fmt::Debug + std::fmt::Display {}

impl<T> DigitInt for T where T: PrimInt + std::fmt::Debug + std::fmt::Display {}
