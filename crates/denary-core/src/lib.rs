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

//! # Denary Core
//!
//! Decimal digit primitives for primitive integers. This crate provides the
//! native-width half of the denary family: counting, extracting, decomposing,
//! composing, and summing decimal digits, generic over any primitive integer
//! type.
//!
//! ## Modules
//!
//! - `digits`: The five digit operations (`digit_length`, `digit_at`,
//!   `to_digits`, `from_digits`, `digit_sum`) together with the `DigitVec`
//!   sequence type they exchange.
//! - `num`: The `DigitInt` trait alias collecting the integer bounds the
//!   digit operations require.
//!
//! ## Motivation
//!
//! Digit-level manipulation shows up in checksum routines, numeric puzzles,
//! and formatting-adjacent code, and is easy to get subtly wrong (sign
//! handling, truncation, inexact `10^k`). These primitives pin the semantics
//! down once, with precondition checks that fail loudly instead of clamping.
//!
//! All operations are pure and allocation happens only for returned digit
//! sequences. The arbitrary-precision counterparts live in `denary-big`;
//! leaving that crate out of a build does not change anything here.
//!
//! Refer to each module for detailed APIs and examples.

pub mod digits;
pub mod num;
