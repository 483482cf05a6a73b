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

//! # Denary Big
//!
//! Arbitrary-precision counterparts of the `denary-core` digit operations,
//! over `num_bigint::BigInt`. Same contracts, same edge cases: digit length
//! of zero is zero, decomposition truncates or zero-pads to the requested
//! length, digit positions are 1-based from the most significant digit and
//! bounds-checked by assertion.
//!
//! ## Modules
//!
//! - `digits`: `digit_length`, `digit_at`, `to_digits`, and `from_digits`
//!   for `BigInt` values. Summation needs no big variant; digit sequences
//!   are plain `u8` slices, so `denary_core::digits::digit_sum` applies
//!   unchanged.
//!
//! ## Motivation
//!
//! Keeping the arbitrary-precision surface in its own crate makes bignum
//! support a build-time choice: builds that do not need it simply do not
//! depend on this crate, and `denary-core` is unaffected either way.
//!
//! For values within native range every operation here agrees exactly with
//! its `denary-core` counterpart; the equivalence is part of the test suite.

pub mod digits;
