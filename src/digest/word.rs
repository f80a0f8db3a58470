// Copyright 2026 the fips180 Authors.
//
// Permission to use, copy, modify, and/or distribute this software for any
// purpose with or without fee is hereby granted, provided that the above
// copyright notice and this permission notice appear in all copies.
//
// THE SOFTWARE IS PROVIDED "AS IS" AND THE AUTHORS DISCLAIM ALL WARRANTIES
// WITH REGARD TO THIS SOFTWARE INCLUDING ALL IMPLIED WARRANTIES OF
// MERCHANTABILITY AND FITNESS. IN NO EVENT SHALL THE AUTHORS BE LIABLE FOR ANY
// SPECIAL, DIRECT, INDIRECT, OR CONSEQUENTIAL DAMAGES OR ANY DAMAGES
// WHATSOEVER RESULTING FROM LOSS OF USE, DATA OR PROFITS, WHETHER IN AN ACTION
// OF CONTRACT, NEGLIGENCE OR OTHER TORTIOUS ACTION, ARISING OUT OF OR IN
// CONNECTION WITH THE USE OR PERFORMANCE OF THIS SOFTWARE.

use core::num::Wrapping;
use core::ops::{Add, AddAssign, BitAnd, BitXor, Not, Shr};

/// One native word of the hash state.
///
/// All addition wraps modulo the word width; FIPS 180-4 mandates the
/// wraparound, so the implementing types are `Wrapping` integers.
pub(crate) trait Word:
    'static
    + Copy
    + Add<Output = Self>
    + AddAssign
    + BitAnd<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shr<usize, Output = Self>
{
    const ZERO: Self;

    /// The word's big-endian byte encoding.
    type Bytes: AsRef<[u8]>;

    /// The bare (non-wrapping) integer type; constant tables are stored as
    /// this type.
    type Leaky: Copy + 'static;

    fn from_leaky(leaky: Self::Leaky) -> Self;

    /// Loads a word from exactly `size_of::<Self::Bytes>()` big-endian bytes.
    fn from_be_bytes(bytes: &[u8]) -> Self;

    fn to_be_bytes(self) -> Self::Bytes;

    /// Circular right rotation over the full word width. Unlike a plain
    /// shift, the bits rotated out on the right re-enter on the left.
    fn rotr(self, count: u32) -> Self;
}

pub(crate) type W32 = Wrapping<u32>;
pub(crate) type W64 = Wrapping<u64>;

impl Word for W32 {
    const ZERO: Self = Self(0);

    type Bytes = [u8; 4];
    type Leaky = u32;

    #[inline(always)]
    fn from_leaky(leaky: u32) -> Self {
        Self(leaky)
    }

    #[inline(always)]
    fn from_be_bytes(bytes: &[u8]) -> Self {
        let mut word = [0u8; 4];
        word.copy_from_slice(bytes);
        Self(u32::from_be_bytes(word))
    }

    #[inline(always)]
    fn to_be_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    #[inline(always)]
    fn rotr(self, count: u32) -> Self {
        Self(self.0.rotate_right(count))
    }
}

impl Word for W64 {
    const ZERO: Self = Self(0);

    type Bytes = [u8; 8];
    type Leaky = u64;

    #[inline(always)]
    fn from_leaky(leaky: u64) -> Self {
        Self(leaky)
    }

    #[inline(always)]
    fn from_be_bytes(bytes: &[u8]) -> Self {
        let mut word = [0u8; 8];
        word.copy_from_slice(bytes);
        Self(u64::from_be_bytes(word))
    }

    #[inline(always)]
    fn to_be_bytes(self) -> [u8; 8] {
        self.0.to_be_bytes()
    }

    #[inline(always)]
    fn rotr(self, count: u32) -> Self {
        Self(self.0.rotate_right(count))
    }
}
