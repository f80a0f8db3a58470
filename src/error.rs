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

use core::fmt;

/// The input message was too long to hash.
///
/// The padding closes every message with its bit-length as a big-endian
/// unsigned 64-bit integer, so a message of 2^61 or more bytes cannot be
/// encoded. This is the only failure mode of the digest functions; every
/// shorter byte sequence, including the empty one, hashes successfully.
#[derive(Clone, Copy, Debug)]
pub struct InputTooLongError {
    // Note that this might not be the exact length of the input; it is
    // whatever quantity was in hand when the length check failed.
    imprecise_input_length: usize,
}

impl InputTooLongError {
    #[cold]
    #[inline(never)]
    pub(crate) fn new(imprecise_input_length: usize) -> Self {
        Self {
            imprecise_input_length,
        }
    }

    /// The length (in bytes) that failed the check.
    #[inline(always)]
    pub fn input_length(&self) -> usize {
        self.imprecise_input_length
    }
}

impl fmt::Display for InputTooLongError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "input of {} bytes exceeds the maximum message length of 2^61 - 1 bytes",
            self.imprecise_input_length
        )
    }
}
