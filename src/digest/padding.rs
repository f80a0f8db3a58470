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

//! Block-aligning message padding (FIPS 180-4 §5.1): the message, a 0x80
//! marker byte, zero fill, and the original message's bit-length as a
//! big-endian unsigned 64-bit integer, closing out the last block.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::InputTooLongError;

/// Length in bytes of the trailing bit-length field. Both variants close the
/// message with a 64-bit count, which caps messages at 2^61 - 1 bytes.
const LENGTH_FIELD_LEN: usize = 64 / 8;

/// The padded length of an `n`-byte message: the smallest multiple of
/// `block_len` with room for the message, the marker byte, and the length
/// field.
pub(super) const fn padded_len(n: usize, block_len: usize) -> usize {
    // The tail length is reduced mod block_len before the subtraction, so
    // the unsigned subtraction cannot wrap for any n.
    let pad_bytes = (block_len - (n + 1 + LENGTH_FIELD_LEN) % block_len) % block_len;
    n + 1 + pad_bytes + LENGTH_FIELD_LEN
}

/// Pads `msg` out to a whole number of `block_len`-byte blocks.
///
/// The only failure is a message whose bit-length cannot be represented in
/// the 64-bit length field; every shorter message, including the empty one,
/// pads successfully.
pub(super) fn pad(msg: &[u8], block_len: usize) -> Result<Vec<u8>, InputTooLongError> {
    let bit_len = message_bit_len(msg.len())?;

    let mut padded = vec![0; padded_len(msg.len(), block_len)];
    padded[..msg.len()].copy_from_slice(msg);
    padded[msg.len()] = 0x80;
    // Everything between the marker and the length field is already zero.
    let length_field = padded.len() - LENGTH_FIELD_LEN;
    padded[length_field..].copy_from_slice(&bit_len.to_be_bytes());
    Ok(padded)
}

/// The bit-length of an `n`-byte message, as it appears in the length field.
fn message_bit_len(n: usize) -> Result<u64, InputTooLongError> {
    (n as u64)
        .checked_mul(8)
        .ok_or_else(|| InputTooLongError::new(n))
}
