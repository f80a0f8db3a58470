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

//! One-shot SHA-256 and SHA-512 as specified in [FIPS 180-4], rendered as
//! fixed-width lowercase hexadecimal.
//!
//! ```
//! assert_eq!(
//!     fips180::sha256("hello, world"),
//!     "09ca7e4eaa6e8ae9c7d261167129184883644d07dfba7cbfbc4c8a2e08360d5b"
//! );
//! ```
//!
//! The whole message must be in memory; there is no incremental (`update()`)
//! interface, no truncated variants (SHA-224/384), and no keyed constructions
//! (HMAC). The implementation is portable safe Rust and makes no constant-time
//! claims.
//!
//! [FIPS 180-4]: http://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf

#![deny(
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
#![no_std]

extern crate alloc;

mod digest;
mod error;

pub use self::{
    digest::{sha256, sha512, try_sha256, try_sha512},
    error::InputTooLongError,
};
