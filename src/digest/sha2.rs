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

//! The SHA-2 round pipeline, generic over the word width.
//!
//! The 32- and 64-bit variants share the schedule recurrence and the round
//! structure; they differ only in word width, round count, rotation amounts,
//! and constant tables. The [`Sha2`] trait carries those per-variant
//! parameters so the pipeline is written once.

use super::word::{Word, W32, W64};

mod k;

/// Number of words in the hash state.
pub(super) const CHAINING_WORDS: usize = 8;

pub(super) type State<S> = [S; CHAINING_WORDS];

/// A SHA-2 input word, with its variant's specification parameters.
pub(super) trait Sha2: Word {
    // FIPS 180-4 {4.1.2, 4.1.3}
    const BIG_SIGMA_0: (u32, u32, u32);
    const BIG_SIGMA_1: (u32, u32, u32);
    const SMALL_SIGMA_0: (u32, u32, usize);
    const SMALL_SIGMA_1: (u32, u32, usize);

    /// Rounds per block; also the length of the message schedule.
    const ROUNDS: usize;

    /// Block length in bytes.
    const BLOCK_LEN: usize;

    /// The specification-defined initial hash state (FIPS 180-4 §5.3).
    const INITIAL: State<Self>;

    /// One block's expanded message schedule.
    type Schedule: AsRef<[Self]> + AsMut<[Self]>;
    fn zero_schedule() -> Self::Schedule;

    /// The round-constant table (FIPS 180-4 §4.2).
    type KTable: AsRef<[Self::Leaky]> + 'static;
    fn k_table() -> &'static Self::KTable;
}

// SHA-256
impl Sha2 for W32 {
    const BIG_SIGMA_0: (u32, u32, u32) = (2, 13, 22);
    const BIG_SIGMA_1: (u32, u32, u32) = (6, 11, 25);
    const SMALL_SIGMA_0: (u32, u32, usize) = (7, 18, 3);
    const SMALL_SIGMA_1: (u32, u32, usize) = (17, 19, 10);

    const ROUNDS: usize = 64;
    const BLOCK_LEN: usize = 512 / 8;
    const INITIAL: State<Self> = k::H0_32;

    type Schedule = [Self; Self::ROUNDS];
    fn zero_schedule() -> Self::Schedule {
        [Self::ZERO; Self::ROUNDS]
    }

    type KTable = [u32; Self::ROUNDS];
    fn k_table() -> &'static Self::KTable {
        &k::K_32
    }
}

// SHA-512
impl Sha2 for W64 {
    const BIG_SIGMA_0: (u32, u32, u32) = (28, 34, 39);
    const BIG_SIGMA_1: (u32, u32, u32) = (14, 18, 41);
    const SMALL_SIGMA_0: (u32, u32, usize) = (1, 8, 7);
    const SMALL_SIGMA_1: (u32, u32, usize) = (19, 61, 6);

    const ROUNDS: usize = 80;
    const BLOCK_LEN: usize = 1024 / 8;
    const INITIAL: State<Self> = k::H0_64;

    type Schedule = [Self; Self::ROUNDS];
    fn zero_schedule() -> Self::Schedule {
        [Self::ZERO; Self::ROUNDS]
    }

    type KTable = [u64; Self::ROUNDS];
    fn k_table() -> &'static Self::KTable {
        &k::K_64
    }
}

/// Expands one block into its message schedule
/// (FIPS 180-4 {6.2.2, 6.4.2} Step 1).
///
/// The schedule is derived from this block alone and is recomputed for every
/// block; it does not depend on the running state.
#[inline]
pub(super) fn schedule<S: Sha2>(block: &[u8]) -> S::Schedule {
    debug_assert_eq!(block.len(), S::BLOCK_LEN);

    let mut w = S::zero_schedule();
    {
        let w = w.as_mut();
        // The block is exactly 16 words long.
        for (wt, mt) in w.iter_mut().zip(block.chunks_exact(S::BLOCK_LEN / 16)) {
            *wt = S::from_be_bytes(mt);
        }
        for t in 16..S::ROUNDS {
            w[t] = small_sigma_1(w[t - 2]) + w[t - 7] + small_sigma_0(w[t - 15]) + w[t - 16];
        }
    }
    w
}

/// One compression pass (FIPS 180-4 {6.2.2, 6.4.2} Steps 2-4): mixes one
/// block's schedule and the round constants into the state and returns the
/// next state.
#[inline]
pub(super) fn compress<S: Sha2>(state: State<S>, w: &S::Schedule) -> State<S> {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = state;

    for (kt, wt) in S::k_table().as_ref().iter().zip(w.as_ref()) {
        let t1 = h + big_sigma_1(e) + ch(e, f, g) + S::from_leaky(*kt) + *wt;
        let t2 = big_sigma_0(a) + maj(a, b, c);
        h = g;
        g = f;
        f = e;
        e = d + t1;
        d = c;
        c = b;
        b = a;
        a = t1 + t2;
    }

    // Feed the working variables back into the input state (the
    // Davies-Meyer construction).
    let mut next = state;
    next[0] += a;
    next[1] += b;
    next[2] += c;
    next[3] += d;
    next[4] += e;
    next[5] += f;
    next[6] += g;
    next[7] += h;
    next
}

// FIPS 180-4 {4.1.2, 4.1.3}
#[inline(always)]
fn ch<W: Word>(x: W, y: W, z: W) -> W {
    (x & y) ^ (!x & z)
}

// FIPS 180-4 {4.1.2, 4.1.3}
#[inline(always)]
fn maj<W: Word>(x: W, y: W, z: W) -> W {
    (x & y) ^ (x & z) ^ (y & z)
}

// FIPS 180-4 {4.1.2, 4.1.3}
#[inline(always)]
fn big_sigma_0<S: Sha2>(x: S) -> S {
    x.rotr(S::BIG_SIGMA_0.0) ^ x.rotr(S::BIG_SIGMA_0.1) ^ x.rotr(S::BIG_SIGMA_0.2)
}

// FIPS 180-4 {4.1.2, 4.1.3}
#[inline(always)]
fn big_sigma_1<S: Sha2>(x: S) -> S {
    x.rotr(S::BIG_SIGMA_1.0) ^ x.rotr(S::BIG_SIGMA_1.1) ^ x.rotr(S::BIG_SIGMA_1.2)
}

// FIPS 180-4 {4.1.2, 4.1.3}
#[inline(always)]
fn small_sigma_0<S: Sha2>(x: S) -> S {
    x.rotr(S::SMALL_SIGMA_0.0) ^ x.rotr(S::SMALL_SIGMA_0.1) ^ (x >> S::SMALL_SIGMA_0.2)
}

// FIPS 180-4 {4.1.2, 4.1.3}
#[inline(always)]
fn small_sigma_1<S: Sha2>(x: S) -> S {
    x.rotr(S::SMALL_SIGMA_1.0) ^ x.rotr(S::SMALL_SIGMA_1.1) ^ (x >> S::SMALL_SIGMA_1.2)
}

#[cfg(test)]
mod tests {
    use super::{ch, k, maj, schedule, Sha2, Word, W32, W64};

    #[test]
    fn schedule_starts_with_the_block_words_big_endian() {
        let mut block = [0u8; 64];
        block[0] = 0x01;
        block[1] = 0x02;
        block[2] = 0x03;
        block[3] = 0x04;
        block[60] = 0xaa;
        block[63] = 0xbb;

        let w = schedule::<W32>(&block);
        let w = w.as_ref();
        assert_eq!(w[0], W32::from_leaky(0x0102_0304));
        assert_eq!(w[1], W32::ZERO);
        assert_eq!(w[15], W32::from_leaky(0xaa00_00bb));
    }

    #[test]
    fn schedule_of_a_zero_block_is_zero_through_word_16() {
        // ssigma0(0) == ssigma1(0) == 0, so the first expanded word of an
        // all-zero block is also zero.
        let w = schedule::<W64>(&[0u8; 128]);
        assert_eq!(w.as_ref()[16], W64::ZERO);
    }

    #[test]
    fn ch_selects_and_maj_votes() {
        let x = W32::from_leaky(0xffff_0000);
        let y = W32::from_leaky(0x1234_5678);
        let z = W32::from_leaky(0x9abc_def0);
        // ch picks y-bits where x is set, z-bits elsewhere.
        assert_eq!(ch(x, y, z), W32::from_leaky(0x1234_def0));
        // maj takes each bit's majority value.
        assert_eq!(maj(x, y, z), W32::from_leaky(0x9abc_5670));
        assert_eq!(maj(x, x, z), x);
    }

    #[test]
    fn constant_tables_match_the_specification_endpoints() {
        assert_eq!(k::K_32.len(), <W32 as Sha2>::ROUNDS);
        assert_eq!(k::K_32[0], 0x428a2f98);
        assert_eq!(k::K_32[63], 0xc67178f2);

        assert_eq!(k::K_64.len(), <W64 as Sha2>::ROUNDS);
        assert_eq!(k::K_64[0], 0x428a2f98d728ae22);
        assert_eq!(k::K_64[79], 0x6c44198c4a475817);

        assert_eq!(k::H0_32[0], W32::from_leaky(0x6a09e667));
        assert_eq!(k::H0_32[7], W32::from_leaky(0x5be0cd19));
        assert_eq!(k::H0_64[0], W64::from_leaky(0x6a09e667f3bcc908));
        assert_eq!(k::H0_64[7], W64::from_leaky(0x5be0cd19137e2179));
    }
}
