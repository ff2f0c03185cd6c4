//! BLAKE2b internal computations
//!
//! This module contains the round constants and the compression function
//! used by the BLAKE2b hash function, as defined in RFC 7693 §2.6-2.7.
//!
//! It is intentionally kept separate from the streaming interface to:
//! - make the core algorithm easier to audit
//! - isolate performance-critical logic
//! - clearly distinguish specification-defined constants from state
//!   management
//!
//! All arithmetic wraps modulo 2⁶⁴, matching the BLAKE2b specification.

/// Initialization vector (the SHA-512 IV, reused verbatim by BLAKE2b).
pub(crate) const IV: [u64; 8] = [
    0x6a09e667f3bcc908,
    0xbb67ae8584caa73b,
    0x3c6ef372fe94f82b,
    0xa54ff53a5f1d36f1,
    0x510e527fade682d1,
    0x9b05688c2b3e6c1f,
    0x1f83d9abfb41bd6b,
    0x5be0cd19137e2179,
];

/// Message-word permutation schedule for the 12 rounds (RFC 7693 §2.7).
pub(crate) const SIGMA: [[usize; 16]; 12] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
    [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
    [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
    [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
    [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
    [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
    [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
    [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
    [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
];

const ROUNDS: usize = 12;

/// The BLAKE2b mixing function G (RFC 7693 §3.1).
///
/// Unlike Argon2's GB, this G adds message words `x`/`y` instead of using
/// the BlaMka multiplication step; the rotation constants are 32, 24, 16, 63.
#[inline(always)]
fn mix(v: &mut [u64; 16], a: usize, b: usize, c: usize, d: usize, x: u64, y: u64) {
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(x);
    v[d] = (v[d] ^ v[a]).rotate_right(32);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(24);
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(y);
    v[d] = (v[d] ^ v[a]).rotate_right(16);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(63);
}

/// Compresses a single 128-byte message block into the chain value `h`.
///
/// # Parameters
/// - `h`: the current chain value (8 × 64-bit words), updated in place
/// - `block`: a 128-byte message block, interpreted as 16 little-endian
///   64-bit words
/// - `t0`, `t1`: the 128-bit little-endian byte counter, split in half
/// - `f0`: the finalization flag, `0` for interior blocks or
///   `0xFFFFFFFFFFFFFFFF` for the last block
pub(crate) fn compress(h: &mut [u64; 8], block: &[u8; 128], t0: u64, t1: u64, f0: u64) {
    let mut m = [0u64; 16];
    for (word, chunk) in m.iter_mut().zip(block.chunks_exact(8)) {
        *word = u64::from_le_bytes(chunk.try_into().unwrap());
    }

    let mut v = [0u64; 16];
    v[..8].copy_from_slice(h);
    v[8..12].copy_from_slice(&IV[0..4]);
    v[12] = t0 ^ IV[4];
    v[13] = t1 ^ IV[5];
    v[14] = f0 ^ IV[6];
    v[15] = IV[7];

    for r in 0..ROUNDS {
        let s = &SIGMA[r];
        mix(&mut v, 0, 4, 8, 12, m[s[0]], m[s[1]]);
        mix(&mut v, 1, 5, 9, 13, m[s[2]], m[s[3]]);
        mix(&mut v, 2, 6, 10, 14, m[s[4]], m[s[5]]);
        mix(&mut v, 3, 7, 11, 15, m[s[6]], m[s[7]]);

        mix(&mut v, 0, 5, 10, 15, m[s[8]], m[s[9]]);
        mix(&mut v, 1, 6, 11, 12, m[s[10]], m[s[11]]);
        mix(&mut v, 2, 7, 8, 13, m[s[12]], m[s[13]]);
        mix(&mut v, 3, 4, 9, 14, m[s[14]], m[s[15]]);
    }

    for i in 0..8 {
        h[i] ^= v[i] ^ v[i + 8];
    }
}
