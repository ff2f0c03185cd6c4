//! BLAKE2b streaming hash state (RFC 7693 §3.2-3.3).
//!
//! This module implements the core logic of the BLAKE2b cryptographic
//! hash function: a 128-byte input buffer with incremental `update`, and
//! a `finalize` step that pads and compresses the last block with the
//! finalization flag set.
//!
//! The implementation follows the standard Merkle–Damgård-like streaming
//! construction used throughout this ecosystem's BLAKE2 implementations
//! (cryptoxide, blake2_simd, rust-crypto): buffer input until a full block
//! is available, compress full blocks directly from the caller's slice
//! without copying, and hold back the last block (however short) for
//! `finalize` to pad and mark.

use zeroize::Zeroize;

use super::computations::{IV, compress};

const BLOCK_LENGTH: usize = 128;
const MAX_DIGEST_LEN: usize = 64;
const MAX_KEY_LEN: usize = 64;

/// Errors raised while constructing or driving a [`Blake2b`] state.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Blake2bError {
    /// `digestSize` was outside the legal `1..=64` range.
    #[error("BLAKE2b digest length {len} out of range 1..=64")]
    InvalidDigestLength { len: usize },

    /// A key longer than 64 bytes was supplied to `new_keyed`.
    #[error("BLAKE2b key length {len} exceeds 64 bytes")]
    InvalidKeyLength { len: usize },

    /// The buffer passed to `finalize` did not match the configured
    /// digest length.
    #[error("BLAKE2b output buffer length {got} does not match configured digest length {expected}")]
    OutputLengthMismatch { expected: usize, got: usize },
}

/// Streaming BLAKE2b hash state.
///
/// Construct with [`Blake2b::new`] (unkeyed) or [`Blake2b::new_keyed`],
/// feed data with [`Blake2b::update`] any number of times, then call
/// [`Blake2b::finalize`] to obtain the digest. `finalize` leaves the state
/// ready for reuse (equivalent to calling [`Blake2b::reset`]), so a single
/// `Blake2b` can hash a sequence of independent messages with the same
/// digest length and key.
#[derive(Clone)]
pub struct Blake2b {
    h: [u64; 8],
    h0: [u64; 8],
    t: [u64; 2],
    buf: [u8; BLOCK_LENGTH],
    buflen: usize,
    digest_len: usize,
    key_block: Option<[u8; BLOCK_LENGTH]>,
}

impl Blake2b {
    /// Creates an unkeyed BLAKE2b state producing `digest_len` bytes.
    pub fn new(digest_len: usize) -> Result<Self, Blake2bError> {
        Self::new_keyed(&[], digest_len)
    }

    /// Creates a keyed BLAKE2b state producing `digest_len` bytes.
    ///
    /// `key` may be empty (equivalent to [`Blake2b::new`]) or up to 64
    /// bytes. The key is absorbed as the first message block, so it need
    /// not be re-supplied to `update`.
    pub fn new_keyed(key: &[u8], digest_len: usize) -> Result<Self, Blake2bError> {
        if digest_len == 0 || digest_len > MAX_DIGEST_LEN {
            return Err(Blake2bError::InvalidDigestLength { len: digest_len });
        }
        if key.len() > MAX_KEY_LEN {
            return Err(Blake2bError::InvalidKeyLength { len: key.len() });
        }

        let mut h0 = IV;
        h0[0] ^= (digest_len as u64) | ((key.len() as u64) << 8) | 0x0101_0000;

        let key_block = if key.is_empty() {
            None
        } else {
            let mut block = [0u8; BLOCK_LENGTH];
            block[..key.len()].copy_from_slice(key);
            Some(block)
        };

        let mut state = Blake2b {
            h: h0,
            h0,
            t: [0, 0],
            buf: [0u8; BLOCK_LENGTH],
            buflen: 0,
            digest_len,
            key_block,
        };
        state.load_initial_buffer();
        Ok(state)
    }

    fn load_initial_buffer(&mut self) {
        if let Some(block) = self.key_block {
            self.buf = block;
            self.buflen = BLOCK_LENGTH;
        } else {
            self.buflen = 0;
        }
    }

    /// Digest length this state was configured with.
    pub fn digest_len(&self) -> usize {
        self.digest_len
    }

    #[inline]
    fn increment_counter(&mut self, inc: u64) {
        let (t0, carry) = self.t[0].overflowing_add(inc);
        self.t[0] = t0;
        if carry {
            self.t[1] = self.t[1].wrapping_add(1);
        }
    }

    /// Appends `input` to the hash state.
    ///
    /// Equivalent to splitting `input` across multiple calls: `update(a);
    /// update(b)` always produces the same digest as a single
    /// `update([a, b].concat())`.
    pub fn update(&mut self, mut input: &[u8]) {
        if input.is_empty() {
            return;
        }

        if self.buflen > 0 {
            let need = BLOCK_LENGTH - self.buflen;
            if input.len() <= need {
                self.buf[self.buflen..self.buflen + input.len()].copy_from_slice(input);
                self.buflen += input.len();
                return;
            }

            let (head, rest) = input.split_at(need);
            self.buf[self.buflen..].copy_from_slice(head);
            self.increment_counter(BLOCK_LENGTH as u64);
            let block = self.buf;
            compress(&mut self.h, &block, self.t[0], self.t[1], 0);
            self.buflen = 0;
            input = rest;
        }

        // Hold back the last block, even if it's a full 128 bytes, so
        // `finalize` always has a buffered block to mark and pad.
        while input.len() > BLOCK_LENGTH {
            let (block, rest) = input.split_at(BLOCK_LENGTH);
            self.increment_counter(BLOCK_LENGTH as u64);
            compress(&mut self.h, block.try_into().unwrap(), self.t[0], self.t[1], 0);
            input = rest;
        }

        self.buf[..input.len()].copy_from_slice(input);
        self.buflen = input.len();
    }

    /// Writes the digest to `out`, whose length must equal [`Self::digest_len`].
    ///
    /// Resets the streaming state afterward (preserving the configured
    /// digest length and key), so this state may be reused immediately for
    /// another message.
    pub fn finalize(&mut self, out: &mut [u8]) -> Result<(), Blake2bError> {
        if out.len() != self.digest_len {
            return Err(Blake2bError::OutputLengthMismatch {
                expected: self.digest_len,
                got: out.len(),
            });
        }

        self.increment_counter(self.buflen as u64);
        let mut last = self.buf;
        last[self.buflen..].fill(0);

        let mut h = self.h;
        compress(&mut h, &last, self.t[0], self.t[1], u64::MAX);

        for (chunk, word) in out.chunks_mut(8).zip(h.iter()) {
            let bytes = word.to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }

        last.zeroize();
        self.reset();
        Ok(())
    }

    /// Returns this state to its just-constructed condition: same digest
    /// length and key, zero bytes absorbed.
    pub fn reset(&mut self) {
        self.h = self.h0;
        self.t = [0, 0];
        self.load_initial_buffer();
    }
}

impl Drop for Blake2b {
    fn drop(&mut self) {
        self.h.zeroize();
        self.buf.zeroize();
        if let Some(ref mut block) = self.key_block {
            block.zeroize();
        }
    }
}
