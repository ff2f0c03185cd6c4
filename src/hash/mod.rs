//! Hash algorithms exposed by the crate.
//!
//! Currently includes BLAKE2b (RFC 7693) with a pure-Rust implementation,
//! plus the Argon2-specific variable-length extension H′ built on top of it.

pub mod blake2b;

pub use blake2b::core::{Blake2b, Blake2bError};
pub use blake2b::variable::blake2b_long;

/// One-shot BLAKE2b of `input`, producing a `digest_len`-byte digest (1..=64).
pub fn blake2b(digest_len: usize, input: &[u8]) -> Result<Vec<u8>, Blake2bError> {
    let mut state = Blake2b::new(digest_len)?;
    state.update(input);
    let mut out = vec![0u8; digest_len];
    state.finalize(&mut out)?;
    Ok(out)
}
