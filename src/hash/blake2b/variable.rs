//! Argon2's variable-length hash H′ (RFC 9106 §3.3), built from BLAKE2b.
//!
//! For τ ≤ 64 this is a single BLAKE2b call. For longer outputs it chains
//! 64-byte BLAKE2b digests, keeping only the first half of each interior
//! digest and the whole of the last (possibly short) one, so the total
//! output is exactly τ bytes regardless of how it's split across calls.

use super::core::{Blake2b, Blake2bError};

const HALF_DIGEST: usize = 32;
const FULL_DIGEST: usize = 64;

/// Computes H′(X, τ): τ bytes of BLAKE2b-derived output for arbitrary τ ≥ 1.
pub fn blake2b_long(tau: usize, x: &[u8]) -> Result<Vec<u8>, Blake2bError> {
    if tau == 0 {
        return Err(Blake2bError::InvalidDigestLength { len: tau });
    }

    let tau_le = (tau as u32).to_le_bytes();

    if tau <= FULL_DIGEST {
        let mut state = Blake2b::new(tau)?;
        state.update(&tau_le);
        state.update(x);
        let mut out = vec![0u8; tau];
        state.finalize(&mut out)?;
        return Ok(out);
    }

    let mut out = Vec::with_capacity(tau);
    let r = tau.div_ceil(HALF_DIGEST) - 2;

    let mut v = [0u8; FULL_DIGEST];
    let mut state = Blake2b::new(FULL_DIGEST)?;
    state.update(&tau_le);
    state.update(x);
    state.finalize(&mut v)?;
    out.extend_from_slice(&v[..HALF_DIGEST]);

    for _ in 1..r {
        let mut state = Blake2b::new(FULL_DIGEST)?;
        state.update(&v);
        state.finalize(&mut v)?;
        out.extend_from_slice(&v[..HALF_DIGEST]);
    }

    let last_len = tau - HALF_DIGEST * r;
    let mut state = Blake2b::new(last_len)?;
    state.update(&v);
    let mut last = vec![0u8; last_len];
    state.finalize(&mut last)?;
    out.extend_from_slice(&last);

    Ok(out)
}
