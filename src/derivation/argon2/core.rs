//! Top-level entry point for the Argon2 password-hashing function
//! (variants d/i/id, versions 0x10/0x13 — RFC 9106).

use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;

use super::block::Block;
use super::boundary::{finalize, init, seed_first_columns};
use super::memory::MemoryLayout;
use super::params::{Argon2ParamError, Argon2Params};
use crate::hash::Blake2bError;

const SYNC_POINTS: u32 = 4;

/// Errors that can occur while computing an Argon2 hash.
#[derive(Debug, Error)]
pub enum Argon2Error {
    /// One or more parameters failed validation, or the salt was shorter
    /// than the 8-byte minimum required by RFC 9106 §3.1.
    #[error("invalid Argon2 parameters: {0}")]
    InvalidParameter(#[from] Argon2ParamError),

    /// The requested memory cost could not be allocated.
    #[error("failed to allocate {0} KiB of working memory")]
    AllocationFailure(u32),

    /// A worker thread computing the fill schedule panicked before the
    /// computation could complete.
    #[error("Argon2 computation did not complete")]
    ComputationFailure,

    /// Reserved for cooperative cancellation; not currently produced by
    /// this crate, since the fill schedule offers no natural checkpoint
    /// to poll a cancellation token between segments without breaking
    /// the parallel invariant.
    #[error("Argon2 computation was cancelled")]
    Cancelled,

    /// The BLAKE2b primitive underlying H0/H' rejected an input. This
    /// should be unreachable for the digest lengths Argon2 ever requests
    /// and indicates a bug in this crate rather than a caller error.
    #[error("internal hashing failure: {0}")]
    Hashing(#[from] Blake2bError),
}

/// Computes an Argon2 hash of `password` under `salt` and `params`.
///
/// `salt` must be at least 8 bytes (RFC 9106 §3.1 recommends 16+ for
/// password hashing). The returned tag has `params.tag_len` bytes.
///
/// The memory cost `params.mem_kib` is rounded up to `8 * lanes` if
/// below it, then down to the nearest multiple of `4 * lanes`, per RFC
/// 9106 §3.1; that rounded value determines the actual memory layout
/// and cost, but H0 folds in the caller's original, unrounded
/// `params.mem_kib` (RFC 9106 §3.2).
///
/// # Example
///
/// ```rust, ignore
/// use nebula_argon2::derivation::argon2::{argon2, Argon2Params};
///
/// let password = b"my_password";
/// let salt = b"random_salt_16b!";
/// let params = Argon2Params::recommended();
///
/// let hash = argon2(password, salt, &params).unwrap();
/// ```
pub fn argon2(password: &[u8], salt: &[u8], params: &Argon2Params) -> Result<Vec<u8>, Argon2Error> {
    params.validate()?;

    if salt.len() < 8 {
        return Err(Argon2ParamError::SaltTooShort(salt.len()).into());
    }

    let lanes = params.lanes;

    let m_min = 8u32.saturating_mul(lanes);
    let mut m_prime = params.mem_kib.max(m_min);
    m_prime = (m_prime / (SYNC_POINTS * lanes)) * (SYNC_POINTS * lanes);

    let mut rounded = params.clone();
    rounded.mem_kib = m_prime;

    let layout = MemoryLayout::new(&rounded);

    let mut memory: Vec<Block> = Vec::new();
    memory
        .try_reserve_exact(layout.total_blocks as usize)
        .map_err(|_| Argon2Error::AllocationFailure(m_prime))?;
    memory.resize(layout.total_blocks as usize, Block::ZERO);

    let h0 = init(password, salt, params)?;
    seed_first_columns(&mut memory, |lane, col| layout.index(lane, col), &h0, lanes)?;

    // A panic inside a rayon worker (or, with the `parallel` feature off,
    // inside this same thread) unwinds through `fill`; catching it here
    // turns an aborted computation into a typed error instead of taking
    // down the caller, and `memory` still drops (and zeroizes) normally
    // once this function returns.
    let fill_result = panic::catch_unwind(AssertUnwindSafe(|| {
        layout.fill(&mut memory, rounded.variant, rounded.version, rounded.time);
    }));
    fill_result.map_err(|_| Argon2Error::ComputationFailure)?;

    let tag = finalize(&memory, lanes, layout.lane_len, rounded.tag_len)?;

    Ok(tag)
}
