//! Initialization and finalization for Argon2.
//!
//! This module handles the boundary operations of the algorithm: computing
//! the initial hash H0 from all inputs, seeding the first two columns of
//! each lane from H0, and deriving the final tag from the filled memory.

use super::block::Block;
use super::params::Argon2Params;
use crate::hash::{Blake2bError, blake2b, blake2b_long};

/// Computes the initial hash H0 from all Argon2 inputs.
///
/// H0 is a 64-byte BLAKE2b hash of the concatenation of all parameters
/// and inputs, each prefixed with its length. This ensures that all
/// inputs influence the entire computation and provides domain separation.
///
/// The input format is defined in RFC 9106 §3.2:
/// ```text
/// H0 = BLAKE2b(p || T || m || t || v || y || |P| || P || |S| || S || |K| || K || |X| || X)
/// ```
///
/// `m` here is the caller's requested `params.mem_kib`, not the value
/// rounded for block allocation — RFC 9106 §3.2 folds the input
/// parameter `m` into H0, and derives the rounded `m'` afterward,
/// separately, for memory layout only.
pub(crate) fn init(
    password: &[u8],
    salt: &[u8],
    params: &Argon2Params,
) -> Result<[u8; 64], Blake2bError> {
    let mut buf = Vec::new();

    buf.extend_from_slice(&params.lanes.to_le_bytes());
    buf.extend_from_slice(&(params.tag_len as u32).to_le_bytes());
    buf.extend_from_slice(&params.mem_kib.to_le_bytes());
    buf.extend_from_slice(&params.time.to_le_bytes());
    buf.extend_from_slice(&(params.version as u32).to_le_bytes());
    buf.extend_from_slice(&params.variant.ordinal().to_le_bytes());

    buf.extend_from_slice(&(password.len() as u32).to_le_bytes());
    buf.extend_from_slice(password);

    buf.extend_from_slice(&(salt.len() as u32).to_le_bytes());
    buf.extend_from_slice(salt);

    if let Some(ref secret) = params.secret {
        buf.extend_from_slice(&(secret.len() as u32).to_le_bytes());
        buf.extend_from_slice(secret);
    } else {
        buf.extend_from_slice(&0u32.to_le_bytes());
    }

    if let Some(ref ad) = params.associated_data {
        buf.extend_from_slice(&(ad.len() as u32).to_le_bytes());
        buf.extend_from_slice(ad);
    } else {
        buf.extend_from_slice(&0u32.to_le_bytes());
    }

    let digest = blake2b(64, &buf)?;
    Ok(digest.try_into().expect("blake2b(64, ..) returns 64 bytes"))
}

/// Seeds the first two blocks of every lane from H0:
/// `B[i][j] = H'^(1024)(H0 || LE32(j) || LE32(i))` for `j` in `0..2`.
pub(crate) fn seed_first_columns(
    memory: &mut [Block],
    index: impl Fn(u32, u32) -> usize,
    h0: &[u8; 64],
    lanes: u32,
) -> Result<(), Blake2bError> {
    for i in 0..lanes {
        for j in 0..2u32 {
            let mut input = Vec::with_capacity(64 + 8);
            input.extend_from_slice(h0);
            input.extend_from_slice(&j.to_le_bytes());
            input.extend_from_slice(&i.to_le_bytes());

            let bytes: [u8; 1024] = blake2b_long(1024, &input)?
                .try_into()
                .expect("blake2b_long(1024, ..) returns 1024 bytes");
            memory[index(i, j)] = Block::from_bytes(bytes);
        }
    }

    Ok(())
}

/// Finalizes the computation to produce the output tag.
///
/// The finalization XORs together the last block of each lane (forming a
/// single 1024-byte block), then applies the variable-length hash function
/// H′ to produce the final tag of the requested length. This ensures every
/// lane contributes to the final output, preventing an attacker from
/// skipping a lane's computation entirely.
pub(crate) fn finalize(
    memory: &[Block],
    lanes: u32,
    lane_len: u32,
    tag_len: usize,
) -> Result<Vec<u8>, Blake2bError> {
    let mut final_block = Block::ZERO;

    for lane in 0..lanes {
        let last_block_idx = ((lane + 1) * lane_len - 1) as usize;
        final_block.in_place_xor(&memory[last_block_idx]);
    }

    blake2b_long(tag_len, &final_block.to_bytes())
}
