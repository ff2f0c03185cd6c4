//! Argon2 password hashing (RFC 9106): variants d, i, and id, versions
//! 0x10 and 0x13.
//!
//! Argon2d uses data-dependent addressing throughout, maximizing
//! resistance to time-memory trade-off attacks at the cost of exposing
//! memory-access patterns to cache-timing side channels. Argon2i uses
//! data-independent addressing throughout, the reverse trade-off.
//! Argon2id, the recommended default, starts data-independent and
//! switches to data-dependent partway through the first pass.
//!
//! # Security Properties
//!
//! - **Memory hardness**: requires a configurable amount of memory, making
//!   parallel attacks expensive.
//! - **Time hardness**: supports multiple passes over memory to increase
//!   computation time.
//! - **Side-channel resistance**: Argon2id's first half of the first pass
//!   uses data-independent addressing to resist timing attacks during the
//!   critical initial phase.
//!
//! # Algorithm Overview
//!
//! 1. **Initialization**: Compute H0 = BLAKE2b(params || password || salt || ...)
//! 2. **Lane initialization**: Generate the first two blocks of each lane
//!    using H' (variable-length BLAKE2b).
//! 3. **Memory filling**: Fill the remaining blocks using the compression
//!    function G, which is based on the BLAKE2b round function with
//!    additional multiplication for diffusion.
//! 4. **Finalization**: XOR the last block of each lane together and apply
//!    H' to produce the final tag.
//!
//! # Memory Organization
//!
//! Memory is organized as a matrix of 1024-byte blocks:
//! - **Lanes**: independent rows that can be processed in parallel.
//! - **Slices**: each lane is divided into 4 slices (sync points).
//! - **Segments**: blocks within a slice.
//!
//! # Addressing Modes
//!
//! - **Data-independent**: block addresses are computed from a counter,
//!   providing side-channel resistance (Argon2i throughout; Argon2id in
//!   the first half of the first pass).
//! - **Data-dependent**: block addresses depend on previously computed
//!   block contents, providing better security against time-memory
//!   trade-off attacks (Argon2d throughout; Argon2id thereafter).

pub(crate) mod block;
pub(crate) mod boundary;
pub mod core;
pub(crate) mod memory;
pub mod params;
pub(crate) mod reference;

pub use core::{Argon2Error, argon2};
pub use params::{Argon2ParamError, Argon2Params, Argon2Variant, Argon2Version};
