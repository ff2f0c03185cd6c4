//! Parameter definitions and validation for Argon2.
//!
//! This module defines the configurable parameters for Argon2 (variants
//! d/i/id, versions 0x10/0x13) and validates them against the minimum
//! requirements in RFC 9106 before a computation is allowed to start.

use thiserror::Error;

/// Addressing mode, selecting how the pseudo-random reference block for
/// each fill step is derived.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Argon2Variant {
    /// Data-dependent addressing throughout. Fastest, but vulnerable to
    /// cache-timing side channels — unsuitable for password hashing on
    /// shared hardware.
    D,
    /// Data-independent addressing throughout. Resists cache-timing
    /// attacks at the cost of weaker resistance to time-memory trade-offs.
    I,
    /// Data-independent addressing for the first half of the first pass,
    /// data-dependent thereafter. The recommended choice for password
    /// hashing (RFC 9106 §4).
    Id,
}

impl Argon2Variant {
    /// The `y` ordinal RFC 9106 assigns this variant, as folded into H₀
    /// and into the data-independent address-block input.
    pub(crate) fn ordinal(self) -> u32 {
        match self {
            Argon2Variant::D => 0,
            Argon2Variant::I => 1,
            Argon2Variant::Id => 2,
        }
    }
}

/// Argon2 version, controlling whether passes after the first XOR into
/// the existing block or overwrite it outright.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Argon2Version {
    /// The original 2015 submission.
    V0x10 = 0x10,
    /// RFC 9106's version, the recommended default.
    V0x13 = 0x13,
}

/// Configuration parameters for the Argon2 algorithm.
///
/// These parameters control the memory and time cost of the hash function,
/// allowing the security level to be tuned for the target hardware and
/// threat model.
///
/// # Recommended Values
///
/// For password hashing in 2024+, OWASP recommends:
/// - `mem_kib`: 19456 (19 MiB) minimum, 47104 (46 MiB) for higher security
/// - `time`: 2 passes minimum
/// - `lanes`: 1 (single-threaded) or number of available cores
/// - `tag_len`: 32 bytes for most applications
#[derive(Clone, Debug)]
pub struct Argon2Params {
    /// Addressing variant (d, i, or id).
    pub variant: Argon2Variant,
    /// Argon2 version (0x10 or 0x13).
    pub version: Argon2Version,
    /// Memory size in KiB (minimum 8 × lanes).
    pub mem_kib: u32,
    /// Number of passes over memory (minimum 1).
    pub time: u32,
    /// Degree of parallelism (number of lanes, minimum 1).
    pub lanes: u32,
    /// Length of the output tag in bytes (4..=1024).
    pub tag_len: usize,
    /// Optional secret key (pepper) for keyed hashing.
    pub secret: Option<Vec<u8>>,
    /// Optional associated data.
    pub associated_data: Option<Vec<u8>>,
}

/// Errors that can occur during parameter validation.
///
/// These errors indicate that the provided parameters do not meet the
/// minimum requirements defined by the Argon2 specification. Memory below
/// the 8 × lanes minimum is not an error here: [`super::core::argon2`]
/// rounds it up (then down to the nearest multiple of 4 × lanes) rather
/// than rejecting it, per RFC 9106 §3.1.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Argon2ParamError {
    /// Lanes must be at least 1.
    #[error("lanes must be at least 1, got {0}")]
    TooFewLanes(u32),
    /// Time (passes) must be at least 1.
    #[error("time (passes) must be at least 1, got {0}")]
    TooFewPasses(u32),
    /// Tag length must be between 4 and 1024 bytes.
    #[error("tag length must be between 4 and 1024 bytes, got {0}")]
    TagLengthInvalid(usize),
    /// Salt must be at least 8 bytes.
    #[error("salt must be at least 8 bytes, got {0}")]
    SaltTooShort(usize),
}

impl Argon2Params {
    pub(crate) fn validate(&self) -> Result<(), Argon2ParamError> {
        if self.lanes < 1 {
            return Err(Argon2ParamError::TooFewLanes(self.lanes));
        }

        if self.time < 1 {
            return Err(Argon2ParamError::TooFewPasses(self.time));
        }

        if self.tag_len < 4 || self.tag_len > 1024 {
            return Err(Argon2ParamError::TagLengthInvalid(self.tag_len));
        }

        Ok(())
    }

    /// OWASP-recommended defaults for interactive password hashing:
    /// Argon2id, version 0x13, 19 MiB memory, 2 passes, single lane, a
    /// 32-byte tag, no secret or associated data.
    pub fn recommended() -> Self {
        Self {
            variant: Argon2Variant::Id,
            version: Argon2Version::V0x13,
            mem_kib: 19 * 1024,
            time: 2,
            lanes: 1,
            tag_len: 32,
            secret: None,
            associated_data: None,
        }
    }
}

impl Default for Argon2Params {
    /// Default parameters: Argon2id, version 0x13, 64 MiB memory, 3
    /// passes, 1 lane, 32-byte tag.
    fn default() -> Self {
        Self {
            variant: Argon2Variant::Id,
            version: Argon2Version::V0x13,
            mem_kib: 64 * 1024,
            time: 3,
            lanes: 1,
            tag_len: 32,
            secret: None,
            associated_data: None,
        }
    }
}
