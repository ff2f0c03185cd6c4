//! Key-derivation functions.
//!
//! Currently exposes [`argon2`], a memory-hard password-hashing function
//! built on this crate's [`crate::hash::blake2b`] implementation.

pub mod argon2;
