//! BLAKE2b (RFC 7693), a keyed/unkeyed cryptographic hash with a 1..=64
//! byte variable output length.
//!
//! This module mirrors the split used elsewhere in `hash`: `computations`
//! holds the round constants and the compression function, `core` holds
//! the streaming state machine built on top of it, and `variable` holds
//! Argon2's H′ extension that chains fixed-width BLAKE2b digests together
//! to produce arbitrarily long output.

pub(crate) mod computations;
pub mod core;
pub mod variable;
