//! Argon2 and BLAKE2b primitives for Nebula
//!
//! This crate provides the memory-hard Argon2 password-hashing function
//! (RFC 9106, variants d/i/id) and the BLAKE2b hash (RFC 7693) that feeds
//! it, as low-level cryptographic building blocks for the Nebula ecosystem.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. Both
//! components are explicit in their semantics and suitable for
//! security-critical code: no implicit defaults hide a weak parameter
//! choice, and working memory is zeroized on every exit path.
//!
//! # Module overview
//!
//! - `hash`
//!   The BLAKE2b hash function and its Argon2-specific variable-length
//!   extension H′. Used directly by callers that need a general-purpose
//!   64-bit hash, and internally by `derivation`.
//!
//! - `derivation`
//!   The Argon2 memory-hard key derivation function. Exposes the `d`, `i`,
//!   and `id` addressing variants and versions `0x10`/`0x13` behind one
//!   parameter struct; it does not encode the PHC string format or choose
//!   a salt for you.
//!
//! # Design goals
//!
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics matching the governing RFCs
//! - Working memory is zeroized unconditionally, including on error paths
//!
//! This crate is not intended to replace full-featured, externally audited
//! cryptographic libraries, but to serve as a small, controlled foundation
//! for Nebula's internal password-hashing needs.

pub mod derivation;
pub mod hash;
