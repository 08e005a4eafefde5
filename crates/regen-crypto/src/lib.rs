//! Cryptographic primitives for Regen content addressing.
//!
//! Provides the BLAKE2b-256 content digest and the base58check codec that
//! wraps every IRI payload. Both wrap established libraries; no custom
//! cryptography.

pub mod checksum;
pub mod hasher;

pub use checksum::{CodecError, Decoded, CHECKSUM_LEN};
pub use hasher::ContentHasher;
