//! Foundation types for Regen content addressing.
//!
//! Every other crate in the workspace depends on `regen-types`.
//!
//! # Key Types
//!
//! - [`Iri`] — `regen:<base58check>.<suffix>` identifier string
//! - [`IriKind`] — raw content (with [`Extension`]) or canonical graph
//! - [`Digest`] — 32-byte content digest
//! - [`Extension`] — approved raw-content file extensions
//!
//! The [`prefix`] module holds the byte tags of the binary IRI layout.

pub mod digest;
pub mod error;
pub mod extension;
pub mod iri;
pub mod prefix;

pub use digest::{Digest, DIGEST_LEN};
pub use error::TypeError;
pub use extension::Extension;
pub use iri::{Iri, IriKind, IriParts};
