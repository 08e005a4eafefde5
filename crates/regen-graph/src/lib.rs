//! Graph canonicalization for Regen content addressing.
//!
//! A JSON-LD document is expanded to an RDF dataset and serialized as
//! canonical N-Quads using RDFC-1.0, the W3C standardization of URDNA2015.
//! Documents that denote the same statements produce byte-identical output
//! regardless of key order, `@context` shorthand or blank node naming.
//!
//! The algorithm is fixed: graph IRIs record `CANON_ALG_URDNA2015` in their
//! type payload, so this crate must never switch algorithms silently.

pub mod canonical;
pub mod error;

pub use canonical::{canonicalize, canonicalize_str, CanonicalGraph};
pub use error::{GraphError, GraphResult};
