//! High-level registry API for Regen content addressing.
//!
//! [`Registry`] pairs the derivation pipeline with an explicitly supplied
//! [`DocumentStore`] handle. This is the entry point for HTTP handlers and
//! other collaborators that need "derive an IRI" and "insert/fetch a
//! document by IRI".

pub mod error;
pub mod registry;

pub use error::{RegistryError, RegistryResult};
pub use registry::Registry;

// Re-export key types
pub use regen_iri::{decode_iri, DecodedIri};
pub use regen_store::{DocumentStore, InMemoryDocumentStore, SqliteDocumentStore, StoredDocument};
pub use regen_types::{Digest, Extension, Iri, IriKind};
