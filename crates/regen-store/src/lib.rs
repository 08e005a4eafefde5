//! Content-addressed document storage for Regen graph IRIs.
//!
//! Documents are JSON-LD values keyed by the IRI derived from their
//! content. The key is the whole identity of a record; the store holds the
//! only copy and callers keep nothing but the IRI.
//!
//! # Storage Backends
//!
//! All backends implement the [`DocumentStore`] trait:
//!
//! - [`InMemoryDocumentStore`] -- `HashMap`-based store for tests and embedding
//! - [`SqliteDocumentStore`] -- SQLite table with a single-statement upsert
//!
//! # Design Rules
//!
//! 1. One record per IRI; upsert is atomic in the backend, never
//!    check-then-act in application code.
//! 2. Re-inserting an IRI is not an error. It replaces the document and
//!    bumps `updated_at`.
//! 3. The store never derives or verifies IRIs. That is the caller's job.
//! 4. Absence is a typed outcome (`None` / [`StoreError::NotFound`]).
//! 5. All backend errors are propagated, never silently ignored.

pub mod document;
pub mod error;
pub mod memory;
pub mod sqlite;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use document::StoredDocument;
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryDocumentStore;
pub use sqlite::SqliteDocumentStore;
pub use traits::DocumentStore;
