use std::sync::Arc;

use serde_json::Value;

use crate::document::StoredDocument;
use crate::error::{StoreError, StoreResult};

/// Content-addressed document store.
///
/// All implementations must satisfy these invariants:
/// - At most one record exists per IRI. Keys compare by exact string
///   equality; there is no normalization or prefix matching.
/// - `upsert` is atomic per IRI: concurrent upserts of the same key
///   converge to one record, last writer's document wins.
/// - `upsert` trusts its caller. It does not recompute the IRI from the
///   document, so a mismatched pair is stored as given. Callers that want
///   the content-addressing guarantee derive the IRI from the document
///   first (see `Registry::insert_from_graph`).
/// - A missing record is `Ok(None)` from `get`, never an empty document.
pub trait DocumentStore: Send + Sync {
    /// Insert the document, or overwrite the document of an existing record
    /// and bump its `updated_at`. Returns the record as stored.
    fn upsert(&self, iri: &str, document: &Value) -> StoreResult<StoredDocument>;

    /// Point lookup by exact IRI.
    fn get(&self, iri: &str) -> StoreResult<Option<StoredDocument>>;

    /// Check whether a record exists.
    fn exists(&self, iri: &str) -> StoreResult<bool>;

    /// Remove a record. Returns `true` if it existed.
    ///
    /// Only owners of the higher-level entity a document belongs to should
    /// call this; content addressing itself never deletes.
    fn delete(&self, iri: &str) -> StoreResult<bool>;

    /// Number of stored records.
    fn len(&self) -> StoreResult<usize>;

    /// Returns `true` if nothing is stored.
    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Point lookup that treats absence as [`StoreError::NotFound`].
    fn fetch(&self, iri: &str) -> StoreResult<StoredDocument> {
        self.get(iri)?.ok_or_else(|| StoreError::NotFound(iri.to_owned()))
    }
}

impl<S: DocumentStore + ?Sized> DocumentStore for Arc<S> {
    fn upsert(&self, iri: &str, document: &Value) -> StoreResult<StoredDocument> {
        (**self).upsert(iri, document)
    }

    fn get(&self, iri: &str) -> StoreResult<Option<StoredDocument>> {
        (**self).get(iri)
    }

    fn exists(&self, iri: &str) -> StoreResult<bool> {
        (**self).exists(iri)
    }

    fn delete(&self, iri: &str) -> StoreResult<bool> {
        (**self).delete(iri)
    }

    fn len(&self) -> StoreResult<usize> {
        (**self).len()
    }
}
