use regen_iri::{derive_address_for_graph, derive_address_for_raw};
use regen_store::{DocumentStore, InMemoryDocumentStore, StoredDocument};
use regen_types::Iri;
use serde_json::Value;
use tracing::debug;

use crate::error::RegistryResult;

/// Content-addressed graph document registry.
///
/// Holds the store handle it was given; there is no process-wide store.
/// Swap in [`InMemoryDocumentStore`] for tests or a SQLite store in
/// production.
pub struct Registry<S> {
    store: S,
}

impl Registry<InMemoryDocumentStore> {
    /// A registry backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(InMemoryDocumentStore::new())
    }
}

impl<S: DocumentStore> Registry<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    // ---- Derivation ----

    /// IRI of a JSON-LD graph document.
    pub fn derive_address_for_graph(&self, document: &Value) -> RegistryResult<Iri> {
        Ok(derive_address_for_graph(document)?)
    }

    /// IRI of raw bytes. Unknown extensions degrade to `bin`.
    pub fn derive_address_for_raw(&self, bytes: &[u8], extension: &str) -> Iri {
        derive_address_for_raw(bytes, extension)
    }

    // ---- Storage ----

    /// Store `document` under a caller-supplied IRI.
    ///
    /// The IRI is taken on trust and not re-derived from the document.
    /// This lets collaborators record metadata under a pre-known key (such
    /// as the IRI of raw content held elsewhere), at the cost of the
    /// integrity guarantee content addressing otherwise gives. Use
    /// [`Registry::insert_from_graph`] when the document is the content.
    pub fn insert(&self, iri: &str, document: &Value) -> RegistryResult<StoredDocument> {
        Ok(self.store.upsert(iri, document)?)
    }

    /// Derive the graph IRI of `document` and store it under that IRI.
    pub fn insert_from_graph(&self, document: &Value) -> RegistryResult<StoredDocument> {
        let iri = derive_address_for_graph(document)?;
        let stored = self.store.upsert(iri.as_str(), document)?;
        debug!(%iri, "stored graph document");
        Ok(stored)
    }

    /// The document stored under `iri`, or `NotFound`.
    pub fn fetch_by_address(&self, iri: &str) -> RegistryResult<Value> {
        Ok(self.fetch_record(iri)?.document)
    }

    /// The full stored record under `iri`, or `NotFound`.
    pub fn fetch_record(&self, iri: &str) -> RegistryResult<StoredDocument> {
        Ok(self.store.fetch(iri)?)
    }
}

impl<S> std::fmt::Debug for Registry<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("store", &std::any::type_name::<S>())
            .finish()
    }
}
