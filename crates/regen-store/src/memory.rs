use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use serde_json::Value;
use tracing::debug;

use crate::document::StoredDocument;
use crate::error::StoreResult;
use crate::traits::DocumentStore;

/// In-memory, HashMap-based document store.
///
/// Intended for tests and embedding. Each upsert runs inside a single write
/// lock, so concurrent upserts of one IRI cannot both observe "absent".
pub struct InMemoryDocumentStore {
    documents: RwLock<HashMap<String, StoredDocument>>,
}

impl InMemoryDocumentStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(HashMap::new()),
        }
    }

    /// Return a sorted list of all stored IRIs.
    pub fn all_iris(&self) -> Vec<String> {
        let map = self.documents.read().expect("lock poisoned");
        let mut iris: Vec<String> = map.keys().cloned().collect();
        iris.sort();
        iris
    }

    /// Remove all documents from the store.
    pub fn clear(&self) {
        self.documents.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn upsert(&self, iri: &str, document: &Value) -> StoreResult<StoredDocument> {
        let now = Utc::now();
        let mut map = self.documents.write().expect("lock poisoned");
        let record = map
            .entry(iri.to_owned())
            .and_modify(|existing| {
                existing.document = document.clone();
                existing.updated_at = now;
            })
            .or_insert_with(|| StoredDocument::new(iri, document.clone(), now));
        debug!(iri, "upserted document");
        Ok(record.clone())
    }

    fn get(&self, iri: &str) -> StoreResult<Option<StoredDocument>> {
        let map = self.documents.read().expect("lock poisoned");
        Ok(map.get(iri).cloned())
    }

    fn exists(&self, iri: &str) -> StoreResult<bool> {
        let map = self.documents.read().expect("lock poisoned");
        Ok(map.contains_key(iri))
    }

    fn delete(&self, iri: &str) -> StoreResult<bool> {
        let mut map = self.documents.write().expect("lock poisoned");
        Ok(map.remove(iri).is_some())
    }

    fn len(&self) -> StoreResult<usize> {
        Ok(self.documents.read().expect("lock poisoned").len())
    }
}

impl std::fmt::Debug for InMemoryDocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.documents.read().map(|m| m.len()).unwrap_or_default();
        f.debug_struct("InMemoryDocumentStore")
            .field("document_count", &count)
            .finish()
    }
}
