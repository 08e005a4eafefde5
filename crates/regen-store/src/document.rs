use chrono::{DateTime, Utc};
use regen_types::Iri;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A JSON-LD document persisted under its IRI.
///
/// The IRI is the primary key. `created_at` is fixed by the first insert;
/// every later upsert of the same IRI replaces `document` and moves
/// `updated_at`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredDocument {
    pub iri: String,
    pub document: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoredDocument {
    /// A freshly created record: both timestamps equal `now`.
    pub fn new(iri: impl Into<String>, document: Value, now: DateTime<Utc>) -> Self {
        Self {
            iri: iri.into(),
            document,
            created_at: now,
            updated_at: now,
        }
    }

    /// The key parsed as an [`Iri`], if it is structurally one.
    ///
    /// Stores accept any key string, so this can fail for records inserted
    /// under pre-derived keys.
    pub fn parsed_iri(&self) -> Option<Iri> {
        self.iri.parse().ok()
    }
}
