//! SQLite storage backend.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension};
use serde_json::Value;
use tracing::{debug, info};

use crate::document::StoredDocument;
use crate::error::{StoreError, StoreResult};
use crate::traits::DocumentStore;

/// Schema for the graph document table.
const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS metadata_graph (
    iri        TEXT PRIMARY KEY NOT NULL,
    jsonld     TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
";

/// Single-statement atomic upsert. `created_at` is only written on insert.
const UPSERT: &str = "
INSERT INTO metadata_graph (iri, jsonld, created_at, updated_at)
VALUES (?1, ?2, ?3, ?3)
ON CONFLICT (iri) DO UPDATE SET
    jsonld = excluded.jsonld,
    updated_at = excluded.updated_at
RETURNING iri, jsonld, created_at, updated_at
";

const SELECT_ONE: &str =
    "SELECT iri, jsonld, created_at, updated_at FROM metadata_graph WHERE iri = ?1";

/// How long a writer waits on another connection's lock before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

type RawRow = (String, String, String, String);

/// Create the document table if it does not exist.
pub fn migrate(conn: &Connection) -> StoreResult<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

/// SQLite-backed document store.
///
/// The upsert is one `INSERT ... ON CONFLICT DO UPDATE` statement, so two
/// connections upserting the same IRI never race on a separate existence
/// check.
pub struct SqliteDocumentStore {
    conn: Mutex<Connection>,
}

impl SqliteDocumentStore {
    /// Wrap a connection, applying the schema migration.
    pub fn new(conn: Connection) -> StoreResult<Self> {
        migrate(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create a new in-memory SQLite store (for testing).
    pub fn in_memory() -> StoreResult<Self> {
        Self::new(Connection::open_in_memory()?)
    }

    /// Open or create a file-backed store.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        let store = Self::new(conn)?;
        info!(path = %path.display(), "opened sqlite document store");
        Ok(store)
    }

    fn conn(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| StoreError::Backend("connection lock poisoned".into()))
    }
}

impl DocumentStore for SqliteDocumentStore {
    fn upsert(&self, iri: &str, document: &Value) -> StoreResult<StoredDocument> {
        let jsonld = serde_json::to_string(document)?;
        let now = timestamp_to_sql(Utc::now());
        let row: RawRow = self
            .conn()?
            .query_row(UPSERT, rusqlite::params![iri, jsonld, now], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
            })?;
        debug!(iri, "upserted document");
        decode_row(row)
    }

    fn get(&self, iri: &str) -> StoreResult<Option<StoredDocument>> {
        let row: Option<RawRow> = self
            .conn()?
            .query_row(SELECT_ONE, [iri], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
            })
            .optional()?;
        row.map(decode_row).transpose()
    }

    fn exists(&self, iri: &str) -> StoreResult<bool> {
        let found: Option<i64> = self
            .conn()?
            .query_row("SELECT 1 FROM metadata_graph WHERE iri = ?1", [iri], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(found.is_some())
    }

    fn delete(&self, iri: &str) -> StoreResult<bool> {
        let rows = self
            .conn()?
            .execute("DELETE FROM metadata_graph WHERE iri = ?1", [iri])?;
        Ok(rows > 0)
    }

    fn len(&self) -> StoreResult<usize> {
        let count: i64 = self
            .conn()?
            .query_row("SELECT COUNT(*) FROM metadata_graph", [], |row| row.get(0))?;
        usize::try_from(count).map_err(|e| StoreError::Backend(e.to_string()))
    }
}

impl std::fmt::Debug for SqliteDocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteDocumentStore").finish_non_exhaustive()
    }
}

fn decode_row((iri, jsonld, created_at, updated_at): RawRow) -> StoreResult<StoredDocument> {
    Ok(StoredDocument {
        iri,
        document: serde_json::from_str(&jsonld)?,
        created_at: sql_to_timestamp(&created_at)?,
        updated_at: sql_to_timestamp(&updated_at)?,
    })
}

fn timestamp_to_sql(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn sql_to_timestamp(value: &str) -> StoreResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| StoreError::Timestamp {
            value: value.to_owned(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;
    use std::thread;

    const IRI: &str = "regen:13toVgutDdVPL4Q3s8hqgSSm7ZwfhiCtmXFpNn9vevxyLFFUT6HN1QD.rdf";

    fn doc() -> Value {
        json!({
            "@context": {"name": "http://schema.org/name"},
            "name": "Manu Sporny"
        })
    }

    #[test]
    fn upsert_then_get() {
        let store = SqliteDocumentStore::in_memory().unwrap();
        let stored = store.upsert(IRI, &doc()).unwrap();
        assert_eq!(stored.iri, IRI);
        assert_eq!(stored.document, doc());
        assert_eq!(stored.created_at, stored.updated_at);

        let read_back = store.get(IRI).unwrap().expect("should exist");
        assert_eq!(read_back, stored);
    }

    #[test]
    fn double_upsert_keeps_one_row() {
        let store = SqliteDocumentStore::in_memory().unwrap();
        let first = store.upsert(IRI, &doc()).unwrap();
        let second = store.upsert(IRI, &doc()).unwrap();

        assert_eq!(store.len().unwrap(), 1);
        assert_eq!(second.created_at, first.created_at);
        assert!(second.updated_at >= first.updated_at);
        assert_eq!(store.fetch(IRI).unwrap().document, doc());
    }

    #[test]
    fn upsert_overwrites_document_but_not_created_at() {
        let store = SqliteDocumentStore::in_memory().unwrap();
        let first = store.upsert(IRI, &doc()).unwrap();
        let replaced = json!({"http://schema.org/name": "Someone Else"});
        let second = store.upsert(IRI, &replaced).unwrap();
        assert_eq!(second.document, replaced);
        assert_eq!(second.created_at, first.created_at);
    }

    #[test]
    fn upsert_does_not_verify_iri_against_content() {
        // Pre-derived keys (e.g. raw content references) are stored on trust.
        let store = SqliteDocumentStore::in_memory().unwrap();
        let key = "regen:112xweSfenTPX2GkbhescHosnL2KfTx1xW7zL9fjrY7apDeZkA3h.bin";
        let stored = store.upsert(key, &json!({"note": "blob lives elsewhere"})).unwrap();
        assert_eq!(stored.iri, key);
    }

    #[test]
    fn missing_is_none_and_fetch_not_found() {
        let store = SqliteDocumentStore::in_memory().unwrap();
        assert!(store.get("regen:doesnotexist.rdf").unwrap().is_none());
        assert!(matches!(
            store.fetch("regen:doesnotexist.rdf"),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn exists_and_delete() {
        let store = SqliteDocumentStore::in_memory().unwrap();
        assert!(!store.exists(IRI).unwrap());
        store.upsert(IRI, &doc()).unwrap();
        assert!(store.exists(IRI).unwrap());
        assert!(store.delete(IRI).unwrap());
        assert!(!store.delete(IRI).unwrap());
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn file_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registry.db");
        {
            let store = SqliteDocumentStore::open(&path).unwrap();
            store.upsert(IRI, &doc()).unwrap();
        }
        let store = SqliteDocumentStore::open(&path).unwrap();
        assert_eq!(store.fetch(IRI).unwrap().document, doc());
    }

    #[test]
    fn concurrent_upserts_from_separate_connections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registry.db");
        SqliteDocumentStore::open(&path).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let path = path.clone();
                thread::spawn(move || {
                    let store = SqliteDocumentStore::open(&path).unwrap();
                    for _ in 0..10 {
                        store.upsert(IRI, &doc()).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().expect("thread should not panic");
        }

        let store = SqliteDocumentStore::open(&path).unwrap();
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn shared_handle_across_threads() {
        let store = Arc::new(SqliteDocumentStore::in_memory().unwrap());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    store.upsert(&format!("regen:doc{i}.rdf"), &doc()).unwrap();
                    store.upsert(IRI, &doc()).unwrap();
                })
            })
            .collect();
        for h in handles {
            h.join().expect("thread should not panic");
        }
        assert_eq!(store.len().unwrap(), 9);
    }

    #[test]
    fn timestamps_roundtrip_through_text() {
        let now = Utc::now();
        let parsed = sql_to_timestamp(&timestamp_to_sql(now)).unwrap();
        assert_eq!(parsed.timestamp_micros(), now.timestamp_micros());
    }

    #[test]
    fn bad_timestamp_is_reported() {
        assert!(matches!(
            sql_to_timestamp("yesterday"),
            Err(StoreError::Timestamp { .. })
        ));
    }
}
