/// Errors from document store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No document is stored under the requested IRI.
    #[error("document not found: {0}")]
    NotFound(String),

    /// A document could not be serialized or a stored one decoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A stored timestamp could not be parsed.
    #[error("invalid stored timestamp `{value}`: {reason}")]
    Timestamp { value: String, reason: String },

    /// Failure reported by the storage backend.
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        Self::Backend(e.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
