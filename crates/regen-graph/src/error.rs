/// Errors from graph canonicalization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The document is not valid JSON-LD, or it denotes no RDF statements.
    #[error("invalid graph document: {0}")]
    InvalidGraphDocument(String),
}

/// Result alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
