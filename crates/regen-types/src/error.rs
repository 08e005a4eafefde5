use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    #[error("invalid byte length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("IRI must start with `{prefix}`: {iri}")]
    MissingPrefix { prefix: &'static str, iri: String },

    #[error("IRI has no `.<suffix>` part: {0}")]
    MissingSuffix(String),

    #[error("IRI has an empty payload: {0}")]
    EmptyPayload(String),
}
