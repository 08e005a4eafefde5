use regen_crypto::CodecError;
use regen_graph::GraphError;
use regen_types::TypeError;

/// Errors from deriving or decoding IRIs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IriError {
    /// The graph document could not be canonicalized.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// The IRI string is not `regen:<payload>.<suffix>`.
    #[error("malformed IRI: {0}")]
    Malformed(#[from] TypeError),

    /// The base58check payload failed to decode or verify.
    #[error("IRI payload: {0}")]
    Codec(#[from] CodecError),

    #[error("unsupported IRI version {0}")]
    UnsupportedVersion(u8),

    #[error("unknown IRI type payload {0:02x?}")]
    UnknownTypePayload(Vec<u8>),

    /// The suffix does not agree with the content class in the payload.
    #[error("suffix `{suffix}` does not match {kind} payload")]
    SuffixMismatch { suffix: String, kind: &'static str },
}

/// Result alias for IRI operations.
pub type IriResult<T> = Result<T, IriError>;
