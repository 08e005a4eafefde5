use thiserror::Error;

use regen_graph::GraphError;
use regen_iri::IriError;
use regen_store::StoreError;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("invalid graph document: {0}")]
    InvalidGraphDocument(String),

    #[error("document not found: {0}")]
    NotFound(String),

    #[error("IRI error: {0}")]
    Iri(IriError),

    #[error("store error: {0}")]
    Store(StoreError),
}

impl From<GraphError> for RegistryError {
    fn from(e: GraphError) -> Self {
        match e {
            GraphError::InvalidGraphDocument(reason) => Self::InvalidGraphDocument(reason),
        }
    }
}

impl From<IriError> for RegistryError {
    fn from(e: IriError) -> Self {
        match e {
            IriError::Graph(graph) => graph.into(),
            other => Self::Iri(other),
        }
    }
}

impl From<StoreError> for RegistryError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(iri) => Self::NotFound(iri),
            other => Self::Store(other),
        }
    }
}

pub type RegistryResult<T> = Result<T, RegistryError>;
