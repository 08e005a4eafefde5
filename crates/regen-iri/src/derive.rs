use std::io::{self, Read};

use regen_crypto::ContentHasher;
use regen_graph::{canonicalize, canonicalize_str, CanonicalGraph};
use regen_types::Iri;
use serde_json::Value;
use tracing::debug;

use crate::encode::{encode_graph, encode_raw};
use crate::error::IriResult;

/// Derive the IRI of a JSON-LD graph document.
///
/// Canonicalize, digest the canonical N-Quads, encode as a graph IRI.
/// Fails with `InvalidGraphDocument` when the document does not expand to
/// at least one RDF statement.
pub fn derive_address_for_graph(document: &Value) -> IriResult<Iri> {
    let graph = canonicalize(document)?;
    Ok(graph_iri(&graph))
}

/// Same as [`derive_address_for_graph`] for a document held as JSON text.
pub fn derive_address_for_graph_str(text: &str) -> IriResult<Iri> {
    let graph = canonicalize_str(text)?;
    Ok(graph_iri(&graph))
}

/// The IRI of an already canonicalized graph.
pub fn graph_iri(graph: &CanonicalGraph) -> Iri {
    let digest = ContentHasher::digest(graph.as_bytes());
    let iri = encode_graph(&digest);
    debug!(%iri, statements = graph.len(), "derived graph IRI");
    iri
}

/// Derive the IRI of raw content. Never fails; unknown extensions become
/// `bin`.
pub fn derive_address_for_raw(bytes: &[u8], extension: &str) -> Iri {
    let digest = ContentHasher::digest(bytes);
    let iri = encode_raw(&digest, extension);
    debug!(%iri, len = bytes.len(), "derived raw IRI");
    iri
}

/// Derive the IRI of raw content streamed from a reader.
pub fn derive_address_for_reader<R: Read>(reader: R, extension: &str) -> io::Result<Iri> {
    let digest = ContentHasher::digest_reader(reader)?;
    Ok(encode_raw(&digest, extension))
}
