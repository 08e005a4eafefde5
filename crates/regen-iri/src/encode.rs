use regen_crypto::checksum;
use regen_types::prefix::{GRAPH_TYPE_PAYLOAD, IRI_VERSION_0, RAW_TYPE_PAYLOAD};
use regen_types::{Digest, Extension, Iri, IriKind};

/// Build the IRI for raw content with a caller-supplied extension.
///
/// Extensions outside the allowlist become `bin`; this never fails.
pub fn encode_raw(digest: &Digest, extension: &str) -> Iri {
    encode(
        &IriKind::Raw {
            extension: Extension::normalize(extension),
        },
        digest,
    )
}

/// Build the IRI for a canonicalized graph.
pub fn encode_graph(digest: &Digest) -> Iri {
    encode(&IriKind::Graph, digest)
}

/// Build the IRI for any content class.
///
/// The binary layout is `type_payload ++ digest`, base58check-encoded under
/// protocol version 0:
///
/// | kind  | type payload               | total |
/// |-------|----------------------------|-------|
/// | raw   | `00 01`                    | 34    |
/// | graph | `01 01 00 01`              | 36    |
pub fn encode(kind: &IriKind, digest: &Digest) -> Iri {
    let type_payload: &[u8] = match kind {
        IriKind::Raw { .. } => &RAW_TYPE_PAYLOAD,
        IriKind::Graph => &GRAPH_TYPE_PAYLOAD,
    };
    let mut payload = Vec::with_capacity(type_payload.len() + digest.as_bytes().len());
    payload.extend_from_slice(type_payload);
    payload.extend_from_slice(digest.as_bytes());
    Iri::from_parts(&checksum::encode(&payload, IRI_VERSION_0), kind.suffix())
}
