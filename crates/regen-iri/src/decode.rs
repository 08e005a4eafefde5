use std::fmt;

use regen_crypto::checksum;
use regen_types::prefix::{GRAPH_SUFFIX, GRAPH_TYPE_PAYLOAD, IRI_VERSION_0, RAW_TYPE_PAYLOAD};
use regen_types::{Digest, Extension, Iri, IriKind};
use serde::{Deserialize, Serialize};

use crate::encode;
use crate::error::{IriError, IriResult};

/// The content class and digest recovered from a valid IRI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecodedIri {
    pub kind: IriKind,
    pub digest: Digest,
}

impl DecodedIri {
    /// Re-encode into the IRI string this was decoded from.
    pub fn to_iri(&self) -> Iri {
        encode::encode(&self.kind, &self.digest)
    }
}

impl fmt::Display for DecodedIri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.digest)
    }
}

/// Parse and fully validate an IRI string.
///
/// Checks the `regen:` prefix, the base58check checksum, the protocol
/// version, the type payload and the agreement between payload and suffix.
/// This is the reverse of [`encode::encode`]; nothing on the write path
/// depends on it.
pub fn decode_iri(s: &str) -> IriResult<DecodedIri> {
    let parts = Iri::split(s)?;
    let decoded = checksum::decode(parts.payload)?;
    if decoded.version != IRI_VERSION_0 {
        return Err(IriError::UnsupportedVersion(decoded.version));
    }

    let payload = decoded.payload.as_slice();
    if let Some(digest) = payload.strip_prefix(&RAW_TYPE_PAYLOAD) {
        let digest = Digest::from_slice(digest)?;
        let extension = Extension::lookup(parts.suffix).ok_or_else(|| IriError::SuffixMismatch {
            suffix: parts.suffix.to_owned(),
            kind: "raw",
        })?;
        return Ok(DecodedIri {
            kind: IriKind::Raw { extension },
            digest,
        });
    }

    if let Some(digest) = payload.strip_prefix(&GRAPH_TYPE_PAYLOAD) {
        let digest = Digest::from_slice(digest)?;
        if parts.suffix != GRAPH_SUFFIX {
            return Err(IriError::SuffixMismatch {
                suffix: parts.suffix.to_owned(),
                kind: "graph",
            });
        }
        return Ok(DecodedIri {
            kind: IriKind::Graph,
            digest,
        });
    }

    let shown = payload.len().min(GRAPH_TYPE_PAYLOAD.len());
    Err(IriError::UnknownTypePayload(payload[..shown].to_vec()))
}

/// Returns `true` if `s` decodes as a valid IRI.
pub fn is_valid_iri(s: &str) -> bool {
    decode_iri(s).is_ok()
}
