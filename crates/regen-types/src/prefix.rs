//! Byte tags embedded in the binary payload of every IRI.
//!
//! These values are part of the ledger's identifier format. A change of
//! digest, canonicalization or merkle scheme gets a new byte value; existing
//! values are never reused for a different algorithm.

/// Scheme prefix of every IRI string.
pub const IRI_PREFIX: &str = "regen:";

/// Suffix of graph IRIs.
pub const GRAPH_SUFFIX: &str = "rdf";

/// Protocol version byte fed to the checksum codec.
pub const IRI_VERSION_0: u8 = 0x00;

/// Content class: raw bytes.
pub const RAW_PREFIX: u8 = 0x00;

/// Content class: canonicalized RDF graph.
pub const GRAPH_PREFIX: u8 = 0x01;

/// Digest algorithm: BLAKE2b with a 256-bit output.
pub const DIGEST_ALG_BLAKE2B256: u8 = 0x01;

/// Graph canonicalization algorithm: URDNA2015 (RDFC-1.0).
pub const CANON_ALG_URDNA2015: u8 = 0x01;

/// Graph merkle tree scheme: none, the digest covers the whole document.
pub const MERKLE_NONE: u8 = 0x00;

/// Type payload preceding the digest of a raw IRI.
pub const RAW_TYPE_PAYLOAD: [u8; 2] = [RAW_PREFIX, DIGEST_ALG_BLAKE2B256];

/// Type payload preceding the digest of a graph IRI.
pub const GRAPH_TYPE_PAYLOAD: [u8; 4] = [
    GRAPH_PREFIX,
    CANON_ALG_URDNA2015,
    MERKLE_NONE,
    DIGEST_ALG_BLAKE2B256,
];
