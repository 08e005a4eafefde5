//! Regen content IRIs.
//!
//! An IRI is `regen:<base58check(version ++ type_payload ++ digest)>.<suffix>`
//! and is a pure function of content. This crate ties the pieces together:
//!
//! - [`derive`] — content → IRI (graph documents and raw bytes)
//! - [`encode`] — digest + content class → IRI
//! - [`decode`] — IRI → content class + digest, with checksum verification
//!
//! The byte layout is fixed by the ledger and must stay bit-exact; see
//! [`regen_types::prefix`] for the tag values.

pub mod decode;
pub mod derive;
pub mod encode;
pub mod error;

pub use decode::{decode_iri, is_valid_iri, DecodedIri};
pub use derive::{
    derive_address_for_graph, derive_address_for_graph_str, derive_address_for_raw,
    derive_address_for_reader, graph_iri,
};
pub use encode::{encode, encode_graph, encode_raw};
pub use error::{IriError, IriResult};
