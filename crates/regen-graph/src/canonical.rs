use std::fmt;

use serde_json::Value;
use sophia_api::parser::QuadParser;
use sophia_api::quad::Quad;
use sophia_api::source::QuadSource;
use sophia_api::term::Term;
use sophia_c14n::rdfc10;
use sophia_inmem::dataset::LightDataset;
use sophia_jsonld::{JsonLdOptions, JsonLdParser};
use tracing::debug;

use crate::error::{GraphError, GraphResult};

/// Canonical N-Quads serialization of a non-empty RDF dataset.
///
/// Statements are sorted, one per line, each terminated by a single `\n`.
/// Blank nodes carry their canonical `_:c14nN` labels.
#[derive(Clone, PartialEq, Eq)]
pub struct CanonicalGraph {
    nquads: String,
}

impl CanonicalGraph {
    /// The canonical N-Quads text.
    pub fn as_str(&self) -> &str {
        &self.nquads
    }

    /// The bytes that get digested into a graph IRI.
    pub fn as_bytes(&self) -> &[u8] {
        self.nquads.as_bytes()
    }

    /// Iterate over the canonical statements, without line terminators.
    pub fn statements(&self) -> impl Iterator<Item = &str> {
        self.nquads.lines()
    }

    /// Number of statements. Always at least one.
    pub fn len(&self) -> usize {
        self.statements().count()
    }

    /// Always `false`; empty datasets are rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.nquads.is_empty()
    }

    pub fn into_string(self) -> String {
        self.nquads
    }
}

impl fmt::Debug for CanonicalGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CanonicalGraph")
            .field("statements", &self.len())
            .finish()
    }
}

impl fmt::Display for CanonicalGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.nquads)
    }
}

/// Canonicalize a parsed JSON-LD document.
///
/// Only inline `@context` objects are supported. Remote contexts are not
/// fetched, so a document referencing one by URL is rejected.
pub fn canonicalize(document: &Value) -> GraphResult<CanonicalGraph> {
    let text = serde_json::to_string(document)
        .map_err(|e| GraphError::InvalidGraphDocument(e.to_string()))?;
    canonicalize_str(&text)
}

/// Canonicalize a JSON-LD document given as text.
///
/// Documents are parsed without a base IRI. Relative `@id`, `@type` and
/// object references are never resolved: any statement still holding a
/// relative IRI after expansion is dropped, as JSON-LD to-RDF conversion
/// does. A document left with no statements is rejected.
pub fn canonicalize_str(text: &str) -> GraphResult<CanonicalGraph> {
    let parser: JsonLdParser = JsonLdParser::new_with_options(JsonLdOptions::default().with_no_base());
    let mut dropped = 0usize;
    let dataset: LightDataset = parser
        .parse(text.as_bytes())
        .filter_quads(|quad| {
            let keep = is_absolute_quad(quad);
            if !keep {
                dropped += 1;
            }
            keep
        })
        .collect_quads()
        .map_err(|e| GraphError::InvalidGraphDocument(e.to_string()))?;
    if dropped > 0 {
        debug!(dropped, "dropped statements with relative IRIs");
    }

    let mut out = Vec::new();
    rdfc10::normalize(&dataset, &mut out)
        .map_err(|e| GraphError::InvalidGraphDocument(e.to_string()))?;
    let nquads =
        String::from_utf8(out).map_err(|e| GraphError::InvalidGraphDocument(e.to_string()))?;

    if nquads.is_empty() {
        return Err(GraphError::InvalidGraphDocument(
            "document expands to no RDF statements".into(),
        ));
    }

    let graph = CanonicalGraph { nquads };
    debug!(statements = graph.len(), "canonicalized graph");
    Ok(graph)
}

fn is_absolute_quad<Q: Quad>(quad: &Q) -> bool {
    is_absolute_term(quad.s())
        && is_absolute_term(quad.p())
        && is_absolute_term(quad.o())
        && quad.g().map_or(true, is_absolute_term)
}

/// IRIs and literal datatypes must carry a scheme. Blank nodes and plain
/// literals always pass.
fn is_absolute_term<T: Term>(term: T) -> bool {
    let iri_ok = term.iri().map_or(true, |iri| has_scheme(iri.as_str()));
    let datatype_ok = term.datatype().map_or(true, |dt| has_scheme(dt.as_str()));
    iri_ok && datatype_ok
}

/// RFC 3987 `scheme ":"` prefix: a letter, then letters, digits, `+`, `-`
/// or `.`.
fn has_scheme(iri: &str) -> bool {
    let Some((scheme, _)) = iri.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
