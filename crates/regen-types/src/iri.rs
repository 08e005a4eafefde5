use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::extension::Extension;
use crate::prefix::{GRAPH_SUFFIX, IRI_PREFIX};

/// Content class of an IRI, as recorded in its type payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum IriKind {
    /// Arbitrary bytes, tagged with an approved file extension.
    Raw { extension: Extension },
    /// A canonicalized RDF graph.
    Graph,
}

impl IriKind {
    /// The suffix written after the final `.` of the IRI.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Raw { extension } => extension.as_str(),
            Self::Graph => GRAPH_SUFFIX,
        }
    }
}

impl fmt::Display for IriKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw { extension } => write!(f, "raw ({extension})"),
            Self::Graph => write!(f, "graph"),
        }
    }
}

/// A content-derived identifier of the form `regen:<base58check>.<suffix>`.
///
/// `Iri` is an opaque string. Structural parsing (prefix and suffix) is
/// available through [`Iri::parts`], but checksum validation belongs to the
/// decoder in `regen-iri`. Two IRIs are equal iff their strings are equal.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Iri(String);

/// Borrowed view of the two variable parts of an IRI string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IriParts<'a> {
    /// The base58check payload between `regen:` and the last `.`.
    pub payload: &'a str,
    /// Everything after the last `.`.
    pub suffix: &'a str,
}

impl Iri {
    /// Assemble an IRI from an encoded payload and a suffix.
    ///
    /// Both parts must be non-empty and the suffix must not contain `.`, so
    /// that [`Iri::split`] recovers them unchanged. Encoders only pass
    /// base58 payloads and fixed suffixes.
    pub fn from_parts(payload: &str, suffix: &str) -> Self {
        debug_assert!(!payload.is_empty(), "empty IRI payload");
        debug_assert!(
            !suffix.is_empty() && !suffix.contains('.'),
            "invalid IRI suffix {suffix:?}"
        );
        Self(format!("{IRI_PREFIX}{payload}.{suffix}"))
    }

    /// Split an IRI string into payload and suffix.
    pub fn split(s: &str) -> Result<IriParts<'_>, TypeError> {
        let rest = s
            .strip_prefix(IRI_PREFIX)
            .ok_or_else(|| TypeError::MissingPrefix {
                prefix: IRI_PREFIX,
                iri: s.to_owned(),
            })?;
        let (payload, suffix) = rest
            .rsplit_once('.')
            .ok_or_else(|| TypeError::MissingSuffix(s.to_owned()))?;
        if payload.is_empty() {
            return Err(TypeError::EmptyPayload(s.to_owned()));
        }
        if suffix.is_empty() {
            return Err(TypeError::MissingSuffix(s.to_owned()));
        }
        Ok(IriParts { payload, suffix })
    }

    /// The payload and suffix of this IRI.
    pub fn parts(&self) -> IriParts<'_> {
        // Parsing constructors (serde included) validate through `split`;
        // `from_parts` asserts the same shape.
        match Self::split(&self.0) {
            Ok(parts) => parts,
            Err(_) => IriParts {
                payload: "",
                suffix: "",
            },
        }
    }

    /// The suffix after the final `.`.
    pub fn suffix(&self) -> &str {
        self.parts().suffix
    }

    /// Returns `true` for IRIs carrying the graph suffix.
    pub fn is_graph(&self) -> bool {
        self.suffix() == GRAPH_SUFFIX
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl FromStr for Iri {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::split(s)?;
        Ok(Self(s.to_owned()))
    }
}

impl TryFrom<String> for Iri {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::split(&s)?;
        Ok(Self(s))
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Iri({})", self.0)
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Iri> for String {
    fn from(iri: Iri) -> Self {
        iri.0
    }
}

impl PartialEq<str> for Iri {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Iri {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const GRAPH_IRI: &str = "regen:13toVgutDdVPL4Q3s8hqgSSm7ZwfhiCtmXFpNn9vevxyLFFUT6HN1QD.rdf";

    #[test]
    fn from_parts_formats_prefix_and_suffix() {
        let iri = Iri::from_parts("abc", "png");
        assert_eq!(iri.as_str(), "regen:abc.png");
        assert_eq!(iri.suffix(), "png");
        assert!(!iri.is_graph());
    }

    #[test]
    fn parse_graph_iri() {
        let iri: Iri = GRAPH_IRI.parse().unwrap();
        let parts = iri.parts();
        assert_eq!(
            parts.payload,
            "13toVgutDdVPL4Q3s8hqgSSm7ZwfhiCtmXFpNn9vevxyLFFUT6HN1QD"
        );
        assert_eq!(parts.suffix, "rdf");
        assert!(iri.is_graph());
    }

    #[test]
    fn parse_rejects_missing_prefix() {
        let err = "ipfs:abc.rdf".parse::<Iri>().unwrap_err();
        assert!(matches!(err, TypeError::MissingPrefix { .. }));
    }

    #[test]
    fn parse_rejects_missing_suffix() {
        assert!(matches!(
            "regen:abc".parse::<Iri>(),
            Err(TypeError::MissingSuffix(_))
        ));
        assert!(matches!(
            "regen:abc.".parse::<Iri>(),
            Err(TypeError::MissingSuffix(_))
        ));
    }

    #[test]
    fn parse_rejects_empty_payload() {
        assert!(matches!(
            "regen:.rdf".parse::<Iri>(),
            Err(TypeError::EmptyPayload(_))
        ));
    }

    #[test]
    fn kind_suffix() {
        assert_eq!(IriKind::Graph.suffix(), "rdf");
        assert_eq!(
            IriKind::Raw {
                extension: Extension::Csv
            }
            .suffix(),
            "csv"
        );
    }

    #[test]
    fn serde_roundtrip_as_plain_string() {
        let iri: Iri = GRAPH_IRI.parse().unwrap();
        let json = serde_json::to_string(&iri).unwrap();
        assert_eq!(json, format!("\"{GRAPH_IRI}\""));
        let back: Iri = serde_json::from_str(&json).unwrap();
        assert_eq!(back, iri);
    }

    #[test]
    fn serde_rejects_malformed_strings() {
        assert!(serde_json::from_str::<Iri>("\"not-an-iri\"").is_err());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "empty IRI payload")]
    fn from_parts_rejects_empty_payload() {
        Iri::from_parts("", "rdf");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "invalid IRI suffix")]
    fn from_parts_rejects_dotted_suffix() {
        Iri::from_parts("abc", "tar.gz");
    }

    proptest! {
        #[test]
        fn from_parts_splits_back(
            payload in "[1-9A-HJ-NP-Za-km-z]{1,64}",
            suffix in "[a-z0-9]{1,8}",
        ) {
            let iri = Iri::from_parts(&payload, &suffix);
            let parts = Iri::split(iri.as_str()).unwrap();
            prop_assert_eq!(parts.payload, payload.as_str());
            prop_assert_eq!(parts.suffix, suffix.as_str());
            prop_assert_eq!(iri.as_str().parse::<Iri>().unwrap(), iri);
        }

        #[test]
        fn split_never_panics(s in "\\PC{0,40}") {
            if let Ok(parts) = Iri::split(&s) {
                prop_assert!(!parts.payload.is_empty());
                prop_assert!(!parts.suffix.is_empty());
                prop_assert!(!parts.suffix.contains('.'));
            }
        }
    }

    #[test]
    fn compares_with_str() {
        let iri: Iri = GRAPH_IRI.parse().unwrap();
        assert_eq!(iri, GRAPH_IRI);
    }
}
