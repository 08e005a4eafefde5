use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// File extension suffix carried by raw-content IRIs.
///
/// Only the extensions below are ever written into an IRI. Anything else is
/// normalized to [`Extension::Bin`] by [`Extension::normalize`]; unknown
/// extensions are never an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extension {
    #[default]
    Bin,
    Txt,
    Csv,
    Json,
    Xml,
    Pdf,
    Tiff,
    Jpg,
    Png,
    Svg,
    Webp,
    Avif,
    Gif,
    Apng,
    Mpeg,
    Mp4,
    Webm,
    Ogg,
}

impl Extension {
    /// Every approved extension, in ledger order.
    pub const ALL: [Extension; 18] = [
        Self::Bin,
        Self::Txt,
        Self::Csv,
        Self::Json,
        Self::Xml,
        Self::Pdf,
        Self::Tiff,
        Self::Jpg,
        Self::Png,
        Self::Svg,
        Self::Webp,
        Self::Avif,
        Self::Gif,
        Self::Apng,
        Self::Mpeg,
        Self::Mp4,
        Self::Webm,
        Self::Ogg,
    ];

    /// The suffix as it appears after the final `.` of an IRI.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bin => "bin",
            Self::Txt => "txt",
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Pdf => "pdf",
            Self::Tiff => "tiff",
            Self::Jpg => "jpg",
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Webp => "webp",
            Self::Avif => "avif",
            Self::Gif => "gif",
            Self::Apng => "apng",
            Self::Mpeg => "mpeg",
            Self::Mp4 => "mp4",
            Self::Webm => "webm",
            Self::Ogg => "ogg",
        }
    }

    /// Look up an approved extension. Matching is exact and case-sensitive.
    pub fn lookup(ext: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.as_str() == ext)
    }

    /// Map any caller-supplied extension onto the allowlist, falling back
    /// to `bin`.
    pub fn normalize(ext: &str) -> Self {
        Self::lookup(ext).unwrap_or(Self::Bin)
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Extension {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::normalize(s))
    }
}
