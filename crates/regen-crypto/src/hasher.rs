use std::io::{self, Read};

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest as _};
use regen_types::Digest;

type Blake2b256 = Blake2b<U32>;

/// Unkeyed BLAKE2b content hasher with a 256-bit output.
///
/// This is the only digest the IRI format currently tags
/// (`DIGEST_ALG_BLAKE2B256`). Raw bytes and canonical graph N-Quads go
/// through the same function; no domain separation is applied, since the
/// ledger hashes the bare content.
#[derive(Clone, Default)]
pub struct ContentHasher {
    inner: Blake2b256,
}

impl ContentHasher {
    /// Start an incremental hash.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed more content into the hash.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.inner.update(data);
        self
    }

    /// Finish the hash.
    pub fn finalize(self) -> Digest {
        Digest::from_hash(self.inner.finalize().into())
    }

    /// One-shot digest of a byte buffer.
    pub fn digest(data: &[u8]) -> Digest {
        Digest::from_hash(Blake2b256::digest(data).into())
    }

    /// Digest everything a reader yields, without buffering it whole.
    pub fn digest_reader<R: Read>(mut reader: R) -> io::Result<Digest> {
        let mut hasher = Self::new();
        let mut buf = [0u8; 8192];
        loop {
            let n = reader.read(&mut buf)?;
            if n == 0 {
                break;
            }
            hasher.update(&buf[..n]);
        }
        Ok(hasher.finalize())
    }

    /// Verify that data produces the expected digest.
    pub fn verify(data: &[u8], expected: &Digest) -> bool {
        Self::digest(data) == *expected
    }
}

impl std::fmt::Debug for ContentHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentHasher")
            .field("algorithm", &"blake2b-256")
            .finish()
    }
}
