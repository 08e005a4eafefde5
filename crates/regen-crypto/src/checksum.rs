//! Base58check: base58 over `version ++ payload ++ checksum`.
//!
//! The checksum is the first four bytes of SHA-256(SHA-256(version ++
//! payload)), the same construction Bitcoin uses for addresses. The base58
//! alphabet is the Bitcoin one.

use sha2::{Digest as _, Sha256};

/// Number of checksum bytes appended to the body.
pub const CHECKSUM_LEN: usize = 4;

/// A successfully decoded base58check string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decoded {
    pub version: u8,
    pub payload: Vec<u8>,
}

/// Errors from decoding a base58check string.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("invalid base58: {0}")]
    InvalidBase58(String),

    #[error("decoded data too short: {len} bytes, need at least {min}")]
    TooShort { len: usize, min: usize },

    #[error("checksum mismatch: expected {expected:02x?}, computed {computed:02x?}")]
    ChecksumMismatch {
        expected: [u8; CHECKSUM_LEN],
        computed: [u8; CHECKSUM_LEN],
    },
}

/// First four bytes of the double SHA-256 of `body`.
pub fn checksum(body: &[u8]) -> [u8; CHECKSUM_LEN] {
    let once = Sha256::digest(body);
    let twice = Sha256::digest(once);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&twice[..CHECKSUM_LEN]);
    out
}

/// Encode `payload` under `version`.
///
/// The version is a single byte by construction, so there is no runtime
/// range check to get wrong.
pub fn encode(payload: &[u8], version: u8) -> String {
    let mut buf = Vec::with_capacity(1 + payload.len() + CHECKSUM_LEN);
    buf.push(version);
    buf.extend_from_slice(payload);
    let sum = checksum(&buf);
    buf.extend_from_slice(&sum);
    bs58::encode(buf).into_string()
}

/// Decode and verify a base58check string.
pub fn decode(s: &str) -> Result<Decoded, CodecError> {
    let bytes = bs58::decode(s)
        .into_vec()
        .map_err(|e| CodecError::InvalidBase58(e.to_string()))?;
    let min = 1 + CHECKSUM_LEN;
    if bytes.len() < min {
        return Err(CodecError::TooShort {
            len: bytes.len(),
            min,
        });
    }

    let (body, sum) = bytes.split_at(bytes.len() - CHECKSUM_LEN);
    let computed = checksum(body);
    if sum != computed.as_slice() {
        let mut expected = [0u8; CHECKSUM_LEN];
        expected.copy_from_slice(sum);
        return Err(CodecError::ChecksumMismatch { expected, computed });
    }

    Ok(Decoded {
        version: body[0],
        payload: body[1..].to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Version-0 address from the Bitcoin wiki's address walkthrough.
    const HASH160: [u8; 20] = [
        0x01, 0x09, 0x66, 0x77, 0x60, 0x06, 0x95, 0x3d, 0x55, 0x67, 0x43, 0x9e, 0x5e, 0x39, 0xf8,
        0x6a, 0x0d, 0x27, 0x3b, 0xee,
    ];
    const ADDRESS: &str = "16UwLL9Risc3QfPqBUvKofHmBQ7wMtjvM";

    #[test]
    fn encode_matches_bitcoin_vector() {
        assert_eq!(encode(&HASH160, 0), ADDRESS);
    }

    #[test]
    fn decode_matches_bitcoin_vector() {
        let decoded = decode(ADDRESS).unwrap();
        assert_eq!(decoded.version, 0);
        assert_eq!(decoded.payload, HASH160.to_vec());
    }

    #[test]
    fn leading_zero_version_is_a_leading_one() {
        let encoded = encode(&[0x00, 0x01], 0);
        assert!(encoded.starts_with("11"));
    }

    #[test]
    fn nonzero_version_roundtrips() {
        let decoded = decode(&encode(b"payload", 0xff)).unwrap();
        assert_eq!(decoded.version, 0xff);
        assert_eq!(decoded.payload, b"payload".to_vec());
    }

    #[test]
    fn decode_rejects_non_alphabet_characters() {
        // `0`, `O`, `I` and `l` are not part of the alphabet.
        assert!(matches!(
            decode("0OIl"),
            Err(CodecError::InvalidBase58(_))
        ));
    }

    #[test]
    fn decode_rejects_short_input() {
        assert!(matches!(
            decode("1111"),
            Err(CodecError::TooShort { len: 4, min: 5 })
        ));
    }

    #[test]
    fn decode_detects_changed_character() {
        // Swap the last character for another alphabet character.
        let mut tampered = ADDRESS[..ADDRESS.len() - 1].to_string();
        tampered.push('N');
        assert!(matches!(
            decode(&tampered),
            Err(CodecError::ChecksumMismatch { .. })
        ));
    }

    proptest! {
        #[test]
        fn roundtrip(payload in proptest::collection::vec(any::<u8>(), 0..64), version in any::<u8>()) {
            let decoded = decode(&encode(&payload, version)).unwrap();
            prop_assert_eq!(decoded.version, version);
            prop_assert_eq!(decoded.payload, payload);
        }

        #[test]
        fn flipped_byte_fails_checksum(
            payload in proptest::collection::vec(any::<u8>(), 34..40),
            index in any::<prop::sample::Index>(),
            flip in 1u8..=255,
        ) {
            let mut raw = vec![0u8];
            raw.extend_from_slice(&payload);
            raw.extend_from_slice(&checksum(&raw));
            let i = index.index(raw.len());
            raw[i] ^= flip;
            let tampered = bs58::encode(&raw).into_string();
            prop_assert!(decode(&tampered).is_err());
        }
    }
}
