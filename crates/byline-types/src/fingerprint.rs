use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Cryptographic digest identifying one ledger entry.
///
/// A `Fingerprint` is the BLAKE3 hash of an entry's canonical serialization.
/// Identical entry fields always produce the same `Fingerprint`, so a stored
/// fingerprint can be checked against a recomputation at any later time.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Create a `Fingerprint` from a pre-computed hash.
    pub fn from_hash(hash: [u8; 32]) -> Self {
        Self(hash)
    }

    /// The sentinel fingerprint (all zeros).
    ///
    /// Used as the `previous_fingerprint` of the genesis entry, which has no
    /// predecessor. No real digest is ever all zeros in practice.
    pub const fn sentinel() -> Self {
        Self([0u8; 32])
    }

    /// Returns `true` if this is the sentinel fingerprint.
    pub fn is_sentinel(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// The raw 32-byte digest.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Hex-encoded string representation.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short hex representation (first 8 characters).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// Parse from a hex string.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        if bytes.len() != 32 {
            return Err(TypeError::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({})", self.short_hex())
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; 32]> for Fingerprint {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl From<Fingerprint> for [u8; 32] {
    fn from(fp: Fingerprint) -> Self {
        fp.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_all_zeros() {
        let sentinel = Fingerprint::sentinel();
        assert!(sentinel.is_sentinel());
        assert_eq!(sentinel.as_bytes(), &[0u8; 32]);
    }

    #[test]
    fn non_zero_hash_is_not_sentinel() {
        let fp = Fingerprint::from_hash([7; 32]);
        assert!(!fp.is_sentinel());
    }

    #[test]
    fn hex_roundtrip() {
        let mut bytes = [0u8; 32];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }
        let fp = Fingerprint::from_hash(bytes);
        let parsed = Fingerprint::from_hex(&fp.to_hex()).unwrap();
        assert_eq!(fp, parsed);
    }

    #[test]
    fn from_hex_rejects_bad_length() {
        let err = Fingerprint::from_hex("abcd").unwrap_err();
        assert_eq!(
            err,
            TypeError::InvalidLength {
                expected: 32,
                actual: 2
            }
        );
    }

    #[test]
    fn from_hex_rejects_non_hex() {
        assert!(matches!(
            Fingerprint::from_hex("zz"),
            Err(TypeError::InvalidHex(_))
        ));
    }

    #[test]
    fn short_hex_is_8_chars() {
        let fp = Fingerprint::from_hash([0xab; 32]);
        assert_eq!(fp.short_hex().len(), 8);
    }

    #[test]
    fn display_is_full_hex() {
        let fp = Fingerprint::from_hash([0x5c; 32]);
        let display = format!("{fp}");
        assert_eq!(display.len(), 64);
        assert_eq!(display, fp.to_hex());
    }

    #[test]
    fn serde_roundtrip() {
        let fp = Fingerprint::from_hash([9; 32]);
        let json = serde_json::to_string(&fp).unwrap();
        let parsed: Fingerprint = serde_json::from_str(&json).unwrap();
        assert_eq!(fp, parsed);
    }
}
