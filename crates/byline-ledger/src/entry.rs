//! Entry: a single immutable, hash-linked ledger record.

use serde::Serialize;

use byline_types::Fingerprint;

/// Domain tag seeding every entry digest. Prevents cross-type collisions
/// with any other BLAKE3 use in the system.
const ENTRY_DOMAIN: &[u8] = b"byline-entry-v1:";

/// One record in the append-only ledger.
///
/// An `Entry` is finalized at construction: its [`fingerprint`](Self::fingerprint)
/// is computed over the other four fields before the value exists, and no
/// field is ever mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Entry {
    /// Position in the chain, starting at 0 for the genesis entry.
    pub sequence_index: u64,
    /// Seconds since the UNIX epoch, captured at creation.
    pub created_at: f64,
    /// Opaque caller-supplied string; the ledger never parses it.
    pub payload: String,
    /// Fingerprint of the preceding entry, or the sentinel for genesis.
    pub previous_fingerprint: Fingerprint,
    /// Digest over the four fields above.
    pub fingerprint: Fingerprint,
}

impl Entry {
    pub(crate) fn new(
        sequence_index: u64,
        created_at: f64,
        payload: String,
        previous_fingerprint: Fingerprint,
    ) -> Self {
        let fingerprint =
            compute_fingerprint(sequence_index, created_at, &payload, &previous_fingerprint);
        Self {
            sequence_index,
            created_at,
            payload,
            previous_fingerprint,
            fingerprint,
        }
    }

    /// Recompute this entry's fingerprint from its stored fields.
    ///
    /// Compare the result against `self.fingerprint` to detect tampering.
    pub fn recompute_fingerprint(&self) -> Fingerprint {
        compute_fingerprint(
            self.sequence_index,
            self.created_at,
            &self.payload,
            &self.previous_fingerprint,
        )
    }
}

/// Compute the fingerprint for an entry's fields.
///
/// Pure function: identical inputs always produce the same digest, and the
/// clock is never read (`created_at` is an explicit input). The canonical
/// encoding is fixed-order under a domain-tagged BLAKE3 hasher:
/// `sequence_index` as little-endian u64, `created_at` as the little-endian
/// bytes of its IEEE-754 bit pattern, the payload length-prefixed with a
/// little-endian u64, then the raw previous fingerprint. Every field except
/// the payload is fixed-width and the payload carries its length, so no two
/// distinct field tuples share an encoding.
pub fn compute_fingerprint(
    sequence_index: u64,
    created_at: f64,
    payload: &str,
    previous_fingerprint: &Fingerprint,
) -> Fingerprint {
    let mut hasher = blake3::Hasher::new();
    hasher.update(ENTRY_DOMAIN);
    hasher.update(&sequence_index.to_le_bytes());
    hasher.update(&created_at.to_bits().to_le_bytes());
    hasher.update(&(payload.len() as u64).to_le_bytes());
    hasher.update(payload.as_bytes());
    hasher.update(previous_fingerprint.as_bytes());
    Fingerprint::from_hash(*hasher.finalize().as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_deterministic() {
        let prev = Fingerprint::sentinel();
        let f1 = compute_fingerprint(3, 1_700_000_000.25, "1:Title:Body", &prev);
        let f2 = compute_fingerprint(3, 1_700_000_000.25, "1:Title:Body", &prev);
        assert_eq!(f1, f2);
    }

    #[test]
    fn fingerprint_changes_with_each_field() {
        let prev = Fingerprint::sentinel();
        let base = compute_fingerprint(1, 100.0, "payload", &prev);

        assert_ne!(base, compute_fingerprint(2, 100.0, "payload", &prev));
        assert_ne!(base, compute_fingerprint(1, 100.5, "payload", &prev));
        assert_ne!(base, compute_fingerprint(1, 100.0, "other", &prev));
        assert_ne!(
            base,
            compute_fingerprint(1, 100.0, "payload", &Fingerprint::from_hash([1; 32]))
        );
    }

    #[test]
    fn empty_payload_is_valid() {
        let prev = Fingerprint::from_hash([4; 32]);
        let entry = Entry::new(1, 42.0, String::new(), prev);
        assert_eq!(entry.fingerprint, entry.recompute_fingerprint());
    }

    #[test]
    fn recompute_matches_stored() {
        let entry = Entry::new(
            7,
            1_700_000_123.5,
            "9:Headline:Text".to_string(),
            Fingerprint::from_hash([2; 32]),
        );
        assert_eq!(entry.fingerprint, entry.recompute_fingerprint());
    }

    #[test]
    fn mutated_payload_no_longer_matches() {
        let mut entry = Entry::new(
            1,
            50.0,
            "1:Title:Body".to_string(),
            Fingerprint::sentinel(),
        );
        entry.payload = "1:Title:Altered".to_string();
        assert_ne!(entry.fingerprint, entry.recompute_fingerprint());
    }

    #[test]
    fn serializes_for_display_layers() {
        let entry = Entry::new(0, 10.0, "byline genesis".to_string(), Fingerprint::sentinel());
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["sequence_index"], 0);
        assert_eq!(json["payload"], "byline genesis");
    }
}
