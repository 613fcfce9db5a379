//! Article-content verification against sealed ledger entries.
//!
//! The review workflow seals `"{id}:{title}:{content}"` when an article is
//! approved and persists the returned fingerprint next to the article row.
//! To check an article later, it rebuilds the same payload string from the
//! currently stored fields and compares it against what the ledger holds.

use byline_types::Fingerprint;

use crate::error::LedgerError;
use crate::traits::LedgerReader;

/// Outcome of checking stored content against a sealed entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerificationStatus {
    /// Stored content matches the sealed payload.
    Verified,
    /// An entry exists for the fingerprint but its payload differs: the
    /// content diverged from what was sealed at approval time.
    PayloadMismatch,
    /// No entry carries the fingerprint. Expected when nothing was ever
    /// sealed (or the persisted fingerprint is stale); not an error.
    NotSealed,
}

/// Compare `expected_payload` against the payload sealed under `fingerprint`.
///
/// This is the system's only tamper-detection signal for article content.
pub fn verify_payload<R: LedgerReader>(
    reader: &R,
    fingerprint: &Fingerprint,
    expected_payload: &str,
) -> Result<VerificationStatus, LedgerError> {
    match reader.find_by_fingerprint(fingerprint)? {
        None => Ok(VerificationStatus::NotSealed),
        Some(entry) if entry.payload == expected_payload => Ok(VerificationStatus::Verified),
        Some(_) => Ok(VerificationStatus::PayloadMismatch),
    }
}

#[cfg(test)]
mod tests {
    use crate::memory::InMemoryLedger;
    use crate::traits::LedgerWriter;

    use super::*;

    #[test]
    fn sealed_and_unchanged_content_verifies() {
        let ledger = InMemoryLedger::new();
        let fp = ledger.append("7:Headline:Body text").unwrap();

        let status = verify_payload(&ledger, &fp, "7:Headline:Body text").unwrap();
        assert_eq!(status, VerificationStatus::Verified);
    }

    #[test]
    fn edited_content_reports_mismatch() {
        let ledger = InMemoryLedger::new();
        let fp = ledger.append("7:Headline:Body text").unwrap();

        let status = verify_payload(&ledger, &fp, "7:Headline:Rewritten").unwrap();
        assert_eq!(status, VerificationStatus::PayloadMismatch);
    }

    #[test]
    fn unknown_fingerprint_reports_not_sealed() {
        let ledger = InMemoryLedger::new();
        ledger.append("7:Headline:Body text").unwrap();

        let status = verify_payload(
            &ledger,
            &Fingerprint::from_hash([0x42; 32]),
            "7:Headline:Body text",
        )
        .unwrap();
        assert_eq!(status, VerificationStatus::NotSealed);
    }
}
