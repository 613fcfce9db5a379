use tracing::warn;

use byline_types::Fingerprint;

use crate::entry::Entry;
use crate::error::LedgerError;
use crate::traits::LedgerReader;

/// Result of whole-chain validation.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidationReport {
    pub entry_count: u64,
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    /// Returns `true` if all checks passed.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// A specific integrity violation detected during validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    pub index: u64,
    pub kind: ViolationKind,
    pub description: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViolationKind {
    MissingGenesis,
    GenesisLink,
    SequenceGap,
    LinkBreak,
    HashMismatch,
}

/// Chain integrity validator.
///
/// Detection only: corruption can come solely from outside this component
/// (a display layer clobbering a snapshot, a lost entry in an external
/// copy), so the validator reports and never repairs.
pub struct ChainValidator;

impl ChainValidator {
    /// Validate a whole-chain snapshot taken from a reader.
    pub fn validate<R: LedgerReader>(reader: &R) -> Result<ValidationReport, LedgerError> {
        let entries = reader.entries()?;
        Ok(Self::validate_entries(&entries))
    }

    /// Validate an ordered slice of entries.
    ///
    /// Checks, per entry: stored fingerprint matches a recomputation from
    /// stored fields (genesis included), `sequence_index` equals the
    /// position, and `previous_fingerprint` equals the predecessor's
    /// fingerprint (the sentinel for genesis). A genesis-only chain passes
    /// vacuously; an empty slice cannot occur through construction and is
    /// reported as a missing genesis.
    pub fn validate_entries(entries: &[Entry]) -> ValidationReport {
        let mut violations = Vec::new();

        if entries.is_empty() {
            violations.push(Violation {
                index: 0,
                kind: ViolationKind::MissingGenesis,
                description: "chain has no genesis entry".to_string(),
            });
            return Self::report(0, violations);
        }

        if !entries[0].previous_fingerprint.is_sentinel() {
            violations.push(Violation {
                index: 0,
                kind: ViolationKind::GenesisLink,
                description: "genesis previous fingerprint is not the sentinel".to_string(),
            });
        }

        for (index, entry) in entries.iter().enumerate() {
            if entry.sequence_index != index as u64 {
                violations.push(Violation {
                    index: index as u64,
                    kind: ViolationKind::SequenceGap,
                    description: format!(
                        "expected sequence index {index}, found {}",
                        entry.sequence_index
                    ),
                });
            }

            if index > 0 && entry.previous_fingerprint != entries[index - 1].fingerprint {
                violations.push(Violation {
                    index: index as u64,
                    kind: ViolationKind::LinkBreak,
                    description: format!(
                        "previous fingerprint {} does not match predecessor {}",
                        entry.previous_fingerprint.short_hex(),
                        entries[index - 1].fingerprint.short_hex()
                    ),
                });
            }

            let recomputed = entry.recompute_fingerprint();
            if recomputed != entry.fingerprint {
                violations.push(Violation {
                    index: index as u64,
                    kind: ViolationKind::HashMismatch,
                    description: format!(
                        "stored fingerprint {} does not match recomputed {}",
                        entry.fingerprint.short_hex(),
                        recomputed.short_hex()
                    ),
                });
            }
        }

        Self::report(entries.len() as u64, violations)
    }

    fn report(entry_count: u64, violations: Vec<Violation>) -> ValidationReport {
        if !violations.is_empty() {
            warn!(
                entry_count,
                violation_count = violations.len(),
                first_index = violations[0].index,
                "chain failed validation"
            );
        }
        ValidationReport {
            entry_count,
            violations,
        }
    }
}
