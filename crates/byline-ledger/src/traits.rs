use byline_types::Fingerprint;

use crate::entry::Entry;
use crate::error::LedgerError;

/// Write boundary for ledger append operations.
///
/// The review workflow holds the writer; nothing else may mutate the chain.
pub trait LedgerWriter: Send + Sync {
    /// Seal an opaque payload into the chain and return the new entry's
    /// fingerprint for external persistence.
    fn append(&self, payload: &str) -> Result<Fingerprint, LedgerError>;
}

/// Read boundary for ledger lookup and integrity queries.
pub trait LedgerReader: Send + Sync {
    /// The most recently appended entry (genesis if none appended yet).
    fn latest(&self) -> Result<Entry, LedgerError>;

    /// Linear scan for the entry with the given fingerprint. `Ok(None)` is
    /// the expected not-found outcome, not an error.
    fn find_by_fingerprint(&self, fingerprint: &Fingerprint)
        -> Result<Option<Entry>, LedgerError>;

    /// Snapshot of the whole chain in order.
    fn entries(&self) -> Result<Vec<Entry>, LedgerError>;

    /// Number of entries in the chain (always at least 1).
    fn entry_count(&self) -> Result<u64, LedgerError>;
}
