/// Errors produced by ledger operations.
///
/// Not-found lookups are ordinary `Ok(None)` results, never errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("integrity violation at entry {index}: {reason}")]
    IntegrityViolation { index: u64, reason: String },

    #[error("ledger lock poisoned by a panicked writer")]
    LockPoisoned,
}
