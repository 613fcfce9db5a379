use std::sync::RwLock;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::debug;

use byline_types::Fingerprint;

use crate::entry::Entry;
use crate::error::LedgerError;
use crate::traits::{LedgerReader, LedgerWriter};
use crate::validation::ChainValidator;

/// Payload marker sealed into the genesis entry.
pub const GENESIS_PAYLOAD: &str = "byline genesis";

/// The single-process append-only chain.
///
/// Owns its entries exclusively; the only mutation path is
/// [`LedgerWriter::append`]. Created once at service startup and handed to
/// whatever needs it — there is no process-wide singleton. Construction
/// synthesizes the genesis entry, so the chain is never empty.
pub struct InMemoryLedger {
    inner: RwLock<Vec<Entry>>,
}

impl InMemoryLedger {
    /// Create the ledger and its genesis entry. Cannot fail.
    pub fn new() -> Self {
        let genesis = Entry::new(
            0,
            unix_now(),
            GENESIS_PAYLOAD.to_string(),
            Fingerprint::sentinel(),
        );
        debug!(fingerprint = %genesis.fingerprint.short_hex(), "genesis entry created");
        Self {
            inner: RwLock::new(vec![genesis]),
        }
    }

    /// Whole-chain structural validation.
    ///
    /// `Ok(true)` iff every entry's stored fingerprint matches a
    /// recomputation and every link points at its predecessor. Detection
    /// only: the ledger never repairs or rolls back; the caller decides what
    /// a `false` means (refuse to serve, alert, ...).
    pub fn validate(&self) -> Result<bool, LedgerError> {
        let entries = self.entries()?;
        Ok(ChainValidator::validate_entries(&entries).is_valid())
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerWriter for InMemoryLedger {
    fn append(&self, payload: &str) -> Result<Fingerprint, LedgerError> {
        // Read-tail and push happen under one write lock: concurrent appends
        // can never observe the same predecessor or index.
        let mut entries = self.inner.write().map_err(|_| LedgerError::LockPoisoned)?;
        let tail = entries
            .last()
            .ok_or_else(|| LedgerError::IntegrityViolation {
                index: 0,
                reason: "genesis entry missing".to_string(),
            })?;

        let entry = Entry::new(
            entries.len() as u64,
            unix_now(),
            payload.to_string(),
            tail.fingerprint,
        );
        let fingerprint = entry.fingerprint;
        debug!(
            sequence_index = entry.sequence_index,
            fingerprint = %fingerprint.short_hex(),
            "entry appended"
        );
        entries.push(entry);
        Ok(fingerprint)
    }
}

impl LedgerReader for InMemoryLedger {
    fn latest(&self) -> Result<Entry, LedgerError> {
        let entries = self.inner.read().map_err(|_| LedgerError::LockPoisoned)?;
        entries
            .last()
            .cloned()
            .ok_or_else(|| LedgerError::IntegrityViolation {
                index: 0,
                reason: "genesis entry missing".to_string(),
            })
    }

    fn find_by_fingerprint(
        &self,
        fingerprint: &Fingerprint,
    ) -> Result<Option<Entry>, LedgerError> {
        let entries = self.inner.read().map_err(|_| LedgerError::LockPoisoned)?;
        Ok(entries
            .iter()
            .find(|e| e.fingerprint == *fingerprint)
            .cloned())
    }

    fn entries(&self) -> Result<Vec<Entry>, LedgerError> {
        let entries = self.inner.read().map_err(|_| LedgerError::LockPoisoned)?;
        Ok(entries.clone())
    }

    fn entry_count(&self) -> Result<u64, LedgerError> {
        let entries = self.inner.read().map_err(|_| LedgerError::LockPoisoned)?;
        Ok(entries.len() as u64)
    }
}

fn unix_now() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64()
}
