//! Append-only tamper-evidence ledger for the Byline publishing workflow.
//!
//! When an article is approved, the review layer seals its canonical payload
//! string into the chain and persists the returned fingerprint alongside the
//! article. This crate provides:
//! - [`Entry`] — one immutable, hash-linked ledger record
//! - [`LedgerWriter`] / [`LedgerReader`] trait boundaries
//! - [`InMemoryLedger`] — the single-process chain implementation
//! - [`ChainValidator`] — whole-chain integrity validation
//! - [`verify_payload`] — the article-content verification contract

pub mod entry;
pub mod error;
pub mod memory;
pub mod traits;
pub mod validation;
pub mod verify;

pub use entry::{compute_fingerprint, Entry};
pub use error::LedgerError;
pub use memory::{InMemoryLedger, GENESIS_PAYLOAD};
pub use traits::{LedgerReader, LedgerWriter};
pub use validation::{ChainValidator, ValidationReport, Violation, ViolationKind};
pub use verify::{verify_payload, VerificationStatus};
