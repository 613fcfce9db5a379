//! Foundation types for the Byline tamper-evidence ledger.
//!
//! # Key Types
//!
//! - [`Fingerprint`] — BLAKE3 digest identifying one ledger entry
//! - [`TypeError`] — errors from fingerprint parsing

pub mod error;
pub mod fingerprint;

pub use error::TypeError;
pub use fingerprint::Fingerprint;
