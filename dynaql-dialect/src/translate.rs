//! Driver-error translation.
//!
//! The driver surfaces its own transaction-state errors; the host ORM has
//! one canonical invalid-transaction error. This maps the equivalence class
//! and passes everything else through unchanged.

use dynaql_core::Error;
use tracing::debug;

/// Normalize a driver transaction-state error to the ORM canonical form.
/// Idempotent: already-canonical and unrelated errors come back unchanged.
pub fn translate(err: Error) -> Error {
    match err {
        Error::Driver(driver) if driver.is_transaction_state() => {
            debug!(%driver, "translating driver transaction-state error");
            Error::InvalidTransaction
        }
        other => other,
    }
}
