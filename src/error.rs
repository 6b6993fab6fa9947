//! Failure taxonomy for the session and score ledger.
//!
//! Every fallible operation in this crate returns [`LedgerError`]. The first
//! five variants are expected, typed outcomes the boundary layer renders as
//! distinct user-facing messages; [`LedgerError::StorageUnavailable`] is the
//! one unexpected fault, surfaced with an opaque message and logged for
//! operational follow-up.

use sea_orm::DbErr;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, LedgerError>;

/// All the ways a ledger operation can fail.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A required caller input was missing or malformed. Never retried; the
    /// caller must fix the request.
    #[error("{0} is required")]
    InvalidArgument(&'static str),

    /// The submitted score could not be coerced to a finite number.
    #[error("score must be a number")]
    InvalidScore,

    /// No session exists for the given token and location.
    #[error("invalid session token")]
    InvalidToken,

    /// The session was already consumed. Authoritative, not transient: a
    /// caller losing the consumption race must not retry with the same token.
    #[error("session already used")]
    AlreadyUsed,

    /// The session passed its expiry before it was consumed.
    #[error("session expired")]
    Expired,

    /// The durable store could not be reached or a write failed. The display
    /// message stays opaque; the underlying [`DbErr`] remains reachable
    /// through `source()` for operator logs.
    #[error("storage unavailable")]
    StorageUnavailable(#[from] DbErr),
}

impl LedgerError {
    /// True for the three session-protocol violations (`InvalidToken`,
    /// `AlreadyUsed`, `Expired`). Boundary layers map these to a 403-class
    /// response.
    pub fn is_session_rejection(&self) -> bool {
        matches!(
            self,
            LedgerError::InvalidToken | LedgerError::AlreadyUsed | LedgerError::Expired
        )
    }

    /// True for malformed caller input (`InvalidArgument`, `InvalidScore`).
    /// Boundary layers map these to a 400-class response.
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            LedgerError::InvalidArgument(_) | LedgerError::InvalidScore
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_disjoint() {
        let errors = [
            LedgerError::InvalidArgument("locationId"),
            LedgerError::InvalidScore,
            LedgerError::InvalidToken,
            LedgerError::AlreadyUsed,
            LedgerError::Expired,
            LedgerError::StorageUnavailable(DbErr::Custom("down".to_owned())),
        ];

        for err in &errors {
            assert!(!(err.is_session_rejection() && err.is_bad_request()));
        }
    }

    #[test]
    fn storage_fault_display_is_opaque() {
        let err = LedgerError::StorageUnavailable(DbErr::Custom("host 10.0.0.3 refused".to_owned()));
        assert_eq!(err.to_string(), "storage unavailable");
    }
}
