use std::fmt;
use thiserror::Error;

/// Element kind of a homogeneous set, used in scan-mismatch errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetKind {
    Int,
    Float,
    String,
    Binary,
}

impl SetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SetKind::Int => "int",
            SetKind::Float => "float64",
            SetKind::String => "string",
            SetKind::Binary => "binary",
        }
    }
}

impl fmt::Display for SetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors surfaced by the driver underneath the dialect.
///
/// The transaction-state class is rewritten to the ORM's canonical
/// invalid-transaction error by the dialect's translator; every other
/// variant passes through unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DriverError {
    #[error("transaction commit in progress")]
    CommitInProgress,

    #[error("transaction rollback in progress")]
    RollbackInProgress,

    #[error("already in transaction")]
    AlreadyInTransaction,

    #[error("invalid transaction stage")]
    InvalidTransactionStage,

    #[error("no active transaction")]
    NoTransaction,

    #[error("conditional check failed: {0}")]
    ConditionalCheckFailed(String),

    #[error("{0}")]
    Other(String),
}

impl DriverError {
    /// True for the transaction-state equivalence class.
    pub fn is_transaction_state(&self) -> bool {
        matches!(
            self,
            DriverError::CommitInProgress
                | DriverError::RollbackInProgress
                | DriverError::AlreadyInTransaction
                | DriverError::InvalidTransactionStage
                | DriverError::NoTransaction
        )
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("collection already contains item")]
    CollectionAlreadyContainsItem,

    #[error("failed to cast")]
    FailedToCast,

    #[error("value is incompatible of {0} slice")]
    IncompatibleSlice(SetKind),

    #[error("value incompatible")]
    ValueIncompatible,

    #[error("invalid column name: {0}")]
    InvalidColumnName(String),

    #[error("invalid transaction")]
    InvalidTransaction,

    #[error(transparent)]
    Driver(#[from] DriverError),
}

impl Error {
    /// Returns a stable error code for this error variant.
    pub fn code(&self) -> &'static str {
        match self {
            Error::CollectionAlreadyContainsItem => "COLLECTION_ALREADY_CONTAINS_ITEM",
            Error::FailedToCast => "FAILED_TO_CAST",
            Error::IncompatibleSlice(_) => "INCOMPATIBLE_SLICE",
            Error::ValueIncompatible => "VALUE_INCOMPATIBLE",
            Error::InvalidColumnName(_) => "INVALID_COLUMN_NAME",
            Error::InvalidTransaction => "INVALID_TRANSACTION",
            Error::Driver(_) => "DRIVER_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
