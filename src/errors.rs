//! Unified error types for rental-buddy.
//!
//! Every lifecycle failure is a variant of [`Error`]. Callers that only need to know
//! which class of failure occurred (bad input, wrong entity state, duplicate plate)
//! use [`Error::kind`].

use thiserror::Error;

/// Coarse classification of an [`Error`], used by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or missing required input
    Validation,
    /// Entity is not in the required state, or does not exist
    State,
    /// A vehicle with the same plate already exists
    Uniqueness,
    /// Storage, configuration or I/O failure
    Internal,
}

/// Crate-wide error type
#[derive(Debug, Error)]
pub enum Error {
    /// Generic input validation failure
    #[error("Invalid input: {message}")]
    Validation {
        /// What was wrong with the input
        message: String,
    },

    /// Daily rate text that is not a non-negative integer
    #[error("Invalid daily rate '{input}': must be a non-negative whole number")]
    InvalidDailyRate {
        /// The raw text supplied by the operator
        input: String,
    },

    /// Plate already registered to another vehicle
    #[error("A vehicle with plate '{plate}' already exists")]
    DuplicatePlate {
        /// The conflicting plate
        plate: String,
    },

    /// No vehicle with the given id
    #[error("Vehicle {id} not found")]
    VehicleNotFound {
        /// Requested vehicle id
        id: i64,
    },

    /// Vehicle exists but is currently rented out
    #[error("Vehicle {id} ({plate}) is not available for rental")]
    VehicleNotAvailable {
        /// Vehicle id
        id: i64,
        /// Vehicle plate
        plate: String,
    },

    /// No transaction with the given id
    #[error("Transaction {id} not found")]
    TransactionNotFound {
        /// Requested transaction id
        id: i64,
    },

    /// Transaction exists but has already been completed
    #[error("Transaction {id} is not active")]
    TransactionNotActive {
        /// Transaction id
        id: i64,
    },

    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Details of the failure
        message: String,
    },

    /// Underlying store failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O failure outside the store
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns the class of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } | Self::InvalidDailyRate { .. } => ErrorKind::Validation,
            Self::DuplicatePlate { .. } => ErrorKind::Uniqueness,
            Self::VehicleNotFound { .. }
            | Self::VehicleNotAvailable { .. }
            | Self::TransactionNotFound { .. }
            | Self::TransactionNotActive { .. } => ErrorKind::State,
            Self::Config { .. } | Self::Database(_) | Self::Io(_) => ErrorKind::Internal,
        }
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
