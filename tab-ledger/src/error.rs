//! Error types for the ledger

use thiserror::Error;

/// Result type for ledger operations
pub type Result<T> = std::result::Result<T, Error>;

/// Ledger errors
#[derive(Error, Debug)]
pub enum Error {
    /// Self-debt posting attempted
    #[error("Invalid operation: {0} cannot owe itself")]
    SelfDebt(String),

    /// Participant not registered in the directory
    #[error("Participant not found: {0}")]
    UnknownParticipant(String),

    /// Participant name already registered
    #[error("Participant name already taken: {0}")]
    NameTaken(String),

    /// Invariant violation (symmetry, conservation, etc.)
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Other(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Other(msg.to_string())
    }
}
