//! Error taxonomy shared across crates.

use thiserror::Error;

/// Coarse classification every crate-level error maps into.
///
/// The dashboard uses it to pick banner wording and to decide whether a
/// failure is surfaced at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No wallet is connected.
    NotConnected,
    /// The contract store reported itself unavailable.
    Unavailable,
    /// A record or the index is missing.
    NotFound,
    /// Stored bytes were not valid JSON for the expected shape.
    ParseFailure,
    /// The user declined a signature or transaction.
    UserRejected,
    /// Anything else.
    Unknown,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotConnected => "not_connected",
            Self::Unavailable => "unavailable",
            Self::NotFound => "not_found",
            Self::ParseFailure => "parse_failure",
            Self::UserRejected => "user_rejected",
            Self::Unknown => "unknown",
        }
    }
}

/// Failure to parse one of the textual types in this crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown record status: {0}")]
    Status(String),

    #[error("unknown status filter: {0}")]
    Filter(String),

    #[error("invalid chain id: {0}")]
    ChainId(String),
}
