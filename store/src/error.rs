use anticheat_types::{ErrorKind, RecordStatus};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("key not found: {0}")]
    NotFound(String),

    #[error("contract store is not available")]
    Unavailable,

    #[error("transaction rejected by user")]
    Rejected,

    #[error("status cannot move from {from} to {to}")]
    InvalidTransition {
        from: RecordStatus,
        to: RecordStatus,
    },

    #[error("index key {key} kept changing; gave up after {attempts} attempts")]
    Conflict { key: String, attempts: u32 },

    #[error("score codec error: {0}")]
    Codec(#[from] anticheat_crypto::CodecError),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("contract backend error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Unavailable => ErrorKind::Unavailable,
            Self::Rejected => ErrorKind::UserRejected,
            Self::Codec(_) | Self::Serialization(_) => ErrorKind::ParseFailure,
            Self::InvalidTransition { .. } | Self::Conflict { .. } | Self::Backend(_) => {
                ErrorKind::Unknown
            }
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}
