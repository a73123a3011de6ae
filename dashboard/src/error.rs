use anticheat_types::{ErrorKind, RecordId};
use thiserror::Error;

use crate::{FormError, RecordAction};

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("store error: {0}")]
    Store(#[from] anticheat_store::StoreError),

    #[error("wallet error: {0}")]
    Wallet(#[from] anticheat_wallet::WalletError),

    #[error("invalid form: {0}")]
    Form(#[from] FormError),

    #[error("no wallet connected")]
    NotConnected,

    #[error("record {0} is not loaded")]
    UnknownRecord(RecordId),

    #[error("{action} is not available on record {id} for this viewer")]
    ActionUnavailable { id: RecordId, action: RecordAction },

    #[error("no record selected")]
    NothingSelected,

    #[error("config error: {0}")]
    Config(String),
}

impl DashboardError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Store(e) => e.kind(),
            Self::Wallet(e) => e.kind(),
            Self::NotConnected => ErrorKind::NotConnected,
            Self::UnknownRecord(_) | Self::NothingSelected => ErrorKind::NotFound,
            Self::Form(_) | Self::ActionUnavailable { .. } | Self::Config(_) => ErrorKind::Unknown,
        }
    }
}
