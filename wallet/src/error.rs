use anticheat_types::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("no wallet connected")]
    NotConnected,

    #[error("request rejected by user")]
    UserRejected,

    #[error("signing error: {0}")]
    Signing(String),

    #[error("chain provider error: {0}")]
    Chain(String),

    #[error("score codec error: {0}")]
    Codec(#[from] anticheat_crypto::CodecError),
}

impl WalletError {
    /// Classify a raw provider error message.
    ///
    /// Wallet providers report a declined prompt as an error whose message
    /// contains "user rejected"; everything else is a signing failure.
    pub fn from_provider_message(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.to_ascii_lowercase().contains("user rejected") {
            Self::UserRejected
        } else {
            Self::Signing(message)
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotConnected => ErrorKind::NotConnected,
            Self::UserRejected => ErrorKind::UserRejected,
            Self::Codec(_) => ErrorKind::ParseFailure,
            Self::Signing(_) | Self::Chain(_) => ErrorKind::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_messages_are_classified() {
        assert!(matches!(
            WalletError::from_provider_message("MetaMask: User rejected the request."),
            WalletError::UserRejected
        ));
        assert!(matches!(
            WalletError::from_provider_message("user rejected transaction"),
            WalletError::UserRejected
        ));
        assert!(matches!(
            WalletError::from_provider_message("nonce too low"),
            WalletError::Signing(_)
        ));
    }
}
