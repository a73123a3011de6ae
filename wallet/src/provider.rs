//! Seams to the connected wallet and the host chain.

use anticheat_types::{ChainId, WalletAddress};

use crate::WalletError;

/// The connected wallet account.
#[allow(async_fn_in_trait)]
pub trait WalletProvider {
    /// The connected account, if any.
    fn address(&self) -> Option<WalletAddress>;

    fn is_connected(&self) -> bool;

    /// Ask the user to sign `message`. Returns the opaque signature.
    async fn sign_message(&self, message: &str) -> Result<String, WalletError>;
}

/// Host chain metadata, read once at start-up.
#[allow(async_fn_in_trait)]
pub trait ChainProvider {
    async fn chain_id(&self) -> Result<ChainId, WalletError>;
}

impl<T: WalletProvider> WalletProvider for std::sync::Arc<T> {
    fn address(&self) -> Option<WalletAddress> {
        (**self).address()
    }

    fn is_connected(&self) -> bool {
        (**self).is_connected()
    }

    async fn sign_message(&self, message: &str) -> Result<String, WalletError> {
        (**self).sign_message(message).await
    }
}
