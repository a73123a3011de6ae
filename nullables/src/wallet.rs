//! Nullable wallet and chain: scripted responses, no prompts.

use anticheat_types::{ChainId, WalletAddress};
use anticheat_wallet::{ChainProvider, WalletError, WalletProvider};
use std::sync::Mutex;

/// How [`NullWallet`] answers signature requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignBehavior {
    Approve,
    /// The user declines the prompt.
    Reject,
    /// The provider fails with this message.
    Fail(String),
}

/// A wallet whose connection and signing behaviour are set by the test.
pub struct NullWallet {
    address: Mutex<Option<WalletAddress>>,
    behavior: Mutex<SignBehavior>,
    signed: Mutex<Vec<String>>,
}

impl NullWallet {
    /// A wallet connected as `address` that approves every request.
    pub fn connected(address: impl Into<WalletAddress>) -> Self {
        Self {
            address: Mutex::new(Some(address.into())),
            behavior: Mutex::new(SignBehavior::Approve),
            signed: Mutex::new(Vec::new()),
        }
    }

    pub fn disconnected() -> Self {
        Self {
            address: Mutex::new(None),
            behavior: Mutex::new(SignBehavior::Approve),
            signed: Mutex::new(Vec::new()),
        }
    }

    pub fn connect(&self, address: impl Into<WalletAddress>) {
        *self.address.lock().unwrap() = Some(address.into());
    }

    pub fn disconnect(&self) {
        *self.address.lock().unwrap() = None;
    }

    pub fn set_behavior(&self, behavior: SignBehavior) {
        *self.behavior.lock().unwrap() = behavior;
    }

    /// Messages presented for signing, in order (approved or not).
    pub fn signed_messages(&self) -> Vec<String> {
        self.signed.lock().unwrap().clone()
    }
}

impl WalletProvider for NullWallet {
    fn address(&self) -> Option<WalletAddress> {
        self.address.lock().unwrap().clone()
    }

    fn is_connected(&self) -> bool {
        self.address.lock().unwrap().is_some()
    }

    async fn sign_message(&self, message: &str) -> Result<String, WalletError> {
        self.signed.lock().unwrap().push(message.to_string());
        let behavior = self.behavior.lock().unwrap().clone();
        match behavior {
            SignBehavior::Approve => Ok(format!("0xsig{:08x}", message.len())),
            SignBehavior::Reject => Err(WalletError::UserRejected),
            SignBehavior::Fail(msg) => Err(WalletError::from_provider_message(msg)),
        }
    }
}

/// A chain provider reporting a fixed id.
pub struct NullChain {
    id: Option<ChainId>,
}

impl NullChain {
    pub fn new(id: u64) -> Self {
        Self {
            id: Some(ChainId::new(id)),
        }
    }

    /// A host environment without a chain provider.
    pub fn absent() -> Self {
        Self { id: None }
    }
}

impl ChainProvider for NullChain {
    async fn chain_id(&self) -> Result<ChainId, WalletError> {
        self.id
            .ok_or_else(|| WalletError::Chain("no chain provider in host environment".into()))
    }
}
