//! The decrypt-with-signature flow.
//!
//! ```text
//! Idle ──toggle──▶ Decrypting ──complete──▶ Revealed ──toggle──▶ Idle
//!                      │
//!                      └──fail──▶ Idle
//! ```
//!
//! [`DecryptFlow`] holds the state transitions; [`decrypt_with_signature`]
//! performs the wallet prompt, the artificial delay and the decode.

use std::time::Duration;

use tracing::{debug, error};

use crate::{SignatureParams, WalletError, WalletProvider};

/// Artificial "computation" delay between the signature and the reveal.
pub const DEFAULT_DECRYPT_DELAY: Duration = Duration::from_millis(1500);

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DecryptState {
    #[default]
    Idle,
    Decrypting,
    Revealed(f64),
}

/// Outcome of [`DecryptFlow::toggle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    /// Entered `Decrypting`; the caller should run the signature round.
    Started,
    /// Left `Revealed` for `Idle` without prompting.
    Hidden,
    /// A decrypt is already in flight; nothing changed.
    Busy,
}

#[derive(Clone, Debug, Default)]
pub struct DecryptFlow {
    state: DecryptState,
}

impl DecryptFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DecryptState {
        self.state
    }

    /// React to the decrypt button.
    ///
    /// Entering `Decrypting` needs a connected wallet; without one the flow
    /// stays `Idle` and returns `NotConnected`.
    pub fn toggle(&mut self, connected: bool) -> Result<Toggle, WalletError> {
        match self.state {
            DecryptState::Revealed(_) => {
                self.state = DecryptState::Idle;
                Ok(Toggle::Hidden)
            }
            DecryptState::Decrypting => Ok(Toggle::Busy),
            DecryptState::Idle if !connected => Err(WalletError::NotConnected),
            DecryptState::Idle => {
                self.state = DecryptState::Decrypting;
                Ok(Toggle::Started)
            }
        }
    }

    /// `Decrypting → Revealed(value)`. Ignored in any other state.
    pub fn complete(&mut self, value: f64) {
        if self.state == DecryptState::Decrypting {
            self.state = DecryptState::Revealed(value);
        }
    }

    /// Back to `Idle` after a failed round.
    pub fn fail(&mut self) {
        self.state = DecryptState::Idle;
    }

    /// Forget any revealed value (detail view closed).
    pub fn reset(&mut self) {
        self.state = DecryptState::Idle;
    }

    /// Toggle and, if that started a round, run it to completion.
    ///
    /// Returns the revealed value, or `None` when the toggle hid a value or
    /// a round was already running. Failures leave the flow `Idle`.
    pub async fn run<W: WalletProvider>(
        &mut self,
        wallet: &W,
        params: &SignatureParams,
        token: &str,
        delay: Duration,
    ) -> Result<Option<f64>, WalletError> {
        match self.toggle(wallet.is_connected())? {
            Toggle::Hidden | Toggle::Busy => Ok(None),
            Toggle::Started => match decrypt_with_signature(wallet, params, token, delay).await {
                Ok(value) => {
                    self.complete(value);
                    Ok(Some(value))
                }
                Err(e) => {
                    error!(error = %e, "decryption failed");
                    self.fail();
                    Err(e)
                }
            },
        }
    }
}

/// Prompt for a signature over the session message, wait `delay`, decode.
///
/// The signature is discarded; it is not bound to `token` in any way.
pub async fn decrypt_with_signature<W: WalletProvider>(
    wallet: &W,
    params: &SignatureParams,
    token: &str,
    delay: Duration,
) -> Result<f64, WalletError> {
    if !wallet.is_connected() {
        return Err(WalletError::NotConnected);
    }
    let _signature = wallet.sign_message(&params.message()).await?;
    debug!(delay_ms = delay.as_millis() as u64, "signature accepted, revealing score");
    tokio::time::sleep(delay).await;
    Ok(anticheat_crypto::decode(token)?)
}
