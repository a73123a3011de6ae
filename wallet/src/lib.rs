//! Wallet-facing pieces of the dashboard.
//!
//! - [`WalletProvider`] and [`ChainProvider`]: the seams to the connected
//!   wallet and the host chain.
//! - [`SignatureParams`]: the per-session message a user signs before a
//!   score is revealed.
//! - [`DecryptFlow`]: the `Idle → Decrypting → Revealed` toggle.
//!
//! The signature gates the reveal as a user interaction only. It is never
//! inspected or verified, and the score is recoverable without it.

pub mod decrypt;
pub mod error;
pub mod provider;
pub mod session;

pub use decrypt::{decrypt_with_signature, DecryptFlow, DecryptState, Toggle, DEFAULT_DECRYPT_DELAY};
pub use error::WalletError;
pub use provider::{ChainProvider, WalletProvider};
pub use session::{SignatureParams, DEFAULT_DURATION_DAYS};
