//! Nullable infrastructure for deterministic testing.
//!
//! Every external collaborator of the dashboard (contract store, wallet,
//! chain metadata, clock, randomness) sits behind a trait. This crate
//! provides test-friendly implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically
//! - Never touch the network
//!
//! Usage: swap real implementations for nullables in tests.

pub mod clock;
pub mod contract;
pub mod random;
pub mod wallet;

pub use clock::NullClock;
pub use contract::NullContract;
pub use random::SequentialSuffix;
pub use wallet::{NullChain, NullWallet, SignBehavior};
