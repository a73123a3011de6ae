//! Per-session signature parameters.

use anticheat_types::{ChainId, Timestamp};

/// Default validity window advertised in the signature message.
pub const DEFAULT_DURATION_DAYS: u32 = 30;

/// Everything embedded in the decryption signature message.
///
/// Built once when the dashboard starts; every decrypt in the session signs
/// the same message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureParams {
    pub public_key: String,
    pub contract_address: String,
    pub chain_id: ChainId,
    pub start_timestamp: Timestamp,
    pub duration_days: u32,
}

impl SignatureParams {
    /// Parameters with a freshly generated session public key.
    pub fn generate(
        contract_address: impl Into<String>,
        chain_id: ChainId,
        start_timestamp: Timestamp,
        duration_days: u32,
    ) -> Self {
        Self {
            public_key: anticheat_crypto::generate_public_key(),
            contract_address: contract_address.into(),
            chain_id,
            start_timestamp,
            duration_days,
        }
    }

    /// The exact text presented to the wallet for signing.
    pub fn message(&self) -> String {
        format!(
            "publickey:{}\ncontractAddresses:{}\ncontractsChainId:{}\nstartTimestamp:{}\ndurationDays:{}",
            self.public_key,
            self.contract_address,
            self.chain_id,
            self.start_timestamp.as_secs(),
            self.duration_days
        )
    }
}
