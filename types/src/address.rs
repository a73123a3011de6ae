//! Wallet address of the account that submitted a record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An account address as reported by the wallet provider (usually `0x` + 40 hex digits).
///
/// The dashboard never validates addresses it reads back from the store, so
/// construction accepts any string. Comparisons between a viewer and a record
/// owner go through [`WalletAddress::matches`], which ignores ASCII case.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletAddress(String);

impl WalletAddress {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive equality, used for ownership checks.
    pub fn matches(&self, other: &WalletAddress) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }

    /// Lower-cased copy, used for substring search.
    pub fn to_lowercase(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for WalletAddress {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for WalletAddress {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
