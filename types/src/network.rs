//! Chain identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Numeric identifier of the chain the contract lives on.
///
/// Read once at start-up from the host provider, which reports it as a hex
/// string such as `"0xaa36a7"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(u64);

impl ChainId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Parse a `0x`-prefixed hex string as returned by `eth_chainId`.
    pub fn from_hex(s: &str) -> Result<Self, ParseError> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or_else(|| ParseError::ChainId(s.to_string()))?;
        u64::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|_| ParseError::ChainId(s.to_string()))
    }
}

impl FromStr for ChainId {
    type Err = ParseError;

    /// Accepts either hex (`0x…`) or decimal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with("0x") || s.starts_with("0X") {
            return Self::from_hex(s);
        }
        s.parse::<u64>()
            .map(Self)
            .map_err(|_| ParseError::ChainId(s.to_string()))
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_and_decimal() {
        assert_eq!(ChainId::from_hex("0xaa36a7").unwrap(), ChainId::new(11_155_111));
        assert_eq!("0x1".parse::<ChainId>().unwrap(), ChainId::new(1));
        assert_eq!("137".parse::<ChainId>().unwrap(), ChainId::new(137));
    }

    #[test]
    fn rejects_garbage() {
        assert!(ChainId::from_hex("aa36a7").is_err());
        assert!("0xzz".parse::<ChainId>().is_err());
        assert!("".parse::<ChainId>().is_err());
    }
}
