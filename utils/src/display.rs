//! Display helpers for record rows and detail views.

use anticheat_types::WalletAddress;

/// Abbreviate an address as `0x1234...abcd`: the first six characters and
/// everything from position 38 on (the last four of a 42-character address).
///
/// Addresses too short to abbreviate are returned unchanged.
pub fn short_address(address: &WalletAddress) -> String {
    let chars: Vec<char> = address.as_str().chars().collect();
    if chars.len() <= 38 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[38..].iter().collect();
    format!("{head}...{tail}")
}
