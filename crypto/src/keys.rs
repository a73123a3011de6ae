//! Session key material for decryption requests.

use rand::RngCore;

/// Number of random bytes behind a generated public key (2000 hex digits).
pub const PUBLIC_KEY_BYTES: usize = 1000;

/// Generate the `0x`-prefixed public key embedded in signature requests.
///
/// The key is random and never used for any cryptographic operation; it only
/// makes each session's signature message unique.
pub fn generate_public_key() -> String {
    let mut bytes = vec![0u8; PUBLIC_KEY_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    format!("0x{}", hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_key_shape() {
        let key = generate_public_key();
        assert!(key.starts_with("0x"));
        assert_eq!(key.len(), 2 + 2 * PUBLIC_KEY_BYTES);
        assert!(key[2..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn keys_differ_between_sessions() {
        assert_ne!(generate_public_key(), generate_public_key());
    }
}
