//! Score codec and session key helpers.
//!
//! - **Codec**: a reversible, tagged text encoding of a numeric score
//!   (`FHE-` + base64 of the decimal form). It is labelled as homomorphic
//!   encryption in the dashboard but provides no confidentiality: anyone can
//!   decode a token without a secret.
//! - **Keys**: the throwaway public key embedded in decryption signature
//!   requests.

pub mod codec;
pub mod error;
pub mod keys;

pub use codec::{decode, encode, preview, transform, ScoreOp, TOKEN_PREFIX};
pub use error::CodecError;
pub use keys::generate_public_key;
