//! The cheat detection record.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{RecordStatus, Timestamp, WalletAddress};

/// Opaque record identifier: `"{epoch_millis}-{suffix}"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Build an id from a creation time and a random suffix.
    pub fn generate(now_millis: u64, suffix: &str) -> Self {
        Self(format!("{now_millis}-{suffix}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// One reported detection event, as held in memory by the dashboard.
///
/// The score is only ever held in encoded form; decoding it is an explicit
/// user action.
#[derive(Clone, Debug, PartialEq)]
pub struct CheatRecord {
    pub id: RecordId,
    /// Codec token carrying a score in `[0, 100]`.
    pub encrypted_score: String,
    /// Set at creation, immutable thereafter.
    pub timestamp: Timestamp,
    /// The submitter. Only this address may advance `status`.
    pub player_address: WalletAddress,
    pub game_id: String,
    pub status: RecordStatus,
    /// Free text, usually one of [`crate::DETECTION_TYPES`].
    pub detection_type: String,
}

impl CheatRecord {
    /// Whether `viewer` submitted this record.
    pub fn is_owned_by(&self, viewer: &WalletAddress) -> bool {
        self.player_address.matches(viewer)
    }
}
