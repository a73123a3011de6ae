//! Which status action a viewer may take on a record.
//!
//! This is a display-layer gate: it decides which button is shown, and the
//! controller re-checks it before calling the store. Nothing on the store
//! side enforces ownership.

use std::fmt;

use anticheat_types::{CheatRecord, RecordStatus, WalletAddress};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordAction {
    /// `normal → suspicious`
    Flag,
    /// `suspicious → confirmed`
    Confirm,
}

impl fmt::Display for RecordAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Flag => "flag",
            Self::Confirm => "confirm",
        })
    }
}

/// The action offered to `viewer` on `record`, if any.
///
/// Only the submitter sees an action, and only while one is possible.
pub fn available_action(record: &CheatRecord, viewer: Option<&WalletAddress>) -> Option<RecordAction> {
    let viewer = viewer?;
    if !record.is_owned_by(viewer) {
        return None;
    }
    match record.status {
        RecordStatus::Normal => Some(RecordAction::Flag),
        RecordStatus::Suspicious => Some(RecordAction::Confirm),
        RecordStatus::Confirmed => None,
    }
}
