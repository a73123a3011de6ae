//! Display models for list rows and the detail view.

use anticheat_types::{CheatRecord, RecordId, RecordStatus, WalletAddress};
use anticheat_utils::{format_date, format_date_time, short_address};

use crate::{available_action, RecordAction};

/// Characters of the encoded score shown in the detail view.
pub const DETAIL_PREVIEW_CHARS: usize = 100;

/// One line of the record list.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordRow {
    pub id: RecordId,
    pub game_id: String,
    pub detection_type: String,
    pub player: String,
    pub date: String,
    pub status: RecordStatus,
    pub action: Option<RecordAction>,
}

impl RecordRow {
    pub fn new(record: &CheatRecord, viewer: Option<&WalletAddress>) -> Self {
        Self {
            id: record.id.clone(),
            game_id: record.game_id.clone(),
            detection_type: record.detection_type.clone(),
            player: short_address(&record.player_address),
            date: format_date(record.timestamp),
            status: record.status,
            action: available_action(record, viewer),
        }
    }
}

/// Contents of the detail modal.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordDetail {
    pub game_id: String,
    pub player: String,
    pub detection_type: String,
    pub date_time: String,
    pub status: RecordStatus,
    pub score_preview: String,
    /// The decoded score, once the viewer has gone through the decrypt flow.
    pub revealed_score: Option<f64>,
}

impl RecordDetail {
    pub fn new(record: &CheatRecord, revealed_score: Option<f64>) -> Self {
        Self {
            game_id: record.game_id.clone(),
            player: short_address(&record.player_address),
            detection_type: record.detection_type.clone(),
            date_time: format_date_time(record.timestamp),
            status: record.status,
            score_preview: anticheat_crypto::preview(&record.encrypted_score, DETAIL_PREVIEW_CHARS),
            revealed_score,
        }
    }
}
