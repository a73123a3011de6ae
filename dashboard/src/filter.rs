//! Search and status filtering of the record list.

use anticheat_types::{CheatRecord, StatusFilter};

/// The current search box text and status selector.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordQuery {
    pub search: String,
    pub status: StatusFilter,
}

impl RecordQuery {
    /// Case-insensitive substring match on game id, player address or
    /// detection type, AND a status match.
    pub fn matches(&self, record: &CheatRecord) -> bool {
        let needle = self.search.to_lowercase();
        let text_match = record.game_id.to_lowercase().contains(&needle)
            || record.player_address.to_lowercase().contains(&needle)
            || record.detection_type.to_lowercase().contains(&needle);
        text_match && self.status.admits(record.status)
    }

    /// The records matching this query, in their existing order.
    pub fn apply<'a>(&self, records: &'a [CheatRecord]) -> Vec<&'a CheatRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}
