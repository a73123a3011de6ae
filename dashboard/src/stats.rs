//! Aggregate statistics and the detection type bar chart.
//!
//! Both are recomputed from the record list on every call; nothing is cached.

use anticheat_types::{CheatRecord, RecordStatus, DETECTION_TYPES};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: usize,
    pub normal: usize,
    pub suspicious: usize,
    pub confirmed: usize,
}

impl StatusCounts {
    pub fn from_records(records: &[CheatRecord]) -> Self {
        let count = |status| records.iter().filter(|r| r.status == status).count();
        Self {
            total: records.len(),
            normal: count(RecordStatus::Normal),
            suspicious: count(RecordStatus::Suspicious),
            confirmed: count(RecordStatus::Confirmed),
        }
    }
}

/// One bar: a detection type and its share of the tallest bar.
#[derive(Clone, Debug, PartialEq)]
pub struct BarRow {
    pub label: &'static str,
    pub count: usize,
    /// `count / max(max_count, 1) * 100`.
    pub width_percent: f64,
}

/// Counts per catalogued detection type, in catalogue order.
///
/// Records with a free-text type outside the catalogue are not charted.
#[derive(Clone, Debug, PartialEq)]
pub struct BarChart {
    pub rows: Vec<BarRow>,
}

impl BarChart {
    pub fn from_records(records: &[CheatRecord]) -> Self {
        let counts: Vec<(&'static str, usize)> = DETECTION_TYPES
            .iter()
            .map(|&label| {
                let n = records.iter().filter(|r| r.detection_type == label).count();
                (label, n)
            })
            .collect();
        let max = counts.iter().map(|(_, n)| *n).max().unwrap_or(0).max(1);

        let rows = counts
            .into_iter()
            .map(|(label, count)| BarRow {
                label,
                count,
                width_percent: count as f64 / max as f64 * 100.0,
            })
            .collect();
        Self { rows }
    }

    pub fn row(&self, label: &str) -> Option<&BarRow> {
        self.rows.iter().find(|r| r.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anticheat_types::{RecordId, Timestamp, WalletAddress};

    fn record(detection_type: &str, status: RecordStatus) -> CheatRecord {
        CheatRecord {
            id: RecordId::new("id"),
            encrypted_score: "FHE-NDI=".into(),
            timestamp: Timestamp::new(1),
            player_address: WalletAddress::new("0xabc"),
            game_id: "G".into(),
            status,
            detection_type: detection_type.into(),
        }
    }

    #[test]
    fn counts_by_status() {
        let records = vec![
            record("Aimbot", RecordStatus::Normal),
            record("Aimbot", RecordStatus::Normal),
            record("Wallhack", RecordStatus::Suspicious),
            record("Speed Hack", RecordStatus::Confirmed),
        ];
        let counts = StatusCounts::from_records(&records);
        assert_eq!(
            counts,
            StatusCounts {
                total: 4,
                normal: 2,
                suspicious: 1,
                confirmed: 1
            }
        );
    }

    #[test]
    fn bars_are_relative_to_the_tallest() {
        let records = vec![
            record("Aimbot", RecordStatus::Normal),
            record("Aimbot", RecordStatus::Normal),
            record("Aimbot", RecordStatus::Normal),
            record("Aimbot", RecordStatus::Normal),
            record("Wallhack", RecordStatus::Normal),
            record("Homebrew", RecordStatus::Normal),
        ];
        let chart = BarChart::from_records(&records);
        assert_eq!(chart.rows.len(), DETECTION_TYPES.len());
        assert_eq!(chart.row("Aimbot").unwrap().width_percent, 100.0);
        assert_eq!(chart.row("Wallhack").unwrap().width_percent, 25.0);
        assert_eq!(chart.row("Speed Hack").unwrap().count, 0);
        assert!(chart.row("Homebrew").is_none());
    }

    #[test]
    fn empty_chart_has_zero_width_bars() {
        let chart = BarChart::from_records(&[]);
        assert!(chart.rows.iter().all(|r| r.count == 0 && r.width_percent == 0.0));
    }
}
