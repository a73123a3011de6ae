//! Explicit view state and the reducer that evolves it.

use anticheat_types::{CheatRecord, RecordId, StatusFilter, WalletAddress};
use anticheat_wallet::DecryptState;

use crate::{Banner, BarChart, NewRecordForm, RecordDetail, RecordQuery, RecordRow, StatusCounts};

/// Everything the dashboard renders from.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    /// True until the first listing attempt finishes.
    pub loading: bool,
    pub refreshing: bool,
    /// All loaded records, newest first.
    pub records: Vec<CheatRecord>,
    pub query: RecordQuery,
    pub show_create: bool,
    pub creating: bool,
    pub form: NewRecordForm,
    /// Record shown in the detail modal.
    pub selected: Option<CheatRecord>,
    pub decrypt: DecryptState,
    pub banner: Option<Banner>,
    /// Blocking user-facing alert (validation, missing wallet).
    pub alert: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            loading: true,
            refreshing: false,
            records: Vec::new(),
            query: RecordQuery::default(),
            show_create: false,
            creating: false,
            form: NewRecordForm::default(),
            selected: None,
            decrypt: DecryptState::Idle,
            banner: None,
            alert: None,
        }
    }
}

/// Everything that can happen to the view.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewEvent {
    SearchChanged(String),
    FilterChanged(StatusFilter),
    OpenCreate,
    CloseCreate,
    GameIdEdited(String),
    DetectionTypeEdited(String),
    ScoreEdited(f64),
    SubmitStarted,
    SubmitFinished,
    RecordSelected(CheatRecord),
    DetailClosed,
    DecryptChanged(DecryptState),
    RefreshStarted,
    RecordsLoaded(Vec<CheatRecord>),
    RefreshFinished,
    BannerShown(Banner),
    Alert(String),
    AlertDismissed,
    /// Time passed; expire banners whose deadline is behind `now_millis`.
    Tick { now_millis: u64 },
}

/// Apply `event` to `state`.
pub fn reduce(state: ViewState, event: ViewEvent) -> ViewState {
    match event {
        ViewEvent::SearchChanged(search) => ViewState {
            query: RecordQuery { search, ..state.query },
            ..state
        },
        ViewEvent::FilterChanged(status) => ViewState {
            query: RecordQuery { status, ..state.query },
            ..state
        },
        ViewEvent::OpenCreate => ViewState {
            show_create: true,
            ..state
        },
        ViewEvent::CloseCreate => ViewState {
            show_create: false,
            ..state
        },
        ViewEvent::GameIdEdited(game_id) => ViewState {
            form: NewRecordForm { game_id, ..state.form },
            ..state
        },
        ViewEvent::DetectionTypeEdited(detection_type) => ViewState {
            form: NewRecordForm { detection_type, ..state.form },
            ..state
        },
        ViewEvent::ScoreEdited(cheat_score) => ViewState {
            form: NewRecordForm { cheat_score, ..state.form },
            ..state
        },
        ViewEvent::SubmitStarted => ViewState {
            creating: true,
            ..state
        },
        ViewEvent::SubmitFinished => ViewState {
            creating: false,
            ..state
        },
        ViewEvent::RecordSelected(record) => ViewState {
            selected: Some(record),
            decrypt: DecryptState::Idle,
            ..state
        },
        ViewEvent::DetailClosed => ViewState {
            selected: None,
            decrypt: DecryptState::Idle,
            ..state
        },
        ViewEvent::DecryptChanged(decrypt) => ViewState { decrypt, ..state },
        ViewEvent::RefreshStarted => ViewState {
            refreshing: true,
            ..state
        },
        ViewEvent::RecordsLoaded(records) => {
            // Keep the detail view in step with the reloaded record.
            let selected = state
                .selected
                .map(|sel| records.iter().find(|r| r.id == sel.id).cloned().unwrap_or(sel));
            ViewState {
                records,
                selected,
                ..state
            }
        }
        ViewEvent::RefreshFinished => ViewState {
            refreshing: false,
            loading: false,
            ..state
        },
        ViewEvent::BannerShown(banner) => ViewState {
            banner: Some(banner),
            ..state
        },
        ViewEvent::Alert(message) => ViewState {
            alert: Some(message),
            ..state
        },
        ViewEvent::AlertDismissed => ViewState {
            alert: None,
            ..state
        },
        ViewEvent::Tick { now_millis } => {
            let expired = state
                .banner
                .as_ref()
                .filter(|b| b.is_expired(now_millis))
                .map(|b| b.closes_create_form);
            match expired {
                None => state,
                Some(false) => ViewState {
                    banner: None,
                    ..state
                },
                Some(true) => ViewState {
                    banner: None,
                    show_create: false,
                    form: NewRecordForm::default(),
                    ..state
                },
            }
        }
    }
}

impl ViewState {
    /// Records passing the current search and status filter.
    pub fn visible_records(&self) -> Vec<&CheatRecord> {
        self.query.apply(&self.records)
    }

    /// List rows for the visible records as seen by `viewer`.
    pub fn rows(&self, viewer: Option<&WalletAddress>) -> Vec<RecordRow> {
        self.visible_records()
            .into_iter()
            .map(|r| RecordRow::new(r, viewer))
            .collect()
    }

    pub fn counts(&self) -> StatusCounts {
        StatusCounts::from_records(&self.records)
    }

    pub fn bar_chart(&self) -> BarChart {
        BarChart::from_records(&self.records)
    }

    pub fn detail(&self) -> Option<RecordDetail> {
        let revealed = match self.decrypt {
            DecryptState::Revealed(value) => Some(value),
            _ => None,
        };
        self.selected.as_ref().map(|r| RecordDetail::new(r, revealed))
    }

    pub fn find(&self, id: &RecordId) -> Option<&CheatRecord> {
        self.records.iter().find(|r| &r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BannerKind;
    use anticheat_types::{RecordStatus, Timestamp};

    fn record(id: &str, ts: u64, status: RecordStatus) -> CheatRecord {
        CheatRecord {
            id: RecordId::new(id),
            encrypted_score: "FHE-NDI=".into(),
            timestamp: Timestamp::new(ts),
            player_address: WalletAddress::new("0xabc"),
            game_id: format!("game-{id}"),
            status,
            detection_type: "Aimbot".into(),
        }
    }

    fn apply(state: ViewState, events: Vec<ViewEvent>) -> ViewState {
        events.into_iter().fold(state, reduce)
    }

    #[test]
    fn starts_loading_with_default_form() {
        let state = ViewState::default();
        assert!(state.loading);
        assert_eq!(state.form, NewRecordForm::default());
        assert_eq!(state.query.status, StatusFilter::All);
    }

    #[test]
    fn form_edits_accumulate() {
        let state = apply(
            ViewState::default(),
            vec![
                ViewEvent::OpenCreate,
                ViewEvent::GameIdEdited("G1".into()),
                ViewEvent::ScoreEdited(42.0),
                ViewEvent::DetectionTypeEdited("Wallhack".into()),
            ],
        );
        assert!(state.show_create);
        assert_eq!(state.form.game_id, "G1");
        assert_eq!(state.form.cheat_score, 42.0);
        assert_eq!(state.form.detection_type, "Wallhack");
    }

    #[test]
    fn search_and_filter_drive_visible_records() {
        let state = apply(
            ViewState::default(),
            vec![
                ViewEvent::RecordsLoaded(vec![
                    record("a", 3, RecordStatus::Normal),
                    record("b", 2, RecordStatus::Suspicious),
                ]),
                ViewEvent::FilterChanged(StatusFilter::Only(RecordStatus::Suspicious)),
            ],
        );
        let ids: Vec<_> = state.visible_records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b"]);

        let state = reduce(state, ViewEvent::SearchChanged("GAME-A".into()));
        assert!(state.visible_records().is_empty());
        assert_eq!(state.counts().total, 2);
    }

    #[test]
    fn refresh_finish_clears_loading() {
        let state = apply(
            ViewState::default(),
            vec![ViewEvent::RefreshStarted, ViewEvent::RefreshFinished],
        );
        assert!(!state.loading);
        assert!(!state.refreshing);
    }

    #[test]
    fn closing_detail_forgets_revealed_score() {
        let state = apply(
            ViewState::default(),
            vec![
                ViewEvent::RecordSelected(record("a", 1, RecordStatus::Normal)),
                ViewEvent::DecryptChanged(DecryptState::Revealed(42.0)),
            ],
        );
        assert_eq!(state.detail().unwrap().revealed_score, Some(42.0));

        let state = reduce(state, ViewEvent::DetailClosed);
        assert!(state.detail().is_none());
        assert_eq!(state.decrypt, DecryptState::Idle);
    }

    #[test]
    fn reload_refreshes_selected_record() {
        let state = apply(
            ViewState::default(),
            vec![
                ViewEvent::RecordSelected(record("a", 1, RecordStatus::Normal)),
                ViewEvent::RecordsLoaded(vec![record("a", 1, RecordStatus::Suspicious)]),
            ],
        );
        assert_eq!(state.selected.unwrap().status, RecordStatus::Suspicious);
    }

    #[test]
    fn tick_expires_banner_and_resets_form_when_asked() {
        let state = apply(
            ViewState::default(),
            vec![
                ViewEvent::OpenCreate,
                ViewEvent::GameIdEdited("G1".into()),
                ViewEvent::BannerShown(Banner::success("done", 2000).closing_create_form()),
                ViewEvent::Tick { now_millis: 1999 },
            ],
        );
        assert_eq!(state.banner.as_ref().map(|b| b.kind), Some(BannerKind::Success));
        assert!(state.show_create);

        let state = reduce(state, ViewEvent::Tick { now_millis: 2000 });
        assert!(state.banner.is_none());
        assert!(!state.show_create);
        assert_eq!(state.form, NewRecordForm::default());
    }

    #[test]
    fn tick_keeps_form_for_plain_banners() {
        let state = apply(
            ViewState::default(),
            vec![
                ViewEvent::OpenCreate,
                ViewEvent::GameIdEdited("G1".into()),
                ViewEvent::BannerShown(Banner::error("nope", 10)),
                ViewEvent::Tick { now_millis: 10 },
            ],
        );
        assert!(state.banner.is_none());
        assert!(state.show_create);
        assert_eq!(state.form.game_id, "G1");
    }

    #[test]
    fn alerts_are_dismissable() {
        let state = reduce(ViewState::default(), ViewEvent::Alert("hey".into()));
        assert_eq!(state.alert.as_deref(), Some("hey"));
        assert!(reduce(state, ViewEvent::AlertDismissed).alert.is_none());
    }
}
