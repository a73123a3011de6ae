//! The record store adapter.
//!
//! Creation writes the record blob first and then appends the id to the
//! index. The index append is an optimistic read-modify-write: it re-reads
//! and retries when [`ContractAccessor::set_data_if`] reports that another
//! writer got there first. Listing is not a snapshot; a record created
//! between the index read and the per-record reads is simply missing until
//! the next refresh.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use anticheat_crypto::ScoreOp;
use anticheat_types::{CheatRecord, Clock, RecordId, RecordStatus, SystemClock, WalletAddress};

use crate::envelope::{parse_index, stored_status, RecordEnvelope};
use crate::ids::{RandomSuffix, SuffixSource};
use crate::keys::{record_key, INDEX_KEY};
use crate::{ContractAccessor, StoreError};

/// How many times the index append is retried after losing a race.
pub const DEFAULT_INDEX_RETRY_LIMIT: u32 = 3;

/// Input for [`RecordStore::create_record`].
#[derive(Clone, Debug, PartialEq)]
pub struct NewRecord {
    pub player_address: WalletAddress,
    pub game_id: String,
    pub detection_type: String,
    /// Plain score; encoded before it is written.
    pub score: f64,
}

/// Reads and writes cheat records through a [`ContractAccessor`].
pub struct RecordStore<C> {
    contract: C,
    clock: Arc<dyn Clock>,
    suffixes: Arc<dyn SuffixSource>,
    index_retry_limit: u32,
}

impl<C: ContractAccessor> RecordStore<C> {
    /// A store using the system clock and random id suffixes.
    pub fn new(contract: C) -> Self {
        Self {
            contract,
            clock: Arc::new(SystemClock),
            suffixes: Arc::new(RandomSuffix),
            index_retry_limit: DEFAULT_INDEX_RETRY_LIMIT,
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_suffixes(mut self, suffixes: Arc<dyn SuffixSource>) -> Self {
        self.suffixes = suffixes;
        self
    }

    pub fn with_index_retry_limit(mut self, limit: u32) -> Self {
        self.index_retry_limit = limit;
        self
    }

    pub fn contract(&self) -> &C {
        &self.contract
    }

    async fn ensure_available(&self) -> Result<(), StoreError> {
        if self.contract.is_available().await? {
            Ok(())
        } else {
            Err(StoreError::Unavailable)
        }
    }

    /// Read every indexed record, newest first.
    ///
    /// Records whose blob is empty or fails to parse are logged and
    /// skipped; they never fail the whole listing. An unparsable index reads
    /// as empty.
    pub async fn list_records(&self) -> Result<Vec<CheatRecord>, StoreError> {
        self.ensure_available().await?;

        let raw_index = self.contract.get_data(INDEX_KEY).await?;
        let ids = parse_index(&raw_index).unwrap_or_else(|e| {
            warn!(error = %e, "record index is unparsable, treating as empty");
            Vec::new()
        });

        let mut records = Vec::with_capacity(ids.len());
        for id in ids {
            match self.read_record(&id).await {
                Ok(Some(record)) => records.push(record),
                Ok(None) => debug!(%id, "indexed record has no data, skipping"),
                Err(e) => warn!(%id, error = %e, "failed to load record, skipping"),
            }
        }

        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        debug!(count = records.len(), "loaded records");
        Ok(records)
    }

    /// Read a single record by id.
    pub async fn get_record(&self, id: &RecordId) -> Result<CheatRecord, StoreError> {
        self.ensure_available().await?;
        match self.read_record(id).await {
            Ok(Some(record)) => Ok(record),
            Ok(None) => Err(StoreError::NotFound(record_key(id))),
            Err(StoreError::Serialization(e)) => {
                warn!(%id, error = %e, "record is unparsable");
                Err(StoreError::NotFound(record_key(id)))
            }
            Err(e) => Err(e),
        }
    }

    async fn read_record(&self, id: &RecordId) -> Result<Option<CheatRecord>, StoreError> {
        let bytes = self.contract.get_data(&record_key(id)).await?;
        if bytes.is_empty() {
            return Ok(None);
        }
        let envelope = RecordEnvelope::from_bytes(&bytes)?;
        Ok(Some(envelope.into_record(id.clone())))
    }

    /// Encode the score, write a new `normal` record and append it to the index.
    ///
    /// If the index append fails the record blob stays behind unindexed.
    pub async fn create_record(&self, input: NewRecord) -> Result<RecordId, StoreError> {
        self.ensure_available().await?;

        let id = RecordId::generate(self.clock.now_millis(), &self.suffixes.next_suffix());
        let envelope = RecordEnvelope {
            score: anticheat_crypto::encode(input.score),
            timestamp: self.clock.now(),
            player_address: input.player_address,
            game_id: input.game_id,
            status: RecordStatus::Normal,
            detection_type: input.detection_type,
        };

        self.contract
            .set_data(&record_key(&id), &envelope.to_bytes()?)
            .await?;
        debug!(%id, "record blob written");

        self.append_to_index(&id).await?;
        info!(%id, game_id = %envelope.game_id, "record created");
        Ok(id)
    }

    async fn append_to_index(&self, id: &RecordId) -> Result<(), StoreError> {
        let attempts = self.index_retry_limit + 1;
        for attempt in 1..=attempts {
            let current = self.contract.get_data(INDEX_KEY).await?;
            let mut ids = parse_index(&current).unwrap_or_else(|e| {
                warn!(error = %e, "record index is unparsable, rebuilding from empty");
                Vec::new()
            });
            ids.push(id.clone());
            let next = serde_json::to_vec(&ids)?;

            if self.contract.set_data_if(INDEX_KEY, &current, &next).await? {
                return Ok(());
            }
            warn!(%id, attempt, "record index changed concurrently, retrying");
        }
        Err(StoreError::Conflict {
            key: INDEX_KEY.to_string(),
            attempts,
        })
    }

    /// Advance a record to `new_status`, optionally transforming its score.
    ///
    /// The stored JSON object is merged rather than replaced, so fields this
    /// adapter does not know about survive. A missing or unparsable record is
    /// `NotFound`; a backwards or skipping transition is `InvalidTransition`.
    pub async fn update_record_status(
        &self,
        id: &RecordId,
        new_status: RecordStatus,
        score_op: Option<ScoreOp>,
    ) -> Result<(), StoreError> {
        self.ensure_available().await?;

        let key = record_key(id);
        let bytes = self.contract.get_data(&key).await?;
        if bytes.is_empty() {
            return Err(StoreError::NotFound(key));
        }
        let mut object: Map<String, Value> = serde_json::from_slice(&bytes).map_err(|e| {
            warn!(%id, error = %e, "record is unparsable");
            StoreError::NotFound(key.clone())
        })?;

        let current =
            stored_status(object.get("status")).map_err(|_| StoreError::NotFound(key.clone()))?;
        if !current.can_advance_to(new_status) {
            return Err(StoreError::InvalidTransition {
                from: current,
                to: new_status,
            });
        }

        object.insert("status".into(), Value::from(new_status.as_str()));
        if let Some(op) = score_op {
            let token = object
                .get("score")
                .and_then(Value::as_str)
                .ok_or_else(|| StoreError::NotFound(format!("{key}.score")))?;
            let updated = anticheat_crypto::transform(token, op)?;
            object.insert("score".into(), Value::from(updated));
        }

        self.contract
            .set_data(&key, &serde_json::to_vec(&object)?)
            .await?;
        info!(%id, from = %current, to = %new_status, "record status updated");
        Ok(())
    }

    /// `normal → suspicious`, raising the score by ten percent.
    pub async fn flag_record(&self, id: &RecordId) -> Result<(), StoreError> {
        self.update_record_status(id, RecordStatus::Suspicious, Some(ScoreOp::Increase10Percent))
            .await
    }

    /// `suspicious → confirmed`, score unchanged.
    pub async fn confirm_record(&self, id: &RecordId) -> Result<(), StoreError> {
        self.update_record_status(id, RecordStatus::Confirmed, None)
            .await
    }
}
