//! JSON envelope stored under each `record_{id}` key.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use anticheat_types::{
    CheatRecord, RecordId, RecordStatus, Timestamp, WalletAddress, UNKNOWN_DETECTION_TYPE,
};

use crate::StoreError;

/// On-store shape of a record:
/// `{score, timestamp, playerAddress, gameId, status, detectionType}`.
///
/// The id is not part of the envelope; it is the key suffix. Envelopes
/// written before `status` or `detectionType` existed read back as
/// `normal` / `"Unknown"`. A `null` or empty status is also `normal`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordEnvelope {
    /// Codec token.
    pub score: String,
    pub timestamp: Timestamp,
    pub player_address: WalletAddress,
    pub game_id: String,
    #[serde(default, deserialize_with = "status_or_normal")]
    pub status: RecordStatus,
    #[serde(default = "unknown_detection_type")]
    pub detection_type: String,
}

fn unknown_detection_type() -> String {
    UNKNOWN_DETECTION_TYPE.to_string()
}

fn status_or_normal<'de, D>(deserializer: D) -> Result<RecordStatus, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref() {
        None | Some("") => Ok(RecordStatus::Normal),
        Some(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

/// Status of a stored record object, read the same way as the envelope does.
pub(crate) fn stored_status(value: Option<&Value>) -> Result<RecordStatus, StoreError> {
    Ok(status_or_normal(value.cloned().unwrap_or(Value::Null))?)
}

impl RecordEnvelope {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StoreError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, StoreError> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn into_record(self, id: RecordId) -> CheatRecord {
        CheatRecord {
            id,
            encrypted_score: self.score,
            timestamp: self.timestamp,
            player_address: self.player_address,
            game_id: self.game_id,
            status: self.status,
            detection_type: self.detection_type,
        }
    }
}

/// Parse the index blob. Empty or whitespace-only bytes mean an empty index.
pub fn parse_index(bytes: &[u8]) -> Result<Vec<RecordId>, StoreError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_are_camel_case() {
        let env = RecordEnvelope {
            score: "FHE-NDI=".into(),
            timestamp: Timestamp::new(1_700_000_000),
            player_address: WalletAddress::new("0xabc"),
            game_id: "G1".into(),
            status: RecordStatus::Normal,
            detection_type: "Aimbot".into(),
        };
        let json = String::from_utf8(env.to_bytes().unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"score":"FHE-NDI=","timestamp":1700000000,"playerAddress":"0xabc","gameId":"G1","status":"normal","detectionType":"Aimbot"}"#
        );
    }

    #[test]
    fn missing_optional_fields_take_defaults() {
        let env = RecordEnvelope::from_bytes(
            br#"{"score":"FHE-NDI=","timestamp":5,"playerAddress":"0xabc","gameId":"G1"}"#,
        )
        .unwrap();
        assert_eq!(env.status, RecordStatus::Normal);
        assert_eq!(env.detection_type, "Unknown");
    }

    #[test]
    fn null_or_empty_status_reads_as_normal() {
        for status in ["null", "\"\""] {
            let json = format!(
                r#"{{"score":"FHE-NDI=","timestamp":5,"playerAddress":"0xabc","gameId":"G1","status":{status}}}"#
            );
            let env = RecordEnvelope::from_bytes(json.as_bytes()).unwrap();
            assert_eq!(env.status, RecordStatus::Normal);
        }
        assert_eq!(stored_status(Some(&Value::Null)).unwrap(), RecordStatus::Normal);
        assert_eq!(stored_status(None).unwrap(), RecordStatus::Normal);
        assert_eq!(
            stored_status(Some(&Value::from("suspicious"))).unwrap(),
            RecordStatus::Suspicious
        );
        assert!(stored_status(Some(&Value::from(7))).is_err());
    }

    #[test]
    fn unknown_status_fails_to_parse() {
        let result = RecordEnvelope::from_bytes(
            br#"{"score":"x","timestamp":5,"playerAddress":"0xabc","gameId":"G1","status":"banned"}"#,
        );
        assert!(matches!(result, Err(StoreError::Serialization(_))));
    }

    #[test]
    fn index_parsing() {
        assert!(parse_index(b"").unwrap().is_empty());
        assert!(parse_index(b"  \n").unwrap().is_empty());
        assert_eq!(
            parse_index(br#"["1-a","2-b"]"#).unwrap(),
            vec![RecordId::new("1-a"), RecordId::new("2-b")]
        );
        assert!(parse_index(b"{not json").is_err());
    }
}
