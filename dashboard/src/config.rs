//! Dashboard configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use anticheat_utils::LogFormat;

use crate::DashboardError;

/// Tunables of the dashboard.
///
/// Can be loaded from a TOML file via [`DashboardConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Artificial delay between the decrypt signature and the reveal.
    #[serde(default = "default_decrypt_delay_ms")]
    pub decrypt_delay_ms: u64,

    /// How long success banners stay up.
    #[serde(default = "default_success_banner_ms")]
    pub success_banner_ms: u64,

    /// How long error banners stay up.
    #[serde(default = "default_error_banner_ms")]
    pub error_banner_ms: u64,

    /// Validity window advertised in the signature message.
    #[serde(default = "default_signature_duration_days")]
    pub signature_duration_days: u32,

    /// Retries of the index append after losing a race to another writer.
    #[serde(default = "default_index_retry_limit")]
    pub index_retry_limit: u32,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_decrypt_delay_ms() -> u64 {
    anticheat_wallet::DEFAULT_DECRYPT_DELAY.as_millis() as u64
}

fn default_success_banner_ms() -> u64 {
    2000
}

fn default_error_banner_ms() -> u64 {
    3000
}

fn default_signature_duration_days() -> u32 {
    anticheat_wallet::DEFAULT_DURATION_DAYS
}

fn default_index_retry_limit() -> u32 {
    anticheat_store::DEFAULT_INDEX_RETRY_LIMIT
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl DashboardConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, DashboardError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| DashboardError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, DashboardError> {
        toml::from_str(s).map_err(|e| DashboardError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, DashboardError> {
        toml::to_string_pretty(self).map_err(|e| DashboardError::Config(e.to_string()))
    }

    pub fn decrypt_delay(&self) -> Duration {
        Duration::from_millis(self.decrypt_delay_ms)
    }

    /// Install the global tracing subscriber described by this config.
    pub fn init_logging(&self) -> bool {
        anticheat_utils::init_logging(self.log_format, &self.log_level)
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            decrypt_delay_ms: default_decrypt_delay_ms(),
            success_banner_ms: default_success_banner_ms(),
            error_banner_ms: default_error_banner_ms(),
            signature_duration_days: default_signature_duration_days(),
            index_retry_limit: default_index_retry_limit(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }
}
