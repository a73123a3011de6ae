//! Record lifecycle status and the list filter built on it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Lifecycle stage of a cheat record.
///
/// Transitions only move forward: `Normal → Suspicious → Confirmed`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    /// Freshly submitted.
    #[default]
    Normal,
    /// Flagged by the submitter for review.
    Suspicious,
    /// Cheating confirmed by the submitter. Terminal.
    Confirmed,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Suspicious => "suspicious",
            Self::Confirmed => "confirmed",
        }
    }

    /// The single status this one may advance to, if any.
    pub fn next(&self) -> Option<RecordStatus> {
        match self {
            Self::Normal => Some(Self::Suspicious),
            Self::Suspicious => Some(Self::Confirmed),
            Self::Confirmed => None,
        }
    }

    /// Whether moving from `self` to `target` is a legal forward step.
    pub fn can_advance_to(&self, target: RecordStatus) -> bool {
        self.next() == Some(target)
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::Normal),
            "suspicious" => Ok(Self::Suspicious),
            "confirmed" => Ok(Self::Confirmed),
            other => Err(ParseError::Status(other.to_string())),
        }
    }
}

/// Status selector of the record list. `All` bypasses status filtering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    #[default]
    All,
    Only(RecordStatus),
}

impl StatusFilter {
    pub fn admits(&self, status: RecordStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        s.parse::<RecordStatus>()
            .map(Self::Only)
            .map_err(|_| ParseError::Filter(s.to_string()))
    }
}
