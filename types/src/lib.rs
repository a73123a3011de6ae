//! Fundamental types for the FHE anti-cheat dashboard.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! cheat records and their lifecycle status, wallet addresses, timestamps, chain
//! identifiers, the detection type catalogue and the error taxonomy.

pub mod address;
pub mod detection;
pub mod error;
pub mod network;
pub mod record;
pub mod state;
pub mod time;

pub use address::WalletAddress;
pub use detection::{DETECTION_TYPES, UNKNOWN_DETECTION_TYPE};
pub use error::{ErrorKind, ParseError};
pub use network::ChainId;
pub use record::{CheatRecord, RecordId};
pub use state::{RecordStatus, StatusFilter};
pub use time::{Clock, SystemClock, Timestamp};
