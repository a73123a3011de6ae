//! The cheat detection dashboard.
//!
//! UI state lives in an explicit [`ViewState`] that only changes through
//! [`reduce`]. Everything the screen shows (visible rows, status counts,
//! the detection type chart, which actions a viewer may take) is derived
//! from that state on demand. [`Dashboard`] drives the async side: it
//! talks to the record store and the wallet and feeds the outcomes back as
//! [`ViewEvent`]s.

pub mod actions;
pub mod announcements;
pub mod banner;
pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod form;
pub mod rows;
pub mod state;
pub mod stats;

pub use actions::{available_action, RecordAction};
pub use announcements::{Announcement, Priority, ANNOUNCEMENTS};
pub use banner::{Banner, BannerKind};
pub use config::DashboardConfig;
pub use controller::Dashboard;
pub use error::DashboardError;
pub use filter::RecordQuery;
pub use form::{FormError, NewRecordForm};
pub use rows::{RecordDetail, RecordRow};
pub use state::{reduce, ViewEvent, ViewState};
pub use stats::{BarChart, BarRow, StatusCounts};
