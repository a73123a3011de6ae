//! Shared utilities for the FHE anti-cheat dashboard.

pub mod display;
pub mod logging;
pub mod time;

pub use display::short_address;
pub use logging::{init_logging, LogFormat};
pub use time::{format_date, format_date_time};
