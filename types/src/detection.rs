//! Detection type catalogue.
//!
//! The store keeps detection types as free text; this list only drives the
//! creation form's suggestions and the dashboard bar chart.

/// The fixed set of suggested detection types, in display order.
pub const DETECTION_TYPES: [&str; 6] = [
    "Speed Hack",
    "Aimbot",
    "Wallhack",
    "Inventory Manipulation",
    "Currency Exploit",
    "Cooldown Bypass",
];

/// Detection type reported for records whose stored JSON omits the field.
pub const UNKNOWN_DETECTION_TYPE: &str = "Unknown";

/// The detection type preselected in a fresh creation form.
pub fn default_detection_type() -> &'static str {
    DETECTION_TYPES[0]
}
