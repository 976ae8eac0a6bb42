//! Application-level configuration: UI constants and the event catalog.

use serde::Deserialize;

// UI behavior
/// Display refresh period while the stopwatch is running.
pub const TICK_INTERVAL_MS: u32 = 100;

// Default values for input fields
pub const DEFAULT_EVENT_INDEX: usize = 4; // 400m
pub const MAX_PR_SECONDS: f64 = 59.99;

/// Embedded event catalog. The selectable distances are configuration, not
/// code: edit `events.json` to add or drop events (the 500m/600m/3200m set
/// has historically varied between deployments).
pub const EVENTS_JSON: &str = include_str!("events.json");

/// One selectable event distance.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EventOption {
    pub label: String,
    pub meters: f64,
}

/// Parse the embedded event catalog.
pub fn load_event_options() -> Result<Vec<EventOption>, serde_json::Error> {
    serde_json::from_str(EVENTS_JSON)
}
