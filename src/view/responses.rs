//! View response structures

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::display;
use crate::state::{AppState, DraftState, SettingsState, TimerSnapshot};

/// Full session status, printed as pretty JSON by the `status` command
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub settings: SettingsState,
    pub clock: String,
    pub remaining_seconds: i64,
    pub full_seconds: i64,
    pub progress_percent: f64,
    pub draft: Option<DraftState>,
    pub uptime: String,
    pub last_intent: Option<String>,
    pub last_intent_time: Option<DateTime<Utc>>,
    pub timestamp: DateTime<Utc>,
}

impl StatusResponse {
    /// Assemble the status from the current application state
    pub fn collect(state: &AppState) -> Result<Self, String> {
        let settings = state.get_settings()?;
        let draft = state.get_draft()?;
        let TimerSnapshot {
            remaining_seconds,
            full_seconds,
            ..
        } = state.get_snapshot();
        let (last_intent, last_intent_time) = state.get_last_intent();

        Ok(Self {
            settings,
            clock: display::clock_display(remaining_seconds),
            remaining_seconds,
            full_seconds,
            progress_percent: display::progress_percent(remaining_seconds, full_seconds),
            draft,
            uptime: state.uptime(),
            last_intent,
            last_intent_time,
            timestamp: Utc::now(),
        })
    }
}
