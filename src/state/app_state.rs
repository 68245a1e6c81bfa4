//! Main application state management
//!
//! All view intents are dispatched through [`AppState`], which applies the
//! patch to the settings state and then runs the two synchronization
//! reactions while both locks are held, so the ticker can never observe a
//! stale target duration.

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::watch;
use tracing::{info, warn};

use super::{Countdown, DraftState, DurationField, Mode, SettingsPatch, SettingsState};

/// Snapshot published to the view after every mutation and tick
#[derive(Debug, Clone, Serialize)]
pub struct TimerSnapshot {
    pub mode: Mode,
    pub running: bool,
    pub remaining_seconds: i64,
    pub full_seconds: i64,
}

/// Main application state holding the settings, the open draft (if any)
/// and the countdown engine
#[derive(Debug)]
pub struct AppState {
    /// Committed settings and run state
    pub settings: Arc<Mutex<SettingsState>>,
    /// Working copy of the durations while the settings form is open
    pub draft: Arc<Mutex<Option<DraftState>>>,
    /// Countdown engine, decremented by the ticker task
    pub countdown: Arc<Mutex<Countdown>>,
    /// Session defaults restored by the draft's discard-to-default
    pub default_focus_minutes: i64,
    pub default_short_break_minutes: i64,
    pub default_long_break_minutes: i64,
    /// Session metadata
    pub start_time: Instant,
    /// Last intent tracking
    pub last_intent: Arc<Mutex<Option<String>>>,
    pub last_intent_time: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Channel for timer snapshots
    pub snapshot_tx: watch::Sender<TimerSnapshot>,
    /// Keep the receiver alive to prevent channel closure
    pub _snapshot_rx: watch::Receiver<TimerSnapshot>,
}

impl AppState {
    /// Create a new AppState with the given session-default durations,
    /// focus mode selected and the countdown stopped
    pub fn new(focus_minutes: i64, short_break_minutes: i64, long_break_minutes: i64) -> Self {
        let settings =
            SettingsState::with_durations(focus_minutes, short_break_minutes, long_break_minutes);
        let countdown = Countdown::new(settings.active_minutes() * 60);
        let (snapshot_tx, snapshot_rx) =
            watch::channel(Self::build_snapshot(&settings, &countdown));

        Self {
            settings: Arc::new(Mutex::new(settings)),
            draft: Arc::new(Mutex::new(None)),
            countdown: Arc::new(Mutex::new(countdown)),
            default_focus_minutes: focus_minutes,
            default_short_break_minutes: short_break_minutes,
            default_long_break_minutes: long_break_minutes,
            start_time: Instant::now(),
            last_intent: Arc::new(Mutex::new(None)),
            last_intent_time: Arc::new(Mutex::new(None)),
            snapshot_tx,
            _snapshot_rx: snapshot_rx,
        }
    }

    /// Subscribe to timer snapshot updates
    pub fn subscribe(&self) -> watch::Receiver<TimerSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Overlay a partial patch onto the settings state, then run the
    /// synchronization reactions and publish the new snapshot
    pub fn update_settings(
        &self,
        intent: &str,
        patch: SettingsPatch,
    ) -> Result<SettingsState, String> {
        // Lock order is settings before countdown, everywhere
        let mut settings = self
            .settings
            .lock()
            .map_err(|e| format!("Failed to lock settings state: {}", e))?;
        let mut countdown = self
            .countdown
            .lock()
            .map_err(|e| format!("Failed to lock countdown: {}", e))?;

        let before = settings.clone();
        let merged = settings.apply(&patch);
        *settings = merged;

        // Duration/Mode reaction: changing what is being timed always
        // returns to a stopped, freshly loaded countdown
        if settings.current_mode != before.current_mode
            || settings.durations() != before.durations()
        {
            countdown.reset(settings.active_minutes() * 60);
            settings.running = false;
        }

        // Running reaction: keep the engine in step with the running flag
        if settings.running != before.running {
            if settings.running {
                countdown.start();
            } else {
                countdown.stop();
            }
        }

        let new_state = settings.clone();
        let snapshot = Self::build_snapshot(&settings, &countdown);
        drop(countdown);
        drop(settings);

        self.track_intent(intent);
        self.publish(snapshot);

        Ok(new_state)
    }

    /// Select the timer mode
    pub fn change_mode(&self, mode: Mode) -> Result<SettingsState, String> {
        info!("Selecting mode: {}", mode.label());
        self.update_settings(
            mode.label(),
            SettingsPatch {
                current_mode: Some(mode),
                ..Default::default()
            },
        )
    }

    /// Toggle between running and stopped
    pub fn start_pause(&self) -> Result<SettingsState, String> {
        let running = self.get_settings()?.running;
        self.update_settings(
            if running { "pause" } else { "start" },
            SettingsPatch {
                running: Some(!running),
                ..Default::default()
            },
        )
    }

    /// Stop the countdown and reload it with the active duration. Mode and
    /// durations are left as they are.
    pub fn reset(&self) -> Result<SettingsState, String> {
        let mut settings = self
            .settings
            .lock()
            .map_err(|e| format!("Failed to lock settings state: {}", e))?;
        let mut countdown = self
            .countdown
            .lock()
            .map_err(|e| format!("Failed to lock countdown: {}", e))?;

        countdown.reset(settings.active_minutes() * 60);
        settings.running = false;

        let new_state = settings.clone();
        let snapshot = Self::build_snapshot(&settings, &countdown);
        drop(countdown);
        drop(settings);

        self.track_intent("reset");
        self.publish(snapshot);

        Ok(new_state)
    }

    /// Open the settings form with a draft copied from the committed
    /// settings. Reopening replaces any forgotten draft.
    pub fn open_settings(&self) -> Result<DraftState, String> {
        let settings = self
            .settings
            .lock()
            .map_err(|e| format!("Failed to lock settings state: {}", e))?;
        let mut draft = self
            .draft
            .lock()
            .map_err(|e| format!("Failed to lock draft state: {}", e))?;

        let opened = DraftState::from_settings(&settings);
        *draft = Some(opened.clone());
        drop(draft);
        drop(settings);

        self.track_intent("open settings");
        Ok(opened)
    }

    /// Overlay one edited duration field onto the open draft
    pub fn edit_draft(&self, field: DurationField, raw: &str) -> Result<DraftState, String> {
        let mut draft = self
            .draft
            .lock()
            .map_err(|e| format!("Failed to lock draft state: {}", e))?;

        let open = draft
            .as_mut()
            .ok_or_else(|| "The settings form is not open".to_string())?;
        open.edit(field, raw)?;
        let updated = open.clone();
        drop(draft);

        self.track_intent(&format!("edit {}", field.label()));
        Ok(updated)
    }

    /// Discard all draft edits and restore the session defaults
    pub fn reset_draft(&self) -> Result<DraftState, String> {
        let mut draft = self
            .draft
            .lock()
            .map_err(|e| format!("Failed to lock draft state: {}", e))?;

        let open = draft
            .as_mut()
            .ok_or_else(|| "The settings form is not open".to_string())?;
        open.reset_to_defaults(
            self.default_focus_minutes,
            self.default_short_break_minutes,
            self.default_long_break_minutes,
        );
        let updated = open.clone();
        drop(draft);

        self.track_intent("draft defaults");
        Ok(updated)
    }

    /// Commit the draft: overlay the three duration fields (and only
    /// those) onto the settings, closing the form. The duration reaction
    /// then decides whether the countdown reloads.
    pub fn commit_settings(&self) -> Result<SettingsState, String> {
        let committed = {
            let mut draft = self
                .draft
                .lock()
                .map_err(|e| format!("Failed to lock draft state: {}", e))?;
            draft
                .take()
                .ok_or_else(|| "The settings form is not open".to_string())?
        };

        self.update_settings(
            "commit settings",
            SettingsPatch {
                focus_minutes: Some(committed.focus_minutes),
                short_break_minutes: Some(committed.short_break_minutes),
                long_break_minutes: Some(committed.long_break_minutes),
                ..Default::default()
            },
        )
    }

    /// Close the settings form, discarding the draft
    pub fn close_settings(&self) -> Result<(), String> {
        let mut draft = self
            .draft
            .lock()
            .map_err(|e| format!("Failed to lock draft state: {}", e))?;
        *draft = None;
        drop(draft);

        self.track_intent("close settings");
        Ok(())
    }

    /// Advance the countdown by one second and publish the new snapshot.
    /// Called by the ticker task while the countdown is running.
    pub fn tick(&self) -> Result<(), String> {
        let settings = self
            .settings
            .lock()
            .map_err(|e| format!("Failed to lock settings state: {}", e))?;
        let mut countdown = self
            .countdown
            .lock()
            .map_err(|e| format!("Failed to lock countdown: {}", e))?;

        countdown.tick();
        let snapshot = Self::build_snapshot(&settings, &countdown);
        drop(countdown);
        drop(settings);

        self.publish(snapshot);
        Ok(())
    }

    /// Get the committed settings state
    pub fn get_settings(&self) -> Result<SettingsState, String> {
        self.settings
            .lock()
            .map(|settings| settings.clone())
            .map_err(|e| format!("Failed to lock settings state: {}", e))
    }

    /// Get the open draft, if the settings form is open
    pub fn get_draft(&self) -> Result<Option<DraftState>, String> {
        self.draft
            .lock()
            .map(|draft| draft.clone())
            .map_err(|e| format!("Failed to lock draft state: {}", e))
    }

    /// Get the current timer snapshot
    pub fn get_snapshot(&self) -> TimerSnapshot {
        self.snapshot_tx.borrow().clone()
    }

    /// Calculate session uptime as a formatted string
    pub fn uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last intent information
    pub fn get_last_intent(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_intent = self.last_intent.lock().ok().and_then(|i| i.clone());
        let last_intent_time = self.last_intent_time.lock().ok().and_then(|t| *t);
        (last_intent, last_intent_time)
    }

    fn build_snapshot(settings: &SettingsState, countdown: &Countdown) -> TimerSnapshot {
        TimerSnapshot {
            mode: settings.current_mode,
            running: settings.running,
            remaining_seconds: countdown.remaining_seconds(),
            full_seconds: countdown.start_seconds(),
        }
    }

    fn publish(&self, snapshot: TimerSnapshot) {
        if let Err(e) = self.snapshot_tx.send(snapshot) {
            warn!("Failed to publish timer snapshot: {}", e);
        }
    }

    fn track_intent(&self, intent: &str) {
        if let Ok(mut last_intent) = self.last_intent.lock() {
            *last_intent = Some(intent.to_string());
        }
        if let Ok(mut last_time) = self.last_intent_time.lock() {
            *last_time = Some(Utc::now());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remaining(state: &AppState) -> i64 {
        state.get_snapshot().remaining_seconds
    }

    #[test]
    fn test_start_pause_toggles_running_and_nothing_else() {
        let state = AppState::new(25, 5, 10);
        let before = state.get_settings().unwrap();

        let started = state.start_pause().unwrap();
        assert!(started.running);
        assert_eq!(started.current_mode, before.current_mode);
        assert_eq!(started.durations(), before.durations());

        let paused = state.start_pause().unwrap();
        assert!(!paused.running);
        assert_eq!(paused.durations(), before.durations());
    }

    #[test]
    fn test_pause_freezes_remaining() {
        let state = AppState::new(25, 5, 10);
        state.start_pause().unwrap();
        state.tick().unwrap();
        state.tick().unwrap();
        state.start_pause().unwrap();
        assert_eq!(remaining(&state), 1498);
        // Engine is stopped, a stray tick no longer decrements
        state.tick().unwrap();
        assert_eq!(remaining(&state), 1498);
        // Resuming continues from where it froze
        state.start_pause().unwrap();
        state.tick().unwrap();
        assert_eq!(remaining(&state), 1497);
    }

    #[test]
    fn test_countdown_then_mode_change() {
        let state = AppState::new(25, 5, 10);

        state.start_pause().unwrap();
        state.tick().unwrap();
        state.tick().unwrap();
        state.tick().unwrap();
        assert_eq!(remaining(&state), 1497);

        let settings = state.change_mode(Mode::ShortBreak).unwrap();
        assert!(!settings.running);
        assert_eq!(settings.current_mode, Mode::ShortBreak);
        assert_eq!(remaining(&state), 300);
        assert!(!state.countdown.lock().unwrap().is_running());
    }

    #[test]
    fn test_reselecting_the_active_mode_changes_nothing() {
        let state = AppState::new(25, 5, 10);
        state.start_pause().unwrap();
        state.tick().unwrap();

        let settings = state.change_mode(Mode::Focus).unwrap();
        assert!(settings.running);
        assert_eq!(remaining(&state), 1499);
    }

    #[test]
    fn test_reset_reloads_active_duration() {
        let state = AppState::new(25, 5, 10);
        state.start_pause().unwrap();
        state.tick().unwrap();
        state.tick().unwrap();

        let settings = state.reset().unwrap();
        assert!(!settings.running);
        assert_eq!(settings.current_mode, Mode::Focus);
        assert_eq!(remaining(&state), 1500);
    }

    #[test]
    fn test_commit_reloads_countdown_from_new_duration() {
        let state = AppState::new(25, 5, 10);

        state.open_settings().unwrap();
        state.edit_draft(DurationField::Focus, "50").unwrap();
        let settings = state.commit_settings().unwrap();

        assert_eq!(settings.focus_minutes, 50);
        assert!(!settings.running);
        assert_eq!(remaining(&state), 3000);
        // Commit closed the form
        assert!(state.get_draft().unwrap().is_none());
    }

    #[test]
    fn test_commit_overlays_only_durations() {
        let state = AppState::new(25, 5, 10);
        state.change_mode(Mode::ShortBreak).unwrap();
        state.start_pause().unwrap();

        state.open_settings().unwrap();
        state.edit_draft(DurationField::LongBreak, "20").unwrap();
        let settings = state.commit_settings().unwrap();

        // Mode survives the commit; the duration reaction still forces a
        // stop and reloads the active (short break) duration
        assert_eq!(settings.current_mode, Mode::ShortBreak);
        assert_eq!(settings.long_break_minutes, 20);
        assert!(!settings.running);
        assert_eq!(remaining(&state), 300);
    }

    #[test]
    fn test_commit_without_changes_leaves_countdown_running() {
        let state = AppState::new(25, 5, 10);
        state.start_pause().unwrap();
        state.tick().unwrap();

        state.open_settings().unwrap();
        let settings = state.commit_settings().unwrap();

        assert!(settings.running);
        assert_eq!(remaining(&state), 1499);
    }

    #[test]
    fn test_cancel_discards_edits() {
        let state = AppState::new(25, 5, 10);
        state.open_settings().unwrap();
        state.edit_draft(DurationField::Focus, "99").unwrap();
        state.close_settings().unwrap();

        let settings = state.get_settings().unwrap();
        assert_eq!(settings.focus_minutes, 25);
        // Reopening starts from the committed values again
        let draft = state.open_settings().unwrap();
        assert_eq!(draft.focus_minutes, 25);
    }

    #[test]
    fn test_draft_defaults_restore_session_defaults() {
        let state = AppState::new(30, 6, 12);
        state.open_settings().unwrap();
        state.edit_draft(DurationField::Focus, "99").unwrap();

        let draft = state.reset_draft().unwrap();
        assert_eq!(draft.focus_minutes, 30);
        assert_eq!(draft.short_break_minutes, 6);
        assert_eq!(draft.long_break_minutes, 12);
    }

    #[test]
    fn test_draft_edits_require_open_form() {
        let state = AppState::new(25, 5, 10);
        assert!(state.edit_draft(DurationField::Focus, "50").is_err());
        assert!(state.reset_draft().is_err());
        assert!(state.commit_settings().is_err());
    }

    #[test]
    fn test_zero_duration_collapses_countdown() {
        let state = AppState::new(25, 5, 10);
        state.open_settings().unwrap();
        state.edit_draft(DurationField::Focus, "0").unwrap();
        state.commit_settings().unwrap();

        assert_eq!(remaining(&state), 0);
        state.start_pause().unwrap();
        state.tick().unwrap();
        assert_eq!(remaining(&state), 0);
    }
}
