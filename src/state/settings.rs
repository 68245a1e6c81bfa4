//! Settings/mode state structure and the partial-overlay reducer

use serde::{Deserialize, Serialize};

/// Default session durations in minutes, used when no command-line
/// overrides are given and when a settings draft is discarded to defaults.
pub const DEFAULT_FOCUS_MINUTES: i64 = 25;
pub const DEFAULT_SHORT_BREAK_MINUTES: i64 = 5;
pub const DEFAULT_LONG_BREAK_MINUTES: i64 = 10;

/// Timer context. Exactly one mode is active at a time and selects which
/// configured duration the countdown runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Focus,
    ShortBreak,
    LongBreak,
}

impl Mode {
    /// Human-readable label for the mode strip
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Focus => "focus",
            Mode::ShortBreak => "short break",
            Mode::LongBreak => "long break",
        }
    }
}

/// Committed, currently-effective configuration and run state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsState {
    pub focus_minutes: i64,
    pub short_break_minutes: i64,
    pub long_break_minutes: i64,
    pub current_mode: Mode,
    pub running: bool,
}

/// Partial update over [`SettingsState`]. `Some` fields replace the
/// corresponding field, `None` fields leave it unchanged. No validation
/// happens here; callers own the sanity of the values they supply.
#[derive(Debug, Clone, Default)]
pub struct SettingsPatch {
    pub focus_minutes: Option<i64>,
    pub short_break_minutes: Option<i64>,
    pub long_break_minutes: Option<i64>,
    pub current_mode: Option<Mode>,
    pub running: Option<bool>,
}

impl SettingsState {
    /// Create a SettingsState with the stock durations, focus mode, stopped
    pub fn new() -> Self {
        Self::with_durations(
            DEFAULT_FOCUS_MINUTES,
            DEFAULT_SHORT_BREAK_MINUTES,
            DEFAULT_LONG_BREAK_MINUTES,
        )
    }

    /// Create a SettingsState with the given durations, focus mode, stopped
    pub fn with_durations(focus: i64, short_break: i64, long_break: i64) -> Self {
        Self {
            focus_minutes: focus,
            short_break_minutes: short_break,
            long_break_minutes: long_break,
            current_mode: Mode::Focus,
            running: false,
        }
    }

    /// Overlay a partial patch onto this state, returning the merged state
    pub fn apply(&self, patch: &SettingsPatch) -> SettingsState {
        SettingsState {
            focus_minutes: patch.focus_minutes.unwrap_or(self.focus_minutes),
            short_break_minutes: patch.short_break_minutes.unwrap_or(self.short_break_minutes),
            long_break_minutes: patch.long_break_minutes.unwrap_or(self.long_break_minutes),
            current_mode: patch.current_mode.unwrap_or(self.current_mode),
            running: patch.running.unwrap_or(self.running),
        }
    }

    /// Duration in minutes of the currently selected mode
    pub fn active_minutes(&self) -> i64 {
        match self.current_mode {
            Mode::Focus => self.focus_minutes,
            Mode::ShortBreak => self.short_break_minutes,
            Mode::LongBreak => self.long_break_minutes,
        }
    }

    /// The three duration fields as one comparable unit
    pub fn durations(&self) -> (i64, i64, i64) {
        (
            self.focus_minutes,
            self.short_break_minutes,
            self.long_break_minutes,
        )
    }
}

impl Default for SettingsState {
    fn default() -> Self {
        Self::new()
    }
}
