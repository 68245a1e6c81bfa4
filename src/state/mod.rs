//! State management module
//!
//! This module contains the two state containers (committed settings and
//! the edit draft), the countdown engine and their dispatcher.

pub mod app_state;
pub mod countdown;
pub mod draft;
pub mod settings;

// Re-export main types
pub use app_state::{AppState, TimerSnapshot};
pub use countdown::Countdown;
pub use draft::{DraftState, DurationField};
pub use settings::{
    Mode, SettingsPatch, SettingsState, DEFAULT_FOCUS_MINUTES, DEFAULT_LONG_BREAK_MINUTES,
    DEFAULT_SHORT_BREAK_MINUTES,
};
