//! Derived display layer
//!
//! Pure functions of the current remaining-seconds value and the active
//! full duration. Nothing here is stored; the view recomputes these on
//! every repaint.

use serde::Serialize;

/// Progress percentage at which the indicator switches color
pub const PROGRESS_COLOR_THRESHOLD: f64 = 60.0;

/// Color bucket for the progress indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressColor {
    Primary,
    Accent,
}

/// Whole minutes left, rendered as "00" when exactly zero and unpadded
/// otherwise
pub fn minutes_display(remaining: i64) -> String {
    normalize_to_zero(remaining / 60)
}

/// Seconds within the current minute, same zero-to-"00" substitution
pub fn seconds_display(remaining: i64) -> String {
    normalize_to_zero(remaining % 60)
}

/// "MM:SS" line for the countdown readout
pub fn clock_display(remaining: i64) -> String {
    format!("{}:{}", minutes_display(remaining), seconds_display(remaining))
}

/// How far through the active duration the countdown is, 0 at a fresh
/// load and 100 at zero remaining. Not re-clamped: a remaining value
/// outside `[0, full_seconds]` yields an out-of-range percentage that
/// flows straight to the indicator. A zero full duration reads as a
/// collapsed, completed countdown.
pub fn progress_percent(remaining: i64, full_seconds: i64) -> f64 {
    if full_seconds == 0 {
        return 100.0;
    }
    100.0 - (remaining as f64 / full_seconds as f64) * 100.0
}

/// Pick the indicator color for a progress percentage
pub fn progress_color(percent: f64) -> ProgressColor {
    if percent < PROGRESS_COLOR_THRESHOLD {
        ProgressColor::Primary
    } else {
        ProgressColor::Accent
    }
}

fn normalize_to_zero(value: i64) -> String {
    if value == 0 {
        "00".to_string()
    } else {
        value.to_string()
    }
}
