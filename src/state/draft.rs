//! Edit-draft state for the settings form
//!
//! A draft is a working copy of the three duration fields, alive only
//! while the settings surface is open. Edits land here and reach the
//! committed settings only on an explicit commit.

use serde::Serialize;

use super::settings::SettingsState;

/// Which duration field an edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationField {
    Focus,
    ShortBreak,
    LongBreak,
}

impl DurationField {
    /// Field name as shown in the settings form
    pub fn label(&self) -> &'static str {
        match self {
            DurationField::Focus => "focus",
            DurationField::ShortBreak => "short break",
            DurationField::LongBreak => "long break",
        }
    }
}

/// Uncommitted copy of the duration settings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DraftState {
    pub focus_minutes: i64,
    pub short_break_minutes: i64,
    pub long_break_minutes: i64,
}

impl DraftState {
    /// Open a draft as a copy of the committed settings
    pub fn from_settings(settings: &SettingsState) -> Self {
        Self {
            focus_minutes: settings.focus_minutes,
            short_break_minutes: settings.short_break_minutes,
            long_break_minutes: settings.long_break_minutes,
        }
    }

    /// Parse `raw` as whole minutes and overlay just the targeted field.
    /// Non-numeric input is rejected and leaves the draft untouched; zero
    /// and negative values parse fine and propagate.
    pub fn edit(&mut self, field: DurationField, raw: &str) -> Result<(), String> {
        let minutes: i64 = raw
            .trim()
            .parse()
            .map_err(|_| format!("'{}' is not a whole number of minutes", raw.trim()))?;

        match field {
            DurationField::Focus => self.focus_minutes = minutes,
            DurationField::ShortBreak => self.short_break_minutes = minutes,
            DurationField::LongBreak => self.long_break_minutes = minutes,
        }
        Ok(())
    }

    /// Discard all in-progress edits and restore the session defaults
    pub fn reset_to_defaults(&mut self, focus: i64, short_break: i64, long_break: i64) {
        self.focus_minutes = focus;
        self.short_break_minutes = short_break;
        self.long_break_minutes = long_break;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_copies_settings() {
        let settings = SettingsState::with_durations(50, 4, 12);
        let draft = DraftState::from_settings(&settings);
        assert_eq!(draft.focus_minutes, 50);
        assert_eq!(draft.short_break_minutes, 4);
        assert_eq!(draft.long_break_minutes, 12);
    }

    #[test]
    fn test_edit_overlays_one_field() {
        let mut draft = DraftState::from_settings(&SettingsState::new());
        draft.edit(DurationField::Focus, "50").unwrap();
        assert_eq!(draft.focus_minutes, 50);
        assert_eq!(draft.short_break_minutes, 5);
        assert_eq!(draft.long_break_minutes, 10);
    }

    #[test]
    fn test_edit_accepts_zero_and_negative() {
        let mut draft = DraftState::from_settings(&SettingsState::new());
        draft.edit(DurationField::ShortBreak, "0").unwrap();
        assert_eq!(draft.short_break_minutes, 0);
        draft.edit(DurationField::LongBreak, "-3").unwrap();
        assert_eq!(draft.long_break_minutes, -3);
    }

    #[test]
    fn test_edit_rejects_non_numeric_input() {
        let mut draft = DraftState::from_settings(&SettingsState::new());
        let err = draft.edit(DurationField::Focus, "soon").unwrap_err();
        assert!(err.contains("soon"));
        // Draft keeps its previous value
        assert_eq!(draft.focus_minutes, 25);
    }

    #[test]
    fn test_reset_to_defaults_replaces_all_edits() {
        let mut draft = DraftState::from_settings(&SettingsState::new());
        draft.edit(DurationField::Focus, "99").unwrap();
        draft.edit(DurationField::ShortBreak, "1").unwrap();
        draft.reset_to_defaults(25, 5, 10);
        assert_eq!(draft.focus_minutes, 25);
        assert_eq!(draft.short_break_minutes, 5);
        assert_eq!(draft.long_break_minutes, 10);
    }
}
