//! Command handlers mapping view intents onto the application state

use std::sync::Arc;

use tracing::{info, warn};

use crate::state::AppState;

use super::command::Command;
use super::render;
use super::responses::StatusResponse;

/// Apply a parsed command to the application state and return the
/// feedback to print. Errors are user-facing messages; the state is
/// unchanged when they occur.
pub fn handle_command(state: &Arc<AppState>, command: Command) -> Result<String, String> {
    match command {
        Command::SelectMode(mode) => {
            let settings = state.change_mode(mode)?;
            Ok(format!(
                "Mode: {} ({} minutes)",
                settings.current_mode.label(),
                settings.active_minutes()
            ))
        }

        Command::StartPause => {
            let settings = state.start_pause()?;
            info!("Countdown {}", if settings.running { "started" } else { "paused" });
            Ok(if settings.running {
                "Countdown running".to_string()
            } else {
                "Countdown paused".to_string()
            })
        }

        Command::Reset => {
            let settings = state.reset()?;
            Ok(format!(
                "Countdown reset to {} minutes",
                settings.active_minutes()
            ))
        }

        Command::OpenSettings => {
            let draft = state.open_settings()?;
            Ok(render::settings_form(&draft))
        }

        Command::EditField(field, raw) => match state.edit_draft(field, &raw) {
            Ok(draft) => Ok(render::settings_form(&draft)),
            Err(e) => {
                warn!("Rejected draft edit: {}", e);
                Err(e)
            }
        },

        Command::DraftDefaults => {
            let draft = state.reset_draft()?;
            Ok(render::settings_form(&draft))
        }

        Command::Commit => {
            let settings = state.commit_settings()?;
            info!(
                "Settings committed: focus={}min, short break={}min, long break={}min",
                settings.focus_minutes, settings.short_break_minutes, settings.long_break_minutes
            );
            Ok(format!(
                "Settings saved: focus {}m, short break {}m, long break {}m",
                settings.focus_minutes, settings.short_break_minutes, settings.long_break_minutes
            ))
        }

        Command::Cancel => {
            state.close_settings()?;
            Ok("Settings closed, edits discarded".to_string())
        }

        Command::Status => {
            let status = StatusResponse::collect(state)?;
            serde_json::to_string_pretty(&status)
                .map_err(|e| format!("Failed to serialize status: {}", e))
        }

        Command::Help => Ok(render::help_text().to_string()),

        // Quit ends the view loop before reaching the handlers
        Command::Quit => Ok("Bye".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{DurationField, Mode};

    #[test]
    fn test_select_mode_reports_new_duration() {
        let state = Arc::new(AppState::new(25, 5, 10));
        let feedback = handle_command(&state, Command::SelectMode(Mode::LongBreak)).unwrap();
        assert!(feedback.contains("long break"));
        assert!(feedback.contains("10"));
    }

    #[test]
    fn test_rejected_edit_leaves_draft_untouched() {
        let state = Arc::new(AppState::new(25, 5, 10));
        handle_command(&state, Command::OpenSettings).unwrap();

        let err = handle_command(
            &state,
            Command::EditField(DurationField::Focus, "soon".to_string()),
        )
        .unwrap_err();
        assert!(err.contains("soon"));
        assert_eq!(state.get_draft().unwrap().unwrap().focus_minutes, 25);
    }

    #[test]
    fn test_edit_outside_form_is_an_error() {
        let state = Arc::new(AppState::new(25, 5, 10));
        let err = handle_command(
            &state,
            Command::EditField(DurationField::Focus, "50".to_string()),
        )
        .unwrap_err();
        assert!(err.contains("not open"));
    }

    #[test]
    fn test_save_commits_and_reports_durations() {
        let state = Arc::new(AppState::new(25, 5, 10));
        handle_command(&state, Command::OpenSettings).unwrap();
        handle_command(
            &state,
            Command::EditField(DurationField::Focus, "50".to_string()),
        )
        .unwrap();

        let feedback = handle_command(&state, Command::Commit).unwrap();
        assert!(feedback.contains("focus 50m"));
        assert_eq!(state.get_settings().unwrap().focus_minutes, 50);
    }

    #[test]
    fn test_status_prints_json() {
        let state = Arc::new(AppState::new(25, 5, 10));
        let feedback = handle_command(&state, Command::Status).unwrap();
        assert!(feedback.contains("\"remaining_seconds\": 1500"));
    }
}
