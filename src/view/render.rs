//! Terminal rendering for the countdown line and settings form

use crate::display::{self, ProgressColor};
use crate::state::{DraftState, Mode, TimerSnapshot};

const PLAY_ICON: &str = "▶";
const STOP_ICON: &str = "■";
const BAR_WIDTH: usize = 20;

const COLOR_PRIMARY: &str = "\x1b[35m";
const COLOR_ACCENT: &str = "\x1b[32m";
const COLOR_RESET: &str = "\x1b[0m";

/// One-line countdown readout: start/stop glyph, mode strip, clock,
/// progress bar and percentage
pub fn countdown_line(snapshot: &TimerSnapshot) -> String {
    let percent = display::progress_percent(snapshot.remaining_seconds, snapshot.full_seconds);
    let color = match display::progress_color(percent) {
        ProgressColor::Primary => COLOR_PRIMARY,
        ProgressColor::Accent => COLOR_ACCENT,
    };
    // The glyph previews what the toggle will do: play while stopped,
    // stop while running
    let icon = if snapshot.running { STOP_ICON } else { PLAY_ICON };

    format!(
        "{} {}  {}  {}{}{} {:.0}%",
        icon,
        mode_strip(snapshot.mode),
        display::clock_display(snapshot.remaining_seconds),
        color,
        progress_bar(percent),
        COLOR_RESET,
        percent,
    )
}

/// The three modes as a strip with the active one bracketed
pub fn mode_strip(active: Mode) -> String {
    [Mode::Focus, Mode::ShortBreak, Mode::LongBreak]
        .iter()
        .map(|mode| {
            if *mode == active {
                format!("[{}]", mode.label())
            } else {
                mode.label().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" · ")
}

/// The settings form echo printed after every draft change
pub fn settings_form(draft: &DraftState) -> String {
    format!(
        "Settings draft:\n  \
         focus:       {} min\n  \
         short break: {} min\n  \
         long break:  {} min\n\
         (set <focus|short|long> <minutes> | defaults | save | cancel)",
        draft.focus_minutes, draft.short_break_minutes, draft.long_break_minutes
    )
}

pub fn help_text() -> &'static str {
    "Commands:\n  \
     focus | short | long    select the timer mode\n  \
     toggle                  start or pause the countdown\n  \
     reset                   stop and reload the active duration\n  \
     settings                open the settings form\n  \
     set <field> <minutes>   edit a draft field (focus, short, long)\n  \
     defaults                discard draft edits, restore defaults\n  \
     save                    commit the draft durations\n  \
     cancel                  close the settings form without saving\n  \
     status                  print the session status as JSON\n  \
     help                    show this help\n  \
     quit                    end the session"
}

fn progress_bar(percent: f64) -> String {
    // Out-of-range percentages are only clamped for the bar glyphs; the
    // numeric readout next to it stays raw
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round();
    let filled = (filled.max(0.0) as usize).min(BAR_WIDTH);
    format!("{}{}", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}
