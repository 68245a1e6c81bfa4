//! Intent parsing for the terminal view

use crate::state::{DurationField, Mode};

/// A user intent, parsed from one input line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SelectMode(Mode),
    StartPause,
    Reset,
    OpenSettings,
    /// Edit one draft duration field; the value is kept as raw text and
    /// parsed by the draft reducer
    EditField(DurationField, String),
    DraftDefaults,
    Commit,
    Cancel,
    Status,
    Help,
    Quit,
}

impl Command {
    /// Parse a non-empty input line into a command
    pub fn parse(line: &str) -> Result<Command, String> {
        let mut words = line.split_whitespace();
        let head = words.next().unwrap_or_default();

        match head {
            "focus" | "f" => Ok(Command::SelectMode(Mode::Focus)),
            "short" | "sb" => Ok(Command::SelectMode(Mode::ShortBreak)),
            "long" | "lb" => Ok(Command::SelectMode(Mode::LongBreak)),
            "toggle" | "t" => Ok(Command::StartPause),
            "reset" | "r" => Ok(Command::Reset),
            "settings" | "o" => Ok(Command::OpenSettings),
            "set" => {
                let field = match words.next() {
                    Some("focus") => DurationField::Focus,
                    Some("short") => DurationField::ShortBreak,
                    Some("long") => DurationField::LongBreak,
                    _ => return Err("Usage: set <focus|short|long> <minutes>".to_string()),
                };
                let raw = words.collect::<Vec<_>>().join(" ");
                if raw.is_empty() {
                    return Err("Usage: set <focus|short|long> <minutes>".to_string());
                }
                Ok(Command::EditField(field, raw))
            }
            "defaults" | "d" => Ok(Command::DraftDefaults),
            "save" => Ok(Command::Commit),
            "cancel" => Ok(Command::Cancel),
            "status" => Ok(Command::Status),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => Err(format!("Unknown command '{}', try 'help'", other)),
        }
    }
}
