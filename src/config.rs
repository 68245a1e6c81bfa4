//! Configuration and CLI argument handling

use clap::Parser;

use crate::state::{
    DEFAULT_FOCUS_MINUTES, DEFAULT_LONG_BREAK_MINUTES, DEFAULT_SHORT_BREAK_MINUTES,
};

/// CLI argument parsing structure. The duration flags set the session
/// defaults, which the settings form's discard-to-default restores.
#[derive(Parser)]
#[command(name = "pomodoro-study")]
#[command(about = "A state-managed Pomodoro study timer for the terminal")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Focus session length in minutes
    #[arg(short, long, default_value_t = DEFAULT_FOCUS_MINUTES)]
    pub focus: i64,

    /// Short break length in minutes
    #[arg(short, long, default_value_t = DEFAULT_SHORT_BREAK_MINUTES)]
    pub short_break: i64,

    /// Long break length in minutes
    #[arg(short, long, default_value_t = DEFAULT_LONG_BREAK_MINUTES)]
    pub long_break: i64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
