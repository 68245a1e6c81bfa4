//! Interactive terminal view
//!
//! The view parses intents from stdin lines and repaints the countdown
//! line in place whenever a snapshot arrives on the watch channel.

pub mod command;
pub mod handlers;
pub mod render;
pub mod responses;

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::state::{AppState, TimerSnapshot};
use command::Command;

/// Run the view loop until the user quits or stdin closes
pub async fn run_view(state: Arc<AppState>) -> Result<()> {
    let mut snapshots = state.subscribe();
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    println!("Pomodoro Study Timer");
    println!("====================");
    println!("{}", render::help_text());
    println!();
    print_countdown(&state.get_snapshot());

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    // stdin closed, end the session
                    break;
                };
                let line = line.trim();
                if line.is_empty() {
                    print_countdown(&state.get_snapshot());
                    continue;
                }

                println!();
                match Command::parse(line) {
                    Ok(Command::Quit) => break,
                    Ok(command) => match handlers::handle_command(&state, command) {
                        Ok(feedback) => println!("{}", feedback),
                        Err(message) => println!("{}", message),
                    },
                    Err(message) => println!("{}", message),
                }
                print_countdown(&state.get_snapshot());
            }

            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = snapshots.borrow_and_update().clone();
                // if snapshot.running && snapshot.remaining_seconds == 0 {
                //     play_reward_sound();
                // }
                print_countdown(&snapshot);
            }
        }
    }

    println!();
    Ok(())
}

/// Repaint the countdown readout in place
fn print_countdown(snapshot: &TimerSnapshot) {
    print!("\r\x1b[2K{}", render::countdown_line(snapshot));
    let _ = std::io::stdout().flush();
}
