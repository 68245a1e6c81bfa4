//! Pomodoro Study - a state-managed Pomodoro study timer for the terminal
//!
//! This is the main entry point for the pomodoro-study application.

use std::sync::Arc;

use tracing::info;

use pomodoro_study::{
    config::Config, state::AppState, tasks::ticker_task, utils::shutdown_signal, view::run_view,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with the appropriate log level; logs go to
    // stderr so they don't fight the countdown repaint on stdout
    tracing_subscriber::fmt()
        .with_env_filter(format!("pomodoro_study={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting pomodoro-study v0.1.0");
    info!(
        "Session defaults: focus={}min, short break={}min, long break={}min",
        config.focus, config.short_break, config.long_break
    );

    // Create application state
    let state = Arc::new(AppState::new(
        config.focus,
        config.short_break,
        config.long_break,
    ));

    // Start the countdown ticker background task
    let ticker_state = Arc::clone(&state);
    tokio::spawn(async move {
        ticker_task(ticker_state).await;
    });

    // Run the interactive view until the user quits or a signal arrives
    let view = run_view(Arc::clone(&state));

    tokio::select! {
        result = view => {
            if let Err(e) = result {
                tracing::error!("View error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Session ended after {}", state.uptime());
    Ok(())
}
