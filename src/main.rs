//! Tomadoro - a terminal Pomodoro countdown with overtime tracking
//!
//! This is the main entry point for the tomadoro application.

use std::sync::Arc;

use tracing::info;

use tomadoro::{
    config::Config,
    services::notifier_task,
    state::AppState,
    tasks::{ticker_task, title_refresh_task},
    ui,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr; stdout belongs to the countdown view
    tracing_subscriber::fmt()
        .with_env_filter(format!("tomadoro={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting tomadoro v0.1.0");
    info!(
        "Configuration: minutes={}, mode={:?}",
        config.minutes,
        config.clock_mode()
    );

    // Create application state
    let state = Arc::new(AppState::new(config.clock_mode()));

    // Start the background tasks: the 1-second tick source, the
    // notification surface and the 2-second title re-assert
    let ticker_state = Arc::clone(&state);
    tokio::spawn(async move {
        ticker_task(ticker_state).await;
    });

    let notifier_state = Arc::clone(&state);
    tokio::spawn(async move {
        notifier_task(notifier_state).await;
    });

    let title_state = Arc::clone(&state);
    tokio::spawn(async move {
        title_refresh_task(title_state).await;
    });

    // Run the UI until the user quits or a shutdown signal arrives
    let ui = ui::run_ui(Arc::clone(&state), &config);

    tokio::select! {
        result = ui => {
            if let Err(e) = result {
                // The terminal guard has already restored the screen at
                // this point, so the report lands on a usable terminal
                tracing::error!("UI failed: {}", e);
                eprintln!("tomadoro failed to start: {e}");
                std::process::exit(1);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
            if let Err(e) = state.stop() {
                tracing::error!("Failed to stop session: {}", e);
            }
        }
    }

    let (last_action, last_action_time) = state.get_last_action();
    info!(
        "Shutdown complete (uptime {}, last action {:?} at {:?})",
        state.get_uptime(),
        last_action,
        last_action_time
    );
    Ok(())
}
