//! Countdown tick background task

use std::time::Duration;

use tokio::sync::broadcast::error::RecvError;
use tokio::time;
use tracing::{debug, error, info, warn};

use crate::state::{SharedState, TickerControl};

/// Background task that drives the session at a fixed 1-second cadence.
///
/// The task idles until a `Run` control message arrives, then ticks the
/// session once per second until it is halted, the session pauses or stops,
/// or a clamped countdown runs out. A `Run` received mid-flight (reset)
/// realigns the cadence to the moment of the intent.
pub async fn ticker_task(state: SharedState) {
    info!("Starting ticker task");

    let mut control_rx = state.control_tx.subscribe();

    loop {
        match control_rx.recv().await {
            Ok(TickerControl::Run) => {}
            Ok(TickerControl::Halt) => continue,
            Err(RecvError::Lagged(skipped)) => {
                warn!("Ticker control channel lagged by {} messages", skipped);
                continue;
            }
            Err(RecvError::Closed) => break,
        }

        debug!("Tick source running");
        let mut interval = time::interval(Duration::from_secs(1));
        // The first tick resolves immediately; consume it so the countdown
        // only moves a full second after the start intent
        interval.tick().await;

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    match state.tick() {
                        Ok(true) => {}
                        Ok(false) => {
                            debug!("Tick source halting");
                            break;
                        }
                        Err(e) => {
                            error!("Tick failed: {}", e);
                            break;
                        }
                    }
                }

                control = control_rx.recv() => match control {
                    Ok(TickerControl::Run) => interval.reset(),
                    Ok(TickerControl::Halt) => {
                        debug!("Tick source halted");
                        break;
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        warn!("Ticker control channel lagged by {} messages", skipped);
                    }
                    Err(RecvError::Closed) => return,
                }
            }
        }
    }
}
