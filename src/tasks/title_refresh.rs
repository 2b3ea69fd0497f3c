//! Terminal title re-assert background task

use std::io;
use std::time::Duration;

use crossterm::{execute, terminal::SetTitle};
use tokio::time;
use tracing::debug;

use crate::state::SharedState;

/// Background task that rewrites the terminal title every 2 seconds.
///
/// Shells and multiplexers overwrite the title at will, so it is
/// re-asserted on a fixed cadence rather than set once. Reads the display
/// watch channel only; no mutable state is shared with the session.
pub async fn title_refresh_task(state: SharedState) {
    let display_rx = state.display_tx.subscribe();
    let mut interval = time::interval(Duration::from_secs(2));

    loop {
        interval.tick().await;

        let title = {
            let snapshot = display_rx.borrow();
            if snapshot.active {
                format!("tomadoro {}", snapshot.text)
            } else {
                "tomadoro".to_string()
            }
        };

        if execute!(io::stdout(), SetTitle(title)).is_err() {
            debug!("Terminal title update failed, stopping refresh task");
            break;
        }
    }
}
