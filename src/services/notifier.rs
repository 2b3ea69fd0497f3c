//! Desktop notification surface

use notify_rust::{Notification, NotificationHandle, Urgency};
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, warn};

use crate::state::{SessionEvent, SharedState};

/// Background task that owns the finish notification.
///
/// Shows a desktop notification when the session finishes and closes it as
/// soon as the session is no longer finished (reset or stop), so a stale
/// notification never outlives its run. Delivery failures are logged and
/// ignored; a missing notification daemon must never take the timer down.
pub async fn notifier_task(state: SharedState) {
    let mut event_rx = state.event_tx.subscribe();
    let mut display_rx = state.display_tx.subscribe();
    let mut handle: Option<NotificationHandle> = None;

    loop {
        tokio::select! {
            event = event_rx.recv() => match event {
                Ok(SessionEvent::Finished) => {
                    if handle.is_none() {
                        handle = show_finish_notification();
                    }
                }
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Notifier event channel lagged by {} messages", skipped);
                }
                Err(RecvError::Closed) => break,
            },

            changed = display_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let finished = display_rx.borrow_and_update().finished;
                if !finished {
                    if let Some(open) = handle.take() {
                        debug!("Dismissing finish notification");
                        open.close();
                    }
                }
            }
        }
    }
}

fn show_finish_notification() -> Option<NotificationHandle> {
    match Notification::new()
        .summary("Timer Finished!")
        .body("The countdown reached zero.")
        .appname("tomadoro")
        .icon("alarm-clock")
        .urgency(Urgency::Critical)
        .show()
    {
        Ok(handle) => Some(handle),
        Err(e) => {
            warn!("Failed to show finish notification: {}", e);
            None
        }
    }
}
