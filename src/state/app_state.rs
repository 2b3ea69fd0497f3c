//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, watch};
use tracing::{info, warn};

use super::{ClockMode, SessionEvent, TimerSession};

/// Control message for the tick source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerControl {
    /// Start (or resume) ticking once per second
    Run,
    /// Stop ticking until the next `Run`
    Halt,
}

/// Everything the presentation layer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySnapshot {
    /// A session exists; false means the setup view is showing
    pub active: bool,
    /// Formatted `mm:ss` countdown text
    pub text: String,
    pub paused: bool,
    pub finished: bool,
    pub overtime_warned: bool,
}

impl DisplaySnapshot {
    fn inactive() -> Self {
        Self {
            active: false,
            text: String::new(),
            paused: false,
            finished: false,
            overtime_warned: false,
        }
    }

    fn of(session: &TimerSession) -> Self {
        Self {
            active: true,
            text: session.formatted_text(),
            paused: session.is_paused(),
            finished: session.is_finished(),
            overtime_warned: session.is_overtime_warned(),
        }
    }
}

/// Main application state mediating between the session and its collaborators
#[derive(Debug)]
pub struct AppState {
    /// The one running session, if any
    pub session: Mutex<Option<TimerSession>>,
    /// Countdown policy applied to every new session
    pub clock_mode: ClockMode,
    /// Process metadata
    pub start_time: Instant,
    /// Last user intent tracking
    pub last_action: Mutex<Option<String>>,
    pub last_action_time: Mutex<Option<DateTime<Utc>>>,
    /// Channel driving the tick source
    pub control_tx: broadcast::Sender<TickerControl>,
    /// Channel for finish/overtime signals
    pub event_tx: broadcast::Sender<SessionEvent>,
    /// Channel for display updates
    pub display_tx: watch::Sender<DisplaySnapshot>,
    /// Keep the receiver alive to prevent channel closure
    pub _display_rx: watch::Receiver<DisplaySnapshot>,
}

impl AppState {
    /// Create a new AppState with no running session
    pub fn new(clock_mode: ClockMode) -> Self {
        let (control_tx, _) = broadcast::channel(16);
        let (event_tx, _) = broadcast::channel(256);
        let (display_tx, display_rx) = watch::channel(DisplaySnapshot::inactive());

        Self {
            session: Mutex::new(None),
            clock_mode,
            start_time: Instant::now(),
            last_action: Mutex::new(None),
            last_action_time: Mutex::new(None),
            control_tx,
            event_tx,
            display_tx,
            _display_rx: display_rx,
        }
    }

    /// Start a session from the raw minutes string typed in the setup view.
    ///
    /// Non-numeric or non-positive input is rejected without touching any
    /// state; the returned message is surfaced as the user-facing warning.
    pub fn start_session(&self, raw_minutes: &str) -> Result<(), String> {
        let minutes = raw_minutes
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|minutes| *minutes > 0)
            .ok_or_else(|| "Please enter a valid number of minutes.".to_string())?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| format!("Failed to lock session: {}", e))?;
        if session.is_some() {
            return Err("A timer session is already running.".to_string());
        }

        info!("Starting {} minute session ({:?})", minutes, self.clock_mode);
        let new_session = TimerSession::start(minutes, self.clock_mode);
        self.publish_display(DisplaySnapshot::of(&new_session));
        *session = Some(new_session);
        drop(session);

        self.record_action("start");
        self.send_control(TickerControl::Run);
        Ok(())
    }

    /// Advance the session by one tick and forward the resulting signals.
    ///
    /// Returns whether the tick source should keep running.
    pub fn tick(&self) -> Result<bool, String> {
        let (events, keep_ticking) = {
            let mut session = self
                .session
                .lock()
                .map_err(|e| format!("Failed to lock session: {}", e))?;

            let Some(session) = session.as_mut() else {
                return Ok(false);
            };

            let events = session.tick();
            if !events.is_empty() {
                self.publish_display(DisplaySnapshot::of(session));
            }
            (events, session.keep_ticking() && !session.is_paused())
        };

        for event in events {
            match &event {
                SessionEvent::TimeUpdated(_) => {}
                SessionEvent::Finished => info!("Session finished, entering overtime"),
                SessionEvent::OvertimeWarningReached => info!("Overtime warning threshold reached"),
            }
            if let Err(e) = self.event_tx.send(event) {
                warn!("Failed to send session event: {}", e);
            }
        }

        Ok(keep_ticking)
    }

    /// Flip the pause flag, halting or resuming the tick source
    pub fn toggle_pause(&self) -> Result<bool, String> {
        let paused = {
            let mut session = self
                .session
                .lock()
                .map_err(|e| format!("Failed to lock session: {}", e))?;
            let session = session.as_mut().ok_or("No active session to pause")?;

            let paused = session.toggle_pause();
            self.publish_display(DisplaySnapshot::of(session));
            paused
        };

        info!("Session {}", if paused { "paused" } else { "resumed" });
        self.record_action(if paused { "pause" } else { "resume" });
        self.send_control(if paused {
            TickerControl::Halt
        } else {
            TickerControl::Run
        });
        Ok(paused)
    }

    /// Restore the session to a fresh run and restart the tick source
    pub fn reset(&self) -> Result<(), String> {
        {
            let mut session = self
                .session
                .lock()
                .map_err(|e| format!("Failed to lock session: {}", e))?;
            let session = session.as_mut().ok_or("No active session to reset")?;

            session.reset();
            self.publish_display(DisplaySnapshot::of(session));
        }

        info!("Session reset");
        self.record_action("reset");
        self.send_control(TickerControl::Run);
        Ok(())
    }

    /// Terminate the session and return to the setup view
    pub fn stop(&self) -> Result<(), String> {
        let mut session = self
            .session
            .lock()
            .map_err(|e| format!("Failed to lock session: {}", e))?;

        if session.take().is_some() {
            info!("Session stopped");
        }
        self.publish_display(DisplaySnapshot::inactive());
        drop(session);

        self.record_action("stop");
        self.send_control(TickerControl::Halt);
        Ok(())
    }

    /// Get the current display snapshot
    pub fn display(&self) -> DisplaySnapshot {
        self.display_tx.borrow().clone()
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }

    /// Calculate process uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    fn publish_display(&self, snapshot: DisplaySnapshot) {
        if let Err(e) = self.display_tx.send(snapshot) {
            warn!("Failed to send display update: {}", e);
        }
    }

    fn send_control(&self, control: TickerControl) {
        // A send error only means no ticker task has subscribed yet
        if let Err(e) = self.control_tx.send(control) {
            warn!("Failed to send ticker control: {}", e);
        }
    }

    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }
}

/// Shared handle used by the UI and background tasks
pub type SharedState = Arc<AppState>;
