//! Tomadoro - a terminal Pomodoro countdown with overtime tracking
//!
//! This library provides the countdown core (clock and session state
//! machine), the shared application state, and the background tasks that
//! drive the terminal presentation of a single timer session.

pub mod config;
pub mod services;
pub mod state;
pub mod tasks;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::{AppState, ClockMode, DisplaySnapshot, SessionEvent, TimerSession};
pub use utils::signals::shutdown_signal;
