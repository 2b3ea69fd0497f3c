//! State management module
//!
//! This module contains the countdown core and its management logic.

pub mod app_state;
pub mod clock;
pub mod session;

// Re-export main types
pub use app_state::{AppState, DisplaySnapshot, SharedState, TickerControl};
pub use clock::{ClockMode, CountdownClock};
pub use session::{SessionEvent, SessionPhase, TimerSession};
