//! Countdown clock structure and formatting

use serde::{Deserialize, Serialize};

/// Policy for what happens once the countdown reaches zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClockMode {
    /// Stop at zero, never underflow
    Clamped,
    /// Keep counting into negative values
    Overtime,
}

/// Countdown clock - holds the total and remaining duration in whole seconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownClock {
    total_seconds: i64,
    remaining_seconds: i64,
    mode: ClockMode,
}

impl CountdownClock {
    /// Create a clock counting down from `total_seconds` (must be positive,
    /// pre-validated by the caller)
    pub fn new(total_seconds: i64, mode: ClockMode) -> Self {
        Self {
            total_seconds,
            remaining_seconds: total_seconds,
            mode,
        }
    }

    /// Create a clock from a minute count
    pub fn from_minutes(minutes: i64, mode: ClockMode) -> Self {
        Self::new(minutes * 60, mode)
    }

    /// Advance the clock by one second
    pub fn advance(&mut self) {
        match self.mode {
            ClockMode::Clamped => {
                if self.remaining_seconds > 0 {
                    self.remaining_seconds -= 1;
                }
            }
            ClockMode::Overtime => {
                self.remaining_seconds -= 1;
            }
        }
    }

    /// Restore the clock to its full duration
    pub fn reset(&mut self) {
        self.remaining_seconds = self.total_seconds;
    }

    /// Get the remaining seconds (negative once an overtime clock passes zero)
    pub fn remaining_seconds(&self) -> i64 {
        self.remaining_seconds
    }

    /// Get the total seconds the clock was constructed with
    pub fn total_seconds(&self) -> i64 {
        self.total_seconds
    }

    /// Get the clock mode
    pub fn mode(&self) -> ClockMode {
        self.mode
    }

    /// Check if the remaining time has gone below zero
    pub fn is_elapsed(&self) -> bool {
        self.remaining_seconds < 0
    }

    /// Check if a clamped clock has run out and ticking can stop
    pub fn is_exhausted(&self) -> bool {
        self.mode == ClockMode::Clamped && self.remaining_seconds == 0
    }

    /// Check if the overtime warning threshold (-50% of the total) is reached
    pub fn overtime_reached(&self) -> bool {
        self.remaining_seconds as f64 <= self.total_seconds as f64 * -0.5
    }

    /// Render the remaining time as `mm:ss`, with a `-` prefix once negative
    pub fn formatted_text(&self) -> String {
        let sign = if self.remaining_seconds < 0 { "-" } else { "" };
        let abs = self.remaining_seconds.abs();
        format!("{}{:02}:{:02}", sign, abs / 60, abs % 60)
    }
}
