//! Background tasks module
//!
//! This module contains background tasks that run alongside the terminal UI.

pub mod ticker;
pub mod title_refresh;

// Re-export main functions
pub use ticker::ticker_task;
pub use title_refresh::title_refresh_task;
