//! External side-effect module
//!
//! This module contains the desktop notification surface.

pub mod notifier;

// Re-export main functions
pub use notifier::notifier_task;
