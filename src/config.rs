//! Configuration and CLI argument handling

use clap::Parser;

use crate::state::ClockMode;

/// CLI argument parsing structure
#[derive(Parser)]
#[command(name = "tomadoro")]
#[command(about = "A terminal Pomodoro countdown with overtime tracking")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Minutes prefilled in the setup view
    #[arg(short, long, default_value = "40")]
    pub minutes: u64,

    /// Stop at zero instead of counting into overtime
    #[arg(long)]
    pub clamp: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the countdown policy selected on the command line
    pub fn clock_mode(&self) -> ClockMode {
        if self.clamp {
            ClockMode::Clamped
        } else {
            ClockMode::Overtime
        }
    }

    /// Get the appropriate log level based on verbose flag.
    ///
    /// The default is quiet because stderr usually shares the tty with the
    /// countdown view.
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
