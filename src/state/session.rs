//! Timer session state machine
//!
//! A session owns one countdown clock and mediates the transitions between
//! running, paused, finished and overtime-warned. The finish and overtime
//! signals are each emitted at most once per run, until a reset.

use serde::{Deserialize, Serialize};

use super::clock::{ClockMode, CountdownClock};

/// Outbound signal produced by a session tick or state change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The displayed time changed
    TimeUpdated(String),
    /// The countdown crossed zero for the first time this run
    Finished,
    /// The countdown reached -50% of the total for the first time this run
    OvertimeWarningReached,
}

/// Coarse session phase, derived from the flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionPhase {
    Running,
    Paused,
    Finished,
    OvertimeWarned,
}

/// A running timer session and its transition flags
#[derive(Debug, Clone)]
pub struct TimerSession {
    clock: CountdownClock,
    paused: bool,
    finished: bool,
    overtime_warned: bool,
}

impl TimerSession {
    /// Start a session counting down from `minutes` (must be positive,
    /// pre-validated by the caller)
    pub fn start(minutes: i64, mode: ClockMode) -> Self {
        Self::from_clock(CountdownClock::from_minutes(minutes, mode))
    }

    /// Start a session over an already-built clock
    pub fn from_clock(clock: CountdownClock) -> Self {
        Self {
            clock,
            paused: false,
            finished: false,
            overtime_warned: false,
        }
    }

    /// Advance the session by one tick and collect the signals it produced.
    ///
    /// The finish check runs before the overtime check, so a very short
    /// total can emit both signals from the same tick.
    pub fn tick(&mut self) -> Vec<SessionEvent> {
        if self.paused {
            return Vec::new();
        }

        self.clock.advance();
        let mut events = Vec::new();

        match self.clock.mode() {
            ClockMode::Overtime => {
                if !self.finished && self.clock.is_elapsed() {
                    self.finished = true;
                    events.push(SessionEvent::Finished);
                }
                if self.finished && !self.overtime_warned && self.clock.overtime_reached() {
                    self.overtime_warned = true;
                    events.push(SessionEvent::OvertimeWarningReached);
                }
            }
            ClockMode::Clamped => {
                if !self.finished && self.clock.is_exhausted() {
                    self.finished = true;
                    events.push(SessionEvent::Finished);
                }
            }
        }

        events.insert(0, SessionEvent::TimeUpdated(self.clock.formatted_text()));
        events
    }

    /// Flip the pause flag. The tick source is expected to halt while
    /// paused; remaining time is untouched either way.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Restore the session to a fresh run of the same duration
    pub fn reset(&mut self) {
        self.clock.reset();
        self.paused = false;
        self.finished = false;
        self.overtime_warned = false;
    }

    /// Check whether the tick source still has work to do
    pub fn keep_ticking(&self) -> bool {
        !self.clock.is_exhausted()
    }

    /// Current phase for presentation purposes
    pub fn phase(&self) -> SessionPhase {
        if self.overtime_warned {
            SessionPhase::OvertimeWarned
        } else if self.finished {
            SessionPhase::Finished
        } else if self.paused {
            SessionPhase::Paused
        } else {
            SessionPhase::Running
        }
    }

    pub fn formatted_text(&self) -> String {
        self.clock.formatted_text()
    }

    pub fn remaining_seconds(&self) -> i64 {
        self.clock.remaining_seconds()
    }

    pub fn total_seconds(&self) -> i64 {
        self.clock.total_seconds()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn is_overtime_warned(&self) -> bool {
        self.overtime_warned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_events(events: &[SessionEvent], wanted: &SessionEvent) -> usize {
        events.iter().filter(|event| *event == wanted).count()
    }

    #[test]
    fn finish_fires_once_when_crossing_below_zero() {
        let mut session = TimerSession::start(1, ClockMode::Overtime);
        let mut finished_signals = 0;

        for _ in 0..61 {
            finished_signals += count_events(&session.tick(), &SessionEvent::Finished);
        }

        assert_eq!(session.remaining_seconds(), -1);
        assert!(session.is_finished());
        assert_eq!(finished_signals, 1);
    }

    #[test]
    fn zero_is_not_finished_yet() {
        let mut session = TimerSession::start(1, ClockMode::Overtime);
        for _ in 0..60 {
            session.tick();
        }
        assert_eq!(session.remaining_seconds(), 0);
        assert!(!session.is_finished());

        let events = session.tick();
        assert_eq!(session.remaining_seconds(), -1);
        assert!(session.is_finished());
        assert_eq!(count_events(&events, &SessionEvent::Finished), 1);
    }

    #[test]
    fn overtime_warning_fires_exactly_at_half_the_total() {
        let mut session = TimerSession::start(1, ClockMode::Overtime);
        let mut warnings = 0;

        for _ in 0..89 {
            warnings += count_events(&session.tick(), &SessionEvent::OvertimeWarningReached);
        }
        assert_eq!(session.remaining_seconds(), -29);
        assert_eq!(warnings, 0);

        let events = session.tick();
        assert_eq!(session.remaining_seconds(), -30);
        assert_eq!(count_events(&events, &SessionEvent::OvertimeWarningReached), 1);
        assert!(session.is_overtime_warned());

        for _ in 0..30 {
            warnings += count_events(&session.tick(), &SessionEvent::OvertimeWarningReached);
        }
        assert_eq!(warnings, 0);
    }

    #[test]
    fn tiny_total_can_finish_and_warn_on_the_same_tick() {
        // 2-second clock: -1 is both below zero and at the -50% threshold
        let mut session = TimerSession::from_clock(CountdownClock::new(2, ClockMode::Overtime));
        for _ in 0..2 {
            session.tick();
        }
        let events = session.tick();
        assert_eq!(session.remaining_seconds(), -1);
        assert_eq!(count_events(&events, &SessionEvent::Finished), 1);
        assert_eq!(count_events(&events, &SessionEvent::OvertimeWarningReached), 1);
    }

    #[test]
    fn clamped_session_stops_at_zero_and_finishes_once() {
        let mut session = TimerSession::from_clock(CountdownClock::new(3, ClockMode::Clamped));
        let mut finished_signals = 0;

        for _ in 0..10 {
            finished_signals += count_events(&session.tick(), &SessionEvent::Finished);
        }

        assert_eq!(session.remaining_seconds(), 0);
        assert_eq!(finished_signals, 1);
        assert!(!session.keep_ticking());
        assert!(!session.is_overtime_warned());
    }

    #[test]
    fn tick_while_paused_changes_nothing() {
        let mut session = TimerSession::start(1, ClockMode::Overtime);
        session.tick();
        session.toggle_pause();

        assert!(session.tick().is_empty());
        assert_eq!(session.remaining_seconds(), 59);
    }

    #[test]
    fn double_toggle_restores_pause_state() {
        let mut session = TimerSession::start(1, ClockMode::Overtime);
        assert!(!session.is_paused());
        assert!(session.toggle_pause());
        assert!(!session.toggle_pause());

        session.tick();
        assert_eq!(session.remaining_seconds(), 59);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut session = TimerSession::start(1, ClockMode::Overtime);
        for _ in 0..95 {
            session.tick();
        }
        session.toggle_pause();

        for _ in 0..3 {
            session.reset();
            assert_eq!(session.remaining_seconds(), 60);
            assert!(!session.is_paused());
            assert!(!session.is_finished());
            assert!(!session.is_overtime_warned());
        }
    }

    #[test]
    fn phase_follows_the_state_machine() {
        let mut session = TimerSession::start(1, ClockMode::Overtime);
        assert_eq!(session.phase(), SessionPhase::Running);

        session.toggle_pause();
        assert_eq!(session.phase(), SessionPhase::Paused);
        session.toggle_pause();

        for _ in 0..61 {
            session.tick();
        }
        assert_eq!(session.phase(), SessionPhase::Finished);

        for _ in 0..29 {
            session.tick();
        }
        assert_eq!(session.phase(), SessionPhase::OvertimeWarned);

        session.reset();
        assert_eq!(session.phase(), SessionPhase::Running);
    }

    #[test]
    fn every_tick_reports_the_new_time() {
        let mut session = TimerSession::start(1, ClockMode::Overtime);
        let events = session.tick();
        assert_eq!(events[0], SessionEvent::TimeUpdated("00:59".to_string()));
    }
}
