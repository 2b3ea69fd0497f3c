//! End-to-end tests for the session lifecycle through `AppState`

use tokio::sync::broadcast::error::TryRecvError;
use tomadoro::state::{AppState, ClockMode, SessionEvent, TickerControl};

fn drain_events(rx: &mut tokio::sync::broadcast::Receiver<SessionEvent>) -> Vec<SessionEvent> {
    let mut events = Vec::new();
    loop {
        match rx.try_recv() {
            Ok(event) => events.push(event),
            Err(TryRecvError::Lagged(_)) => continue,
            Err(_) => break,
        }
    }
    events
}

#[tokio::test]
async fn starting_with_minutes_fills_the_clock() {
    let state = AppState::new(ClockMode::Overtime);
    let mut control_rx = state.control_tx.subscribe();

    state.start_session("40").expect("40 minutes is valid");

    {
        let session = state.session.lock().unwrap();
        let session = session.as_ref().expect("session was created");
        assert_eq!(session.remaining_seconds(), 40 * 60);
        assert_eq!(session.total_seconds(), 40 * 60);
    }

    let snapshot = state.display();
    assert!(snapshot.active);
    assert_eq!(snapshot.text, "40:00");
    assert!(!snapshot.paused);

    assert_eq!(control_rx.try_recv().unwrap(), TickerControl::Run);
}

#[tokio::test]
async fn invalid_input_creates_no_session() {
    let state = AppState::new(ClockMode::Overtime);

    for raw in ["0", "-5", "abc", "", "12.5", "10 minutes"] {
        let result = state.start_session(raw);
        assert!(result.is_err(), "input {:?} should be rejected", raw);
        assert!(state.session.lock().unwrap().is_none());
        assert!(!state.display().active);
    }
}

#[tokio::test]
async fn second_start_is_rejected_while_a_session_runs() {
    let state = AppState::new(ClockMode::Overtime);
    state.start_session("25").unwrap();
    assert!(state.start_session("10").is_err());

    let session = state.session.lock().unwrap();
    assert_eq!(session.as_ref().unwrap().total_seconds(), 25 * 60);
}

#[tokio::test]
async fn finish_signal_is_forwarded_exactly_once() {
    let state = AppState::new(ClockMode::Overtime);
    state.start_session("1").unwrap();
    let mut event_rx = state.event_tx.subscribe();

    for _ in 0..61 {
        state.tick().unwrap();
    }

    let events = drain_events(&mut event_rx);
    let finished = events
        .iter()
        .filter(|event| **event == SessionEvent::Finished)
        .count();
    assert_eq!(finished, 1);

    let snapshot = state.display();
    assert!(snapshot.finished);
    assert_eq!(snapshot.text, "-00:01");
}

#[tokio::test]
async fn overtime_warning_is_forwarded_at_half_the_total() {
    let state = AppState::new(ClockMode::Overtime);
    state.start_session("1").unwrap();
    let mut event_rx = state.event_tx.subscribe();

    for _ in 0..89 {
        state.tick().unwrap();
    }
    assert!(!drain_events(&mut event_rx)
        .contains(&SessionEvent::OvertimeWarningReached));
    assert!(!state.display().overtime_warned);

    state.tick().unwrap();
    let events = drain_events(&mut event_rx);
    assert!(events.contains(&SessionEvent::OvertimeWarningReached));
    assert!(state.display().overtime_warned);
    assert_eq!(state.display().text, "-00:30");
}

#[tokio::test]
async fn pause_halts_the_tick_source() {
    let state = AppState::new(ClockMode::Overtime);
    state.start_session("1").unwrap();
    let mut control_rx = state.control_tx.subscribe();

    state.tick().unwrap();
    assert_eq!(state.display().text, "00:59");

    assert!(state.toggle_pause().unwrap());
    assert_eq!(control_rx.try_recv().unwrap(), TickerControl::Halt);

    // A stray tick while paused must not move the clock
    assert!(!state.tick().unwrap());
    assert_eq!(state.display().text, "00:59");

    assert!(!state.toggle_pause().unwrap());
    assert_eq!(control_rx.try_recv().unwrap(), TickerControl::Run);
    assert!(state.tick().unwrap());
    assert_eq!(state.display().text, "00:58");
}

#[tokio::test]
async fn reset_is_idempotent_and_restarts_ticking() {
    let state = AppState::new(ClockMode::Overtime);
    state.start_session("1").unwrap();

    for _ in 0..95 {
        state.tick().unwrap();
    }
    state.toggle_pause().unwrap();
    let mut control_rx = state.control_tx.subscribe();

    for _ in 0..3 {
        state.reset().unwrap();
        let snapshot = state.display();
        assert!(snapshot.active);
        assert_eq!(snapshot.text, "01:00");
        assert!(!snapshot.paused);
        assert!(!snapshot.finished);
        assert!(!snapshot.overtime_warned);
        assert_eq!(control_rx.try_recv().unwrap(), TickerControl::Run);
    }
}

#[tokio::test]
async fn stop_drops_the_session_and_returns_to_setup() {
    let state = AppState::new(ClockMode::Overtime);
    state.start_session("5").unwrap();
    let mut control_rx = state.control_tx.subscribe();

    state.stop().unwrap();

    assert!(state.session.lock().unwrap().is_none());
    assert!(!state.display().active);
    assert_eq!(control_rx.try_recv().unwrap(), TickerControl::Halt);

    // Pause and reset have nothing to act on afterwards
    assert!(state.toggle_pause().is_err());
    assert!(state.reset().is_err());
}

#[tokio::test]
async fn clamped_session_stops_ticking_at_zero() {
    let state = AppState::new(ClockMode::Clamped);
    state.start_session("1").unwrap();
    let mut event_rx = state.event_tx.subscribe();

    let mut keep = true;
    let mut ticks = 0;
    while keep && ticks < 100 {
        keep = state.tick().unwrap();
        ticks += 1;
    }
    assert_eq!(ticks, 60);
    assert_eq!(state.display().text, "00:00");

    // Stray ticks after exhaustion never underflow
    for _ in 0..5 {
        assert!(!state.tick().unwrap());
    }
    assert_eq!(state.display().text, "00:00");

    let finished = drain_events(&mut event_rx)
        .iter()
        .filter(|event| **event == SessionEvent::Finished)
        .count();
    assert_eq!(finished, 1);
}
