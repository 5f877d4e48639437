use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};

/// Event the app loop reacts to: a keypress, a terminal resize, or a
/// timer tick driving animations
#[derive(Clone, Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    Tick,
}

/// Where the loop's events come from. The production source reads the
/// terminal; tests substitute a scripted queue.
pub trait EventSource {
    /// Block for up to `wait` for the next input event. `None` means
    /// the time elapsed without input.
    fn next_event(&mut self, wait: Duration) -> Option<AppEvent>;
}

/// Forwards crossterm events from a background reader thread
pub struct TerminalEvents {
    rx: Receiver<AppEvent>,
}

impl TerminalEvents {
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            let forwarded = match event::read() {
                Ok(Event::Key(key)) => tx.send(AppEvent::Key(key)),
                Ok(Event::Resize(_, _)) => tx.send(AppEvent::Resize),
                Ok(_) => Ok(()),
                Err(_) => break,
            };
            if forwarded.is_err() {
                break;
            }
        });

        Self { rx }
    }
}

impl EventSource for TerminalEvents {
    fn next_event(&mut self, wait: Duration) -> Option<AppEvent> {
        match self.rx.recv_timeout(wait) {
            Ok(ev) => Some(ev),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }
}

/// Scripted source for headless tests: hands out its queued events in
/// order, then runs dry forever
#[derive(Debug, Default)]
pub struct ScriptedEvents {
    queue: VecDeque<AppEvent>,
}

impl ScriptedEvents {
    pub fn new(events: impl IntoIterator<Item = AppEvent>) -> Self {
        Self {
            queue: events.into_iter().collect(),
        }
    }

    pub fn push(&mut self, event: AppEvent) {
        self.queue.push_back(event);
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self, _wait: Duration) -> Option<AppEvent> {
        self.queue.pop_front()
    }
}

/// Paces an event source at a fixed tick rate: input when there is
/// some, a `Tick` whenever the interval passes quietly
pub struct Runner<S: EventSource> {
    source: S,
    tick_every: Duration,
}

impl<S: EventSource> Runner<S> {
    pub fn new(source: S, tick_every: Duration) -> Self {
        Self { source, tick_every }
    }

    pub fn step(&mut self) -> AppEvent {
        self.source
            .next_event(self.tick_every)
            .unwrap_or(AppEvent::Tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn step_yields_tick_when_quiet() {
        let mut runner = Runner::new(ScriptedEvents::default(), Duration::from_millis(1));

        for _ in 0..3 {
            assert!(matches!(runner.step(), AppEvent::Tick));
        }
    }

    #[test]
    fn scripted_events_drain_in_order() {
        let key = AppEvent::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
        let mut runner = Runner::new(
            ScriptedEvents::new([key, AppEvent::Resize]),
            Duration::from_millis(1),
        );

        assert!(matches!(runner.step(), AppEvent::Key(_)));
        assert!(matches!(runner.step(), AppEvent::Resize));
        assert!(matches!(runner.step(), AppEvent::Tick));
    }

    #[test]
    fn push_extends_a_running_script() {
        let mut source = ScriptedEvents::default();
        source.push(AppEvent::Resize);
        let mut runner = Runner::new(source, Duration::from_millis(1));

        assert!(matches!(runner.step(), AppEvent::Resize));
        assert!(matches!(runner.step(), AppEvent::Tick));
    }
}
