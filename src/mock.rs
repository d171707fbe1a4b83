//! Simulated pins and delay for host tests.

use core::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::pins::{BusyDelay, GpioPin, InputPin, Level};
use crate::stop::StopSignal;

/// Something a simulated peripheral did, in the order it happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Set(Level),
    Wait(u32),
}

/// Event log shared between simulated peripherals.
pub type Journal = Rc<RefCell<Vec<Event>>>;

pub fn journal() -> Journal {
    Rc::new(RefCell::new(Vec::new()))
}

/// Output pin that remembers every level written to it.
#[derive(Debug)]
pub struct MockOutput {
    level: Level,
    history: Vec<Level>,
    journal: Option<Journal>,
}

impl MockOutput {
    pub fn new(initial: Level) -> Self {
        Self {
            level: initial,
            history: Vec::new(),
            journal: None,
        }
    }

    /// Also appends every write to `journal`.
    pub fn with_journal(initial: Level, journal: Journal) -> Self {
        Self {
            journal: Some(journal),
            ..Self::new(initial)
        }
    }

    fn record(&mut self, level: Level) {
        self.level = level;
        self.history.push(level);
        if let Some(journal) = &self.journal {
            journal.borrow_mut().push(Event::Set(level));
        }
    }

    /// Levels written since construction, oldest first.
    pub fn history(&self) -> &[Level] {
        &self.history
    }
}

impl GpioPin for MockOutput {
    fn set_high(&mut self) {
        self.record(Level::High);
    }

    fn set_low(&mut self) {
        self.record(Level::Low);
    }

    fn level(&self) -> Level {
        self.level
    }
}

/// Input pin that replays a fixed sequence of levels, one per read.
///
/// Reading past the end of the script panics, which is how tests observe a
/// loop that keeps polling forever.
#[derive(Debug)]
pub struct ScriptedInput {
    script: Vec<Level>,
    cursor: Cell<usize>,
    repeat_last: bool,
}

impl ScriptedInput {
    pub fn new(script: impl IntoIterator<Item = Level>) -> Self {
        Self {
            script: script.into_iter().collect(),
            cursor: Cell::new(0),
            repeat_last: false,
        }
    }

    /// An input that never changes.
    pub fn constant(level: Level) -> Self {
        Self {
            script: vec![level],
            cursor: Cell::new(0),
            repeat_last: true,
        }
    }

    pub fn reads(&self) -> usize {
        self.cursor.get()
    }

    pub fn exhausted(&self) -> bool {
        !self.repeat_last && self.cursor.get() >= self.script.len()
    }
}

impl InputPin for ScriptedInput {
    fn level(&self) -> Level {
        let n = self.cursor.get();
        self.cursor.set(n + 1);
        match self.script.get(n) {
            Some(level) => *level,
            None if self.repeat_last => *self.script.last().expect("constant script has a level"),
            None => panic!("input script exhausted after {} reads", n),
        }
    }
}

/// Delay that returns immediately and records what was asked for.
#[derive(Debug, Default)]
pub struct MockDelay {
    waits: Vec<u32>,
    journal: Option<Journal>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also appends every wait to `journal`.
    pub fn with_journal(journal: Journal) -> Self {
        Self {
            waits: Vec::new(),
            journal: Some(journal),
        }
    }

    pub fn waits(&self) -> &[u32] {
        &self.waits
    }

    pub fn total_ms(&self) -> u64 {
        self.waits.iter().map(|ms| u64::from(*ms)).sum()
    }
}

impl BusyDelay for MockDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.waits.push(ms);
        if let Some(journal) = &self.journal {
            journal.borrow_mut().push(Event::Wait(ms));
        }
    }
}

/// Lets a loop run for a fixed number of iterations.
#[derive(Debug)]
pub struct StopAfter {
    remaining: Cell<usize>,
}

impl StopAfter {
    pub fn new(iterations: usize) -> Self {
        Self {
            remaining: Cell::new(iterations),
        }
    }
}

impl StopSignal for StopAfter {
    fn should_stop(&self) -> bool {
        match self.remaining.get() {
            0 => true,
            n => {
                self.remaining.set(n - 1);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_input_replays_in_order() {
        let input = ScriptedInput::new([Level::Low, Level::High, Level::Low]);
        assert_eq!(input.level(), Level::Low);
        assert_eq!(input.level(), Level::High);
        assert_eq!(input.level(), Level::Low);
        assert_eq!(input.reads(), 3);
        assert!(input.exhausted());
    }

    #[test]
    #[should_panic(expected = "input script exhausted")]
    fn scripted_input_panics_when_exhausted() {
        let input = ScriptedInput::new([Level::High]);
        input.level();
        input.level();
    }

    #[test]
    fn mock_delay_records_waits() {
        let mut delay = MockDelay::new();
        delay.delay_ms(1000);
        delay.delay_ms(250);
        assert_eq!(delay.waits(), &[1000, 250]);
        assert_eq!(delay.total_ms(), 1250);
    }

    #[test]
    fn journal_interleaves_pin_and_delay() {
        let log = journal();
        let mut led = MockOutput::with_journal(Level::Low, log.clone());
        let mut delay = MockDelay::with_journal(log.clone());
        delay.delay_ms(5);
        led.set_high();
        led.set_low();
        delay.delay_ms(7);
        assert_eq!(
            *log.borrow(),
            [
                Event::Wait(5),
                Event::Set(Level::High),
                Event::Set(Level::Low),
                Event::Wait(7),
            ]
        );
        assert_eq!(led.history(), &[Level::High, Level::Low]);
        assert_eq!(delay.waits(), &[5, 7]);
    }

    #[test]
    fn stop_after_counts_checks() {
        let stop = StopAfter::new(2);
        assert!(!stop.should_stop());
        assert!(!stop.should_stop());
        assert!(stop.should_stop());
        assert!(stop.should_stop());
    }
}
