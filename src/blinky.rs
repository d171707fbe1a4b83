use crate::{
    log_trace,
    pins::{BusyDelay, GpioPin, Level},
    stop::StopSignal,
};

/// Toggles one output and busy-waits a fixed interval between toggles.
pub struct BlinkyRunner<T, D>
where
    T: GpioPin,
    D: BusyDelay,
{
    led: T,
    delay: D,
    interval_ms: u32,
    toggles: usize,
}

impl<T: GpioPin, D: BusyDelay> BlinkyRunner<T, D> {
    pub fn new(led: T, delay: D, interval_ms: u32) -> Self {
        Self {
            led,
            delay,
            interval_ms,
            toggles: 0,
        }
    }

    /// One iteration: invert the LED, then hold the core for the interval.
    pub fn step(&mut self) -> Level {
        let level = self.led.toggle();
        self.toggles += 1;
        log_trace!("blink {} -> {:?}", self.toggles, level);
        self.delay.delay_ms(self.interval_ms);
        level
    }

    pub fn run(&mut self) -> ! {
        loop {
            self.step();
        }
    }

    /// Like [`run`](Self::run), but checks `stop` before every toggle.
    /// Returns how many toggles happened.
    pub fn run_until(&mut self, stop: &impl StopSignal) -> usize {
        let start = self.toggles;
        while !stop.should_stop() {
            self.step();
        }
        self.toggles - start
    }

    pub fn toggles(&self) -> usize {
        self.toggles
    }

    pub fn led(&self) -> &T {
        &self.led
    }
}
