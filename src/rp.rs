// RP chip implementations
use crate::pins::{BusyDelay, GpioPin, InputPin, Level};
use embassy_rp::gpio::{self, Input, Output};
use embassy_time::{block_for, Delay, Duration};

impl From<Level> for gpio::Level {
    fn from(level: Level) -> Self {
        match level {
            Level::Low => gpio::Level::Low,
            Level::High => gpio::Level::High,
        }
    }
}

impl From<gpio::Level> for Level {
    fn from(level: gpio::Level) -> Self {
        match level {
            gpio::Level::Low => Level::Low,
            gpio::Level::High => Level::High,
        }
    }
}

impl GpioPin for Output<'_> {
    fn set_high(&mut self) {
        Output::set_high(self);
    }

    fn set_low(&mut self) {
        Output::set_low(self);
    }

    fn level(&self) -> Level {
        self.get_output_level().into()
    }

    fn toggle(&mut self) -> Level {
        Output::toggle(self);
        GpioPin::level(self)
    }
}

impl InputPin for Input<'_> {
    fn level(&self) -> Level {
        self.get_level().into()
    }
}

impl BusyDelay for Delay {
    fn delay_ms(&mut self, ms: u32) {
        block_for(Duration::from_millis(ms.into()));
    }
}
