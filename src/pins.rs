use core::ops::Not;

/// Logic level of a GPIO line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "rp2040", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl Not for Level {
    type Output = Level;

    fn not(self) -> Level {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> bool {
        level == Level::High
    }
}

/// A pin configured as an output. The direction is fixed by the type.
pub trait GpioPin {
    fn set_high(&mut self);
    fn set_low(&mut self);

    /// Level currently driven on the pin.
    fn level(&self) -> Level;

    fn set_level(&mut self, level: Level) {
        match level {
            Level::High => self.set_high(),
            Level::Low => self.set_low(),
        }
    }

    /// Inverts the driven level and returns the new one.
    fn toggle(&mut self) -> Level {
        let next = !self.level();
        self.set_level(next);
        next
    }
}

/// A pin configured as an input.
pub trait InputPin {
    fn level(&self) -> Level;
}

/// Blocking wait that holds the core for the whole duration.
pub trait BusyDelay {
    fn delay_ms(&mut self, ms: u32);
}
