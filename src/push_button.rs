use crate::{
    config::BUTTON_PRESSED_LEVEL,
    log_debug, log_info,
    pins::{GpioPin, InputPin, Level},
    stop::StopSignal,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "rp2040", derive(defmt::Format))]
pub enum ButtonState {
    /// Waiting for a press; the LED is left alone.
    Idle,
    /// Press seen, waiting for release.
    Pressed,
}

/// Toggles the LED once per press-then-release of the button.
///
/// There is no debounce filtering: release is detected by polling until the
/// input first reads low, and a press that is never released blocks forever.
pub struct PushButtonRunner<B, T>
where
    B: InputPin,
    T: GpioPin,
{
    button: B,
    led: T,
    state: ButtonState,
    toggles: usize,
}

impl<B: InputPin, T: GpioPin> PushButtonRunner<B, T> {
    pub fn new(button: B, led: T) -> Self {
        Self {
            button,
            led,
            state: ButtonState::Idle,
            toggles: 0,
        }
    }

    /// One pass of the outer loop. Returns the new LED level if a full press
    /// and release was seen.
    pub fn poll(&mut self) -> Option<Level> {
        if self.button.level() != BUTTON_PRESSED_LEVEL {
            return None;
        }

        self.state = ButtonState::Pressed;
        log_debug!("button pressed");

        while self.button.level() == BUTTON_PRESSED_LEVEL {
            core::hint::spin_loop();
        }

        let level = self.led.toggle();
        self.toggles += 1;
        self.state = ButtonState::Idle;
        log_info!("button released, led -> {:?}", level);
        Some(level)
    }

    pub fn run(&mut self) -> ! {
        loop {
            self.poll();
        }
    }

    /// Like [`run`](Self::run), but checks `stop` between polls. The check is
    /// never made while waiting for a release. Returns how many toggles
    /// happened.
    pub fn run_until(&mut self, stop: &impl StopSignal) -> usize {
        let start = self.toggles;
        while !stop.should_stop() {
            self.poll();
        }
        self.toggles - start
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    pub fn toggles(&self) -> usize {
        self.toggles
    }

    pub fn led(&self) -> &T {
        &self.led
    }

    pub fn button(&self) -> &B {
        &self.button
    }
}
