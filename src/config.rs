//! Compile-time settings shared by both firmware images.
//!
//! Pin numbers live in the binaries since they select embassy peripherals by
//! type (`PIN_25` for the LED, `PIN_15` for the button on a Raspberry Pi Pico).

use crate::pins::Level;

/// Time the LED spends in each level in the blinky image.
pub const BLINK_INTERVAL_MS: u32 = 1000;

/// Level the LED output is configured with at startup.
pub const LED_INITIAL_LEVEL: Level = Level::Low;

/// Level the button input reads while held. The button pulls the line high
/// against the internal pull-down.
pub const BUTTON_PRESSED_LEVEL: Level = Level::High;
