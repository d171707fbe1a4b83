#![cfg_attr(not(test), no_std)]

//! Blinky LED and push-button toggle for the Raspberry Pi Pico.
//!
//! The loops are written against the small pin and delay traits in [`pins`],
//! so they run unchanged on the RP2040 (feature `rp2040`) and against the
//! simulated pins used by the host tests.

pub mod logging;

pub mod blinky;
pub mod config;
pub mod pins;
pub mod push_button;
pub mod stop;

#[cfg(feature = "rp2040")]
mod rp;

#[cfg(test)]
pub(crate) mod mock;
