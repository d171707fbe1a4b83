#![no_std]
#![no_main]

use {
    blinky_pushbutton::{blinky::BlinkyRunner, config},
    defmt::info,
    defmt_rtt as _,
    embassy_executor::Spawner,
    embassy_rp::gpio::Output,
    embassy_time::Delay,
    panic_probe as _,
};

#[embassy_executor::main]
async fn main(_spawner: Spawner) -> ! {
    let p = embassy_rp::init(Default::default());
    let led = Output::new(p.PIN_25, config::LED_INITIAL_LEVEL.into());

    info!(
        "Blinky LED on PIN_25, {} ms per level",
        config::BLINK_INTERVAL_MS
    );

    // Nothing else is spawned, so the busy-wait loop owns the core.
    BlinkyRunner::new(led, Delay, config::BLINK_INTERVAL_MS).run()
}
