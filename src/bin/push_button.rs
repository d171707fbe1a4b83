#![no_std]
#![no_main]

use {
    blinky_pushbutton::{config, push_button::PushButtonRunner},
    defmt::info,
    defmt_rtt as _,
    embassy_executor::Spawner,
    embassy_rp::gpio::{Input, Output, Pull},
    panic_probe as _,
};

#[embassy_executor::main]
async fn main(_spawner: Spawner) -> ! {
    let p = embassy_rp::init(Default::default());
    let led = Output::new(p.PIN_25, config::LED_INITIAL_LEVEL.into());
    // The switch drives the line high; the pull-down keeps it low at rest.
    let button = Input::new(p.PIN_15, Pull::Down);

    info!("Push button on PIN_15 toggles LED on PIN_25");

    PushButtonRunner::new(button, led).run()
}
