//! Bootloader button task
//!
//! A press of button B reboots into the RP2040 USB mass-storage bootloader,
//! so new firmware can be dropped on without touching BOOTSEL.

use defmt::*;
use embassy_rp::gpio::Input;

#[embassy_executor::task]
pub async fn bootsel_task(mut button: Input<'static>) {
    info!("Bootloader button task started");

    button.wait_for_falling_edge().await;

    info!("Button B pressed, rebooting into USB bootloader");
    embassy_rp::rom_data::reset_to_usb_boot(0, 0);
}
