//! RP2040-specific HAL for the ohmmeter firmware
//!
//! This crate provides RP2040-specific implementations of the shared
//! `ohmmeter-hal` traits:
//!
//! - WS2812 bit timing on a PIO state machine (implements
//!   `ohmmeter_hal::ChannelProvider`)
//! - Conversion of `ohmmeter_hal::I2cConfig` into the embassy I2C config

#![no_std]

pub mod i2c;
pub mod pio;
pub mod ws2812;

pub use ws2812::{PioWs2812, PioWs2812Channel};
