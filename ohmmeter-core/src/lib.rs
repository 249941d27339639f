//! Board-agnostic core logic for the ohmmeter firmware
//!
//! This crate contains the application logic that does not depend on
//! specific hardware:
//!
//! - Board configuration types
//! - ADC averaging and resistance calculation
//! - Four-band resistor colour code
//! - Screen text formatting

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod bands;
pub mod config;
pub mod meter;
pub mod readout;

pub use bands::{four_band, BandCode, BandColor, BandError};
pub use config::BoardConfig;
pub use meter::{Averager, ReadingError};
