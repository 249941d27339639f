//! Peripheral drivers for the ohmmeter
//!
//! Both drivers turn drawing intent into the exact byte streams their
//! peripherals expect. They are plain blocking code with no internal
//! concurrency: a call returns once the transfer is done.
//!
//! - [`display`] - SSD1306 monochrome OLED on I2C: bit-packed framebuffer,
//!   lines, rectangles and proportional text
//! - [`matrix`] - 5x5 serpentine WS2812 matrix fed through a timed
//!   one-wire output
//!
//! The framebuffer lives on the heap, so the firmware must provide a
//! global allocator.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod display;
pub mod matrix;

#[cfg(test)]
mod testing;

pub use display::{DisplayError, Ssd1306, Ssd1306Config};
pub use matrix::{Color, ColorBuffer, LedMatrix};
