//! Addressable RGB matrix
//!
//! - [`color`] - Normalized colour and its wire encoding
//! - [`layout`] - Serpentine strip order of the 5x5 grid
//! - [`ws2812`] - Matrix driver streaming colours to the strip

pub mod color;
pub mod layout;
pub mod ws2812;

pub use color::Color;
pub use layout::{cell_index, COLS, LED_COUNT, ROWS};
pub use ws2812::{blank_buffer, ColorBuffer, LedMatrix, SYS_CLOCK_KHZ};
