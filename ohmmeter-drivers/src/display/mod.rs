//! Monochrome framebuffer display
//!
//! - [`ssd1306`] - SSD1306 OLED driver and drawing primitives
//! - [`font`] - Fixed 8x8 glyph table used by the text renderer
//! - [`graphics`] - `embedded-graphics` draw target with clipping

pub mod font;
pub mod graphics;
pub mod ssd1306;

pub use ssd1306::{DisplayError, Ssd1306, Ssd1306Config, DEFAULT_ADDRESS};
