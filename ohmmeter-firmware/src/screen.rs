//! Meter screen rendering
//!
//! The 128x64 panel is laid out as a framed box with a title block, a
//! colour-code row and two value columns:
//!
//! ```text
//! +-------------------------+
//! | Ohmmeter       1.65V    |
//! | Yellow Violet           |
//! |-------------------------|  y = 25
//! |   x Red                 |
//! |-------------------------|  y = 37
//! |  ADC   | Resist.        |
//! |  2048  | 10000          |
//! +--------+----------------+
//!          x = 44
//! ```

use embedded_hal::i2c::I2c;
use ohmmeter_core::readout;
use ohmmeter_core::{BandCode, BandError, ReadingError};
use ohmmeter_drivers::Ssd1306;

/// One measurement, ready to show
pub struct Reading {
    /// Averaged raw ADC value
    pub mean: f32,
    /// Voltage at the ADC input
    pub volts: f32,
    /// Computed resistance
    pub ohms: Result<f32, ReadingError>,
    /// Colour code of the resistance
    pub bands: Result<BandCode, BandError>,
}

/// Redraw the whole screen into the framebuffer
///
/// Only touches RAM; the caller flushes.
pub fn render<I2C: I2c>(display: &mut Ssd1306<I2C>, reading: &Reading) {
    display.fill(false);
    display.draw_rect(3, 3, 122, 60, true, false);
    display.draw_hline(3, 123, 25, true);
    display.draw_hline(3, 123, 37, true);
    display.draw_vline(44, 37, 60, true);

    display.draw_string("Ohmmeter", 8, 6);
    display.draw_string(&readout::volts(reading.volts), 80, 6);

    match reading.bands {
        Ok(code) => {
            let (digits, multiplier) = readout::band_names(&code);
            display.draw_string(&digits, 8, 16);
            display.draw_string(&multiplier, 8, 28);
        }
        Err(BandError::OutOfRange) => {
            display.draw_string("Out of range", 8, 28);
        }
    }

    display.draw_string("ADC", 13, 41);
    display.draw_string("Resist.", 50, 41);

    display.draw_string(&readout::whole(reading.mean), 8, 52);
    match reading.ohms {
        Ok(ohms) => display.draw_string(&readout::whole(ohms), 59, 52),
        Err(_) => display.draw_string("Open", 59, 52),
    };
}
