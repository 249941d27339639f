//! Measurement task
//!
//! Samples the divider, works out the resistance and its colour code,
//! then shows both on the OLED and the LED matrix.
//!
//! Either output may be missing: the task keeps measuring and drives
//! whichever one came up. A display that did not answer at boot is
//! powered on again before each frame until it does.

use defmt::*;
use embassy_rp::adc::{Adc, Async, Channel};
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::{I2C1, PIO0};
use embassy_time::{Duration, Timer};

use ohmmeter_core::bands::{four_band, BandCode, BandError};
use ohmmeter_core::config::{MatrixHwConfig, MeterConfig};
use ohmmeter_core::meter::{self, Averager};
use ohmmeter_drivers::matrix::{blank_buffer, cell_index, ColorBuffer, ROWS};
use ohmmeter_drivers::{Color, LedMatrix, Ssd1306};
use ohmmeter_hal_rp2040::PioWs2812Channel;

use crate::screen::{self, Reading};

/// OLED on the blocking I2C1 bus
pub type MeterDisplay = Ssd1306<I2c<'static, I2C1, Blocking>>;

/// LED matrix on PIO0 state machine 0
pub type MeterMatrix = LedMatrix<PioWs2812Channel<'static, PIO0, 0>>;

/// First matrix column used for the colour bands
const FIRST_BAND_COL: usize = 1;

/// Measurement task
#[embassy_executor::task]
pub async fn meter_task(
    mut adc: Adc<'static, Async>,
    mut input: Channel<'static>,
    mut display: Option<MeterDisplay>,
    mut display_ready: bool,
    mut matrix: Option<MeterMatrix>,
    meter_config: MeterConfig,
    matrix_config: MatrixHwConfig,
    refresh_ms: u32,
) {
    info!("Meter task started");

    let mut leds = blank_buffer();
    let mut avg = Averager::new();

    loop {
        avg.reset();
        for _ in 0..meter_config.samples {
            match adc.read(&mut input).await {
                Ok(raw) => avg.push(raw),
                Err(e) => warn!("ADC read failed: {:?}", e),
            }
            Timer::after(Duration::from_millis(meter_config.sample_interval_ms as u64)).await;
        }

        let mean = match avg.mean() {
            Ok(mean) => mean,
            Err(e) => {
                warn!("No usable ADC readings: {:?}", e);
                Timer::after(Duration::from_millis(refresh_ms as u64)).await;
                continue;
            }
        };

        let ohms = meter::resistance(mean, &meter_config);
        let bands = ohms.map_err(|_| BandError::OutOfRange).and_then(four_band);

        match (ohms, bands) {
            (Ok(r), Ok(code)) => info!("mean={} R={} ohm bands={}", mean, r, code),
            (Ok(r), Err(_)) => info!("mean={} R={} ohm (no colour code)", mean, r),
            (Err(e), _) => info!("mean={} {:?}", mean, e),
        }

        if let Some(display) = display.as_mut() {
            if !display_ready {
                match display.power_on() {
                    Ok(()) => {
                        info!("Display answered, powered on");
                        display_ready = true;
                    }
                    Err(e) => debug!("Display still not answering: {:?}", e),
                }
            }

            if display_ready {
                let volts = meter::voltage(mean, &meter_config);
                screen::render(
                    display,
                    &Reading {
                        mean,
                        volts,
                        ohms,
                        bands,
                    },
                );
                if let Err(e) = display.flush() {
                    warn!("Display flush failed: {:?}", e);
                    display_ready = false;
                }
            }
        }

        if let Some(matrix) = matrix.as_mut() {
            paint_bands(&mut leds, bands.ok(), matrix_config.on_intensity);
            matrix.draw(&leds);
        }

        Timer::after(Duration::from_millis(refresh_ms as u64)).await;
    }
}

/// Fill the band columns of the matrix with the code's colours
///
/// Every other cell is switched off; with no code the matrix is dark.
fn paint_bands(leds: &mut ColorBuffer, code: Option<BandCode>, intensity: f32) {
    *leds = blank_buffer();

    let Some(code) = code else {
        return;
    };

    for (i, band) in code.colors().iter().enumerate() {
        let (r, g, b) = band.rgb();
        let color = Color::new(r, g, b).scale(intensity);
        for row in 0..ROWS {
            leds[cell_index(row, FIRST_BAND_COL + i)] = color;
        }
    }
}
