//! Resistance measurement
//!
//! The unknown resistor forms the low side of a divider with a known
//! resistor to VREF. With the averaged reading `m` and full scale `M`:
//!
//! ```text
//! R_x = R_known * m / (M - m)
//! ```

use crate::config::MeterConfig;

/// Errors turning readings into a resistance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadingError {
    /// No readings were taken
    NoSamples,
    /// Reading at or above full scale (open circuit)
    Saturated,
}

/// Running average of raw ADC readings
#[derive(Debug, Clone, Copy, Default)]
pub struct Averager {
    sum: u32,
    count: u32,
}

impl Averager {
    pub const fn new() -> Self {
        Self { sum: 0, count: 0 }
    }

    /// Add one reading
    pub fn push(&mut self, reading: u16) {
        self.sum += u32::from(reading);
        self.count += 1;
    }

    /// Number of readings so far
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Mean of the readings so far
    pub fn mean(&self) -> Result<f32, ReadingError> {
        if self.count == 0 {
            return Err(ReadingError::NoSamples);
        }
        Ok(self.sum as f32 / self.count as f32)
    }

    /// Forget all readings
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Mean of a batch of readings
pub fn mean(samples: &[u16]) -> Result<f32, ReadingError> {
    let mut avg = Averager::new();
    for &s in samples {
        avg.push(s);
    }
    avg.mean()
}

/// Unknown resistance from an averaged reading
pub fn resistance(mean: f32, config: &MeterConfig) -> Result<f32, ReadingError> {
    let full_scale = f32::from(config.adc_max);
    if mean >= full_scale {
        return Err(ReadingError::Saturated);
    }
    Ok(config.known_ohms * mean / (full_scale - mean))
}

/// Input voltage for an averaged reading
pub fn voltage(mean: f32, config: &MeterConfig) -> f32 {
    mean * config.vref / f32::from(config.adc_max)
}
