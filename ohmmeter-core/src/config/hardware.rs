//! Hardware configuration types
//!
//! These types define pin assignments, bus settings and measurement
//! constants for the peripherals on the board.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
    /// Enable internal pull-up
    pub pull_up: bool,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: false,
        }
    }

    /// Active-low button with the internal pull-up enabled
    pub const fn button(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
            pull_up: true,
        }
    }
}

/// OLED display wiring and panel geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayHwConfig {
    /// I2C data pin
    pub sda_pin: u8,
    /// I2C clock pin
    pub scl_pin: u8,
    /// Bus clock in Hz
    pub i2c_frequency: u32,
    /// 7-bit device address
    pub address: u8,
    /// Panel width in pixels
    pub width: u8,
    /// Panel height in pixels (multiple of 8)
    pub height: u8,
    /// Panel runs from an external VCC supply
    pub external_vcc: bool,
}

impl Default for DisplayHwConfig {
    fn default() -> Self {
        Self {
            sda_pin: 14,
            scl_pin: 15,
            i2c_frequency: 400_000,
            address: 0x3C,
            width: 128,
            height: 64,
            external_vcc: false,
        }
    }
}

/// LED matrix wiring
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatrixHwConfig {
    /// Data pin of the first LED
    pub data_pin: u8,
    /// Scale applied to every colour before drawing (0.0-1.0)
    ///
    /// The LEDs have no current limiting; full brightness is blinding and
    /// draws more than the board's regulator can supply.
    pub on_intensity: f32,
}

impl Default for MatrixHwConfig {
    fn default() -> Self {
        Self {
            data_pin: 7,
            on_intensity: 0.02,
        }
    }
}

/// Resistance measurement front end
///
/// The unknown resistor sits between the ADC input and ground, with a
/// known resistor from VREF to the input.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeterConfig {
    /// ADC input pin
    pub adc_pin: u8,
    /// Value of the reference resistor in ohms
    pub known_ohms: f32,
    /// ADC reference voltage
    pub vref: f32,
    /// Full-scale ADC reading (12-bit = 4095)
    pub adc_max: u16,
    /// Readings averaged per measurement
    pub samples: u16,
    /// Pause between readings in ms
    pub sample_interval_ms: u32,
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self {
            adc_pin: 28,
            known_ohms: 10_000.0,
            vref: 3.31,
            adc_max: 4095,
            samples: 500,
            sample_interval_ms: 1,
        }
    }
}

/// Complete board configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardConfig {
    pub display: DisplayHwConfig,
    pub matrix: MatrixHwConfig,
    pub meter: MeterConfig,
    /// Button A
    pub button_a: PinConfig,
    /// Button B, reboots into the USB bootloader
    pub button_b: PinConfig,
    /// Pause between screen refreshes in ms
    pub refresh_ms: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            display: DisplayHwConfig::default(),
            matrix: MatrixHwConfig::default(),
            meter: MeterConfig::default(),
            button_a: PinConfig::button(5),
            button_b: PinConfig::button(6),
            refresh_ms: 700,
        }
    }
}

impl BoardConfig {
    /// Check the configuration for conflicts
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display.height == 0 || self.display.height % 8 != 0 || self.display.width == 0 {
            return Err(ConfigError::DisplayGeometry);
        }
        if !(0.0..=1.0).contains(&self.matrix.on_intensity) {
            return Err(ConfigError::Intensity);
        }
        if self.meter.samples == 0 {
            return Err(ConfigError::NoSamples);
        }

        let pins = [
            self.display.sda_pin,
            self.display.scl_pin,
            self.matrix.data_pin,
            self.meter.adc_pin,
            self.button_a.pin,
            self.button_b.pin,
        ];
        for (i, pin) in pins.iter().enumerate() {
            if *pin > 29 {
                return Err(ConfigError::InvalidPin(*pin));
            }
            if pins[i + 1..].contains(pin) {
                return Err(ConfigError::PinConflict(*pin));
            }
        }
        // Only GPIO26-29 are wired to the ADC
        if !(26..=29).contains(&self.meter.adc_pin) {
            return Err(ConfigError::NotAnAdcPin(self.meter.adc_pin));
        }

        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Display size is zero or the height is not a multiple of 8
    DisplayGeometry,
    /// On-intensity outside 0.0-1.0
    Intensity,
    /// Measurement averages zero readings
    NoSamples,
    /// Pin number out of range
    InvalidPin(u8),
    /// Pin assigned twice
    PinConflict(u8),
    /// ADC pin is not an analog input
    NotAnAdcPin(u8),
}
