//! I2C configuration glue

use ohmmeter_hal::I2cConfig;

/// Build the embassy I2C config for a bus configuration
pub fn embassy_config(config: &I2cConfig) -> embassy_rp::i2c::Config {
    let mut cfg = embassy_rp::i2c::Config::default();
    cfg.frequency = config.frequency;
    cfg
}
