//! Display bus configuration for the 0.96" SSD1306 128x64 I2C module.
//!
//! Pin mapping:
//! - SDA: GPIO4 (I2C0 SDA)
//! - SCL: GPIO5 (I2C0 SCL)
//! - Reset: none (module has its own power-on reset)

use embassy_rp::i2c::Config as I2cConfig;

use crate::config::I2C_FREQUENCY_HZ;

/// I2C configuration for the SSD1306 display.
/// The SSD1306 supports fast mode (400kHz).
pub fn display_i2c_config() -> I2cConfig {
    let mut config = I2cConfig::default();
    config.frequency = I2C_FREQUENCY_HZ;
    config
}
