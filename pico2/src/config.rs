//! Board configuration for the Pico 2 build.
//!
//! Wiring:
//!
//! | Signal  | GPIO |
//! |---------|------|
//! | Up      | 13   |
//! | Down    | 12   |
//! | Left    | 11   |
//! | Right   | 10   |
//! | Confirm | 9    |
//! | I2C0 SDA | 4   |
//! | I2C0 SCL | 5   |
//!
//! Buttons are wired to ground and read with the internal pull-up, so a
//! pressed button reads low. Pins are claimed by number at their
//! `embassy_rp` call sites in `main.rs`.

// =============================================================================
// Display
// =============================================================================

/// 7-bit I2C address of the SSD1306 (SA0 tied low).
pub const DISPLAY_ADDR: u8 = 0x3C;

/// I2C0 bus clock (SSD1306 fast mode).
pub const I2C_FREQUENCY_HZ: u32 = 400_000;

/// Contrast written after init.
pub const DISPLAY_CONTRAST: u8 = 0x7F;

// =============================================================================
// Timing
// =============================================================================

/// Main loop period. Well below the debounce window so edges are not missed.
pub const TICK_MS: u64 = 10;

// =============================================================================
// Unit Tests
// =============================================================================
