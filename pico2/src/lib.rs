//! TextPad firmware library - host-testable modules for the Pico 2 build.
//!
//! This library contains the board configuration and the SSD1306 driver, which
//! only depend on `embedded-hal-async` and can be tested on the host machine.
//! The binary (`main.rs`) uses this library and adds the embassy-rp specific code.
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p textpad-pico2 --lib --target x86_64-unknown-linux-gnu  # Linux/macOS
//! cargo test -p textpad-pico2 --lib --target x86_64-pc-windows-msvc    # Windows
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// === Pure logic modules (testable on host, no ARM dependencies) ===

// Configuration
pub mod config;

// Display driver (generic over the async I2C trait)
pub mod drivers;
