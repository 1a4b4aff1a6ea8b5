//! Core logic for the TextPad five-button text entry device.
//!
//! This crate contains platform-agnostic code shared between the simulator
//! and the Pico 2 firmware:
//!
//! - [`button`]: Per-channel time-based debouncing with edge detection
//! - [`input`]: Channels, the raw level capability and the per-tick input router
//! - [`grid`]: The fixed 4x10 character grid, cursor and cursor edge policy
//! - [`message`]: Bounded append-only message buffer
//! - [`blink`]: Text-entry cursor blink timer
//! - [`navigation`]: Navigation state machine and the per-frame snapshot
//! - [`render`]: Draws a snapshot onto any monochrome `DrawTarget`
//! - [`config`]: Timing, grid and layout constants
//! - [`styles`]: Pre-computed fonts and text styles
//!
//! # Tick
//!
//! ```ignore
//! let presses = router.poll_all(now_ms);
//! let frame = state.tick(presses, now_ms);
//! if render_state.needs_redraw(&frame) {
//!     draw_frame(&mut display, &frame);
//!     // present / flush
//! }
//! ```
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` outside of tests and takes time as plain milliseconds,
//! so it has no dependency on `std::time` or a specific embedded time driver.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod blink;
pub mod button;
pub mod config;
pub mod grid;
pub mod input;
pub mod message;
pub mod navigation;
pub mod render;
pub mod styles;

// Re-export commonly used items
pub use button::{Debouncer, Edge};
pub use grid::{Cursor, CursorPolicy};
pub use input::{Channel, InputRouter, PressSet, RawInput};
pub use message::Message;
pub use navigation::{NavigationState, Snapshot, Transition};
pub use render::{RenderState, draw_frame};
