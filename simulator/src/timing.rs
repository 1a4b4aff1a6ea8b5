//! Timing constants for the simulator.
//!
//! These constants use `std::time::Duration` which is not available in `no_std`
//! environments, so they are defined here rather than in the common crate.

use std::time::Duration;

/// Target loop period, the same 10ms tick the firmware runs at.
/// The main loop sleeps if the tick completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(10);
