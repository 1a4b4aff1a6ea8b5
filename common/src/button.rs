//! Button debounce handling.
//!
//! Provides time-based edge detection with debouncing so contact bounce on a
//! mechanical switch never registers as more than one keystroke.
//!
//! Buttons are wired active-low with internal pull-ups: a HIGH level means
//! released, LOW means pressed. A raw level is only accepted once it has stayed
//! unchanged for longer than the debounce delay; every raw change restarts that
//! window.

use crate::config::DEBOUNCE_MS;

/// A debounced transition of the accepted button state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Accepted state went from released to pressed.
    Pressed,
    /// Accepted state went from pressed to released.
    Released,
}

/// Per-channel debounce state.
#[derive(Clone, Copy, Debug)]
pub struct Debouncer {
    /// Raw level seen on the previous call (`true` = HIGH = released).
    last_raw_high: bool,
    /// Currently accepted level.
    stable_high: bool,
    /// Timestamp of the most recent raw level change.
    last_change_ms: u64,
    /// Required stable time before a level is accepted.
    delay_ms: u64,
}

impl Debouncer {
    /// Create a debouncer in the released state with the default delay.
    pub const fn new() -> Self { Self::with_delay(DEBOUNCE_MS) }

    /// Create a debouncer in the released state with a custom delay.
    pub const fn with_delay(delay_ms: u64) -> Self {
        Self {
            last_raw_high: true,
            stable_high: true,
            last_change_ms: 0,
            delay_ms,
        }
    }

    /// Feed the current raw level and return the debounced edge, if any.
    ///
    /// `now_ms` must come from the same monotonic clock on every call.
    pub fn classify(
        &mut self,
        is_high: bool,
        now_ms: u64,
    ) -> Option<Edge> {
        // Any raw change restarts the stability window
        if is_high != self.last_raw_high {
            self.last_change_ms = now_ms;
            self.last_raw_high = is_high;
        }

        if now_ms.saturating_sub(self.last_change_ms) <= self.delay_ms {
            return None;
        }

        match (is_high, self.stable_high) {
            (false, true) => {
                self.stable_high = false;
                Some(Edge::Pressed)
            }
            (true, false) => {
                self.stable_high = true;
                Some(Edge::Released)
            }
            _ => None,
        }
    }

    /// Returns true only on the debounced press edge.
    #[inline]
    pub fn just_pressed(
        &mut self,
        is_high: bool,
        now_ms: u64,
    ) -> bool {
        self.classify(is_high, now_ms) == Some(Edge::Pressed)
    }

    /// Whether the accepted state is pressed.
    #[inline]
    pub const fn is_pressed(&self) -> bool { !self.stable_high }

    /// Configured debounce delay in milliseconds.
    #[inline]
    pub const fn delay_ms(&self) -> u64 { self.delay_ms }
}

impl Default for Debouncer {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
