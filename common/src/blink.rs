//! Text-entry cursor blink timer.

use crate::config::BLINK_INTERVAL_MS;

/// Toggles a visibility flag once every interval.
///
/// The check runs every tick regardless of input, so the blink keeps its
/// rhythm while buttons are being pressed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BlinkTimer {
    visible: bool,
    last_toggle_ms: u64,
    interval_ms: u64,
}

impl BlinkTimer {
    /// Start hidden with the default interval.
    pub const fn new() -> Self { Self::with_interval(BLINK_INTERVAL_MS) }

    /// Start hidden with a custom interval.
    pub const fn with_interval(interval_ms: u64) -> Self {
        Self {
            visible: false,
            last_toggle_ms: 0,
            interval_ms,
        }
    }

    /// Toggle if more than one interval has passed since the last toggle.
    ///
    /// Returns true when the flag changed.
    pub fn update(
        &mut self,
        now_ms: u64,
    ) -> bool {
        if now_ms.saturating_sub(self.last_toggle_ms) > self.interval_ms {
            self.visible = !self.visible;
            self.last_toggle_ms = now_ms;
            true
        } else {
            false
        }
    }

    #[inline]
    pub const fn is_visible(&self) -> bool { self.visible }
}

impl Default for BlinkTimer {
    fn default() -> Self { Self::new() }
}
