//! GPIO-backed raw input for the five keypad buttons.
//!
//! Buttons are active-low with the internal pull-up enabled, which is exactly
//! the level convention `RawInput` expects, so pin levels are passed through.

use embassy_rp::gpio::Input;
use textpad_common::config::CHANNEL_COUNT;
use textpad_common::{Channel, RawInput};

/// The five button inputs, indexed by channel.
pub struct ButtonPins<'d> {
    pins: [Input<'d>; CHANNEL_COUNT],
}

impl<'d> ButtonPins<'d> {
    /// `pins` must be in channel index order (Up, Down, Left, Right, Confirm).
    pub fn new(pins: [Input<'d>; CHANNEL_COUNT]) -> Self { Self { pins } }
}

impl RawInput for ButtonPins<'_> {
    #[inline]
    fn is_high(
        &mut self,
        channel: Channel,
    ) -> bool {
        self.pins[channel.index()].is_high()
    }
}
