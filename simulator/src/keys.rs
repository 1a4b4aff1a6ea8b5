//! Keyboard stand-ins for the five buttons.
//!
//! | Key            | Channel |
//! |----------------|---------|
//! | Arrow keys     | Up / Down / Left / Right |
//! | Enter or Space | Confirm |
//!
//! A key down drives the channel low (pressed), a key up drives it high
//! again, mirroring the pull-up wiring.

use embedded_graphics_simulator::sdl2::Keycode;
use textpad_common::Channel;
use textpad_common::config::CHANNEL_COUNT;

/// Raw levels fed to the input router, one per channel. `true` = high.
pub type KeyLevels = [bool; CHANNEL_COUNT];

/// All channels released.
pub const RELEASED: KeyLevels = [true; CHANNEL_COUNT];

/// Channel bound to a key, if any.
pub fn channel_for_key(keycode: Keycode) -> Option<Channel> {
    match keycode {
        Keycode::UP => Some(Channel::Up),
        Keycode::DOWN => Some(Channel::Down),
        Keycode::LEFT => Some(Channel::Left),
        Keycode::RIGHT => Some(Channel::Right),
        Keycode::RETURN | Keycode::KP_ENTER | Keycode::SPACE => Some(Channel::Confirm),
        _ => None,
    }
}

/// Update the level of the channel bound to `keycode`. Returns the channel.
pub fn set_key_level(
    levels: &mut KeyLevels,
    keycode: Keycode,
    pressed: bool,
) -> Option<Channel> {
    let channel = channel_for_key(keycode)?;
    levels[channel.index()] = !pressed;
    Some(channel)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use textpad_common::{InputRouter, NavigationState};

    use super::*;

    #[test]
    fn test_key_bindings() {
        assert_eq!(channel_for_key(Keycode::UP), Some(Channel::Up));
        assert_eq!(channel_for_key(Keycode::DOWN), Some(Channel::Down));
        assert_eq!(channel_for_key(Keycode::LEFT), Some(Channel::Left));
        assert_eq!(channel_for_key(Keycode::RIGHT), Some(Channel::Right));
        assert_eq!(channel_for_key(Keycode::RETURN), Some(Channel::Confirm));
        assert_eq!(channel_for_key(Keycode::KP_ENTER), Some(Channel::Confirm));
        assert_eq!(channel_for_key(Keycode::SPACE), Some(Channel::Confirm));
        assert_eq!(channel_for_key(Keycode::ESCAPE), None);
        assert_eq!(channel_for_key(Keycode::A), None);
    }

    #[test]
    fn test_key_down_drives_low() {
        let mut levels = RELEASED;
        assert_eq!(set_key_level(&mut levels, Keycode::LEFT, true), Some(Channel::Left));
        assert!(!levels[Channel::Left.index()]);
        set_key_level(&mut levels, Keycode::LEFT, false);
        assert_eq!(levels, RELEASED);

        assert_eq!(set_key_level(&mut levels, Keycode::Q, true), None);
        assert_eq!(levels, RELEASED);
    }

    #[test]
    fn test_held_key_appends_once() {
        let mut router = InputRouter::new(RELEASED);
        let mut state = NavigationState::new();

        set_key_level(router.input_mut(), Keycode::RETURN, true);
        for now in (0..300).step_by(10) {
            state.tick(router.poll_all(now), now);
        }
        set_key_level(router.input_mut(), Keycode::RETURN, false);
        for now in (300..600).step_by(10) {
            state.tick(router.poll_all(now), now);
        }

        assert_eq!(state.message().as_str(), "A");
    }
}
