//! Cursor navigation, message composition and the per-tick frame snapshot.
//!
//! [`NavigationState`] is a flat reactive model: every press edge is applied
//! immediately, in channel index order, and the blink timer runs every tick.
//!
//! | Channel | Effect |
//! |---------|--------|
//! | Up      | row - 1 |
//! | Down    | row + 1 |
//! | Left    | col - 1 |
//! | Right   | col + 1 |
//! | Confirm | append the character under the cursor unless the message is full |
//!
//! Edge behaviour of the moves is decided by the [`CursorPolicy`].

use crate::blink::BlinkTimer;
use crate::grid::{Cursor, CursorPolicy};
use crate::input::{Channel, PressSet};
use crate::message::Message;

/// What a single press did to the state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// Cursor now at this position (unchanged if clamped at an edge).
    Moved(Cursor),
    /// Character appended; carries the character.
    Appended(char),
    /// Confirm pressed with a full message; nothing changed.
    MessageFull,
}

/// Immutable copy of everything the renderer needs for one frame.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Snapshot {
    pub cursor_col: usize,
    pub cursor_row: usize,
    /// Character under the cursor.
    pub selected: char,
    pub message: Message,
    pub blink_visible: bool,
}

/// Cursor, message and blink phase. Owned by the main loop for the whole run.
#[derive(Clone, Debug)]
pub struct NavigationState {
    cursor: Cursor,
    policy: CursorPolicy,
    message: Message,
    blink: BlinkTimer,
}

impl NavigationState {
    /// Cursor at (0, 0), empty message, default cursor policy.
    pub fn new() -> Self { Self::with_policy(CursorPolicy::default()) }

    /// Cursor at (0, 0), empty message, explicit cursor policy.
    pub const fn with_policy(policy: CursorPolicy) -> Self {
        Self {
            cursor: Cursor::ORIGIN,
            policy,
            message: Message::new(),
            blink: BlinkTimer::new(),
        }
    }

    /// Apply one press edge.
    pub fn apply(
        &mut self,
        channel: Channel,
    ) -> Transition {
        let policy = self.policy;
        match channel {
            Channel::Up => self.move_to(self.cursor.up(policy)),
            Channel::Down => self.move_to(self.cursor.down(policy)),
            Channel::Left => self.move_to(self.cursor.left(policy)),
            Channel::Right => self.move_to(self.cursor.right(policy)),
            Channel::Confirm => {
                let c = self.cursor.selected();
                if self.message.push(c) {
                    Transition::Appended(c)
                } else {
                    Transition::MessageFull
                }
            }
        }
    }

    fn move_to(
        &mut self,
        cursor: Cursor,
    ) -> Transition {
        self.cursor = cursor;
        Transition::Moved(cursor)
    }

    /// Apply every press in the set, in channel index order.
    pub fn apply_all(
        &mut self,
        presses: PressSet,
    ) {
        for channel in presses.iter() {
            self.apply(channel);
        }
    }

    /// Advance the blink timer. Returns true when visibility toggled.
    #[inline]
    pub fn update_blink(
        &mut self,
        now_ms: u64,
    ) -> bool {
        self.blink.update(now_ms)
    }

    /// One full state update: apply presses, then advance the blink timer.
    pub fn tick(
        &mut self,
        presses: PressSet,
        now_ms: u64,
    ) -> Snapshot {
        self.apply_all(presses);
        self.update_blink(now_ms);
        self.snapshot()
    }

    #[inline]
    pub const fn cursor(&self) -> Cursor { self.cursor }

    #[inline]
    pub const fn policy(&self) -> CursorPolicy { self.policy }

    /// Character currently under the cursor.
    #[inline]
    pub const fn selected_char(&self) -> char { self.cursor.selected() }

    #[inline]
    pub const fn message(&self) -> &Message { &self.message }

    #[inline]
    pub const fn blink_visible(&self) -> bool { self.blink.is_visible() }

    /// Copy out the values the renderer needs.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cursor_col: self.cursor.col(),
            cursor_row: self.cursor.row(),
            selected: self.cursor.selected(),
            message: self.message.clone(),
            blink_visible: self.blink.is_visible(),
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::config::{GRID_COLS, GRID_ROWS, MESSAGE_CAPACITY};

    fn press(
        state: &mut NavigationState,
        channel: Channel,
        times: usize,
    ) {
        for _ in 0..times {
            state.apply(channel);
        }
    }

    fn channel_strategy() -> impl Strategy<Value = Channel> {
        (0..Channel::ALL.len()).prop_map(|i| Channel::ALL[i])
    }

    fn policy_strategy() -> impl Strategy<Value = CursorPolicy> {
        prop_oneof![Just(CursorPolicy::Wrap), Just(CursorPolicy::Clamp)]
    }

    #[test]
    fn test_initial_state() {
        let state = NavigationState::with_policy(CursorPolicy::Wrap);
        assert_eq!(state.cursor(), Cursor::ORIGIN);
        assert!(state.message().is_empty());
        assert!(!state.blink_visible());
        assert_eq!(state.selected_char(), 'A');
    }

    #[test]
    fn test_confirm_at_origin_appends_a() {
        let mut state = NavigationState::with_policy(CursorPolicy::Wrap);
        assert_eq!(state.apply(Channel::Confirm), Transition::Appended('A'));
        assert_eq!(state.message().as_str(), "A");
    }

    #[test]
    fn test_nine_rights_reach_last_column_under_both_policies() {
        for policy in [CursorPolicy::Wrap, CursorPolicy::Clamp] {
            let mut state = NavigationState::with_policy(policy);
            press(&mut state, Channel::Right, 9);
            assert_eq!(state.cursor().col(), 9);
        }
    }

    #[test]
    fn test_ten_rights_diverge_between_policies() {
        let mut wrap = NavigationState::with_policy(CursorPolicy::Wrap);
        let mut clamp = NavigationState::with_policy(CursorPolicy::Clamp);
        press(&mut wrap, Channel::Right, 10);
        press(&mut clamp, Channel::Right, 10);
        assert_eq!(wrap.cursor().col(), 0);
        assert_eq!(clamp.cursor().col(), 9);
    }

    #[test]
    fn test_up_from_top_row() {
        let mut wrap = NavigationState::with_policy(CursorPolicy::Wrap);
        assert!(matches!(wrap.apply(Channel::Up), Transition::Moved(c) if c.row() == 3 && c.col() == 0));
        assert_eq!(wrap.selected_char(), '4');

        let mut clamp = NavigationState::with_policy(CursorPolicy::Clamp);
        assert_eq!(clamp.apply(Channel::Up), Transition::Moved(Cursor::ORIGIN));
    }

    #[test]
    fn test_ninth_confirm_is_noop() {
        let mut state = NavigationState::with_policy(CursorPolicy::Wrap);
        for _ in 0..MESSAGE_CAPACITY {
            assert!(matches!(state.apply(Channel::Confirm), Transition::Appended(_)));
            state.apply(Channel::Right);
        }
        assert_eq!(state.message().as_str(), "ABCDEFGH");

        let before = state.snapshot();
        assert_eq!(state.apply(Channel::Confirm), Transition::MessageFull);
        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn test_apply_all_uses_index_order() {
        // Right is applied before Confirm, so 'B' is appended
        let mut state = NavigationState::with_policy(CursorPolicy::Wrap);
        let presses: PressSet = [Channel::Confirm, Channel::Right].into_iter().collect();
        state.apply_all(presses);
        assert_eq!(state.message().as_str(), "B");
    }

    #[test]
    fn test_tick_updates_blink_without_presses() {
        let mut state = NavigationState::with_policy(CursorPolicy::Wrap);
        let frame = state.tick(PressSet::empty(), 100);
        assert!(!frame.blink_visible);
        let frame = state.tick(PressSet::empty(), 501);
        assert!(frame.blink_visible);
        assert_eq!(frame.message.as_str(), "");
    }

    #[test]
    fn test_snapshot_fields() {
        let mut state = NavigationState::with_policy(CursorPolicy::Wrap);
        press(&mut state, Channel::Down, 2);
        press(&mut state, Channel::Right, 6);
        state.apply(Channel::Confirm);

        let frame = state.snapshot();
        assert_eq!((frame.cursor_row, frame.cursor_col), (2, 6));
        assert_eq!(frame.selected, '0');
        assert_eq!(frame.message.as_str(), "0");
        assert!(!frame.blink_visible);
    }

    proptest! {
        #[test]
        fn prop_cursor_always_on_grid(
            policy in policy_strategy(),
            presses in prop::collection::vec(channel_strategy(), 0..200),
        ) {
            let mut state = NavigationState::with_policy(policy);
            for channel in presses {
                state.apply(channel);
                let cursor = state.cursor();
                prop_assert!(cursor.row() < GRID_ROWS);
                prop_assert!(cursor.col() < GRID_COLS);
            }
        }

        #[test]
        fn prop_message_grows_monotonically_and_caps(
            policy in policy_strategy(),
            presses in prop::collection::vec(channel_strategy(), 0..200),
        ) {
            let mut state = NavigationState::with_policy(policy);
            let mut previous = String::new();
            for channel in presses {
                let was_full = state.message().is_full();
                let transition = state.apply(channel);
                let current = state.message().as_str();

                prop_assert!(current.len() <= MESSAGE_CAPACITY);
                prop_assert!(current.starts_with(previous.as_str()));
                if was_full {
                    prop_assert_eq!(current, previous.as_str());
                }
                if channel == Channel::Confirm && was_full {
                    prop_assert_eq!(transition, Transition::MessageFull);
                }
                previous = current.to_string();
            }
        }

        #[test]
        fn prop_blink_independent_of_presses(
            presses in prop::collection::vec(prop::option::of(channel_strategy()), 1..300),
        ) {
            let mut pressed = NavigationState::with_policy(CursorPolicy::Wrap);
            let mut idle = NavigationState::with_policy(CursorPolicy::Wrap);
            for (i, channel) in presses.into_iter().enumerate() {
                let now = i as u64 * 10;
                let set: PressSet = channel.into_iter().collect();
                let a = pressed.tick(set, now);
                let b = idle.tick(PressSet::empty(), now);
                prop_assert_eq!(a.blink_visible, b.blink_visible);
            }
        }
    }
}
