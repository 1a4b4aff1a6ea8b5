//! Input channels and per-tick button polling.
//!
//! - [`Channel`]: the five logical buttons with stable indices
//! - [`RawInput`]: the raw electrical level capability supplied by the platform
//! - [`InputRouter`]: owns one [`Debouncer`] per channel and reports new presses
//! - [`PressSet`]: the channels that produced a press edge during one poll

use crate::button::{Debouncer, Edge};
use crate::config::CHANNEL_COUNT;

// =============================================================================
// Channels
// =============================================================================

/// Logical input channel. The discriminant is the stable channel index.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Channel {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
    Confirm = 4,
}

impl Channel {
    /// All channels in index order.
    pub const ALL: [Self; CHANNEL_COUNT] = [Self::Up, Self::Down, Self::Left, Self::Right, Self::Confirm];

    /// Stable index of this channel (0-4).
    #[inline]
    pub const fn index(self) -> usize { self as usize }

    /// Channel for a stable index, if in range.
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < CHANNEL_COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Short uppercase name for logs.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Confirm => "CONFIRM",
        }
    }
}

// =============================================================================
// Raw Level Capability
// =============================================================================

/// Non-blocking read of a channel's instantaneous electrical level.
///
/// Pull-up wiring: `true` (HIGH) means not pressed, `false` (LOW) means pressed.
pub trait RawInput {
    fn is_high(
        &mut self,
        channel: Channel,
    ) -> bool;
}

/// Levels indexed by channel. Used by the simulator and by tests.
impl RawInput for [bool; CHANNEL_COUNT] {
    #[inline]
    fn is_high(
        &mut self,
        channel: Channel,
    ) -> bool {
        self[channel.index()]
    }
}

// =============================================================================
// Press Set
// =============================================================================

/// Set of channels that produced a press edge in one poll.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct PressSet {
    bits: u8,
}

impl PressSet {
    /// Empty set.
    pub const fn empty() -> Self { Self { bits: 0 } }

    /// Add a channel to the set.
    #[inline]
    pub fn insert(
        &mut self,
        channel: Channel,
    ) {
        self.bits |= 1 << channel.index();
    }

    #[inline]
    pub const fn contains(
        &self,
        channel: Channel,
    ) -> bool {
        self.bits & (1 << channel.index()) != 0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool { self.bits == 0 }

    #[inline]
    pub const fn len(&self) -> usize { self.bits.count_ones() as usize }

    /// Iterate members in channel index order (Up, Down, Left, Right, Confirm).
    pub fn iter(&self) -> impl Iterator<Item = Channel> + '_ {
        Channel::ALL.into_iter().filter(|channel| self.contains(*channel))
    }
}

impl FromIterator<Channel> for PressSet {
    fn from_iter<T: IntoIterator<Item = Channel>>(iter: T) -> Self {
        let mut set = Self::empty();
        for channel in iter {
            set.insert(channel);
        }
        set
    }
}

// =============================================================================
// Input Router
// =============================================================================

/// Polls every channel once per tick and debounces each independently.
pub struct InputRouter<I> {
    input: I,
    debouncers: [Debouncer; CHANNEL_COUNT],
}

impl<I: RawInput> InputRouter<I> {
    /// Create a router with the default debounce delay on every channel.
    pub const fn new(input: I) -> Self {
        Self {
            input,
            debouncers: [Debouncer::new(); CHANNEL_COUNT],
        }
    }

    /// Create a router with a custom debounce delay on every channel.
    pub const fn with_delay(
        input: I,
        delay_ms: u64,
    ) -> Self {
        Self {
            input,
            debouncers: [Debouncer::with_delay(delay_ms); CHANNEL_COUNT],
        }
    }

    /// Read and debounce every channel against a single `now_ms`.
    ///
    /// Returns exactly the channels whose accepted state just became pressed.
    /// Call once per tick so all debounce timers share the same timestamp.
    pub fn poll_all(
        &mut self,
        now_ms: u64,
    ) -> PressSet {
        let mut pressed = PressSet::empty();

        for channel in Channel::ALL {
            let is_high = self.input.is_high(channel);
            if self.debouncers[channel.index()].classify(is_high, now_ms) == Some(Edge::Pressed) {
                pressed.insert(channel);
            }
        }

        pressed
    }

    /// Whether a channel's debounced state is currently pressed.
    #[inline]
    pub const fn is_held(
        &self,
        channel: Channel,
    ) -> bool {
        self.debouncers[channel.index()].is_pressed()
    }

    /// Borrow the raw input source.
    #[inline]
    pub const fn input(&self) -> &I { &self.input }

    /// Mutably borrow the raw input source (the simulator feeds key state through this).
    #[inline]
    pub fn input_mut(&mut self) -> &mut I { &mut self.input }
}

// =============================================================================
// Unit Tests
// =============================================================================
