//! The fixed character grid and cursor movement over it.
//!
//! The grid is 4 rows by 10 columns, indexed `row * 10 + col`:
//!
//! ```text
//!   A B C D E F G H I J
//!   K L M N O P Q R S T
//!   U V W X Y Z 0 1 2 3
//!   4 5 6 7 8 9 . , ! ?
//! ```
//!
//! A [`Cursor`] can only be built at the origin and moved through a
//! [`CursorPolicy`], so it always addresses a valid cell.

use crate::config::{GRID_COLS, GRID_ROWS};

/// Selectable characters in row-major order.
pub const CHARSET: [char; GRID_COLS * GRID_ROWS] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', //
    'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', //
    'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', //
    '4', '5', '6', '7', '8', '9', '.', ',', '!', '?',
];

/// Character at a grid cell, or `None` outside the grid.
pub const fn char_at(
    row: usize,
    col: usize,
) -> Option<char> {
    if row < GRID_ROWS && col < GRID_COLS {
        Some(CHARSET[row * GRID_COLS + col])
    } else {
        None
    }
}

// =============================================================================
// Cursor Policy
// =============================================================================

/// What happens when the cursor is moved past a grid edge.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CursorPolicy {
    /// Re-enter from the opposite edge (`(pos + len +/- 1) % len`).
    Wrap,
    /// Stay on the edge cell.
    Clamp,
}

impl CursorPolicy {
    /// Move `pos` one step along an axis of `len` cells.
    pub const fn step(
        self,
        pos: usize,
        forward: bool,
        len: usize,
    ) -> usize {
        match (self, forward) {
            (Self::Wrap, true) => (pos + 1) % len,
            (Self::Wrap, false) => (pos + len - 1) % len,
            (Self::Clamp, true) => {
                if pos + 1 < len {
                    pos + 1
                } else {
                    pos
                }
            }
            (Self::Clamp, false) => pos.saturating_sub(1),
        }
    }
}

/// `Wrap`, unless the `clamp-cursor` feature is enabled.
impl Default for CursorPolicy {
    fn default() -> Self {
        if cfg!(feature = "clamp-cursor") {
            Self::Clamp
        } else {
            Self::Wrap
        }
    }
}

// =============================================================================
// Cursor
// =============================================================================

/// Position of the selection highlight on the grid.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    row: usize,
    col: usize,
}

impl Cursor {
    /// Top-left cell ('A').
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    #[inline]
    pub const fn row(self) -> usize { self.row }

    #[inline]
    pub const fn col(self) -> usize { self.col }

    /// Linear grid index (`row * 10 + col`).
    #[inline]
    pub const fn index(self) -> usize { self.row * GRID_COLS + self.col }

    /// Character under the cursor.
    #[inline]
    pub const fn selected(self) -> char { CHARSET[self.index()] }

    pub const fn up(
        self,
        policy: CursorPolicy,
    ) -> Self {
        Self {
            row: policy.step(self.row, false, GRID_ROWS),
            col: self.col,
        }
    }

    pub const fn down(
        self,
        policy: CursorPolicy,
    ) -> Self {
        Self {
            row: policy.step(self.row, true, GRID_ROWS),
            col: self.col,
        }
    }

    pub const fn left(
        self,
        policy: CursorPolicy,
    ) -> Self {
        Self {
            row: self.row,
            col: policy.step(self.col, false, GRID_COLS),
        }
    }

    pub const fn right(
        self,
        policy: CursorPolicy,
    ) -> Self {
        Self {
            row: self.row,
            col: policy.step(self.col, true, GRID_COLS),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
