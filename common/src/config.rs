//! Timing, grid and layout configuration constants.
//!
//! Everything here is a compile-time constant. Timing and grid values are part
//! of the core contract; the layout section only affects how
//! [`draw_frame`](crate::render::draw_frame) places things on the 128x64 panel
//! and can change without touching the navigation logic.

// =============================================================================
// Timing
// =============================================================================

/// A raw level must stay unchanged for longer than this before it is accepted.
pub const DEBOUNCE_MS: u64 = 50;

/// Period of the text-entry cursor blink (one toggle per interval).
pub const BLINK_INTERVAL_MS: u64 = 500;

// =============================================================================
// Character Grid
// =============================================================================

/// Number of columns in the character grid.
pub const GRID_COLS: usize = 10;

/// Number of rows in the character grid.
pub const GRID_ROWS: usize = 4;

/// Maximum number of characters in the composed message.
pub const MESSAGE_CAPACITY: usize = 8;

/// Number of physical input channels (Up, Down, Left, Right, Confirm).
pub const CHANNEL_COUNT: usize = 5;

// =============================================================================
// Display Layout
// =============================================================================

/// Display width in pixels (SSD1306 128x64).
pub const SCREEN_WIDTH: u32 = 128;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 64;

/// Top edge of each grid row's text.
pub const ROW_OFFSETS: [i32; GRID_ROWS] = [20, 32, 44, 56];

/// X position of the first grid column's glyph.
pub const GRID_ORIGIN_X: i32 = 6;

/// Horizontal distance between grid columns.
pub const COL_PITCH: i32 = 12;

/// The highlight rectangle starts this many pixels up and left of the glyph.
pub const HIGHLIGHT_INSET: i32 = 3;

/// Highlight rectangle width.
pub const HIGHLIGHT_WIDTH: u32 = 12;

/// Highlight rectangle height.
pub const HIGHLIGHT_HEIGHT: u32 = 13;

const _: () = assert!(GRID_ORIGIN_X + (GRID_COLS as i32 - 1) * COL_PITCH + COL_PITCH <= SCREEN_WIDTH as i32);
