//! Frame rendering from a navigation [`Snapshot`].
//!
//! Layout on the 128x64 panel:
//!
//! ```text
//!  y=0   MESSAGE_
//!  y=20   A B C D E F G H I J
//!  y=32   K L M N O P Q R S T
//!  y=44   U V W X Y Z 0 1 2 3
//!  y=56   4 5 6 7 8 9 . , ! ?
//! ```
//!
//! The selected cell gets a 12x13 outline. The `_` blink glyph sits right
//! after the last message character and is only drawn while the blink phase
//! is visible.
//!
//! [`RenderState`] remembers the last drawn snapshot so a platform with a slow
//! bus (the SSD1306 over I2C) only redraws and flushes when the frame changed.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;

use crate::config::{
    COL_PITCH,
    GRID_COLS,
    GRID_ORIGIN_X,
    HIGHLIGHT_HEIGHT,
    HIGHLIGHT_INSET,
    HIGHLIGHT_WIDTH,
    ROW_OFFSETS,
};
use crate::grid::CHARSET;
use crate::navigation::Snapshot;
use crate::styles::{BACKGROUND, GRID_STYLE, HIGHLIGHT_STYLE, MESSAGE_ADVANCE, MESSAGE_STYLE, TOP_LEFT};

/// Glyph drawn as the text-entry cursor.
pub const BLINK_GLYPH: &str = "_";

// =============================================================================
// Geometry
// =============================================================================

/// Top-left corner of a grid cell's glyph.
#[inline]
pub const fn cell_origin(
    row: usize,
    col: usize,
) -> Point {
    Point::new(GRID_ORIGIN_X + col as i32 * COL_PITCH, ROW_OFFSETS[row])
}

/// Outline drawn around the selected cell.
pub fn highlight_rect(
    row: usize,
    col: usize,
) -> Rectangle {
    let origin = cell_origin(row, col);
    Rectangle::new(
        Point::new(origin.x - HIGHLIGHT_INSET, origin.y - HIGHLIGHT_INSET),
        Size::new(HIGHLIGHT_WIDTH, HIGHLIGHT_HEIGHT),
    )
}

/// Position of the blink glyph for a message of `len` characters.
#[inline]
pub const fn blink_glyph_origin(len: usize) -> Point { Point::new((len as u32 * MESSAGE_ADVANCE) as i32, 0) }

// =============================================================================
// Drawing
// =============================================================================

/// Draw one full frame: clear, message, blink glyph, grid, highlight.
///
/// Draw errors are ignored; the targets used by the firmware and simulator
/// are infallible.
pub fn draw_frame<D>(
    display: &mut D,
    frame: &Snapshot,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    display.clear(BACKGROUND).ok();
    draw_message(display, frame.message.as_str(), frame.blink_visible);
    draw_grid(display);
    draw_highlight(display, frame.cursor_row, frame.cursor_col);
}

/// Draw the composed message and, if visible, the blink glyph after it.
pub fn draw_message<D>(
    display: &mut D,
    message: &str,
    blink_visible: bool,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    Text::with_text_style(message, Point::zero(), MESSAGE_STYLE, TOP_LEFT)
        .draw(display)
        .ok();

    if blink_visible {
        Text::with_text_style(BLINK_GLYPH, blink_glyph_origin(message.len()), MESSAGE_STYLE, TOP_LEFT)
            .draw(display)
            .ok();
    }
}

/// Draw all 40 grid characters.
pub fn draw_grid<D>(display: &mut D)
where
    D: DrawTarget<Color = BinaryColor>,
{
    let mut buf = [0u8; 4];
    for (i, c) in CHARSET.iter().enumerate() {
        let glyph = c.encode_utf8(&mut buf);
        Text::with_text_style(glyph, cell_origin(i / GRID_COLS, i % GRID_COLS), GRID_STYLE, TOP_LEFT)
            .draw(display)
            .ok();
    }
}

/// Draw the selection outline around a cell.
pub fn draw_highlight<D>(
    display: &mut D,
    row: usize,
    col: usize,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    highlight_rect(row, col)
        .into_styled(HIGHLIGHT_STYLE)
        .draw(display)
        .ok();
}

// =============================================================================
// Render State Tracking
// =============================================================================

/// Tracks the last drawn frame to skip redundant redraws.
#[derive(Default)]
pub struct RenderState {
    last: Option<Snapshot>,
    frames_drawn: u32,
}

impl RenderState {
    pub const fn new() -> Self {
        Self {
            last: None,
            frames_drawn: 0,
        }
    }

    /// Returns true if `frame` differs from the last drawn one, and records it.
    pub fn needs_redraw(
        &mut self,
        frame: &Snapshot,
    ) -> bool {
        if self.last.as_ref() == Some(frame) {
            return false;
        }
        self.last = Some(frame.clone());
        self.frames_drawn = self.frames_drawn.wrapping_add(1);
        true
    }

    /// Force the next frame to be redrawn (e.g. after a failed flush).
    pub fn invalidate(&mut self) { self.last = None; }

    /// Number of frames that needed drawing so far.
    #[inline]
    pub const fn frames_drawn(&self) -> u32 { self.frames_drawn }
}

// =============================================================================
// Unit Tests
// =============================================================================
