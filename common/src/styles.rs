//! Pre-computed static text and primitive styles.
//!
//! Defined as `const` so no style objects are built per frame. The panel is
//! monochrome: `BinaryColor::On` is a lit pixel, `Off` is background.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::primitives::PrimitiveStyle;
use embedded_graphics::text::{Baseline, TextStyle, TextStyleBuilder};
use profont::PROFONT_12_POINT;

/// Background colour used when clearing a frame.
pub const BACKGROUND: BinaryColor = BinaryColor::Off;

/// Foreground colour for text and outlines.
pub const FOREGROUND: BinaryColor = BinaryColor::On;

// =============================================================================
// Fonts
// =============================================================================

/// Small font for the character grid (6x10 pixels).
pub const GRID_FONT: &MonoFont = &FONT_6X10;

/// Large font for the composed message and the blink glyph.
pub const MESSAGE_FONT: &MonoFont = &PROFONT_12_POINT;

/// Horizontal advance of one message character.
pub const MESSAGE_ADVANCE: u32 = MESSAGE_FONT.character_size.width + MESSAGE_FONT.character_spacing;

// =============================================================================
// Styles
// =============================================================================

/// Text positions refer to the glyph's top-left corner.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new().baseline(Baseline::Top).build();

pub const GRID_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(GRID_FONT, FOREGROUND);

pub const MESSAGE_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(MESSAGE_FONT, FOREGROUND);

/// 1px outline around the selected grid cell.
pub const HIGHLIGHT_STYLE: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_stroke(FOREGROUND, 1);
