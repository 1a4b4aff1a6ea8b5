//! Hardware drivers for the TextPad.
//!
//! - `ssd1306`: Async SSD1306 128x64 OLED driver over I2C with a page-organized framebuffer

mod ssd1306;

pub use ssd1306::{FrameBuffer, HEIGHT, PAGES, Ssd1306, WIDTH};
