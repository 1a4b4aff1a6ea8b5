//! Async SSD1306 OLED driver for 128x64 panels on I2C.
//!
//! # Architecture
//!
//! The driver is split into two components:
//! - [`FrameBuffer`]: Implements `DrawTarget<Color = BinaryColor>`, owns no hardware
//! - [`Ssd1306`]: Owns the I2C bus, sends commands and pushes a framebuffer
//!
//! Drawing happens entirely in RAM; [`Ssd1306::flush`] then writes the whole
//! 1KB buffer in one pass. The bus is any `embedded_hal_async::i2c::I2c`, so the
//! driver runs against embassy-rp on the device and a mock bus in tests.
//!
//! # Memory Layout
//!
//! The panel is addressed in 8 pages of 8 rows. Byte `page * 128 + x` holds
//! column `x` of that page; bit `n` is row `page * 8 + n` (LSB at the top).

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_hal_async::i2c::I2c;

/// Display dimensions.
pub const WIDTH: usize = 128;
pub const HEIGHT: usize = 64;
pub const PAGES: usize = HEIGHT / 8;
const BUFFER_SIZE: usize = WIDTH * PAGES;

/// First byte of an I2C write: Co=0, D/C#=0 (command stream).
const COMMAND_PREFIX: u8 = 0x00;
/// First byte of an I2C write: Co=0, D/C#=1 (data stream).
const DATA_PREFIX: u8 = 0x40;

/// SSD1306 commands
mod cmd {
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_COLUMN_ADDR: u8 = 0x21;
    pub const SET_PAGE_ADDR: u8 = 0x22;
    pub const DEACTIVATE_SCROLL: u8 = 0x2E;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const DISPLAY_RAM: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
}

/// Power-up sequence for a 128x64 module with the internal charge pump.
/// Each entry is one command with its argument bytes.
const INIT_SEQUENCE: &[&[u8]] = &[
    &[cmd::DISPLAY_OFF],
    &[cmd::SET_CLOCK_DIV, 0x80],
    &[cmd::SET_MUX_RATIO, (HEIGHT - 1) as u8],
    &[cmd::SET_DISPLAY_OFFSET, 0x00],
    &[cmd::SET_START_LINE],
    &[cmd::SET_CHARGE_PUMP, 0x14],
    &[cmd::SET_MEMORY_MODE, 0x00], // horizontal addressing
    &[cmd::SET_SEG_REMAP],
    &[cmd::SET_COM_SCAN_DEC],
    &[cmd::SET_COM_PINS, 0x12],
    &[cmd::SET_CONTRAST, 0xCF],
    &[cmd::SET_PRECHARGE, 0xF1],
    &[cmd::SET_VCOM_DETECT, 0x40],
    &[cmd::DISPLAY_RAM],
    &[cmd::SET_NORMAL],
    &[cmd::DEACTIVATE_SCROLL],
    &[cmd::DISPLAY_ON],
];

// =============================================================================
// Framebuffer
// =============================================================================

/// 1 bit per pixel framebuffer in SSD1306 page order.
pub struct FrameBuffer {
    buffer: [u8; BUFFER_SIZE],
}

impl FrameBuffer {
    /// Create a blank (all pixels off) framebuffer.
    pub const fn new() -> Self {
        Self {
            buffer: [0u8; BUFFER_SIZE],
        }
    }

    /// Fill the whole buffer with one color.
    pub fn clear_buffer(
        &mut self,
        color: BinaryColor,
    ) {
        let fill = if color.is_on() { 0xFF } else { 0x00 };
        self.buffer.fill(fill);
    }

    /// Set a pixel. Points outside the panel are ignored.
    #[inline]
    pub fn set_pixel(
        &mut self,
        x: i32,
        y: i32,
        color: BinaryColor,
    ) {
        if x >= 0 && x < WIDTH as i32 && y >= 0 && y < HEIGHT as i32 {
            let idx = (y as usize / 8) * WIDTH + x as usize;
            let mask = 1u8 << (y as usize % 8);
            if color.is_on() {
                self.buffer[idx] |= mask;
            } else {
                self.buffer[idx] &= !mask;
            }
        }
    }

    /// Read back a pixel. Points outside the panel read as off.
    pub fn pixel(
        &self,
        x: i32,
        y: i32,
    ) -> BinaryColor {
        if x >= 0 && x < WIDTH as i32 && y >= 0 && y < HEIGHT as i32 {
            let idx = (y as usize / 8) * WIDTH + x as usize;
            BinaryColor::from(self.buffer[idx] & (1 << (y as usize % 8)) != 0)
        } else {
            BinaryColor::Off
        }
    }

    /// One 128-byte page.
    #[inline]
    pub fn page(
        &self,
        page: usize,
    ) -> &[u8] {
        &self.buffer[page * WIDTH..(page + 1) * WIDTH]
    }

    /// Raw buffer in transfer order.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8] { &self.buffer }
}

impl Default for FrameBuffer {
    fn default() -> Self { Self::new() }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size { Size::new(WIDTH as u32, HEIGHT as u32) }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let drawable_area = area.intersection(&self.bounding_box());
        if drawable_area.size == Size::zero() {
            return Ok(());
        }

        for point in drawable_area.points() {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.clear_buffer(color);
        Ok(())
    }
}

// =============================================================================
// Driver
// =============================================================================

/// SSD1306 driver - owns the I2C bus.
pub struct Ssd1306<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> Ssd1306<I2C>
where
    I2C: I2c,
{
    /// Create a driver for the panel at `address` (usually 0x3C).
    pub const fn new(
        i2c: I2C,
        address: u8,
    ) -> Self {
        Self { i2c, address }
    }

    /// Run the power-up sequence. The panel is on afterwards.
    pub async fn init(&mut self) -> Result<(), I2C::Error> {
        for command in INIT_SEQUENCE {
            self.command(command).await?;
        }
        Ok(())
    }

    /// Send one command with up to 7 argument bytes.
    async fn command(
        &mut self,
        bytes: &[u8],
    ) -> Result<(), I2C::Error> {
        let mut frame = [0u8; 8];
        let len = bytes.len().min(frame.len() - 1);
        frame[0] = COMMAND_PREFIX;
        frame[1..=len].copy_from_slice(&bytes[..len]);
        self.i2c.write(self.address, &frame[..=len]).await
    }

    /// Push the whole framebuffer to the panel.
    ///
    /// Resets the address window to the full screen first, then streams one
    /// page per I2C write.
    pub async fn flush(
        &mut self,
        framebuffer: &FrameBuffer,
    ) -> Result<(), I2C::Error> {
        self.command(&[cmd::SET_COLUMN_ADDR, 0, (WIDTH - 1) as u8])
            .await?;
        self.command(&[cmd::SET_PAGE_ADDR, 0, (PAGES - 1) as u8])
            .await?;

        let mut data = [0u8; WIDTH + 1];
        data[0] = DATA_PREFIX;
        for page in 0..PAGES {
            data[1..].copy_from_slice(framebuffer.page(page));
            self.i2c.write(self.address, &data).await?;
        }
        Ok(())
    }

    /// Set display contrast (0-255).
    pub async fn set_contrast(
        &mut self,
        contrast: u8,
    ) -> Result<(), I2C::Error> {
        self.command(&[cmd::SET_CONTRAST, contrast]).await
    }

    /// Turn the panel on or off. RAM contents are kept.
    pub async fn set_display_on(
        &mut self,
        on: bool,
    ) -> Result<(), I2C::Error> {
        self.command(&[if on { cmd::DISPLAY_ON } else { cmd::DISPLAY_OFF }])
            .await
    }

    /// Invert display colors.
    pub async fn set_inverted(
        &mut self,
        inverted: bool,
    ) -> Result<(), I2C::Error> {
        self.command(&[if inverted { cmd::SET_INVERSE } else { cmd::SET_NORMAL }])
            .await
    }

    /// Give the bus back.
    pub fn release(self) -> I2C { self.i2c }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embassy_futures::block_on;
    use embedded_hal_async::i2c::{ErrorKind, ErrorType, Operation};
    use textpad_common::{Channel, NavigationState, draw_frame};

    use super::*;

    /// I2C bus that records every write and can fail after N transactions.
    #[derive(Default)]
    struct MockI2c {
        writes: Vec<(u8, Vec<u8>)>,
        fail_after: Option<usize>,
    }

    impl MockI2c {
        fn failing_after(n: usize) -> Self {
            Self {
                writes: Vec::new(),
                fail_after: Some(n),
            }
        }

        /// Command bytes (without prefix) of every command write.
        fn commands(&self) -> Vec<Vec<u8>> {
            self.writes
                .iter()
                .filter(|(_, bytes)| bytes[0] == COMMAND_PREFIX)
                .map(|(_, bytes)| bytes[1..].to_vec())
                .collect()
        }
    }

    impl ErrorType for MockI2c {
        type Error = ErrorKind;
    }

    impl I2c for MockI2c {
        async fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.fail_after.is_some_and(|n| self.writes.len() >= n) {
                return Err(ErrorKind::Other);
            }
            for op in operations {
                if let Operation::Write(bytes) = op {
                    self.writes.push((address, bytes.to_vec()));
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_pixel_maps_to_page_and_bit() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(0, 0, BinaryColor::On);
        fb.set_pixel(5, 9, BinaryColor::On);
        fb.set_pixel(127, 63, BinaryColor::On);

        let bytes = fb.as_bytes();
        assert_eq!(bytes.len(), 1024);
        assert_eq!(bytes[0], 0b0000_0001);
        assert_eq!(bytes[WIDTH + 5], 0b0000_0010);
        assert_eq!(bytes[7 * WIDTH + 127], 0b1000_0000);
        assert_eq!(bytes.iter().map(|b| b.count_ones()).sum::<u32>(), 3);
    }

    #[test]
    fn test_pixel_clear_only_touches_its_bit() {
        let mut fb = FrameBuffer::new();
        fb.clear_buffer(BinaryColor::On);
        fb.set_pixel(10, 17, BinaryColor::Off);
        assert_eq!(fb.page(2)[10], 0b1111_1101);
        assert_eq!(fb.pixel(10, 17), BinaryColor::Off);
        assert_eq!(fb.pixel(10, 16), BinaryColor::On);
    }

    #[test]
    fn test_out_of_bounds_ignored() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(-1, 0, BinaryColor::On);
        fb.set_pixel(128, 0, BinaryColor::On);
        fb.set_pixel(0, 64, BinaryColor::On);
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
        assert_eq!(fb.pixel(200, 200), BinaryColor::Off);
    }

    #[test]
    fn test_fill_solid_clips_to_screen() {
        let mut fb = FrameBuffer::new();
        fb.fill_solid(&Rectangle::new(Point::new(120, 60), Size::new(20, 20)), BinaryColor::On)
            .ok();
        assert_eq!(fb.pixel(127, 63), BinaryColor::On);
        assert_eq!(fb.pixel(120, 60), BinaryColor::On);
        assert_eq!(fb.pixel(119, 60), BinaryColor::Off);
        assert_eq!(fb.as_bytes().iter().map(|b| b.count_ones()).sum::<u32>(), 8 * 4);
    }

    #[test]
    fn test_frame_renders_into_framebuffer() {
        let mut fb = FrameBuffer::new();
        fb.clear_buffer(BinaryColor::On);
        let mut state = NavigationState::new();
        state.apply(Channel::Down);
        draw_frame(&mut fb, &state.snapshot());

        // Highlight outline of cell (1, 0): top-left (3, 29), 12x13
        assert_eq!(fb.pixel(3, 29), BinaryColor::On);
        assert_eq!(fb.pixel(14, 41), BinaryColor::On);
        assert_eq!(fb.pixel(3, 17), BinaryColor::Off);
        assert_eq!(fb.pixel(127, 0), BinaryColor::Off);
    }

    #[test]
    fn test_init_sends_power_up_sequence() {
        let mut display = Ssd1306::new(MockI2c::default(), 0x3C);
        block_on(display.init()).unwrap();

        let bus = display.release();
        assert!(bus.writes.iter().all(|(addr, bytes)| *addr == 0x3C && bytes[0] == COMMAND_PREFIX));

        let commands = bus.commands();
        assert_eq!(commands.len(), INIT_SEQUENCE.len());
        assert_eq!(commands.first().unwrap(), &vec![cmd::DISPLAY_OFF]);
        assert_eq!(commands.last().unwrap(), &vec![cmd::DISPLAY_ON]);
        assert!(commands.contains(&vec![cmd::SET_CHARGE_PUMP, 0x14]));
        assert!(commands.contains(&vec![cmd::SET_MUX_RATIO, 63]));
    }

    #[test]
    fn test_flush_streams_pages() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(0, 0, BinaryColor::On);
        fb.set_pixel(64, 40, BinaryColor::On);

        let mut display = Ssd1306::new(MockI2c::default(), 0x3C);
        block_on(display.flush(&fb)).unwrap();
        let bus = display.release();

        assert_eq!(bus.writes.len(), 2 + PAGES);
        assert_eq!(bus.writes[0].1, vec![COMMAND_PREFIX, cmd::SET_COLUMN_ADDR, 0, 127]);
        assert_eq!(bus.writes[1].1, vec![COMMAND_PREFIX, cmd::SET_PAGE_ADDR, 0, 7]);

        for (page, (_, data)) in bus.writes[2..].iter().enumerate() {
            assert_eq!(data.len(), WIDTH + 1);
            assert_eq!(data[0], DATA_PREFIX);
            assert_eq!(&data[1..], fb.page(page));
        }
        assert_eq!(bus.writes[2].1[1], 0b0000_0001);
        assert_eq!(bus.writes[2 + 5].1[1 + 64], 0b0000_0001);
    }

    #[test]
    fn test_runtime_commands() {
        let mut display = Ssd1306::new(MockI2c::default(), 0x3D);
        block_on(async {
            display.set_contrast(0x10).await.unwrap();
            display.set_inverted(true).await.unwrap();
            display.set_inverted(false).await.unwrap();
            display.set_display_on(false).await.unwrap();
        });

        let bus = display.release();
        assert!(bus.writes.iter().all(|(addr, _)| *addr == 0x3D));
        assert_eq!(
            bus.commands(),
            vec![
                vec![cmd::SET_CONTRAST, 0x10],
                vec![cmd::SET_INVERSE],
                vec![cmd::SET_NORMAL],
                vec![cmd::DISPLAY_OFF],
            ]
        );
    }

    #[test]
    fn test_bus_error_propagates() {
        let mut display = Ssd1306::new(MockI2c::failing_after(3), 0x3C);
        assert_eq!(block_on(display.init()), Err(ErrorKind::Other));
        assert_eq!(display.release().writes.len(), 3);

        let mut display = Ssd1306::new(MockI2c::failing_after(4), 0x3C);
        assert_eq!(block_on(display.flush(&FrameBuffer::new())), Err(ErrorKind::Other));
    }
}
