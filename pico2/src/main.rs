//! TextPad Firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Five-button text entry on a 128x64 SSD1306 OLED over I2C.
//!
//! # Architecture
//!
//! A single embassy task runs a fixed-rate loop paced by a [`Ticker`]:
//! poll buttons, apply press edges, advance the blink timer, and redraw only
//! when the frame changed. Drawing goes to a RAM framebuffer which is then
//! flushed to the panel over async I2C.
//!
//! # Button Controls
//!
//! - **Up / Down / Left / Right** (GPIO13/12/11/10): Move the grid cursor
//! - **Confirm** (GPIO9): Append the selected character (max 8)

#![no_std]
#![no_main]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// Modules only used in the binary (not testable on host)
mod buttons;
mod display;

// Re-export testable modules from library for local use
mod config {
    pub use textpad_pico2::config::*;
}

use defmt::{debug, info, warn};
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::{Duration, Instant, Ticker};
use textpad_common::{InputRouter, NavigationState, RenderState, Transition, draw_frame};
use textpad_pico2::drivers::{FrameBuffer, Ssd1306};
use {defmt_rtt as _, panic_probe as _};

use crate::buttons::ButtonPins;
use crate::config::{DISPLAY_ADDR, DISPLAY_CONTRAST, TICK_MS};
use crate::display::display_i2c_config;

bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"textpad"),
    embassy_rp::binary_info::rp_program_description!(c"Five-button text entry on SSD1306 OLED"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("TextPad starting...");

    let p = embassy_rp::init(Default::default());

    // I2C0 on GPIO4 (SDA) / GPIO5 (SCL)
    let bus = I2c::new_async(p.I2C0, p.PIN_5, p.PIN_4, Irqs, display_i2c_config());
    let mut display = Ssd1306::new(bus, DISPLAY_ADDR);

    match display.init().await {
        Ok(()) => info!("Display initialized at {=u8:#x}", DISPLAY_ADDR),
        Err(e) => warn!("Display init failed: {}", e),
    }
    if let Err(e) = display.set_contrast(DISPLAY_CONTRAST).await {
        warn!("Display contrast failed: {}", e);
    }

    // Initialize buttons (active-low with internal pull-up)
    // Channel order: Up=13, Down=12, Left=11, Right=10, Confirm=9
    let buttons = ButtonPins::new([
        Input::new(p.PIN_13, Pull::Up),
        Input::new(p.PIN_12, Pull::Up),
        Input::new(p.PIN_11, Pull::Up),
        Input::new(p.PIN_10, Pull::Up),
        Input::new(p.PIN_9, Pull::Up),
    ]);
    let mut router = InputRouter::new(buttons);

    info!("Buttons initialized!");

    let mut state = NavigationState::new();
    let mut render_state = RenderState::new();
    let mut framebuffer = FrameBuffer::new();
    let mut ticker = Ticker::every(Duration::from_millis(TICK_MS));

    info!("Main loop starting (cursor policy: {})", state.policy());

    loop {
        let now_ms = Instant::now().as_millis();

        // Handle button presses (index order: Up, Down, Left, Right, Confirm)
        for channel in router.poll_all(now_ms).iter() {
            match state.apply(channel) {
                Transition::Moved(cursor) => {
                    info!("{}: cursor {} '{}'", channel.label(), cursor, cursor.selected());
                }
                Transition::Appended(c) => {
                    info!("{}: appended '{}'", channel.label(), c);
                    debug!("Message length: {}", state.message().len());
                }
                Transition::MessageFull => {
                    info!("{}: message full, ignored", channel.label());
                }
            }
        }

        state.update_blink(now_ms);

        let frame = state.snapshot();
        if render_state.needs_redraw(&frame) {
            draw_frame(&mut framebuffer, &frame);
            if let Err(e) = display.flush(&framebuffer).await {
                warn!("Display flush failed: {}", e);
                // Retry on the next tick
                render_state.invalidate();
            }
        }

        ticker.next().await;
    }
}
