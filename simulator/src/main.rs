//! TextPad Simulator for desktop platforms.
//!
//! This is the simulator binary that runs the shared TextPad logic on the host
//! using the embedded-graphics-simulator crate. The SDL window stands in for
//! the 128x64 OLED and the keyboard stands in for the five buttons:
//!
//! - **Arrow keys**: Move the grid cursor
//! - **Enter / Space**: Append the selected character (max 8)
//! - **Escape**: Quit
//!
//! Log output goes through `env_logger`; set `RUST_LOG=debug` to also see the
//! message length after each append.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]

mod keys;
mod timing;

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{BinaryColorTheme, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::{debug, info};
use textpad_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use textpad_common::{InputRouter, NavigationState, RenderState, Transition, draw_frame};

use crate::keys::{RELEASED, set_key_level};
use crate::timing::FRAME_TIME;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut display: SimulatorDisplay<BinaryColor> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new()
        .theme(BinaryColorTheme::OledBlue)
        .scale(4)
        .build();
    let mut window = Window::new("TextPad Sim", &output_settings);

    let mut router = InputRouter::new(RELEASED);
    let mut state = NavigationState::new();
    let mut render_state = RenderState::new();
    let start = Instant::now();

    // First frame before the event loop so the window has content to show
    let frame = state.snapshot();
    render_state.needs_redraw(&frame);
    draw_frame(&mut display, &frame);
    window.update(&display);

    info!("Main loop starting (cursor policy: {:?})", state.policy());

    loop {
        let frame_start = Instant::now();

        // Handle events
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    if keycode == Keycode::ESCAPE {
                        return;
                    }
                    set_key_level(router.input_mut(), keycode, true);
                }
                SimulatorEvent::KeyUp { keycode, .. } => {
                    set_key_level(router.input_mut(), keycode, false);
                }
                _ => {}
            }
        }

        let now_ms = start.elapsed().as_millis() as u64;

        // Handle button presses (index order: Up, Down, Left, Right, Confirm)
        for channel in router.poll_all(now_ms).iter() {
            match state.apply(channel) {
                Transition::Moved(cursor) => {
                    info!(
                        "{}: cursor ({}, {}) '{}'",
                        channel.label(),
                        cursor.row(),
                        cursor.col(),
                        cursor.selected()
                    );
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
            draw_frame(&mut display, &frame);
        }

        window.update(&display);

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }
}
