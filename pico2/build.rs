//! Build script for textpad-pico2
//!
//! Puts `memory.x` on the linker search path for the RP2350 binary.

use std::path::PathBuf;
use std::{env, fs};

fn main() {
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");

    // Host test builds of the library do not link against memory.x
    if env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default() != "arm" {
        return;
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());

    if let Err(e) = fs::copy(manifest_dir.join("memory.x"), out_dir.join("memory.x")) {
        panic!("Failed to copy memory.x: {}", e);
    }
    println!("cargo:rustc-link-search={}", out_dir.display());
}
