#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

use fixturegen::{Color, ImageFixtureGenerator};
use image::RgbImage;

/// Creates a generator for the default fixture that writes into a fresh temp directory.
/// Returns both the generator and the temp directory (which must be kept alive).
pub fn create_test_generator() -> (ImageFixtureGenerator, tempfile::TempDir) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let generator = ImageFixtureGenerator::new().with_output_dir(dir.path());
    (generator, dir)
}

/// Decodes the PNG at `path` into an RGB buffer.
pub fn load_rgb(path: &Path) -> RgbImage {
    image::open(path)
        .expect("Failed to decode written image")
        .to_rgb8()
}

/// Runs the compiled binary with `dir` as its working directory.
pub fn run_binary_in(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fixturegen"))
        .current_dir(dir)
        .output()
        .expect("Failed to run fixturegen binary")
}

/// Color constants for tests
pub const TEST_RED: Color = Color { r: 255, g: 0, b: 0 };
