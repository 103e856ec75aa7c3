pub mod generator;
pub mod models;

pub use generator::{ImageFixtureGenerator, confirmation_message, encode_png};
pub use models::{
    Color, DEFAULT_FILE_NAME, DEFAULT_HEIGHT, DEFAULT_WIDTH, FixtureSpec, PixelGrid,
};
