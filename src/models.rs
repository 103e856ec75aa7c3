use std::path::PathBuf;

use anyhow::bail;
use image::{Rgb, RgbImage};

pub const DEFAULT_WIDTH: u32 = 300;
pub const DEFAULT_HEIGHT: u32 = 200;
pub const DEFAULT_FILE_NAME: &str = "test_image.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };
}

impl From<Color> for Rgb<u8> {
    fn from(color: Color) -> Self {
        Rgb([color.r, color.g, color.b])
    }
}

impl From<Rgb<u8>> for Color {
    fn from(pixel: Rgb<u8>) -> Self {
        let [r, g, b] = pixel.0;
        Color { r, g, b }
    }
}

/// Everything needed to produce one fixture file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureSpec {
    pub width: u32,
    pub height: u32,
    pub fill: Color,
    /// File name, resolved against the output directory
    pub file_name: PathBuf,
}

impl Default for FixtureSpec {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fill: Color::WHITE,
            file_name: PathBuf::from(DEFAULT_FILE_NAME),
        }
    }
}

/// Uniformly filled RGB pixel grid. Immutable once built.
#[derive(Debug, Clone)]
pub struct PixelGrid {
    image: RgbImage,
    fill: Color,
}

impl PixelGrid {
    pub fn new(width: u32, height: u32, fill: Color) -> anyhow::Result<Self> {
        if width == 0 || height == 0 {
            bail!("Pixel grid must not be empty (got {}x{})", width, height);
        }
        let channels = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(3));
        if channels.is_none() {
            bail!("Pixel grid {}x{} is too large to allocate", width, height);
        }
        let pixel: Rgb<u8> = fill.into();
        let image = RgbImage::from_pixel(width, height, pixel);
        Ok(Self { image, fill })
    }

    pub fn from_spec(spec: &FixtureSpec) -> anyhow::Result<Self> {
        Self::new(spec.width, spec.height, spec.fill)
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn as_image(&self) -> &RgbImage {
        &self.image
    }
}
