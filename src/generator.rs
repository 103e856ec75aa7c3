use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::ImageFormat;

use crate::models::{FixtureSpec, PixelGrid};

/// Encode the grid as PNG in memory.
///
/// Encoding finishes before anything touches the filesystem, so a failed
/// encode never leaves a truncated file behind.
pub fn encode_png(grid: &PixelGrid) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    {
        let mut cursor = Cursor::new(&mut buffer);
        grid.as_image()
            .write_to(&mut cursor, ImageFormat::Png)
            .with_context(|| {
                format!("Failed to encode {}x{} RGB image as PNG", grid.width(), grid.height())
            })?;
    }
    Ok(buffer)
}

/// Confirmation line printed after a successful write
pub fn confirmation_message(file_name: &Path) -> String {
    format!("Test image created: {}", file_name.display())
}

/// Writes a solid-color image fixture to disk.
#[derive(Debug, Clone, Default)]
pub struct ImageFixtureGenerator {
    spec: FixtureSpec,
    output_dir: Option<PathBuf>,
}

impl ImageFixtureGenerator {
    /// Generator for the default fixture: 300x200 white `test_image.png` in the cwd
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_spec(spec: FixtureSpec) -> Self {
        Self {
            spec,
            output_dir: None,
        }
    }

    /// Resolve the file name against `dir` instead of the current directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn output_path(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.join(&self.spec.file_name),
            None => self.spec.file_name.clone(),
        }
    }

    pub fn render(&self) -> Result<PixelGrid> {
        PixelGrid::from_spec(&self.spec)
    }

    /// Render, encode and write the fixture. Existing files are truncated.
    pub fn write(&self) -> Result<PathBuf> {
        let grid = self.render()?;
        let bytes = encode_png(&grid)?;

        let path = self.output_path();
        std::fs::write(&path, &bytes)
            .with_context(|| format!("Failed to write image to {:?}", path))?;
        Ok(path)
    }

    /// Write the fixture and print the confirmation line to stdout.
    pub fn generate(&self) -> Result<PathBuf> {
        let path = self.write()?;
        println!("{}", confirmation_message(&self.spec.file_name));
        Ok(path)
    }
}
