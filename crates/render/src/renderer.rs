use anyhow::{Context, Result};
use image::RgbaImage;
use ml::{EncodeError, PixelLayout, RawFrame};
use physics::{GameConfig, World};
use std::path::Path;

use crate::scene::{draw_ground, fill_rect, pipe_rects, Palette};

/// Draws a [`World`] into an RGBA frame at the logical resolution.
///
/// The renderer only reads the world. Draw order is background, pipes,
/// ground, player, so the ground strip covers the lower pipe ends.
pub struct FrameRenderer {
    config: GameConfig,
    palette: Palette,
}

impl FrameRenderer {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config, palette: Palette::default() }
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Rasterise `world` into a fresh `screen_width × screen_height` frame.
    #[must_use]
    pub fn render(&self, world: &World) -> RgbaImage {
        let cfg = &self.config;
        let mut img = RgbaImage::from_pixel(
            cfg.screen_width as u32,
            cfg.screen_height as u32,
            self.palette.background,
        );

        for rect in pipe_rects(world, cfg) {
            fill_rect(&mut img, rect, self.palette.pipe);
        }
        draw_ground(&mut img, world, cfg, &self.palette);

        let wing = world.wing_frame() % self.palette.player.len();
        let player = world.player.bounds(cfg.player_width, cfg.player_height);
        fill_rect(&mut img, player, self.palette.player[wing]);
        img
    }
}

/// Borrow a rendered frame as encoder input.
///
/// # Errors
///
/// Propagates [`EncodeError::BufferLength`] if the image buffer is malformed.
pub fn as_raw_frame(img: &RgbaImage) -> Result<RawFrame<'_>, EncodeError> {
    RawFrame::new(img.as_raw(), img.width() as usize, img.height() as usize, PixelLayout::Rgba8)
}

/// Write `img` as a PNG.
///
/// # Errors
///
/// Returns an error if the file cannot be created or encoded.
pub fn save_png(img: &RgbaImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    img.save(path)
        .with_context(|| format!("failed to write frame to {}", path.display()))?;
    tracing::debug!(path = %path.display(), "frame written");
    Ok(())
}
