//! # Observation Encoding
//!
//! Turns one rendered 288×512 frame into the 84×84 binary silhouette the
//! policy was trained on:
//!
//! 1. crop to the play area above the ground strip (rows `0..404`);
//! 2. nearest-neighbour resize to 84×84, sampling the source pixel whose
//!    centre is closest to the destination pixel centre;
//! 3. luma `0.299 r + 0.587 g + 0.114 b` (alpha is ignored);
//! 4. threshold: luma `> 0` becomes [`ON`], anything else [`OFF`].
//!
//! The output scale is fixed at `{0, 255}` for every caller. Feeding `{0, 1}`
//! to a policy trained on `{0, 255}` silently breaks it, so there is no knob.

use crate::error::EncodeError;

pub const SOURCE_WIDTH: usize = 288;
pub const SOURCE_HEIGHT: usize = 512;
/// Rows kept by the crop; everything below is the scrolling ground strip.
pub const CROP_HEIGHT: usize = 404;
/// Side length of an encoded frame.
pub const OBS_SIZE: usize = 84;
pub const OBS_LEN: usize = OBS_SIZE * OBS_SIZE;

pub const ON: f32 = 255.0;
pub const OFF: f32 = 0.0;

/// Byte layout of a raw frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelLayout {
    Rgb8,
    Rgba8,
}

impl PixelLayout {
    #[must_use]
    pub const fn channels(self) -> usize {
        match self {
            Self::Rgb8 => 3,
            Self::Rgba8 => 4,
        }
    }
}

/// Borrowed view of a rendered frame, row-major, top row first.
#[derive(Debug, Clone, Copy)]
pub struct RawFrame<'a> {
    pixels: &'a [u8],
    width: usize,
    height: usize,
    layout: PixelLayout,
}

impl<'a> RawFrame<'a> {
    /// Wrap `pixels`, checking that the buffer length matches the layout.
    pub fn new(
        pixels: &'a [u8],
        width: usize,
        height: usize,
        layout: PixelLayout,
    ) -> Result<Self, EncodeError> {
        let expected = width * height * layout.channels();
        if pixels.len() != expected {
            return Err(EncodeError::BufferLength { expected, actual: pixels.len() });
        }
        Ok(Self { pixels, width, height, layout })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn layout(&self) -> PixelLayout {
        self.layout
    }
}

/// One encoded 84×84 frame holding only [`ON`] and [`OFF`].
#[derive(Clone, Debug, PartialEq)]
pub struct EncodedFrame {
    data: Vec<f32>,
}

impl EncodedFrame {
    /// Frame with every pixel set to `value`.
    #[must_use]
    pub fn filled(value: f32) -> Self {
        Self { data: vec![value; OBS_LEN] }
    }

    /// Frame from a row-major on/off mask.
    ///
    /// # Errors
    ///
    /// [`EncodeError::BufferLength`] unless the mask has [`OBS_LEN`] entries.
    pub fn from_mask(mask: &[bool]) -> Result<Self, EncodeError> {
        if mask.len() != OBS_LEN {
            return Err(EncodeError::BufferLength { expected: OBS_LEN, actual: mask.len() });
        }
        Ok(Self { data: mask.iter().map(|&on| if on { ON } else { OFF }).collect() })
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * OBS_SIZE + x]
    }

    /// Number of pixels that are [`ON`].
    #[must_use]
    pub fn count_on(&self) -> usize {
        self.data.iter().filter(|&&v| v == ON).count()
    }
}

/// Source index sampled for destination index `dst` when scaling `src_len`
/// pixels onto `dst_len`: `floor((dst + 0.5) * src_len / dst_len)`.
#[must_use]
pub const fn nearest_source(dst: usize, dst_len: usize, src_len: usize) -> usize {
    ((2 * dst + 1) * src_len) / (2 * dst_len)
}

#[must_use]
pub fn luma(rgb: [u8; 3]) -> f32 {
    0.299 * f32::from(rgb[0]) + 0.587 * f32::from(rgb[1]) + 0.114 * f32::from(rgb[2])
}

#[must_use]
pub fn threshold(luma: f32) -> f32 {
    if luma > 0.0 {
        ON
    } else {
        OFF
    }
}

/// Crop, resize, reduce and threshold a 288×512 frame.
///
/// # Errors
///
/// Returns [`EncodeError::FrameSize`] for any other resolution; frames are
/// never letterboxed or rescaled to fit.
pub fn encode_frame(frame: &RawFrame<'_>) -> Result<EncodedFrame, EncodeError> {
    if frame.width != SOURCE_WIDTH || frame.height != SOURCE_HEIGHT {
        return Err(EncodeError::FrameSize {
            expected_width: SOURCE_WIDTH,
            expected_height: SOURCE_HEIGHT,
            width: frame.width,
            height: frame.height,
        });
    }

    // `RawFrame::new` guarantees a whole number of pixels.
    let data = match frame.layout {
        PixelLayout::Rgb8 => {
            let pixels: &[[u8; 3]] = bytemuck::cast_slice(frame.pixels);
            sample(|i| pixels[i])
        }
        PixelLayout::Rgba8 => {
            let pixels: &[[u8; 4]] = bytemuck::cast_slice(frame.pixels);
            sample(|i| {
                let [r, g, b, _] = pixels[i];
                [r, g, b]
            })
        }
    };
    Ok(EncodedFrame { data })
}

/// Walk the 84×84 sample grid over the cropped source, `rgb_at` taking a
/// row-major source pixel index.
fn sample(rgb_at: impl Fn(usize) -> [u8; 3]) -> Vec<f32> {
    let cols: [usize; OBS_SIZE] = std::array::from_fn(|dx| nearest_source(dx, OBS_SIZE, SOURCE_WIDTH));
    let rows: [usize; OBS_SIZE] = std::array::from_fn(|dy| nearest_source(dy, OBS_SIZE, CROP_HEIGHT));

    let mut data = Vec::with_capacity(OBS_LEN);
    for &sy in &rows {
        for &sx in &cols {
            data.push(threshold(luma(rgb_at(sy * SOURCE_WIDTH + sx))));
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_grid_stays_inside_crop() {
        assert_eq!(nearest_source(0, OBS_SIZE, SOURCE_WIDTH), 1);
        assert_eq!(nearest_source(OBS_SIZE - 1, OBS_SIZE, SOURCE_WIDTH), 286);
        assert_eq!(nearest_source(0, OBS_SIZE, CROP_HEIGHT), 2);
        assert_eq!(nearest_source(OBS_SIZE - 1, OBS_SIZE, CROP_HEIGHT), 401);
    }

    #[test]
    fn luma_weights() {
        assert!((luma([255, 255, 255]) - 255.0).abs() < 1e-3);
        assert_eq!(luma([0, 0, 0]), 0.0);
    }

    #[test]
    fn threshold_boundary_is_strict() {
        assert_eq!(threshold(0.0), OFF);
        assert_eq!(threshold(0.114), ON);
    }
}
