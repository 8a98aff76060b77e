#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Observation Pipeline
//!
//! Everything between a rendered frame and a policy decision: the
//! [`encode_frame`] transform, the four-deep [`FrameStack`], the [`Tensor`]
//! handed to a policy and the [`Policy`] seam itself.
//!
//! The crate is independent of the world simulation; it only ever sees raw
//! pixel buffers.
//!
//! ```rust,ignore
//! use ml::{encode_frame, FrameStack, PixelLayout, RawFrame};
//!
//! let frame = RawFrame::new(&pixels, 288, 512, PixelLayout::Rgba8)?;
//! let mut stack = FrameStack::new();
//! stack.push(encode_frame(&frame)?);
//! let obs = stack.build_tensor()?; // shape [4, 84, 84]
//! ```

pub mod encoder;
pub mod error;
pub mod frame_stack;
pub mod policy;

pub use encoder::{
    encode_frame, EncodedFrame, PixelLayout, RawFrame, CROP_HEIGHT, OBS_LEN, OBS_SIZE, OFF, ON,
    SOURCE_HEIGHT, SOURCE_WIDTH,
};
pub use error::EncodeError;
pub use frame_stack::FrameStack;
pub use policy::{argmax, Policy, RandomPolicy};

#[derive(Clone, Debug, PartialEq)]
pub struct Tensor {
    pub data: Vec<f32>,
    pub shape: Vec<usize>,
}

impl Tensor {
    /// # Panics
    ///
    /// If `data` does not hold exactly `shape.iter().product()` elements.
    #[must_use]
    pub fn from_vec(shape: Vec<usize>, data: Vec<f32>) -> Self {
        assert_eq!(shape.iter().product::<usize>(), data.len());
        Self { data, shape }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Prepend a batch axis of size one, e.g. `[4, 84, 84]` → `[1, 4, 84, 84]`.
    #[must_use]
    pub fn with_batch_dim(mut self) -> Self {
        self.shape.insert(0, 1);
        self
    }

    /// Contiguous slice of channel `c` along the leading axis.
    #[must_use]
    pub fn channel(&self, c: usize) -> &[f32] {
        let stride = self.shape.iter().skip(1).product::<usize>();
        &self.data[c * stride..(c + 1) * stride]
    }
}
