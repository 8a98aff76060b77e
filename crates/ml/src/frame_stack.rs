use crate::encoder::{EncodedFrame, OBS_LEN, OBS_SIZE};
use crate::error::EncodeError;
use crate::Tensor;
use std::collections::VecDeque;

/// Ring of the most recent encoded frames, oldest first.
///
/// Gives the policy a short temporal window so it can infer velocity from
/// still images.
#[derive(Clone, Debug, Default)]
pub struct FrameStack {
    frames: VecDeque<EncodedFrame>,
}

impl FrameStack {
    pub const CAPACITY: usize = 4;

    #[must_use]
    pub fn new() -> Self {
        Self { frames: VecDeque::with_capacity(Self::CAPACITY) }
    }

    /// Append `frame`, evicting the oldest once the ring is full.
    pub fn push(&mut self, frame: EncodedFrame) {
        if self.frames.len() == Self::CAPACITY {
            self.frames.pop_front();
        }
        self.frames.push_back(frame);
    }

    /// Number of real frames held, at most [`Self::CAPACITY`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn clear(&mut self) {
        tracing::trace!(dropped = self.frames.len(), "frame stack cleared");
        self.frames.clear();
    }

    /// Materialise the `4×84×84` tensor, channel 0 the oldest frame.
    ///
    /// Until four frames have been pushed the leading channels repeat the
    /// oldest frame, so a cold stack never shows the policy a blank channel.
    ///
    /// # Errors
    ///
    /// [`EncodeError::EmptyStack`] if nothing has been pushed.
    pub fn build_tensor(&self) -> Result<Tensor, EncodeError> {
        let oldest = self.frames.front().ok_or(EncodeError::EmptyStack)?;
        let padding = Self::CAPACITY - self.frames.len();

        let mut data = Vec::with_capacity(Self::CAPACITY * OBS_LEN);
        for frame in std::iter::repeat(oldest).take(padding).chain(self.frames.iter()) {
            data.extend_from_slice(frame.as_slice());
        }
        Ok(Tensor::from_vec(vec![Self::CAPACITY, OBS_SIZE, OBS_SIZE], data))
    }
}
