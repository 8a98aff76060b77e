//! Policy seam.
//!
//! The trained network is an external collaborator; the control loop only
//! needs something that maps a stacked observation to one score per action.

use crate::Tensor;

/// Maps an observation tensor to per-action scores.
pub trait Policy {
    /// Score every discrete action for `obs`.
    fn scores(&mut self, obs: &Tensor) -> Vec<f32>;

    /// Number of scores returned by [`Policy::scores`].
    fn action_size(&self) -> usize;
}

/// Index of the largest score; the first one wins ties. `None` when `scores`
/// is empty or holds a NaN.
#[must_use]
pub fn argmax(scores: &[f32]) -> Option<usize> {
    if scores.iter().any(|s| s.is_nan()) {
        return None;
    }
    let mut best: Option<(usize, f32)> = None;
    for (i, &s) in scores.iter().enumerate() {
        match best {
            Some((_, b)) if s <= b => {}
            _ => best = Some((i, s)),
        }
    }
    best.map(|(i, _)| i)
}

/// Ignores the observation and flaps with a fixed probability.
pub struct RandomPolicy {
    rng: fastrand::Rng,
    flap_probability: f32,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(seed: u64, flap_probability: f32) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
            flap_probability: flap_probability.clamp(0.0, 1.0),
        }
    }
}

impl Policy for RandomPolicy {
    fn scores(&mut self, _obs: &Tensor) -> Vec<f32> {
        if self.rng.f32() < self.flap_probability {
            vec![0.0, 1.0]
        } else {
            vec![1.0, 0.0]
        }
    }

    fn action_size(&self) -> usize {
        2
    }
}
