//! Pipe pair generation.

use crate::config::{GameConfig, PipeGeneratorPolicy, GAP_PALETTE};
use crate::types::PipePair;

/// Seeded source of new pipe pairs.
pub struct PipeGenerator {
    policy: PipeGeneratorPolicy,
    rng: fastrand::Rng,
}

impl PipeGenerator {
    #[must_use]
    pub fn new(policy: PipeGeneratorPolicy, seed: u64) -> Self {
        Self { policy, rng: fastrand::Rng::with_seed(seed) }
    }

    /// Produce a pair at horizontal position `x`.
    pub fn generate(&mut self, x: i32, cfg: &GameConfig) -> PipePair {
        let gap = cfg.pipe_gap;
        match self.policy {
            PipeGeneratorPolicy::UniformBand => {
                let (lo, hi) = uniform_band(cfg);
                // An empty band collapses onto its lower bound.
                let gap_bottom_y = if hi > lo { self.rng.i32(lo..hi) } else { lo };
                PipePair::new(x, gap_bottom_y - gap, gap_bottom_y)
            }
            PipeGeneratorPolicy::FixedPalette => {
                let offset = GAP_PALETTE[self.rng.usize(..GAP_PALETTE.len())];
                let gap_top_y = offset + (cfg.ground_y() as f32 * 0.2) as i32;
                PipePair::new(x, gap_top_y, gap_top_y + gap)
            }
        }
    }
}

/// Half-open range of gap bottoms drawn by [`PipeGeneratorPolicy::UniformBand`].
#[must_use]
pub fn uniform_band(cfg: &GameConfig) -> (i32, i32) {
    let min_y = (cfg.screen_height as f32 * 0.2) as i32;
    let max_y = (cfg.screen_height as f32 * 0.6) as i32 - cfg.pipe_gap;
    (min_y + cfg.pipe_gap, max_y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_band_stays_in_band() {
        let cfg = GameConfig::default();
        let (lo, hi) = uniform_band(&cfg);
        assert_eq!((lo, hi), (202, 207));
        let mut gen = PipeGenerator::new(PipeGeneratorPolicy::UniformBand, 7);
        for _ in 0..200 {
            let pair = gen.generate(300, &cfg);
            assert!(pair.gap_bottom_y >= lo && pair.gap_bottom_y < hi);
            assert_eq!(pair.gap(), cfg.pipe_gap);
            assert_eq!(pair.x, 300);
        }
    }

    #[test]
    fn fixed_palette_uses_palette_offsets() {
        let cfg = GameConfig::default();
        let shift = 80; // 0.2 * 404
        let mut gen = PipeGenerator::new(PipeGeneratorPolicy::FixedPalette, 7);
        for _ in 0..200 {
            let pair = gen.generate(0, &cfg);
            assert!(GAP_PALETTE.contains(&(pair.gap_top_y - shift)));
            assert_eq!(pair.gap(), cfg.pipe_gap);
        }
    }

    #[test]
    fn empty_band_collapses_to_lower_bound() {
        let cfg = GameConfig { pipe_gap: 150, ..Default::default() };
        let (lo, hi) = uniform_band(&cfg);
        assert!(hi <= lo);
        let mut gen = PipeGenerator::new(PipeGeneratorPolicy::UniformBand, 1);
        assert_eq!(gen.generate(0, &cfg).gap_bottom_y, lo);
    }

    #[test]
    fn same_seed_same_pipes() {
        let cfg = GameConfig::default();
        let mut a = PipeGenerator::new(PipeGeneratorPolicy::FixedPalette, 42);
        let mut b = PipeGenerator::new(PipeGeneratorPolicy::FixedPalette, 42);
        for _ in 0..50 {
            assert_eq!(a.generate(10, &cfg), b.generate(10, &cfg));
        }
    }
}
