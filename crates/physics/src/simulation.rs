//! # World Simulation Core
//!
//! [`FlappySim`] owns the world state and advances it one frame per
//! [`FlappySim::step`] call. A terminal frame reinitialises the world before
//! `step` returns, so callers never observe a dead world: the next call
//! already plays the fresh episode.

use crate::collision::{detect_collision, Collision};
use crate::config::GameConfig;
use crate::error::PhysicsError;
use crate::pipes::PipeGenerator;
use crate::types::{PipePair, Player};

/// Reward for a frame on which the player survives without scoring.
pub const REWARD_ALIVE: f32 = 0.1;
/// Reward for a frame on which the player passes a pipe.
pub const REWARD_PASS: f32 = 1.0;
/// Reward for the frame that ends an episode.
pub const REWARD_DEATH: f32 = -1.0;

/// Number of wing sprites. The index starts at 0, then alternates between 1
/// and 2, advancing every third frame.
pub const WING_FRAMES: usize = 3;

const SCORE_WINDOW: i32 = 4;
const FRAME_COUNTER_PERIOD: u32 = 30;
const WING_PERIOD: u32 = 3;

/// Complete game-world state for one episode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct World {
    pub player: Player,
    /// Ordered by ascending x; new pairs enter on the right.
    pub pipes: Vec<PipePair>,
    pub score: u32,
    /// Wing sprite index, below [`WING_FRAMES`].
    pub animation_phase: usize,
    pub frame_counter: u32,
    /// Ground strip offset, always in `(-ground_shift, 0]`.
    pub scroll_offset: i32,
}

impl World {
    /// Fresh world with the player centred and two pipe pairs queued off-screen.
    pub fn new(cfg: &GameConfig, pipes: &mut PipeGenerator) -> Self {
        let (x, y) = cfg.player_start();
        let first_x = cfg.screen_width;
        let second_x = first_x + cfg.screen_width / 2;
        Self {
            player: Player::new(x, y),
            pipes: vec![pipes.generate(first_x, cfg), pipes.generate(second_x, cfg)],
            score: 0,
            animation_phase: 0,
            frame_counter: 0,
            scroll_offset: 0,
        }
    }

    /// Wing sprite index for the current frame.
    #[must_use]
    pub fn wing_frame(&self) -> usize {
        self.animation_phase % WING_FRAMES
    }

    /// Advance one frame and return the frame's reward together with the
    /// collision that ended it, if any.
    fn advance(
        &mut self,
        flap: bool,
        cfg: &GameConfig,
        generator: &mut PipeGenerator,
    ) -> (f32, Option<Collision>) {
        // 1. Flap
        if flap && self.player.y > -2 * cfg.player_height {
            self.player.vel_y = cfg.flap_acc;
            self.player.flapped = true;
        }

        // 2. Score
        let reward = if self.count_passed_pipes(cfg) > 0 { REWARD_PASS } else { REWARD_ALIVE };

        // 3. Cosmetic counters
        if (self.frame_counter + 1) % WING_PERIOD == 0 {
            // 0 is only shown at the start of an episode.
            self.animation_phase = match self.animation_phase {
                2 => 1,
                phase => phase + 1,
            };
        }
        self.frame_counter = (self.frame_counter + 1) % FRAME_COUNTER_PERIOD;
        self.scroll_offset = -((-self.scroll_offset + cfg.ground_scroll_speed) % cfg.ground_shift());

        // 4. Gravity
        if self.player.vel_y < cfg.max_vel_y && !self.player.flapped {
            self.player.vel_y += cfg.acc_y;
        }
        self.player.flapped = false;

        // 5. Integrate, never sinking below the ground or rising past the ceiling
        let headroom = cfg.ground_y() - self.player.y - cfg.player_height;
        self.player.y += self.player.vel_y.min(headroom);
        self.player.y = self.player.y.max(0);

        // 6. Scroll pipes
        self.scroll_pipes(cfg, generator);

        // 7. Termination
        (reward, detect_collision(&self.player, &self.pipes, cfg))
    }

    /// Credit every pair whose centre the player's centre has just reached.
    fn count_passed_pipes(&mut self, cfg: &GameConfig) -> u32 {
        let player_mid = self.player.x + cfg.player_width / 2;
        let passed = self
            .pipes
            .iter()
            .filter(|pipe| {
                let pipe_mid = pipe.x + cfg.pipe_width / 2;
                pipe_mid <= player_mid && player_mid < pipe_mid + SCORE_WINDOW
            })
            .count() as u32;
        self.score += passed;
        passed
    }

    fn scroll_pipes(&mut self, cfg: &GameConfig, generator: &mut PipeGenerator) {
        for pipe in &mut self.pipes {
            pipe.x += cfg.pipe_vel_x;
        }

        if self.pipes.first().is_some_and(|first| first.x < -cfg.pipe_width) {
            self.pipes.remove(0);
        }

        let needs_spawn = self
            .pipes
            .last()
            .map_or(true, |last| last.x < cfg.spawn_threshold());
        if needs_spawn {
            let pair = generator.generate(cfg.screen_width + cfg.spawn_offset, cfg);
            tracing::trace!(x = pair.x, gap_top = pair.gap_top_y, "spawned pipe pair");
            self.pipes.push(pair);
        }
    }
}

/// Outcome of a single [`FlappySim::step`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// One of [`REWARD_ALIVE`], [`REWARD_PASS`] or [`REWARD_DEATH`].
    pub reward: f32,
    pub terminal: bool,
    /// Episode score as of this frame. On a terminal frame this is the final
    /// score of the episode that just ended.
    pub score: u32,
    pub collision: Option<Collision>,
}

/// Deterministic frame-stepped simulation.
pub struct FlappySim {
    pub world: World,
    config: GameConfig,
    generator: PipeGenerator,
    episodes: u64,
    frames: u64,
    best_score: u32,
}

impl FlappySim {
    /// Validate `config` and start the first episode.
    pub fn new(config: GameConfig) -> Result<Self, PhysicsError> {
        config.validate()?;
        let mut generator = PipeGenerator::new(config.pipe_policy, config.seed);
        let world = World::new(&config, &mut generator);
        Ok(Self { world, config, generator, episodes: 0, frames: 0, best_score: 0 })
    }

    /// Reinitialise every world field. The pipe RNG keeps its stream, so
    /// successive episodes see different pipes.
    pub fn reset(&mut self) {
        self.world = World::new(&self.config, &mut self.generator);
        self.frames = 0;
    }

    /// Restart the pipe RNG from `seed`, then reset.
    pub fn reset_with_seed(&mut self, seed: u64) {
        self.generator = PipeGenerator::new(self.config.pipe_policy, seed);
        self.reset();
    }

    /// Advance exactly one frame.
    pub fn step(&mut self, flap: bool) -> Transition {
        let (reward, collision) = self.world.advance(flap, &self.config, &mut self.generator);
        self.frames += 1;
        let score = self.world.score;
        self.best_score = self.best_score.max(score);

        match collision {
            Some(cause) => {
                tracing::debug!(
                    episode = self.episodes,
                    score,
                    frames = self.frames,
                    ?cause,
                    "episode ended"
                );
                self.episodes += 1;
                self.reset();
                Transition { reward: REWARD_DEATH, terminal: true, score, collision }
            }
            None => Transition { reward, terminal: false, score, collision: None },
        }
    }

    /// The validated config this simulation runs with. It is fixed for the
    /// lifetime of the instance; build a new one to change the rules.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of episodes that have ended in a terminal transition.
    #[must_use]
    pub fn episodes(&self) -> u64 {
        self.episodes
    }

    /// Frames played in the current episode.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Highest score seen across all episodes of this instance.
    #[must_use]
    pub fn best_score(&self) -> u32 {
        self.best_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim() -> FlappySim {
        FlappySim::new(GameConfig::default()).unwrap()
    }

    #[test]
    fn wing_cycle_advances_every_third_frame() {
        let mut sim = sim();
        let mut phases = Vec::new();
        for _ in 0..12 {
            sim.step(false);
            phases.push(sim.world.wing_frame());
        }
        assert_eq!(phases, vec![0, 0, 1, 1, 1, 2, 2, 2, 1, 1, 1, 2]);
    }

    #[test]
    fn wing_never_returns_to_rest_frame() {
        let mut sim = sim();
        for i in 0..90 {
            sim.world.pipes.clear();
            sim.world.player.y = 200;
            assert!(!sim.step(false).terminal);
            if i >= 2 {
                assert!(matches!(sim.world.wing_frame(), 1 | 2), "frame {i}");
            }
        }
    }

    #[test]
    fn frame_counter_wraps() {
        let mut sim = sim();
        sim.world.frame_counter = 29;
        sim.step(false);
        assert_eq!(sim.world.frame_counter, 0);
    }

    #[test]
    fn ground_scroll_wraps_on_shift() {
        let mut sim = sim();
        sim.step(false);
        // (0 + 100) % 48 = 4
        assert_eq!(sim.world.scroll_offset, -4);
        sim.step(false);
        // (4 + 100) % 48 = 8
        assert_eq!(sim.world.scroll_offset, -8);
    }

    #[test]
    fn flap_skips_gravity_for_one_frame() {
        let mut sim = sim();
        sim.step(true);
        assert_eq!(sim.world.player.vel_y, -9);
        assert!(!sim.world.player.flapped);
        sim.step(false);
        assert_eq!(sim.world.player.vel_y, -8);
    }

    #[test]
    fn fall_speed_is_capped() {
        let mut sim = sim();
        sim.world.player.y = 0;
        sim.world.player.vel_y = 10;
        sim.world.pipes.clear();
        sim.step(false);
        assert_eq!(sim.world.player.vel_y, 10);
    }

    #[test]
    fn flap_ignored_far_above_the_screen() {
        let mut sim = sim();
        sim.world.player.y = -2 * sim.config().player_height;
        sim.world.player.vel_y = 3;
        sim.step(true);
        assert_eq!(sim.world.player.vel_y, 4);
    }
}
