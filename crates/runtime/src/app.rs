use anyhow::{anyhow, Context, Result};
use ml::{argmax, encode_frame, FrameStack, Policy};
use physics::{Action, FlappySim, GameConfig, Transition};
use render::{as_raw_frame, save_png, FrameRenderer, RgbaImage};
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use crate::stats::{EpisodeSummary, RolloutStats};

/// One frame at the game's 30 fps.
pub const TICK: Duration = Duration::from_millis(33);

#[derive(Clone, Debug)]
pub struct LoopConfig {
    /// Stop after this many finished episodes.
    pub episodes: u64,
    /// Stop after this many steps overall, whichever comes first.
    pub max_steps: Option<u64>,
    pub reset_stack_on_terminal: bool,
    pub realtime: bool,
    pub dump_dir: Option<PathBuf>,
    pub dump_every: u64,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            episodes: 1,
            max_steps: None,
            reset_stack_on_terminal: false,
            realtime: false,
            dump_dir: None,
            dump_every: 1,
        }
    }
}

/// Render → encode → stack → policy → step, one frame per [`ControlLoop::tick`].
pub struct ControlLoop<P: Policy> {
    sim: FlappySim,
    renderer: FrameRenderer,
    stack: FrameStack,
    policy: P,
    cfg: LoopConfig,
    stats: RolloutStats,
}

impl<P: Policy> ControlLoop<P> {
    pub fn new(game: GameConfig, policy: P, cfg: LoopConfig) -> Result<Self> {
        if policy.action_size() != Action::COUNT {
            return Err(anyhow!(
                "policy scores {} actions, the game has {}",
                policy.action_size(),
                Action::COUNT
            ));
        }
        if let Some(dir) = &cfg.dump_dir {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        let sim = FlappySim::new(game.clone()).context("invalid game config")?;
        Ok(Self {
            sim,
            renderer: FrameRenderer::new(game),
            stack: FrameStack::new(),
            policy,
            cfg,
            stats: RolloutStats::new(),
        })
    }

    #[must_use]
    pub fn stats(&self) -> &RolloutStats {
        &self.stats
    }

    #[cfg(test)]
    pub fn stack(&self) -> &FrameStack {
        &self.stack
    }

    #[must_use]
    pub fn sim(&self) -> &FlappySim {
        &self.sim
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.stats.episodes_finished >= self.cfg.episodes
            || self.cfg.max_steps.is_some_and(|m| self.stats.steps_done >= m)
    }

    /// Swap in a new game config. Only call between episodes; the world and
    /// the frame stack start over.
    pub fn replace_config(&mut self, game: GameConfig) -> Result<()> {
        self.sim = FlappySim::new(game.clone()).context("invalid game config")?;
        self.renderer = FrameRenderer::new(game);
        self.stack.clear();
        Ok(())
    }

    /// Play one frame. Returns the finished episode on terminal frames.
    pub fn tick(&mut self) -> Result<Option<EpisodeSummary>> {
        let started = Instant::now();

        let frame = self.renderer.render(&self.sim.world);
        self.maybe_dump(&frame)?;
        self.stack.push(encode_frame(&as_raw_frame(&frame)?)?);
        let obs = self.stack.build_tensor()?.with_batch_dim();

        let scores = self.policy.scores(&obs);
        let index = argmax(&scores)
            .ok_or_else(|| anyhow!("policy returned no usable scores: {scores:?}"))?;
        let action = Action::from_index(index)?;

        let t = self.sim.step(action.is_flap());
        let summary = self.record(&t);

        if self.cfg.realtime {
            if let Some(rest) = TICK.checked_sub(started.elapsed()) {
                thread::sleep(rest);
            }
        }
        Ok(summary)
    }

    fn record(&mut self, t: &Transition) -> Option<EpisodeSummary> {
        let summary = self.stats.on_step(t)?;
        tracing::info!(
            episode = summary.index,
            score = summary.score,
            length = summary.length,
            reward = summary.reward,
            "episode finished"
        );
        if self.cfg.reset_stack_on_terminal {
            self.stack.clear();
        }
        Some(summary)
    }

    fn maybe_dump(&self, frame: &RgbaImage) -> Result<()> {
        let Some(dir) = &self.cfg.dump_dir else {
            return Ok(());
        };
        let step = self.stats.steps_done;
        if step % self.cfg.dump_every.max(1) != 0 {
            return Ok(());
        }
        save_png(frame, dir.join(format!("frame_{step:06}.png")))
    }
}
