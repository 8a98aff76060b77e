#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]

mod app;
mod stats;
mod watcher;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use ml::RandomPolicy;
use physics::{GameConfig, PipeGeneratorPolicy};
use std::path::PathBuf;

use app::{ControlLoop, LoopConfig};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum PipePolicyArg {
    UniformBand,
    FixedPalette,
}

impl From<PipePolicyArg> for PipeGeneratorPolicy {
    fn from(p: PipePolicyArg) -> Self {
        match p {
            PipePolicyArg::UniformBand => Self::UniformBand,
            PipePolicyArg::FixedPalette => Self::FixedPalette,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "flapper", about = "Drive the flapper simulation with a policy")]
struct Args {
    /// Number of episodes to play
    #[arg(long, default_value_t = 5)]
    episodes: u64,

    /// Stop after this many steps overall
    #[arg(long)]
    max_steps: Option<u64>,

    /// Seed for the pipe generator and the random policy
    #[arg(long)]
    seed: Option<u64>,

    /// JSON game config; omitted fields keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Reload --config between episodes when the file changes
    #[arg(long, requires = "config")]
    watch_config: bool,

    #[arg(long, value_enum)]
    pipe_policy: Option<PipePolicyArg>,

    /// Pixels shaved off each side of the player box for collisions
    #[arg(long)]
    hitbox_inset: Option<i32>,

    /// Flap probability of the built-in random policy
    #[arg(long, default_value_t = 0.08)]
    flap_probability: f32,

    /// Clear the frame stack when an episode ends
    #[arg(long)]
    reset_stack_on_terminal: bool,

    /// Pace the loop to one frame per 33 ms
    #[arg(long)]
    realtime: bool,

    /// Write rendered frames as PNGs into this directory
    #[arg(long)]
    dump_frames: Option<PathBuf>,

    #[arg(long, default_value_t = 1)]
    dump_every: u64,
}

impl Args {
    /// File config (or defaults) with command-line overrides applied.
    fn game_config(&self) -> Result<GameConfig> {
        let mut cfg = match &self.config {
            Some(path) => GameConfig::from_path(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => GameConfig::default(),
        };
        if let Some(seed) = self.seed {
            cfg.seed = seed;
        }
        if let Some(policy) = self.pipe_policy {
            cfg.pipe_policy = policy.into();
        }
        if let Some(inset) = self.hitbox_inset {
            cfg.hitbox_inset = inset;
        }
        Ok(cfg)
    }

    fn loop_config(&self) -> LoopConfig {
        LoopConfig {
            episodes: self.episodes,
            max_steps: self.max_steps,
            reset_stack_on_terminal: self.reset_stack_on_terminal,
            realtime: self.realtime,
            dump_dir: self.dump_frames.clone(),
            dump_every: self.dump_every,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let game = args.game_config()?;
    tracing::info!(
        seed = game.seed,
        policy = ?game.pipe_policy,
        hitbox_inset = game.hitbox_inset,
        "Initializing simulation..."
    );

    let config_watcher = match (&args.config, args.watch_config) {
        (Some(path), true) => match watcher::start(path) {
            Ok(w) => Some(w),
            Err(e) => {
                tracing::error!("Failed to start config watcher: {e:?}");
                None
            }
        },
        _ => None,
    };

    let policy = RandomPolicy::new(game.seed.wrapping_add(1), args.flap_probability);
    let mut control = ControlLoop::new(game, policy, args.loop_config())?;

    while !control.is_done() {
        let finished = control.tick()?;
        if finished.is_none() {
            continue;
        }
        if let Some(w) = &config_watcher {
            if w.changed() {
                match args.game_config().and_then(|cfg| control.replace_config(cfg)) {
                    Ok(()) => tracing::info!("Game config reloaded."),
                    Err(e) => tracing::error!("Keeping previous config: {e:?}"),
                }
            }
        }
    }

    let stats = control.stats();
    tracing::info!(
        episodes = stats.episodes_finished,
        steps = stats.steps_done,
        mean_score = stats.mean_score(),
        best_score = stats.best_score,
        longest_episode = stats.episode_len_max,
        total_reward = stats.total_reward,
        unfinished_frames = control.sim().frames(),
        steps_per_sec = stats.steps_per_sec(),
        "Rollout finished."
    );
    Ok(())
}
