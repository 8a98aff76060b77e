#![deny(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss
)]
//! # Flapper World Simulation
//!
//! A deterministic, frame-stepped simulation of the bird-vs-pipes arcade game
//! exposed as a reinforcement-learning style environment.
//!
//! The crate knows nothing about pixels. It owns the world state (player
//! kinematics, the pipe queue, score and cosmetic counters) and advances it by
//! exactly one frame per call, given a single binary action. Rendering and
//! observation encoding live in other crates and only ever read the world.
//!
//! ## Key Components
//!
//! -   **Configuration:** [`GameConfig`] holds every constant of the game,
//!     including the [`PipeGeneratorPolicy`] and the collision
//!     `hitbox_inset`. Defaults reproduce the canonical 288×512 game.
//! -   **Simulation:** [`FlappySim`] is the entry point. [`FlappySim::reset`]
//!     reinitialises the [`World`], [`FlappySim::step`] advances it and
//!     reports a [`Transition`].
//! -   **Collision:** axis-aligned box tests in the [`collision`] module.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use physics::{FlappySim, GameConfig};
//!
//! let mut sim = FlappySim::new(GameConfig::default())?;
//! let t = sim.step(true);
//! assert!(!t.terminal);
//! ```

pub mod collision;
pub mod config;
pub mod error;
pub mod pipes;
pub mod simulation;
pub mod types;

pub use collision::Collision;
pub use config::{GameConfig, PipeGeneratorPolicy, GAP_PALETTE};
pub use error::PhysicsError;
pub use pipes::PipeGenerator;
pub use simulation::{
    FlappySim, Transition, World, REWARD_ALIVE, REWARD_DEATH, REWARD_PASS, WING_FRAMES,
};
pub use types::{Action, BoundingBox, PipePair, Player};
