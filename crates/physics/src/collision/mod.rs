//! # Collision Detection
//!
//! Termination tests for the player. The ground is checked first; pipe boxes
//! are only tested when the player is still airborne.

mod box_box;
mod box_ground;

pub use box_box::*;
pub use box_ground::*;

use crate::config::GameConfig;
use crate::types::{PipePair, Player};

/// What ended an episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Ground,
    /// Index of the pair whose upper pipe was hit.
    UpperPipe(usize),
    /// Index of the pair whose lower pipe was hit.
    LowerPipe(usize),
}

/// Run all termination tests in order and report the first hit.
#[must_use]
pub fn detect_collision(player: &Player, pipes: &[PipePair], cfg: &GameConfig) -> Option<Collision> {
    if detect_ground_contact(player, cfg) {
        return Some(Collision::Ground);
    }

    let player_box = player
        .bounds(cfg.player_width, cfg.player_height)
        .inset(cfg.hitbox_inset);
    for (i, pipe) in pipes.iter().enumerate() {
        if boxes_overlap(&player_box, &pipe.upper_bounds(cfg.pipe_width, cfg.pipe_height)) {
            return Some(Collision::UpperPipe(i));
        }
        if boxes_overlap(&player_box, &pipe.lower_bounds(cfg.pipe_width, cfg.pipe_height)) {
            return Some(Collision::LowerPipe(i));
        }
    }
    None
}
