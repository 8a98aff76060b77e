//! # Simulation Configuration
//!
//! Every tunable of the world lives in [`GameConfig`]. The defaults are the
//! canonical 288×512 values the observation pipeline was built against, so a
//! default-constructed config reproduces the reference game exactly.
//!
//! Configs can be loaded from JSON; any field left out keeps its default.
//!
//! ```rust,ignore
//! let cfg = GameConfig::from_json_str(r#"{ "hitbox_inset": 6 }"#)?;
//! assert_eq!(cfg.screen_width, 288);
//! ```

use crate::error::PhysicsError;
use serde::Deserialize;
use std::path::Path;

/// How the vertical position of a new pipe gap is drawn.
///
/// The two rules produce different gap distributions, so the choice must be
/// fixed per deployment for reproducible training and evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipeGeneratorPolicy {
    /// Gap bottom uniform in `[0.2H + gap, 0.6H - gap)`.
    #[default]
    UniformBand,
    /// Gap top picked from [`GAP_PALETTE`], shifted down by `0.2 * ground_y`.
    FixedPalette,
}

/// Gap offsets used by [`PipeGeneratorPolicy::FixedPalette`].
pub const GAP_PALETTE: [i32; 8] = [20, 30, 40, 50, 60, 70, 80, 90];

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    // Logical resolution
    pub screen_width: i32,
    pub screen_height: i32,
    /// Ground line as a fraction of the screen height.
    pub ground_ratio: f32,

    // Sprite bounding boxes
    pub player_width: i32,
    pub player_height: i32,
    pub pipe_width: i32,
    pub pipe_height: i32,
    pub background_width: i32,
    pub base_width: i32,

    // Pipes
    pub pipe_gap: i32,
    pub pipe_vel_x: i32,
    /// Horizontal offset past the right edge where streamed pipes appear.
    pub spawn_offset: i32,
    pub pipe_policy: PipeGeneratorPolicy,

    // Player kinematics
    pub max_vel_y: i32,
    pub acc_y: i32,
    pub flap_acc: i32,

    /// Scroll applied to the ground strip each frame before wrapping.
    pub ground_scroll_speed: i32,
    /// Pixels shaved off every side of the player box before collision tests.
    pub hitbox_inset: i32,
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 288,
            screen_height: 512,
            ground_ratio: 0.79,
            player_width: 34,
            player_height: 24,
            pipe_width: 52,
            pipe_height: 320,
            background_width: 288,
            base_width: 336,
            pipe_gap: 100,
            pipe_vel_x: -4,
            spawn_offset: 10,
            pipe_policy: PipeGeneratorPolicy::UniformBand,
            max_vel_y: 10,
            acc_y: 1,
            flap_acc: -9,
            ground_scroll_speed: 100,
            hitbox_inset: 0,
            seed: 0,
        }
    }
}

impl GameConfig {
    /// Parse a JSON document; missing fields fall back to their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, PhysicsError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PhysicsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Reject geometry the simulation cannot run with.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("pipe_width", self.pipe_width),
            ("pipe_height", self.pipe_height),
            ("background_width", self.background_width),
            ("base_width", self.base_width),
            ("pipe_gap", self.pipe_gap),
        ];
        for (name, value) in positive {
            if value <= 0 {
                return Err(PhysicsError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if !(self.ground_ratio > 0.0 && self.ground_ratio <= 1.0) {
            return Err(PhysicsError::InvalidConfig(format!(
                "ground_ratio must lie in (0, 1], got {}",
                self.ground_ratio
            )));
        }
        if self.ground_y() <= self.player_height {
            return Err(PhysicsError::InvalidConfig(
                "ground line leaves no room for the player".into(),
            ));
        }
        if self.pipe_vel_x >= 0 {
            return Err(PhysicsError::InvalidConfig(format!(
                "pipe_vel_x must be negative, got {}",
                self.pipe_vel_x
            )));
        }
        if self.flap_acc >= 0 {
            return Err(PhysicsError::InvalidConfig(format!(
                "flap_acc must be negative, got {}",
                self.flap_acc
            )));
        }
        let non_negative = [
            ("acc_y", self.acc_y),
            ("spawn_offset", self.spawn_offset),
            ("ground_scroll_speed", self.ground_scroll_speed),
        ];
        for (name, value) in non_negative {
            if value < 0 {
                return Err(PhysicsError::InvalidConfig(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }
        if self.max_vel_y <= 0 {
            return Err(PhysicsError::InvalidConfig(format!(
                "max_vel_y must be positive, got {}",
                self.max_vel_y
            )));
        }
        if self.hitbox_inset < 0 || 2 * self.hitbox_inset >= self.player_width.min(self.player_height) {
            return Err(PhysicsError::InvalidConfig(format!(
                "hitbox_inset {} does not fit the player box",
                self.hitbox_inset
            )));
        }
        Ok(())
    }

    /// Y coordinate of the ground line.
    #[must_use]
    pub fn ground_y(&self) -> i32 {
        (self.screen_height as f32 * self.ground_ratio) as i32
    }

    /// Player spawn position `(0.2W, (H - h) / 2)`.
    #[must_use]
    pub fn player_start(&self) -> (i32, i32) {
        (
            (self.screen_width as f32 * 0.2) as i32,
            (self.screen_height - self.player_height) / 2,
        )
    }

    /// Width the ground strip scrolls through before wrapping.
    #[must_use]
    pub fn ground_shift(&self) -> i32 {
        if self.base_width > self.background_width {
            self.base_width - self.background_width
        } else {
            self.base_width
        }
    }

    /// A new pair is streamed in once the rightmost pair is left of this x.
    #[must_use]
    pub fn spawn_threshold(&self) -> i32 {
        self.screen_width - self.screen_width / 2 - self.pipe_width / 2
    }
}
