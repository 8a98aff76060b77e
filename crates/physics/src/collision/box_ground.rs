//! Player-ground contact

use crate::config::GameConfig;
use crate::types::Player;

/// The player is grounded once its bottom edge reaches one unit above the
/// ground line.
#[must_use]
pub fn detect_ground_contact(player: &Player, cfg: &GameConfig) -> bool {
    player.y + cfg.player_height >= cfg.ground_y() - 1
}
