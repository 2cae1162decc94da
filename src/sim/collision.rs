//! Collision and boundary checks
//!
//! Lanes are discrete, so a hit is "same lane and vertically reaching the
//! player row" rather than a general box overlap.

use super::state::Obstacle;
use crate::config::GameConfig;

/// True once the obstacle's bottom edge reaches the player row while it
/// shares the player's lane.
///
/// There is no lower bound: an obstacle that is already below the player row
/// still hits a player who steps into its lane.
#[inline]
pub fn hits_player(obstacle: &Obstacle, player_x: i32, config: &GameConfig) -> bool {
    obstacle.y + config.box_height >= config.player_y && obstacle.x == player_x
}

/// True once the obstacle's top edge has scrolled past the playfield.
#[inline]
pub fn passed_bottom(obstacle: &Obstacle, config: &GameConfig) -> bool {
    obstacle.y > config.playfield_height
}
