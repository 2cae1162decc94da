//! Game configuration
//!
//! Built once at startup and threaded through the simulation, renderer and
//! loop. Defaults come from [`crate::consts`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Immutable tuning and layout parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    // === Playfield ===
    /// Canvas width in pixels
    pub screen_width: i32,
    /// Canvas height in pixels; obstacles past this are recycled
    pub playfield_height: i32,

    // === Lanes ===
    /// Leftmost lane x
    pub road_left: i32,
    /// Rightmost lane x
    pub road_right: i32,
    /// Distance between lanes (also the player step)
    pub lane_width: i32,

    // === Entities ===
    /// Player box top edge
    pub player_y: i32,
    /// Player/obstacle box width
    pub box_width: i32,
    /// Player/obstacle box height
    pub box_height: i32,
    /// Off-screen y for freshly spawned obstacles
    pub obstacle_spawn_y: i32,

    // === Difficulty ===
    pub initial_speed: i32,
    pub speed_increment: i32,
    pub max_speed: i32,
    /// Speed goes up every time the score hits a multiple of this
    pub speed_step_score: u32,
    pub initial_delay_ms: u32,
    pub delay_decrement_ms: u32,
    pub min_delay_ms: u32,
    /// Delay goes down every time the score hits a multiple of this
    pub delay_step_score: u32,

    // === Road animation ===
    pub road_scroll_step: i32,
    pub road_scroll_period: i32,

    // === Event loop ===
    /// Bounded event queue capacity
    pub queue_capacity: usize,
    /// How long the loop waits for input before ticking anyway
    pub input_timeout_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            playfield_height: SCREEN_HEIGHT,

            road_left: ROAD_LEFT,
            road_right: ROAD_RIGHT,
            lane_width: LANE_WIDTH,

            player_y: PLAYER_Y,
            box_width: OBSTACLE_WIDTH,
            box_height: OBSTACLE_HEIGHT,
            obstacle_spawn_y: OBSTACLE_SPAWN_Y,

            initial_speed: INITIAL_OBSTACLE_SPEED,
            speed_increment: SPEED_INCREMENT,
            max_speed: MAX_SPEED,
            speed_step_score: SPEED_STEP_SCORE,
            initial_delay_ms: INITIAL_DELAY,
            delay_decrement_ms: DELAY_DECREMENT,
            min_delay_ms: MIN_DELAY,
            delay_step_score: DELAY_STEP_SCORE,

            road_scroll_step: ROAD_SCROLL_STEP,
            road_scroll_period: ROAD_SCROLL_PERIOD,

            queue_capacity: QUEUE_CAPACITY,
            input_timeout_ms: INPUT_TIMEOUT_MS,
        }
    }
}

impl GameConfig {
    /// The x position of every lane, left to right
    pub fn lanes(&self) -> [i32; LANE_COUNT] {
        std::array::from_fn(|i| self.road_left + i as i32 * self.lane_width)
    }

    /// Lane index for an x position, if it sits exactly on a lane
    pub fn lane_of(&self, x: i32) -> Option<usize> {
        self.lanes().iter().position(|&lane| lane == x)
    }

    /// Centre lane, where the player starts
    pub fn player_start_x(&self) -> i32 {
        self.lanes()[LANE_COUNT / 2]
    }

    /// Input wait per loop iteration
    pub fn input_timeout(&self) -> Duration {
        Duration::from_millis(self.input_timeout_ms)
    }

    /// Serialize for diagnostics
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("<unserializable config: {e}>"))
    }
}
