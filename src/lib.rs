//! Flip 4 Speed - a two-lane reflex dodging game for 128x64 handhelds
//!
//! Core modules:
//! - `sim`: Simulation (obstacles, collisions, difficulty, game state)
//! - `input`: Key events and the bounded event queue feeding the loop
//! - `notify`: Haptic/audio notification sequences
//! - `renderer`: Canvas primitives and the scene projection
//! - `platform`: Device collaborators (display, input source, notifications)
//! - `app`: The fixed-interval game loop tying everything together

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod notify;
pub mod platform;
pub mod renderer;
pub mod shared;
pub mod sim;

pub use app::{LoopState, SessionSummary, run};
pub use config::GameConfig;
pub use error::{GameError, Result};
pub use shared::SharedState;

/// Game configuration defaults
///
/// These seed [`GameConfig::default`]; code reads the config, not these.
pub mod consts {
    /// Canvas dimensions (monochrome LCD)
    pub const SCREEN_WIDTH: i32 = 128;
    pub const SCREEN_HEIGHT: i32 = 64;

    /// Road lanes
    pub const ROAD_LEFT: i32 = 40;
    pub const ROAD_RIGHT: i32 = 72;
    pub const LANE_WIDTH: i32 = 16;
    pub const LANE_COUNT: usize = 3;

    /// Player box (top-left y is fixed)
    pub const PLAYER_Y: i32 = 54;
    pub const PLAYER_START_X: i32 = 56;

    /// Obstacles
    pub const OBSTACLE_COUNT: usize = 2;
    pub const OBSTACLE_WIDTH: i32 = 16;
    pub const OBSTACLE_HEIGHT: i32 = 10;
    /// Off-screen y an obstacle is parked at when (re)spawned
    pub const OBSTACLE_SPAWN_Y: i32 = -10;

    /// Obstacle speed curve (pixels per tick)
    pub const INITIAL_OBSTACLE_SPEED: i32 = 2;
    pub const SPEED_INCREMENT: i32 = 1;
    pub const MAX_SPEED: i32 = 6;
    pub const SPEED_STEP_SCORE: u32 = 50;

    /// Tick delay curve (milliseconds)
    pub const INITIAL_DELAY: u32 = 33;
    pub const DELAY_DECREMENT: u32 = 5;
    pub const MIN_DELAY: u32 = 16;
    pub const DELAY_STEP_SCORE: u32 = 100;

    /// Road dash animation
    pub const ROAD_SCROLL_STEP: i32 = 2;
    pub const ROAD_SCROLL_PERIOD: i32 = 12;

    /// Event queue
    pub const QUEUE_CAPACITY: usize = 8;
    pub const INPUT_TIMEOUT_MS: u64 = 100;
}
