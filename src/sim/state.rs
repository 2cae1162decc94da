//! Game state and core simulation types
//!
//! One `GameState` lives for the whole process; restarting a run resets it
//! in place.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::GameConfig;
use crate::consts::{LANE_COUNT, OBSTACLE_COUNT};

/// An obstacle box descending one of the lanes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Obstacle {
    /// Lane x (top-left)
    pub x: i32,
    /// Top edge; negative while still above the screen
    pub y: i32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Road dash animation phase, cycles in `[0, road_scroll_period)`
    pub road_offset: i32,
    /// Player lane x
    pub player_x: i32,
    /// Obstacles in evaluation order
    pub obstacles: [Obstacle; OBSTACLE_COUNT],
    /// Ticks survived this run
    pub score: u32,
    /// Run ended by a collision
    pub game_over: bool,
    /// Pixels every obstacle falls per tick
    pub obstacle_speed: i32,
    /// Milliseconds the loop sleeps between ticks
    pub game_delay: u32,
    /// Lane picker for recycled obstacles
    rng: Pcg32,
}

impl GameState {
    /// Create a fresh run with the given lane seed
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        let mut state = Self {
            road_offset: 0,
            player_x: config.player_start_x(),
            obstacles: [Obstacle {
                x: config.road_left,
                y: config.obstacle_spawn_y,
            }; OBSTACLE_COUNT],
            score: 0,
            game_over: false,
            obstacle_speed: config.initial_speed,
            game_delay: config.initial_delay_ms,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.reset(config);
        state
    }

    /// Reset to session-start values (used on launch and on restart)
    ///
    /// The road animation phase is left alone so the dashes keep scrolling
    /// smoothly across a restart.
    pub fn reset(&mut self, config: &GameConfig) {
        self.player_x = config.player_start_x();
        self.score = 0;
        self.game_over = false;
        self.obstacle_speed = config.initial_speed;
        self.game_delay = config.initial_delay_ms;
        for index in 0..OBSTACLE_COUNT {
            self.reset_obstacle(index, config);
        }
    }

    /// Park obstacle `index` above the screen in a random lane
    pub fn reset_obstacle(&mut self, index: usize, config: &GameConfig) {
        let lane = self.rng.random_range(0..LANE_COUNT);
        self.obstacles[index] = Obstacle {
            x: config.lanes()[lane],
            y: config.obstacle_spawn_y,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_matches_session_start() {
        let config = GameConfig::default();
        let state = GameState::new(&config, 7);

        assert_eq!(state.player_x, 56);
        assert_eq!(state.score, 0);
        assert!(!state.game_over);
        assert_eq!(state.obstacle_speed, 2);
        assert_eq!(state.game_delay, 33);
        assert_eq!(state.road_offset, 0);
        for obstacle in &state.obstacles {
            assert_eq!(obstacle.y, -10);
            assert!(config.lane_of(obstacle.x).is_some());
        }
    }

    #[test]
    fn test_reset_obstacle_uses_every_lane() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config, 99);
        let mut seen = [false; LANE_COUNT];

        for _ in 0..200 {
            state.obstacles[1] = Obstacle { x: 0, y: 40 };
            state.reset_obstacle(1, &config);
            assert_eq!(state.obstacles[1].y, -10);
            let lane = config.lane_of(state.obstacles[1].x).expect("obstacle off lane");
            seen[lane] = true;
        }

        assert_eq!(seen, [true; LANE_COUNT]);
    }

    #[test]
    fn test_same_seed_same_lanes() {
        let config = GameConfig::default();
        let a = GameState::new(&config, 1234);
        let b = GameState::new(&config, 1234);
        assert_eq!(a.obstacles, b.obstacles);
    }

    #[test]
    fn test_reset_keeps_road_phase() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config, 3);
        state.road_offset = 8;
        state.score = 420;
        state.game_over = true;
        state.obstacle_speed = 6;
        state.game_delay = 16;
        state.player_x = 72;

        state.reset(&config);

        assert_eq!(state.road_offset, 8);
        assert_eq!(state.score, 0);
        assert!(!state.game_over);
        assert_eq!(state.obstacle_speed, 2);
        assert_eq!(state.game_delay, 33);
        assert_eq!(state.player_x, 56);
    }
}
