//! Fixed-interval simulation tick
//!
//! Applies at most one player command, then advances the world one step.

use super::collision::{hits_player, passed_bottom};
use super::state::GameState;
use crate::config::GameConfig;
use crate::consts::OBSTACLE_COUNT;

/// Player commands, already filtered down from raw key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    MoveLeft,
    MoveRight,
    /// Restart after game over
    Confirm,
    /// Leave the game; handled by the loop, not the state
    Cancel,
    /// Reserved
    Up,
    /// Reserved
    Down,
}

/// What a command did to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommandEffect {
    /// No command, or a command that does nothing right now
    #[default]
    Ignored,
    /// Player changed lane
    Moved,
    /// A finished run was reset
    Restarted,
    /// The loop should stop after this iteration
    Quit,
}

/// Things that happened during a tick, in the order they happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Obstacle scrolled off the bottom and was recycled
    ObstaclePassed { index: usize },
    /// Obstacle hit the player; the run is over
    Crashed { index: usize },
    /// Obstacles got faster
    SpeedUp { speed: i32 },
    /// Ticks got shorter
    DelayDown { delay_ms: u32 },
}

/// Outcome of one loop iteration's worth of simulation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    pub effect: CommandEffect,
    pub events: Vec<GameEvent>,
}

impl TickReport {
    /// True if this tick ended the run
    pub fn crashed(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, GameEvent::Crashed { .. }))
    }
}

/// Apply one player command
///
/// Movement only works while a run is live; Confirm only while it is over.
pub fn apply_command(state: &mut GameState, command: Command, config: &GameConfig) -> CommandEffect {
    match command {
        Command::Cancel => CommandEffect::Quit,
        Command::Confirm if state.game_over => {
            state.reset(config);
            CommandEffect::Restarted
        }
        _ if state.game_over => CommandEffect::Ignored,
        Command::MoveRight if state.player_x < config.road_right => {
            state.player_x += config.lane_width;
            CommandEffect::Moved
        }
        Command::MoveLeft if state.player_x > config.road_left => {
            state.player_x -= config.lane_width;
            CommandEffect::Moved
        }
        _ => CommandEffect::Ignored,
    }
}

/// Advance the game state by one tick
///
/// Obstacles are processed in index order and the first collision ends the
/// tick: later obstacles are neither moved nor checked, and difficulty does
/// not escalate.
pub fn tick(state: &mut GameState, config: &GameConfig) -> TickReport {
    let mut report = TickReport::default();

    // Frozen until restarted
    if state.game_over {
        return report;
    }

    state.road_offset = (state.road_offset + config.road_scroll_step) % config.road_scroll_period;
    state.score = state.score.saturating_add(1);

    for index in 0..OBSTACLE_COUNT {
        state.obstacles[index].y += state.obstacle_speed;

        if passed_bottom(&state.obstacles[index], config) {
            state.reset_obstacle(index, config);
            report.events.push(GameEvent::ObstaclePassed { index });
        }

        if hits_player(&state.obstacles[index], state.player_x, config) {
            state.game_over = true;
            report.events.push(GameEvent::Crashed { index });
            return report;
        }
    }

    escalate(state, config, &mut report);
    report
}

/// Apply at most one command, then run exactly one tick
pub fn step(state: &mut GameState, command: Option<Command>, config: &GameConfig) -> TickReport {
    let effect = command
        .map(|c| apply_command(state, c, config))
        .unwrap_or_default();
    let mut report = tick(state, config);
    report.effect = effect;
    report
}

/// Speed and delay thresholds, checked against the new score
fn escalate(state: &mut GameState, config: &GameConfig, report: &mut TickReport) {
    if state.score % config.speed_step_score == 0 && state.obstacle_speed < config.max_speed {
        state.obstacle_speed = (state.obstacle_speed + config.speed_increment).min(config.max_speed);
        report.events.push(GameEvent::SpeedUp {
            speed: state.obstacle_speed,
        });
    }

    if state.score % config.delay_step_score == 0 && state.game_delay > config.min_delay_ms {
        state.game_delay = state
            .game_delay
            .saturating_sub(config.delay_decrement_ms)
            .max(config.min_delay_ms);
        report.events.push(GameEvent::DelayDown {
            delay_ms: state.game_delay,
        });
    }
}
