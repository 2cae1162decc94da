//! Game loop
//!
//! Starting → Looping → Stopping. Each loop iteration waits briefly for one
//! key event, advances the simulation one tick under the state lock, plays
//! any resulting cues, redraws and then sleeps for the current tick delay.

use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError};
use serde::Serialize;

use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::input::{InputEvent, event_queue};
use crate::notify::{
    Notifier, SEQUENCE_BACKLIGHT_ENFORCE_AUTO, SEQUENCE_BACKLIGHT_ENFORCE_ON, SEQUENCE_FAIL,
    SEQUENCE_OBSTACLE,
};
use crate::platform::{Display, Platform, TelemetryEvent};
use crate::renderer::ViewPort;
use crate::shared::SharedState;
use crate::sim::{Command, CommandEffect, GameEvent, GameState, TickReport, step};

/// Process-level lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Starting,
    Looping,
    Stopping,
}

/// What happened over one process run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    /// Loop iterations executed
    pub ticks: u64,
    /// Runs restarted with Confirm
    pub restarts: u32,
    /// Score on screen when the loop stopped
    pub final_score: u32,
    /// Highest score reached by any run
    pub best_score: u32,
    /// Whether the last run had ended
    pub game_over: bool,
}

/// Run the game until the player presses Back
pub fn run<P: Platform>(platform: &mut P, config: GameConfig) -> Result<SessionSummary> {
    run_with_seed(platform, config, rand::random())
}

/// [`run`] with a fixed obstacle lane seed
pub fn run_with_seed<P: Platform>(
    platform: &mut P,
    config: GameConfig,
    seed: u64,
) -> Result<SessionSummary> {
    log::info!("{:?}: Flip 4 Speed (seed {seed})", LoopState::Starting);
    log::debug!("config: {}", config.to_json());

    let (listener, events) = event_queue(config.queue_capacity);
    let state = SharedState::new(GameState::new(&config, seed));
    let mut view_port = ViewPort::new(state.clone(), config.clone());
    let mut game_loop = GameLoop {
        state,
        events,
        config,
        summary: SessionSummary::default(),
    };

    let mut display = platform.open_display()?;
    let input = platform.open_input(listener)?;
    let mut notifier = match platform.open_notification() {
        Ok(notifier) => notifier,
        Err(e) => {
            // Close the queue before the input handle joins its producer
            drop(game_loop);
            return Err(e);
        }
    };

    notifier.message_block(SEQUENCE_BACKLIGHT_ENFORCE_ON);
    platform.telemetry(TelemetryEvent::GameStart);

    let result = game_loop.run(&mut view_port, &mut display, &mut notifier);

    log::info!("{:?}", LoopState::Stopping);
    notifier.message(SEQUENCE_BACKLIGHT_ENFORCE_AUTO);

    // Close the queue first so a producer blocked on a full queue wakes up
    let summary = game_loop.finish();
    drop(input);
    drop(display);
    drop(notifier);

    result.map(|()| summary)
}

/// Loop-owned pieces: the consumer end of the queue and the state handle
struct GameLoop {
    state: SharedState,
    events: Receiver<InputEvent>,
    config: GameConfig,
    summary: SessionSummary,
}

impl GameLoop {
    fn run(
        &mut self,
        view_port: &mut ViewPort,
        display: &mut impl Display,
        notifier: &mut impl Notifier,
    ) -> Result<()> {
        log::info!("{:?}", LoopState::Looping);

        loop {
            // Wait outside the lock
            let command = match self.events.recv_timeout(self.config.input_timeout()) {
                Ok(event) => Command::from_event(&event),
                Err(RecvTimeoutError::Timeout) => None,
                Err(RecvTimeoutError::Disconnected) => return Err(GameError::InputClosed),
            };

            let (report, delay_ms) = self.state.with(|state| {
                let report = step(state, command, &self.config);
                self.summary.final_score = state.score;
                self.summary.game_over = state.game_over;
                (report, state.game_delay)
            });
            self.record(&report);
            self.dispatch(&report, notifier);

            view_port.update(display)?;
            thread::sleep(Duration::from_millis(delay_ms as u64));

            if report.effect == CommandEffect::Quit {
                return Ok(());
            }
        }
    }

    fn record(&mut self, report: &TickReport) {
        self.summary.ticks += 1;
        self.summary.best_score = self.summary.best_score.max(self.summary.final_score);
        match report.effect {
            CommandEffect::Restarted => {
                self.summary.restarts += 1;
                log::info!("Run restarted");
            }
            CommandEffect::Quit => log::info!("Back pressed, leaving"),
            _ => {}
        }
        log::trace!(
            "tick {} score {} events {:?}",
            self.summary.ticks,
            self.summary.final_score,
            report.events
        );
    }

    /// Turn simulation events into notifications, in emission order
    fn dispatch(&self, report: &TickReport, notifier: &mut impl Notifier) {
        for event in &report.events {
            match *event {
                GameEvent::ObstaclePassed { .. } => notifier.message(SEQUENCE_OBSTACLE),
                GameEvent::Crashed { index } => {
                    log::info!(
                        "Game over: obstacle {index} hit, score {}",
                        self.summary.final_score
                    );
                    notifier.message_block(SEQUENCE_FAIL);
                }
                GameEvent::SpeedUp { speed } => log::debug!("Obstacle speed {speed}"),
                GameEvent::DelayDown { delay_ms } => log::debug!("Tick delay {delay_ms} ms"),
            }
        }
    }

    /// Drop the queue and hand back the summary
    fn finish(self) -> SessionSummary {
        self.summary
    }
}
