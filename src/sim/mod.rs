//! Simulation module
//!
//! All gameplay logic lives here. This module stays free of platform calls:
//! - One fixed step per loop iteration
//! - Seeded RNG only
//! - Stable obstacle order (by index)
//! - Side effects are reported as events, never performed

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{hits_player, passed_bottom};
pub use state::{GameState, Obstacle};
pub use tick::{Command, CommandEffect, GameEvent, TickReport, apply_command, step, tick};
