//! Platform abstraction layer
//!
//! The game needs four things from its host:
//! - A display that can show a frame
//! - An input source feeding key events into the queue
//! - A notification service (sound, vibration, backlight)
//! - A telemetry sink for lifecycle events
//!
//! Handles returned by [`Platform`] are released when dropped.

pub mod terminal;

use serde::Serialize;

use crate::error::Result;
use crate::input::InputListener;
use crate::notify::Notifier;
use crate::renderer::FrameBuffer;

pub use terminal::TerminalPlatform;

/// Something that can show a finished frame
pub trait Display {
    fn present(&mut self, frame: &FrameBuffer) -> Result<()>;
}

/// Lifecycle events reported to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TelemetryEvent {
    GameStart,
}

impl TelemetryEvent {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{self:?}"))
    }
}

/// Host record registry
///
/// Every `open_*` is called once per process; a failure is fatal.
pub trait Platform {
    /// Keeps the input source attached while alive
    type Input;
    type Screen: Display;
    type Notification: Notifier;

    /// Start delivering key events to `listener`
    fn open_input(&mut self, listener: InputListener) -> Result<Self::Input>;

    fn open_display(&mut self) -> Result<Self::Screen>;

    fn open_notification(&mut self) -> Result<Self::Notification>;

    /// Fire-and-forget lifecycle report
    fn telemetry(&mut self, event: TelemetryEvent);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_telemetry_json() {
        assert_eq!(TelemetryEvent::GameStart.to_json(), r#"{"event":"game_start"}"#);
    }
}
