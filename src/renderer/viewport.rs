//! Redraw glue between the shared state and the display

use super::canvas::Canvas;
use super::framebuffer::FrameBuffer;
use super::scene;
use crate::config::GameConfig;
use crate::error::Result;
use crate::platform::Display;
use crate::shared::SharedState;

/// Owns the frame and redraws it from the shared state on request
pub struct ViewPort {
    state: SharedState,
    config: GameConfig,
    frame: FrameBuffer,
}

impl ViewPort {
    pub fn new(state: SharedState, config: GameConfig) -> Self {
        let frame = FrameBuffer::new(config.screen_width, config.playfield_height);
        Self {
            state,
            config,
            frame,
        }
    }

    /// Redraw from the current state and present it
    ///
    /// The state lock is held only while drawing into the frame, not while
    /// the display pushes pixels.
    pub fn update(&mut self, display: &mut impl Display) -> Result<()> {
        {
            let state = self.state.lock();
            self.frame.clear();
            scene::draw(&mut self.frame, &state, &self.config);
        }
        display.present(&self.frame)
    }

    /// Last drawn frame
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;

    #[derive(Default)]
    struct Recorder {
        presented: Vec<FrameBuffer>,
    }

    impl Display for Recorder {
        fn present(&mut self, frame: &FrameBuffer) -> Result<()> {
            self.presented.push(frame.clone());
            Ok(())
        }
    }

    #[test]
    fn test_update_presents_current_state() {
        let config = GameConfig::default();
        let state = SharedState::new(GameState::new(&config, 5));
        let mut view_port = ViewPort::new(state.clone(), config.clone());
        let mut display = Recorder::default();

        view_port.update(&mut display).unwrap();
        state.with(|s| s.player_x = config.lanes()[2]);
        view_port.update(&mut display).unwrap();

        assert_eq!(display.presented.len(), 2);
        assert_eq!(&display.presented[1], view_port.frame());
        // Player box followed the state into the right lane
        assert!(!display.presented[0].pixel(config.lanes()[2] + 2, config.player_y + 4));
        assert!(view_port.frame().pixel(config.lanes()[2] + 2, config.player_y + 4));
    }
}
