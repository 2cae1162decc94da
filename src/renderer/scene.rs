//! Scene projection: draws one frame of the game from a state snapshot

use glam::IVec2;

use super::canvas::{Align, Canvas, Color, Font};
use crate::config::GameConfig;
use crate::sim::GameState;

/// Number of centre-line dashes
const DASH_COUNT: i32 = 5;

/// Game-over modal placement
const MODAL_ORIGIN: IVec2 = IVec2::new(34, 20);
const MODAL_SIZE: IVec2 = IVec2::new(62, 24);
const MODAL_TITLE_POS: IVec2 = IVec2::new(37, 31);
const MODAL_SCORE_POS: IVec2 = IVec2::new(64, 41);

const SCORE_POS: IVec2 = IVec2::new(5, 10);

/// Draw the full scene. Never mutates the state.
pub fn draw(canvas: &mut impl Canvas, state: &GameState, config: &GameConfig) {
    let screen = canvas.size();
    let entity = IVec2::new(config.box_width, config.box_height);

    // Border
    canvas.draw_frame(IVec2::ZERO, screen);

    draw_road(canvas, state.road_offset, config);

    // Player
    canvas.draw_box(IVec2::new(state.player_x, config.player_y), entity);

    for obstacle in &state.obstacles {
        canvas.draw_box(IVec2::new(obstacle.x, obstacle.y), entity);
    }

    canvas.draw_str(SCORE_POS, &score_text(state.score));

    if state.game_over {
        draw_game_over(canvas, state.score);
    }
}

/// Two edges converging towards the top plus scrolling centre dashes
fn draw_road(canvas: &mut impl Canvas, road_offset: i32, config: &GameConfig) {
    let height = config.playfield_height;
    let width = config.screen_width;

    canvas.draw_line(IVec2::new(config.road_left, 0), IVec2::new(0, height));
    canvas.draw_line(
        IVec2::new(config.road_right + config.box_width, 0),
        IVec2::new(width, height),
    );

    let centre = width / 2;
    let spacing = config.road_scroll_period;
    let dash = spacing / 2;
    for i in 0..DASH_COUNT {
        let y = (height - i * spacing + road_offset).rem_euclid(height);
        canvas.draw_line(IVec2::new(centre, y), IVec2::new(centre, y - dash));
    }
}

fn draw_game_over(canvas: &mut impl Canvas, score: u32) {
    canvas.set_color(Color::White);
    canvas.draw_box(MODAL_ORIGIN, MODAL_SIZE);

    canvas.set_color(Color::Black);
    canvas.draw_frame(MODAL_ORIGIN, MODAL_SIZE);

    canvas.set_font(Font::Primary);
    canvas.draw_str(MODAL_TITLE_POS, "Game Over");

    canvas.set_font(Font::Secondary);
    canvas.draw_str_aligned(MODAL_SCORE_POS, Align::Center, Align::Bottom, &score_text(score));
}

fn score_text(score: u32) -> String {
    format!("Score: {score}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::FrameBuffer;
    use crate::sim::Obstacle;

    fn render(state: &GameState, config: &GameConfig) -> FrameBuffer {
        let mut fb = FrameBuffer::new(config.screen_width, config.playfield_height);
        draw(&mut fb, state, config);
        fb
    }

    fn texts(fb: &FrameBuffer) -> Vec<&str> {
        fb.labels().iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_player_and_obstacles_drawn() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config, 5);
        state.obstacles[0] = Obstacle { x: 40, y: 20 };
        state.obstacles[1] = Obstacle { x: 72, y: 30 };

        let fb = render(&state, &config);

        // Inner pixels of each box, away from road lines and dashes
        assert!(fb.pixel(58, 60));
        assert!(fb.pixel(45, 25));
        assert!(fb.pixel(80, 35));
        assert!(!fb.pixel(45, 35));
    }

    #[test]
    fn test_score_readout() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config, 5);
        state.score = 123;

        let fb = render(&state, &config);

        assert_eq!(texts(&fb), vec!["Score: 123"]);
        assert_eq!(fb.labels()[0].origin, IVec2::new(5, 3));
    }

    #[test]
    fn test_game_over_modal() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config, 5);
        state.score = 87;
        state.game_over = true;

        let fb = render(&state, &config);

        assert_eq!(texts(&fb), vec!["Score: 87", "Game Over", "Score: 87"]);
        assert_eq!(fb.labels()[1].font, Font::Primary);
        // Modal border lit, interior cleared over the road dashes
        assert!(fb.pixel(34, 20));
        assert!(fb.pixel(95, 43));
        assert!(!fb.pixel(64, 30));
    }

    #[test]
    fn test_dashes_scroll_with_offset() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config, 5);
        // Keep obstacles out of the way of the centre line
        state.obstacles = [Obstacle { x: 40, y: -10 }; 2];

        state.road_offset = 0;
        let still = render(&state, &config);
        state.road_offset = 6;
        let moved = render(&state, &config);

        let column = |fb: &FrameBuffer| (1..54).map(|y| fb.pixel(64, y)).collect::<Vec<_>>();
        assert_ne!(column(&still), column(&moved));
        // Dash from y=16 down to y=10 at offset 0
        assert!(still.pixel(64, 13));
        assert!(!still.pixel(64, 20));
    }

    #[test]
    fn test_render_does_not_mutate() {
        let config = GameConfig::default();
        let state = GameState::new(&config, 5);
        let before = state.clone();
        render(&state, &config);
        assert_eq!(state.obstacles, before.obstacles);
        assert_eq!(state.score, before.score);
    }
}
