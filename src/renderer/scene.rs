//! What a frame of the game looks like

use glam::Vec2;

use super::vertex::colors;
use super::{Canvas, TextAnchor};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::{GamePhase, GameState};

pub const SCORE_TEXT_POS: Vec2 = Vec2::new(20.0, 10.0);
pub const SCORE_TEXT_SIZE: f32 = 40.0;
pub const GAME_OVER_TEXT: &str = "Game Over!\nPress R to Restart";
pub const GAME_OVER_TEXT_SIZE: f32 = 60.0;

/// Draw the session: sky, pipes, bird, score and the game-over banner
pub fn draw_scene(state: &GameState, canvas: &mut impl Canvas) {
    canvas.clear(colors::SKY);

    for pipe in state.pipes.iter() {
        let r = pipe.top_rect();
        canvas.rect(r.min, r.size(), colors::PIPE);
    }
    for pipe in state.pipes.iter() {
        let r = pipe.bottom_rect();
        canvas.rect(r.min, r.size(), colors::PIPE);
    }

    canvas.circle(state.bird.pos, state.bird.radius, colors::BIRD);

    canvas.text(
        &format!("Score: {}", state.score),
        SCORE_TEXT_POS,
        SCORE_TEXT_SIZE,
        colors::SCORE_TEXT,
        TextAnchor::TopLeft,
    );

    if state.phase == GamePhase::GameOver {
        canvas.text(
            GAME_OVER_TEXT,
            Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0),
            GAME_OVER_TEXT_SIZE,
            colors::GAME_OVER_TEXT,
            TextAnchor::Center,
        );
    }

    canvas.present();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Color;
    use crate::sim::Pipe;

    #[derive(Debug, PartialEq)]
    enum Call {
        Clear,
        Rect(Vec2, Vec2),
        Circle(Vec2, f32),
        Text(String),
        Present,
    }

    #[derive(Default)]
    struct Recorder(Vec<Call>);

    impl Canvas for Recorder {
        fn clear(&mut self, _color: Color) {
            self.0.push(Call::Clear);
        }
        fn rect(&mut self, pos: Vec2, size: Vec2, _color: Color) {
            self.0.push(Call::Rect(pos, size));
        }
        fn circle(&mut self, center: Vec2, radius: f32, _color: Color) {
            self.0.push(Call::Circle(center, radius));
        }
        fn text(&mut self, text: &str, _pos: Vec2, _size: f32, _color: Color, _anchor: TextAnchor) {
            self.0.push(Call::Text(text.to_string()));
        }
        fn present(&mut self) {
            self.0.push(Call::Present);
        }
    }

    #[test]
    fn test_playing_scene() {
        let mut state = GameState::new(1);
        state.pipes.push(Pipe::from_gap_center(500.0, 300.0));
        state.score = 3;

        let mut canvas = Recorder::default();
        draw_scene(&state, &mut canvas);

        assert_eq!(
            canvas.0,
            vec![
                Call::Clear,
                Call::Rect(Vec2::new(500.0, 0.0), Vec2::new(80.0, 225.0)),
                Call::Rect(Vec2::new(500.0, 375.0), Vec2::new(80.0, 225.0)),
                Call::Circle(state.bird.pos, 15.0),
                Call::Text("Score: 3".to_string()),
                Call::Present,
            ]
        );
    }

    #[test]
    fn test_game_over_banner() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::GameOver;

        let mut canvas = Recorder::default();
        draw_scene(&state, &mut canvas);

        assert!(canvas.0.contains(&Call::Text(GAME_OVER_TEXT.to_string())));
        assert_eq!(canvas.0.last(), Some(&Call::Present));
    }

    #[test]
    fn test_tops_before_bottoms() {
        let mut state = GameState::new(1);
        state.pipes.push(Pipe::from_gap_center(300.0, 300.0));
        state.pipes.push(Pipe::from_gap_center(600.0, 300.0));

        let mut canvas = Recorder::default();
        draw_scene(&state, &mut canvas);

        let ys: Vec<f32> = canvas
            .0
            .iter()
            .filter_map(|c| match c {
                Call::Rect(pos, _) => Some(pos.y),
                _ => None,
            })
            .collect();
        assert_eq!(ys, vec![0.0, 0.0, 375.0, 375.0]);
    }
}
