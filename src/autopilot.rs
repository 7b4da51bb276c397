//! Simple scripted player used by the headless runner
//!
//! Steers toward the gap of the next pipe the bird has not passed yet,
//! flapping whenever the bird is falling below that gap.

use crate::sim::{GamePhase, GameState};

/// How far below the target height the bird may sink before flapping
const FLAP_SLACK: f32 = 10.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct Autopilot;

impl Autopilot {
    /// Height the bird should hold right now
    pub fn target_height(&self, state: &GameState) -> f32 {
        let bird_left = state.bird.pos.x - state.bird.radius;
        state
            .pipes
            .iter()
            .find(|p| p.right_edge() >= bird_left)
            .map(|p| (p.top_height + p.bottom_y) / 2.0)
            .unwrap_or(crate::consts::SCREEN_HEIGHT / 2.0)
    }

    /// Whether to flap this frame
    pub fn wants_flap(&self, state: &GameState) -> bool {
        state.phase == GamePhase::Playing
            && state.bird.vel_y >= 0.0
            && state.bird.pos.y > self.target_height(state) + FLAP_SLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::Pipe;

    #[test]
    fn test_targets_next_unpassed_gap() {
        let mut state = GameState::new(1);
        state.pipes.push(Pipe::from_gap_center(0.0, 150.0)); // already passed
        state.pipes.push(Pipe::from_gap_center(400.0, 420.0));
        assert!((Autopilot.target_height(&state) - 420.0).abs() < 1e-3);
    }

    #[test]
    fn test_defaults_to_screen_center() {
        let state = GameState::new(1);
        assert_eq!(Autopilot.target_height(&state), SCREEN_HEIGHT / 2.0);
    }

    #[test]
    fn test_flaps_only_when_falling_below_target() {
        let mut state = GameState::new(1);
        state.bird.pos.y = 400.0;
        state.bird.vel_y = 50.0;
        assert!(Autopilot.wants_flap(&state));

        state.bird.vel_y = -50.0;
        assert!(!Autopilot.wants_flap(&state));

        state.bird.vel_y = 50.0;
        state.bird.pos.y = 250.0;
        assert!(!Autopilot.wants_flap(&state));

        state.bird.pos.y = 400.0;
        state.phase = GamePhase::GameOver;
        assert!(!Autopilot.wants_flap(&state));
    }
}
