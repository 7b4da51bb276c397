//! Session state and core simulation types

use serde::{Deserialize, Serialize};

use super::bird::Bird;
use super::pipes::PipeQueue;
use super::rng::GapRng;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Bird is flying, pipes are scrolling
    Playing,
    /// Run ended, waiting for restart
    GameOver,
}

/// Something notable that happened during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Flapped,
    PipeSpawned,
    PipePruned,
    /// One or more pipes passed; carries the new total
    Scored { score: u32 },
    HitCeiling,
    HitFloor,
    HitPipe,
    GameOver { score: u32 },
    Restarted,
}

/// Complete session state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub score: u32,
    pub bird: Bird,
    pub pipes: PipeQueue,
    /// Simulated Playing frames since the last (re)start
    pub time_ticks: u64,
    /// Events produced by the most recent frame
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Gap RNG, seeded once and kept across restarts
    #[serde(skip)]
    pub rng: GapRng,
}

impl GameState {
    /// Create a fresh session with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self {
            phase: GamePhase::Playing,
            score: 0,
            bird: Bird::default(),
            pipes: PipeQueue::new(),
            time_ticks: 0,
            events: Vec::new(),
            rng: GapRng::new(seed),
        }
    }

    /// Back to the initial layout without reseeding
    pub fn restart(&mut self) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.bird = Bird::default();
        self.pipes.reset();
        self.time_ticks = 0;
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.bird.pos.x, SCREEN_WIDTH / 4.0);
        assert_eq!(state.bird.pos.y, SCREEN_HEIGHT / 2.0);
        assert_eq!(state.bird.vel_y, 0.0);
        assert!(state.pipes.is_empty());
        assert_eq!(state.pipes.spawn_timer(), PIPE_SPAWN_INTERVAL);
    }

    #[test]
    fn test_restart_keeps_seed() {
        let mut state = GameState::new(99);
        state.score = 12;
        state.phase = GamePhase::GameOver;
        state.restart();
        assert_eq!(state.seed(), 99);
        assert_eq!(state.score, 0);
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_serializes_without_rng() {
        let state = GameState::new(5);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["phase"], "Playing");
        assert_eq!(json["score"], 0);
        assert!(json.get("rng").is_none());
        assert!(json.get("events").is_none());
    }
}
