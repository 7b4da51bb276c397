//! Per-frame simulation step
//!
//! Frame order: commands → bird integration → bounds clamp → pipe
//! spawn/scroll/prune → scoring → collision. Scoring runs before the
//! collision check, so a pipe passed in the frame that ends the run still
//! counts.

use super::bird::BoundsContact;
use super::collision::first_collision;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Player command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Upward impulse (Playing only)
    Flap,
    /// Start a new run (GameOver only)
    Restart,
}

/// Input commands for a single frame, in arrival order
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub commands: Vec<Command>,
}

impl TickInput {
    pub fn flap() -> Self {
        Self {
            commands: vec![Command::Flap],
        }
    }

    pub fn restart() -> Self {
        Self {
            commands: vec![Command::Restart],
        }
    }
}

/// Apply one command against the current phase
fn apply_command(state: &mut GameState, command: Command) {
    match (state.phase, command) {
        (GamePhase::Playing, Command::Flap) => {
            state.bird.flap();
            state.events.push(GameEvent::Flapped);
        }
        (GamePhase::GameOver, Command::Restart) => {
            state.restart();
            state.events.push(GameEvent::Restarted);
        }
        _ => {}
    }
}

/// Advance the session by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    for &command in &input.commands {
        apply_command(state, command);
    }

    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;

    state.bird.integrate(dt);
    let contact = state.bird.clamp_to_bounds(SCREEN_HEIGHT);
    if contact.is_terminal() {
        state.events.push(GameEvent::HitFloor);
    } else if contact == BoundsContact::Ceiling {
        state.events.push(GameEvent::HitCeiling);
    }

    if state.pipes.tick(dt, &mut state.rng) {
        state.events.push(GameEvent::PipeSpawned);
    }
    state.pipes.advance(dt);
    if state.pipes.prune_front().is_some() {
        state.events.push(GameEvent::PipePruned);
    }

    let passed = state
        .pipes
        .evaluate_scoring(state.bird.pos.x, state.bird.radius);
    if passed > 0 {
        state.score += passed;
        state.events.push(GameEvent::Scored { score: state.score });
    }

    let hit_pipe = first_collision(&state.bird, state.pipes.iter()).is_some();
    if hit_pipe {
        state.events.push(GameEvent::HitPipe);
    }

    if contact.is_terminal() || hit_pipe {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver { score: state.score });
    }
}
