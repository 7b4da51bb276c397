//! Per-frame driver
//!
//! One call to [`App::frame`] reads the clock once, drains input, advances
//! the simulation and draws. Hosts (the browser loop, the headless runner)
//! own the clock, event source and canvas.

use serde::Serialize;

use crate::autopilot::Autopilot;
use crate::platform::{Clock, EventQueue, EventSource, FixedClock, FrameEvent, Key};
use crate::renderer::{Canvas, FrameBuilder, draw_scene};
use crate::sim::{Command, GameEvent, GamePhase, GameState, TickInput, tick};

/// Map a key to the command it triggers
pub fn command_for_key(key: Key) -> Option<Command> {
    match key {
        Key::Space => Some(Command::Flap),
        Key::R => Some(Command::Restart),
        Key::Other => None,
    }
}

/// Game session plus run flag
pub struct App {
    pub state: GameState,
    running: bool,
}

impl App {
    pub fn new(seed: u64) -> Self {
        log::info!("New session with seed {}", seed);
        Self {
            state: GameState::new(seed),
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Run one frame. Returns false once the window has been closed.
    pub fn frame(
        &mut self,
        clock: &mut impl Clock,
        events: &mut impl EventSource,
        canvas: &mut impl Canvas,
    ) -> bool {
        if !self.running {
            return false;
        }

        let dt = clock.restart();

        let mut input = TickInput::default();
        for event in events.poll_events() {
            match event {
                FrameEvent::WindowClosed => {
                    log::info!("Window closed, final score {}", self.state.score);
                    self.running = false;
                    return false;
                }
                FrameEvent::KeyPressed(key) => input.commands.extend(command_for_key(key)),
            }
        }

        tick(&mut self.state, &input, dt);
        log_events(&self.state.events);

        draw_scene(&self.state, canvas);
        true
    }
}

fn log_events(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::Flapped | GameEvent::PipePruned => log::trace!("{:?}", event),
            GameEvent::PipeSpawned | GameEvent::HitCeiling => log::debug!("{:?}", event),
            GameEvent::HitFloor => log::info!("Bird hit the floor"),
            GameEvent::HitPipe => log::info!("Bird hit a pipe"),
            GameEvent::Scored { score } => log::info!("Score: {}", score),
            GameEvent::GameOver { score } => log::info!("Game over with score {}", score),
            GameEvent::Restarted => log::info!("Restarted"),
        }
    }
}

/// Outcome of a headless run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub seed: u64,
    pub frames: u64,
    pub score: u32,
    pub phase: GamePhase,
    pub state: GameState,
}

/// Play one session with the autopilot at a fixed step until game over
/// or `max_frames`, drawing into an offscreen frame
pub fn run_headless(seed: u64, max_frames: u64, dt: f32) -> RunSummary {
    let mut app = App::new(seed);
    let mut clock = FixedClock::new(dt);
    let queue = EventQueue::new();
    let mut events = queue.clone();
    let mut canvas = FrameBuilder::new();
    let pilot = Autopilot;

    let mut frames = 0;
    loop {
        if frames >= max_frames || app.state.phase == GamePhase::GameOver {
            queue.push(FrameEvent::WindowClosed);
        } else if pilot.wants_flap(&app.state) {
            queue.push(FrameEvent::KeyPressed(Key::Space));
        }

        if !app.frame(&mut clock, &mut events, &mut canvas) {
            break;
        }
        frames += 1;
    }

    RunSummary {
        seed,
        frames,
        score: app.state.score,
        phase: app.state.phase,
        state: app.state.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn step(app: &mut App, queue: &EventQueue, events: &[FrameEvent]) -> bool {
        for &e in events {
            queue.push(e);
        }
        let mut source = queue.clone();
        let mut canvas = FrameBuilder::new();
        let keep = app.frame(&mut FixedClock::new(1.0 / 60.0), &mut source, &mut canvas);
        if keep {
            assert!(canvas.is_presented());
        }
        keep
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(command_for_key(Key::Space), Some(Command::Flap));
        assert_eq!(command_for_key(Key::R), Some(Command::Restart));
        assert_eq!(command_for_key(Key::Other), None);
    }

    #[test]
    fn test_space_flaps() {
        let mut app = App::new(1);
        let queue = EventQueue::new();
        assert!(step(&mut app, &queue, &[FrameEvent::KeyPressed(Key::Space)]));
        assert!(app.state.bird.vel_y < 0.0);
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut app = App::new(1);
        let queue = EventQueue::new();
        step(&mut app, &queue, &[FrameEvent::KeyPressed(Key::Other)]);
        assert!(app.state.bird.vel_y > 0.0);
        assert!(!app.state.events.contains(&GameEvent::Flapped));
    }

    #[test]
    fn test_window_closed_stops() {
        let mut app = App::new(1);
        let queue = EventQueue::new();
        assert!(!step(&mut app, &queue, &[FrameEvent::WindowClosed]));
        assert!(!app.is_running());
        assert_eq!(app.state.time_ticks, 0);
        assert!(!step(&mut app, &queue, &[]));
    }

    #[test]
    fn test_restart_key_after_game_over() {
        let mut app = App::new(1);
        let queue = EventQueue::new();
        app.state.bird.pos.y = SCREEN_HEIGHT - BIRD_RADIUS;
        app.state.bird.vel_y = 200.0;
        step(&mut app, &queue, &[]);
        assert_eq!(app.state.phase, GamePhase::GameOver);

        step(&mut app, &queue, &[FrameEvent::KeyPressed(Key::R)]);
        assert_eq!(app.state.phase, GamePhase::Playing);
        assert_eq!(app.state.score, 0);
    }

    #[test]
    fn test_headless_run_is_deterministic() {
        let a = run_headless(2024, 3_000, 1.0 / 60.0);
        let b = run_headless(2024, 3_000, 1.0 / 60.0);
        assert_eq!(a.frames, b.frames);
        assert_eq!(a.score, b.score);
        assert_eq!(a.phase, b.phase);
        assert!(a.frames <= 3_000);
    }

    #[test]
    fn test_headless_summary_serializes() {
        let summary = run_headless(7, 1_200, 1.0 / 60.0);
        assert!(summary.frames > 0);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["seed"], 7);
        assert!(json["state"]["bird"].is_object());
    }
}
