//! Flappy - a one-button side-scrolling arcade game
//!
//! Core modules:
//! - `sim`: Frame simulation (bird physics, pipe queue, collisions, session state)
//! - `renderer`: Canvas abstraction, scene drawing and the WebGPU pipeline
//! - `platform`: Frame clock, input events and startup errors
//! - `app`: Per-frame driver tying the platform, simulation and renderer together
//! - `autopilot`: Scripted player for headless runs

pub mod app;
pub mod autopilot;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use app::App;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels, origin top-left, y grows downward)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Bird defaults
    pub const BIRD_RADIUS: f32 = 15.0;
    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f32 = 1100.0;
    /// Vertical velocity set by a flap (negative is up)
    pub const FLAP_IMPULSE: f32 = -350.0;
    /// Bird spawn point: quarter width, vertically centered
    pub const BIRD_START_X: f32 = SCREEN_WIDTH / 4.0;
    pub const BIRD_START_Y: f32 = SCREEN_HEIGHT / 2.0;

    /// Pipe defaults
    pub const PIPE_WIDTH: f32 = 80.0;
    /// Vertical opening between top and bottom pipe
    pub const PIPE_GAP: f32 = 150.0;
    /// Horizontal scroll speed (pixels/s)
    pub const PIPE_SPEED: f32 = 200.0;
    /// Seconds between pipe spawns
    pub const PIPE_SPAWN_INTERVAL: f32 = 1.8;
    /// Keeps gaps away from the top and bottom edges
    pub const PIPE_EDGE_MARGIN: f32 = 50.0;

    /// Frame rate the tuning above targets
    pub const TARGET_FPS: u32 = 60;
}
