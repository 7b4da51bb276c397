//! Frame simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - Frame time is passed in, never read
//! - Randomness only through a seeded `RangeSource`
//! - Pipes kept in spawn order

pub mod bird;
pub mod collision;
pub mod pipes;
pub mod rng;
pub mod state;
pub mod tick;

pub use bird::{Bird, BoundsContact};
pub use collision::{Rect, bird_hits_pipe, first_collision};
pub use pipes::{Pipe, PipeQueue, gap_center_range};
pub use rng::{GapRng, RangeSource};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{Command, TickInput, tick};
