//! The player-controlled bird

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// Result of clamping the bird to the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsContact {
    /// Bird is inside the playfield
    None,
    /// Bird touched the top edge (clamped, play continues)
    Ceiling,
    /// Bird touched the bottom edge (clamped, run ends)
    Floor,
}

impl BoundsContact {
    /// Floor contact ends the run; ceiling contact does not
    pub fn is_terminal(self) -> bool {
        self == BoundsContact::Floor
    }
}

/// The bird entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Center position
    pub pos: Vec2,
    /// Vertical velocity (pixels/s, positive is down)
    pub vel_y: f32,
    pub radius: f32,
}

impl Default for Bird {
    fn default() -> Self {
        Self {
            pos: Vec2::new(BIRD_START_X, BIRD_START_Y),
            vel_y: 0.0,
            radius: BIRD_RADIUS,
        }
    }
}

impl Bird {
    /// Set upward velocity. Repeated flaps reset rather than stack.
    pub fn flap(&mut self) {
        self.vel_y = FLAP_IMPULSE;
    }

    /// Semi-implicit Euler step under gravity
    pub fn integrate(&mut self, dt: f32) {
        self.vel_y += GRAVITY * dt;
        self.pos.y += self.vel_y * dt;
    }

    /// Clamp to `[radius, screen_height - radius]`, zeroing velocity on contact
    pub fn clamp_to_bounds(&mut self, screen_height: f32) -> BoundsContact {
        if self.pos.y - self.radius < 0.0 {
            self.pos.y = self.radius;
            self.vel_y = 0.0;
            return BoundsContact::Ceiling;
        }
        if self.pos.y + self.radius > screen_height {
            self.pos.y = screen_height - self.radius;
            self.vel_y = 0.0;
            return BoundsContact::Floor;
        }
        BoundsContact::None
    }

    /// Axis-aligned bounding square of the bird's circle
    pub fn bounds(&self) -> Rect {
        let half = Vec2::splat(self.radius);
        Rect::new(self.pos - half, self.pos + half)
    }
}
