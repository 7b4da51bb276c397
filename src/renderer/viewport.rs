//! Letterboxed mapping from the fixed playfield to a surface

use glam::Vec2;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Uniform scale plus centering offset that fits the playfield in a surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Surface size in pixels
    pub size: Vec2,
    /// Surface pixels per playfield unit
    pub scale: f32,
    /// Surface position of the playfield origin
    pub offset: Vec2,
}

impl Viewport {
    /// Fit the playfield into a `width` x `height` surface, preserving aspect
    pub fn fit(width: f32, height: f32) -> Self {
        let size = Vec2::new(width.max(1.0), height.max(1.0));
        let scale = (size.x / SCREEN_WIDTH).min(size.y / SCREEN_HEIGHT);
        let used = Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT) * scale;
        Self {
            size,
            scale,
            offset: (size - used) / 2.0,
        }
    }

    /// Playfield coordinates to surface pixels
    pub fn to_surface(&self, p: Vec2) -> Vec2 {
        self.offset + p * self.scale
    }

    /// Playfield coordinates to normalized device coordinates (y up)
    pub fn to_ndc(&self, p: Vec2) -> Vec2 {
        let s = self.to_surface(p) / self.size;
        Vec2::new(s.x * 2.0 - 1.0, 1.0 - s.y * 2.0)
    }
}
