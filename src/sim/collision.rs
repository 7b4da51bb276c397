//! Axis-aligned collision detection between the bird and pipes

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bird::Bird;
use super::pipes::Pipe;

/// Axis-aligned rectangle in playfield coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Build from a top-left corner and a size
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Overlap test. Touching edges count as overlapping.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }
}

/// Whether the bird overlaps either half of a pipe
pub fn bird_hits_pipe(bird: &Bird, pipe: &Pipe) -> bool {
    let bounds = bird.bounds();
    bounds.intersects(&pipe.top_rect()) || bounds.intersects(&pipe.bottom_rect())
}

/// Index of the first pipe the bird overlaps, if any
pub fn first_collision<'a>(bird: &Bird, pipes: impl IntoIterator<Item = &'a Pipe>) -> Option<usize> {
    pipes.into_iter().position(|pipe| bird_hits_pipe(bird, pipe))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::from_pos_size(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_overlap() {
        assert!(rect(0.0, 0.0, 10.0, 10.0).intersects(&rect(5.0, 5.0, 10.0, 10.0)));
    }

    #[test]
    fn test_touching_edges_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&rect(10.0, 0.0, 5.0, 5.0)));
        assert!(a.intersects(&rect(0.0, 10.0, 5.0, 5.0)));
        // Corner touch
        assert!(a.intersects(&rect(10.0, 10.0, 5.0, 5.0)));
    }

    #[test]
    fn test_separated() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&rect(10.5, 0.0, 5.0, 5.0)));
        assert!(!a.intersects(&rect(0.0, -6.0, 5.0, 5.0)));
    }

    #[test]
    fn test_bird_in_gap_does_not_hit() {
        let bird = Bird::default(); // y = 300
        let pipe = Pipe::from_gap_center(BIRD_START_X - 40.0, 300.0);
        assert!(!bird_hits_pipe(&bird, &pipe));
    }

    #[test]
    fn test_bird_hits_top_pipe() {
        let mut bird = Bird::default();
        bird.pos.y = 220.0; // top pipe ends at 225
        let pipe = Pipe::from_gap_center(BIRD_START_X - 40.0, 300.0);
        assert!(bird_hits_pipe(&bird, &pipe));
    }

    #[test]
    fn test_bird_hits_bottom_pipe() {
        let mut bird = Bird::default();
        bird.pos.y = 365.0; // bottom edge 380, bottom pipe starts at 375
        let pipe = Pipe::from_gap_center(BIRD_START_X - 40.0, 300.0);
        assert!(bird_hits_pipe(&bird, &pipe));
    }

    #[test]
    fn test_first_collision_index() {
        let mut bird = Bird::default();
        bird.pos.y = 100.0;
        let far = Pipe::from_gap_center(600.0, 100.0);
        let near = Pipe::from_gap_center(BIRD_START_X, 400.0);
        assert_eq!(first_collision(&bird, [&far, &near]), Some(1));
        assert_eq!(first_collision(&bird, [&far]), None);
    }
}
