//! Pipe pairs and the scrolling pipe queue
//!
//! Pipes are kept oldest-first. Every pipe spawns at the right edge and all
//! pipes scroll at the same speed, so the front of the queue is always the
//! leftmost pipe and is the only one that ever needs pruning.

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::rng::RangeSource;
use crate::consts::*;

/// One top+bottom pipe pair sharing a horizontal position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    /// Left edge of both rectangles
    pub x: f32,
    /// Height of the top rectangle (it starts at y = 0)
    pub top_height: f32,
    /// Top edge of the bottom rectangle
    pub bottom_y: f32,
    /// Height of the bottom rectangle (it ends at the screen bottom)
    pub bottom_height: f32,
    /// Whether passing this pipe has been counted
    pub scored: bool,
}

impl Pipe {
    /// Build a pipe whose gap is centered on `gap_center`
    pub fn from_gap_center(x: f32, gap_center: f32) -> Self {
        let top_height = gap_center - PIPE_GAP / 2.0;
        let bottom_y = top_height + PIPE_GAP;
        Self {
            x,
            top_height,
            bottom_y,
            bottom_height: SCREEN_HEIGHT - bottom_y,
            scored: false,
        }
    }

    pub fn right_edge(&self) -> f32 {
        self.x + PIPE_WIDTH
    }

    pub fn top_rect(&self) -> Rect {
        Rect::from_pos_size(Vec2::new(self.x, 0.0), Vec2::new(PIPE_WIDTH, self.top_height))
    }

    pub fn bottom_rect(&self) -> Rect {
        Rect::from_pos_size(
            Vec2::new(self.x, self.bottom_y),
            Vec2::new(PIPE_WIDTH, self.bottom_height),
        )
    }
}

/// Range the gap center is drawn from
pub fn gap_center_range() -> (f32, f32) {
    let half_gap = PIPE_GAP / 2.0;
    (
        half_gap + PIPE_EDGE_MARGIN,
        SCREEN_HEIGHT - half_gap - PIPE_EDGE_MARGIN,
    )
}

/// Ordered pipes plus the spawn countdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipeQueue {
    pipes: VecDeque<Pipe>,
    /// Seconds accumulated toward the next spawn
    spawn_timer: f32,
}

impl Default for PipeQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl PipeQueue {
    /// Empty queue with the timer primed so the first tick spawns
    pub fn new() -> Self {
        Self {
            pipes: VecDeque::new(),
            spawn_timer: PIPE_SPAWN_INTERVAL,
        }
    }

    /// Clear all pipes and re-prime the spawn timer
    pub fn reset(&mut self) {
        self.pipes.clear();
        self.spawn_timer = PIPE_SPAWN_INTERVAL;
    }

    pub fn len(&self) -> usize {
        self.pipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }

    pub fn front(&self) -> Option<&Pipe> {
        self.pipes.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pipe> {
        self.pipes.iter()
    }

    pub fn spawn_timer(&self) -> f32 {
        self.spawn_timer
    }

    /// Append a pipe at the back. It must not be left of the current back.
    pub fn push(&mut self, pipe: Pipe) {
        debug_assert!(
            self.pipes.back().is_none_or(|back| back.x <= pipe.x),
            "pipes must be pushed in x order"
        );
        self.pipes.push_back(pipe);
    }

    /// Advance the spawn countdown; spawns and returns true when it is due
    pub fn tick(&mut self, dt: f32, rng: &mut impl RangeSource) -> bool {
        self.spawn_timer += dt;
        if self.spawn_timer >= PIPE_SPAWN_INTERVAL {
            self.spawn_timer = 0.0;
            self.spawn(rng);
            true
        } else {
            false
        }
    }

    /// Spawn a pipe at the right edge with a random gap
    pub fn spawn(&mut self, rng: &mut impl RangeSource) {
        let (min, max) = gap_center_range();
        let gap_center = rng.sample(min, max);
        self.push(Pipe::from_gap_center(SCREEN_WIDTH, gap_center));
    }

    /// Scroll every pipe left
    pub fn advance(&mut self, dt: f32) {
        let dx = PIPE_SPEED * dt;
        for pipe in &mut self.pipes {
            pipe.x -= dx;
        }
    }

    /// Remove the front pipe once it is fully off the left edge
    pub fn prune_front(&mut self) -> Option<Pipe> {
        if self.pipes.front()?.right_edge() < 0.0 {
            self.pipes.pop_front()
        } else {
            None
        }
    }

    /// Mark pipes the bird has fully passed; returns how many were newly scored
    pub fn evaluate_scoring(&mut self, bird_x: f32, bird_radius: f32) -> u32 {
        let bird_left = bird_x - bird_radius;
        let mut count = 0;
        for pipe in self.pipes.iter_mut().filter(|p| !p.scored) {
            if pipe.right_edge() < bird_left {
                pipe.scored = true;
                count += 1;
            }
        }
        count
    }
}
