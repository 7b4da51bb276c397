//! CPU-side frame assembly
//!
//! Collects shapes as playfield-space triangles and text as runs the host
//! lays out itself (the web build uses a DOM overlay for text).

use glam::Vec2;

use super::shapes::{self, CIRCLE_SEGMENTS};
use super::vertex::Vertex;
use super::{Canvas, Color, TextAnchor};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// A positioned block of text
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub pos: Vec2,
    pub size: f32,
    pub color: Color,
    pub anchor: TextAnchor,
}

/// Canvas that records one frame for later upload
#[derive(Debug, Default)]
pub struct FrameBuilder {
    pub vertices: Vec<Vertex>,
    pub texts: Vec<TextRun>,
    presented: bool,
}

impl FrameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `present` has been called since the last `clear`
    pub fn is_presented(&self) -> bool {
        self.presented
    }
}

impl Canvas for FrameBuilder {
    fn clear(&mut self, color: Color) {
        self.vertices.clear();
        self.texts.clear();
        self.presented = false;
        // Background fills the playfield only; the host clears the letterbox
        self.vertices.extend(shapes::rect(
            Vec2::ZERO,
            Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            color,
        ));
    }

    fn rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.vertices.extend(shapes::rect(pos, size, color));
    }

    fn circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.vertices
            .extend(shapes::circle(center, radius, color, CIRCLE_SEGMENTS));
    }

    fn text(&mut self, text: &str, pos: Vec2, size: f32, color: Color, anchor: TextAnchor) {
        self.texts.push(TextRun {
            text: text.to_string(),
            pos,
            size,
            color,
            anchor,
        });
    }

    fn present(&mut self) {
        self.presented = true;
    }
}
