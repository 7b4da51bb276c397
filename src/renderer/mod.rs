//! Rendering module
//!
//! The game draws through the `Canvas` trait. `FrameBuilder` tessellates a
//! frame into vertices and text runs; `RenderState` uploads those to WebGPU.

pub mod frame;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;
pub mod viewport;

pub use frame::{FrameBuilder, TextRun};
pub use pipeline::RenderState;
pub use scene::draw_scene;
pub use viewport::Viewport;

use glam::Vec2;

/// Linear RGBA
pub type Color = [f32; 4];

/// Which point of a text block `pos` refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    TopLeft,
    Center,
}

/// Drawing surface for one frame: `clear`, any number of draws, then `present`
pub trait Canvas {
    fn clear(&mut self, color: Color);
    /// Filled rectangle from its top-left corner
    fn rect(&mut self, pos: Vec2, size: Vec2, color: Color);
    fn circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// Text block; `\n` starts a new line
    fn text(&mut self, text: &str, pos: Vec2, size: f32, color: Color, anchor: TextAnchor);
    fn present(&mut self);
}
