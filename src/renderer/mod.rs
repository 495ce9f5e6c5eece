//! Rendering module
//!
//! The game draws through the `Surface` trait: filled rects, text and
//! sprites. The web build renders to a Canvas2D context; everything else
//! (headless demo, tests) records a `DrawList`.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod draw_list;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use draw_list::{DrawCommand, DrawList};

use glam::Vec2;

use crate::sim::Rect;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 200, 0);

    /// CSS color string
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Where a string is placed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextAnchor {
    /// Top-left corner of the text box
    TopLeft(Vec2),
    /// Center of the text box
    Center(Vec2),
}

/// A drawing target
pub trait Surface {
    /// Clear the whole surface to one color
    fn fill(&mut self, color: Color);
    fn draw_rect(&mut self, rect: Rect, color: Color);
    /// `size` is the font size in pixels
    fn draw_text(&mut self, text: &str, anchor: TextAnchor, color: Color, size: f32);
    /// Draw a sprite centered on `center`
    fn draw_sprite(&mut self, sprite: &str, center: Vec2);
}
