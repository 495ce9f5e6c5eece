//! Recording surface
//!
//! Stores every draw call so frames can be inspected without a window.

use glam::Vec2;

use super::{Color, Surface, TextAnchor};
use crate::sim::Rect;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Fill(Color),
    Rect(Rect, Color),
    Text {
        text: String,
        anchor: TextAnchor,
        color: Color,
        size: f32,
    },
    Sprite {
        sprite: String,
        center: Vec2,
    },
}

/// A frame's worth of draw calls
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// All text strings, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// All sprite identifiers, in draw order
    pub fn sprites(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Sprite { sprite, .. } => Some(sprite.as_str()),
            _ => None,
        })
    }

    /// True if any text contains `needle`
    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }
}

impl Surface for DrawList {
    fn fill(&mut self, color: Color) {
        self.commands.push(DrawCommand::Fill(color));
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect(rect, color));
    }

    fn draw_text(&mut self, text: &str, anchor: TextAnchor, color: Color, size: f32) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            anchor,
            color,
            size,
        });
    }

    fn draw_sprite(&mut self, sprite: &str, center: Vec2) {
        self.commands.push(DrawCommand::Sprite {
            sprite: sprite.to_string(),
            center,
        });
    }
}
