//! Canvas2D surface for the web build
//!
//! Sprites are loaded lazily from `images/<id>.png` and drawn once the
//! browser has decoded them; until then a placeholder box is drawn.

use std::collections::HashMap;

use glam::Vec2;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use super::{Color, Surface, TextAnchor};
use crate::sim::Rect;

/// Placeholder size while an image is loading or missing
const PLACEHOLDER_SIZE: f64 = 32.0;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    images: HashMap<String, Option<HtmlImageElement>>,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self {
            ctx,
            images: HashMap::new(),
        }
    }

    fn image(&mut self, sprite: &str) -> Option<&HtmlImageElement> {
        self.images
            .entry(sprite.to_string())
            .or_insert_with(|| match HtmlImageElement::new() {
                Ok(img) => {
                    img.set_src(&format!("images/{sprite}.png"));
                    Some(img)
                }
                Err(e) => {
                    log::warn!("Failed to create image for {sprite}: {e:?}");
                    None
                }
            })
            .as_ref()
    }
}

impl Surface for CanvasSurface {
    fn fill(&mut self, color: Color) {
        let canvas = self.ctx.canvas();
        let (w, h) = canvas
            .map(|c| (c.width() as f64, c.height() as f64))
            .unwrap_or((0.0, 0.0));
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(0.0, 0.0, w, h);
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(
            rect.left() as f64,
            rect.top() as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn draw_text(&mut self, text: &str, anchor: TextAnchor, color: Color, size: f32) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.set_font(&format!("{}px sans-serif", size.round()));
        let pos = match anchor {
            TextAnchor::TopLeft(p) => {
                self.ctx.set_text_align("left");
                self.ctx.set_text_baseline("top");
                p
            }
            TextAnchor::Center(p) => {
                self.ctx.set_text_align("center");
                self.ctx.set_text_baseline("middle");
                p
            }
        };
        let _ = self.ctx.fill_text(text, pos.x as f64, pos.y as f64);
    }

    fn draw_sprite(&mut self, sprite: &str, center: Vec2) {
        let ctx = self.ctx.clone();
        let loaded = self
            .image(sprite)
            .filter(|img| img.complete() && img.natural_width() > 0)
            .cloned();

        match loaded {
            Some(img) => {
                let w = img.natural_width() as f64;
                let h = img.natural_height() as f64;
                let _ = ctx.draw_image_with_html_image_element(
                    &img,
                    center.x as f64 - w / 2.0,
                    center.y as f64 - h / 2.0,
                );
            }
            None => {
                ctx.set_fill_style_str("rgb(255, 0, 255)");
                ctx.fill_rect(
                    center.x as f64 - PLACEHOLDER_SIZE / 2.0,
                    center.y as f64 - PLACEHOLDER_SIZE / 2.0,
                    PLACEHOLDER_SIZE,
                    PLACEHOLDER_SIZE,
                );
            }
        }
    }
}
