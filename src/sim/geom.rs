//! Axis-aligned rectangle geometry
//!
//! Screen space: x grows right, y grows down. A rect is stored by its
//! top-left corner and size.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(left, top),
            size: Vec2::new(width, height),
        }
    }

    /// Rect of `size` centered on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            min: center - size / 2.0,
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    /// Point containment, inclusive of the top/left edges
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }

    /// Strict overlap test: rects that only share an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Open-interval horizontal overlap
    pub fn overlaps_x(&self, left: f32, right: f32) -> bool {
        self.right() > left && self.left() < right
    }

    /// Same center and height, width multiplied by `factor`
    pub fn with_width_scaled(&self, factor: f32) -> Self {
        Self::from_center(self.center(), Vec2::new(self.size.x * factor, self.size.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_and_center() {
        let r = Rect::new(200.0, 550.0, 150.0, 10.0);
        assert_eq!(r.left(), 200.0);
        assert_eq!(r.right(), 350.0);
        assert_eq!(r.top(), 550.0);
        assert_eq!(r.bottom(), 560.0);
        assert_eq!(r.center(), Vec2::new(275.0, 555.0));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        let c = Rect::new(9.5, 9.5, 10.0, 10.0);
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&a));
    }

    #[test]
    fn test_contains_point() {
        let r = Rect::new(450.0, 300.0, 300.0, 60.0);
        assert!(r.contains_point(Vec2::new(450.0, 300.0)));
        assert!(r.contains_point(Vec2::new(600.0, 330.0)));
        assert!(!r.contains_point(Vec2::new(750.0, 330.0)));
        assert!(!r.contains_point(Vec2::new(600.0, 299.0)));
    }

    #[test]
    fn test_width_scaled_keeps_center_and_height() {
        let r = Rect::from_center(Vec2::new(100.0, 50.0), Vec2::new(40.0, 80.0));
        let shrunk = r.with_width_scaled(0.5);
        assert_eq!(shrunk.center(), r.center());
        assert_eq!(shrunk.size, Vec2::new(20.0, 80.0));
    }
}
