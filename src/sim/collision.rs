//! Collision shapes and overlap tests
//!
//! Everything in the game collides as either an axis-aligned rectangle or a
//! circle. The actor is always a circle, so only circle/rect and
//! circle/circle tests are needed.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle anchored at its top-left corner (y grows downward)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Closest point inside the rectangle to `p`
    #[inline]
    pub fn clamp_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.x, self.x + self.width),
            p.y.clamp(self.y, self.y + self.height),
        )
    }
}

/// Circle given by center and radius
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            center: Vec2::new(x, y),
            radius,
        }
    }

    /// Rightmost x reached by the circle
    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.radius
    }

    /// True if the circle overlaps the rectangle
    ///
    /// Uses the closest point on the rectangle; touching does not count.
    pub fn overlaps_rect(&self, rect: &Rect) -> bool {
        let closest = rect.clamp_point(self.center);
        self.center.distance_squared(closest) < self.radius * self.radius
    }

    /// True if the two circles overlap (touching does not count)
    pub fn overlaps_circle(&self, other: &Circle) -> bool {
        let reach = self.radius + other.radius;
        self.center.distance_squared(other.center) < reach * reach
    }

    pub fn overlaps(&self, shape: &Shape) -> bool {
        match shape {
            Shape::Rect(rect) => self.overlaps_rect(rect),
            Shape::Circle(circle) => self.overlaps_circle(circle),
        }
    }
}

/// A single collision primitive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rect(Rect),
    Circle(Circle),
}
