//! Shared kinematic state for everything that scrolls
//!
//! Obstacles and pickups both embed a [`Scroll`]: leftward motion at a
//! controllable speed, an optional bounded vertical drift ("shift"), and the
//! reset/restart lifecycle used to recycle pool slots.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SCROLL_SPEED, MAX_SHIFT};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scroll {
    pub pos: Vec2,
    /// Only `vel.x` is ever non-zero
    pub vel: Vec2,
    pub width: i32,
    pub height: i32,
    /// Resting y the shift oscillates away from
    pub baseline_y: f32,
    /// Drift amplitude, kept within 0..=MAX_SHIFT
    pub shift_amount: f32,
    pub shifting: bool,
    /// false while drifting away from the baseline, true while returning
    pub shift_returning: bool,
    /// Set once the object's rightmost extent has left the screen
    pub finished: bool,
    /// Visual rotation in degrees (renderer-only)
    pub rotation: f32,
}

impl Scroll {
    pub fn new(x: f32, y: f32, width: i32, height: i32, speed: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            vel: Vec2::new(speed, 0.0),
            width,
            height,
            baseline_y: y,
            shift_amount: 0.0,
            shifting: false,
            shift_returning: false,
            finished: false,
            rotation: 0.0,
        }
    }

    /// Advance position and drift
    pub fn tick(&mut self, dt: f32) {
        self.pos += self.vel * dt;

        if !self.shifting {
            return;
        }
        let step = self.shift_amount * dt;
        if !self.shift_returning {
            if (self.pos.y - self.baseline_y).floor() <= self.shift_amount {
                self.pos.y += step;
            } else {
                self.shift_returning = true;
            }
        } else if self.pos.y.floor() > self.baseline_y.floor() {
            self.pos.y -= step;
        } else {
            self.shift_returning = false;
        }
    }

    /// Move the slot to `new_x` and put it back in play
    pub fn reset(&mut self, new_x: f32) {
        self.pos.x = new_x;
        self.finished = false;
    }

    /// Return speed and drift to their construction values
    ///
    /// Callers follow up with [`Scroll::reset`] to place the slot.
    pub fn restart(&mut self, speed: f32) {
        self.vel.x = speed;
        self.pos.y = self.baseline_y;
        self.shifting = false;
        self.shift_returning = false;
        self.shift_amount = 0.0;
        self.rotation = 0.0;
    }

    /// Speed up (positive delta) or slow down (negative delta)
    ///
    /// Only increases in magnitude are capped; once at the cap a speed-up is a
    /// no-op while a slow-down still applies. Objects never scroll rightward.
    pub fn modify_speed(&mut self, delta: f32) {
        if delta < 0.0 || self.vel.x > -MAX_SCROLL_SPEED {
            self.vel.x = (self.vel.x - delta).clamp(-MAX_SCROLL_SPEED, 0.0);
        }
    }

    /// Start drifting and grow (or shrink) the drift amplitude
    pub fn shift(&mut self, delta: f32) {
        self.shifting = true;
        self.shift_amount = (self.shift_amount + delta).clamp(0.0, MAX_SHIFT);
    }

    pub fn stop(&mut self) {
        self.vel.x = 0.0;
    }

    pub fn rotate(&mut self, degrees: f32) {
        self.rotation += degrees;
    }

    #[inline]
    pub fn left_x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right_x(&self) -> f32 {
        self.pos.x + self.width as f32
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.x
    }
}
