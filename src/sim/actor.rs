//! The player character
//!
//! Simple kinematics: constant gravity, a terminal fall speed, a ceiling, and
//! a fixed upward impulse on input. Size state swaps the collision circle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Circle;
use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SizeState {
    #[default]
    Normal,
    /// Scaled up by ENLARGE_FACTOR after a Grow pickup
    Enlarged,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub pos: Vec2,
    spawn: Vec2,
    /// Only `vel.y` changes
    pub vel: Vec2,
    pub accel: Vec2,
    pub width: f32,
    pub height: f32,
    /// Visual tilt in degrees, derived from vertical speed
    pub rotation: f32,
    size: SizeState,
    alive: bool,
    area: Circle,
}

impl Actor {
    pub fn new(x: f32, y: f32) -> Self {
        let spawn = Vec2::new(x, y);
        let mut actor = Self {
            pos: spawn,
            spawn,
            vel: Vec2::ZERO,
            accel: Vec2::new(0.0, GRAVITY),
            width: ACTOR_SIZE,
            height: ACTOR_SIZE,
            rotation: 0.0,
            size: SizeState::Normal,
            alive: true,
            area: Circle::default(),
        };
        actor.refresh_area();
        actor
    }

    pub fn tick(&mut self, dt: f32) {
        self.vel += self.accel * dt;
        self.vel.y = self.vel.y.min(TERMINAL_VELOCITY);

        // Tilt up while rising, nose-dive when falling fast or dead
        if self.vel.y < 0.0 {
            self.rotation = (self.rotation - 600.0 * dt).max(-20.0);
        }
        if self.vel.y > 110.0 || !self.alive {
            self.rotation = (self.rotation + 480.0 * dt).min(90.0);
        }

        // The circle tracks the pose at the start of the step
        self.refresh_area();
        self.pos += self.vel * dt;

        if self.pos.y < CEILING_Y {
            self.pos.y = CEILING_Y;
            self.vel.y = 0.0;
        }
    }

    fn refresh_area(&mut self) {
        self.area = match self.size {
            SizeState::Normal => Circle::new(self.pos.x + 7.0, self.pos.y + 6.0, 5.0),
            SizeState::Enlarged => Circle::new(self.pos.x + 10.0, self.pos.y + 6.0, 7.5),
        };
    }

    /// Jump, if still alive. Returns whether the impulse was applied.
    pub fn on_input(&mut self) -> bool {
        if self.alive {
            self.vel.y = JUMP_VELOCITY;
        }
        self.alive
    }

    pub fn kill(&mut self) {
        self.alive = false;
        self.vel.y = 0.0;
    }

    /// Settle on the ground and stop falling
    pub fn decelerate(&mut self) {
        if self.vel.y == 0.0 {
            self.pos.y -= 5.0;
        }
        self.accel.y = 0.0;
        self.refresh_area();
    }

    pub fn enlarge(&mut self) {
        if self.size == SizeState::Enlarged {
            return;
        }
        self.width = (ACTOR_SIZE * ENLARGE_FACTOR).floor();
        self.height = (ACTOR_SIZE * ENLARGE_FACTOR).floor();
        self.size = SizeState::Enlarged;
        self.refresh_area();
    }

    pub fn normalize(&mut self) {
        if self.size == SizeState::Normal {
            return;
        }
        self.width = ACTOR_SIZE;
        self.height = ACTOR_SIZE;
        self.size = SizeState::Normal;
        self.refresh_area();
    }

    /// Back to the spawn pose
    pub fn restart(&mut self) {
        self.pos = self.spawn;
        self.vel = Vec2::ZERO;
        self.accel = Vec2::new(0.0, GRAVITY);
        self.rotation = 0.0;
        self.alive = true;
        self.normalize();
        self.refresh_area();
    }

    pub fn collision_area(&self) -> &Circle {
        &self.area
    }

    pub fn size(&self) -> SizeState {
        self.size
    }

    pub fn is_enlarged(&self) -> bool {
        self.size == SizeState::Enlarged
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Leading (right) edge
    pub fn right_x(&self) -> f32 {
        self.pos.x + self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn actor() -> Actor {
        Actor::new(ACTOR_X, 100.0)
    }

    #[test]
    fn test_gravity_accelerates_downward() {
        let mut a = actor();
        a.tick(0.1);
        assert!((a.vel.y - 46.0).abs() < 1e-4);
        assert!(a.pos.y > 100.0);
    }

    #[test]
    fn test_terminal_velocity() {
        let mut a = actor();
        for _ in 0..100 {
            a.tick(0.1);
        }
        assert_eq!(a.vel.y, TERMINAL_VELOCITY);
        assert_eq!(a.rotation, 90.0);
    }

    #[test]
    fn test_area_lags_pose_by_one_step() {
        let mut a = actor();
        a.tick(0.1);
        assert!(a.pos.y > 100.0);
        assert_eq!(a.collision_area().center.y, 106.0);

        let before = a.pos.y;
        a.tick(0.1);
        assert_eq!(a.collision_area().center.y, before + 6.0);
    }

    #[test]
    fn test_jump_and_ceiling() {
        let mut a = Actor::new(ACTOR_X, -5.0);
        assert!(a.on_input());
        a.tick(0.1);
        assert_eq!(a.pos.y, CEILING_Y);
        assert_eq!(a.vel.y, 0.0);
        assert!(a.rotation < 0.0 && a.rotation >= -20.0);
    }

    #[test]
    fn test_dead_actor_cannot_jump() {
        let mut a = actor();
        a.kill();
        assert!(!a.is_alive());
        assert!(!a.on_input());
        assert_eq!(a.vel.y, 0.0);
    }

    #[test]
    fn test_decelerate_freezes_fall() {
        let mut a = actor();
        a.kill();
        a.decelerate();
        assert_eq!(a.pos.y, 95.0);
        a.tick(0.1);
        assert_eq!(a.vel.y, 0.0);
        assert_eq!(a.pos.y, 95.0);
    }

    #[test]
    fn test_enlarge_is_idempotent() {
        let mut a = actor();
        a.enlarge();
        a.enlarge();
        assert_eq!(a.size(), SizeState::Enlarged);
        assert_eq!(a.width, 22.0);
        assert_eq!(a.right_x(), ACTOR_X + 22.0);
        assert_eq!(a.collision_area().radius, 7.5);
        assert_eq!(a.collision_area().center.x, ACTOR_X + 10.0);

        a.normalize();
        assert_eq!(a.width, ACTOR_SIZE);
        assert_eq!(a.collision_area().radius, 5.0);
    }

    #[test]
    fn test_restart_returns_to_spawn() {
        let mut a = actor();
        a.on_input();
        a.tick(0.1);
        a.enlarge();
        a.kill();
        a.decelerate();
        a.restart();
        assert_eq!(a, actor());
    }

    proptest! {
        #[test]
        fn prop_velocity_and_ceiling_bounds(
            steps in prop::collection::vec((0.0f32..0.15, any::<bool>()), 1..200)
        ) {
            let mut a = actor();
            for (dt, jump) in steps {
                if jump {
                    a.on_input();
                }
                a.tick(dt);
                prop_assert!(a.vel.y <= TERMINAL_VELOCITY);
                prop_assert!(a.pos.y >= CEILING_Y);
            }
        }
    }
}
